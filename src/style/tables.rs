//! Literal character tables.
//!
//! Each alphabet lists replacements in `A..Z`, `a..z`, `0..9` order. The
//! mathematical alphabets follow the U+1D400 block; letters the block leaves
//! out live in Letterlike Symbols (U+2100) and are spliced in at their
//! positions, e.g. double-struck `C` is U+2102 and italic `h` is U+210E.
//!
//! Where Unicode has no styled form for a letter, the table repeats the plain
//! letter so every alphabet stays positionally aligned.

use super::charmap::CharacterMap;

pub(crate) const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub(crate) const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub(crate) const DIGITS: &str = "0123456789";

/// Styled replacements for the Latin letters and, optionally, the digits.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Alphabet {
    pub upper: &'static str,
    pub lower: &'static str,
    pub digits: Option<&'static str>,
}

impl Alphabet {
    pub(crate) fn to_map(self) -> CharacterMap {
        let map = CharacterMap::new()
            .zip(UPPER, self.upper)
            .zip(LOWER, self.lower);
        match self.digits {
            Some(digits) => map.zip(DIGITS, digits),
            None => map,
        }
    }
}

// Bold & Italic

pub(crate) const BOLD_SERIF: Alphabet = Alphabet {
    upper: "𝐀𝐁𝐂𝐃𝐄𝐅𝐆𝐇𝐈𝐉𝐊𝐋𝐌𝐍𝐎𝐏𝐐𝐑𝐒𝐓𝐔𝐕𝐖𝐗𝐘𝐙",
    lower: "𝐚𝐛𝐜𝐝𝐞𝐟𝐠𝐡𝐢𝐣𝐤𝐥𝐦𝐧𝐨𝐩𝐪𝐫𝐬𝐭𝐮𝐯𝐰𝐱𝐲𝐳",
    digits: Some("𝟎𝟏𝟐𝟑𝟒𝟓𝟔𝟕𝟖𝟗"),
};

pub(crate) const BOLD_SANS: Alphabet = Alphabet {
    upper: "𝗔𝗕𝗖𝗗𝗘𝗙𝗚𝗛𝗜𝗝𝗞𝗟𝗠𝗡𝗢𝗣𝗤𝗥𝗦𝗧𝗨𝗩𝗪𝗫𝗬𝗭",
    lower: "𝗮𝗯𝗰𝗱𝗲𝗳𝗴𝗵𝗶𝗷𝗸𝗹𝗺𝗻𝗼𝗽𝗾𝗿𝘀𝘁𝘂𝘃𝘄𝘅𝘆𝘇",
    digits: Some("𝟬𝟭𝟮𝟯𝟰𝟱𝟲𝟳𝟴𝟵"),
};

pub(crate) const BOLD_ITALIC_SERIF: Alphabet = Alphabet {
    upper: "𝑨𝑩𝑪𝑫𝑬𝑭𝑮𝑯𝑰𝑱𝑲𝑳𝑴𝑵𝑶𝑷𝑸𝑹𝑺𝑻𝑼𝑽𝑾𝑿𝒀𝒁",
    lower: "𝒂𝒃𝒄𝒅𝒆𝒇𝒈𝒉𝒊𝒋𝒌𝒍𝒎𝒏𝒐𝒑𝒒𝒓𝒔𝒕𝒖𝒗𝒘𝒙𝒚𝒛",
    digits: None,
};

pub(crate) const BOLD_ITALIC_SANS: Alphabet = Alphabet {
    upper: "𝘼𝘽𝘾𝘿𝙀𝙁𝙂𝙃𝙄𝙅𝙆𝙇𝙈𝙉𝙊𝙋𝙌𝙍𝙎𝙏𝙐𝙑𝙒𝙓𝙔𝙕",
    lower: "𝙖𝙗𝙘𝙙𝙚𝙛𝙜𝙝𝙞𝙟𝙠𝙡𝙢𝙣𝙤𝙥𝙦𝙧𝙨𝙩𝙪𝙫𝙬𝙭𝙮𝙯",
    digits: None,
};

pub(crate) const ITALIC_SERIF: Alphabet = Alphabet {
    upper: "𝐴𝐵𝐶𝐷𝐸𝐹𝐺𝐻𝐼𝐽𝐾𝐿𝑀𝑁𝑂𝑃𝑄𝑅𝑆𝑇𝑈𝑉𝑊𝑋𝑌𝑍",
    lower: "𝑎𝑏𝑐𝑑𝑒𝑓𝑔ℎ𝑖𝑗𝑘𝑙𝑚𝑛𝑜𝑝𝑞𝑟𝑠𝑡𝑢𝑣𝑤𝑥𝑦𝑧",
    digits: None,
};

pub(crate) const ITALIC_SANS: Alphabet = Alphabet {
    upper: "𝘈𝘉𝘊𝘋𝘌𝘍𝘎𝘏𝘐𝘑𝘒𝘓𝘔𝘕𝘖𝘗𝘘𝘙𝘚𝘛𝘜𝘝𝘞𝘟𝘠𝘡",
    lower: "𝘢𝘣𝘤𝘥𝘦𝘧𝘨𝘩𝘪𝘫𝘬𝘭𝘮𝘯𝘰𝘱𝘲𝘳𝘴𝘵𝘶𝘷𝘸𝘹𝘺𝘻",
    digits: None,
};

// Special Unicode

pub(crate) const BOLD_FRAKTUR: Alphabet = Alphabet {
    upper: "𝕬𝕭𝕮𝕯𝕰𝕱𝕲𝕳𝕴𝕵𝕶𝕷𝕸𝕹𝕺𝕻𝕼𝕽𝕾𝕿𝖀𝖁𝖂𝖃𝖄𝖅",
    lower: "𝖆𝖇𝖈𝖉𝖊𝖋𝖌𝖍𝖎𝖏𝖐𝖑𝖒𝖓𝖔𝖕𝖖𝖗𝖘𝖙𝖚𝖛𝖜𝖝𝖞𝖟",
    digits: None,
};

pub(crate) const DOUBLE_STRUCK: Alphabet = Alphabet {
    upper: "𝔸𝔹ℂ𝔻𝔼𝔽𝔾ℍ𝕀𝕁𝕂𝕃𝕄ℕ𝕆ℙℚℝ𝕊𝕋𝕌𝕍𝕎𝕏𝕐ℤ",
    lower: "𝕒𝕓𝕔𝕕𝕖𝕗𝕘𝕙𝕚𝕛𝕜𝕝𝕞𝕟𝕠𝕡𝕢𝕣𝕤𝕥𝕦𝕧𝕨𝕩𝕪𝕫",
    digits: Some("𝟘𝟙𝟚𝟛𝟜𝟝𝟞𝟟𝟠𝟡"),
};

pub(crate) const SCRIPT: Alphabet = Alphabet {
    upper: "𝒜ℬ𝒞𝒟ℰℱ𝒢ℋℐ𝒥𝒦ℒℳ𝒩𝒪𝒫𝒬ℛ𝒮𝒯𝒰𝒱𝒲𝒳𝒴𝒵",
    lower: "𝒶𝒷𝒸𝒹ℯ𝒻ℊ𝒽𝒾𝒿𝓀𝓁𝓂𝓃ℴ𝓅𝓆𝓇𝓈𝓉𝓊𝓋𝓌𝓍𝓎𝓏",
    digits: None,
};

pub(crate) const BOLD_SCRIPT: Alphabet = Alphabet {
    upper: "𝓐𝓑𝓒𝓓𝓔𝓕𝓖𝓗𝓘𝓙𝓚𝓛𝓜𝓝𝓞𝓟𝓠𝓡𝓢𝓣𝓤𝓥𝓦𝓧𝓨𝓩",
    lower: "𝓪𝓫𝓬𝓭𝓮𝓯𝓰𝓱𝓲𝓳𝓴𝓵𝓶𝓷𝓸𝓹𝓺𝓻𝓼𝓽𝓾𝓿𝔀𝔁𝔂𝔃",
    digits: None,
};

pub(crate) const FRAKTUR: Alphabet = Alphabet {
    upper: "𝔄𝔅ℭ𝔇𝔈𝔉𝔊ℌℑ𝔍𝔎𝔏𝔐𝔑𝔒𝔓𝔔ℜ𝔖𝔗𝔘𝔙𝔚𝔛𝔜ℨ",
    lower: "𝔞𝔟𝔠𝔡𝔢𝔣𝔤𝔥𝔦𝔧𝔨𝔩𝔪𝔫𝔬𝔭𝔮𝔯𝔰𝔱𝔲𝔳𝔴𝔵𝔶𝔷",
    digits: None,
};

pub(crate) const MONOSPACE: Alphabet = Alphabet {
    upper: "𝙰𝙱𝙲𝙳𝙴𝙵𝙶𝙷𝙸𝙹𝙺𝙻𝙼𝙽𝙾𝙿𝚀𝚁𝚂𝚃𝚄𝚅𝚆𝚇𝚈𝚉",
    lower: "𝚊𝚋𝚌𝚍𝚎𝚏𝚐𝚑𝚒𝚓𝚔𝚕𝚖𝚗𝚘𝚙𝚚𝚛𝚜𝚝𝚞𝚟𝚠𝚡𝚢𝚣",
    digits: Some("𝟶𝟷𝟸𝟹𝟺𝟻𝟼𝟽𝟾𝟿"),
};

// Decorative

pub(crate) const CIRCLED: Alphabet = Alphabet {
    upper: "ⒶⒷⒸⒹⒺⒻⒼⒽⒾⒿⓀⓁⓂⓃⓄⓅⓆⓇⓈⓉⓊⓋⓌⓍⓎⓏ",
    lower: "ⓐⓑⓒⓓⓔⓕⓖⓗⓘⓙⓚⓛⓜⓝⓞⓟⓠⓡⓢⓣⓤⓥⓦⓧⓨⓩ",
    digits: Some("⓪①②③④⑤⑥⑦⑧⑨"),
};

// The squared blocks only exist as capitals; lowercase input shares them.
pub(crate) const SQUARED: Alphabet = Alphabet {
    upper: "🄰🄱🄲🄳🄴🄵🄶🄷🄸🄹🄺🄻🄼🄽🄾🄿🅀🅁🅂🅃🅄🅅🅆🅇🅈🅉",
    lower: "🄰🄱🄲🄳🄴🄵🄶🄷🄸🄹🄺🄻🄼🄽🄾🄿🅀🅁🅂🅃🅄🅅🅆🅇🅈🅉",
    digits: None,
};

pub(crate) const NEGATIVE_SQUARED: Alphabet = Alphabet {
    upper: "🅰🅱🅲🅳🅴🅵🅶🅷🅸🅹🅺🅻🅼🅽🅾🅿🆀🆁🆂🆃🆄🆅🆆🆇🆈🆉",
    lower: "🅰🅱🅲🅳🅴🅵🅶🅷🅸🅹🅺🅻🅼🅽🅾🅿🆀🆁🆂🆃🆄🆅🆆🆇🆈🆉",
    digits: None,
};

// Fun & Creative

pub(crate) const SMALL_CAPS: Alphabet = Alphabet {
    upper: "ᴀʙᴄᴅᴇꜰɢʜɪᴊᴋʟᴍɴᴏᴘǫʀꜱᴛᴜᴠᴡxʏᴢ",
    lower: "ᴀʙᴄᴅᴇꜰɢʜɪᴊᴋʟᴍɴᴏᴘǫʀꜱᴛᴜᴠᴡxʏᴢ",
    digits: None,
};

pub(crate) const SUPERSCRIPT: Alphabet = Alphabet {
    upper: "ᴬᴮᶜᴰᴱᶠᴳᴴᴵᴶᴷᴸᴹᴺᴼᴾ𐞥ᴿˢᵀᵁⱽᵂˣʸᶻ",
    lower: "ᵃᵇᶜᵈᵉᶠᵍʰⁱʲᵏˡᵐⁿᵒᵖ𐞥ʳˢᵗᵘᵛʷˣʸᶻ",
    digits: Some("⁰¹²³⁴⁵⁶⁷⁸⁹"),
};

pub(crate) const SUPERSCRIPT_SIGNS: &[(char, &str)] =
    &[('+', "⁺"), ('-', "⁻"), ('=', "⁼"), ('(', "⁽"), (')', "⁾")];

// Only seventeen Latin letters have subscript forms; capitals use them too.
pub(crate) const SUBSCRIPT: Alphabet = Alphabet {
    upper: "ₐBCDₑFGₕᵢⱼₖₗₘₙₒₚQᵣₛₜᵤᵥWₓYZ",
    lower: "ₐbcdₑfgₕᵢⱼₖₗₘₙₒₚqᵣₛₜᵤᵥwₓyz",
    digits: Some("₀₁₂₃₄₅₆₇₈₉"),
};

pub(crate) const SUBSCRIPT_SIGNS: &[(char, &str)] =
    &[('+', "₊"), ('-', "₋"), ('=', "₌"), ('(', "₍"), (')', "₎")];

pub(crate) const FULLWIDTH: Alphabet = Alphabet {
    upper: "ＡＢＣＤＥＦＧＨＩＪＫＬＭＮＯＰＱＲＳＴＵＶＷＸＹＺ",
    lower: "ａｂｃｄｅｆｇｈｉｊｋｌｍｎｏｐｑｒｓｔｕｖｗｘｙｚ",
    digits: Some("０１２３４５６７８９"),
};

/// ASCII punctuation and its fullwidth forms (U+FF01..U+FF5E), plus the ideographic space.
pub(crate) const FULLWIDTH_PUNCTUATION_SOURCE: &str = " !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
pub(crate) const FULLWIDTH_PUNCTUATION: &str =
    "\u{3000}！＂＃＄％＆＇（）＊＋，－．／：；＜＝＞？＠［＼］＾＿｀｛｜｝～";

pub(crate) const REGIONAL_INDICATOR: Alphabet = Alphabet {
    upper: "🇦🇧🇨🇩🇪🇫🇬🇭🇮🇯🇰🇱🇲🇳🇴🇵🇶🇷🇸🇹🇺🇻🇼🇽🇾🇿",
    lower: "🇦🇧🇨🇩🇪🇫🇬🇭🇮🇯🇰🇱🇲🇳🇴🇵🇶🇷🇸🇹🇺🇻🇼🇽🇾🇿",
    digits: None,
};

// Mathematical

pub(crate) const SANS_SERIF: Alphabet = Alphabet {
    upper: "𝖠𝖡𝖢𝖣𝖤𝖥𝖦𝖧𝖨𝖩𝖪𝖫𝖬𝖭𝖮𝖯𝖰𝖱𝖲𝖳𝖴𝖵𝖶𝖷𝖸𝖹",
    lower: "𝖺𝖻𝖼𝖽𝖾𝖿𝗀𝗁𝗂𝗃𝗄𝗅𝗆𝗇𝗈𝗉𝗊𝗋𝗌𝗍𝗎𝗏𝗐𝗑𝗒𝗓",
    digits: Some("𝟢𝟣𝟤𝟥𝟦𝟧𝟨𝟩𝟪𝟫"),
};

/// Flip map for upside-down text.
///
/// Letters use the turned forms from Latin Extended, Letterlike Symbols and
/// the Lisu block; digits and punctuation follow the common flip-text tables.
pub(crate) const UPSIDE_DOWN: Alphabet = Alphabet {
    upper: "∀ꓭƆꓷƎℲ⅁HIſꓘ˥WNOԀΌꓤS⊥∩ΛMX⅄Z",
    lower: "ɐqɔpǝɟƃɥᴉɾʞlɯuodbɹsʇnʌʍxʎz",
    digits: Some("0ƖᄅƐㄣϛ9ㄥ86"),
};

pub(crate) const UPSIDE_DOWN_PUNCTUATION: &[(char, &str)] = &[
    ('.', "˙"),
    (',', "'"),
    ('\'', ","),
    ('"', "„"),
    ('!', "¡"),
    ('?', "¿"),
    ('(', ")"),
    (')', "("),
    ('[', "]"),
    (']', "["),
    ('{', "}"),
    ('}', "{"),
    ('<', ">"),
    ('>', "<"),
    ('_', "‾"),
    ('&', "⅋"),
    (';', "؛"),
];
