//! Script classification and run segmentation.
//!
//! Scripts are identified per ISO 15924. Classification is backed by a
//! sorted table of non-overlapping code point ranges; lookups binary
//! search it. `Common` and `Inherited` code points never open a run of
//! their own: they absorb into the enclosing run so that downstream
//! shaping always sees script-homogeneous runs.

use read_tables::types::Tag;

use super::Direction;

/// An ISO 15924 script.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Script {
    Common,
    Inherited,
    Unknown,
    Adlam,
    Arabic,
    Armenian,
    Avestan,
    Balinese,
    Bamum,
    Batak,
    Bengali,
    Bopomofo,
    Buginese,
    Buhid,
    CanadianAboriginal,
    Cham,
    Cherokee,
    Chorasmian,
    Coptic,
    Cypriot,
    Cyrillic,
    Devanagari,
    Elymaic,
    Ethiopic,
    Georgian,
    Glagolitic,
    Gothic,
    Greek,
    Gujarati,
    Gurmukhi,
    Han,
    HanifiRohingya,
    Hangul,
    Hanunoo,
    Hatran,
    Hebrew,
    Hiragana,
    ImperialAramaic,
    InscriptionalPahlavi,
    InscriptionalParthian,
    Javanese,
    Kannada,
    Katakana,
    KayahLi,
    Khmer,
    Lao,
    Latin,
    Lepcha,
    Limbu,
    Lisu,
    Lydian,
    Malayalam,
    Mandaic,
    Manichaean,
    MeeteiMayek,
    MendeKikakui,
    Mongolian,
    Myanmar,
    Nabataean,
    NewTaiLue,
    Nko,
    Ogham,
    OlChiki,
    OldNorthArabian,
    OldSogdian,
    OldSouthArabian,
    OldUyghur,
    Oriya,
    Palmyrene,
    PhagsPa,
    Phoenician,
    PsalterPahlavi,
    Rejang,
    Runic,
    Samaritan,
    Saurashtra,
    Sinhala,
    Sogdian,
    Sundanese,
    SylotiNagri,
    Syriac,
    Tagalog,
    Tagbanwa,
    TaiLe,
    TaiTham,
    TaiViet,
    Tamil,
    Telugu,
    Thaana,
    Thai,
    Tibetan,
    Tifinagh,
    Vai,
    Yezidi,
    Yi,
}

/// Sorted, non-overlapping code point ranges and the script they
/// resolve to. Gaps resolve to [`Script::Unknown`].
#[rustfmt::skip]
const SCRIPT_RANGES: &[(u32, u32, Script)] = &[
    (0x0000, 0x0040, Script::Common),
    (0x0041, 0x005A, Script::Latin),
    (0x005B, 0x0060, Script::Common),
    (0x0061, 0x007A, Script::Latin),
    (0x007B, 0x00A9, Script::Common),
    (0x00AA, 0x00AA, Script::Latin),
    (0x00AB, 0x00B9, Script::Common),
    (0x00BA, 0x00BA, Script::Latin),
    (0x00BB, 0x00BF, Script::Common),
    (0x00C0, 0x00D6, Script::Latin),
    (0x00D7, 0x00D7, Script::Common),
    (0x00D8, 0x00F6, Script::Latin),
    (0x00F7, 0x00F7, Script::Common),
    (0x00F8, 0x02B8, Script::Latin),
    (0x02B9, 0x02DF, Script::Common),
    (0x02E0, 0x02E4, Script::Latin),
    (0x02E5, 0x02FF, Script::Common),
    (0x0300, 0x036F, Script::Inherited),
    (0x0370, 0x0373, Script::Greek),
    (0x0374, 0x0374, Script::Common),
    (0x0375, 0x0377, Script::Greek),
    (0x037A, 0x037D, Script::Greek),
    (0x037E, 0x037E, Script::Common),
    (0x037F, 0x037F, Script::Greek),
    (0x0384, 0x0386, Script::Greek),
    (0x0387, 0x0387, Script::Common),
    (0x0388, 0x03E1, Script::Greek),
    (0x03E2, 0x03EF, Script::Coptic),
    (0x03F0, 0x03FF, Script::Greek),
    (0x0400, 0x0484, Script::Cyrillic),
    (0x0485, 0x0486, Script::Inherited),
    (0x0487, 0x052F, Script::Cyrillic),
    (0x0531, 0x058F, Script::Armenian),
    (0x0591, 0x05F4, Script::Hebrew),
    (0x0600, 0x060B, Script::Arabic),
    (0x060C, 0x060C, Script::Common),
    (0x060D, 0x061F, Script::Arabic),
    (0x0620, 0x063F, Script::Arabic),
    (0x0640, 0x0640, Script::Common),
    (0x0641, 0x064A, Script::Arabic),
    (0x064B, 0x0655, Script::Inherited),
    (0x0656, 0x066F, Script::Arabic),
    (0x0670, 0x0670, Script::Inherited),
    (0x0671, 0x06FF, Script::Arabic),
    (0x0700, 0x074F, Script::Syriac),
    (0x0750, 0x077F, Script::Arabic),
    (0x0780, 0x07BF, Script::Thaana),
    (0x07C0, 0x07FF, Script::Nko),
    (0x0800, 0x083F, Script::Samaritan),
    (0x0840, 0x085F, Script::Mandaic),
    (0x0860, 0x086F, Script::Syriac),
    (0x08A0, 0x08FF, Script::Arabic),
    (0x0900, 0x097F, Script::Devanagari),
    (0x0980, 0x09FF, Script::Bengali),
    (0x0A00, 0x0A7F, Script::Gurmukhi),
    (0x0A80, 0x0AFF, Script::Gujarati),
    (0x0B00, 0x0B7F, Script::Oriya),
    (0x0B80, 0x0BFF, Script::Tamil),
    (0x0C00, 0x0C7F, Script::Telugu),
    (0x0C80, 0x0CFF, Script::Kannada),
    (0x0D00, 0x0D7F, Script::Malayalam),
    (0x0D80, 0x0DFF, Script::Sinhala),
    (0x0E00, 0x0E7F, Script::Thai),
    (0x0E80, 0x0EFF, Script::Lao),
    (0x0F00, 0x0FFF, Script::Tibetan),
    (0x1000, 0x109F, Script::Myanmar),
    (0x10A0, 0x10FF, Script::Georgian),
    (0x1100, 0x11FF, Script::Hangul),
    (0x1200, 0x139F, Script::Ethiopic),
    (0x13A0, 0x13FF, Script::Cherokee),
    (0x1400, 0x167F, Script::CanadianAboriginal),
    (0x1680, 0x169F, Script::Ogham),
    (0x16A0, 0x16FF, Script::Runic),
    (0x1700, 0x171F, Script::Tagalog),
    (0x1720, 0x173F, Script::Hanunoo),
    (0x1740, 0x175F, Script::Buhid),
    (0x1760, 0x177F, Script::Tagbanwa),
    (0x1780, 0x17FF, Script::Khmer),
    (0x1800, 0x18AF, Script::Mongolian),
    (0x18B0, 0x18FF, Script::CanadianAboriginal),
    (0x1900, 0x194F, Script::Limbu),
    (0x1950, 0x197F, Script::TaiLe),
    (0x1980, 0x19DF, Script::NewTaiLue),
    (0x19E0, 0x19FF, Script::Khmer),
    (0x1A00, 0x1A1F, Script::Buginese),
    (0x1A20, 0x1AAF, Script::TaiTham),
    (0x1AB0, 0x1AFF, Script::Inherited),
    (0x1B00, 0x1B7F, Script::Balinese),
    (0x1B80, 0x1BBF, Script::Sundanese),
    (0x1BC0, 0x1BFF, Script::Batak),
    (0x1C00, 0x1C4F, Script::Lepcha),
    (0x1C50, 0x1C7F, Script::OlChiki),
    (0x1C80, 0x1C8F, Script::Cyrillic),
    (0x1C90, 0x1CBF, Script::Georgian),
    (0x1CC0, 0x1CCF, Script::Sundanese),
    (0x1CD0, 0x1CFF, Script::Inherited),
    (0x1D00, 0x1D25, Script::Latin),
    (0x1D26, 0x1D2A, Script::Greek),
    (0x1D2B, 0x1D2B, Script::Cyrillic),
    (0x1D2C, 0x1D65, Script::Latin),
    (0x1D66, 0x1D6A, Script::Greek),
    (0x1D6B, 0x1DBF, Script::Latin),
    (0x1DC0, 0x1DFF, Script::Inherited),
    (0x1E00, 0x1EFF, Script::Latin),
    (0x1F00, 0x1FFF, Script::Greek),
    (0x2000, 0x200B, Script::Common),
    (0x200C, 0x200D, Script::Inherited),
    (0x200E, 0x2064, Script::Common),
    (0x2066, 0x2070, Script::Common),
    (0x2071, 0x2071, Script::Latin),
    (0x2074, 0x207E, Script::Common),
    (0x207F, 0x207F, Script::Latin),
    (0x2080, 0x208E, Script::Common),
    (0x2090, 0x209C, Script::Latin),
    (0x20A0, 0x20CF, Script::Common),
    (0x20D0, 0x20FF, Script::Inherited),
    (0x2100, 0x2125, Script::Common),
    (0x2126, 0x2126, Script::Greek),
    (0x2127, 0x2129, Script::Common),
    (0x212A, 0x212B, Script::Latin),
    (0x212C, 0x2131, Script::Common),
    (0x2132, 0x2132, Script::Latin),
    (0x2133, 0x214D, Script::Common),
    (0x214E, 0x214E, Script::Latin),
    (0x214F, 0x215F, Script::Common),
    (0x2160, 0x2188, Script::Latin),
    (0x2189, 0x2BFF, Script::Common),
    (0x2C00, 0x2C5F, Script::Glagolitic),
    (0x2C60, 0x2C7F, Script::Latin),
    (0x2C80, 0x2CFF, Script::Coptic),
    (0x2D00, 0x2D2F, Script::Georgian),
    (0x2D30, 0x2D7F, Script::Tifinagh),
    (0x2D80, 0x2DDF, Script::Ethiopic),
    (0x2DE0, 0x2DFF, Script::Cyrillic),
    (0x2E00, 0x2E7F, Script::Common),
    (0x2E80, 0x2FDF, Script::Han),
    (0x2FF0, 0x3004, Script::Common),
    (0x3005, 0x3005, Script::Han),
    (0x3006, 0x3006, Script::Common),
    (0x3007, 0x3007, Script::Han),
    (0x3008, 0x3020, Script::Common),
    (0x3021, 0x3029, Script::Han),
    (0x302A, 0x302D, Script::Inherited),
    (0x302E, 0x302F, Script::Hangul),
    (0x3030, 0x3037, Script::Common),
    (0x3038, 0x303B, Script::Han),
    (0x303C, 0x303F, Script::Common),
    (0x3041, 0x3096, Script::Hiragana),
    (0x3099, 0x309A, Script::Inherited),
    (0x309B, 0x309C, Script::Common),
    (0x309D, 0x309F, Script::Hiragana),
    (0x30A0, 0x30A0, Script::Common),
    (0x30A1, 0x30FA, Script::Katakana),
    (0x30FB, 0x30FC, Script::Common),
    (0x30FD, 0x30FF, Script::Katakana),
    (0x3105, 0x312F, Script::Bopomofo),
    (0x3131, 0x318F, Script::Hangul),
    (0x3190, 0x319F, Script::Common),
    (0x31A0, 0x31BF, Script::Bopomofo),
    (0x31C0, 0x31EF, Script::Common),
    (0x31F0, 0x31FF, Script::Katakana),
    (0x3200, 0x321F, Script::Hangul),
    (0x3220, 0x325F, Script::Common),
    (0x3260, 0x327E, Script::Hangul),
    (0x327F, 0x32CF, Script::Common),
    (0x32D0, 0x3357, Script::Katakana),
    (0x3358, 0x33FF, Script::Common),
    (0x3400, 0x4DBF, Script::Han),
    (0x4DC0, 0x4DFF, Script::Common),
    (0x4E00, 0x9FFF, Script::Han),
    (0xA000, 0xA4CF, Script::Yi),
    (0xA4D0, 0xA4FF, Script::Lisu),
    (0xA500, 0xA63F, Script::Vai),
    (0xA640, 0xA69F, Script::Cyrillic),
    (0xA6A0, 0xA6FF, Script::Bamum),
    (0xA700, 0xA721, Script::Common),
    (0xA722, 0xA787, Script::Latin),
    (0xA788, 0xA78A, Script::Common),
    (0xA78B, 0xA7FF, Script::Latin),
    (0xA800, 0xA82F, Script::SylotiNagri),
    (0xA830, 0xA83F, Script::Common),
    (0xA840, 0xA87F, Script::PhagsPa),
    (0xA880, 0xA8DF, Script::Saurashtra),
    (0xA8E0, 0xA8FF, Script::Devanagari),
    (0xA900, 0xA92F, Script::KayahLi),
    (0xA930, 0xA95F, Script::Rejang),
    (0xA960, 0xA97F, Script::Hangul),
    (0xA980, 0xA9DF, Script::Javanese),
    (0xA9E0, 0xA9FF, Script::Myanmar),
    (0xAA00, 0xAA5F, Script::Cham),
    (0xAA60, 0xAA7F, Script::Myanmar),
    (0xAA80, 0xAADF, Script::TaiViet),
    (0xAAE0, 0xAAFF, Script::MeeteiMayek),
    (0xAB00, 0xAB2F, Script::Ethiopic),
    (0xAB30, 0xAB6F, Script::Latin),
    (0xAB70, 0xABBF, Script::Cherokee),
    (0xABC0, 0xABFF, Script::MeeteiMayek),
    (0xAC00, 0xD7FF, Script::Hangul),
    (0xF900, 0xFAFF, Script::Han),
    (0xFB00, 0xFB06, Script::Latin),
    (0xFB13, 0xFB17, Script::Armenian),
    (0xFB1D, 0xFB4F, Script::Hebrew),
    (0xFB50, 0xFDFF, Script::Arabic),
    (0xFE00, 0xFE0F, Script::Inherited),
    (0xFE10, 0xFE1F, Script::Common),
    (0xFE20, 0xFE2D, Script::Inherited),
    (0xFE2E, 0xFE2F, Script::Cyrillic),
    (0xFE30, 0xFE6F, Script::Common),
    (0xFE70, 0xFEFE, Script::Arabic),
    (0xFEFF, 0xFEFF, Script::Common),
    (0xFF00, 0xFF20, Script::Common),
    (0xFF21, 0xFF3A, Script::Latin),
    (0xFF3B, 0xFF40, Script::Common),
    (0xFF41, 0xFF5A, Script::Latin),
    (0xFF5B, 0xFF65, Script::Common),
    (0xFF66, 0xFF6F, Script::Katakana),
    (0xFF70, 0xFF70, Script::Common),
    (0xFF71, 0xFF9D, Script::Katakana),
    (0xFF9E, 0xFF9F, Script::Katakana),
    (0xFFA0, 0xFFDC, Script::Hangul),
    (0xFFE0, 0xFFFD, Script::Common),
    (0x10330, 0x1034F, Script::Gothic),
    (0x10800, 0x1083F, Script::Cypriot),
    (0x10840, 0x1085F, Script::ImperialAramaic),
    (0x10860, 0x1087F, Script::Palmyrene),
    (0x10880, 0x108AF, Script::Nabataean),
    (0x108E0, 0x108FF, Script::Hatran),
    (0x10900, 0x1091F, Script::Phoenician),
    (0x10920, 0x1093F, Script::Lydian),
    (0x10A60, 0x10A7F, Script::OldSouthArabian),
    (0x10A80, 0x10A9F, Script::OldNorthArabian),
    (0x10AC0, 0x10AFF, Script::Manichaean),
    (0x10B00, 0x10B3F, Script::Avestan),
    (0x10B40, 0x10B5F, Script::InscriptionalParthian),
    (0x10B60, 0x10B7F, Script::InscriptionalPahlavi),
    (0x10B80, 0x10BAF, Script::PsalterPahlavi),
    (0x10D00, 0x10D3F, Script::HanifiRohingya),
    (0x10E80, 0x10EBF, Script::Yezidi),
    (0x10F00, 0x10F2F, Script::OldSogdian),
    (0x10F30, 0x10F6F, Script::Sogdian),
    (0x10F70, 0x10FAF, Script::OldUyghur),
    (0x10FB0, 0x10FDF, Script::Chorasmian),
    (0x10FE0, 0x10FFF, Script::Elymaic),
    (0x1D400, 0x1D7FF, Script::Common),
    (0x1E800, 0x1E8DF, Script::MendeKikakui),
    (0x1E900, 0x1E95F, Script::Adlam),
    (0x1EE00, 0x1EEFF, Script::Arabic),
    (0x1F000, 0x1FAFF, Script::Common),
    (0x20000, 0x2FA1F, Script::Han),
    (0x30000, 0x3134F, Script::Han),
];

/// Returns the script of a code point. Unassigned ranges resolve to
/// [`Script::Unknown`].
pub fn script_for_char(c: char) -> Script {
    let cp = c as u32;
    match SCRIPT_RANGES.binary_search_by(|(start, end, _)| {
        if cp < *start {
            core::cmp::Ordering::Greater
        } else if cp > *end {
            core::cmp::Ordering::Less
        } else {
            core::cmp::Ordering::Equal
        }
    }) {
        Ok(ix) => SCRIPT_RANGES[ix].2,
        Err(_) => Script::Unknown,
    }
}

/// Returns the most frequent script in the text, ignoring `Common` and
/// `Inherited`; [`Script::Common`] if no other script occurs.
pub fn detect_script(text: &str) -> Script {
    let mut counts: Vec<(Script, usize)> = Vec::new();
    for c in text.chars() {
        let script = script_for_char(c);
        if script == Script::Common || script == Script::Inherited {
            continue;
        }
        match counts.iter_mut().find(|(s, _)| *s == script) {
            Some((_, count)) => *count += 1,
            None => counts.push((script, 1)),
        }
    }
    counts
        .iter()
        .max_by_key(|(_, count)| *count)
        .map(|(script, _)| *script)
        .unwrap_or(Script::Common)
}

/// Returns every script present in the text, including `Common` and
/// `Inherited`, in first-seen order.
pub fn scripts_in(text: &str) -> Vec<Script> {
    let mut scripts = Vec::new();
    for c in text.chars() {
        let script = script_for_char(c);
        if !scripts.contains(&script) {
            scripts.push(script);
        }
    }
    scripts
}

/// `true` if every code point resolves to `script`, `Common` or
/// `Inherited`.
pub fn is_script(text: &str, script: Script) -> bool {
    text.chars().all(|c| {
        let s = script_for_char(c);
        s == script || s == Script::Common || s == Script::Inherited
    })
}

/// A maximal run of code points sharing one script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptRun<'a> {
    /// The script of the run.
    pub script: Script,
    /// First code point index of the run, inclusive.
    pub start: usize,
    /// One past the last code point index of the run.
    pub end: usize,
    /// The run's text.
    pub text: &'a str,
}

/// Segments the text into script runs.
///
/// `Common` and `Inherited` code points absorb into the current run; no
/// synthetic runs are emitted for them. Runs tile the input in order.
pub fn script_runs(text: &str) -> Vec<ScriptRun<'_>> {
    let mut runs = Vec::new();
    let mut iter = text.char_indices();
    let Some((_, first)) = iter.next() else {
        return runs;
    };
    let mut run_script = script_for_char(first);
    let mut run_start_byte = 0;
    let mut run_start = 0;
    let mut index = 1;
    for (byte_ix, c) in iter {
        let script = script_for_char(c);
        let absorbed =
            script == run_script || script == Script::Common || script == Script::Inherited;
        if !absorbed {
            runs.push(ScriptRun {
                script: run_script,
                start: run_start,
                end: index,
                text: &text[run_start_byte..byte_ix],
            });
            run_script = script;
            run_start = index;
            run_start_byte = byte_ix;
        }
        index += 1;
    }
    runs.push(ScriptRun {
        script: run_script,
        start: run_start,
        end: index,
        text: &text[run_start_byte..],
    });
    runs
}

/// Returns the OpenType script tag for a script.
///
/// Scripts with no assigned layout tag, along with `Common`,
/// `Inherited` and `Unknown`, map to `DFLT`.
pub fn script_tag(script: Script) -> Tag {
    let raw: &[u8; 4] = match script {
        Script::Adlam => b"adlm",
        Script::Arabic => b"arab",
        Script::Armenian => b"armn",
        Script::Avestan => b"avst",
        Script::Balinese => b"bali",
        Script::Bamum => b"bamu",
        Script::Batak => b"batk",
        Script::Bengali => b"beng",
        Script::Bopomofo => b"bopo",
        Script::Buginese => b"bugi",
        Script::Buhid => b"buhd",
        Script::CanadianAboriginal => b"cans",
        Script::Cham => b"cham",
        Script::Cherokee => b"cher",
        Script::Chorasmian => b"chrs",
        Script::Coptic => b"copt",
        Script::Cypriot => b"cprt",
        Script::Cyrillic => b"cyrl",
        Script::Devanagari => b"deva",
        Script::Elymaic => b"elym",
        Script::Ethiopic => b"ethi",
        Script::Georgian => b"geor",
        Script::Glagolitic => b"glag",
        Script::Gothic => b"goth",
        Script::Greek => b"grek",
        Script::Gujarati => b"gujr",
        Script::Gurmukhi => b"guru",
        Script::Han => b"hani",
        Script::HanifiRohingya => b"rohg",
        Script::Hangul => b"hang",
        Script::Hanunoo => b"hano",
        Script::Hatran => b"hatr",
        Script::Hebrew => b"hebr",
        Script::Hiragana | Script::Katakana => b"kana",
        Script::ImperialAramaic => b"armi",
        Script::InscriptionalPahlavi => b"phli",
        Script::InscriptionalParthian => b"prti",
        Script::Javanese => b"java",
        Script::Kannada => b"knda",
        Script::KayahLi => b"kali",
        Script::Khmer => b"khmr",
        Script::Lao => b"lao ",
        Script::Latin => b"latn",
        Script::Lepcha => b"lepc",
        Script::Limbu => b"limb",
        Script::Lisu => b"lisu",
        Script::Lydian => b"lydi",
        Script::Malayalam => b"mlym",
        Script::Mandaic => b"mand",
        Script::Manichaean => b"mani",
        Script::MeeteiMayek => b"mtei",
        Script::MendeKikakui => b"mend",
        Script::Mongolian => b"mong",
        Script::Myanmar => b"mymr",
        Script::Nabataean => b"nbat",
        Script::NewTaiLue => b"talu",
        Script::Nko => b"nko ",
        Script::Ogham => b"ogam",
        Script::OlChiki => b"olck",
        Script::OldNorthArabian => b"narb",
        Script::OldSogdian => b"sogo",
        Script::OldSouthArabian => b"sarb",
        Script::OldUyghur => b"ougr",
        Script::Oriya => b"orya",
        Script::Palmyrene => b"palm",
        Script::PhagsPa => b"phag",
        Script::Phoenician => b"phnx",
        Script::PsalterPahlavi => b"phlp",
        Script::Rejang => b"rjng",
        Script::Runic => b"runr",
        Script::Samaritan => b"samr",
        Script::Saurashtra => b"saur",
        Script::Sinhala => b"sinh",
        Script::Sogdian => b"sogd",
        Script::Sundanese => b"sund",
        Script::SylotiNagri => b"sylo",
        Script::Syriac => b"syrc",
        Script::Tagalog => b"tglg",
        Script::Tagbanwa => b"tagb",
        Script::TaiLe => b"tale",
        Script::TaiTham => b"lana",
        Script::TaiViet => b"tavt",
        Script::Tamil => b"taml",
        Script::Telugu => b"telu",
        Script::Thaana => b"thaa",
        Script::Thai => b"thai",
        Script::Tibetan => b"tibt",
        Script::Tifinagh => b"tfng",
        Script::Vai => b"vai ",
        Script::Yezidi => b"yezi",
        Script::Yi => b"yi  ",
        Script::Common | Script::Inherited | Script::Unknown => b"DFLT",
    };
    Tag::new(raw)
}

/// `true` for scripts that require shaping beyond simple one-to-one
/// glyph mapping.
pub fn is_complex(script: Script) -> bool {
    matches!(
        script,
        Script::Arabic
            | Script::Hebrew
            | Script::Syriac
            | Script::Thaana
            | Script::Nko
            | Script::Devanagari
            | Script::Bengali
            | Script::Gurmukhi
            | Script::Gujarati
            | Script::Oriya
            | Script::Tamil
            | Script::Telugu
            | Script::Kannada
            | Script::Malayalam
            | Script::Sinhala
            | Script::Thai
            | Script::Lao
            | Script::Myanmar
            | Script::Khmer
            | Script::Mongolian
            | Script::Hangul
    )
}

/// Returns the horizontal direction in which a script is written.
pub fn script_direction(script: Script) -> Direction {
    match script {
        Script::Arabic
        | Script::Hebrew
        | Script::Syriac
        | Script::Thaana
        | Script::Nko
        | Script::Samaritan
        | Script::Mandaic
        | Script::ImperialAramaic
        | Script::Phoenician
        | Script::OldSouthArabian
        | Script::OldNorthArabian
        | Script::Avestan
        | Script::InscriptionalParthian
        | Script::InscriptionalPahlavi
        | Script::PsalterPahlavi
        | Script::Hatran
        | Script::Lydian
        | Script::Nabataean
        | Script::Palmyrene
        | Script::Manichaean
        | Script::MendeKikakui
        | Script::HanifiRohingya
        | Script::Yezidi
        | Script::OldSogdian
        | Script::Sogdian
        | Script::Elymaic
        | Script::Chorasmian
        | Script::OldUyghur
        | Script::Adlam => Direction::RightToLeft,
        _ => Direction::LeftToRight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_sorted_and_disjoint() {
        for window in SCRIPT_RANGES.windows(2) {
            let (_, end, _) = window[0];
            let (start, _, _) = window[1];
            assert!(end < start, "ranges overlap near {end:#x}");
        }
        for (start, end, _) in SCRIPT_RANGES {
            assert!(start <= end);
        }
    }

    #[test]
    fn classification() {
        assert_eq!(script_for_char('A'), Script::Latin);
        assert_eq!(script_for_char('0'), Script::Common);
        assert_eq!(script_for_char('α'), Script::Greek);
        assert_eq!(script_for_char('я'), Script::Cyrillic);
        assert_eq!(script_for_char('\u{5D0}'), Script::Hebrew);
        assert_eq!(script_for_char('\u{627}'), Script::Arabic);
        assert_eq!(script_for_char('\u{4E2D}'), Script::Han);
        assert_eq!(script_for_char('\u{3042}'), Script::Hiragana);
        assert_eq!(script_for_char('\u{30AB}'), Script::Katakana);
        assert_eq!(script_for_char('\u{301}'), Script::Inherited);
        assert_eq!(script_for_char('\u{1B83}'), Script::Sundanese);
        assert_eq!(script_for_char('\u{378}'), Script::Unknown);
    }

    #[test]
    fn detect_prefers_most_frequent() {
        assert_eq!(detect_script("abcαβ"), Script::Latin);
        assert_eq!(detect_script("aβγδ"), Script::Greek);
        assert_eq!(detect_script("123 ,."), Script::Common);
        assert_eq!(detect_script(""), Script::Common);
    }

    #[test]
    fn detect_is_idempotent_on_dominant_text() {
        let text = "hello world";
        let script = detect_script(text);
        assert_eq!(script, Script::Latin);
        assert_eq!(detect_script(text), script);
    }

    #[test]
    fn runs_absorb_common_and_inherited() {
        let runs = script_runs("ABCαβγ");
        assert_eq!(runs.len(), 2);
        assert_eq!(
            runs[0],
            ScriptRun {
                script: Script::Common,
                start: 0,
                end: 3,
                text: "ABC"
            }
        );
        assert_eq!(
            runs[1],
            ScriptRun {
                script: Script::Greek,
                start: 3,
                end: 6,
                text: "αβγ"
            }
        );
    }

    #[test]
    fn runs_tile_the_input() {
        let text = "abc 中文, קצת עברית!";
        let runs = script_runs(text);
        let rebuilt: String = runs.iter().map(|run| run.text).collect();
        assert_eq!(rebuilt, text);
        let mut expected_start = 0;
        for run in &runs {
            assert_eq!(run.start, expected_start);
            assert!(run.start < run.end);
            expected_start = run.end;
        }
        assert_eq!(expected_start, text.chars().count());
    }

    #[test]
    fn combining_marks_absorb_into_run() {
        // e + combining acute stays one Latin run
        let runs = script_runs("e\u{301}x");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].script, Script::Latin);
    }

    #[test]
    fn empty_text_has_no_runs() {
        assert!(script_runs("").is_empty());
    }

    #[test]
    fn tags() {
        assert_eq!(script_tag(Script::Latin).to_string(), "latn");
        assert_eq!(script_tag(Script::Hiragana).to_string(), "kana");
        assert_eq!(script_tag(Script::Katakana).to_string(), "kana");
        assert_eq!(script_tag(Script::Sundanese).to_string(), "sund");
        assert_eq!(script_tag(Script::Common).to_string(), "DFLT");
        assert_eq!(script_tag(Script::Unknown).to_string(), "DFLT");
    }

    #[test]
    fn complex_and_direction_sets() {
        assert!(is_complex(Script::Arabic));
        assert!(is_complex(Script::Khmer));
        assert!(!is_complex(Script::Latin));
        assert_eq!(script_direction(Script::Hebrew), Direction::RightToLeft);
        assert_eq!(script_direction(Script::Adlam), Direction::RightToLeft);
        assert_eq!(script_direction(Script::Greek), Direction::LeftToRight);
    }

    #[test]
    fn is_script_allows_common() {
        assert!(is_script("abc 123", Script::Latin));
        assert!(!is_script("abcβ", Script::Latin));
    }
}
