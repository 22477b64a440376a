//! Line-break analysis.
//!
//! Two phases: every code point is first assigned one of the 43
//! line-breaking classes, then a pair-rule engine walks the
//! inter-character boundaries and emits a break opportunity for each.
//! The boundary array has one more entry than the text has code points;
//! the first entry never breaks and the last is always mandatory.

/// The line-breaking classes of UAX #14.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum BreakClass {
    /// Mandatory break.
    BK,
    /// Carriage return.
    CR,
    /// Line feed.
    LF,
    /// Combining mark.
    CM,
    /// Next line.
    NL,
    /// Surrogate (unreachable from `char` input, kept for completeness).
    SG,
    /// Word joiner.
    WJ,
    /// Zero width space.
    ZW,
    /// Non-breaking ("glue").
    GL,
    /// Space.
    SP,
    /// Zero width joiner.
    ZWJ,
    /// Break opportunity before and after.
    B2,
    /// Break after.
    BA,
    /// Break before.
    BB,
    /// Hyphen.
    HY,
    /// Contingent break opportunity.
    CB,
    /// Close punctuation.
    CL,
    /// Close parenthesis.
    CP,
    /// Exclamation or interrogation.
    EX,
    /// Inseparable.
    IN,
    /// Nonstarter.
    NS,
    /// Open punctuation.
    OP,
    /// Quotation.
    QU,
    /// Infix numeric separator.
    IS,
    /// Numeric.
    NU,
    /// Postfix numeric.
    PO,
    /// Prefix numeric.
    PR,
    /// Symbol allowing break after.
    SY,
    /// Ambiguous (resolved to AL).
    AI,
    /// Alphabetic.
    AL,
    /// Conditional Japanese starter.
    CJ,
    /// Emoji base.
    EB,
    /// Emoji modifier.
    EM,
    /// Hangul LV syllable.
    H2,
    /// Hangul LVT syllable.
    H3,
    /// Hebrew letter.
    HL,
    /// Ideographic.
    ID,
    /// Hangul leading jamo.
    JL,
    /// Hangul vowel jamo.
    JV,
    /// Hangul trailing jamo.
    JT,
    /// Regional indicator.
    RI,
    /// Complex-context dependent (Southeast Asian).
    SA,
    /// Unknown (resolved to AL).
    XX,
}

/// A break opportunity at one inter-character boundary.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BreakOpportunity {
    /// The line must not break here.
    #[default]
    NoBreak,
    /// The line may break here.
    Optional,
    /// The line must break here.
    Mandatory,
}

/// Assigns a line-breaking class to a code point.
pub fn break_class(c: char) -> BreakClass {
    use BreakClass::*;
    match c as u32 {
        0x0A => LF,
        0x0B | 0x0C => BK,
        0x0D => CR,
        0x85 => NL,
        0x2028 | 0x2029 => BK,
        0x09 => BA,
        0x20 => SP,
        0x200B => ZW,
        0x200D => ZWJ,
        0x2060 | 0xFEFF => WJ,
        0xA0 | 0x2007 | 0x202F | 0x2011 => GL,
        0x21 | 0x3F => EX,
        0x22 | 0x27 => QU,
        0xAB | 0xBB | 0x2018 | 0x2019 | 0x201C | 0x201D => QU,
        0x28 | 0x5B | 0x7B => OP,
        0x29 | 0x5D => CP,
        0x7D => CL,
        0x2C | 0x2E | 0x3A | 0x3B => IS,
        0x2D => HY,
        0x2F => SY,
        0x25 | 0xA2 | 0xB0 | 0x2030 | 0x2032 | 0x2033 => PO,
        0x24 | 0x2B | 0x5C | 0xA3 | 0xA4 | 0xA5 | 0x2212 => PR,
        0x23 => AL,
        0x30..=0x39 => NU,
        0x660..=0x669 | 0x6F0..=0x6F9 => NU,
        0x41..=0x5A | 0x61..=0x7A => AL,
        0xA7 => AI,
        0x2013 => BA,
        0x2014 => B2,
        0x2024..=0x2026 => IN,
        0x2010 | 0x2012 => BA,
        0xFFFC => CB,
        // combining marks
        0x300..=0x36F | 0x483..=0x489 | 0x591..=0x5BD | 0x5BF | 0x5C1 | 0x5C2 | 0x5C4 | 0x5C5
        | 0x5C7 | 0x610..=0x61A | 0x64B..=0x65F | 0x670 | 0x6D6..=0x6DC | 0x6DF..=0x6E4
        | 0x6E7 | 0x6E8 | 0x6EA..=0x6ED | 0x711 | 0x730..=0x74A | 0x7A6..=0x7B0
        | 0x7EB..=0x7F3 | 0x816..=0x819 | 0x81B..=0x823 | 0x825..=0x827 | 0x829..=0x82D
        | 0x859..=0x85B | 0x8D3..=0x8FF | 0x1AB0..=0x1AFF | 0x1DC0..=0x1DFF
        | 0x20D0..=0x20FF | 0xFE00..=0xFE0F | 0xFE20..=0xFE2F | 0x1E944..=0x1E94A => CM,
        // Hebrew letters
        0x5D0..=0x5EA | 0x5EF..=0x5F2 | 0xFB1D | 0xFB1F..=0xFB28 | 0xFB2A..=0xFB4F => HL,
        0x5F3 | 0x5F4 => AL,
        // Southeast Asian complex context
        0xE01..=0xE3A | 0xE40..=0xE5B => SA,
        0xE81..=0xEDF => SA,
        0x1000..=0x109F => SA,
        0x1780..=0x17FF => SA,
        0x1A20..=0x1AAD => SA,
        0xAA60..=0xAADF => SA,
        // Hangul
        0x1100..=0x115F => JL,
        0x1160..=0x11A7 => JV,
        0x11A8..=0x11FF => JT,
        0xA960..=0xA97C => JL,
        0xD7B0..=0xD7C6 => JV,
        0xD7CB..=0xD7FB => JT,
        cp @ 0xAC00..=0xD7A3 => {
            if (cp - 0xAC00) % 28 == 0 {
                H2
            } else {
                H3
            }
        }
        // small kana and the prolonged sound mark are conditional starters
        0x3041 | 0x3043 | 0x3045 | 0x3047 | 0x3049 | 0x3063 | 0x3083 | 0x3085 | 0x3087
        | 0x308E | 0x3095 | 0x3096 => CJ,
        0x30A1 | 0x30A3 | 0x30A5 | 0x30A7 | 0x30A9 | 0x30C3 | 0x30E3 | 0x30E5 | 0x30E7
        | 0x30EE | 0x30F5 | 0x30F6 | 0x30FC => CJ,
        0xFF67..=0xFF70 => CJ,
        // nonstarters
        0x3005 | 0x303B | 0x309D | 0x309E | 0x30FD | 0x30FE | 0x301C => NS,
        0x203C | 0x2047..=0x2049 => NS,
        // CJK punctuation
        0x3001 | 0x3002 | 0xFF0C | 0xFF0E | 0xFF61 | 0xFF64 => CL,
        0x3008 | 0x300A | 0x300C | 0x300E | 0x3010 | 0x3014 | 0x3016 | 0x3018 | 0x301A
        | 0xFF08 | 0xFF3B | 0xFF5B => OP,
        0x3009 | 0x300B | 0x300D | 0x300F | 0x3011 | 0x3015 | 0x3017 | 0x3019 | 0x301B
        | 0xFF09 | 0xFF3D | 0xFF5D => CL,
        // ideographs and kana
        0x3040..=0x309F => ID,
        0x30A0..=0x30FF => ID,
        0x31F0..=0x31FF => CJ,
        0x3400..=0x4DBF | 0x4E00..=0x9FFF | 0xF900..=0xFAFF => ID,
        0x3000 => BA,
        0x3003..=0x303A => ID,
        0xFF66 | 0xFF71..=0xFF9D => ID,
        0xFE10..=0xFE19 => IS,
        // regional indicators
        0x1F1E6..=0x1F1FF => RI,
        // the generic emoji range subsumes the base and modifier
        // subranges, so those classify ID and LB30b never fires here
        0x1F300..=0x1F9FF => ID,
        0x1FA70..=0x1FAFF => ID,
        0x20000..=0x2FFFD | 0x30000..=0x3FFFD => ID,
        _ => XX,
    }
}

/// Inter-class actions of the pair rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PairAction {
    /// Break allowed.
    Direct,
    /// Break allowed only when spaces intervene.
    Indirect,
    /// Break prohibited, even when spaces intervene.
    Prohibited,
}

/// Line-break analysis of a piece of text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineBreaks {
    classes: Vec<BreakClass>,
    breaks: Vec<BreakOpportunity>,
}

impl LineBreaks {
    /// The per-code-point breaking classes, before pair resolution.
    pub fn classes(&self) -> &[BreakClass] {
        &self.classes
    }

    /// The per-boundary break opportunities; one more entry than the
    /// text has code points.
    pub fn opportunities(&self) -> &[BreakOpportunity] {
        &self.breaks
    }

    /// `true` if the line may or must break at the given boundary.
    pub fn can_break_at(&self, boundary: usize) -> bool {
        !matches!(
            self.breaks.get(boundary),
            Some(BreakOpportunity::NoBreak) | None
        )
    }

    /// `true` if the line must break at the given boundary.
    pub fn must_break_at(&self, boundary: usize) -> bool {
        matches!(self.breaks.get(boundary), Some(BreakOpportunity::Mandatory))
    }

    /// Returns the first boundary after `boundary` where a break is
    /// allowed or required.
    pub fn next_break(&self, boundary: usize) -> Option<usize> {
        (boundary + 1..self.breaks.len()).find(|&i| self.can_break_at(i))
    }

    /// All boundaries where a break is allowed or required, in order.
    pub fn break_positions(&self) -> Vec<usize> {
        (0..self.breaks.len())
            .filter(|&i| self.can_break_at(i))
            .collect()
    }
}

// LB1 resolution for the pair rules.
fn resolve(class: BreakClass) -> BreakClass {
    use BreakClass::*;
    match class {
        AI | SA | SG | XX => AL,
        CJ => NS,
        other => other,
    }
}

/// Pair rules LB11 through LB31 for directly adjacent classes.
///
/// `before` is the class of the nearest preceding non-space,
/// non-combining character; explicit breaks, spaces, ZW and combining
/// sequences are handled by the driver before this table is consulted.
fn pair_action(before: BreakClass, after: BreakClass) -> PairAction {
    use BreakClass::*;
    use PairAction::*;
    // LB11
    if before == WJ || after == WJ {
        return Prohibited;
    }
    // LB12
    if before == GL {
        return Prohibited;
    }
    // LB12a
    if after == GL && !matches!(before, SP | BA | HY) {
        return Prohibited;
    }
    // LB13
    if matches!(after, CL | CP | EX | IS | SY) {
        return Prohibited;
    }
    // LB14
    if before == OP {
        return Prohibited;
    }
    // LB15
    if before == QU && after == OP {
        return Prohibited;
    }
    // LB16
    if matches!(before, CL | CP) && after == NS {
        return Prohibited;
    }
    // LB17
    if before == B2 && after == B2 {
        return Prohibited;
    }
    // the rules below apply only to directly adjacent pairs
    // LB19
    if before == QU || after == QU {
        return Indirect;
    }
    // LB20
    if before == CB || after == CB {
        return Direct;
    }
    // LB21
    if matches!(after, BA | HY | NS) || before == BB {
        return Indirect;
    }
    // LB21b
    if before == SY && after == HL {
        return Indirect;
    }
    // LB22
    if after == IN {
        return Indirect;
    }
    // LB23
    if (matches!(before, AL | HL) && after == NU) || (before == NU && matches!(after, AL | HL)) {
        return Indirect;
    }
    // LB23a
    if (before == PR && matches!(after, ID | EB | EM))
        || (matches!(before, ID | EB | EM) && after == PO)
    {
        return Indirect;
    }
    // LB24
    if (matches!(before, PR | PO) && matches!(after, AL | HL))
        || (matches!(before, AL | HL) && matches!(after, PR | PO))
    {
        return Indirect;
    }
    // LB25, pairwise approximation of the numeric expression rule
    if (matches!(before, CL | CP | NU) && matches!(after, PO | PR))
        || (matches!(before, PO | PR) && matches!(after, OP | NU))
        || (matches!(before, HY | IS | NU | SY) && after == NU)
    {
        return Indirect;
    }
    // LB26
    if before == JL && matches!(after, JL | JV | H2 | H3) {
        return Indirect;
    }
    if matches!(before, JV | H2) && matches!(after, JV | JT) {
        return Indirect;
    }
    if matches!(before, JT | H3) && after == JT {
        return Indirect;
    }
    // LB27
    if matches!(before, JL | JV | JT | H2 | H3) && after == PO {
        return Indirect;
    }
    if before == PR && matches!(after, JL | JV | JT | H2 | H3) {
        return Indirect;
    }
    // LB28
    if matches!(before, AL | HL) && matches!(after, AL | HL) {
        return Indirect;
    }
    // LB29
    if before == IS && matches!(after, AL | HL) {
        return Indirect;
    }
    // LB30
    if matches!(before, AL | HL | NU) && after == OP {
        return Indirect;
    }
    if before == CP && matches!(after, AL | HL | NU) {
        return Indirect;
    }
    // LB30b
    if before == EB && after == EM {
        return Indirect;
    }
    // LB31
    Direct
}

/// Space-transparent prohibitions: rules LB11 through LB17 still apply
/// when spaces intervene; everything else breaks after a space (LB18).
fn spaced_action(before: BreakClass, after: BreakClass) -> PairAction {
    use BreakClass::*;
    use PairAction::*;
    if after == WJ {
        return Prohibited;
    }
    if after == GL && !matches!(before, SP | BA | HY) {
        // LB12a only prohibits for non-space predecessors; the space
        // itself is the predecessor here
        return Direct;
    }
    if matches!(after, CL | CP | EX | IS | SY) {
        return Prohibited;
    }
    if before == OP {
        return Prohibited;
    }
    if before == QU && after == OP {
        return Prohibited;
    }
    if matches!(before, CL | CP) && after == NS {
        return Prohibited;
    }
    if before == B2 && after == B2 {
        return Prohibited;
    }
    Direct
}

/// Runs line-break analysis over a string.
pub fn analyze(text: &str) -> LineBreaks {
    use BreakClass::*;
    let classes: Vec<BreakClass> = text.chars().map(break_class).collect();
    let n = classes.len();
    let mut breaks = vec![BreakOpportunity::NoBreak; n + 1];
    if n == 0 {
        return LineBreaks { classes, breaks };
    }
    // LB2: never break at the start; LB3: always break at the end.
    breaks[n] = BreakOpportunity::Mandatory;

    // `before` tracks the governing class to the left of the boundary,
    // skipping spaces and absorbed combining marks (LB9).
    let mut before = match resolve(classes[0]) {
        CM | ZWJ => AL, // LB10
        SP => SP,
        other => other,
    };
    let mut space_seen = classes[0] == SP;
    let mut ri_run = if classes[0] == RI { 1usize } else { 0 };

    for i in 1..n {
        let prev_raw = classes[i - 1];
        let cls = resolve(classes[i]);
        let raw = classes[i];

        let opportunity = if prev_raw == BK || prev_raw == LF || prev_raw == NL {
            BreakOpportunity::Mandatory
        } else if prev_raw == CR {
            if raw == LF {
                BreakOpportunity::NoBreak
            } else {
                BreakOpportunity::Mandatory
            }
        } else if matches!(raw, BK | CR | LF | NL) {
            // LB6
            BreakOpportunity::NoBreak
        } else if raw == SP || raw == ZW {
            // LB7
            BreakOpportunity::NoBreak
        } else if before == ZW {
            // LB8: ZW SP* allows a break
            BreakOpportunity::Optional
        } else if !space_seen && prev_raw == ZWJ {
            // LB8a
            BreakOpportunity::NoBreak
        } else if !space_seen && matches!(raw, CM | ZWJ) {
            // LB9: the mark joins its base
            BreakOpportunity::NoBreak
        } else if space_seen {
            match spaced_action(before, cls) {
                PairAction::Prohibited => BreakOpportunity::NoBreak,
                // LB18: break after spaces
                _ => BreakOpportunity::Optional,
            }
        } else if before == RI && cls == RI {
            // LB30a: regional indicators join in pairs
            if ri_run % 2 == 1 {
                BreakOpportunity::NoBreak
            } else {
                BreakOpportunity::Optional
            }
        } else {
            match pair_action(before, cls) {
                PairAction::Direct => BreakOpportunity::Optional,
                _ => BreakOpportunity::NoBreak,
            }
        };
        breaks[i] = opportunity;

        // advance the left-hand state
        if raw == SP {
            space_seen = true;
            // regional indicators only pair up when directly adjacent
            ri_run = 0;
        } else if raw == ZW {
            before = ZW;
            space_seen = false;
            ri_run = 0;
        } else if !space_seen && matches!(raw, CM | ZWJ) && !matches!(before, BK | CR | LF | NL | ZW)
        {
            // absorbed into the current base (LB9); state unchanged
        } else {
            before = match cls {
                CM | ZWJ => AL, // LB10
                other => other,
            };
            space_seen = false;
            ri_run = if cls == RI { ri_run + 1 } else { 0 };
        }
    }
    LineBreaks { classes, breaks }
}

#[cfg(test)]
mod tests {
    use super::BreakOpportunity::{Mandatory, NoBreak, Optional};
    use super::*;

    fn breaks(text: &str) -> Vec<BreakOpportunity> {
        analyze(text).opportunities().to_vec()
    }

    #[test]
    fn boundary_array_shape() {
        let text = "hello";
        let result = analyze(text);
        assert_eq!(result.opportunities().len(), text.chars().count() + 1);
        assert_eq!(result.opportunities()[0], NoBreak);
        assert_eq!(*result.opportunities().last().unwrap(), Mandatory);
    }

    #[test]
    fn space_gives_a_single_opportunity() {
        // LB7 before the space, LB18 after it
        assert_eq!(breaks("A B"), vec![NoBreak, NoBreak, Optional, Mandatory]);
    }

    #[test]
    fn crlf_is_one_break() {
        let result = breaks("A\r\nB");
        assert_eq!(result[1], NoBreak);
        assert_eq!(result[2], NoBreak);
        assert_eq!(result[3], Mandatory);
        assert_eq!(result[4], Mandatory);
    }

    #[test]
    fn lone_controls_break() {
        assert_eq!(breaks("A\nB")[2], Mandatory);
        assert_eq!(breaks("A\rB")[2], Mandatory);
        assert_eq!(breaks("A\u{85}B")[2], Mandatory);
    }

    #[test]
    fn no_break_inside_words_or_numbers() {
        assert_eq!(breaks("ab"), vec![NoBreak, NoBreak, Mandatory]);
        assert_eq!(
            breaks("3.14"),
            vec![NoBreak, NoBreak, NoBreak, NoBreak, Mandatory]
        );
    }

    #[test]
    fn hyphen_allows_break_after() {
        // LB21 prohibits before the hyphen, LB25/LB31 interplay allows after
        let result = breaks("go-to");
        assert_eq!(result[2], NoBreak);
        assert_eq!(result[3], Optional);
    }

    #[test]
    fn zero_width_space_allows_break() {
        let result = breaks("a\u{200B}b");
        assert_eq!(result[1], NoBreak); // LB7
        assert_eq!(result[2], Optional); // LB8
    }

    #[test]
    fn word_joiner_glues() {
        let result = breaks("a \u{2060}b");
        // the space would break, but WJ prohibits on both sides
        assert_eq!(result[2], NoBreak);
        assert_eq!(result[3], NoBreak);
    }

    #[test]
    fn no_break_before_closers() {
        let result = breaks("(ab) c");
        assert_eq!(result[1], NoBreak); // LB14
        assert_eq!(result[3], NoBreak); // LB13
        assert_eq!(result[4], NoBreak); // LB7
        assert_eq!(result[5], Optional);
    }

    #[test]
    fn combining_marks_join_their_base() {
        let result = breaks("e\u{301}x");
        assert_eq!(result[1], NoBreak); // LB9
        assert_eq!(result[2], NoBreak); // LB28 via the base class
    }

    #[test]
    fn combining_mark_after_hard_break_is_alphabetic() {
        // LB9 does not absorb a mark into a preceding hard break; the
        // mark resolves to AL (LB10) and joins the following letter
        let result = breaks("a\n\u{301}b");
        assert_eq!(result[2], Mandatory);
        assert_eq!(result[3], NoBreak); // LB28, not a default break
        let result = breaks("a\r\u{301}b");
        assert_eq!(result[2], Mandatory);
        assert_eq!(result[3], NoBreak);
    }

    #[test]
    fn zwj_prohibits_break() {
        let result = breaks("\u{1F469}\u{200D}\u{1F4BB}");
        assert_eq!(result[1], NoBreak); // LB9 absorbs ZWJ
        assert_eq!(result[2], NoBreak); // LB8a
    }

    #[test]
    fn regional_indicators_pair_up() {
        let result = breaks("\u{1F1E6}\u{1F1E7}\u{1F1E8}\u{1F1E9}");
        assert_eq!(result[1], NoBreak); // first pair joins
        assert_eq!(result[2], Optional); // between pairs
        assert_eq!(result[3], NoBreak); // second pair joins
    }

    #[test]
    fn ideographs_break_between() {
        let result = breaks("\u{4E2D}\u{6587}");
        assert_eq!(result[1], Optional);
    }

    #[test]
    fn small_kana_is_a_nonstarter() {
        // LB1 maps CJ to NS; LB21 then prohibits the break before it
        assert_eq!(break_class('\u{3083}'), BreakClass::CJ);
        let result = breaks("\u{304D}\u{3083}");
        assert_eq!(result[1], NoBreak);
    }

    #[test]
    fn prolonged_sound_mark_is_cj() {
        assert_eq!(break_class('\u{30FC}'), BreakClass::CJ);
    }

    #[test]
    fn emoji_modifiers_classify_as_id() {
        // the generic emoji range wins over the modifier subrange
        assert_eq!(break_class('\u{1F3FB}'), BreakClass::ID);
        assert_eq!(break_class('\u{1F44D}'), BreakClass::ID);
    }

    #[test]
    fn em_dash_pairs_join() {
        let result = breaks("a\u{2014}\u{2014}b");
        assert_eq!(result[2], NoBreak); // LB17
    }

    #[test]
    fn glue_prohibits_both_sides() {
        let result = breaks("a\u{A0}b");
        assert_eq!(result[1], NoBreak); // LB12a
        assert_eq!(result[2], NoBreak); // LB12
    }

    #[test]
    fn hangul_syllables_join() {
        assert_eq!(break_class('\u{AC00}'), BreakClass::H2);
        assert_eq!(break_class('\u{AC01}'), BreakClass::H3);
        let result = breaks("\u{1100}\u{1161}");
        assert_eq!(result[1], NoBreak); // LB26
    }

    #[test]
    fn numeric_prefix_and_postfix() {
        let result = breaks("$12%");
        assert_eq!(result[1], NoBreak); // LB25 PR x NU
        assert_eq!(result[3], NoBreak); // LB13/LB25 NU x PO
    }

    #[test]
    fn convenience_queries() {
        let result = analyze("A B C");
        assert!(!result.can_break_at(1));
        assert!(result.can_break_at(2));
        assert!(!result.must_break_at(2));
        assert!(result.must_break_at(5));
        assert_eq!(result.next_break(0), Some(2));
        assert_eq!(result.next_break(2), Some(4));
        assert_eq!(result.break_positions(), vec![2, 4, 5]);
    }

    #[test]
    fn empty_text() {
        let result = analyze("");
        assert_eq!(result.opportunities(), &[NoBreak]);
    }
}
