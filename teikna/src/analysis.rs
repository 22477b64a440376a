//! Whole-string text analysis.
//!
//! Bundles the three segmentation passes a shaping pipeline runs over
//! a piece of text: script runs, bidirectional embedding levels and
//! line-break opportunities. Each pass is also available on its own in
//! the [`text`](crate::text) module.

use crate::text::{bidi, linebreak, script, Direction};

/// The combined segmentation of one piece of text.
#[derive(Clone, Debug)]
pub struct TextAnalysis<'a> {
    text: &'a str,
    runs: Vec<script::ScriptRun<'a>>,
    bidi: bidi::BidiInfo,
    breaks: linebreak::LineBreaks,
}

impl<'a> TextAnalysis<'a> {
    /// Analyzes a string: script runs, embedding levels and break
    /// opportunities in one pass over the input.
    pub fn new(text: &'a str, direction: Option<Direction>) -> Self {
        Self {
            text,
            runs: script::script_runs(text),
            bidi: bidi::embedding_levels(text, direction),
            breaks: linebreak::analyze(text),
        }
    }

    /// The analyzed text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The script runs, in input order.
    pub fn script_runs(&self) -> &[script::ScriptRun<'a>] {
        &self.runs
    }

    /// The dominant script of the text.
    pub fn dominant_script(&self) -> script::Script {
        script::detect_script(self.text)
    }

    /// The per-code-point embedding levels.
    pub fn levels(&self) -> &[u8] {
        &self.bidi.levels
    }

    /// The resolved paragraphs.
    pub fn paragraphs(&self) -> &[bidi::Paragraph] {
        &self.bidi.paragraphs
    }

    /// The per-boundary line-break opportunities.
    pub fn break_opportunities(&self) -> &[linebreak::BreakOpportunity] {
        self.breaks.opportunities()
    }

    /// The full line-break analysis.
    pub fn line_breaks(&self) -> &linebreak::LineBreaks {
        &self.breaks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{BreakOpportunity, Script};

    #[test]
    fn combined_analysis() {
        let analysis = TextAnalysis::new("abc \u{5D0}\u{5D1}", None);
        assert_eq!(analysis.script_runs().len(), 2);
        assert_eq!(analysis.script_runs()[1].script, Script::Hebrew);
        assert_eq!(analysis.dominant_script(), Script::Latin);
        assert_eq!(analysis.levels(), &[0, 0, 0, 0, 1, 1]);
        assert_eq!(analysis.paragraphs().len(), 1);
        // 6 code points, 7 boundaries
        assert_eq!(analysis.break_opportunities().len(), 7);
        assert_eq!(
            analysis.break_opportunities()[4],
            BreakOpportunity::Optional
        );
    }
}
