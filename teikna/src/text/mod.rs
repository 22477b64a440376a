//! Unicode text analysis: script segmentation, line breaking and the
//! bidirectional algorithm.

pub mod bidi;
pub mod linebreak;
pub mod script;

pub use bidi::{embedding_levels, reorder_visual, BidiClass, BidiInfo, Paragraph};
pub use linebreak::{analyze, BreakClass, BreakOpportunity, LineBreaks};
pub use script::{
    detect_script, is_complex, is_script, script_direction, script_for_char, script_runs,
    script_tag, scripts_in, Script, ScriptRun,
};

/// Horizontal writing direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Text flows left to right.
    #[default]
    LeftToRight,
    /// Text flows right to left.
    RightToLeft,
}
