//! Unicode glyphs used in labels.

pub(crate) const KNIGHT: &str = "\u{265E}";
pub(crate) const PLAY: &str = "\u{25B6}";
pub(crate) const STOP: &str = "\u{23F9}";
pub(crate) const REFRESH: &str = "\u{27F3}";
pub(crate) const SAVE: &str = "\u{1F4BE}";
pub(crate) const CHECK: &str = "\u{2714}";
pub(crate) const CANCEL: &str = "\u{2716}";
pub(crate) const WARNING: &str = "\u{26A0}";
pub(crate) const HOURGLASS: &str = "\u{231B}";
pub(crate) const GEAR: &str = "\u{2699}";
pub(crate) const PALETTE: &str = "\u{1F3A8}";
pub(crate) const TROPHY: &str = "\u{1F3C6}";
