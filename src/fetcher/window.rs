//! Clip time windows and context padding.

use crate::constants::window;

/// A clip's time range within its source recording, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipWindow {
    /// Start offset in seconds.
    pub start: u32,
    /// End offset in seconds.
    pub end: u32,
}

impl ClipWindow {
    /// Create a window from start and end offsets.
    #[must_use]
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Widen the window with context padding.
    ///
    /// Clips starting more than 15 seconds into the recording are padded by
    /// 15 seconds on both sides. Clips near the start keep their start offset
    /// and absorb the full 30 seconds at the end, so every padded window
    /// grows by the same amount. End offsets near `u32::MAX` saturate instead
    /// of wrapping.
    #[must_use]
    pub fn padded(self) -> Self {
        if self.start > window::NEAR_START_THRESHOLD_SECS {
            Self {
                start: self.start - window::PADDING_SECS,
                end: self.end.saturating_add(window::PADDING_SECS),
            }
        } else {
            Self {
                start: self.start,
                end: self.end.saturating_add(window::NEAR_START_EXTENSION_SECS),
            }
        }
    }

    /// Duration of the window in seconds.
    #[must_use]
    pub fn duration(self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

impl std::fmt::Display for ClipWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
