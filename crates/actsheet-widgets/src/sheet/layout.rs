#![forbid(unsafe_code)]

//! Layout measurement slots.

/// Heights reported by the host after layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeasuredHeights {
    /// The sheet panel (or centered card).
    pub panel: Option<f64>,
    /// The full-screen container the panel sits in.
    pub parent: Option<f64>,
}

/// Records layout-completion notifications.
///
/// Heights that are negative or not finite are not measurements and are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutMeasurer {
    heights: MeasuredHeights,
}

impl LayoutMeasurer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the panel height. Returns `true` if the stored value changed.
    pub fn record_panel(&mut self, height: f64) -> bool {
        Self::record(&mut self.heights.panel, height)
    }

    /// Record the parent height. Returns `true` if the stored value changed.
    pub fn record_parent(&mut self, height: f64) -> bool {
        Self::record(&mut self.heights.parent, height)
    }

    #[inline]
    pub fn heights(&self) -> MeasuredHeights {
        self.heights
    }

    #[inline]
    pub fn panel_height(&self) -> Option<f64> {
        self.heights.panel
    }

    #[inline]
    pub fn parent_height(&self) -> Option<f64> {
        self.heights.parent
    }

    /// Forget both measurements; used when the view tree is rebuilt.
    pub fn reset(&mut self) {
        self.heights = MeasuredHeights::default();
    }

    fn record(slot: &mut Option<f64>, height: f64) -> bool {
        if !height.is_finite() || height < 0.0 {
            return false;
        }
        if *slot == Some(height) {
            return false;
        }
        *slot = Some(height);
        true
    }
}
