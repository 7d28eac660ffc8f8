//! Layout queries the scroll engine depends on.

/// Read-only view of the page layout at the moment of a scroll event.
///
/// All offsets are document coordinates in pixels.
pub trait GeometryProvider {
    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;
    /// Viewport width.
    fn viewport_width(&self) -> f64;
    /// Top of the timeline's visual container.
    fn track_top(&self) -> f64;
    /// Top of the section following the timeline.
    fn next_section_top(&self) -> f64;
    /// Rendered height of the track line.
    fn track_height(&self) -> f64;
    /// Top of the entry at `index`, if it is laid out.
    fn entry_top(&self, index: usize) -> Option<f64>;
}

/// Fixed geometry snapshot, used by the CLI and in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticGeometry {
    pub scroll_y: f64,
    pub viewport_width: f64,
    pub track_top: f64,
    pub next_section_top: f64,
    pub track_height: f64,
    pub entry_tops: Vec<f64>,
}

impl StaticGeometry {
    /// Same layout, different scroll position.
    pub fn scrolled_to(&self, scroll_y: f64) -> Self {
        Self {
            scroll_y,
            ..self.clone()
        }
    }
}

impl GeometryProvider for StaticGeometry {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn track_top(&self) -> f64 {
        self.track_top
    }

    fn next_section_top(&self) -> f64 {
        self.next_section_top
    }

    fn track_height(&self) -> f64 {
        self.track_height
    }

    fn entry_top(&self, index: usize) -> Option<f64> {
        self.entry_tops.get(index).copied()
    }
}
