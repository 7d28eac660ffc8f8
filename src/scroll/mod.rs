//! Scroll-driven progress marker and entry reveal.
//!
//! Each scroll event maps the scroll offset onto `progress ∈ [0, 1]` between
//! the top of the timeline and a point above the next section, moves the
//! marker proportionally along the track, and reveals every entry the marker
//! has reached. Reveal is one-way for the lifetime of the engine.

mod geometry;

pub use geometry::{GeometryProvider, StaticGeometry};

use tracing::trace;

use crate::config::LayoutConfig;

/// Clamp a progress ratio into [0, 1]. NaN maps to 0.
pub fn clamp_progress(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Scroll progress through the timeline.
///
/// A zero or negative span (next section too close to the track) snaps to
/// 0 before the track and 1 from the track onwards.
pub fn scroll_progress(
    scroll_y: f64,
    track_top: f64,
    next_section_top: f64,
    layout: &LayoutConfig,
) -> f64 {
    let start = track_top;
    let end = next_section_top - layout.scroll_end_margin;
    let span = end - start;

    if span <= 0.0 || span.is_nan() {
        return if scroll_y >= start { 1.0 } else { 0.0 };
    }
    clamp_progress((scroll_y - start) / span)
}

/// Marker top (relative to the track) for a given progress.
pub fn marker_position(progress: f64, track_height: f64, layout: &LayoutConfig) -> f64 {
    layout.marker_offset + progress * (track_height - layout.marker_track_inset)
}

/// Height of the track line so it ends before the next section.
pub fn track_line_height(track_top: f64, next_section_top: f64, layout: &LayoutConfig) -> f64 {
    (next_section_top - track_top - layout.track_bottom_margin).max(0.0)
}

/// What a scroll event changed.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollUpdate {
    /// No entries; nothing to animate.
    Inactive,
    /// Search overlay is up; state untouched.
    Suspended,
    /// Narrow viewport: everything revealed, marker untouched.
    AllRevealed { newly_revealed: Vec<usize> },
    /// Marker moved.
    Marker {
        progress: f64,
        marker_top: f64,
        newly_revealed: Vec<usize>,
    },
}

impl ScrollUpdate {
    pub fn newly_revealed(&self) -> &[usize] {
        match self {
            Self::AllRevealed { newly_revealed } | Self::Marker { newly_revealed, .. } => {
                newly_revealed
            }
            Self::Inactive | Self::Suspended => &[],
        }
    }
}

/// Marker and reveal state for one timeline.
#[derive(Debug, Clone)]
pub struct ScrollEngine {
    layout: LayoutConfig,
    revealed: Vec<bool>,
    marker_top: Option<f64>,
    progress: f64,
}

impl ScrollEngine {
    pub fn new(entry_count: usize, layout: LayoutConfig) -> Self {
        Self {
            layout,
            revealed: vec![false; entry_count],
            marker_top: None,
            progress: 0.0,
        }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn entry_count(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Indices of revealed entries in order.
    pub fn revealed_indices(&self) -> Vec<usize> {
        self.revealed
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.then_some(i))
            .collect()
    }

    /// Last marker position, if it has moved at all.
    pub fn marker_top(&self) -> Option<f64> {
        self.marker_top
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    fn is_narrow(&self, geometry: &dyn GeometryProvider) -> bool {
        geometry.viewport_width() <= self.layout.mobile_breakpoint
    }

    fn reveal_all(&mut self) -> Vec<usize> {
        let mut newly = Vec::new();
        for (i, revealed) in self.revealed.iter_mut().enumerate() {
            if !*revealed {
                *revealed = true;
                newly.push(i);
            }
        }
        newly
    }

    /// Initial check when the engine is attached to a page.
    ///
    /// Narrow viewports reveal everything up front; otherwise nothing changes
    /// until the first scroll.
    pub fn attach(&mut self, geometry: &dyn GeometryProvider) -> ScrollUpdate {
        if self.revealed.is_empty() {
            return ScrollUpdate::Inactive;
        }
        if self.is_narrow(geometry) {
            return ScrollUpdate::AllRevealed {
                newly_revealed: self.reveal_all(),
            };
        }
        ScrollUpdate::Marker {
            progress: self.progress,
            marker_top: self.marker_top.unwrap_or(self.layout.marker_offset),
            newly_revealed: Vec::new(),
        }
    }

    /// Handle a scroll event.
    pub fn on_scroll(&mut self, geometry: &dyn GeometryProvider, suspended: bool) -> ScrollUpdate {
        if self.revealed.is_empty() {
            return ScrollUpdate::Inactive;
        }
        if suspended {
            return ScrollUpdate::Suspended;
        }
        if self.is_narrow(geometry) {
            return ScrollUpdate::AllRevealed {
                newly_revealed: self.reveal_all(),
            };
        }

        let track_top = geometry.track_top();
        let progress = scroll_progress(
            geometry.scroll_y(),
            track_top,
            geometry.next_section_top(),
            &self.layout,
        );
        let marker_top = marker_position(progress, geometry.track_height(), &self.layout);
        let reach = marker_top + self.layout.reveal_lead;

        let mut newly_revealed = Vec::new();
        for (i, revealed) in self.revealed.iter_mut().enumerate() {
            if *revealed {
                continue;
            }
            let Some(entry_top) = geometry.entry_top(i) else {
                continue;
            };
            if reach >= entry_top - track_top {
                *revealed = true;
                newly_revealed.push(i);
            }
        }

        trace!(progress, marker_top, revealed = newly_revealed.len(), "scroll");
        self.progress = progress;
        self.marker_top = Some(marker_top);

        ScrollUpdate::Marker {
            progress,
            marker_top,
            newly_revealed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> StaticGeometry {
        // Track from 1000 to the next section at 3400: progress hits 1 at 3000.
        StaticGeometry {
            scroll_y: 0.0,
            viewport_width: 1280.0,
            track_top: 1000.0,
            next_section_top: 3400.0,
            track_height: 2320.0,
            entry_tops: vec![1100.0, 1600.0, 2200.0, 2900.0],
        }
    }

    #[test]
    fn test_progress_formula() {
        let layout = LayoutConfig::default();
        assert_eq!(scroll_progress(1000.0, 1000.0, 3400.0, &layout), 0.0);
        assert_eq!(scroll_progress(2000.0, 1000.0, 3400.0, &layout), 0.5);
        assert_eq!(scroll_progress(3000.0, 1000.0, 3400.0, &layout), 1.0);
    }

    #[test]
    fn test_progress_always_in_unit_range() {
        let layout = LayoutConfig::default();
        let inputs = [
            (-1.0e9, 1000.0, 3400.0),
            (1.0e9, 1000.0, 3400.0),
            (500.0, 1000.0, 1000.0),
            (1500.0, 1000.0, 1200.0),
            (1400.0, 1000.0, 1400.0),
            (f64::NAN, 1000.0, 3400.0),
            (0.0, f64::NAN, 3400.0),
            (f64::INFINITY, 0.0, 3400.0),
            (f64::NEG_INFINITY, 0.0, 3400.0),
        ];
        for (scroll_y, top, next) in inputs {
            let p = scroll_progress(scroll_y, top, next, &layout);
            assert!((0.0..=1.0).contains(&p), "{} out of range for {:?}", p, (scroll_y, top, next));
        }
    }

    #[test]
    fn test_clamp_progress() {
        assert_eq!(clamp_progress(-0.5), 0.0);
        assert_eq!(clamp_progress(1.5), 1.0);
        assert_eq!(clamp_progress(0.25), 0.25);
        assert_eq!(clamp_progress(f64::NAN), 0.0);
    }

    #[test]
    fn test_marker_position() {
        let layout = LayoutConfig::default();
        assert_eq!(marker_position(0.0, 2320.0, &layout), 120.0);
        assert_eq!(marker_position(1.0, 2320.0, &layout), 2400.0);
        assert_eq!(marker_position(0.5, 2320.0, &layout), 1260.0);
    }

    #[test]
    fn test_track_line_height() {
        let layout = LayoutConfig::default();
        assert_eq!(track_line_height(1000.0, 3400.0, &layout), 2320.0);
        assert_eq!(track_line_height(1000.0, 1010.0, &layout), 0.0);
    }

    #[test]
    fn test_reveal_follows_marker() {
        let geometry = desktop();
        let mut engine = ScrollEngine::new(4, LayoutConfig::default());

        // Marker at 120, reach 160: entry 0 sits 100px into the track
        let update = engine.on_scroll(&geometry.scrolled_to(0.0), false);
        assert_eq!(update.newly_revealed(), &[0]);

        // progress 0.25 -> marker 690, reach 730: entry 1 at 600
        let update = engine.on_scroll(&geometry.scrolled_to(1500.0), false);
        assert_eq!(update.newly_revealed(), &[1]);
        assert_eq!(engine.marker_top(), Some(690.0));

        // progress 1 -> marker 2400: everything
        let update = engine.on_scroll(&geometry.scrolled_to(5000.0), false);
        assert_eq!(update.newly_revealed(), &[2, 3]);
        assert_eq!(engine.revealed_count(), 4);
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let geometry = desktop();
        let mut engine = ScrollEngine::new(4, LayoutConfig::default());

        engine.on_scroll(&geometry.scrolled_to(2000.0), false);
        let before = engine.revealed_indices();
        assert!(!before.is_empty());

        for y in [1500.0, 500.0, 0.0, -200.0] {
            let update = engine.on_scroll(&geometry.scrolled_to(y), false);
            assert!(update.newly_revealed().is_empty());
            assert_eq!(engine.revealed_indices(), before);
        }
    }

    #[test]
    fn test_suspended_leaves_state_untouched() {
        let geometry = desktop();
        let mut engine = ScrollEngine::new(4, LayoutConfig::default());
        engine.on_scroll(&geometry.scrolled_to(0.0), false);
        let marker = engine.marker_top();

        let update = engine.on_scroll(&geometry.scrolled_to(5000.0), true);
        assert_eq!(update, ScrollUpdate::Suspended);
        assert_eq!(engine.marker_top(), marker);
        assert_eq!(engine.revealed_count(), 1);
    }

    #[test]
    fn test_narrow_viewport_reveals_all_without_marker() {
        let mut geometry = desktop();
        geometry.viewport_width = 900.0;
        let mut engine = ScrollEngine::new(4, LayoutConfig::default());

        let update = engine.attach(&geometry);
        assert_eq!(
            update,
            ScrollUpdate::AllRevealed {
                newly_revealed: vec![0, 1, 2, 3]
            }
        );
        assert!(engine.marker_top().is_none());

        let update = engine.on_scroll(&geometry, false);
        assert_eq!(update, ScrollUpdate::AllRevealed { newly_revealed: vec![] });
    }

    #[test]
    fn test_attach_on_desktop_reveals_nothing() {
        let mut engine = ScrollEngine::new(4, LayoutConfig::default());
        let update = engine.attach(&desktop());
        assert!(update.newly_revealed().is_empty());
        assert_eq!(engine.revealed_count(), 0);
    }

    #[test]
    fn test_empty_timeline_is_inactive() {
        let mut engine = ScrollEngine::new(0, LayoutConfig::default());
        assert_eq!(engine.attach(&desktop()), ScrollUpdate::Inactive);
        assert_eq!(engine.on_scroll(&desktop(), false), ScrollUpdate::Inactive);
    }

    #[test]
    fn test_custom_breakpoint() {
        let layout = LayoutConfig {
            mobile_breakpoint: 600.0,
            ..LayoutConfig::default()
        };
        let mut geometry = desktop();
        geometry.viewport_width = 768.0;
        let mut engine = ScrollEngine::new(4, layout);
        assert!(matches!(
            engine.on_scroll(&geometry, false),
            ScrollUpdate::Marker { .. }
        ));
    }
}
