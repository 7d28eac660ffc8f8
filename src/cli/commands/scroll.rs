//! Scroll simulation command.

use clap::Args;
use console::style;

use skate_history::config::Settings;
use skate_history::scroll::{ScrollEngine, ScrollUpdate, StaticGeometry};

/// Layout and scroll position to simulate.
#[derive(Args, Debug)]
pub struct ScrollArgs {
    /// Vertical scroll offset
    #[arg(long, allow_hyphen_values = true)]
    scroll_y: f64,
    /// Viewport width
    #[arg(long, default_value = "1280")]
    viewport_width: f64,
    /// Top of the timeline container
    #[arg(long)]
    track_top: f64,
    /// Top of the section after the timeline
    #[arg(long)]
    next_section_top: f64,
    /// Track line height (defaults to the computed line height)
    #[arg(long)]
    track_height: Option<f64>,
    /// Top of each timeline entry, in order (repeatable)
    #[arg(long = "entry-top")]
    entry_tops: Vec<f64>,
    /// Simulate an open search result
    #[arg(long)]
    search_active: bool,
}

/// Attach an engine to the given layout, scroll once, and report.
pub fn cmd_scroll(settings: &Settings, args: &ScrollArgs) -> anyhow::Result<()> {
    let layout = settings.layout;
    let track_height = args.track_height.unwrap_or_else(|| {
        skate_history::scroll::track_line_height(args.track_top, args.next_section_top, &layout)
    });
    let geometry = StaticGeometry {
        scroll_y: args.scroll_y,
        viewport_width: args.viewport_width,
        track_top: args.track_top,
        next_section_top: args.next_section_top,
        track_height,
        entry_tops: args.entry_tops.clone(),
    };

    let mut engine = ScrollEngine::new(geometry.entry_tops.len(), layout);
    engine.attach(&geometry);
    let update = engine.on_scroll(&geometry, args.search_active);

    match update {
        ScrollUpdate::Inactive => println!("No entries; nothing to animate"),
        ScrollUpdate::Suspended => println!("Suspended while search result is showing"),
        ScrollUpdate::AllRevealed { .. } => {
            println!("Narrow viewport: all {} entries revealed", engine.revealed_count())
        }
        ScrollUpdate::Marker {
            progress,
            marker_top,
            ..
        } => {
            println!("{:<12} {:.4}", style("progress").bold(), progress);
            println!("{:<12} {:.1}px", style("marker").bold(), marker_top);
            println!(
                "{:<12} {:?} of {}",
                style("revealed").bold(),
                engine.revealed_indices(),
                engine.entry_count()
            );
        }
    }
    Ok(())
}
