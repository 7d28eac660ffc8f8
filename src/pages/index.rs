//! Timeline page: rendering, search overlay and scroll animation.

use tracing::{debug, error};

use crate::config::LayoutConfig;
use crate::loader::{LoadError, Loader};
use crate::models::IndexData;
use crate::render::{messages, render_message, render_search_result, render_timeline};
use crate::routes::Route;
use crate::scroll::{track_line_height, GeometryProvider, ScrollEngine, ScrollUpdate};
use crate::search::{SearchAction, SearchDispatcher};
use crate::view::html::nodes_to_html;
use crate::view::{Element, ViewNode};

/// Side effect a page interaction asks the host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
    None,
    Navigate(Route),
    /// Show a notification with this message.
    Alert(&'static str),
    ScrollToTop,
}

/// State of the timeline page after its data has loaded (or failed to).
#[derive(Debug, Clone)]
pub struct IndexPage {
    data: IndexData,
    timeline: Vec<ViewNode>,
    load_failed: bool,
    engine: ScrollEngine,
    search_result: Option<Element>,
    query: String,
}

impl IndexPage {
    /// Build the page from loaded data.
    pub fn from_data(data: IndexData, layout: LayoutConfig) -> Self {
        let timeline = render_timeline(&data.timeline);
        let engine = ScrollEngine::new(data.timeline.len(), layout);
        Self {
            data,
            timeline,
            load_failed: false,
            engine,
            search_result: None,
            query: String::new(),
        }
    }

    /// Page shown when loading failed: the timeline container holds the error
    /// message and there is nothing to animate.
    pub fn failed(err: &LoadError, layout: LayoutConfig) -> Self {
        error!("Failed to load timeline data: {}", err);
        Self {
            data: IndexData::default(),
            timeline: vec![render_message(messages::INDEX_LOAD_ERROR)],
            load_failed: true,
            engine: ScrollEngine::new(0, layout),
            search_result: None,
            query: String::new(),
        }
    }

    /// Load both datasets and build the page.
    pub async fn load(loader: &Loader, layout: LayoutConfig) -> Self {
        match loader.load_index().await {
            Ok(data) => Self::from_data(data, layout),
            Err(e) => Self::failed(&e, layout),
        }
    }

    pub fn data(&self) -> &IndexData {
        &self.data
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Children of the timeline container.
    pub fn timeline_content(&self) -> &[ViewNode] {
        &self.timeline
    }

    pub fn timeline_html(&self) -> String {
        nodes_to_html(&self.timeline)
    }

    /// Track line height for the current layout.
    pub fn track_line_height(&self, geometry: &dyn GeometryProvider) -> f64 {
        track_line_height(
            geometry.track_top(),
            geometry.next_section_top(),
            self.engine.layout(),
        )
    }

    pub fn engine(&self) -> &ScrollEngine {
        &self.engine
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Whether the inline search result is showing.
    pub fn is_search_active(&self) -> bool {
        self.search_result.is_some()
    }

    pub fn main_hidden(&self) -> bool {
        self.is_search_active()
    }

    pub fn footer_hidden(&self) -> bool {
        self.is_search_active()
    }

    pub fn search_result(&self) -> Option<&Element> {
        self.search_result.as_ref()
    }

    /// Run the search for the current query.
    pub fn submit_search(&mut self) -> PageEffect {
        let shown = match SearchDispatcher::new(&self.data).dispatch(&self.query) {
            SearchAction::Ignore => return PageEffect::None,
            SearchAction::Navigate(route) => {
                debug!("Search navigates to {}", route);
                return PageEffect::Navigate(route);
            }
            SearchAction::NotFound => return PageEffect::Alert(messages::SEARCH_NOT_FOUND),
            SearchAction::ShowEntry(entry) => render_search_result(entry),
        };
        self.search_result = Some(shown);
        PageEffect::None
    }

    /// Set the query and run it.
    pub fn search(&mut self, query: &str) -> PageEffect {
        self.set_query(query);
        self.submit_search()
    }

    /// Home button: leave search mode if active, otherwise scroll to the top.
    pub fn home(&mut self) -> PageEffect {
        if self.is_search_active() {
            self.dismiss_search();
            PageEffect::None
        } else {
            PageEffect::ScrollToTop
        }
    }

    /// Hide the search result and restore the page.
    pub fn dismiss_search(&mut self) {
        self.search_result = None;
        self.query.clear();
    }

    /// Initial reveal check once the timeline is laid out.
    pub fn attach(&mut self, geometry: &dyn GeometryProvider) -> ScrollUpdate {
        self.engine.attach(geometry)
    }

    /// Scroll handler; paused while the search result is showing.
    pub fn on_scroll(&mut self, geometry: &dyn GeometryProvider) -> ScrollUpdate {
        let suspended = self.is_search_active();
        self.engine.on_scroll(geometry, suspended)
    }
}
