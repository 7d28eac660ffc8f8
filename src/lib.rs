//! Skateboarding history site: timeline, maneuver pages and the skate terapia
//! article.
//!
//! Datasets are loaded by [`loader`], turned into view trees by [`render`],
//! and driven by the page controllers in [`pages`]. The timeline's scroll
//! animation lives in [`scroll`] and the search box in [`search`].

pub mod config;
pub mod loader;
pub mod models;
pub mod pages;
pub mod render;
pub mod routes;
pub mod scroll;
pub mod search;
pub mod server;
pub mod services;
pub mod view;
