pub mod app;
pub mod args;
pub mod catalog;
pub mod colors;
pub mod display;
pub mod fetch;
pub mod graph;
pub mod prompt;

// Re-export commonly used items
pub use args::Args;
pub use catalog::{ArtistRef, Playlist, Track, load_catalog};
pub use colors::ColorScheme;
pub use graph::{Artist, ArtistGraph, TrackSummary};
