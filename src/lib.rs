//! ShowScout - search a TV-show catalog and browse episode lists
//!
//! This library wraps the TVMaze catalog API in two stable shapes (`Show`,
//! `Episode`) and keeps a search-results panel and an on-demand episode
//! panel synchronized with user interaction. The binary in `src/main.rs`
//! drives it from an interactive prompt loop.
//!
//! ```no_run
//! use show_scout::{Controller, TvMazeClient};
//!
//! let mut controller = Controller::new(TvMazeClient::new());
//! controller.search("bletchley")?;
//! controller.show_list().write_to(std::io::stdout())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod catalog;
mod controller;
mod view;

pub use catalog::{Episode, NetworkError, ShapeError, Show, TvMazeClient, to_episode, to_show};
pub use controller::Controller;
pub use view::{EpisodePanel, MISSING_ARTWORK_URL, ShowListView};

use thiserror::Error;

/// Top-level error type for widget operations
#[derive(Debug, Error)]
pub enum WidgetError {
    /// A catalog call failed at the transport or status level
    #[error("Catalog request failed: {0}")]
    Network(#[from] NetworkError),

    /// A raw record did not match its expected schema
    #[error("Catalog response had an unexpected shape: {0}")]
    Shape(#[from] ShapeError),

    /// A selection pointed at a card that is not in the current result set
    #[error("No show card at position {index}")]
    UnknownCard { index: usize },
}
