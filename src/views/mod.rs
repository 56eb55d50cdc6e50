//! Web interface components for the TubeTwo application
//!
//! This module contains the Dioxus components that make up the web interface:
//! the navigation bar, the search bar it embeds, and the feed pages.

/// Navigation bar component
mod navbar;
pub use navbar::Navbar;

/// Search input component
mod search_bar;
pub use search_bar::SearchBar;

/// Trending feed component
mod home;
pub use home::Home;

/// Search results component
mod search_feed;
pub use search_feed::SearchFeed;
