//! Static assets, resolved once at build time and read-only thereafter.

use dioxus::prelude::*;

/// Site logo shown in the navigation header.
pub const LOGO: Asset = asset!("/assets/logo.svg");

/// Global stylesheet, installed by the root `App` component.
pub const MAIN_CSS: Asset = asset!("/assets/main.css");
