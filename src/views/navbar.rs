use crate::Route;
use crate::views::SearchBar;
use crate::{assets, style};
use dioxus::prelude::*;

/// Top navigation header, pinned to the viewport while scrolling. The logo and
/// title link back to the home feed; the search bar sits at the opposite end.
#[component]
pub fn Navbar() -> Element {
    let header_style = style::NAVBAR;
    rsx! {
        header { id: "navbar", style: "{header_style}",
            Link { to: Route::Home {}, class: "logo-link",
                img { src: assets::LOGO, alt: "logo", height: "45" }
                h1 { class: "site-title", "YouTube 2.0" }
            }
            SearchBar {}
        }
        Outlet::<Route> {}
    }
}
