use crate::Route;
use dioxus::prelude::*;

/// Self-contained search input. Submitting a non-empty query navigates to the
/// search results page; the navbar passes it nothing.
#[component]
pub fn SearchBar() -> Element {
    let mut query = use_signal(String::new);
    let nav = use_navigator();

    rsx! {
        form { class: "search-bar",
            onsubmit: move |event| {
                event.prevent_default();
                let term = query.read().trim().to_string();
                if !term.is_empty() {
                    nav.push(Route::SearchFeed { query: term });
                    query.set(String::new());
                }
            },
            input {
                r#type: "text",
                id: "search-input",
                placeholder: "Search...",
                value: "{query}",
                oninput: move |event| query.set(event.value()),
            }
            button { r#type: "submit", "🔍" }
        }
    }
}
