//! In-memory video catalog backing the feed and search pages.
//!
//! There is no database: the catalog is embedded as JSON at compile time and
//! deserialized once on first access. The server functions in the views query it
//! through [`trending`] and [`search`].

use serde::{Deserialize, Serialize};

/// A single catalog entry, shared with the client through the server-fn boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub channel: String,
    pub views: u64,
}

#[cfg(feature = "server")]
mod store {
    use super::Video;

    const CATALOG_JSON: &str = include_str!("../data/catalog.json");

    lazy_static::lazy_static! {
        static ref CATALOG: Vec<Video> = match serde_json::from_str(CATALOG_JSON) {
            Ok(videos) => videos,
            Err(e) => {
                log::error!("embedded catalog is malformed: {}", e);
                Vec::new()
            }
        };
    }

    /// Full catalog ordered by view count, most viewed first.
    pub fn trending() -> Vec<Video> {
        let mut videos = CATALOG.clone();
        videos.sort_by(|a, b| b.views.cmp(&a.views));
        videos
    }

    /// Case-insensitive substring match on title or channel. A blank term
    /// matches nothing.
    pub fn search(term: &str) -> Vec<Video> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        CATALOG
            .iter()
            .filter(|v| {
                v.title.to_lowercase().contains(&needle)
                    || v.channel.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_catalog_embeds_and_parses() {
            assert!(!trending().is_empty());
        }

        #[test]
        fn test_trending_sorted_by_views() {
            let videos = trending();
            for pair in videos.windows(2) {
                assert!(pair[0].views >= pair[1].views);
            }
        }

        #[test]
        fn test_search_is_case_insensitive() {
            let lower = search("rust");
            let upper = search("RUST");
            assert_eq!(lower, upper);
            assert!(!lower.is_empty());
        }

        #[test]
        fn test_search_matches_channel_names() {
            let results = search("ferris");
            assert!(results.iter().all(|v| {
                v.title.to_lowercase().contains("ferris")
                    || v.channel.to_lowercase().contains("ferris")
            }));
            assert!(!results.is_empty());
        }

        #[test]
        fn test_blank_search_matches_nothing() {
            assert!(search("").is_empty());
            assert!(search("   ").is_empty());
        }
    }
}

#[cfg(feature = "server")]
pub use store::{search, trending};
