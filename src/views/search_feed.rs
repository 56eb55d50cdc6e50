use crate::catalog::Video;
use super::home::VideoCard;
use dioxus::prelude::*;

/// Search results page for the query carried in the route.
#[component]
pub fn SearchFeed(query: String) -> Element {
    let query = std::rc::Rc::new(query);
    let query_for_future = query.clone();

    let results = use_resource(move || {
        let query = query_for_future.clone();
        async move { search_videos(query.to_string()).await }
    });

    rsx! {
        main { class: "feed",
            h2 { "Results for \"{query}\"" }
            match &*results.read() {
                None => rsx! {
                    p { class: "empty-message", "Searching..." }
                },
                Some(Ok(videos)) => {
                    if videos.is_empty() {
                        rsx! {
                            p { class: "empty-message", "No videos found for \"{query}\"." }
                        }
                    } else {
                        rsx! {
                            ul { class: "video-list",
                                for video in videos.iter() {
                                    VideoCard { key: "{video.id}", video: video.clone() }
                                }
                            }
                        }
                    }
                }
                Some(Err(e)) => rsx! {
                    p { class: "error-message", "Error loading results: {e}" }
                },
            }
        }
    }
}

#[server]
async fn search_videos(query: String) -> Result<Vec<Video>, ServerFnError> {
    Ok(crate::catalog::search(&query))
}
