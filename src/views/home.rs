use crate::catalog::Video;
use dioxus::prelude::*;

/// Landing page: the trending feed.
#[component]
pub fn Home() -> Element {
    let feed = use_resource(|| async move { trending_videos().await });

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        main { class: "feed",
            h2 { "Trending" }
            match &*feed.read() {
                None => rsx! {
                    p { class: "empty-message", "Loading feed..." }
                },
                Some(Ok(videos)) => rsx! {
                    ul { class: "video-list",
                        for video in videos.iter() {
                            VideoCard { key: "{video.id}", video: video.clone() }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    p { class: "error-message", "Error loading feed: {e}" }
                },
            }
        }
    }
}

/// One row in a feed list.
#[component]
pub fn VideoCard(video: Video) -> Element {
    rsx! {
        li { class: "video-card",
            span { class: "video-title", "{video.title}" }
            span { class: "video-channel", "{video.channel}" }
            span { class: "video-views", "{video.views} views" }
        }
    }
}

#[server]
async fn trending_videos() -> Result<Vec<Video>, ServerFnError> {
    Ok(crate::catalog::trending())
}
