mod assets;
mod catalog;
mod style;
mod views;

use dioxus::prelude::*;
use views::{Home, Navbar, SearchFeed};

/// Application routes. `Navbar` is the shared layout wrapping every page.
#[derive(Debug, Clone, PartialEq, Routable)]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/search/:query")]
    SearchFeed { query: String },
}

#[cfg(feature = "server")]
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log filter handed to env_logger, e.g. "debug" or "tubetwo=trace"
    #[arg(long, default_value_t = String::from("info"))]
    log: String,
}

fn main() {
    #[cfg(feature = "server")]
    {
        use clap::Parser;
        let args = Args::parse();
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(args.log.as_str()),
        )
        .init();
        log::info!("Welcome on tubetwo, serving the web interface");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: assets::MAIN_CSS }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn test_home_route_is_root() {
        assert_eq!(Route::Home {}.to_string(), "/");
    }

    #[test]
    fn test_search_route_round_trips() {
        let route: Route = "/search/rust".parse().map_err(|e| format!("{e}")).unwrap();
        assert_eq!(
            route,
            Route::SearchFeed {
                query: "rust".to_string()
            }
        );
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_args_parsing_defaults() {
        use clap::Parser;
        let args = super::Args::parse_from(vec!["tubetwo"]);
        assert_eq!(args.log, "info");
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_args_parsing_custom_filter() {
        use clap::Parser;
        let args = super::Args::parse_from(vec!["tubetwo", "--log", "tubetwo=debug"]);
        assert_eq!(args.log, "tubetwo=debug");
    }
}
