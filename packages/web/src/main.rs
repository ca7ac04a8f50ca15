use dioxus::prelude::*;

use store::PortfolioConfig;
use ui::PortfolioProvider;
use views::{Home, ProjectDetail};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/projects/:slug")]
    ProjectDetail { slug: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded at build time; edit and rebuild to change thresholds.
const PORTFOLIO_TOML: &str = include_str!("../portfolio.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        tracing::info!("loading {}", PortfolioConfig::filename());
        PortfolioConfig::from_toml_or_default(PORTFOLIO_TOML)
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        PortfolioProvider {
            config: config,
            Router::<Route> {}
        }
    }
}
