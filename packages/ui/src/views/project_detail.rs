use dioxus::prelude::*;
use store::ToolCategory;

use crate::icons::{FaArrowLeft, FaArrowUpRightFromSquare};
use crate::{use_session, Icon, PORTFOLIO_CSS};

/// Detail page of one project link, looked up by slug in the committed user.
#[component]
pub fn ProjectDetailView(slug: String) -> Element {
    let session = use_session();
    let project = session.read().find_link_by_slug(&slug).cloned();

    let Some(project) = project else {
        tracing::debug!(%slug, "no project for slug");
        return rsx! { ProjectNotFound {} };
    };
    let categories: Vec<ToolCategory> = ToolCategory::ALL
        .into_iter()
        .filter(|c| !project.tools.get(*c).is_empty())
        .collect();

    rsx! {
        document::Stylesheet { href: PORTFOLIO_CSS }

        div {
            class: "project-detail",
            Link {
                class: "back-link",
                to: "/",
                Icon { width: 14, height: 14, icon: FaArrowLeft }
                span { "Back to portfolio" }
            }

            h1 { "Project: {project.title}" }
            if !project.subtitle.is_empty() {
                p { class: "project-subtitle", "{project.subtitle}" }
            }

            if let Some(cover) = project.cover.as_ref() {
                div {
                    class: "project-cover",
                    img { src: "{cover}", alt: "{project.title}" }
                }
            }

            p { class: "project-description", "{project.description}" }

            div {
                class: "project-tools",
                for category in categories {
                    div {
                        key: "{category.label()}",
                        h2 { "{category.label()}" }
                        div {
                            class: "tag-list",
                            for tool in project.tools.get(category).iter() {
                                span { key: "{tool}", class: "tag", "{tool}" }
                            }
                        }
                    }
                }
            }

            if !project.year.is_empty() {
                p { class: "project-year", "{project.year}" }
            }

            a {
                class: "btn primary",
                href: "{project.link}",
                target: "_blank",
                rel: "noreferrer",
                Icon { width: 14, height: 14, icon: FaArrowUpRightFromSquare }
                span { "Visit project" }
            }
        }
    }
}

#[component]
pub fn ProjectNotFound() -> Element {
    rsx! {
        document::Stylesheet { href: PORTFOLIO_CSS }

        div {
            class: "project-not-found",
            h1 { "Project not found" }
            p { "The project you are looking for does not exist or was renamed." }
            Link {
                class: "btn primary",
                to: "/",
                "Back to portfolio"
            }
        }
    }
}
