//! Document shell and the server-side render entry points.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;

use crate::catalog::{ProjectCatalog, ProjectRecord};
use crate::components::theme_toggle::ThemeToggle;
use crate::links::Links;
use crate::pages::{index::IndexPage, project::ProjectPage};
use crate::tools::ToolRegistry;

/// Page title shared by every rendered document.
pub const SITE_TITLE: &str = "Portfolio";

/// WASM bundle that binds the theme toggle, relative to the static directory.
pub const BUNDLE_ASSET: &str = "pkg/site.js";

/// Icon font for the `devicon-*` classes used in tools files.
pub const DEVICON_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/gh/devicons/devicon@v2.16.0/devicon.min.css";

/// Full HTML document around a page body.
///
/// Loads the stylesheets and the WASM bundle that binds the theme toggle.
/// A missing bundle leaves the page static; everything else still renders.
#[component]
pub fn Shell(title: String, links: Links, children: Children) -> impl IntoView {
    let bootstrap = format!(
        "import init from '{}'; init();",
        links.asset(BUNDLE_ASSET)
    );

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <link rel="stylesheet" href=DEVICON_STYLESHEET/>
                <link rel="stylesheet" href=links.asset("css/style.css")/>
            </head>
            <body>
                <header class="site-header">
                    <h1 class="site-header__title">
                        <a href=links.home()>{SITE_TITLE}</a>
                    </h1>
                    <ThemeToggle/>
                </header>
                {children()}
                <script type="module" inner_html=bootstrap></script>
            </body>
        </html>
    }
}

/// Render the landing page for `catalog`.
#[must_use]
pub fn render_index(catalog: &ProjectCatalog, tools: &ToolRegistry, links: &Links) -> String {
    let catalog = catalog.clone();
    let tools = tools.clone();
    let links = links.clone();
    render(move || {
        let shell_links = links.clone();
        view! {
            <Shell title=SITE_TITLE.to_owned() links=shell_links>
                <IndexPage catalog=catalog tools=tools links=links/>
            </Shell>
        }
    })
}

/// Render the detail page for one project.
#[must_use]
pub fn render_project(project: &ProjectRecord, tools: &ToolRegistry, links: &Links) -> String {
    let project = project.clone();
    let tools = tools.clone();
    let links = links.clone();
    let title = format!("{} | {SITE_TITLE}", project.title);
    render(move || {
        let shell_links = links.clone();
        view! {
            <Shell title=title links=shell_links>
                <ProjectPage project=project tools=tools links=links/>
            </Shell>
        }
    })
}

fn render<V, F>(build: F) -> String
where
    V: IntoView,
    F: FnOnce() -> V,
{
    let owner = Owner::new();
    owner.with(|| build().to_html())
}
