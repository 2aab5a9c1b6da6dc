//! Detail page for a single project.

use leptos::prelude::*;

use crate::catalog::ProjectRecord;
use crate::components::tech_badge::TechBadge;
use crate::links::Links;
use crate::tools::ToolRegistry;

#[component]
pub fn ProjectPage(project: ProjectRecord, tools: ToolRegistry, links: Links) -> impl IntoView {
    let badges = tools.badges(&project.technologies);
    let image = links.resolve(&project.image);
    let alt = project.title.clone();

    view! {
        <main class="project-page">
            <a class="project-page__back" href=links.home()>"← All projects"</a>
            <h2 class="project-page__title">{project.title}</h2>
            <p class="project-page__date">{project.date}</p>
            <img class="project-page__image" src=image alt=alt/>
            <p class="project-page__description">{project.description}</p>
            <div class="project-page__tech">
                {badges.into_iter().map(|badge| view! { <TechBadge badge=badge/> }).collect_view()}
            </div>
            <div class="project-page__links">
                <a class="btn btn--primary" href=project.demo_link target="_blank" rel="noopener">
                    "Live Demo"
                </a>
                <a class="btn" href=project.github_link target="_blank" rel="noopener">
                    "GitHub"
                </a>
            </div>
        </main>
    }
}
