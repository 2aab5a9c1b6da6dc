//! Card for one project in a catalog section.

use leptos::prelude::*;

use crate::catalog::ProjectRecord;
use crate::components::tech_badge::TechBadge;
use crate::tools::TechBadge as Badge;

/// A project summary linking to its detail page.
#[component]
pub fn ProjectCard(
    project: ProjectRecord,
    badges: Vec<Badge>,
    image: String,
    detail_href: String,
) -> impl IntoView {
    let alt = project.title.clone();

    view! {
        <article class="project-card">
            <img class="project-card__image" src=image alt=alt loading="lazy"/>
            <div class="project-card__body">
                <h3 class="project-card__title">
                    <a href=detail_href>{project.title}</a>
                </h3>
                <p class="project-card__date">{project.date}</p>
                <p class="project-card__description">{project.description}</p>
                <div class="project-card__tech">
                    {badges.into_iter().map(|badge| view! { <TechBadge badge=badge/> }).collect_view()}
                </div>
                <div class="project-card__links">
                    <a class="btn btn--primary" href=project.demo_link target="_blank" rel="noopener">
                        "Live Demo"
                    </a>
                    <a class="btn" href=project.github_link target="_blank" rel="noopener">
                        "GitHub"
                    </a>
                </div>
            </div>
        </article>
    }
}
