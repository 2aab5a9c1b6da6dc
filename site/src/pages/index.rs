//! Landing page listing current and archived projects.

use leptos::prelude::*;

use crate::catalog::{ProjectCatalog, Section};
use crate::components::project_card::ProjectCard;
use crate::links::Links;
use crate::tools::ToolRegistry;

/// Both catalog sections in authored order, current first.
#[component]
pub fn IndexPage(catalog: ProjectCatalog, tools: ToolRegistry, links: Links) -> impl IntoView {
    let sections = Section::ALL
        .into_iter()
        .map(|section| {
            let cards = catalog
                .section(section)
                .iter()
                .enumerate()
                .map(|(index, project)| {
                    view! {
                        <ProjectCard
                            project=project.clone()
                            badges=tools.badges(&project.technologies)
                            image=links.resolve(&project.image)
                            detail_href=links.project(section, index)
                        />
                    }
                })
                .collect_view();
            let empty = catalog
                .section(section)
                .is_empty()
                .then(|| view! { <p class="projects__empty">"No projects yet."</p> });

            view! {
                <section id=section_id(section) class="projects">
                    <h2 class="projects__heading">{section_heading(section)}</h2>
                    {empty}
                    <div class="projects__grid">{cards}</div>
                </section>
            }
        })
        .collect_view();

    view! {
        <main class="index-page">{sections}</main>
    }
}

fn section_id(section: Section) -> &'static str {
    match section {
        Section::Current => "current-projects",
        Section::Archived => "archived-projects",
    }
}

fn section_heading(section: Section) -> &'static str {
    match section {
        Section::Current => "Current Projects",
        Section::Archived => "Archived Projects",
    }
}
