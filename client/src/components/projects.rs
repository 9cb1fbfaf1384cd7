//! Featured project cards.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::section_heading::SectionHeading;
use crate::components::sketch_card::{SketchCard, alternating_rotation};
use crate::content::projects::{PROJECTS, Project, ProjectMotif};
use crate::content::sections::SectionId;
use crate::util::reveal::reveal_classes;

#[component]
pub fn Projects() -> impl IntoView {
    let cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| view! { <ProjectCard project=*project rotate=alternating_rotation(index, 1.0)/> })
        .collect_view();

    view! {
        <section id=SectionId::Projects.id() class="section">
            <SectionHeading title="Featured Projects" highlight="#ffcc80"/>
            <div class="grid grid--two grid--roomy">{cards}</div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, rotate: f64) -> impl IntoView {
    let tech = project
        .tech
        .iter()
        .map(|tag| view! { <span class="tag sketch-border">{*tag}</span> })
        .collect_view();

    view! {
        <div class=reveal_classes("")>
            <SketchCard class="project" rotate=rotate>
                <div class="project__art">
                    <div class="project__dots" aria-hidden="true"></div>
                    <MotifArt motif=project.motif/>
                </div>
                <h3 class="project__title">{project.title}</h3>
                <p class="project__description">{project.description}</p>
                <div class="project__footer">
                    {project.outcome.map(|outcome| view! {
                        <div class="project__note">
                            <p>"🏆 Outcome: " {outcome}</p>
                        </div>
                    })}
                    {project.features.map(|features| view! {
                        <div class="project__note project__note--features">
                            <p>"✨ Features: " {features}</p>
                        </div>
                    })}
                    <div class="tag-row">{tech}</div>
                </div>
            </SketchCard>
        </div>
    }
}

#[component]
fn MotifArt(motif: ProjectMotif) -> impl IntoView {
    match motif {
        ProjectMotif::Brain => view! {
            <div class="motif">
                <Icon kind=IconKind::Brain size=120 stroke_width=1.0/>
                <div class="motif__spark bounce">
                    <Icon kind=IconKind::Sparkles size=40 class="motif__spark-icon"/>
                </div>
            </div>
        }
        .into_any(),
        ProjectMotif::App => view! {
            <div class="motif">
                <div class="motif__phone">
                    <Icon kind=IconKind::Smartphone size=64/>
                </div>
            </div>
        }
        .into_any(),
    }
}
