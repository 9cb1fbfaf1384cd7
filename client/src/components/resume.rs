//! On-page résumé document with a print trigger.
//!
//! The heading, print button, decorative stamp, and section icons carry
//! `print-hidden`; in print media only the document body reaches the page.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::section_heading::SectionHeading;
use crate::content::education::{EDUCATION, LANGUAGES, Language};
use crate::content::resume::{DECLARATION, KEY_PROJECTS, ROLES, SKILL_LINES, SUMMARY, numbered_title};
use crate::content::sections::SectionId;
use crate::content::profile;
use crate::util::print::print_page;
use crate::util::reveal::reveal_classes;

#[component]
pub fn Resume() -> impl IntoView {
    // Set once the host reports it cannot print; the button then stays inert.
    let print_blocked = RwSignal::new(false);

    view! {
        <section id=SectionId::Resume.id() class="section section--narrow resume">
            <SectionHeading
                title="My Resume"
                highlight="#ffcc80"
                subtitle="View or download my professional background"
                class="print-hidden"
            />
            <div class=reveal_classes("resume__actions print-hidden")>
                <button
                    class="sketch-button sketch-button--dark"
                    type="button"
                    disabled=move || print_blocked.get()
                    on:click=move |_| print_blocked.set(!print_page().is_available())
                >
                    <Icon kind=IconKind::Download/>
                    "Download PDF / Print"
                </button>
            </div>

            <div class=reveal_classes("")>
                <article class="resume__paper">
                    <div class="resume__lines print-hidden" aria-hidden="true"></div>
                    <ResumeHeader/>
                    <ResumeBlock icon=IconKind::Pencil title="Professional Summary">
                        <p class="resume__summary">{SUMMARY}</p>
                    </ResumeBlock>
                    <ResumeSkills/>
                    <ResumeExperience/>
                    <ResumeProjects/>
                    <ResumeEducation/>
                    <Declaration/>
                </article>
            </div>
        </section>
    }
}

/// Titled résumé block; the icon is screen-only.
#[component]
fn ResumeBlock(icon: IconKind, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="resume__block">
            <h4 class="resume__block-title">
                <Icon kind=icon size=20 class="print-hidden"/>
                {title}
            </h4>
            {children()}
        </div>
    }
}

#[component]
fn ResumeHeader() -> impl IntoView {
    view! {
        <header class="resume__header">
            <h3 class="resume__name">{profile::NAME}</h3>
            <div class="resume__contacts">
                <span class="resume__contact"><Icon kind=IconKind::MapPin size=18/> {profile::LOCATION}</span>
                <span class="resume__contact"><Icon kind=IconKind::Phone size=18/> {profile::PHONE}</span>
                <span class="resume__contact"><Icon kind=IconKind::Mail size=18/> {profile::EMAIL}</span>
                <span class="resume__contact"><Icon kind=IconKind::Github size=18/> {profile::GITHUB_DISPLAY}</span>
            </div>
            <div class="resume__stamp print-hidden" aria-hidden="true">"RESUME"</div>
        </header>
    }
}

#[component]
fn ResumeSkills() -> impl IntoView {
    let lines = SKILL_LINES
        .iter()
        .map(|line| {
            view! {
                <div class="resume__skill">
                    <span class="resume__skill-label">"• " {line.label} ":"</span>
                    <span class="resume__skill-items">{line.items}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <ResumeBlock icon=IconKind::Code title="Technical Skills">
            <div class="resume__skills">{lines}</div>
        </ResumeBlock>
    }
}

#[component]
fn ResumeExperience() -> impl IntoView {
    let roles = ROLES
        .iter()
        .map(|role| {
            let bullets = role
                .bullets
                .iter()
                .map(|bullet| {
                    let details = (!bullet.details.is_empty()).then(|| {
                        let items = bullet.details.iter().map(|d| view! { <li>{*d}</li> }).collect_view();
                        view! { <ul class="resume__sublist">{items}</ul> }
                    });
                    view! {
                        <li>
                            {bullet.lead.map(|lead| view! { <span class="resume__lead">{lead}</span> " " })}
                            {bullet.text}
                            {details}
                        </li>
                    }
                })
                .collect_view();

            view! {
                <div class="resume__role">
                    <div class="resume__role-header">
                        <h5 class="resume__role-title">{role.heading()}</h5>
                        <span class="resume__period">{role.period}</span>
                    </div>
                    <ul class="resume__list">{bullets}</ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <ResumeBlock icon=IconKind::Briefcase title="Professional Experience">
            {roles}
        </ResumeBlock>
    }
}

#[component]
fn ResumeProjects() -> impl IntoView {
    let projects = KEY_PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let points = project.points.iter().map(|p| view! { <li>{*p}</li> }).collect_view();
            view! {
                <div class="resume__project">
                    <h5 class="resume__role-title">{numbered_title(index, project)}</h5>
                    <p class="resume__tagline">{project.tagline}</p>
                    <ul class="resume__list">{points}</ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <ResumeBlock icon=IconKind::Sparkles title="Key Projects">
            <div class="resume__projects">{projects}</div>
        </ResumeBlock>
    }
}

#[component]
fn ResumeEducation() -> impl IntoView {
    let languages = LANGUAGES
        .iter()
        .map(|language| view! { <span>{Language::summary(language)}</span> })
        .collect_view();

    view! {
        <div class="resume__columns">
            <ResumeBlock icon=IconKind::GraduationCap title="Education">
                <p class="resume__degree">{EDUCATION.degree}</p>
                <p class="resume__muted">{EDUCATION.institution}</p>
                <p class="resume__muted">{EDUCATION.period}</p>
            </ResumeBlock>
            <ResumeBlock icon=IconKind::Globe title="Languages">
                <div class="resume__languages">{languages}</div>
            </ResumeBlock>
        </div>
    }
}

#[component]
fn Declaration() -> impl IntoView {
    view! {
        <footer class="resume__declaration">
            <h4 class="resume__declaration-title">"Declaration"</h4>
            <p class="resume__declaration-text">{DECLARATION}</p>
            <div class="resume__signature">
                <div class="resume__signature-name">{profile::NAME}</div>
                <span class="resume__signature-label">"Signature"</span>
            </div>
        </footer>
    }
}
