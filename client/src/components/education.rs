//! Degree card with spoken languages.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::section_heading::SectionHeading;
use crate::components::sketch_card::SketchCard;
use crate::content::education::{EDUCATION, LANGUAGES};
use crate::content::sections::SectionId;
use crate::util::reveal::reveal_classes;

#[component]
pub fn Education() -> impl IntoView {
    let languages = LANGUAGES
        .iter()
        .map(|language| {
            view! {
                <div
                    class="language chip--wobble sketch-border"
                    style=format!("background-color: {};", language.tint)
                >
                    <span class="language__name">{language.name}</span>
                    <span class="language__level">{language.level}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::Education.id() class="section section--medium">
            <SectionHeading title="Education" highlight="#90caf9"/>
            <div class=reveal_classes("")>
                <SketchCard class="education" rotate={-1.0}>
                    <div class="education__degree">
                        <div class="education__badge">
                            <Icon kind=IconKind::GraduationCap size=48/>
                        </div>
                        <div class="education__details">
                            <h3 class="education__title">{EDUCATION.degree}</h3>
                            <p class="education__institution">{EDUCATION.institution}</p>
                            <p class="education__period">{EDUCATION.period}</p>
                        </div>
                    </div>

                    <div class="education__languages">
                        <div class="card-header card-header--plain">
                            <Icon kind=IconKind::Globe/>
                            <h4 class="card-header__title">"Languages"</h4>
                        </div>
                        <div class="language-row">{languages}</div>
                    </div>
                </SketchCard>
            </div>
        </section>
    }
}
