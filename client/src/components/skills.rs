//! Skill category grid.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::components::section_heading::SectionHeading;
use crate::components::sketch_card::{SketchCard, alternating_rotation};
use crate::content::sections::SectionId;
use crate::content::skills::SKILL_CATEGORIES;
use crate::content::tint;
use crate::util::reveal::reveal_classes;

#[component]
pub fn Skills() -> impl IntoView {
    let cards = SKILL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let chips = category
                .skills
                .iter()
                .map(|skill| view! { <span class="chip chip--wobble sketch-border">{*skill}</span> })
                .collect_view();

            view! {
                <div class=reveal_classes("")>
                    <SketchCard
                        class="skills__card"
                        tint=category.tint
                        rotate=alternating_rotation(index, -1.0)
                    >
                        <div class="card-header">
                            <div class="card-header__icon">
                                <Icon kind=category.icon/>
                            </div>
                            <h3 class="card-header__title">{category.title}</h3>
                        </div>
                        <div class="chip-row">{chips}</div>
                    </SketchCard>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::Skills.id() class="section">
            <SectionHeading title="Technical Skills" highlight=tint::CORAL squiggle=true/>
            <div class="grid grid--three">{cards}</div>
        </section>
    }
}
