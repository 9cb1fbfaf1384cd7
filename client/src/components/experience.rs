//! Work history timeline.

use leptos::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::components::sketch_card::SketchCard;
use crate::content::experience::EXPERIENCE;
use crate::content::sections::SectionId;
use crate::util::reveal::reveal_classes;

#[component]
pub fn Experience() -> impl IntoView {
    let entries = EXPERIENCE
        .iter()
        .map(|entry| {
            let highlights = entry
                .highlights
                .iter()
                .map(|text| {
                    view! {
                        <li class="timeline__item">
                            <span class="timeline__pointer" aria-hidden="true">"👉"</span>
                            <span>{*text}</span>
                        </li>
                    }
                })
                .collect_view();

            view! {
                <div class="timeline__entry">
                    <div class="timeline__dot" aria-hidden="true"></div>
                    <div class="timeline__header">
                        <h3 class="timeline__role">{entry.role}</h3>
                        <span class="timeline__period">{entry.period}</span>
                    </div>
                    <h4 class="timeline__company">{entry.company}</h4>
                    <ul class="timeline__list">{highlights}</ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::Experience.id() class="section section--medium">
            <SectionHeading title="Experience" highlight="#ce93d8"/>
            <div class=reveal_classes("")>
                <SketchCard class="timeline">
                    <div class="timeline__line" aria-hidden="true"></div>
                    {entries}
                </SketchCard>
            </div>
        </section>
    }
}
