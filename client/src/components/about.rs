//! Biography card.

use leptos::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::components::sketch_card::SketchCard;
use crate::content::sections::SectionId;
use crate::content::{profile, tint};
use crate::util::reveal::reveal_classes;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.id() class="section section--narrow">
            <SectionHeading title="About Me" highlight="#80deea"/>
            <div class=reveal_classes("")>
                <SketchCard class="about__card" tint=tint::YELLOW rotate=1.0>
                    <p class="about__text">{profile::SUMMARY}</p>
                    <div class="about__signature-row">
                        <div class="about__signature">"- " {profile::NAME}</div>
                    </div>
                </SketchCard>
            </div>
        </section>
    }
}
