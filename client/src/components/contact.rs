//! Contact cards and the email call to action.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::section_heading::SectionHeading;
use crate::components::sketch_card::{SketchCard, alternating_rotation};
use crate::content::contact::{CONTACTS, ContactEntry, INVITATION};
use crate::content::profile;
use crate::content::sections::SectionId;
use crate::util::links::{is_well_formed, rel_for, target_for};
use crate::util::reveal::reveal_classes;

#[component]
pub fn Contact() -> impl IntoView {
    let cards = CONTACTS
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            view! {
                <div class=reveal_classes("")>
                    <ContactCard entry=*entry rotate=alternating_rotation(index, 1.0)/>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::Contact.id() class="section section--medium">
            <SectionHeading title="Let's Connect" highlight="#ffab91" subtitle=INVITATION/>
            <div class="grid grid--two">{cards}</div>
            <div class=reveal_classes("contact__cta")>
                <a class="sketch-button sketch-button--dark sketch-button--large" href=profile::EMAIL_HREF>
                    <Icon kind=IconKind::Mail/>
                    <span>"Send me an Email"</span>
                </a>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(entry: ContactEntry, rotate: f64) -> impl IntoView {
    debug_assert!(entry.href.is_none_or(is_well_formed), "malformed contact link for {}", entry.label);

    let body = move |linked: bool| {
        view! {
            <div class="contact__row">
                <div class="contact__icon">
                    <Icon kind=entry.icon/>
                </div>
                <div>
                    <p class="contact__label">{entry.label}</p>
                    <p class="contact__value">
                        {entry.value}
                        {linked.then(|| view! { <Icon kind=IconKind::ExternalLink size=16/> })}
                    </p>
                </div>
            </div>
        }
    };

    match entry.href {
        Some(href) => view! {
            <a class="contact__link" href=href target=target_for(href) rel=rel_for(href)>
                <SketchCard class="contact__card" tint=entry.tint rotate=rotate>
                    {body(true)}
                </SketchCard>
            </a>
        }
        .into_any(),
        None => view! {
            <SketchCard class="contact__card" tint=entry.tint rotate=rotate hover=false>
                {body(false)}
            </SketchCard>
        }
        .into_any(),
    }
}
