//! Centered section title with a marker-style highlight underneath.

use leptos::prelude::*;

use crate::util::reveal::reveal_classes;

#[component]
pub fn SectionHeading(
    title: &'static str,
    /// Highlighter color behind the lower half of the title.
    highlight: &'static str,
    /// Draw a wavy squiggle instead of a flat highlighter bar.
    #[prop(optional)]
    squiggle: bool,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let mark = if squiggle {
        view! {
            <svg
                class="section-heading__squiggle"
                viewBox="0 0 100 10"
                preserveAspectRatio="none"
                style=format!("color: {highlight};")
                aria-hidden="true"
            >
                <path d="M0 5 Q 25 0 50 5 T 100 5" stroke="currentColor" stroke-width="8" fill="none"></path>
            </svg>
        }
        .into_any()
    } else {
        view! {
            <span class="section-heading__bar" style=format!("background-color: {highlight};")></span>
        }
        .into_any()
    };

    view! {
        <div class=reveal_classes(&format!("section-heading {class}"))>
            <h2 class="section-heading__title">{title} {mark}</h2>
            {subtitle.map(|text| view! { <p class="section-heading__subtitle">{text}</p> })}
        </div>
    }
}
