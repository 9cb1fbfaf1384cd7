//! Hand-drawn style card container.
//!
//! DESIGN
//! ======
//! The card sits at a fixed base rotation. While hovered (and only if hover
//! is enabled) it scales up, deepens its shadow, and tilts one extra degree
//! in a direction picked at random on each pointer entry. The tilt is the
//! card's only state and is purely visual.

use leptos::prelude::*;

#[cfg(test)]
#[path = "sketch_card_test.rs"]
mod sketch_card_test;

/// Base rotation for the `index`-th card in a grid that alternates tilt.
pub fn alternating_rotation(index: usize, even: f64) -> f64 {
    if index % 2 == 0 { even } else { -even }
}

/// Rotation applied while hovered.
pub fn hover_rotation(rotate: f64, clockwise: bool) -> f64 {
    if clockwise { rotate + 1.0 } else { rotate - 1.0 }
}

/// Inline `transform` for the card; `hover_tilt` is `Some` while hovered.
pub fn card_transform(rotate: f64, hover_tilt: Option<f64>) -> String {
    match hover_tilt {
        Some(tilt) => format!("transform: rotate({tilt}deg) scale(1.02);"),
        None => format!("transform: rotate({rotate}deg);"),
    }
}

fn coin_flip() -> bool {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Math::random() > 0.5
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}

#[component]
pub fn SketchCard(
    children: Children,
    #[prop(into, optional)] class: String,
    #[prop(optional)] tint: Option<&'static str>,
    #[prop(default = true)] hover: bool,
    #[prop(default = 0.0)] rotate: f64,
) -> impl IntoView {
    let tilt = RwSignal::new(None::<f64>);

    let style = move || {
        let mut style = card_transform(rotate, tilt.get());
        if let Some(tint) = tint {
            style.push_str(&format!(" background-color: {tint};"));
        }
        style
    };

    view! {
        <div
            class=format!("sketch-card {class}")
            class:sketch-card--hovered=move || tilt.get().is_some()
            style=style
            on:mouseenter=move |_| {
                if hover {
                    tilt.set(Some(hover_rotation(rotate, coin_flip())));
                }
            }
            on:mouseleave=move |_| tilt.set(None)
        >
            {children()}
        </div>
    }
}
