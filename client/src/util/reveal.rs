//! Scroll-triggered reveal animations.
//!
//! Elements carrying [`REVEAL_CLASS`] fade and slide in the first time they
//! enter the viewport. The stylesheet only hides them while the root element
//! carries [`ARMED_CLASS`], which is set here after the observer is wired up.
//! Without JavaScript (or without `IntersectionObserver`) nothing is ever
//! hidden.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const REVEAL_CLASS: &str = "reveal";
pub const VISIBLE_CLASS: &str = "reveal--visible";
pub const ARMED_CLASS: &str = "reveal-armed";
/// Viewport inset before a section counts as visible.
pub const ROOT_MARGIN: &str = "-100px 0px -100px 0px";

/// Class list for a revealable element, optionally followed by extra classes.
pub fn reveal_classes(extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        REVEAL_CLASS.to_owned()
    } else {
        format!("{REVEAL_CLASS} {extra}")
    }
}

/// Start observing every revealable element currently in the document.
///
/// Each element is revealed once and then unobserved.
pub fn observe_reveals() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(ROOT_MARGIN);
        let observer = match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("scroll reveal disabled: {err:?}");
                return;
            }
        };
        // The observer lives for the lifetime of the page.
        callback.forget();

        let Ok(nodes) = document.query_selector_all(&format!(".{REVEAL_CLASS}")) else {
            return;
        };
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
                observer.observe(&el);
            }
        }

        if let Some(root) = document.document_element() {
            let _ = root.class_list().add_1(ARMED_CLASS);
        }
        log::debug!("scroll reveal observing {} elements", nodes.length());
    }
}
