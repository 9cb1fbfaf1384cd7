//! Page footer.

use leptos::prelude::*;

use crate::content::profile;
use crate::util::clock::{copyright_line, current_year};
use crate::util::reveal::reveal_classes;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = copyright_line(current_year(), profile::NAME);

    view! {
        <footer class="footer print-hidden">
            <div class="footer__stripes" aria-hidden="true"></div>
            <div class="footer__inner">
                <p class=reveal_classes("footer__copyright")>{copyright}</p>
                <p class=reveal_classes("footer__stack")>
                    "Built with"
                    <span class="footer__badge footer__badge--yellow">"Leptos"</span>
                    "+"
                    <span class="footer__badge footer__badge--cyan">"Axum"</span>
                </p>
            </div>
        </footer>
    }
}
