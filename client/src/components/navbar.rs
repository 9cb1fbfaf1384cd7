//! Fixed top navigation bar with a collapsible mobile menu.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::profile;
use crate::content::sections::{NAV_ITEMS, SectionId};
use crate::state::ui::NavMenu;

#[component]
pub fn Navbar() -> impl IntoView {
    let menu = RwSignal::new(NavMenu::default());

    let desktop_links = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(index, item)| {
            view! {
                <a
                    class="navbar__link"
                    href=item.href()
                    style=format!("animation-delay: {}ms;", index * 100)
                >
                    {item.label}
                    <span class="navbar__link-mark"></span>
                </a>
            }
        })
        .collect_view();

    let mobile_links = NAV_ITEMS
        .iter()
        .map(|item| {
            view! {
                <a
                    class="navbar__mobile-link"
                    href=item.href()
                    on:click=move |_| menu.update(|m| *m = m.closed())
                >
                    {item.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar print-hidden">
            <div class="navbar__inner">
                <div class="navbar__panel sketch-border">
                    <div class="navbar__row">
                        <a class="navbar__logo" href=SectionId::Home.href()>
                            {profile::INITIALS}
                            <span class="navbar__logo-mark"></span>
                        </a>

                        <div class="navbar__desktop">{desktop_links}</div>

                        <button
                            class="navbar__toggle"
                            type="button"
                            aria-controls="mobile-menu"
                            aria-expanded=move || menu.get().is_open().to_string()
                            aria-label=move || menu.get().button_label()
                            on:click=move |_| menu.update(|m| *m = m.toggled())
                        >
                            {move || {
                                let kind = if menu.get().is_open() { IconKind::X } else { IconKind::Menu };
                                view! { <Icon kind=kind/> }
                            }}
                        </button>
                    </div>

                    <div
                        id="mobile-menu"
                        class="navbar__mobile"
                        class:navbar__mobile--open=move || menu.get().is_open()
                    >
                        <div class="navbar__mobile-links">{mobile_links}</div>
                    </div>
                </div>
            </div>
        </nav>
    }
}
