//! Landing section: name, role, calls to action, and the profile portrait.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::profile;
use crate::content::sections::SectionId;
use crate::util::links::{rel_for, target_for};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=SectionId::Home.id() class="hero">
            <div class="hero__doodle hero__doodle--sparkles" aria-hidden="true">
                <Icon kind=IconKind::Sparkles size=64 stroke_width=1.5/>
            </div>
            <div class="hero__doodle hero__doodle--brain" aria-hidden="true">
                <Icon kind=IconKind::Brain size=80 stroke_width=1.5/>
            </div>

            <div class="hero__inner">
                <div class="hero__grid">
                    <div class="hero__text stagger">
                        <div class="hero__badge sketch-border">
                            <Icon kind=IconKind::Pencil size=16/>
                            <span>{profile::AVAILABILITY}</span>
                        </div>

                        <h1 class="hero__title">
                            "Hello, I'm " <br/>
                            <span class="hero__name">
                                {profile::NAME}
                                <svg
                                    class="hero__name-mark"
                                    viewBox="0 0 100 10"
                                    preserveAspectRatio="none"
                                    aria-hidden="true"
                                >
                                    <path d="M0 5 Q 50 10 100 5" stroke="currentColor" stroke-width="8" fill="none"></path>
                                </svg>
                            </span>
                        </h1>

                        <h2 class="hero__role">
                            <span class="hero__role-text">{profile::ROLE}</span>
                            <Icon kind=IconKind::Code class="bounce"/>
                        </h2>

                        <div class="hero__location">
                            <Icon kind=IconKind::MapPin size=20/>
                            <span>{profile::LOCATION}</span>
                        </div>

                        <div class="hero__actions">
                            <a class="sketch-button sketch-button--dark" href=SectionId::Contact.href()>
                                "Get in Touch"
                            </a>
                            <a
                                class="sketch-button sketch-button--light sketch-button--flip"
                                href=profile::GITHUB_URL
                                target=target_for(profile::GITHUB_URL)
                                rel=rel_for(profile::GITHUB_URL)
                            >
                                <Icon kind=IconKind::Github/>
                                "GitHub"
                            </a>
                            <a class="sketch-button sketch-button--highlight" href=SectionId::Resume.href()>
                                <Icon kind=IconKind::Download/>
                                "Resume"
                            </a>
                        </div>
                    </div>

                    <Portrait/>
                </div>

                <a class="hero__scroll" href=SectionId::About.href() aria-label="Scroll to About">
                    <Icon kind=IconKind::ChevronDown size=48 stroke_width=3.0/>
                </a>
            </div>
        </section>
    }
}

#[component]
fn Portrait() -> impl IntoView {
    view! {
        <div class="portrait">
            <div class="portrait__frame">
                <svg class="portrait__ring spin-slow" viewBox="0 0 100 100" aria-hidden="true">
                    <path
                        d="M50 5 C 75 5 95 25 95 50 C 95 75 75 95 50 95 C 25 95 5 75 5 50 C 5 25 25 5 50 5 Z"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="0.5"
                        stroke-dasharray="4 2"
                    ></path>
                    <path
                        d="M50 2 C 78 2 98 22 98 50 C 98 78 78 98 50 98 C 22 98 2 78 2 50 C 2 22 22 2 50 2 Z"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="0.8"
                        stroke-dasharray="10 5"
                        transform="rotate(15 50 50)"
                    ></path>
                </svg>

                <div class="portrait__blob">
                    <img
                        class="portrait__photo"
                        src=profile::PHOTO_SRC
                        alt=profile::PHOTO_ALT
                        sizes="(min-width: 768px) 384px, 288px"
                    />
                </div>

                <div class="sticker sticker--top float" aria-hidden="true">
                    <Icon kind=IconKind::Brain size=32/>
                </div>
                <div class="sticker sticker--bottom float float--delayed" aria-hidden="true">
                    <Icon kind=IconKind::Code size=32/>
                </div>
            </div>
        </div>
    }
}
