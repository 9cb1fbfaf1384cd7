//! The portfolio page: every section in a fixed top-to-bottom order.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::education::Education;
use crate::components::experience::Experience;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::projects::Projects;
use crate::components::resume::Resume;
use crate::components::skills::Skills;

/// Renders the sections in `content::sections::PAGE_SECTIONS` order.
#[component]
pub fn HomePage() -> impl IntoView {
    // Reveal targets exist once the hydrated DOM is attached.
    Effect::new(move |_| crate::util::reveal::observe_reveals());

    view! {
        <main class="page">
            <Navbar/>
            <Hero/>
            <About/>
            <Skills/>
            <Experience/>
            <Projects/>
            <Resume/>
            <Education/>
            <Contact/>
            <Footer/>
        </main>
    }
}
