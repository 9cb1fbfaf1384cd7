//! Root application component with page metadata and routing.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::profile;
use crate::pages::home::HomePage;

const FONTS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Patrick+Hand&family=Permanent+Marker&display=swap";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="antialiased">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Registers document metadata (title, description, keywords, Open Graph) and
/// the web fonts, then routes `/` to the single portfolio page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let keywords = profile::KEYWORDS.join(", ");

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Link rel="preconnect" href="https://fonts.googleapis.com"/>
        <Link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous"/>
        <Link rel="stylesheet" href=FONTS_URL/>
        <Title text=profile::PAGE_TITLE/>
        <Meta name="description" content=profile::META_DESCRIPTION/>
        <Meta name="keywords" content=keywords/>
        <Meta name="author" content=profile::NAME/>
        <Meta property="og:title" content=profile::PAGE_TITLE/>
        <Meta property="og:description" content=profile::OG_DESCRIPTION/>
        <Meta property="og:type" content="website"/>

        <Router>
            <Routes fallback=NotFound>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1 class="not-found__title">"Page not found."</h1>
            <a class="sketch-button sketch-button--dark" href="/">"Back to the portfolio"</a>
        </main>
    }
}
