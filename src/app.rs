mod about;
mod contact;
mod glass_card;
mod hero;
mod navbar;
mod portfolio;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    content::{Anchor, SITE},
    motion::MotionConfig,
    state::NavMenu,
};
use about::About;
use contact::Contact;
use hero::Hero;
use navbar::Navbar;
use portfolio::Portfolio;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/editor-portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SITE.motion);

    view! {
        <Title formatter=|title| format!("Md. Nihad Jim - {title}") />
        <Meta
            name="description"
            content="Retention-focused video editing for creators and brands."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site. Owns the menu state shared by the navbar and the contact pill.
#[component]
fn HomePage() -> impl IntoView {
    let motion = use_context::<MotionConfig>().unwrap_or_default();
    let (menu, set_menu) = signal(NavMenu::new(motion.menu_close()));
    let menu_open = Signal::derive(move || menu.get().is_open());

    view! {
        <Title text="Video Editor" />
        <main class="min-h-screen bg-black text-white selection:bg-blue-500/30 selection:text-blue-200 overflow-x-hidden">
            <Navbar menu set_menu />

            <section id={Anchor::Home.id()}>
                <Hero />
            </section>

            <section id={Anchor::Work.id()} class="relative">
                <div class="absolute top-0 inset-x-0 h-40 bg-gradient-to-b from-black to-transparent z-10 pointer-events-none" />
                <Portfolio />
            </section>

            <section id={Anchor::About.id()}>
                <About />
            </section>

            // room for the fixed contact pill
            <div class="h-32" />

            <Contact menu_open />

            <div class="fixed inset-0 bg-gradient-to-tr from-blue-900/5 via-transparent to-purple-900/5 pointer-events-none z-0" />
        </main>
    }
}
