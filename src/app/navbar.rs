use leptos::{ev::MouseEvent, prelude::*};

use crate::{
    content::{Anchor, SITE},
    state::{NavMenu, ScrollRequest},
};

/// Runs a scroll request once its delay has passed. A missing target element
/// is not an error; the scroll is just skipped.
fn scroll_to(request: ScrollRequest) {
    let scroll = move || {
        request.run(
            |selector| document().query_selector(selector).ok().flatten(),
            |el| el.scroll_into_view(),
        );
    };
    if request.delay.is_zero() {
        scroll();
    } else {
        set_timeout(scroll, request.delay);
    }
}

#[component]
pub fn Navbar(menu: ReadSignal<NavMenu>, set_menu: WriteSignal<NavMenu>) -> impl IntoView {
    let go_to = move |anchor: Anchor| {
        let mut next = menu.get_untracked();
        let request = next.select_destination(anchor);
        set_menu.set(next);
        if let Some(request) = request {
            scroll_to(request);
        }
    };

    let go_home = move |_: MouseEvent| {
        let mut next = menu.get_untracked();
        let request = next.return_home();
        set_menu.set(next);
        scroll_to(request);
    };

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 px-6 py-6 flex justify-between items-center pointer-events-none animate-nav-in">
            <div class="pointer-events-auto cursor-pointer group relative z-50" on:click=go_home>
                <div class="bg-white/10 backdrop-blur-md border border-white/10 rounded-2xl px-4 py-2 shadow-lg transition-transform duration-300 group-hover:scale-105 active:scale-95">
                    <span class="font-black text-xl tracking-tighter text-white">"NJ"</span>
                </div>
            </div>

            <button
                class="pointer-events-auto cursor-pointer relative z-50 bg-white/10 backdrop-blur-md border border-white/10 rounded-full w-12 h-12 shadow-lg transition-all duration-300 hover:bg-white/20 active:scale-95"
                aria-label="Toggle menu"
                on:click=move |_| set_menu.update(NavMenu::toggle)
            >
                <span class="text-white text-xl">
                    {move || if menu.get().is_open() { "✕" } else { "☰" }}
                </span>
            </button>
        </nav>

        <Show when=move || menu.get().is_open()>
            <div class="fixed inset-0 z-40 flex items-center justify-center bg-black/60 backdrop-blur-3xl animate-menu-reveal">
                <div class="w-full max-w-lg px-6">
                    <nav class="flex flex-col space-y-2">
                        {SITE
                            .nav
                            .iter()
                            .enumerate()
                            .map(|(i, item)| {
                                let anchor = item.anchor;
                                view! {
                                    <button
                                        on:click=move |_| go_to(anchor)
                                        style=format!("animation-delay: {}ms", 100 + i * 100)
                                        class="group w-full flex items-center justify-between p-6 rounded-3xl bg-white/5 border border-white/5 hover:bg-white/10 transition-colors duration-300 animate-slide-in"
                                    >
                                        <div class="flex items-center gap-6">
                                            <span class="text-xs font-mono text-white/40 border border-white/10 px-2 py-1 rounded-md">
                                                {item.badge()}
                                            </span>
                                            <span class="text-4xl md:text-5xl font-bold text-white tracking-tight group-hover:text-blue-400 transition-colors duration-300">
                                                {item.label.clone()}
                                            </span>
                                        </div>
                                        <span class="text-3xl text-white/20 group-hover:text-white group-hover:rotate-45 transition-all duration-300">
                                            "↗"
                                        </span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="mt-12 flex justify-center gap-6 animate-slide-up">
                        <SocialLink href="#" label="Instagram" glyph="◎" />
                        <SocialLink href="mailto:nihadjim@hotmail.com" label="Email" glyph="✉" />
                        <SocialLink href="#" label="LinkedIn" glyph="in" />
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn SocialLink(href: &'static str, label: &'static str, glyph: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            aria-label=label
            class="w-14 h-14 flex items-center justify-center rounded-full bg-white/5 border border-white/5 hover:bg-white/10 text-white/70 hover:text-white transition-all hover:scale-110"
        >
            {glyph}
        </a>
    }
}
