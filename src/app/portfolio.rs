use leptos::{ev::MouseEvent, prelude::*};

use super::glass_card::GlassCard;
use crate::{
    content::{Project, ProjectCategory, SITE},
    state::Gallery,
};

/// The selected project id. Filter changes leave the selection alone, so
/// anything tracking this skips them.
fn selection(gallery: RwSignal<Gallery<'static>>) -> Memo<Option<&'static str>> {
    Memo::new(move |_| gallery.with(|g| g.selected_id()))
}

#[component]
pub fn Portfolio() -> impl IntoView {
    let gallery = RwSignal::new(Gallery::new(&SITE.registry));
    let selected = selection(gallery);

    view! {
        <section class="py-24 px-4 min-h-screen relative z-20">
            <div class="max-w-7xl mx-auto">
                <div class="flex justify-center mb-16">
                    <div class="bg-white/10 backdrop-blur-xl p-1 rounded-full inline-flex border border-white/10">
                        {ProjectCategory::ALL
                            .into_iter()
                            .map(|category| view! { <FilterButton category gallery /> })
                            .collect_view()}
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 auto-rows-min">
                    <For
                        each=move || gallery.with(|g| g.filtered())
                        key=|project| project.id.clone()
                        children=move |project| view! { <ProjectCard project gallery /> }
                    />
                </div>
            </div>

            {move || {
                selected.track();
                gallery
                    .with_untracked(|g| g.selected_project())
                    .map(|project| view! { <ProjectModal project gallery /> })
            }}
        </section>
    }
}

#[component]
fn FilterButton(category: ProjectCategory, gallery: RwSignal<Gallery<'static>>) -> impl IntoView {
    let is_active = move || gallery.with(|g| g.is_active(category));

    view! {
        <button
            on:click=move |_| gallery.update(|g| g.set_filter(category))
            class=move || {
                if is_active() {
                    "relative px-6 py-2 rounded-full text-sm font-medium transition-colors duration-200 z-10 bg-white text-black shadow-lg"
                } else {
                    "relative px-6 py-2 rounded-full text-sm font-medium transition-colors duration-200 z-10 text-white/70 hover:text-white"
                }
            }
        >
            {category.as_str()}
        </button>
    }
}

#[component]
fn ProjectCard(project: &'static Project, gallery: RwSignal<Gallery<'static>>) -> impl IntoView {
    let span = if project.category.is_portrait() {
        "row-span-2"
    } else {
        "row-span-1"
    };

    view! {
        <div
            class=format!("cursor-pointer group animate-fade-in {span}")
            on:click=move |_| {
                gallery.update(|g| {
                    g.select(&project.id);
                })
            }
        >
            <GlassCard
                hover_effect=true
                class="h-full w-full overflow-hidden hover:scale-[1.02] transition-transform duration-300"
            >
                <div class="relative w-full h-full aspect-video group-hover:opacity-90 transition-opacity">
                    <img
                        src=project.thumbnail.clone()
                        alt=project.title.clone()
                        class="w-full h-full object-cover"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-transparent to-transparent flex flex-col justify-end p-6">
                        <div class="transform translate-y-4 group-hover:translate-y-0 transition-transform duration-300">
                            <span class="text-xs font-bold text-blue-400 uppercase tracking-wider mb-2 block">
                                {project.category.as_str()}
                            </span>
                            <h3 class="text-xl font-bold text-white mb-1">{project.title.clone()}</h3>
                            <p class="text-white/60 text-sm line-clamp-1">
                                {project.description.clone()}
                            </p>
                        </div>
                    </div>
                    <div class="absolute inset-0 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                        <div class="bg-white/20 backdrop-blur-md rounded-full w-16 h-16 flex items-center justify-center">
                            <span class="text-white text-2xl">"▶"</span>
                        </div>
                    </div>
                </div>
            </GlassCard>
        </div>
    }
}

#[component]
fn ProjectModal(project: &'static Project, gallery: RwSignal<Gallery<'static>>) -> impl IntoView {
    let dismiss = move |_: MouseEvent| gallery.update(Gallery::dismiss);
    let media_class = if project.category.is_portrait() {
        "relative md:w-1/3 w-full bg-black flex items-center justify-center"
    } else {
        "relative md:w-2/3 w-full"
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 md:p-10 bg-black/60 backdrop-blur-3xl animate-fade-in"
            on:click=dismiss
        >
            <div
                class="w-full max-w-5xl bg-[#111] rounded-[32px] overflow-hidden border border-white/10 shadow-2xl relative flex flex-col md:flex-row max-h-[90vh]"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    on:click=dismiss
                    aria-label="Close"
                    class="absolute top-4 right-4 z-20 bg-black/50 backdrop-blur-md w-10 h-10 rounded-full text-white/70 hover:text-white transition-colors"
                >
                    "✕"
                </button>

                <div class=media_class>
                    <img
                        src=project.thumbnail.clone()
                        alt=project.title.clone()
                        class="w-full h-full object-cover"
                    />
                    <div class="absolute inset-0 flex items-center justify-center pointer-events-none">
                        <span class="text-7xl text-white/50">"▶"</span>
                    </div>
                </div>

                <div class="flex-1 p-8 md:p-12 overflow-y-auto bg-neutral-900/50">
                    <div class="space-y-6">
                        <div>
                            <span class="inline-block px-3 py-1 rounded-full bg-blue-500/20 text-blue-400 text-xs font-bold mb-3 border border-blue-500/30">
                                {project.category.as_str()}
                            </span>
                            <h2 class="text-3xl md:text-4xl font-black text-white mb-2 leading-tight">
                                {project.title.clone()}
                            </h2>
                            <p class="text-white/50 text-lg">"Client: " {project.client.clone()}</p>
                        </div>

                        <div class="h-px bg-white/10 w-full" />

                        <p class="text-white/80 leading-relaxed text-lg">
                            {project.description.clone()}
                        </p>

                        <div class="bg-white/5 rounded-2xl p-6 border border-white/5 flex items-center gap-4">
                            <div class="w-12 h-12 flex items-center justify-center bg-green-500/20 rounded-full text-green-400">
                                "⏱"
                            </div>
                            <div>
                                <p class="text-sm text-white/50">"Engagement Stats"</p>
                                <p class="text-xl font-bold text-white">
                                    {project.stats_or_default().to_string()}
                                </p>
                            </div>
                        </div>

                        <button class="w-full py-4 bg-white text-black font-bold rounded-2xl text-lg hover:bg-neutral-200 transition-colors">
                            "Watch Full Video"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
