use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::{content::SITE, motion::MotionConfig};

const CHIP_POSITIONS: [&str; 4] = [
    "top-[15%] left-[10%]",
    "top-[20%] right-[15%]",
    "bottom-[25%] left-[15%]",
    "bottom-[15%] right-[20%]",
];

#[component]
pub fn Hero() -> impl IntoView {
    let parallax = use_context::<MotionConfig>().unwrap_or_default().hero;
    let (_, scroll_y) = use_window_scroll();

    let background = move || format!("translateY({}px)", parallax.background.apply(scroll_y.get()));
    let text = move || format!("translateY({}px)", parallax.text.apply(scroll_y.get()));
    let text_opacity = move || parallax.text_opacity.apply(scroll_y.get()).to_string();
    let chips = move || {
        let y = scroll_y.get();
        format!(
            "translateY({}px) rotate({}deg)",
            parallax.chips.apply(y),
            parallax.chip_rotation.apply(y)
        )
    };

    view! {
        <section class="relative h-screen w-full flex items-center justify-center overflow-hidden bg-black">
            <div class="absolute inset-0 z-0 will-change-transform" style:transform=background>
                <div class="absolute top-[-20%] left-[-10%] w-[600px] h-[600px] bg-purple-600/20 rounded-full blur-[100px] animate-blob mix-blend-screen" />
                <div class="absolute top-[20%] right-[-10%] w-[500px] h-[500px] bg-blue-600/20 rounded-full blur-[100px] animate-blob animation-delay-2000 mix-blend-screen" />
                <div class="absolute bottom-[-10%] left-[20%] w-[600px] h-[600px] bg-indigo-600/20 rounded-full blur-[100px] animate-blob animation-delay-4000 mix-blend-screen" />
            </div>

            <div class="absolute bottom-0 inset-x-0 h-[500px] bg-gradient-to-t from-black via-black/80 to-transparent z-0 pointer-events-none" />

            <div class="container mx-auto px-4 z-10 relative flex flex-col items-center">
                <div class="absolute inset-0 pointer-events-none">
                    {SITE
                        .skills
                        .iter()
                        .zip(CHIP_POSITIONS)
                        .enumerate()
                        .map(|(i, (skill, position))| {
                            view! {
                                <div
                                    class=format!("absolute will-change-transform {position}")
                                    style:transform=chips
                                >
                                    <div
                                        class="p-4 rounded-2xl bg-white/5 backdrop-blur-md border border-white/10 flex items-center gap-2 shadow-2xl animate-float"
                                        style=format!(
                                            "animation-duration: {}s; animation-delay: {}ms",
                                            6 + i,
                                            500 + i * 200,
                                        )
                                    >
                                        <span class="text-white/90">{skill.glyph()}</span>
                                        <span class="text-xs font-medium text-white/90 hidden md:inline">
                                            {skill.name.clone()}
                                        </span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mb-8 relative group cursor-pointer animate-pop-in">
                    <div class="w-32 h-32 md:w-48 md:h-48 rounded-[40px] overflow-hidden border-2 border-white/20 shadow-[0_0_80px_rgba(255,255,255,0.15)] relative transition-transform duration-500 hover:scale-105">
                        <img
                            src="https://picsum.photos/id/64/400/400"
                            alt="Nihad Jim"
                            class="w-full h-full object-cover"
                        />
                        <div class="absolute inset-0 bg-black/20 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                            <span class="text-white text-3xl">"▶"</span>
                        </div>
                    </div>
                    <div class="absolute -bottom-2 -right-2 bg-blue-500 text-white text-[10px] font-bold px-3 py-1 rounded-full border border-black shadow-lg">
                        "PRO"
                    </div>
                </div>

                <div class="text-center max-w-4xl" style:transform=text style:opacity=text_opacity>
                    <h1 class="text-5xl md:text-7xl lg:text-9xl font-black tracking-tighter mb-6 bg-clip-text text-transparent bg-gradient-to-b from-white to-white/40 drop-shadow-2xl">
                        {SITE.hero.tagline.clone()}
                    </h1>
                    <p class="text-lg md:text-2xl text-white/70 font-light max-w-2xl mx-auto leading-relaxed">
                        {SITE.hero.subtext.clone()}
                    </p>
                </div>

                <div
                    class="absolute bottom-10 left-1/2 -translate-x-1/2 flex flex-col items-center gap-2 animate-bob"
                    style:opacity=text_opacity
                >
                    <span class="text-xs text-white/40 uppercase tracking-widest">"Scroll"</span>
                    <div class="w-[1px] h-12 bg-gradient-to-b from-white/50 to-transparent" />
                </div>
            </div>
        </section>
    }
}
