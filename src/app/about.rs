use leptos::{html, prelude::*};
use leptos_use::{use_mouse_in_element, UseMouseInElementReturn};

use super::glass_card::GlassCard;
use crate::motion::MotionConfig;

const TAGS: [&str; 4] = ["Visuals", "Motion", "Sound", "Story"];

#[component]
pub fn About() -> impl IntoView {
    let motion = use_context::<MotionConfig>().unwrap_or_default();
    let card_ref = NodeRef::<html::Div>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        element_width,
        element_height,
        is_outside,
        ..
    } = use_mouse_in_element(card_ref);

    // tilt toward the pointer, flat again once it leaves
    let transform = move || {
        let (rotate_x, rotate_y) = if is_outside.get() {
            (0.0, 0.0)
        } else {
            motion.tilt(
                element_x.get() - element_width.get() / 2.0,
                element_y.get() - element_height.get() / 2.0,
            )
        };
        format!("perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg)")
    };

    view! {
        <section class="py-24 px-4 relative z-20 flex flex-col items-center">
            <div class="text-center mb-12">
                <h2 class="text-3xl md:text-5xl font-bold mb-4">"Behind The Edits"</h2>
                <p class="text-white/50 text-lg">"Passionate about storytelling and motion."</p>
            </div>

            <div
                node_ref=card_ref
                class="relative group w-full max-w-md transition-transform duration-150 ease-out"
                style:transform=transform
                style:transform-style="preserve-3d"
            >
                <GlassCard class="aspect-[4/5] md:aspect-[1.586/1] w-full p-8 bg-gradient-to-br from-neutral-900 to-black border-white/10">
                    <div class="absolute inset-0 rounded-[32px] opacity-0 group-hover:opacity-40 bg-gradient-to-tr from-transparent via-white/10 to-transparent pointer-events-none transition-opacity duration-500" />

                    <div class="flex flex-col md:flex-row gap-8 items-center h-full">
                        <div class="flex-shrink-0 relative">
                            <div class="w-32 h-32 rounded-full border-4 border-white/10 overflow-hidden shadow-2xl">
                                <img
                                    src="https://picsum.photos/id/64/200/200"
                                    alt="Profile"
                                    class="w-full h-full object-cover"
                                />
                            </div>
                            <div class="absolute bottom-0 right-0 bg-green-500 w-6 h-6 rounded-full border-4 border-black" />
                        </div>

                        <div class="flex-1 text-center md:text-left space-y-4">
                            <div>
                                <h3 class="text-2xl font-bold text-white">"Md. Nihad Jim"</h3>
                                <p class="text-blue-400 font-medium">"Professional Video Editor"</p>
                            </div>

                            <div class="flex flex-wrap gap-2 justify-center md:justify-start">
                                {TAGS
                                    .into_iter()
                                    .map(|tag| {
                                        view! {
                                            <span class="text-xs bg-white/5 border border-white/10 px-3 py-1 rounded-full text-white/70">
                                                {tag}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <p class="text-sm text-white/50 leading-relaxed">
                                "I help creators and brands stop the scroll. With a focus on retention-based editing, I craft visuals that don't just look good, they perform."
                            </p>

                            <button class="flex items-center gap-2 text-white font-semibold group-hover:gap-3 transition-all">
                                <span>"Read More"</span>
                                <span>"→"</span>
                            </button>
                        </div>
                    </div>
                </GlassCard>
            </div>
        </section>
    }
}
