use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{motion::MotionConfig, state::ContactWidget};

/// Marks a still-pending entrance as cancelled when the current owner is
/// cleaned up, so a late timer callback can't reveal the widget.
fn cancel_entrance_on_cleanup(widget: RwSignal<ContactWidget>) {
    on_cleanup(move || {
        widget.try_update(ContactWidget::unmount);
    });
}

#[component]
pub fn Contact(#[prop(into)] menu_open: Signal<bool>) -> impl IntoView {
    let motion = use_context::<MotionConfig>().unwrap_or_default();
    let widget = RwSignal::new(ContactWidget::new(motion.contact_entrance()));

    // use_timeout_fn clears the pending timer when this component is cleaned up
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| widget.update(ContactWidget::entrance_elapsed),
        widget.with_untracked(|w| w.entrance_delay().as_millis() as f64),
    );

    Effect::new(move |_| {
        if widget.try_update(ContactWidget::mount) == Some(true) {
            start(());
        }
    });
    cancel_entrance_on_cleanup(widget);

    let visible = move || widget.with(|w| w.is_visible(menu_open.get()));
    let expanded = move || widget.with(ContactWidget::is_hovered);

    view! {
        <div
            class=move || {
                let base = "fixed bottom-8 left-1/2 -translate-x-1/2 z-50 w-full px-4 flex justify-center transition-all duration-1000";
                if visible() {
                    format!("{base} translate-y-0 opacity-100")
                } else {
                    format!("{base} translate-y-24 opacity-0 pointer-events-none")
                }
            }
        >
            <div
                class="bg-black/80 backdrop-blur-2xl border border-white/15 shadow-2xl overflow-hidden rounded-[32px] transition-[width] duration-300"
                style:width=move || format!("{}px", motion.contact_width(expanded()))
                on:mouseenter=move |_| widget.update(ContactWidget::hover_enter)
                on:mouseleave=move |_| widget.update(ContactWidget::hover_leave)
            >
                <div class="h-16 flex items-center justify-between px-2 relative">
                    <div
                        class=move || {
                            if expanded() {
                                "absolute inset-0 flex items-center justify-center gap-2 cursor-pointer transition-all duration-300 opacity-0 translate-y-5"
                            } else {
                                "absolute inset-0 flex items-center justify-center gap-2 cursor-pointer transition-all duration-300"
                            }
                        }
                    >
                        <span class="w-2 h-2 rounded-full bg-green-500 animate-pulse" />
                        <span class="font-semibold text-white">"Let's Create"</span>
                    </div>

                    <div
                        class=move || {
                            if expanded() {
                                "w-full flex items-center justify-around px-4 transition-all duration-300"
                            } else {
                                "w-full flex items-center justify-around px-4 transition-all duration-300 opacity-0 -translate-y-5 pointer-events-none"
                            }
                        }
                    >
                        <a
                            href="mailto:nihadjim@hotmail.com"
                            aria-label="Email"
                            class="p-3 rounded-full hover:bg-white/20 text-white transition-colors"
                        >
                            "✉"
                        </a>
                        <a
                            href="#"
                            aria-label="Instagram"
                            class="p-3 rounded-full hover:bg-white/20 text-white transition-colors"
                        >
                            "◎"
                        </a>
                        <a
                            href="#"
                            aria-label="LinkedIn"
                            class="p-3 rounded-full hover:bg-white/20 text-white transition-colors"
                        >
                            "in"
                        </a>
                        <button class="bg-blue-600 hover:bg-blue-500 text-white px-5 py-2 rounded-full text-sm font-bold flex items-center gap-2 transition-colors">
                            "Hire Me " <span>"➤"</span>
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_cleanup_cancels_pending_entrance() {
        let owner = Owner::new();
        owner.with(|| {
            let torn_down = RwSignal::new(ContactWidget::new(Duration::from_millis(2000)));
            let kept = RwSignal::new(ContactWidget::new(Duration::from_millis(2000)));
            for widget in [torn_down, kept] {
                widget.update(|w| {
                    w.mount();
                });
            }

            let scope = owner.child();
            scope.with(|| cancel_entrance_on_cleanup(torn_down));
            scope.cleanup();

            // the timer callback arrives after the scope is gone
            torn_down.update(ContactWidget::entrance_elapsed);
            kept.update(ContactWidget::entrance_elapsed);
            assert!(!torn_down.with_untracked(|w| w.is_visible(false)));
            assert!(kept.with_untracked(|w| w.is_visible(false)));
        });
    }
}
