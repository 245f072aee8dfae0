use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GlassVariant {
    Light,
    #[default]
    Dark,
}

fn glass_classes(variant: GlassVariant, hover_effect: bool, extra: &str) -> String {
    let base = "relative overflow-hidden backdrop-blur-2xl rounded-[32px] border";
    let variant = match variant {
        GlassVariant::Dark => "bg-white/5 border-white/10 shadow-2xl shadow-black/50",
        GlassVariant::Light => "bg-white/10 border-white/20 shadow-xl",
    };
    let hover = if hover_effect {
        " hover:bg-white/10 transition-colors duration-300"
    } else {
        ""
    };
    format!("{base} {variant}{hover} {extra}").trim_end().to_string()
}

/// Frosted panel used by the gallery cards and the about card.
#[component]
pub fn GlassCard(
    #[prop(optional)] variant: GlassVariant,
    #[prop(optional)] hover_effect: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=glass_classes(variant, hover_effect, &class)>
            // sheen
            <div class="absolute inset-0 bg-gradient-to-br from-white/5 to-transparent pointer-events-none" />
            <div class="relative z-10 h-full">{children()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glass_classes() {
        let dark = glass_classes(GlassVariant::Dark, false, "");
        assert!(dark.contains("bg-white/5"));
        assert!(!dark.contains("hover:"));
        assert!(!dark.ends_with(' '));

        let light = glass_classes(GlassVariant::Light, true, "p-8");
        assert!(light.contains("border-white/20"));
        assert!(light.contains("hover:bg-white/10"));
        assert!(light.ends_with("p-8"));
    }
}
