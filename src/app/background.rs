use leptos::prelude::*;

use super::theme::ThemeMode;

/// Full-bleed base layer: theme-driven background color, two corner glows,
/// and a tiled noise texture. Sits behind all content and ignores pointer
/// events.
#[component]
pub fn BackgroundLayer(theme: RwSignal<ThemeMode>) -> impl IntoView {
    view! {
        <div class=move || {
            format!(
                "absolute inset-0 pointer-events-none {} transition-colors duration-300",
                theme.get().page_class(),
            )
        }>
            // Top left cyan glow
            <div class="absolute top-[-10%] left-[-10%] w-[500px] h-[500px] bg-neon-cyan/10 rounded-full blur-[120px]"></div>
            // Bottom right purple glow
            <div class="absolute bottom-[-10%] right-[-10%] w-[500px] h-[500px] bg-neon-purple/10 rounded-full blur-[120px]"></div>
            // Subtle grid overlay
            <div class="absolute inset-0 bg-[url('https://grainy-gradients.vercel.app/noise.svg')] opacity-20"></div>
        </div>
    }
}

/// Decorative line/dot ornamentation drawn over the whole viewport.
/// Dark-palette colors regardless of theme.
#[component]
pub fn DecorativeOverlay() -> impl IntoView {
    view! {
        <svg
            class="absolute top-0 left-0 w-full h-full pointer-events-none opacity-20"
            xmlns="http://www.w3.org/2000/svg"
        >
            <line x1="10%" y1="10%" x2="20%" y2="30%" stroke="#00f2ff" stroke-width="1"></line>
            <circle cx="10%" cy="10%" r="3" fill="#00f2ff"></circle>
            <line x1="80%" y1="20%" x2="90%" y2="50%" stroke="#bd00ff" stroke-width="1"></line>
            <circle cx="90%" cy="50%" r="3" fill="#bd00ff"></circle>
        </svg>
    }
}
