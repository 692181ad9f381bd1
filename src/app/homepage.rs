use leptos::prelude::*;
use leptos_meta::Title;

use super::background::{BackgroundLayer, DecorativeOverlay};
use super::hero::IntroPanel;
use super::nav::NavBar;
use super::showcase::ProfileShowcase;
use super::social::SocialSidebar;
use super::theme::ThemeMode;

/// Page root. Owns the only piece of mutable state (the theme mode) and
/// hands it down to the regions that react to it; everything else renders
/// from constants.
#[component]
pub fn HomePage() -> impl IntoView {
    let theme = RwSignal::new(ThemeMode::default());

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen w-full relative selection:bg-neon-cyan selection:text-black overflow-x-hidden">
            <BackgroundLayer theme />

            <NavBar theme />

            <div class="relative z-10 container mx-auto px-6 h-screen flex flex-col md:flex-row items-center justify-center md:justify-between pt-20">
                <SocialSidebar />
                <IntroPanel />
                <ProfileShowcase />
            </div>

            <DecorativeOverlay />
        </div>
    }
}
