use leptos::prelude::*;

use super::animate::{bob_style, BADGE_FLOAT_FAST, BADGE_FLOAT_SLOW, IMAGE_ENTRANCE, INNER_RING, OUTER_RING};

// Remote placeholder until a real headshot is supplied
const PROFILE_PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?fit=crop&w=800&q=80";

/// Profile image framed by two independently spinning rings and two
/// floating badges. The rings and badges loop forever; the image itself
/// scales and fades in once on mount.
#[component]
pub fn ProfileShowcase() -> impl IntoView {
    view! {
        <div
            style=IMAGE_ENTRANCE.style()
            class="w-full md:w-1/2 flex justify-center items-center mt-12 md:mt-0 relative"
        >
            // Concentric rings, opposite directions, never in sync
            <div
                style=OUTER_RING.style()
                class="absolute w-[350px] h-[350px] md:w-[450px] md:h-[450px] border border-neon-purple/30 rounded-full border-dashed"
            ></div>
            <div
                style=INNER_RING.style()
                class="absolute w-[300px] h-[300px] md:w-[400px] md:h-[400px] border border-neon-cyan/20 rounded-full"
            ></div>

            <div class="relative w-64 h-72 md:w-80 md:h-96">
                <div class="absolute inset-0 bg-gradient-to-b from-neon-cyan to-neon-purple rounded-[2rem] blur-lg opacity-50"></div>

                <div class="relative w-full h-full bg-navy-800 p-2 rounded-[2rem] border-2 border-[#ffffff10] overflow-hidden shadow-2xl">
                    <div class="w-full h-full rounded-[1.8rem] overflow-hidden bg-gray-800 relative">
                        <img
                            src=PROFILE_PHOTO_URL
                            alt="Ishwar"
                            class="w-full h-full object-cover"
                        />

                        // Bottom gradient keeps overlaid text legible
                        <div class="absolute bottom-0 left-0 w-full h-1/3 bg-gradient-to-t from-navy-900 to-transparent opacity-80"></div>
                    </div>
                </div>

                <div
                    style=bob_style(BADGE_FLOAT_FAST, -10)
                    class="absolute -right-8 top-10 w-12 h-12 bg-navy-800 border border-neon-cyan rounded-lg flex items-center justify-center shadow-[0_0_15px_#00f2ff40]"
                >
                    <i class="fa-solid fa-code text-neon-cyan text-xl"></i>
                </div>

                <div
                    style=bob_style(BADGE_FLOAT_SLOW, 10)
                    class="absolute -left-6 bottom-20 w-auto px-4 py-2 bg-navy-800/90 backdrop-blur border border-neon-purple rounded-lg flex items-center gap-2 shadow-[0_0_15px_#bd00ff40]"
                >
                    <div class="w-2 h-2 bg-neon-purple rounded-full animate-pulse"></div>
                    <span class="text-xs text-white font-medium">"MERN Expert"</span>
                </div>
            </div>
        </div>
    }
}
