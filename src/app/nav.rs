use leptos::prelude::*;

use super::theme::ThemeMode;

/// One entry in the fixed navigation sequence. The anchor is always the
/// lower-cased label, so only the label is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLinkItem {
    pub label: &'static str,
}

impl NavLinkItem {
    pub fn anchor(&self) -> String {
        format!("#{}", self.label.to_lowercase())
    }
}

pub const NAV_LINKS: [NavLinkItem; 5] = [
    NavLinkItem { label: "About" },
    NavLinkItem { label: "Skills" },
    NavLinkItem { label: "Experience" },
    NavLinkItem { label: "Projects" },
    NavLinkItem { label: "Contact" },
];

#[component]
pub fn NavBar(theme: RwSignal<ThemeMode>) -> impl IntoView {
    let links = NAV_LINKS
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.anchor()
                    class="text-sm font-medium text-gray-300 hover:text-white transition-colors relative group"
                >
                    {link.label}
                    // Hover underline grows from 0 to full width
                    <span class="absolute -bottom-1 left-0 w-0 h-[2px] bg-neon-cyan transition-all duration-300 group-hover:w-full"></span>
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class=move || {
            format!(
                "fixed top-4 left-1/2 -translate-x-1/2 w-[95%] max-w-5xl z-50 px-6 py-3 flex justify-between items-center backdrop-blur-md {} border border-white/10 rounded-full shadow-lg transition-all duration-300",
                theme.get().nav_class(),
            )
        }>
            <div class="flex items-center">
                <span class="text-2xl font-extrabold text-neon-cyan tracking-tighter">"i.D."</span>
            </div>

            <div class="hidden md:flex items-center gap-8">{links}</div>

            <div class="flex items-center gap-4">
                <button
                    on:click=move |_| {
                        theme.update(|mode| *mode = mode.toggled());
                        log::debug!("theme toggled to {:?}", theme.get_untracked());
                    }
                    class="p-2 text-gray-400 hover:text-white transition-colors text-lg"
                    aria-label="Toggle theme"
                >
                    <i class=move || format!("fa-solid {}", theme.get().glyph())></i>
                </button>

                <a
                    href="#resume"
                    class="px-6 py-2 bg-neon-cyan text-navy-900 font-bold text-sm rounded-full shadow-[0_0_10px_rgba(0,242,255,0.3)] hover:shadow-[0_0_20px_rgba(0,242,255,0.6)] hover:scale-105 transition-all"
                >
                    "Resume"
                </a>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_fixed_order() {
        let labels = NAV_LINKS.iter().map(|l| l.label).collect::<Vec<_>>();
        assert_eq!(
            labels,
            ["About", "Skills", "Experience", "Projects", "Contact"]
        );
    }

    #[test]
    fn test_anchors_are_lowercased_labels() {
        for link in &NAV_LINKS {
            assert_eq!(link.anchor(), format!("#{}", link.label.to_lowercase()));
        }
        assert_eq!(NAV_LINKS[0].anchor(), "#about");
        assert_eq!(NAV_LINKS[4].anchor(), "#contact");
    }
}
