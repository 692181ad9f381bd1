use leptos::prelude::*;

/// Outbound link in the fixed sidebar. Destinations are placeholders until
/// real profiles are wired in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLinkItem {
    pub icon: &'static str,
    pub destination: &'static str,
    pub label: &'static str,
}

pub const SOCIAL_LINKS: [SocialLinkItem; 3] = [
    SocialLinkItem {
        icon: "fa-brands fa-linkedin",
        destination: "#",
        label: "LinkedIn",
    },
    SocialLinkItem {
        icon: "fa-brands fa-github",
        destination: "#",
        label: "GitHub",
    },
    SocialLinkItem {
        icon: "fa-solid fa-envelope",
        destination: "#",
        label: "Email",
    },
];

/// Fixed vertical stack on the left edge, hidden below the lg breakpoint.
/// Keeps the dark card palette in both theme modes.
#[component]
pub fn SocialSidebar() -> impl IntoView {
    view! {
        <div class="hidden lg:flex fixed left-8 top-1/2 -translate-y-1/2 flex-col gap-6 p-4 bg-navy-800/80 backdrop-blur-sm border border-white/10 rounded-2xl shadow-xl z-40">
            {SOCIAL_LINKS
                .iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.destination
                            aria-label=link.label
                            class="text-gray-400 hover:text-neon-cyan text-xl transition-all hover:scale-110"
                        >
                            <i class=link.icon></i>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_links_fixed_order() {
        let labels = SOCIAL_LINKS.iter().map(|l| l.label).collect::<Vec<_>>();
        assert_eq!(labels, ["LinkedIn", "GitHub", "Email"]);
    }

    #[test]
    fn test_social_icons_match_labels() {
        assert!(SOCIAL_LINKS[0].icon.contains("linkedin"));
        assert!(SOCIAL_LINKS[1].icon.contains("github"));
        assert!(SOCIAL_LINKS[2].icon.contains("envelope"));
    }
}
