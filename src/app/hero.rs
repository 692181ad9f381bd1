use leptos::prelude::*;

use super::animate::TEXT_ENTRANCE;

/// Visual weight of a call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Secondary,
}

impl ButtonStyle {
    fn class(self) -> &'static str {
        match self {
            ButtonStyle::Primary => {
                "px-8 py-3 bg-neon-cyan text-navy-900 font-bold rounded-lg shadow-[0_0_20px_#00f2ff40] hover:shadow-[0_0_30px_#00f2ff60] transition-all hover:-translate-y-1"
            }
            ButtonStyle::Secondary => {
                "px-8 py-3 bg-transparent border border-neon-purple text-white font-medium rounded-lg hover:bg-neon-purple/10 hover:shadow-[0_0_20px_#bd00ff40] transition-all"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    pub label: &'static str,
    pub style: ButtonStyle,
}

// Click behavior is wired up externally; these render as styled stubs.
pub const ACTION_BUTTONS: [ActionButton; 2] = [
    ActionButton {
        label: "Download Resume",
        style: ButtonStyle::Primary,
    },
    ActionButton {
        label: "View Projects",
        style: ButtonStyle::Secondary,
    },
];

/// Intro text block. Children reveal once on mount, each offset by one
/// stagger step from the previous.
#[component]
pub fn IntroPanel() -> impl IntoView {
    view! {
        <div class="w-full md:w-1/2 text-center md:text-left pl-0 lg:pl-20">
            <p
                style=TEXT_ENTRANCE.style_at(0)
                class="text-gray-400 text-lg mb-2 font-medium tracking-wide"
            >
                "Hello World,"
            </p>

            <h1
                style=TEXT_ENTRANCE.style_at(1)
                class="text-5xl md:text-7xl font-bold text-white mb-6 leading-tight"
            >
                "Hi, I'm " <span class="text-neon-cyan">"["</span>
                <span class="text-transparent bg-clip-text bg-gradient-to-r from-white to-gray-400">
                    "Ishwar"
                </span> <span class="text-neon-cyan">"]"</span>
            </h1>

            <h2
                style=TEXT_ENTRANCE.style_at(2)
                class="text-xl md:text-2xl text-gray-300 mb-6 font-light"
            >
                "MERN Stack Developer " <span class="text-neon-purple mx-2">"|"</span>
                " Turning Ideas into Digital Reality."
            </h2>

            <div
                style=TEXT_ENTRANCE.style_at(3)
                class="flex flex-col sm:flex-row gap-4 justify-center md:justify-start mt-8"
            >
                {ACTION_BUTTONS
                    .iter()
                    .map(|button| {
                        view! { <button class=button.style.class()>{button.label}</button> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_action_buttons_with_distinct_styles() {
        assert_eq!(ACTION_BUTTONS[0].label, "Download Resume");
        assert_eq!(ACTION_BUTTONS[0].style, ButtonStyle::Primary);
        assert_eq!(ACTION_BUTTONS[1].label, "View Projects");
        assert_eq!(ACTION_BUTTONS[1].style, ButtonStyle::Secondary);
        assert_ne!(
            ButtonStyle::Primary.class(),
            ButtonStyle::Secondary.class()
        );
    }
}
