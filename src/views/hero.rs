use dioxus::prelude::*;
use crate::components::{ Pill, SceneBackdrop };
use crate::utils::Anchor;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            class: "relative h-[90vh] min-h-[600px] w-full overflow-hidden",
            SceneBackdrop {}
            // Overlay must not swallow pointer input meant for the scene.
            div { class: "pointer-events-none absolute inset-0 bg-gradient-to-b from-white/60 via-white/20 to-white/80 dark:from-[#0b0b0b]/70 dark:via-[#0b0b0b]/20 dark:to-[#0b0b0b]/85" }

            div {
                class: "pointer-events-none relative z-10 max-w-6xl mx-auto px-4 sm:px-6 h-full flex items-end pb-24",
                div {
                    class: "pointer-events-auto max-w-2xl",
                    div { class: "mb-4", Pill { "Creative copywriter for modern brands" } }
                    h1 {
                        class: "text-4xl sm:text-6xl font-semibold tracking-tight leading-[1.05]",
                        "Words that make complex products feel simple — and irresistible."
                    }
                    p {
                        class: "mt-5 text-lg text-gray-700/90 dark:text-gray-200/90 max-w-xl",
                        "I help tech, AI, and design-led companies turn ideas into clear messaging, crisp websites, and launches that move."
                    }
                    div {
                        class: "mt-8 flex flex-wrap gap-3",
                        a {
                            href: Anchor::Work.href(),
                            class: "inline-flex items-center rounded-full bg-black text-white px-5 py-3 text-sm hover:opacity-90 dark:bg-white dark:text-black transition",
                            "See selected work"
                        }
                        a {
                            href: Anchor::Contact.href(),
                            class: "inline-flex items-center rounded-full border border-black/10 dark:border-white/20 px-5 py-3 text-sm hover:bg-black hover:text-white dark:hover:bg-white dark:hover:text-black transition",
                            "Get in touch"
                        }
                    }
                }
            }
        }
    }
}
