use dioxus::prelude::*;
use crate::components::SectionHeading;
use crate::content::{ CardKey, SERVICES };
use crate::utils::Anchor;

#[component]
pub fn Services() -> Element {
    rsx! {
        section {
            id: Anchor::Services.id(),
            class: "relative py-20 sm:py-24 bg-gray-50/60 dark:bg-white/[0.03]",
            div {
                class: "max-w-6xl mx-auto px-4 sm:px-6",
                SectionHeading {
                    overline: "What I do",
                    title: "Clear, calm, persuasive",
                    kicker: "I write with focus and restraint. Minimalist voice, maximum impact.",
                }
                div {
                    class: "grid md:grid-cols-3 gap-6",
                    for service in SERVICES.iter() {
                        div {
                            key: "{service.card_key()}",
                            class: "rounded-2xl border border-black/10 dark:border-white/10 p-6 bg-white/70 dark:bg-black/20 backdrop-blur-sm",
                            h3 { class: "text-lg font-medium", "{service.name}" }
                            p { class: "mt-2 text-sm text-gray-600 dark:text-gray-300 leading-relaxed", "{service.description}" }
                        }
                    }
                }
            }
        }
    }
}
