use dioxus::prelude::*;
use crate::components::SectionHeading;
use crate::content::{ ABOUT_POINTS, CAPABILITIES };
use crate::utils::Anchor;

#[component]
pub fn About() -> Element {
    rsx! {
        section {
            id: Anchor::About.id(),
            class: "relative py-24",
            div {
                class: "max-w-5xl mx-auto px-4 sm:px-6",
                div {
                    class: "grid md:grid-cols-2 gap-10 items-center",
                    div {
                        SectionHeading { overline: "About", title: "I write to reduce friction" }
                        p {
                            class: "text-gray-700 dark:text-gray-300 leading-relaxed",
                            "I’m a former designer turned copywriter. I partner with founders and product teams to uncover the sharpest angle, then write with the lightest touch. The result: fewer words, stronger signal."
                        }
                        ul {
                            class: "mt-6 space-y-2 text-sm text-gray-600 dark:text-gray-300",
                            for point in ABOUT_POINTS.iter() {
                                li { key: "{point}", "• {point}" }
                            }
                        }
                    }
                    div {
                        class: "rounded-2xl border border-black/10 dark:border-white/10 p-8 bg-gray-50/80 dark:bg-white/[0.03]",
                        h4 { class: "text-sm uppercase tracking-widest text-gray-600/80 dark:text-gray-300/70", "Capabilities" }
                        div {
                            class: "mt-4 grid grid-cols-2 gap-3 text-sm",
                            for capability in CAPABILITIES.iter() {
                                span {
                                    key: "{capability}",
                                    class: "rounded-full border border-black/10 dark:border-white/15 px-3 py-2 bg-white/70 dark:bg-black/20 text-gray-800 dark:text-gray-200",
                                    "{capability}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
