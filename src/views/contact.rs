use dioxus::prelude::*;
use crate::components::SectionHeading;
use crate::configs::SiteConfig;
use crate::utils::Anchor;

#[component]
pub fn Contact() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        section {
            id: Anchor::Contact.id(),
            class: "relative py-24 bg-gray-50/60 dark:bg-white/[0.03]",
            div {
                class: "max-w-3xl mx-auto px-4 sm:px-6 text-center",
                SectionHeading {
                    overline: "Get in touch",
                    title: "Tell me about your project",
                    kicker: "A short intro call is the fastest way to see if we’re a fit.",
                }
                div {
                    class: "flex flex-wrap justify-center gap-3",
                    a {
                        href: config.mailto(),
                        class: "inline-flex items-center rounded-full bg-black text-white px-5 py-3 text-sm hover:opacity-90 dark:bg-white dark:text-black transition",
                        "Email"
                    }
                    a {
                        href: "{config.booking_url}",
                        class: "inline-flex items-center rounded-full border border-black/10 dark:border-white/20 px-5 py-3 text-sm hover:bg-black hover:text-white dark:hover:bg-white dark:hover:text-black transition",
                        "Book intro call"
                    }
                }
                p { class: "mt-6 text-xs opacity-70", "{config.availability}" }
            }
        }
    }
}
