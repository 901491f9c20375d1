use dioxus::prelude::*;
use crate::components::SectionHeading;
use crate::content::{ CardKey, TESTIMONIALS };
use crate::utils::Anchor;

#[component]
pub fn Testimonials() -> Element {
    rsx! {
        section {
            id: Anchor::Testimonials.id(),
            class: "relative py-24 sm:py-28",
            div {
                class: "max-w-6xl mx-auto px-4 sm:px-6",
                SectionHeading { overline: "Kind words", title: "Clients on the work" }
                div {
                    class: "grid md:grid-cols-3 gap-6",
                    for testimonial in TESTIMONIALS.iter() {
                        figure {
                            key: "{testimonial.card_key()}",
                            class: "rounded-2xl border border-black/10 dark:border-white/10 p-6 bg-white/70 dark:bg-white/[0.03] backdrop-blur-sm",
                            blockquote { class: "text-[15px] leading-relaxed", "“{testimonial.quote}”" }
                            figcaption { class: "mt-4 text-sm opacity-70", "{testimonial.author}" }
                        }
                    }
                }
            }
        }
    }
}
