use dioxus::prelude::*;
use super::Pill;

/// Centered heading block shared by every content section.
#[component]
pub fn SectionHeading(
    title: &'static str,
    overline: Option<&'static str>,
    kicker: Option<&'static str>
) -> Element {
    rsx! {
        div {
            class: "max-w-3xl mx-auto text-center mb-12",
            if let Some(overline) = overline {
                div { class: "mb-3", Pill { "{overline}" } }
            }
            h2 {
                class: "text-3xl sm:text-4xl md:text-5xl font-semibold tracking-tight text-gray-900 dark:text-white",
                "{title}"
            }
            if let Some(kicker) = kicker {
                p {
                    class: "mt-4 text-gray-600 dark:text-gray-300 leading-relaxed",
                    "{kicker}"
                }
            }
        }
    }
}
