use dioxus::prelude::*;
use crate::utils::Anchor;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    log::warn!("No page at /{}", path);

    rsx! {
        div {
            class: "max-w-3xl mx-auto px-4 sm:px-6 pt-40 pb-24 text-center",
            h1 { class: "text-3xl font-semibold tracking-tight", "Nothing here" }
            p {
                class: "mt-4 text-gray-600 dark:text-gray-300",
                "The page /{path} doesn’t exist."
            }
            a {
                href: format!("/{}", Anchor::Top.href()),
                class: "mt-8 inline-flex items-center rounded-full bg-black text-white px-5 py-3 text-sm hover:opacity-90 dark:bg-white dark:text-black transition",
                "Back to the start"
            }
        }
    }
}
