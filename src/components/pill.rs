use dioxus::prelude::*;

#[component]
pub fn Pill(children: Element) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center gap-2 rounded-full border border-black/10 dark:border-white/10 px-3 py-1 text-xs tracking-tight text-gray-700 dark:text-gray-200 bg-white/60 dark:bg-white/5 backdrop-blur-md",
            {children}
        }
    }
}
