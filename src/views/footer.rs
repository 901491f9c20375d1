use chrono::Datelike;
use dioxus::prelude::*;
use crate::configs::SiteConfig;

pub fn copyright_line(year: i32, owner: &str) -> String {
    format!("© {} {}. All rights reserved.", year, owner)
}

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            class: "py-10 text-center text-sm opacity-70",
            {copyright_line(year, &config.owner)}
        }
    }
}
