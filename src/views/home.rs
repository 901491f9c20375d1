use dioxus::prelude::*;
use super::{ About, Contact, Footer, Hero, Services, Testimonials, Work };

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        Work {}
        Services {}
        About {}
        Testimonials {}
        Contact {}
        Footer {}
    }
}
