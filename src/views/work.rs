use dioxus::prelude::*;
use crate::components::SectionHeading;
use crate::content::{ CardKey, Project, PROJECTS };
use crate::utils::Anchor;

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        article {
            class: "group relative rounded-2xl border border-black/10 dark:border-white/10 p-6 hover:-translate-y-0.5 transition will-change-transform bg-white/60 dark:bg-white/[0.03] backdrop-blur-sm",
            div { class: "text-[11px] uppercase tracking-widest text-gray-600/80 dark:text-gray-300/70", "{project.tag}" }
            h3 { class: "mt-2 text-xl font-medium leading-snug", "{project.title}" }
            p { class: "mt-3 text-gray-600 dark:text-gray-300 text-sm leading-relaxed", "{project.blurb}" }
            div {
                class: "mt-5 flex items-center gap-2 text-sm",
                span { class: "opacity-70 group-hover:opacity-100 transition", "Read case study" }
                span { class: "opacity-40", "→" }
            }
            div { class: "pointer-events-none absolute inset-0 rounded-2xl ring-1 ring-black/0 group-hover:ring-black/10 dark:group-hover:ring-white/20 transition" }
        }
    }
}

#[component]
pub fn Work() -> Element {
    rsx! {
        section {
            id: Anchor::Work.id(),
            class: "relative py-24 sm:py-28",
            div {
                class: "max-w-6xl mx-auto px-4 sm:px-6",
                SectionHeading {
                    overline: "Selected work",
                    title: "Sharp copy for thoughtful products",
                    kicker: "A few recent projects across SaaS, AI, and fintech.",
                }
                div {
                    class: "grid sm:grid-cols-2 lg:grid-cols-3 gap-6",
                    for project in PROJECTS.iter().copied() {
                        ProjectCard { key: "{project.card_key()}", project: project }
                    }
                }
            }
        }
    }
}
