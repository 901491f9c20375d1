use dioxus::prelude::*;
use crate::components::{ Icon, IconKind };
use crate::configs::SiteConfig;
use crate::routes::Route;
use crate::utils::{
    dom,
    use_menu_controller,
    use_menu_reset_on_navigation,
    Anchor,
    ThemeController,
    NAV_LINKS,
};
use super::MobileMenu;

const ROUND_BUTTON: &str =
    "inline-flex items-center rounded-full border border-black/10 dark:border-white/20 text-sm hover:bg-black hover:text-white dark:hover:bg-white dark:hover:text-black transition";

/// Page chrome around every route: fixed header, mobile menu, floating CTA.
#[component(no_case_check)]
pub fn Navbar() -> Element {
    let config = use_context::<SiteConfig>();
    let mut theme = use_context::<ThemeController>();
    let mut menu = use_menu_controller();
    use_menu_reset_on_navigation(menu);

    use_hook(|| {
        if let Ok(hash) = dom::current_hash() {
            log::info!("Site mounted at '{}'", hash);
        }
    });

    let is_dark = theme.current().is_dark();

    rsx! {
        div {
            id: Anchor::Top.id(),
            class: "min-h-screen bg-white text-gray-900 dark:bg-[#0b0b0b] dark:text-white selection:bg-black selection:text-white dark:selection:bg-white dark:selection:text-black",

            header {
                class: "fixed top-0 left-0 right-0 z-40",
                div {
                    class: "max-w-6xl mx-auto px-4 sm:px-6",
                    div {
                        id: "navbar",
                        class: "h-16 flex items-center justify-between",
                        a { href: Anchor::Top.href(), class: "font-semibold tracking-tight", "{config.brand}" }

                        nav {
                            class: "hidden md:flex items-center gap-6 text-sm",
                            for anchor in NAV_LINKS {
                                a {
                                    key: "{anchor.id()}",
                                    href: anchor.href(),
                                    class: "opacity-80 hover:opacity-100 transition",
                                    "{anchor.label()}"
                                }
                            }
                        }

                        div {
                            class: "flex items-center gap-2",
                            button {
                                "aria-label": "Toggle theme",
                                class: "{ROUND_BUTTON} p-2",
                                onclick: move |_| theme.toggle_theme(),
                                if is_dark {
                                    Icon { kind: IconKind::Sun }
                                } else {
                                    Icon { kind: IconKind::Moon }
                                }
                            }
                            a {
                                href: Anchor::Contact.href(),
                                class: "hidden sm:inline-flex {ROUND_BUTTON} px-4 py-2",
                                "Book an intro call"
                            }
                            button {
                                "aria-label": "Open menu",
                                class: "md:hidden inline-flex items-center justify-center rounded-full border border-black/10 dark:border-white/20 p-2",
                                onclick: move |_| menu.open_menu(),
                                Icon { kind: IconKind::Menu, size: 18 }
                            }
                        }
                    }
                }
                div { class: "pointer-events-none absolute inset-x-0 top-0 h-20 -z-10 bg-gradient-to-b from-white/80 to-transparent dark:from-[#0b0b0b]/80 backdrop-blur-sm" }
            }

            MobileMenu {}

            Outlet::<Route> {}

            a {
                href: Anchor::Contact.href(),
                class: "fixed bottom-5 right-5 sm:bottom-6 sm:right-6 inline-flex items-center gap-2 rounded-full bg-black text-white px-5 py-3 text-sm shadow-lg shadow-black/10 dark:shadow-white/10 hover:opacity-90 transition",
                "Let’s talk"
            }
        }
    }
}
