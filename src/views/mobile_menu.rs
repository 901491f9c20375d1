use dioxus::prelude::*;
use crate::components::{ Icon, IconKind };
use crate::configs::SiteConfig;
use crate::utils::{ dom, Anchor, MenuController, MenuEvent, ThemeController, NAV_LINKS };

/// Closes the menu for a selected link, then makes sure the jump happens.
pub fn follow_menu_link(mut menu: MenuController, anchor: Anchor) {
    menu.dispatch(MenuEvent::LinkSelected);
    if let Err(e) = dom::jump_to(anchor) {
        log::warn!("Jump to #{} failed: {}", anchor.id(), e);
    }
}

/// Full-screen overlay menu for narrow viewports. Renders nothing while the
/// menu is closed.
#[component]
pub fn MobileMenu() -> Element {
    let config = use_context::<SiteConfig>();
    let mut theme = use_context::<ThemeController>();
    let mut menu = use_context::<MenuController>();

    if !menu.is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "menu-overlay fixed inset-0 z-50 bg-white/80 dark:bg-black/70 backdrop-blur-xl",
            div {
                class: "menu-panel max-w-6xl mx-auto px-4 sm:px-6",
                div {
                    class: "h-16 flex items-center justify-between",
                    a {
                        href: Anchor::Top.href(),
                        class: "font-semibold tracking-tight",
                        onclick: move |_| follow_menu_link(menu, Anchor::Top),
                        "{config.brand}"
                    }
                    button {
                        "aria-label": "Close menu",
                        class: "inline-flex items-center justify-center rounded-full border border-black/10 dark:border-white/20 p-2",
                        onclick: move |_| menu.close_menu(),
                        Icon { kind: IconKind::Close, size: 18 }
                    }
                }
                div {
                    class: "py-6",
                    div {
                        class: "flex flex-col text-lg divide-y divide-black/10 dark:divide-white/10",
                        for anchor in NAV_LINKS {
                            a {
                                key: "{anchor.id()}",
                                href: anchor.href(),
                                class: "py-4 font-medium hover:opacity-100 opacity-90",
                                onclick: move |_| follow_menu_link(menu, anchor),
                                "{anchor.label()}"
                            }
                        }
                    }
                    div {
                        class: "mt-6 flex gap-3",
                        a {
                            href: Anchor::Contact.href(),
                            class: "inline-flex items-center rounded-full bg-black text-white px-5 py-3 text-sm hover:opacity-90 dark:bg-white dark:text-black transition",
                            onclick: move |_| follow_menu_link(menu, Anchor::Contact),
                            "Book an intro call"
                        }
                        button {
                            "aria-label": "Toggle theme",
                            class: "inline-flex items-center rounded-full border border-black/10 dark:border-white/20 px-4 py-3 text-sm hover:bg-black hover:text-white dark:hover:bg-white dark:hover:text-black transition",
                            onclick: move |_| theme.toggle_theme(),
                            "{theme.current().switch_label()}"
                        }
                    }
                }
            }
        }
    }
}
