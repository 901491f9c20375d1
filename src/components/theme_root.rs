use dioxus::prelude::*;
use crate::utils::use_theme_controller;

/// Owns the theme for everything below it and carries the `dark` marker on
/// its wrapper, so `dark:` rules apply even where `<html>` can't be reached.
#[component]
pub fn ThemeRoot(children: Element) -> Element {
    let theme = use_theme_controller();

    rsx! {
        div {
            class: theme.current().marker(),
            {children}
        }
    }
}
