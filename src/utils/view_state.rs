//! Reactive wrappers shared through Dioxus context.

use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use super::dom::{ self, HashChangeListener };
use super::menu_state::{ MenuEvent, MenuState };
use super::navigation::{ NavigationBus, NavigationEvent, Subscription };
use super::theme_state::ThemeState;

/// Owns the dark-mode flag for the whole tree.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeController {
    state: Signal<ThemeState>,
}

impl ThemeController {
    pub fn new(state: Signal<ThemeState>) -> Self {
        Self { state }
    }

    pub fn current(&self) -> ThemeState {
        *self.state.read()
    }

    pub fn toggle_theme(&mut self) {
        let next = self.current().toggled();
        self.state.set(next);
        log::debug!("Theme switched to {:?}", next);
    }

    /// Pushes the current theme onto `<html>`. Failures leave the app root
    /// wrapper as the only carrier of the marker.
    pub fn apply_marker(&self) {
        if let Err(e) = dom::apply_theme_marker(self.current()) {
            log::warn!("Theme marker not applied: {}", e);
        }
    }
}

/// Owns the mobile menu's open flag.
#[derive(Clone, Copy, PartialEq)]
pub struct MenuController {
    state: Signal<MenuState>,
}

impl MenuController {
    pub fn new(state: Signal<MenuState>) -> Self {
        Self { state }
    }

    pub fn current(&self) -> MenuState {
        *self.state.read()
    }

    pub fn is_open(&self) -> bool {
        self.current().is_open()
    }

    pub fn open_menu(&mut self) {
        self.dispatch(MenuEvent::OpenRequested);
    }

    pub fn close_menu(&mut self) {
        self.dispatch(MenuEvent::CloseRequested);
    }

    pub fn dispatch(&mut self, event: MenuEvent) {
        let current = *self.state.peek();
        let next = current.apply(event);
        // Skip no-op writes so idle subscribers don't re-render.
        if next != current {
            self.state.set(next);
            log::debug!("Menu {:?} -> {:?} on {:?}", current, next, event);
        }
    }
}

/// Creates the theme flag (Dark on first render), shares its controller
/// through context and keeps `<html>` marked on mount and on every flip.
pub fn use_theme_controller() -> ThemeController {
    let state = use_signal(ThemeState::default);
    let theme = use_context_provider(|| ThemeController::new(state));
    use_effect(move || theme.apply_marker());
    theme
}

/// Creates the menu flag (Closed) and shares its controller through context.
pub fn use_menu_controller() -> MenuController {
    let state = use_signal(MenuState::default);
    use_context_provider(|| MenuController::new(state))
}

/// Closes `menu` on every in-page navigation while the caller is mounted.
pub fn use_menu_reset_on_navigation(menu: MenuController) {
    use_hash_navigation(move |event: NavigationEvent| {
        log::debug!("Navigated to {:?}", event.hash);
        let mut menu = menu;
        menu.dispatch(MenuEvent::Navigated);
    });
}

/// Keeps the `hashchange` listener and the bus subscription alive for the
/// calling component's lifetime; both are released when it unmounts.
struct NavigationGuard {
    _subscription: Subscription,
    _listener: Option<HashChangeListener>,
}

/// Runs `on_navigate` for every in-page navigation while the caller is
/// mounted.
///
/// Navigations arrive on the [`NavigationBus`] found in context, or on a
/// private one when no ancestor provides it. Browser callbacks only push into
/// a channel; the handler runs on a coroutine inside the Dioxus runtime so it
/// may write signals.
pub fn use_hash_navigation<F>(on_navigate: F)
    where F: FnMut(NavigationEvent) + Clone + 'static
{
    let navigations = use_coroutine(move |mut rx: UnboundedReceiver<NavigationEvent>| {
        let mut on_navigate = on_navigate.clone();
        async move {
            while let Some(event) = rx.next().await {
                on_navigate(event);
            }
        }
    });

    use_hook(move || {
        let tx = navigations.tx();
        let bus = try_consume_context::<NavigationBus>().unwrap_or_default();
        let subscription = bus.subscribe(move |event| {
            if tx.unbounded_send(event.clone()).is_err() {
                log::debug!("Navigation to {:?} arrived after unmount", event.hash);
            }
        });
        let listener = match HashChangeListener::attach(bus) {
            Ok(listener) => Some(listener),
            Err(e) => {
                log::warn!("In-page navigation will not close the menu: {}", e);
                None
            }
        };
        Rc::new(NavigationGuard {
            _subscription: subscription,
            _listener: listener,
        })
    });
}
