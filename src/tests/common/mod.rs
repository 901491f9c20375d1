use std::cell::{ Cell, RefCell };
use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::ThemeRoot;
use crate::configs::SiteConfig;
use crate::utils::{
    use_menu_controller,
    use_menu_reset_on_navigation,
    MenuController,
    MenuState,
    NavigationBus,
    ThemeController,
    ThemeState,
};
use crate::views::MobileMenu;

pub fn setup() {
    std::env::set_var("RUST_LOG", "debug");
    let _ = env_logger::builder().is_test(true).try_init();
}

pub type Slot<T> = Rc<RefCell<Option<T>>>;

/// Lets a test reach into the mounted tree. Provided as a root context.
#[derive(Clone, Default)]
pub struct ShellHandles {
    pub theme: Slot<ThemeController>,
    pub menu: Slot<MenuController>,
    pub listening: Slot<Signal<bool>>,
    pub status_renders: Rc<Cell<usize>>,
}

#[component]
fn TestShell() -> Element {
    rsx! {
        ThemeRoot { MenuShell {} }
    }
}

#[component]
fn MenuShell() -> Element {
    let handles = use_context::<ShellHandles>();
    let theme = use_context::<ThemeController>();
    let menu = use_menu_controller();
    let listening = use_signal(|| true);

    use_hook(move || {
        *handles.theme.borrow_mut() = Some(theme);
        *handles.menu.borrow_mut() = Some(menu);
        *handles.listening.borrow_mut() = Some(listening);
    });

    rsx! {
        if listening() {
            NavigationReset {}
        }
        MenuStatus {}
        MobileMenu {}
    }
}

#[component]
fn NavigationReset() -> Element {
    use_menu_reset_on_navigation(use_context::<MenuController>());
    rsx! {}
}

#[component]
fn MenuStatus() -> Element {
    let handles = use_context::<ShellHandles>();
    let menu = use_context::<MenuController>();
    handles.status_renders.set(handles.status_renders.get() + 1);
    let status = format!("menu-{:?}", menu.current());

    rsx! {
        span { "{status}" }
    }
}

/// The theme root, menu controller, navigation reset and mobile menu,
/// mounted in a headless `VirtualDom` that listens on `bus`.
pub struct MountedShell {
    pub dom: VirtualDom,
    pub handles: ShellHandles,
    pub bus: NavigationBus,
}

impl MountedShell {
    pub fn mount() -> Self {
        let handles = ShellHandles::default();
        let bus = NavigationBus::default();
        let mut dom = VirtualDom::new(TestShell)
            .with_root_context(SiteConfig::default())
            .with_root_context(handles.clone())
            .with_root_context(bus.clone());
        dom.rebuild_in_place();

        let mut shell = Self { dom, handles, bus };
        shell.flush();
        shell
    }

    /// Polls pending tasks (the navigation coroutine) and re-renders.
    pub fn flush(&mut self) {
        for _ in 0..3 {
            self.dom.process_events();
            let _ = self.dom.render_immediate_to_vec();
        }
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn theme(&self) -> ThemeController {
        self.handles.theme.borrow().expect("theme controller mounted")
    }

    pub fn menu(&self) -> MenuController {
        self.handles.menu.borrow().expect("menu controller mounted")
    }

    pub fn theme_state(&self) -> ThemeState {
        let theme = self.theme();
        self.dom.in_runtime(|| theme.current())
    }

    pub fn menu_state(&self) -> MenuState {
        let menu = self.menu();
        self.dom.in_runtime(|| menu.current())
    }

    pub fn toggle_theme(&mut self) {
        let mut theme = self.theme();
        self.dom.in_runtime(|| theme.toggle_theme());
        self.flush();
    }

    pub fn with_menu(&mut self, f: impl FnOnce(MenuController)) {
        let menu = self.menu();
        self.dom.in_runtime(|| f(menu));
        self.flush();
    }

    /// What the browser's `hashchange` listener does; returns the number of
    /// subscribers reached.
    pub fn navigate(&mut self, hash: &str) -> usize {
        let delivered = self.bus.publish_hash(hash);
        self.flush();
        delivered
    }

    /// Unmounts the component holding the navigation subscription.
    pub fn stop_listening(&mut self) {
        let mut listening = self.handles.listening.borrow().expect("listening flag mounted");
        self.dom.in_runtime(|| listening.set(false));
        self.flush();
    }

    pub fn status_renders(&self) -> usize {
        self.handles.status_renders.get()
    }
}
