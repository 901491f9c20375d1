//! Browser side effects: the theme marker on `<html>` and the `hashchange`
//! listener. Off the web target both are logged no-ops.

use crate::error::SiteError;
use crate::utils::anchor::Anchor;
use crate::utils::navigation::NavigationBus;
use crate::utils::theme_state::ThemeState;
#[cfg(target_arch = "wasm32")]
use crate::utils::theme_state::DARK_MARKER;

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::*;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    fn window() -> Result<web_sys::Window, SiteError> {
        web_sys::window().ok_or_else(|| SiteError::Dom("no window".to_string()))
    }

    pub fn apply_theme_marker(theme: ThemeState) -> Result<(), SiteError> {
        let root = window()?
            .document()
            .and_then(|document| document.document_element())
            .ok_or_else(|| SiteError::Dom("no document element".to_string()))?;
        root.class_list().toggle_with_force(DARK_MARKER, theme.is_dark())?;
        Ok(())
    }

    pub fn current_hash() -> Result<String, SiteError> {
        Ok(window()?.location().hash()?)
    }

    pub fn jump_to(anchor: Anchor) -> Result<(), SiteError> {
        window()?.location().set_hash(anchor.id())?;
        Ok(())
    }

    pub struct HashChangeListener {
        window: web_sys::Window,
        callback: Closure<dyn FnMut(web_sys::HashChangeEvent)>,
    }

    impl HashChangeListener {
        pub fn attach(bus: NavigationBus) -> Result<Self, SiteError> {
            let window = window()?;
            let callback = Closure::<dyn FnMut(web_sys::HashChangeEvent)>::new(
                move |_event: web_sys::HashChangeEvent| {
                    match current_hash() {
                        Ok(hash) => {
                            bus.publish_hash(&hash);
                        }
                        Err(e) => log::warn!("Ignoring hashchange: {}", e),
                    }
                }
            );
            window
                .add_event_listener_with_callback(
                    "hashchange",
                    callback.as_ref().unchecked_ref::<js_sys::Function>()
                )
                .map_err(|e| SiteError::Listener(format!("{:?}", e)))?;
            log::debug!("hashchange listener attached");
            Ok(Self { window, callback })
        }
    }

    impl Drop for HashChangeListener {
        fn drop(&mut self) {
            let removed = self.window.remove_event_listener_with_callback(
                "hashchange",
                self.callback.as_ref().unchecked_ref::<js_sys::Function>()
            );
            match removed {
                Ok(()) => log::debug!("hashchange listener detached"),
                Err(e) => log::warn!("Failed to detach hashchange listener: {:?}", e),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::*;

    pub fn apply_theme_marker(theme: ThemeState) -> Result<(), SiteError> {
        log::debug!("No document root on this target, dark={} stays on the app root", theme.is_dark());
        Ok(())
    }

    pub fn current_hash() -> Result<String, SiteError> {
        Ok(String::new())
    }

    pub fn jump_to(anchor: Anchor) -> Result<(), SiteError> {
        log::debug!("Leaving the jump to #{} to the link itself", anchor.id());
        Ok(())
    }

    /// Desktop and mobile webviews get no `hashchange` bridge: there the menu
    /// closes only through the links' click handlers.
    pub struct HashChangeListener {
        _bus: NavigationBus,
    }

    impl HashChangeListener {
        pub fn attach(bus: NavigationBus) -> Result<Self, SiteError> {
            Ok(Self { _bus: bus })
        }
    }
}

pub use platform::{ apply_theme_marker, current_hash, jump_to, HashChangeListener };

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_native_bridge_is_inert() {
        let bus = NavigationBus::default();
        let listener = HashChangeListener::attach(bus.clone());
        assert!(listener.is_ok());
        assert_eq!(bus.subscriber_count(), 0);
        assert_eq!(current_hash(), Ok(String::new()));
        assert!(apply_theme_marker(ThemeState::Light).is_ok());
        assert!(jump_to(Anchor::Work).is_ok());
    }
}
