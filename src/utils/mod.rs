mod anchor;
pub mod dom;
mod menu_state;
mod navigation;
mod theme_state;
mod view_state;

pub use anchor::{ Anchor, ALL_ANCHORS, NAV_LINKS };
pub use menu_state::{ MenuEvent, MenuState };
pub use navigation::{ NavigationBus, NavigationEvent, Subscription };
pub use theme_state::{ ThemeState, DARK_MARKER };
pub use view_state::{
    use_hash_navigation,
    use_menu_controller,
    use_menu_reset_on_navigation,
    use_theme_controller,
    MenuController,
    ThemeController,
};
