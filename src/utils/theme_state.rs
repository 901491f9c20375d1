/// Class placed on the document root while the dark palette is active.
pub const DARK_MARKER: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeState {
    Light,
    #[default]
    Dark,
}

impl ThemeState {
    pub fn is_dark(self) -> bool {
        self == ThemeState::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeState::Light => ThemeState::Dark,
            ThemeState::Dark => ThemeState::Light,
        }
    }

    /// Class for the app root wrapper; empty in light mode.
    pub fn marker(self) -> &'static str {
        if self.is_dark() { DARK_MARKER } else { "" }
    }

    /// Text for the menu's toggle button, naming the mode it switches to.
    pub fn switch_label(self) -> &'static str {
        match self {
            ThemeState::Light => "Dark mode",
            ThemeState::Dark => "Light mode",
        }
    }
}
