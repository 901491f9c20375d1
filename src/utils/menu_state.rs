#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Everything that can move the mobile menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    OpenRequested,
    CloseRequested,
    LinkSelected,
    Navigated,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Next state for `event`. Only an explicit open request opens the menu.
    pub fn apply(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::OpenRequested => MenuState::Open,
            MenuEvent::CloseRequested | MenuEvent::LinkSelected | MenuEvent::Navigated => {
                MenuState::Closed
            }
        }
    }
}
