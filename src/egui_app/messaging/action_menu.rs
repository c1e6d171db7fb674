//! Action Menu
//!
//! Per-bubble Edit/Delete menu. The menu itself performs nothing: selecting an
//! entry closes it and yields a [`MenuCommand`] for the bubble to dispatch.

/// Whether the menu is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Input to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Trigger button clicked
    Toggle,
    SelectEdit,
    SelectDelete,
    /// Close without selecting (click-away, ownership lost)
    Dismiss,
}

/// What a selection asks the bubble to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Edit,
    Delete,
}

impl MenuState {
    /// Pure transition function
    pub fn transition(self, event: MenuEvent) -> (MenuState, Option<MenuCommand>) {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => (MenuState::Open, None),
            (MenuState::Open, MenuEvent::Toggle) => (MenuState::Closed, None),
            (MenuState::Open, MenuEvent::SelectEdit) => (MenuState::Closed, Some(MenuCommand::Edit)),
            (MenuState::Open, MenuEvent::SelectDelete) => (MenuState::Closed, Some(MenuCommand::Delete)),
            (MenuState::Open, MenuEvent::Dismiss) => (MenuState::Closed, None),
            // Entries are not reachable while closed
            (MenuState::Closed, _) => (MenuState::Closed, None),
        }
    }
}

/// Menu state owned by one bubble
#[derive(Debug, Default)]
pub struct ActionMenu {
    state: MenuState,
}

impl ActionMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Apply an event and return the command it produced, if any
    pub fn handle(&mut self, event: MenuEvent) -> Option<MenuCommand> {
        let (next, command) = self.state.transition(event);
        if next != self.state {
            tracing::debug!("[BUBBLE] Menu {:?} -> {:?} on {:?}", self.state, next, event);
        }
        self.state = next;
        command
    }
}
