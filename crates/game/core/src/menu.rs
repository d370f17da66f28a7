//! Menu cursors and their navigation rules.
//!
//! Every menu is a closed enum whose discriminant doubles as the cursor
//! position sent to the presenter. Navigation never wraps: `Next` on the last
//! entry and `Previous` on the first entry leave the cursor in place.

use strum::{Display, EnumCount, EnumIter, FromRepr};

/// Navigation intent produced by any menu screen.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MenuAction {
    Next,
    Previous,
    Confirm,
}

/// Where a confirmed menu entry leads.
///
/// Menus only describe the *intent*; [`crate::GameEngine`] owns the actual
/// run-state transition and any side effects (saving, loading, quitting).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MenuOutcome<M> {
    /// Stay in the same menu with the given cursor.
    Stay(M),
    StartNewGame,
    LoadSavedGame,
    OpenSettings,
    BackToMainMenu,
    ResumeGame,
    SaveAndQuit,
    Quit,
}

/// Entries of the title screen.
#[repr(u8)]
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Display, EnumIter, EnumCount, FromRepr,
)]
pub enum MainMenu {
    #[default]
    Play,
    Continue,
    Settings,
    Quit,
}

impl MainMenu {
    /// Cursor position reported to the presenter.
    pub const fn position(self) -> u8 {
        self as u8
    }

    /// `Continue` is only selectable when a saved game exists.
    pub const fn is_enabled(self, has_save_game: bool) -> bool {
        !matches!(self, MainMenu::Continue) || has_save_game
    }

    pub fn on_action(self, action: MenuAction, has_save_game: bool) -> MenuOutcome<Self> {
        match action {
            MenuAction::Next => MenuOutcome::Stay(self.on_next(has_save_game)),
            MenuAction::Previous => MenuOutcome::Stay(self.on_previous(has_save_game)),
            MenuAction::Confirm => self.on_confirm(),
        }
    }

    fn on_next(self, has_save_game: bool) -> Self {
        match self {
            MainMenu::Play if has_save_game => MainMenu::Continue,
            MainMenu::Play | MainMenu::Continue => MainMenu::Settings,
            MainMenu::Settings | MainMenu::Quit => MainMenu::Quit,
        }
    }

    fn on_previous(self, has_save_game: bool) -> Self {
        match self {
            MainMenu::Play | MainMenu::Continue => MainMenu::Play,
            MainMenu::Settings if has_save_game => MainMenu::Continue,
            MainMenu::Settings => MainMenu::Play,
            MainMenu::Quit => MainMenu::Settings,
        }
    }

    fn on_confirm(self) -> MenuOutcome<Self> {
        match self {
            MainMenu::Play => MenuOutcome::StartNewGame,
            MainMenu::Continue => MenuOutcome::LoadSavedGame,
            MainMenu::Settings => MenuOutcome::OpenSettings,
            MainMenu::Quit => MenuOutcome::Quit,
        }
    }
}

/// Entries of the settings screen.
#[repr(u8)]
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Display, EnumIter, EnumCount, FromRepr,
)]
pub enum SettingsMenu {
    #[default]
    Back,
}

impl SettingsMenu {
    pub const fn position(self) -> u8 {
        self as u8
    }

    pub fn on_action(self, action: MenuAction) -> MenuOutcome<Self> {
        match action {
            MenuAction::Next | MenuAction::Previous => MenuOutcome::Stay(self),
            MenuAction::Confirm => match self {
                SettingsMenu::Back => MenuOutcome::BackToMainMenu,
            },
        }
    }
}

/// Entries of the in-game pause screen.
#[repr(u8)]
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Display, EnumIter, EnumCount, FromRepr,
)]
pub enum PauseMenu {
    #[default]
    Continue,
    #[strum(to_string = "Save and Quit")]
    SaveAndQuit,
}

impl PauseMenu {
    pub const fn position(self) -> u8 {
        self as u8
    }

    pub fn on_action(self, action: MenuAction) -> MenuOutcome<Self> {
        match action {
            MenuAction::Next => MenuOutcome::Stay(PauseMenu::SaveAndQuit),
            MenuAction::Previous => MenuOutcome::Stay(PauseMenu::Continue),
            MenuAction::Confirm => match self {
                PauseMenu::Continue => MenuOutcome::ResumeGame,
                PauseMenu::SaveAndQuit => MenuOutcome::SaveAndQuit,
            },
        }
    }
}
