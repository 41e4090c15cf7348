use crate::layout::Region;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    StartGame,
    Options,
    Quit,
}

/// Main menu state. Starting the game is only honoured once per run.
#[derive(Default)]
pub struct Launcher {
    game_started: bool,
}

impl Launcher {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn game_started(&self) -> bool {
        self.game_started
    }

    /// Returns true the first time only.
    pub fn request_start(&mut self) -> bool {
        if self.game_started {
            tracing::debug!("game already started, ignoring start request");
            return false;
        }
        self.game_started = true;
        true
    }

    /// Maps a clicked menu region to an action. A repeated Start yields nothing.
    pub fn dispatch(&mut self, region: Region) -> Option<MenuAction> {
        match region {
            Region::Start => self.request_start().then_some(MenuAction::StartGame),
            Region::Options => {
                tracing::info!("Options!");
                Some(MenuAction::Options)
            }
            Region::Quit => Some(MenuAction::Quit),
            _ => None,
        }
    }
}
