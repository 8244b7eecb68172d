//! One-time onboarding copy shown during the first moves of a session.

use mnk_engine::Player;
use tracing::debug;

/// Moves after which onboarding hints stop for good.
pub const ONBOARDING_MOVES: usize = 4;

/// Tracks whether the onboarding sequence has been shown.
///
/// Completion survives board resets; a controller shows the sequence once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Onboarding {
    enabled: bool,
    passed: bool,
}

impl Onboarding {
    /// Creates onboarding state; disabled onboarding never produces copy.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            passed: false,
        }
    }

    /// Whether hints are still being shown.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.passed
    }

    /// Whether the full sequence has been shown.
    pub fn is_passed(&self) -> bool {
        self.passed
    }

    /// Prompt shown when the game starts.
    pub fn intro(&self, first_player: Player) -> Option<String> {
        self.is_active()
            .then(|| format!("Click on any cell to put {first_player}"))
    }

    /// Hint for the turn that follows the `opened_cells`-th move.
    ///
    /// `active_player` is the player about to move. The hint after the last
    /// onboarding move is an empty string, which clears the label.
    pub fn hint(
        &mut self,
        opened_cells: usize,
        active_player: Player,
        win_length: usize,
    ) -> Option<String> {
        if !self.is_active() {
            return None;
        }
        let text = match opened_cells {
            1 => format!("Now you are playing for {active_player}"),
            2 => format!("Try to get {win_length} in a row"),
            3 => "Good luck!".to_string(),
            ONBOARDING_MOVES => {
                debug!("Onboarding complete");
                self.passed = true;
                String::new()
            }
            _ => return None,
        };
        Some(text)
    }
}
