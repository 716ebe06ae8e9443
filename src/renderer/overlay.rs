//! Title / game over overlay content

use crate::sim::GamePhase;

/// Action bound to the overlay button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    Start,
    Restart,
}

impl OverlayAction {
    pub fn label(&self) -> &'static str {
        match self {
            OverlayAction::Start => "Start",
            OverlayAction::Restart => "Restart",
        }
    }
}

/// One overlay panel: heading, message and a single button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayPanel {
    pub title: &'static str,
    pub message: String,
    pub action: OverlayAction,
}

impl OverlayPanel {
    /// Panel for the given phase, or `None` while the game is running
    pub fn for_phase(phase: GamePhase, final_score: u64) -> Option<Self> {
        match phase {
            GamePhase::Idle => Some(Self {
                title: "Comet Dodge",
                message: "Move with A/D or arrow keys. Survive the comet storm.".to_string(),
                action: OverlayAction::Start,
            }),
            GamePhase::Running => None,
            GamePhase::Ended => Some(Self {
                title: "Game Over",
                message: format!("Score: {}", final_score),
                action: OverlayAction::Restart,
            }),
        }
    }

    /// DOM markup for the overlay container
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"panel\"><h1>{}</h1><p>{}</p><button id=\"{}\">{}</button></div>",
            self.title,
            self.message,
            self.button_id(),
            self.action.label()
        )
    }

    pub fn button_id(&self) -> &'static str {
        match self.action {
            OverlayAction::Start => "startBtn",
            OverlayAction::Restart => "restartBtn",
        }
    }
}
