// Delegated click classification: one handler on the page root inspects the
// exact click target and decides which action, if any, it maps to.
use web_sys::Element;

use crate::model::{MarkerRef, UiAction};

pub const GAME_BUTTON_CLASS: &str = "game-btn";
pub const MARKER_CLASS: &str = "timeline-marker";

#[derive(Clone, Debug, PartialEq)]
pub enum ClickTarget {
    GameButton { game: u32, button: usize },
    Marker { marker: Option<MarkerRef>, event: String },
    Other,
}

fn has_class(class_name: &str, class: &str) -> bool {
    class_name.split_whitespace().any(|c| c == class)
}

impl ClickTarget {
    /// Classify from the target's `class` attribute and a data-attribute lookup.
    /// Marker classification wins over button classification.
    pub fn classify<F>(class_name: &str, attr: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if has_class(class_name, MARKER_CLASS) {
            if let Some(event) = attr("data-event") {
                let marker = attr("data-marker").and_then(|m| m.parse().ok());
                return ClickTarget::Marker { marker, event };
            }
            return ClickTarget::Other;
        }
        if has_class(class_name, GAME_BUTTON_CLASS) {
            let Some(game) = attr("data-game").and_then(|g| g.trim().parse::<u32>().ok()) else {
                return ClickTarget::Other;
            };
            let button = attr("data-button")
                .and_then(|b| b.trim().parse::<usize>().ok())
                .unwrap_or_else(|| game.saturating_sub(1) as usize);
            return ClickTarget::GameButton { game, button };
        }
        ClickTarget::Other
    }

    pub fn from_element(el: &Element) -> Self {
        Self::classify(&el.class_name(), |name| el.get_attribute(name))
    }

    pub fn into_action(self) -> Option<UiAction> {
        match self {
            ClickTarget::GameButton { game, button } => Some(UiAction::SelectGame { game, button }),
            ClickTarget::Marker { marker, event } => Some(UiAction::SelectMarker { marker, event }),
            ClickTarget::Other => None,
        }
    }
}
