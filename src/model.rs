//! UI state for the timeline page.
//! Two independent single-choice selections: the active game and the highlighted marker.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use yew::Reducible;

use crate::catalog::Catalog;

/// Identity of a timeline marker: owning game number and position within that game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkerRef {
    pub game: u32,
    pub index: usize,
}

impl fmt::Display for MarkerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.game, self.index)
    }
}

impl FromStr for MarkerRef {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (game, index) = s.split_once(':').ok_or(())?;
        Ok(MarkerRef {
            game: game.trim().parse().map_err(|_| ())?,
            index: index.trim().parse().map_err(|_| ())?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    /// Game number whose panel is shown. May match no panel.
    pub active_game: u32,
    /// Index of the selector button that triggered the last switch.
    pub active_button: usize,
    pub highlighted: Option<MarkerRef>,
    pub event_text: String,
    pub placeholder: String,
}

impl UiState {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            active_game: catalog.default_game,
            active_button: catalog.default_button(),
            highlighted: None,
            event_text: catalog.placeholder.clone(),
            placeholder: catalog.placeholder.clone(),
        }
    }

    pub fn is_panel_active(&self, game: u32) -> bool {
        self.active_game == game
    }

    pub fn is_button_active(&self, button: usize) -> bool {
        self.active_button == button
    }

    pub fn is_highlighted(&self, marker: MarkerRef) -> bool {
        self.highlighted == Some(marker)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum UiAction {
    /// Show `game`'s panel, mark `button` active, reset the event display and highlights.
    SelectGame { game: u32, button: usize },
    /// Show `event` in the event display and make `marker` the only highlighted marker.
    SelectMarker { marker: Option<MarkerRef>, event: String },
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use UiAction::*;
        let mut new = (*self).clone();
        match action {
            SelectGame { game, button } => {
                new.active_game = game;
                new.active_button = button;
                new.event_text = new.placeholder.clone();
                new.highlighted = None;
            }
            SelectMarker { marker, event } => {
                new.event_text = event;
                new.highlighted = marker;
            }
        }
        if new == *self {
            return self;
        }
        Rc::new(new)
    }
}
