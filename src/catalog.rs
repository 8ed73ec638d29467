//! Static game data shown by the app.
//! Loaded once at startup from the embedded `assets/games.json` and never mutated.

use serde::Deserialize;

pub const DEFAULT_PLACEHOLDER: &str = "Click on a moment to see details";
/// Timeline length in minutes; markers past it are pinned to the end of the track.
pub const TIMELINE_MINUTES: u32 = 90;

const EMBEDDED: &str = include_str!("../assets/games.json");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
    #[default]
    Neutral,
}

impl Side {
    pub fn color(self) -> &'static str {
        match self {
            Side::Home => "#58a6ff",
            Side::Away => "#f0883e",
            Side::Neutral => "#8b949e",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Marker {
    pub minute: u32,
    /// Text shown in the event display when the marker is clicked.
    pub event: String,
    #[serde(default)]
    pub side: Side,
}

impl Marker {
    /// Horizontal position along the track, in percent.
    pub fn offset_percent(&self) -> f64 {
        (self.minute.min(TIMELINE_MINUTES) as f64 / TIMELINE_MINUTES as f64) * 100.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Game {
    pub number: u32,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl Game {
    /// Element id of the game's panel: fixed `game` prefix plus the game number.
    pub fn panel_id(&self) -> String {
        format!("game{}", self.number)
    }

    pub fn button_label(&self) -> String {
        if self.label.is_empty() {
            format!("Game {}", self.number)
        } else {
            self.label.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub title: String,
    pub placeholder: String,
    pub default_game: u32,
    pub games: Vec<Game>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            title: String::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            default_game: 1,
            games: Vec::new(),
        }
    }
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn embedded() -> Result<Self, serde_json::Error> {
        Self::from_json(EMBEDDED)
    }

    pub fn game(&self, number: u32) -> Option<&Game> {
        self.games.iter().find(|g| g.number == number)
    }

    /// Points `default_game` at the first game when it names no game.
    /// Returns the replaced number, if any.
    pub fn repair_default_game(&mut self) -> Option<u32> {
        if self.game(self.default_game).is_some() {
            return None;
        }
        let first = self.games.first()?.number;
        Some(std::mem::replace(&mut self.default_game, first))
    }

    /// Index of the selector button that starts out active.
    pub fn default_button(&self) -> usize {
        self.games
            .iter()
            .position(|g| g.number == self.default_game)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(catalog.default_game, 1);
        assert!(catalog.games.len() >= 2);
        let first = catalog.game(1).unwrap();
        assert_eq!(first.markers[0].event, "Team A scores");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let catalog = Catalog::from_json(r#"{ "games": [ { "number": 4 } ] }"#).unwrap();
        assert_eq!(catalog.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(catalog.default_game, 1);
        let g = &catalog.games[0];
        assert_eq!(g.panel_id(), "game4");
        assert_eq!(g.button_label(), "Game 4");
        assert!(g.markers.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Catalog::from_json("{ \"games\": [ ").is_err());
    }

    #[test]
    fn default_button_follows_default_game() {
        let catalog = Catalog::from_json(
            r#"{ "default_game": 3, "games": [ { "number": 1 }, { "number": 3 } ] }"#,
        )
        .unwrap();
        assert_eq!(catalog.default_button(), 1);

        let missing = Catalog::from_json(r#"{ "default_game": 7, "games": [ { "number": 1 } ] }"#)
            .unwrap();
        assert_eq!(missing.default_button(), 0);
    }

    #[test]
    fn unknown_default_game_falls_back_to_first_game() {
        let mut catalog = Catalog::from_json(
            r#"{ "default_game": 7, "games": [ { "number": 2 }, { "number": 3 } ] }"#,
        )
        .unwrap();
        assert_eq!(catalog.repair_default_game(), Some(7));
        assert_eq!(catalog.default_game, 2);
        assert_eq!(catalog.default_button(), 0);
        assert_eq!(catalog.repair_default_game(), None);

        let mut empty = Catalog::default();
        assert_eq!(empty.repair_default_game(), None);
        assert_eq!(empty.default_game, 1);
    }

    #[test]
    fn marker_offset_is_clamped() {
        let m = |minute| Marker {
            minute,
            event: String::new(),
            side: Side::Neutral,
        };
        assert_eq!(m(0).offset_percent(), 0.0);
        assert_eq!(m(45).offset_percent(), 50.0);
        assert_eq!(m(120).offset_percent(), 100.0);
    }
}
