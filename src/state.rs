//! Display modes and the controller's runtime state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::edge::Edge;
use crate::registry::ElementName;

/// Display mode, shared by the runtime state and the persisted start mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Normal,
    Zen,
    Full,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Normal => "normal",
            DisplayMode::Zen => "zen",
            DisplayMode::Full => "full",
        }
    }

    /// Next entry in settings-dropdown order.
    pub fn cycle(self) -> Self {
        match self {
            DisplayMode::Normal => DisplayMode::Zen,
            DisplayMode::Zen => DisplayMode::Full,
            DisplayMode::Full => DisplayMode::Normal,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown display mode `{0}` (expected normal, zen or full)")]
pub struct ParseModeError(String);

impl FromStr for DisplayMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(DisplayMode::Normal),
            "zen" => Ok(DisplayMode::Zen),
            "full" => Ok(DisplayMode::Full),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Edge group currently shown because of pointer proximity, together with the
/// element whose test triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub edge: Edge,
    pub element: ElementName,
}

/// Runtime state of the mode controller.
///
/// The edge and element of a reveal are stored together, so one cannot be set
/// without the other; zen is a variant of `mode`, so it cannot be on while
/// the controller is inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeState {
    mode: DisplayMode,
    revealed: Option<Reveal>,
}

impl ModeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entered(zen: bool) -> Self {
        Self {
            mode: if zen {
                DisplayMode::Zen
            } else {
                DisplayMode::Full
            },
            revealed: None,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.mode != DisplayMode::Normal
    }

    pub fn is_zen(&self) -> bool {
        self.mode == DisplayMode::Zen
    }

    pub fn revealed(&self) -> Option<Reveal> {
        self.revealed
    }

    pub fn revealed_edge(&self) -> Option<Edge> {
        self.revealed.map(|r| r.edge)
    }

    pub fn revealed_element(&self) -> Option<ElementName> {
        self.revealed.map(|r| r.element)
    }

    pub fn reveal(&mut self, edge: Edge, element: ElementName) {
        self.revealed = Some(Reveal { edge, element });
    }

    pub fn clear_reveal(&mut self) {
        self.revealed = None;
    }
}
