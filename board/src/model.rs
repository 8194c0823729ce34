//! Board model: the Board → Row → Panel tree and its wire format.
//!
//! This module defines the document the editor operates on. A board is an
//! ordered sequence of rows; a row is a named, ordered sequence of panels; a
//! panel holds either an image reference or free text. Panels are addressed
//! by position, never by id — ids exist so storage and view layers can key
//! entries stably across reorders.
//!
//! The wire format (the `items` / `panelWidth` JSON shape) is the one
//! contract shared with storage backends and external producers. Producers
//! may omit ids and preferences entirely; deserialization repairs both, and
//! leaves ids that are already present untouched.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Panel width applied when a stored board carries no preferences.
pub const DEFAULT_PANEL_WIDTH: &str = "10vw";

/// Unique identifier for a board, row, or panel.
pub type EntityId = Uuid;

/// The full editable document: ordered rows of panels plus preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "wire::BoardWire", into = "wire::BoardWire")]
pub struct Board {
    /// Unique identifier, also the persistence key.
    pub id: EntityId,
    /// Display preferences persisted with the board.
    pub preferences: Preferences,
    /// Ordered rows. A board with zero rows is valid.
    pub rows: Vec<Row>,
}

/// Board-level display preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// CSS-length-like panel width (e.g. `"10vw"`). Never validated
    /// numerically; the view layer applies it verbatim.
    pub panel_width: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { panel_width: DEFAULT_PANEL_WIDTH.to_owned() }
    }
}

/// A named, ordered sequence of panels. An empty panel sequence is valid
/// (e.g. a freshly added row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: EntityId,
    /// Free-text heading, possibly empty.
    pub name: String,
    pub panels: Vec<Panel>,
}

impl Row {
    /// A fresh row: new id, empty name, no panels.
    #[must_use]
    pub fn new() -> Self {
        Self { id: Uuid::new_v4(), name: String::new(), panels: Vec::new() }
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

/// A single content cell: image-backed or free-text, with an optional caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub id: EntityId,
    /// Optional heading/caption.
    pub name: Option<String>,
    pub content: PanelContent,
}

impl Panel {
    /// A fresh panel: new id, no caption, empty content.
    #[must_use]
    pub fn empty() -> Self {
        Self { id: Uuid::new_v4(), name: None, content: PanelContent::Empty }
    }
}

/// Panel content variant. On the wire these are the mutually-exclusive
/// `src`/`alt` and `content` fields; in memory they are a tagged choice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelContent {
    /// Image reference plus alt text.
    Image { src: String, alt: String },
    /// Free text.
    Text { content: String },
    /// Freshly created panel; rendered as empty text.
    #[default]
    Empty,
}

impl Board {
    /// The row at `index`, if it exists.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// The panel at a (row, column) coordinate, if it exists.
    #[must_use]
    pub fn panel(&self, at: crate::select::Coord) -> Option<&Panel> {
        self.rows.get(at.row).and_then(|row| row.panels.get(at.col))
    }
}

mod wire {
    //! Serialized shape of a board. Ids are optional on the way in (older
    //! producers stripped them) and always present on the way out.

    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    use super::{Board, Panel, PanelContent, Preferences, Row};

    #[derive(Serialize, Deserialize)]
    pub struct BoardWire {
        #[serde(default)]
        id: Option<Uuid>,
        #[serde(default)]
        preferences: Option<PreferencesWire>,
        #[serde(default)]
        items: Vec<RowWire>,
    }

    #[derive(Serialize, Deserialize)]
    struct PreferencesWire {
        #[serde(rename = "panelWidth", default)]
        panel_width: Option<String>,
    }

    #[derive(Serialize, Deserialize)]
    struct RowWire {
        #[serde(default)]
        id: Option<Uuid>,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        items: Vec<PanelWire>,
    }

    #[derive(Serialize, Deserialize)]
    struct PanelWire {
        #[serde(default)]
        id: Option<Uuid>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        src: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    }

    impl From<BoardWire> for Board {
        fn from(wire: BoardWire) -> Self {
            Self {
                id: wire.id.unwrap_or_else(Uuid::new_v4),
                preferences: wire.preferences.map(Preferences::from).unwrap_or_default(),
                rows: wire.items.into_iter().map(Row::from).collect(),
            }
        }
    }

    impl From<PreferencesWire> for Preferences {
        fn from(wire: PreferencesWire) -> Self {
            wire.panel_width.map_or_else(Self::default, |panel_width| Self { panel_width })
        }
    }

    impl From<RowWire> for Row {
        fn from(wire: RowWire) -> Self {
            Self {
                id: wire.id.unwrap_or_else(Uuid::new_v4),
                name: wire.name.unwrap_or_default(),
                panels: wire.items.into_iter().map(Panel::from).collect(),
            }
        }
    }

    impl From<PanelWire> for Panel {
        fn from(wire: PanelWire) -> Self {
            // EDGE: a producer that sent both src and content gets the image;
            // the view renders src whenever it is present.
            let content = if let Some(src) = wire.src {
                PanelContent::Image { src, alt: wire.alt.unwrap_or_default() }
            } else if let Some(content) = wire.content {
                PanelContent::Text { content }
            } else {
                PanelContent::Empty
            };
            Self { id: wire.id.unwrap_or_else(Uuid::new_v4), name: wire.name, content }
        }
    }

    impl From<Board> for BoardWire {
        fn from(board: Board) -> Self {
            Self {
                id: Some(board.id),
                preferences: Some(PreferencesWire { panel_width: Some(board.preferences.panel_width) }),
                items: board.rows.into_iter().map(RowWire::from).collect(),
            }
        }
    }

    impl From<Row> for RowWire {
        fn from(row: Row) -> Self {
            Self {
                id: Some(row.id),
                name: Some(row.name),
                items: row.panels.into_iter().map(PanelWire::from).collect(),
            }
        }
    }

    impl From<Panel> for PanelWire {
        fn from(panel: Panel) -> Self {
            let (src, alt, content) = match panel.content {
                PanelContent::Image { src, alt } => (Some(src), Some(alt), None),
                PanelContent::Text { content } => (None, None, Some(content)),
                PanelContent::Empty => (None, None, None),
            };
            Self { id: Some(panel.id), name: panel.name, src, alt, content }
        }
    }
}
