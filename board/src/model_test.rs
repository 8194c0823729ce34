use serde_json::json;
use uuid::Uuid;

use super::*;
use crate::select::Coord;

fn text_panel(text: &str) -> Panel {
    Panel {
        id: Uuid::new_v4(),
        name: None,
        content: PanelContent::Text { content: text.to_owned() },
    }
}

fn image_panel(src: &str, alt: &str) -> Panel {
    Panel {
        id: Uuid::new_v4(),
        name: Some("caption".to_owned()),
        content: PanelContent::Image { src: src.to_owned(), alt: alt.to_owned() },
    }
}

fn sample_board() -> Board {
    Board {
        id: Uuid::new_v4(),
        preferences: Preferences::default(),
        rows: vec![
            Row {
                id: Uuid::new_v4(),
                name: "intro".to_owned(),
                panels: vec![image_panel("cover.png", "cover"), text_panel("hello")],
            },
            Row { id: Uuid::new_v4(), name: String::new(), panels: vec![] },
        ],
    }
}

// =============================================================
// Constructors
// =============================================================

#[test]
fn fresh_row_is_empty_with_distinct_id() {
    let a = Row::new();
    let b = Row::new();
    assert!(a.name.is_empty());
    assert!(a.panels.is_empty());
    assert_ne!(a.id, b.id);
}

#[test]
fn fresh_panel_has_empty_content() {
    let panel = Panel::empty();
    assert_eq!(panel.content, PanelContent::Empty);
    assert!(panel.name.is_none());
}

#[test]
fn default_preferences_panel_width() {
    assert_eq!(Preferences::default().panel_width, "10vw");
}

// =============================================================
// Accessors
// =============================================================

#[test]
fn row_and_panel_accessors() {
    let board = sample_board();
    assert_eq!(board.row(0).map(|r| r.name.as_str()), Some("intro"));
    assert!(board.row(2).is_none());
    assert!(board.panel(Coord::new(0, 1)).is_some());
    assert!(board.panel(Coord::new(0, 2)).is_none());
    assert!(board.panel(Coord::new(1, 0)).is_none());
    assert!(board.panel(Coord::new(5, 0)).is_none());
}

// =============================================================
// Deserialization + backfill
// =============================================================

#[test]
fn deserialize_full_wire_shape() {
    let board_id = Uuid::new_v4();
    let row_id = Uuid::new_v4();
    let panel_id = Uuid::new_v4();
    let payload = json!({
        "id": board_id,
        "preferences": { "panelWidth": "14vw" },
        "items": [
            {
                "id": row_id,
                "name": "act one",
                "items": [
                    { "id": panel_id, "name": "p1", "src": "a.png", "alt": "first" },
                ],
            },
        ],
    });
    let board: Board = serde_json::from_value(payload).unwrap();
    assert_eq!(board.id, board_id);
    assert_eq!(board.preferences.panel_width, "14vw");
    assert_eq!(board.rows.len(), 1);
    assert_eq!(board.rows[0].id, row_id);
    assert_eq!(board.rows[0].name, "act one");
    assert_eq!(board.rows[0].panels[0].id, panel_id);
    assert_eq!(board.rows[0].panels[0].name.as_deref(), Some("p1"));
    assert_eq!(
        board.rows[0].panels[0].content,
        PanelContent::Image { src: "a.png".to_owned(), alt: "first".to_owned() }
    );
}

#[test]
fn deserialize_defaults_missing_preferences() {
    let board: Board = serde_json::from_value(json!({ "items": [] })).unwrap();
    assert_eq!(board.preferences.panel_width, "10vw");
}

#[test]
fn deserialize_defaults_preferences_without_width() {
    let board: Board = serde_json::from_value(json!({ "preferences": {}, "items": [] })).unwrap();
    assert_eq!(board.preferences.panel_width, "10vw");
}

#[test]
fn deserialize_backfills_missing_ids() {
    let payload = json!({
        "items": [
            { "name": "a", "items": [ { "content": "x" }, { "content": "y" } ] },
            { "name": "b", "items": [] },
        ],
    });
    let board: Board = serde_json::from_value(payload).unwrap();
    let row_a = &board.rows[0];
    assert_ne!(row_a.panels[0].id, row_a.panels[1].id);
    assert_ne!(board.rows[0].id, board.rows[1].id);
    assert_ne!(board.id, board.rows[0].id);
}

#[test]
fn deserialize_keeps_present_ids_verbatim() {
    let board_id = Uuid::new_v4();
    let row_id = Uuid::new_v4();
    let panel_id = Uuid::new_v4();
    let payload = json!({
        "id": board_id,
        "items": [
            { "id": row_id, "name": "", "items": [ { "id": panel_id } ] },
        ],
    });
    let first: Board = serde_json::from_value(payload.clone()).unwrap();
    let second: Board = serde_json::from_value(payload).unwrap();
    assert_eq!(first.id, board_id);
    assert_eq!(first.rows[0].id, row_id);
    assert_eq!(first.rows[0].panels[0].id, panel_id);
    // Backfill is idempotent once ids are present.
    assert_eq!(first, second);
}

#[test]
fn deserialize_src_wins_over_content() {
    let payload = json!({
        "items": [ { "id": Uuid::new_v4(), "name": "", "items": [
            { "id": Uuid::new_v4(), "src": "a.png", "alt": "a", "content": "stale" },
        ] } ],
    });
    let board: Board = serde_json::from_value(payload).unwrap();
    assert_eq!(
        board.rows[0].panels[0].content,
        PanelContent::Image { src: "a.png".to_owned(), alt: "a".to_owned() }
    );
}

#[test]
fn deserialize_neither_field_is_empty_content() {
    let payload = json!({
        "items": [ { "items": [ { "name": "blank" } ] } ],
    });
    let board: Board = serde_json::from_value(payload).unwrap();
    assert_eq!(board.rows[0].panels[0].content, PanelContent::Empty);
}

#[test]
fn deserialize_missing_row_name_is_empty_string() {
    let board: Board = serde_json::from_value(json!({ "items": [ { "items": [] } ] })).unwrap();
    assert_eq!(board.rows[0].name, "");
}

#[test]
fn deserialize_missing_alt_defaults_empty() {
    let payload = json!({ "items": [ { "items": [ { "src": "a.png" } ] } ] });
    let board: Board = serde_json::from_value(payload).unwrap();
    assert_eq!(
        board.rows[0].panels[0].content,
        PanelContent::Image { src: "a.png".to_owned(), alt: String::new() }
    );
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn serialize_emits_wire_field_names() {
    let board = sample_board();
    let value = serde_json::to_value(&board).unwrap();
    assert_eq!(value["id"], json!(board.id));
    assert_eq!(value["preferences"]["panelWidth"], json!("10vw"));
    let rows = value["items"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], json!("intro"));
    let panels = rows[0]["items"].as_array().unwrap();
    assert_eq!(panels[0]["src"], json!("cover.png"));
    assert_eq!(panels[0]["alt"], json!("cover"));
    assert!(panels[0].get("content").is_none());
    assert_eq!(panels[1]["content"], json!("hello"));
    assert!(panels[1].get("src").is_none());
    // Caption is omitted, not emitted as null.
    assert!(panels[1].get("name").is_none());
}

#[test]
fn serialize_empty_panel_has_no_content_fields() {
    let board = Board {
        id: Uuid::new_v4(),
        preferences: Preferences::default(),
        rows: vec![Row { id: Uuid::new_v4(), name: String::new(), panels: vec![Panel::empty()] }],
    };
    let value = serde_json::to_value(&board).unwrap();
    let panel = &value["items"][0]["items"][0];
    assert!(panel.get("src").is_none());
    assert!(panel.get("alt").is_none());
    assert!(panel.get("content").is_none());
    assert!(panel.get("id").is_some());
}

#[test]
fn serde_round_trip_preserves_board() {
    let board = sample_board();
    let payload = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&payload).unwrap();
    assert_eq!(restored, board);
}
