//! The scene model of a tactical diagram.
//!
//! A [`TacticalSchema`] holds four independent, ordered collections: players,
//! arrows and zones (authored by the generation service) and generic board
//! items (authored in the interactive editor). Every collection may be empty,
//! including all of them at once, which renders as a bare court.
//!
//! All coordinates are percentages on the normalized `100×100` canvas, see
//! [`crate::geometry`]. Field names on the wire are camelCase, and arrows and
//! items carry their discriminant under `type`.
//!
//! ```
//! use tactiboard_core::scene::{ArrowKind, TacticalSchema};
//!
//! let json = r#"{
//!     "description": "Passe et va",
//!     "players": [{"id": "p1", "label": "PG", "x": 20, "y": 50,
//!                  "role": "attacker", "team": "team1"}],
//!     "arrows": [{"fromX": 20, "fromY": 50, "toX": 80, "toY": 50, "type": "pass"}]
//! }"#;
//! let schema: TacticalSchema = serde_json::from_str(json).unwrap();
//! assert_eq!(schema.arrows()[0].kind(), ArrowKind::Pass);
//! assert!(schema.zones().is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Scale given to newly placed board items.
pub const DEFAULT_ITEM_SCALE: f32 = 0.12;
/// Smallest scale a board item can be given.
pub const MIN_ITEM_SCALE: f32 = 0.05;
/// Largest scale a board item can be given.
pub const MAX_ITEM_SCALE: f32 = 0.3;
/// Largest rotation, in degrees, a board item can be given.
pub const MAX_ROTATION: f32 = 360.0;

/// The full diagram of one drill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TacticalSchema {
    description: String,
    players: Vec<Player>,
    arrows: Vec<Arrow>,
    zones: Vec<Zone>,
    items: Vec<BoardItem>,
}

impl TacticalSchema {
    /// Creates an empty scene with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Creates an items-only scene, the shape reported by the editor.
    pub fn from_items(description: impl Into<String>, items: Vec<BoardItem>) -> Self {
        Self {
            description: description.into(),
            items,
            ..Self::default()
        }
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    pub fn with_arrow(mut self, arrow: Arrow) -> Self {
        self.arrows.push(arrow);
        self
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zones.push(zone);
        self
    }

    pub fn with_item(mut self, item: BoardItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn items(&self) -> &[BoardItem] {
        &self.items
    }

    /// Returns true if all four collections are empty.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.arrows.is_empty() && self.zones.is_empty() && self.items.is_empty()
    }

    /// Total number of scene elements across the four collections.
    pub fn element_count(&self) -> usize {
        self.players.len() + self.arrows.len() + self.zones.len() + self.items.len()
    }
}

/// Tactical role of a player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Attacker,
    Defender,
    #[default]
    Neutral,
}

/// Team a player belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Team1,
    Team2,
    #[default]
    Neutral,
}

/// A positioned player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Player {
    id: String,
    label: String,
    x: f32,
    y: f32,
    role: Role,
    team: Team,
    #[serde(skip_serializing_if = "Option::is_none")]
    has_ball: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    orientation: Option<f32>,
}

impl Player {
    pub fn new(id: impl Into<String>, label: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x,
            y,
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_team(mut self, team: Team) -> Self {
        self.team = team;
        self
    }

    pub fn with_ball(mut self, has_ball: bool) -> Self {
        self.has_ball = Some(has_ball);
        self
    }

    /// Sets the facing direction in degrees, `0` facing up.
    pub fn with_orientation(mut self, degrees: f32) -> Self {
        self.orientation = Some(degrees);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn team(&self) -> Team {
        self.team
    }

    /// Returns true if the player carries the ball. Absent means no ball.
    pub fn has_ball(&self) -> bool {
        self.has_ball.unwrap_or(false)
    }

    /// Returns the facing direction in degrees, `0` when absent.
    pub fn orientation(&self) -> f32 {
        self.orientation.unwrap_or(0.0)
    }
}

/// Shape family of an arrow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowKind {
    /// Ball passed between players
    #[default]
    Pass,
    /// Player moving without the ball
    Movement,
    /// Player carrying the ball
    Dribble,
    /// Positional rotation
    Rotation,
    /// Generic action
    Action,
}

/// A directed arrow between two canvas points.
///
/// `label` is carried through serialization but is never drawn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Arrow {
    from_x: f32,
    from_y: f32,
    to_x: f32,
    to_y: f32,
    #[serde(rename = "type")]
    kind: ArrowKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl Arrow {
    pub fn new(kind: ArrowKind, from: Point, to: Point) -> Self {
        Self {
            from_x: from.x(),
            from_y: from.y(),
            to_x: to.x(),
            to_y: to.y(),
            kind,
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the tail point.
    pub fn start(&self) -> Point {
        Point::new(self.from_x, self.from_y)
    }

    /// Returns the head point.
    pub fn end(&self) -> Point {
        Point::new(self.to_x, self.to_y)
    }

    pub fn kind(&self) -> ArrowKind {
        self.kind
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// A translucent rectangular area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Zone {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: String,
}

impl Zone {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color: color.into(),
        }
    }

    /// Returns the top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

fn default_scale() -> f32 {
    DEFAULT_ITEM_SCALE
}

/// A freely placed icon-library instance.
///
/// `icon` is a key into [`crate::icon::library`]; unknown keys are kept as-is
/// so that scenes authored with newer icon sets survive a round trip.
/// Rotation and scale read from a document are clamped like the setters do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BoardItemRecord")]
pub struct BoardItem {
    id: String,
    #[serde(rename = "type")]
    icon: String,
    x: f32,
    y: f32,
    rotation: f32,
    scale: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

/// Wire form of a [`BoardItem`] before its transform is clamped.
#[derive(Deserialize)]
struct BoardItemRecord {
    id: String,
    #[serde(rename = "type")]
    icon: String,
    x: f32,
    y: f32,
    #[serde(default)]
    rotation: f32,
    #[serde(default = "default_scale")]
    scale: f32,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    label: Option<String>,
}

impl From<BoardItemRecord> for BoardItem {
    fn from(record: BoardItemRecord) -> Self {
        let mut item = Self::new(record.id, record.icon, Point::new(record.x, record.y))
            .with_color(record.color);
        item.label = record.label;
        item.set_rotation(record.rotation);
        item.set_scale(record.scale);
        item
    }
}

impl BoardItem {
    /// Creates an item with no rotation and the default scale.
    pub fn new(id: impl Into<String>, icon: impl Into<String>, position: Point) -> Self {
        Self {
            id: id.into(),
            icon: icon.into(),
            x: position.x(),
            y: position.y(),
            rotation: 0.0,
            scale: DEFAULT_ITEM_SCALE,
            color: None,
            label: None,
        }
    }

    pub fn with_color(mut self, color: Option<String>) -> Self {
        self.color = color;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.set_scale(scale);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Moves the item. Coordinates are stored as given.
    pub fn set_position(&mut self, position: Point) {
        self.x = position.x();
        self.y = position.y();
    }

    /// Sets the rotation clamped to `[0, 360]`. Non-finite input is ignored.
    pub fn set_rotation(&mut self, degrees: f32) {
        if degrees.is_finite() {
            self.rotation = degrees.clamp(0.0, MAX_ROTATION);
        }
    }

    /// Sets the scale clamped to `[0.05, 0.3]`. Non-finite input is ignored.
    pub fn set_scale(&mut self, scale: f32) {
        if scale.is_finite() {
            self.scale = scale.clamp(MIN_ITEM_SCALE, MAX_ITEM_SCALE);
        }
    }

    pub fn set_color(&mut self, color: Option<String>) {
        self.color = color;
    }

    /// Sets the caption; an empty string removes it.
    pub fn set_label(&mut self, label: &str) {
        self.label = (!label.is_empty()).then(|| label.to_string());
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_schema() {
        let schema: TacticalSchema = serde_json::from_str("{}").unwrap();
        assert!(schema.is_empty());
        assert_eq!(schema.element_count(), 0);
        assert_eq!(schema.description(), "");
    }

    #[test]
    fn test_player_defaults() {
        let json = r#"{"id": "p1", "label": "C", "x": 50, "y": 40}"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.role(), Role::Neutral);
        assert_eq!(player.team(), Team::Neutral);
        assert!(!player.has_ball());
        assert_eq!(player.orientation(), 0.0);
    }

    #[test]
    fn test_player_wire_names() {
        let player = Player::new("p2", "DC", 10.0, 90.0)
            .with_role(Role::Defender)
            .with_team(Team::Team2)
            .with_ball(true)
            .with_orientation(90.0);
        let value = serde_json::to_value(&player).unwrap();
        assert_eq!(value["hasBall"], true);
        assert_eq!(value["team"], "team2");
        assert_eq!(value["role"], "defender");
        assert_eq!(value["orientation"], 90.0);
    }

    #[test]
    fn test_arrow_wire_names() {
        let json = r#"{"fromX": 1, "fromY": 2, "toX": 3, "toY": 4, "type": "dribble", "label": "1"}"#;
        let arrow: Arrow = serde_json::from_str(json).unwrap();
        assert_eq!(arrow.kind(), ArrowKind::Dribble);
        assert_eq!(arrow.start(), Point::new(1.0, 2.0));
        assert_eq!(arrow.end(), Point::new(3.0, 4.0));
        assert_eq!(arrow.label(), Some("1"));
        assert_eq!(arrow.color(), None);

        let value = serde_json::to_value(&arrow).unwrap();
        assert_eq!(value["type"], "dribble");
        assert!(value.get("color").is_none());
    }

    #[test]
    fn test_unknown_arrow_kind_rejected() {
        let json = r#"{"fromX": 1, "fromY": 2, "toX": 3, "toY": 4, "type": "lob"}"#;
        assert!(serde_json::from_str::<Arrow>(json).is_err());
    }

    #[test]
    fn test_board_item_defaults() {
        let json = r#"{"id": "i1", "type": "cone", "x": 12.5, "y": 80}"#;
        let item: BoardItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.icon(), "cone");
        assert_eq!(item.rotation(), 0.0);
        assert_approx_eq!(f32, item.scale(), DEFAULT_ITEM_SCALE);
        assert_eq!(item.color(), None);
    }

    #[test]
    fn test_board_item_transform_clamped_on_read() {
        let json = r#"{"id": "i2", "type": "cone", "x": 10, "y": 10, "rotation": -90, "scale": 5}"#;
        let item: BoardItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.rotation(), 0.0);
        assert_approx_eq!(f32, item.scale(), MAX_ITEM_SCALE);

        let json = r#"{"id": "i3", "type": "cone", "x": 10, "y": 10, "rotation": 720, "scale": 0.01, "label": "A"}"#;
        let item: BoardItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.rotation(), MAX_ROTATION);
        assert_approx_eq!(f32, item.scale(), MIN_ITEM_SCALE);
        assert_eq!(item.label(), Some("A"));
    }

    #[test]
    fn test_board_item_setters() {
        let mut item = BoardItem::new("i1", "cone", Point::new(50.0, 50.0));
        item.set_scale(2.0);
        assert_approx_eq!(f32, item.scale(), MAX_ITEM_SCALE);
        item.set_scale(0.0);
        assert_approx_eq!(f32, item.scale(), MIN_ITEM_SCALE);
        item.set_scale(f32::NAN);
        assert_approx_eq!(f32, item.scale(), MIN_ITEM_SCALE);

        item.set_rotation(-45.0);
        assert_eq!(item.rotation(), 0.0);
        item.set_rotation(400.0);
        assert_eq!(item.rotation(), 360.0);

        item.set_label("Plot A");
        assert_eq!(item.label(), Some("Plot A"));
        item.set_label("");
        assert_eq!(item.label(), None);
    }

    #[test]
    fn test_schema_preserves_order() {
        let schema = TacticalSchema::new("ordre")
            .with_player(Player::new("a", "1", 0.0, 0.0))
            .with_player(Player::new("b", "2", 0.0, 0.0))
            .with_zone(Zone::new(0.0, 0.0, 10.0, 10.0, "#ff0000"));
        let text = serde_json::to_string(&schema).unwrap();
        let back: TacticalSchema = serde_json::from_str(&text).unwrap();
        assert_eq!(back, schema);
        let ids: Vec<&str> = back.players().iter().map(Player::id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    proptest! {
        #[test]
        fn prop_item_transform_in_range(scale in -10.0f32..10.0, rotation in -1000.0f32..1000.0) {
            let mut item = BoardItem::new("i", "cone", Point::default());
            item.set_scale(scale);
            item.set_rotation(rotation);
            prop_assert!((MIN_ITEM_SCALE..=MAX_ITEM_SCALE).contains(&item.scale()));
            prop_assert!((0.0..=MAX_ROTATION).contains(&item.rotation()));
        }
    }
}
