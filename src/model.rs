// Drawing data model consumed by the explorer
//
// A snapshot is produced once by an upstream converter/parser and handed to
// the explorer whole. These types carry data only; navigation, filtering and
// formatting live in `explorer` and `export`.
//
// Serde derives let a snapshot be loaded from a JSON file and keep unknown
// fields from breaking older snapshots.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A 2D or 3D point. Drawings with no elevation leave `z` at 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Shorthand for planar points
    pub const fn xy(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// A (tag, value) pair attached to a block instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub tag: String,
    pub value: String,
    #[serde(default)]
    pub position: Point,
}

impl Attribute {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
            position: Point::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub layer: String,
    #[serde(default)]
    pub color: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub layer: String,
    #[serde(default)]
    pub color: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
    pub insertion_point: Point,
    pub height: f64,
    pub layer: String,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub style: String,
}

/// A block instance (INSERT) with its attribute values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub name: String,
    pub insertion_point: Point,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "Block::unit_scale")]
    pub scale: Point,
    pub layer: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Block {
    fn unit_scale() -> Point {
        Point::new(1.0, 1.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub layer: String,
    #[serde(default)]
    pub color: i32,
    #[serde(default)]
    pub closed: bool,
}

/// An entity type the producer emitted but this model does not describe.
///
/// Any snapshot entity whose `type` is not one of the modelled variants lands
/// here with its type name kept in `kind`. The explorer renders these through
/// a single fallback arm instead of guessing at their geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnknownEntity {
    pub kind: String,
    pub layer: String,
}

/// One drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")] // {"type": "Line", ...}
pub enum Entity {
    Line(Line),
    Circle(Circle),
    Text(Text),
    Block(Block),
    Polyline(Polyline),
    Unknown(UnknownEntity),
}

/// Wire shape of the variants `Entity` knows how to read
#[derive(Deserialize)]
#[serde(tag = "type")]
enum TaggedEntity {
    Line(Line),
    Circle(Circle),
    Text(Text),
    Block(Block),
    Polyline(Polyline),
    Unknown(UnknownEntity),
}

impl From<TaggedEntity> for Entity {
    fn from(tagged: TaggedEntity) -> Self {
        match tagged {
            TaggedEntity::Line(e) => Entity::Line(e),
            TaggedEntity::Circle(e) => Entity::Circle(e),
            TaggedEntity::Text(e) => Entity::Text(e),
            TaggedEntity::Block(e) => Entity::Block(e),
            TaggedEntity::Polyline(e) => Entity::Polyline(e),
            TaggedEntity::Unknown(e) => Entity::Unknown(e),
        }
    }
}

// Types newer producers emit ("Arc", "Hatch", ...) become `Entity::Unknown`
// rather than failing the whole snapshot.
impl<'de> Deserialize<'de> for Entity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| D::Error::missing_field("type"))?;

        if kind == "Unknown" || EntityKind::all().iter().any(|k| k.label() == kind) {
            return TaggedEntity::deserialize(value)
                .map(Entity::from)
                .map_err(D::Error::custom);
        }

        Ok(Entity::Unknown(UnknownEntity {
            kind: kind.to_string(),
            layer: value
                .get("layer")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        }))
    }
}

impl Entity {
    /// Name of the layer this entity lives on
    pub fn layer(&self) -> &str {
        match self {
            Entity::Line(e) => &e.layer,
            Entity::Circle(e) => &e.layer,
            Entity::Text(e) => &e.layer,
            Entity::Block(e) => &e.layer,
            Entity::Polyline(e) => &e.layer,
            Entity::Unknown(e) => &e.layer,
        }
    }

    /// The variant discriminant, if this is a modelled type
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            Entity::Line(_) => Some(EntityKind::Line),
            Entity::Circle(_) => Some(EntityKind::Circle),
            Entity::Text(_) => Some(EntityKind::Text),
            Entity::Block(_) => Some(EntityKind::Block),
            Entity::Polyline(_) => Some(EntityKind::Polyline),
            Entity::Unknown(_) => None,
        }
    }

    /// Display name of the entity type ("Line", "Block", ... or the producer's name)
    pub fn type_name(&self) -> &str {
        match self {
            Entity::Unknown(e) => &e.kind,
            other => other.kind().map(EntityKind::label).unwrap_or("Unknown"),
        }
    }
}

/// Discriminant of the modelled entity variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Line,
    Circle,
    Text,
    Block,
    Polyline,
}

impl EntityKind {
    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Line,
            EntityKind::Circle,
            EntityKind::Text,
            EntityKind::Block,
            EntityKind::Polyline,
        ]
    }

    /// Capitalised label used in lists, exports and the detail pane
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Line => "Line",
            EntityKind::Circle => "Circle",
            EntityKind::Text => "Text",
            EntityKind::Block => "Block",
            EntityKind::Polyline => "Polyline",
        }
    }

    /// Parse a lowercase type name as used by item selection ("line", "block", ...)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.label().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named grouping of entities with visibility and lock flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    #[serde(default)]
    pub color: i32,
    #[serde(default = "Layer::default_on")]
    pub is_on: bool,
    #[serde(default)]
    pub is_frozen: bool,
    #[serde(default)]
    pub line_type: String,
    #[serde(default)]
    pub line_weight: f64,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl Layer {
    fn default_on() -> bool {
        true
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: 7,
            is_on: true,
            is_frozen: false,
            line_type: "CONTINUOUS".to_string(),
            line_weight: 0.0,
            entities: Vec::new(),
        }
    }

    /// Flip visibility. Frozen layers are locked and never change.
    ///
    /// Returns true if the flag changed.
    pub fn toggle_visibility(&mut self) -> bool {
        if self.is_frozen {
            return false;
        }
        self.is_on = !self.is_on;
        true
    }

    /// "ON" / "OFF" as shown in lists and the detail pane
    pub fn status_label(&self) -> &'static str {
        if self.is_on {
            "ON"
        } else {
            "OFF"
        }
    }
}

/// Everything the producer extracted from one drawing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtractedData {
    pub version: String,
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl ExtractedData {
    /// Total entity count across all layers
    pub fn entity_count(&self) -> usize {
        self.layers.iter().map(|l| l.entities.len()).sum()
    }

    /// Look up a layer by name
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frozen_layer_ignores_visibility_toggle() {
        let mut layer = Layer::new("Windows");
        layer.is_frozen = true;

        assert!(!layer.toggle_visibility());
        assert!(layer.is_on);
    }

    #[test]
    fn visibility_toggle_flips_unlocked_layer() {
        let mut layer = Layer::new("Walls");
        assert!(layer.toggle_visibility());
        assert!(!layer.is_on);
        assert_eq!(layer.status_label(), "OFF");
    }

    #[test]
    fn every_variant_reports_its_layer() {
        let entities = vec![
            Entity::Line(Line {
                start: Point::xy(0.0, 0.0),
                end: Point::xy(1.0, 1.0),
                layer: "A".into(),
                color: 1,
            }),
            Entity::Unknown(UnknownEntity {
                kind: "HATCH".into(),
                layer: "B".into(),
            }),
        ];

        assert_eq!(entities[0].layer(), "A");
        assert_eq!(entities[1].layer(), "B");
        assert_eq!(entities[1].type_name(), "HATCH");
        assert_eq!(entities[1].kind(), None);
    }

    #[test]
    fn entity_kind_parses_case_insensitively() {
        assert_eq!(EntityKind::from_name("line"), Some(EntityKind::Line));
        assert_eq!(EntityKind::from_name("BLOCK"), Some(EntityKind::Block));
        assert_eq!(EntityKind::from_name("arc"), None);
    }

    #[test]
    fn snapshot_json_uses_type_tag() {
        let json = r#"{
            "version": "R2018",
            "layers": [{
                "name": "0",
                "entities": [
                    {"type": "Circle", "center": {"x": 1.0, "y": 2.0}, "radius": 3.0, "layer": "0"}
                ]
            }]
        }"#;

        let data: ExtractedData = serde_json::from_str(json).unwrap();
        assert_eq!(data.layers[0].entities.len(), 1);
        assert!(data.layers[0].is_on);
        assert!(matches!(data.layers[0].entities[0], Entity::Circle(ref c) if c.radius == 3.0));
    }

    #[test]
    fn unrecognised_entity_type_falls_back_to_unknown() {
        let json = r#"{
            "version": "R2024",
            "layers": [{
                "name": "Walls",
                "entities": [
                    {"type": "Line", "start": {"x": 0.0, "y": 0.0}, "end": {"x": 1.0, "y": 0.0}, "layer": "Walls"},
                    {"type": "Arc", "center": {"x": 0.0, "y": 0.0}, "radius": 2.0, "layer": "Walls"}
                ]
            }]
        }"#;

        let data: ExtractedData = serde_json::from_str(json).unwrap();
        let entities = &data.layers[0].entities;
        assert_eq!(entities.len(), 2);
        assert!(matches!(entities[0], Entity::Line(_)));
        assert_eq!(
            entities[1],
            Entity::Unknown(UnknownEntity {
                kind: "Arc".into(),
                layer: "Walls".into(),
            })
        );
        assert_eq!(entities[1].type_name(), "Arc");
    }

    #[test]
    fn known_type_with_bad_fields_is_still_an_error() {
        let json = r#"{"type": "Circle", "layer": "0"}"#;
        assert!(serde_json::from_str::<Entity>(json).is_err());
    }

    #[test]
    fn entity_without_type_is_rejected() {
        let json = r#"{"layer": "0"}"#;
        assert!(serde_json::from_str::<Entity>(json).is_err());
    }
}
