// Entity formatters
//
// Three renderings of the same field sets the detail pane shows:
//   - text: one self-describing line per entity
//   - csv:  "Type,Layer,Details" rows, details always quoted
//   - json: pretty-printed array of camelCase objects
//
// All three accept `&[Option<&Entity>]` so callers can pass resolved
// selections directly; `None` entries are skipped.

use serde::Serialize;

use crate::error::{ExplorerError, ExplorerResult};
use crate::model::{Attribute, Entity, Point};

pub const CSV_HEADER: &str = "Type,Layer,Details";

// ============================================================================
// Text
// ============================================================================

/// Single-line description of one entity
pub fn format_entity(entity: &Entity) -> String {
    match entity {
        Entity::Line(e) => format!(
            "Line: ({:.1}, {:.1}) to ({:.1}, {:.1}), Layer: {}, Color: {}",
            e.start.x, e.start.y, e.end.x, e.end.y, e.layer, e.color
        ),
        Entity::Circle(e) => format!(
            "Circle: Center ({:.1}, {:.1}), Radius: {:.1}, Layer: {}, Color: {}",
            e.center.x, e.center.y, e.radius, e.layer, e.color
        ),
        Entity::Text(e) => format!(
            "Text: \"{}\", InsertionPoint: ({:.1}, {:.1}), Height: {:.1}, Layer: {}",
            e.value, e.insertion_point.x, e.insertion_point.y, e.height, e.layer
        ),
        Entity::Block(e) => {
            let mut line = format!(
                "Block: {}, InsertionPoint: ({:.1}, {:.1}), Rotation: {:.1}, Scale: ({:.1}, {:.1}), Layer: {}",
                e.name,
                e.insertion_point.x,
                e.insertion_point.y,
                e.rotation,
                e.scale.x,
                e.scale.y,
                e.layer
            );
            if !e.attributes.is_empty() {
                line.push_str(&format!(", Attributes: [{}]", join_attributes(&e.attributes)));
            }
            line
        }
        Entity::Polyline(e) => format!(
            "Polyline: {} points, Layer: {}, Color: {}, Closed: {}",
            e.points.len(),
            e.layer,
            e.color,
            e.closed
        ),
        Entity::Unknown(e) => format!("Entity: {}, Layer: {}", e.kind, e.layer),
    }
}

/// Lazily formatted lines, one per present entity.
///
/// The iterator borrows `entities`; call again to restart it.
pub fn format_entities<'a>(
    entities: &'a [Option<&'a Entity>],
) -> impl Iterator<Item = String> + 'a {
    entities.iter().flatten().map(|e| format_entity(e))
}

fn join_attributes(attributes: &[Attribute]) -> String {
    attributes
        .iter()
        .map(|a| format!("{}:{}", a.tag, a.value))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// CSV
// ============================================================================

/// Header plus one row per present entity
pub fn format_as_csv(entities: &[Option<&Entity>]) -> Vec<String> {
    let mut rows = Vec::with_capacity(entities.len() + 1);
    rows.push(CSV_HEADER.to_string());

    for entity in entities.iter().flatten() {
        let (kind, details) = csv_fields(entity);
        rows.push(format!(
            "{},{},{}",
            kind,
            csv_cell(entity.layer()),
            quote(&details)
        ));
    }
    rows
}

fn csv_fields(entity: &Entity) -> (&'static str, String) {
    match entity {
        Entity::Line(e) => (
            "Line",
            format!(
                "({:.1},{:.1}) to ({:.1},{:.1}), Color: {}",
                e.start.x, e.start.y, e.end.x, e.end.y, e.color
            ),
        ),
        Entity::Circle(e) => (
            "Circle",
            format!(
                "Center ({:.1},{:.1}), Radius: {:.1}, Color: {}",
                e.center.x, e.center.y, e.radius, e.color
            ),
        ),
        Entity::Text(e) => (
            "Text",
            format!(
                "{} at ({:.1},{:.1}), Height: {:.1}",
                e.value, e.insertion_point.x, e.insertion_point.y, e.height
            ),
        ),
        Entity::Block(e) => {
            let mut details = format!(
                "{} at ({:.1},{:.1}), Rotation: {:.1}",
                e.name, e.insertion_point.x, e.insertion_point.y, e.rotation
            );
            if !e.attributes.is_empty() {
                details.push_str(&format!(", Attributes: {}", join_attributes(&e.attributes)));
            }
            ("Block", details)
        }
        Entity::Polyline(e) => (
            "Polyline",
            format!(
                "{} points, Color: {}, Closed: {}",
                e.points.len(),
                e.color,
                e.closed
            ),
        ),
        Entity::Unknown(e) => ("Unknown", e.kind.clone()),
    }
}

/// Always-quoted field with embedded quotes doubled
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Quote only when the value would otherwise break the row
fn csv_cell(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        quote(field)
    } else {
        field.to_string()
    }
}

// ============================================================================
// JSON
// ============================================================================

#[derive(Serialize)]
struct JsonPoint {
    x: f64,
    y: f64,
}

impl From<&Point> for JsonPoint {
    fn from(p: &Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Serialize)]
struct JsonAttribute<'a> {
    tag: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct JsonEntity<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    layer: &'a str,
    #[serde(flatten)]
    fields: JsonFields<'a>,
}

#[derive(Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
enum JsonFields<'a> {
    Line {
        start_point: JsonPoint,
        end_point: JsonPoint,
        color: i32,
    },
    Circle {
        center: JsonPoint,
        radius: f64,
        color: i32,
    },
    Text {
        value: &'a str,
        insertion_point: JsonPoint,
        height: f64,
    },
    Block {
        name: &'a str,
        insertion_point: JsonPoint,
        rotation: f64,
        scale: JsonPoint,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        attributes: Vec<JsonAttribute<'a>>,
    },
    Polyline {
        point_count: usize,
        color: i32,
        closed: bool,
    },
    Unknown {},
}

impl<'a> From<&'a Entity> for JsonEntity<'a> {
    fn from(entity: &'a Entity) -> Self {
        let fields = match entity {
            Entity::Line(e) => JsonFields::Line {
                start_point: (&e.start).into(),
                end_point: (&e.end).into(),
                color: e.color,
            },
            Entity::Circle(e) => JsonFields::Circle {
                center: (&e.center).into(),
                radius: e.radius,
                color: e.color,
            },
            Entity::Text(e) => JsonFields::Text {
                value: &e.value,
                insertion_point: (&e.insertion_point).into(),
                height: e.height,
            },
            Entity::Block(e) => JsonFields::Block {
                name: &e.name,
                insertion_point: (&e.insertion_point).into(),
                rotation: e.rotation,
                scale: (&e.scale).into(),
                attributes: e
                    .attributes
                    .iter()
                    .map(|a| JsonAttribute {
                        tag: &a.tag,
                        value: &a.value,
                    })
                    .collect(),
            },
            Entity::Polyline(e) => JsonFields::Polyline {
                point_count: e.points.len(),
                color: e.color,
                closed: e.closed,
            },
            Entity::Unknown(_) => JsonFields::Unknown {},
        };

        let kind = match entity {
            Entity::Unknown(_) => "Unknown",
            other => other.type_name(),
        };

        JsonEntity {
            kind,
            layer: entity.layer(),
            fields,
        }
    }
}

/// Pretty-printed JSON array (2-space indent). Empty input yields `[]`.
pub fn format_as_json(entities: &[Option<&Entity>]) -> ExplorerResult<String> {
    let objects: Vec<JsonEntity<'_>> = entities.iter().flatten().map(|e| JsonEntity::from(*e)).collect();

    serde_json::to_string_pretty(&objects).map_err(|source| ExplorerError::Format {
        context: format!("format {} entities as json", objects.len()),
        source,
    })
}
