// Category and item selection
//
// Projects the loaded drawing into the two derived views the UI shows: the
// active entity list and the detail pane. Both are rebuilt from scratch on
// every selection; nothing here holds on to entity references across a
// dataset swap, only (layer, entity) positions.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{ExplorerError, ExplorerResult};
use crate::explorer::selection::SelectionState;
use crate::model::{Entity, EntityKind, ExtractedData, Layer, Point};

/// Position of an entity inside a snapshot.
///
/// Its `Display` form ("layer:entity") doubles as the opaque selection id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityHandle {
    pub layer: usize,
    pub entity: usize,
}

impl EntityHandle {
    pub fn new(layer: usize, entity: usize) -> Self {
        Self { layer, entity }
    }

    pub fn id(&self) -> String {
        self.to_string()
    }

    /// Look the handle up in `data`. Stale handles resolve to `None`.
    pub fn resolve<'a>(&self, data: &'a ExtractedData) -> Option<&'a Entity> {
        data.layers.get(self.layer)?.entities.get(self.entity)
    }
}

impl fmt::Display for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.layer, self.entity)
    }
}

impl FromStr for EntityHandle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (layer, entity) = s.split_once(':').ok_or(())?;
        Ok(Self {
            layer: layer.parse().map_err(|_| ())?,
            entity: entity.parse().map_err(|_| ())?,
        })
    }
}

/// Category dimensions accepted by `select_category`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Layer,
    Block,
    Text,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Layer => "layer",
            Category::Block => "block",
            Category::Text => "text",
        }
    }
}

impl FromStr for Category {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "layer" => Ok(Category::Layer),
            "block" => Ok(Category::Block),
            "text" => Ok(Category::Text),
            other => Err(ExplorerError::UnknownCategory(other.to_string())),
        }
    }
}

// ============================================================================
// Detail pane
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum DetailLine {
    /// "Label: value"
    Field(&'static str, String),
    /// A label introducing indented entries
    Section(&'static str),
    /// "  Tag: Value" under a section
    Entry(String, String),
}

impl fmt::Display for DetailLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailLine::Field(label, value) => write!(f, "{label}: {value}"),
            DetailLine::Section(label) => write!(f, "{label}:"),
            DetailLine::Entry(tag, value) => write!(f, "  {tag}: {value}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailPane {
    pub title: Option<String>,
    pub lines: Vec<DetailLine>,
}

impl DetailPane {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.lines.is_empty()
    }

    /// Plain text rendering, one line per field
    pub fn to_text(&self) -> String {
        let mut out = Vec::with_capacity(self.lines.len() + 2);
        if let Some(title) = &self.title {
            out.push(title.clone());
            out.push(String::new());
        }
        out.extend(self.lines.iter().map(ToString::to_string));
        out.join("\n")
    }

    pub fn overview(data: &ExtractedData) -> Self {
        Self {
            title: Some("Drawing".to_string()),
            lines: vec![
                DetailLine::Field("Version", data.version.clone()),
                DetailLine::Field("Layers", data.layers.len().to_string()),
                DetailLine::Field("Entities", data.entity_count().to_string()),
            ],
        }
    }

    pub fn layer_summary(layer: &Layer) -> Self {
        Self {
            title: None,
            lines: vec![
                DetailLine::Field("Layer", layer.name.clone()),
                DetailLine::Field("Color", layer.color.to_string()),
                DetailLine::Field("Status", layer.status_label().to_string()),
                DetailLine::Field("Frozen", layer.is_frozen.to_string()),
                DetailLine::Field("Line Type", layer.line_type.clone()),
                DetailLine::Field("Entities", layer.entities.len().to_string()),
            ],
        }
    }

    fn count_summary(category: Category, count: usize) -> Self {
        let label = match category {
            Category::Block => "Blocks Found",
            _ => "Texts Found",
        };
        Self {
            title: None,
            lines: vec![DetailLine::Field(label, count.to_string())],
        }
    }

    /// Type-specific field listing for one entity
    pub fn entity(entity: &Entity) -> Self {
        use DetailLine::Field;

        let title = format!("{} Entity", entity.type_name());
        let lines = match entity {
            Entity::Line(e) => vec![
                Field("Start Point", xy(&e.start)),
                Field("End Point", xy(&e.end)),
                Field("Layer", e.layer.clone()),
                Field("Color", e.color.to_string()),
            ],
            Entity::Circle(e) => vec![
                Field("Center", xy(&e.center)),
                Field("Radius", format!("{:.1}", e.radius)),
                Field("Layer", e.layer.clone()),
                Field("Color", e.color.to_string()),
            ],
            Entity::Text(e) => vec![
                Field("Value", e.value.clone()),
                Field("Insertion Point", xy(&e.insertion_point)),
                Field("Height", format!("{:.1}", e.height)),
                Field("Layer", e.layer.clone()),
            ],
            Entity::Block(e) => {
                let mut lines = vec![
                    Field("Name", e.name.clone()),
                    Field("Insertion Point", xy(&e.insertion_point)),
                    Field("Rotation", format!("{:.1}", e.rotation)),
                    Field("Scale", xy(&e.scale)),
                    Field("Layer", e.layer.clone()),
                ];
                if !e.attributes.is_empty() {
                    lines.push(DetailLine::Section("Attributes"));
                    lines.extend(
                        e.attributes
                            .iter()
                            .map(|a| DetailLine::Entry(a.tag.clone(), a.value.clone())),
                    );
                }
                lines
            }
            Entity::Polyline(e) => vec![
                Field("Points", e.points.len().to_string()),
                Field("Layer", e.layer.clone()),
                Field("Color", e.color.to_string()),
                Field("Closed", e.closed.to_string()),
            ],
            Entity::Unknown(e) => vec![Field("Entity", e.kind.clone()), Field("Layer", e.layer.clone())],
        };

        Self {
            title: Some(title),
            lines,
        }
    }
}

fn xy(p: &Point) -> String {
    format!("({:.1}, {:.1})", p.x, p.y)
}

/// One-line label for an entity in the active list
pub fn list_label(entity: &Entity) -> String {
    match entity {
        Entity::Line(e) => format!(
            "Line ({:.1},{:.1}) to ({:.1},{:.1})",
            e.start.x, e.start.y, e.end.x, e.end.y
        ),
        Entity::Circle(e) => format!(
            "Circle center:({:.1},{:.1}) radius:{:.1}",
            e.center.x, e.center.y, e.radius
        ),
        Entity::Text(e) => format!(
            "Text: {} at ({:.1},{:.1})",
            e.value, e.insertion_point.x, e.insertion_point.y
        ),
        Entity::Block(e) => format!(
            "Block: {} at ({:.1},{:.1})",
            e.name, e.insertion_point.x, e.insertion_point.y
        ),
        Entity::Polyline(e) => format!("Polyline with {} points", e.points.len()),
        Entity::Unknown(e) => format!("Entity: {}", e.kind),
    }
}

/// Every entity of `kind` across all layers, layer order then entity order
pub fn flatten_by_kind(data: &ExtractedData, kind: EntityKind) -> Vec<EntityHandle> {
    data.layers
        .iter()
        .enumerate()
        .flat_map(|(li, layer)| {
            layer
                .entities
                .iter()
                .enumerate()
                .filter(move |(_, e)| e.kind() == Some(kind))
                .map(move |(ei, _)| EntityHandle::new(li, ei))
        })
        .collect()
}

// ============================================================================
// Selector
// ============================================================================

/// Owns the active list and the detail pane
#[derive(Debug, Clone, Default)]
pub struct CategorySelector {
    active: Vec<EntityHandle>,
    detail: DetailPane,
}

impl CategorySelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_items(&self) -> &[EntityHandle] {
        &self.active
    }

    pub fn detail(&self) -> &DetailPane {
        &self.detail
    }

    pub fn set_detail(&mut self, detail: DetailPane) {
        self.detail = detail;
    }

    /// Drop both projections and show the dataset overview
    pub fn reset(&mut self, data: &ExtractedData) {
        self.active.clear();
        self.detail = DetailPane::overview(data);
    }

    /// Project a category into the active list.
    ///
    /// `layer` needs an index and fails when it is missing or out of range.
    /// `block` and `text` accept any index: a valid one shows that entity,
    /// anything else shows a count summary.
    pub fn select_category(
        &mut self,
        data: Option<&ExtractedData>,
        selection: &mut SelectionState,
        category: &str,
        index: Option<usize>,
    ) -> ExplorerResult<()> {
        let data = data.ok_or(ExplorerError::NoDataAvailable)?;
        let category: Category = category.parse()?;

        match category {
            Category::Layer => {
                let count = data.layers.len();
                let li = index
                    .filter(|&i| i < count)
                    .ok_or(ExplorerError::LayerIndexOutOfRange {
                        index: index.unwrap_or(count),
                        count,
                    })?;
                let layer = &data.layers[li];

                self.active = (0..layer.entities.len())
                    .map(|ei| EntityHandle::new(li, ei))
                    .collect();
                self.detail = DetailPane::layer_summary(layer);
            }
            Category::Block | Category::Text => {
                let kind = match category {
                    Category::Block => EntityKind::Block,
                    _ => EntityKind::Text,
                };
                self.active = flatten_by_kind(data, kind);
                self.detail = match index
                    .and_then(|i| self.active.get(i))
                    .and_then(|h| h.resolve(data))
                {
                    Some(entity) => DetailPane::entity(entity),
                    None => DetailPane::count_summary(category, self.active.len()),
                };
            }
        }

        selection.category = category.name().to_string();
        debug!(
            category = category.name(),
            ?index,
            items = self.active.len(),
            "Category selected"
        );
        Ok(())
    }

    /// Show the `index`-th entity of `item_type` in the detail pane.
    ///
    /// The active list and category are left alone. On error the detail
    /// pane is unchanged.
    pub fn select_item(
        &mut self,
        data: Option<&ExtractedData>,
        item_type: &str,
        index: usize,
    ) -> ExplorerResult<()> {
        let data = data.ok_or(ExplorerError::NoDataAvailable)?;
        let kind = EntityKind::from_name(item_type)
            .ok_or_else(|| ExplorerError::UnknownCategory(item_type.to_string()))?;

        let items = flatten_by_kind(data, kind);
        let entity = items
            .get(index)
            .and_then(|h| h.resolve(data))
            .ok_or(ExplorerError::EntityIndexOutOfRange {
                index,
                kind,
                count: items.len(),
            })?;

        self.detail = DetailPane::entity(entity);
        Ok(())
    }

    /// Render the entity at `handle`, if it still exists
    pub fn show_entity(&mut self, data: &ExtractedData, handle: EntityHandle) -> bool {
        match handle.resolve(data) {
            Some(entity) => {
                self.detail = DetailPane::entity(entity);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Attribute, Block, Line, Text};

    fn line(layer: &str) -> Entity {
        Entity::Line(Line {
            start: Point::xy(0.0, 0.0),
            end: Point::xy(10.0, 5.5),
            layer: layer.into(),
            color: 1,
        })
    }

    fn block(name: &str, layer: &str) -> Entity {
        Entity::Block(Block {
            name: name.into(),
            insertion_point: Point::xy(1.0, 2.0),
            rotation: 90.0,
            scale: Point::new(1.0, 1.0, 1.0),
            layer: layer.into(),
            attributes: vec![Attribute::new("WIDTH", "900")],
        })
    }

    fn text(value: &str, layer: &str) -> Entity {
        Entity::Text(Text {
            value: value.into(),
            insertion_point: Point::xy(3.0, 4.0),
            height: 2.5,
            layer: layer.into(),
            rotation: 0.0,
            style: String::new(),
        })
    }

    fn data() -> ExtractedData {
        let mut walls = Layer::new("Walls");
        walls.entities = vec![line("Walls"), block("DOOR", "Walls")];
        let mut doors = Layer::new("Doors");
        doors.entities = vec![text("Entry", "Doors"), block("WINDOW", "Doors")];
        ExtractedData {
            version: "R2020".into(),
            layers: vec![walls, doors],
        }
    }

    #[test]
    fn handle_id_round_trips() {
        let handle = EntityHandle::new(3, 17);
        assert_eq!(handle.id(), "3:17");
        assert_eq!("3:17".parse::<EntityHandle>(), Ok(handle));
        assert!("3-17".parse::<EntityHandle>().is_err());
    }

    #[test]
    fn block_category_flattens_all_layers() {
        let data = data();
        let mut selector = CategorySelector::new();
        let mut selection = SelectionState::new();

        selector
            .select_category(Some(&data), &mut selection, "block", Some(0))
            .unwrap();

        assert_eq!(selector.active_items().len(), 2);
        assert_eq!(
            selector.active_items(),
            &[EntityHandle::new(0, 1), EntityHandle::new(1, 1)]
        );
        assert_eq!(selector.detail().title.as_deref(), Some("Block Entity"));
        assert_eq!(selection.category, "block");
    }

    #[test]
    fn category_without_index_shows_count() {
        let data = data();
        let mut selector = CategorySelector::new();
        let mut selection = SelectionState::new();

        selector
            .select_category(Some(&data), &mut selection, "text", None)
            .unwrap();
        assert_eq!(selector.detail().to_text(), "Texts Found: 1");

        selector
            .select_category(Some(&data), &mut selection, "block", Some(99))
            .unwrap();
        assert_eq!(selector.detail().to_text(), "Blocks Found: 2");
    }

    #[test]
    fn layer_category_lists_owned_entities() {
        let data = data();
        let mut selector = CategorySelector::new();
        let mut selection = SelectionState::new();

        selector
            .select_category(Some(&data), &mut selection, "layer", Some(1))
            .unwrap();

        assert_eq!(selector.active_items().len(), 2);
        let text = selector.detail().to_text();
        assert!(text.starts_with("Layer: Doors\nColor: 7\nStatus: ON\nFrozen: false"));
        assert!(text.ends_with("Line Type: CONTINUOUS\nEntities: 2"));
    }

    #[test]
    fn layer_category_rejects_bad_index() {
        let data = data();
        let mut selector = CategorySelector::new();
        let mut selection = SelectionState::new();

        let err = selector
            .select_category(Some(&data), &mut selection, "layer", Some(2))
            .unwrap_err();
        assert!(matches!(
            err,
            ExplorerError::LayerIndexOutOfRange { index: 2, count: 2 }
        ));
        assert!(selector
            .select_category(Some(&data), &mut selection, "layer", None)
            .is_err());
    }

    #[test]
    fn unknown_category_and_missing_data() {
        let data = data();
        let mut selector = CategorySelector::new();
        let mut selection = SelectionState::new();

        assert!(matches!(
            selector.select_category(Some(&data), &mut selection, "hatch", None),
            Err(ExplorerError::UnknownCategory(ref c)) if c == "hatch"
        ));
        assert!(matches!(
            selector.select_category(None, &mut selection, "layer", Some(0)),
            Err(ExplorerError::NoDataAvailable)
        ));
        assert!(matches!(
            selector.select_item(None, "line", 0),
            Err(ExplorerError::NoDataAvailable)
        ));
    }

    #[test]
    fn out_of_range_item_leaves_detail_untouched() {
        let data = data();
        let mut selector = CategorySelector::new();
        selector.reset(&data);
        let before = selector.detail().clone();

        let err = selector.select_item(Some(&data), "line", 999).unwrap_err();
        assert!(matches!(
            err,
            ExplorerError::EntityIndexOutOfRange {
                index: 999,
                kind: EntityKind::Line,
                count: 1
            }
        ));
        assert_eq!(selector.detail(), &before);
    }

    #[test]
    fn select_item_renders_fields_in_order() {
        let data = data();
        let mut selector = CategorySelector::new();

        selector.select_item(Some(&data), "line", 0).unwrap();
        assert_eq!(
            selector.detail().to_text(),
            "Line Entity\n\nStart Point: (0.0, 0.0)\nEnd Point: (10.0, 5.5)\nLayer: Walls\nColor: 1"
        );
        assert!(selector.active_items().is_empty());

        selector.select_item(Some(&data), "block", 1).unwrap();
        let text = selector.detail().to_text();
        assert!(text.contains("Name: WINDOW"));
        assert!(text.ends_with("Layer: Doors\nAttributes:\n  WIDTH: 900"));
    }

    #[test]
    fn list_labels_are_compact() {
        assert_eq!(list_label(&line("0")), "Line (0.0,0.0) to (10.0,5.5)");
        assert_eq!(list_label(&text("Hi", "0")), "Text: Hi at (3.0,4.0)");
    }
}
