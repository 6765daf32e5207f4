//! Explorer core: navigation, filtering, selection and export over one
//! drawing snapshot.
//!
//! [`Explorer`] owns every piece of mutable session state and is driven one
//! action at a time from the event loop. The front end only reads from it.
//!
//! ```text
//!   ExtractedData ──► filter ──► layers list ──activate──► entities list
//!                                    │                          │
//!                                    └──────► detail pane ◄─────┘
//!                                                               │
//!                      selection ──► export formatter ──► clipboard sink
//! ```

pub mod breadcrumb;
pub mod filter;
pub mod help;
pub mod list;
pub mod pane;
pub mod selection;
pub mod selector;

use tracing::{debug, info, warn};

use crate::error::{ExplorerError, ExplorerResult};
use crate::export::{ClipboardSink, ExportFormat};
use crate::model::{Entity, ExtractedData, Layer};

pub use breadcrumb::BreadcrumbTracker;
pub use filter::filter_layers;
pub use list::{ListNavigator, NavKey, DEFAULT_PAGE_SIZE};
pub use pane::{Pane, PaneNavigator};
pub use selection::SelectionState;
pub use selector::{list_label, CategorySelector, DetailLine, DetailPane, EntityHandle};

/// Settings the core needs, passed in rather than read from the environment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerOptions {
    pub page_size: usize,
    pub wrap_navigation: bool,
    pub export_format: ExportFormat,
}

impl Default for ExplorerOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            wrap_navigation: false,
            export_format: ExportFormat::Text,
        }
    }
}

pub struct Explorer {
    data: Option<ExtractedData>,
    query: String,
    /// Indices into `data.layers` that pass the current query
    visible_layers: Vec<usize>,
    panes: PaneNavigator,
    layer_nav: ListNavigator,
    entity_nav: ListNavigator,
    selection: SelectionState,
    breadcrumb: BreadcrumbTracker,
    selector: CategorySelector,
    export_format: ExportFormat,
}

impl Explorer {
    pub fn new(options: ExplorerOptions) -> Self {
        Self {
            data: None,
            query: String::new(),
            visible_layers: Vec::new(),
            panes: PaneNavigator::new(),
            layer_nav: ListNavigator::new(options.page_size, options.wrap_navigation),
            entity_nav: ListNavigator::new(options.page_size, options.wrap_navigation),
            selection: SelectionState::new(),
            breadcrumb: BreadcrumbTracker::new(),
            selector: CategorySelector::new(),
            export_format: options.export_format,
        }
    }

    // ========================================================================
    // Dataset
    // ========================================================================

    /// Swap in a new snapshot and reset all session state against it
    pub fn replace_dataset(&mut self, data: ExtractedData) {
        info!(
            version = %data.version,
            layers = data.layers.len(),
            entities = data.entity_count(),
            "Dataset loaded"
        );

        self.selector.reset(&data);
        self.data = Some(data);
        self.query.clear();
        self.selection = SelectionState::new();
        self.breadcrumb = BreadcrumbTracker::new();
        self.panes = PaneNavigator::new();
        self.entity_nav.set_count(0);
        self.refilter();
        self.layer_nav.set_count(self.visible_layers.len());
        // Fresh snapshot, fresh cursors
        self.layer_nav.reset();
    }

    pub fn data(&self) -> Option<&ExtractedData> {
        self.data.as_ref()
    }

    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    fn require_data(&self) -> ExplorerResult<&ExtractedData> {
        self.data.as_ref().ok_or(ExplorerError::NoDataAvailable)
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_query_char(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    pub fn clear_query(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.refilter();
        }
    }

    fn refilter(&mut self) {
        self.visible_layers = match &self.data {
            Some(data) => filter_layers(&data.layers, &self.query),
            None => Vec::new(),
        };
        self.layer_nav.set_count(self.visible_layers.len());
        debug!(query = %self.query, matches = self.visible_layers.len(), "Layers filtered");
    }

    /// Layers passing the current query, in dataset order
    pub fn visible_layers(&self) -> Vec<&Layer> {
        match &self.data {
            Some(data) => self
                .visible_layers
                .iter()
                .filter_map(|&i| data.layers.get(i))
                .collect(),
            None => Vec::new(),
        }
    }

    /// The layer under the layers cursor
    pub fn current_layer(&self) -> Option<(usize, &Layer)> {
        let data = self.data.as_ref()?;
        let li = *self.visible_layers.get(self.layer_nav.index())?;
        data.layers.get(li).map(|layer| (li, layer))
    }

    // ========================================================================
    // Focus and cursors
    // ========================================================================

    pub fn focus(&self) -> Pane {
        self.panes.focus()
    }

    pub fn focus_next(&mut self) -> Pane {
        self.panes.forward(self.entity_nav.is_empty())
    }

    pub fn focus_prev(&mut self) -> Pane {
        self.panes.backward(self.entity_nav.is_empty())
    }

    pub fn focus_search(&mut self) {
        self.panes.set_focus(Pane::Search);
    }

    pub fn toggle_help(&mut self) {
        self.panes.toggle_help();
    }

    pub fn leave_help(&mut self) {
        self.panes.leave_help();
    }

    pub fn layer_cursor(&self) -> &ListNavigator {
        &self.layer_nav
    }

    pub fn entity_cursor(&self) -> &ListNavigator {
        &self.entity_nav
    }

    /// Route a movement key to the focused list and refresh the detail preview.
    ///
    /// Returns false when the focused pane has no list or the list is empty.
    pub fn navigate(&mut self, key: NavKey) -> bool {
        match self.panes.focus() {
            Pane::Layers => {
                let moved = self.layer_nav.handle_key(key);
                if moved {
                    self.preview_current_layer();
                }
                moved
            }
            Pane::Entities => {
                let moved = self.entity_nav.handle_key(key);
                if moved {
                    self.preview_current_entity();
                }
                moved
            }
            Pane::Search | Pane::Help => false,
        }
    }

    fn preview_current_layer(&mut self) {
        if let Some((_, layer)) = self.current_layer() {
            let detail = DetailPane::layer_summary(layer);
            self.selector.set_detail(detail);
        }
    }

    fn preview_current_entity(&mut self) {
        if let (Some(data), Some(handle)) = (self.data.as_ref(), self.current_entity_handle()) {
            self.selector.show_entity(data, handle);
        }
    }

    // ========================================================================
    // Category / item selection
    // ========================================================================

    /// Project a category into the entities list. See [`CategorySelector::select_category`].
    pub fn select_category(&mut self, category: &str, index: Option<usize>) -> ExplorerResult<()> {
        let result = self.selector.select_category(
            self.data.as_ref(),
            &mut self.selection,
            category,
            index,
        );
        if let Err(err) = &result {
            warn!(category, ?index, error = %err, "Category selection rejected");
            return result;
        }

        self.entity_nav.set_count(self.selector.active_items().len());
        self.entity_nav.reset();
        self.selection.view_mode = "entities".to_string();
        Ok(())
    }

    /// Show one entity of a type in the detail pane. See [`CategorySelector::select_item`].
    pub fn select_item(&mut self, item_type: &str, index: usize) -> ExplorerResult<()> {
        self.selector
            .select_item(self.data.as_ref(), item_type, index)
            .inspect_err(|err| warn!(item_type, index, error = %err, "Item selection rejected"))
    }

    pub fn active_items(&self) -> &[EntityHandle] {
        self.selector.active_items()
    }

    /// Active list rows paired with their entities
    pub fn active_entities(&self) -> Vec<(EntityHandle, &Entity)> {
        match &self.data {
            Some(data) => self
                .selector
                .active_items()
                .iter()
                .filter_map(|h| h.resolve(data).map(|e| (*h, e)))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn current_entity_handle(&self) -> Option<EntityHandle> {
        self.selector
            .active_items()
            .get(self.entity_nav.index())
            .copied()
    }

    pub fn detail(&self) -> &DetailPane {
        self.selector.detail()
    }

    /// List every entity of `category` ("block" or "text") and focus the list
    pub fn show_category(&mut self, category: &str) -> ExplorerResult<()> {
        self.select_category(category, Some(0))?;
        let label = format!("{category}s");
        self.start_trail(&[label.as_str()]);
        if !self.entity_nav.is_empty() {
            self.panes.set_focus(Pane::Entities);
        }
        Ok(())
    }

    // ========================================================================
    // Drill-down
    // ========================================================================

    pub fn breadcrumb(&self) -> &BreadcrumbTracker {
        &self.breadcrumb
    }

    fn start_trail(&mut self, segments: &[&str]) {
        self.breadcrumb = BreadcrumbTracker::new();
        for segment in segments {
            self.breadcrumb.navigate_to(*segment);
        }
    }

    /// Enter / drill down on the focused pane
    pub fn activate(&mut self) -> ExplorerResult<()> {
        match self.panes.focus() {
            Pane::Search => {
                // Enter in search commits the query and moves to the results
                self.require_data()?;
                self.panes.set_focus(Pane::Layers);
                self.preview_current_layer();
                Ok(())
            }
            Pane::Layers => {
                self.require_data()?;
                let (li, name) = {
                    // Loaded, but the query filtered every layer out
                    let (li, layer) = self.current_layer().ok_or(ExplorerError::IndexOutOfRange {
                        index: self.layer_nav.index(),
                        count: self.visible_layers.len(),
                    })?;
                    (li, layer.name.clone())
                };
                self.select_category("layer", Some(li))?;
                self.start_trail(&["layers", name.as_str()]);
                if !self.entity_nav.is_empty() {
                    self.panes.set_focus(Pane::Entities);
                }
                Ok(())
            }
            Pane::Entities => {
                let data = self.require_data()?;
                let handle = self
                    .current_entity_handle()
                    .ok_or(ExplorerError::IndexOutOfRange {
                        index: self.entity_nav.index(),
                        count: self.entity_nav.count(),
                    })?;
                let entity = handle.resolve(data).ok_or(ExplorerError::IndexOutOfRange {
                    index: handle.entity,
                    count: data.layers.get(handle.layer).map_or(0, |l| l.entities.len()),
                })?;
                let detail = DetailPane::entity(entity);
                self.selector.set_detail(detail);
                Ok(())
            }
            Pane::Help => {
                self.panes.leave_help();
                Ok(())
            }
        }
    }

    /// Esc: step back out of the current pane
    pub fn back(&mut self) {
        match self.panes.focus() {
            Pane::Entities => {
                self.panes.set_focus(Pane::Layers);
                self.selection.view_mode = "layers".to_string();
                self.start_trail(&["layers"]);
                self.preview_current_layer();
            }
            Pane::Search => self.clear_query(),
            Pane::Layers => {
                self.panes.set_focus(Pane::Search);
                self.breadcrumb = BreadcrumbTracker::new();
            }
            Pane::Help => self.panes.leave_help(),
        }
    }

    // ========================================================================
    // Layer visibility
    // ========================================================================

    /// Flip visibility of the `visible_index`-th filtered layer.
    ///
    /// Frozen layers are left alone and report `Ok(false)`.
    pub fn toggle_layer_visibility(&mut self, visible_index: usize) -> ExplorerResult<bool> {
        let count = self.visible_layers.len();
        let data = self.data.as_mut().ok_or(ExplorerError::NoDataAvailable)?;
        let li = *self
            .visible_layers
            .get(visible_index)
            .ok_or(ExplorerError::IndexOutOfRange {
                index: visible_index,
                count,
            })?;
        let total = data.layers.len();
        let layer = data
            .layers
            .get_mut(li)
            .ok_or(ExplorerError::LayerIndexOutOfRange { index: li, count: total })?;

        if !layer.toggle_visibility() {
            warn!(layer = %layer.name, "Layer is frozen, visibility unchanged");
            return Ok(false);
        }
        info!(layer = %layer.name, on = layer.is_on, "Layer visibility toggled");
        let detail = DetailPane::layer_summary(layer);

        self.refilter();
        self.selector.set_detail(detail);
        Ok(true)
    }

    pub fn toggle_current_layer(&mut self) -> ExplorerResult<bool> {
        self.toggle_layer_visibility(self.layer_nav.index())
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Toggle the entity under the cursor. Returns true if now selected.
    pub fn toggle_current_selection(&mut self) -> ExplorerResult<bool> {
        self.require_data()?;
        let handle = self
            .current_entity_handle()
            .ok_or(ExplorerError::IndexOutOfRange {
                index: self.entity_nav.index(),
                count: self.entity_nav.count(),
            })?;
        Ok(self.selection.toggle_selection(&handle.id()))
    }

    /// Add every entity in the active list to the selection
    pub fn select_all_items(&mut self) -> ExplorerResult<usize> {
        self.require_data()?;
        let ids: Vec<String> = self.selector.active_items().iter().map(EntityHandle::id).collect();
        self.selection.select_all(ids);
        Ok(self.selection.selected_count())
    }

    pub fn select_none(&mut self) {
        self.selection.select_none();
    }

    // ========================================================================
    // Export
    // ========================================================================

    pub fn export_format(&self) -> ExportFormat {
        self.export_format
    }

    pub fn cycle_export_format(&mut self) -> ExportFormat {
        self.export_format = self.export_format.next();
        debug!(format = %self.export_format, "Export format changed");
        self.export_format
    }

    /// Format the selected entities and write them to `sink`.
    ///
    /// Entities are ordered by layer then position. Ids that no longer
    /// resolve are skipped. With nothing selected the entity under the
    /// entities cursor is copied. Returns the number of entities written.
    pub fn copy_selected_items(&self, sink: &mut dyn ClipboardSink) -> ExplorerResult<usize> {
        let data = self.require_data()?;

        let mut handles: Vec<Option<EntityHandle>> = if self.selection.selected_count() == 0 {
            vec![self.current_entity_handle()]
        } else {
            self.selection
                .selected_item_ids()
                .iter()
                .map(|id| id.parse().ok())
                .collect()
        };
        handles.sort_unstable();

        let entities: Vec<Option<&Entity>> = handles
            .iter()
            .map(|h| h.and_then(|h| h.resolve(data)))
            .collect();
        let count = entities.iter().flatten().count();
        if count == 0 {
            debug!("Nothing to copy");
            return Ok(0);
        }

        let blob = self.export_format.render(&entities)?;
        sink.write_text(&blob).map_err(|err| {
            ExplorerError::clipboard(
                format!(
                    "copy {} {} as {}",
                    count,
                    if count == 1 { "entity" } else { "entities" },
                    self.export_format
                ),
                err,
            )
        })?;

        info!(count, format = %self.export_format, bytes = blob.len(), "Copied to clipboard");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::clipboard::MemoryClipboard;
    use crate::model::{Attribute, Block, Circle, Line, Point};

    fn line(layer: &str, x: f64) -> Entity {
        Entity::Line(Line {
            start: Point::xy(x, 0.0),
            end: Point::xy(x + 10.0, 0.0),
            layer: layer.into(),
            color: 1,
        })
    }

    fn layer(name: &str, frozen: bool, entities: Vec<Entity>) -> Layer {
        let mut l = Layer::new(name);
        l.is_frozen = frozen;
        l.entities = entities;
        l
    }

    fn drawing() -> ExtractedData {
        ExtractedData {
            version: "R2020".into(),
            layers: vec![
                layer("Walls", false, vec![line("Walls", 0.0), line("Walls", 20.0)]),
                layer(
                    "Doors",
                    false,
                    vec![Entity::Block(Block {
                        name: "DOOR".into(),
                        insertion_point: Point::xy(5.0, 0.0),
                        rotation: 0.0,
                        scale: Point::new(1.0, 1.0, 1.0),
                        layer: "Doors".into(),
                        attributes: vec![Attribute::new("WIDTH", "900")],
                    })],
                ),
                layer(
                    "Windows",
                    true,
                    vec![Entity::Circle(Circle {
                        center: Point::xy(1.0, 1.0),
                        radius: 2.0,
                        layer: "Windows".into(),
                        color: 3,
                    })],
                ),
            ],
        }
    }

    fn explorer() -> Explorer {
        let mut explorer = Explorer::new(ExplorerOptions::default());
        explorer.replace_dataset(drawing());
        explorer
    }

    #[test]
    fn operations_before_first_snapshot_fail_fast() {
        let mut explorer = Explorer::new(ExplorerOptions::default());
        let mut sink = MemoryClipboard::new();

        assert!(matches!(
            explorer.select_category("layer", Some(0)),
            Err(ExplorerError::NoDataAvailable)
        ));
        assert!(matches!(
            explorer.toggle_layer_visibility(0),
            Err(ExplorerError::NoDataAvailable)
        ));
        assert!(matches!(
            explorer.copy_selected_items(&mut sink),
            Err(ExplorerError::NoDataAvailable)
        ));
        assert!(explorer.visible_layers().is_empty());
    }

    #[test]
    fn replace_dataset_shows_overview() {
        let explorer = explorer();
        assert_eq!(explorer.visible_layers().len(), 3);
        assert_eq!(explorer.focus(), Pane::Search);
        let text = explorer.detail().to_text();
        assert!(text.contains("Version: R2020"));
        assert!(text.contains("Layers: 3"));
    }

    #[test]
    fn wrapping_layers_cursor() {
        let mut explorer = Explorer::new(ExplorerOptions {
            wrap_navigation: true,
            ..Default::default()
        });
        explorer.replace_dataset(drawing());
        explorer.focus_next();
        explorer.navigate(NavKey::End);
        assert_eq!(explorer.layer_cursor().index(), 2);

        explorer.navigate(NavKey::Down);
        assert_eq!(explorer.layer_cursor().index(), 0);
    }

    #[test]
    fn query_filters_and_clamps_cursor() {
        let mut explorer = explorer();
        explorer.focus_next();
        explorer.navigate(NavKey::End);

        explorer.set_query("frozen:true");
        let names: Vec<&str> = explorer.visible_layers().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Windows"]);
        assert_eq!(explorer.layer_cursor().index(), 0);

        explorer.clear_query();
        assert_eq!(explorer.visible_layers().len(), 3);
    }

    #[test]
    fn activate_layer_drills_into_entities() {
        let mut explorer = explorer();
        explorer.focus_next();
        explorer.activate().unwrap();

        assert_eq!(explorer.focus(), Pane::Entities);
        assert_eq!(explorer.active_items().len(), 2);
        assert_eq!(explorer.breadcrumb().breadcrumb(), "Layers > Walls");
        assert_eq!(explorer.selection().category, "layer");

        explorer.navigate(NavKey::Down);
        explorer.activate().unwrap();
        assert!(explorer.detail().to_text().contains("Start Point: (20.0, 0.0)"));

        explorer.back();
        assert_eq!(explorer.focus(), Pane::Layers);
        assert_eq!(explorer.breadcrumb().breadcrumb(), "Layers");
        assert!(explorer.detail().to_text().starts_with("Layer: Walls"));
    }

    #[test]
    fn activate_with_no_matching_layers_is_out_of_range() {
        let mut explorer = explorer();
        explorer.set_query("zzz-no-match");
        explorer.focus_next();
        assert_eq!(explorer.focus(), Pane::Layers);

        assert!(matches!(
            explorer.activate(),
            Err(ExplorerError::IndexOutOfRange { index: 0, count: 0 })
        ));
        assert_eq!(explorer.focus(), Pane::Layers);
    }

    #[test]
    fn activate_layer_before_snapshot_reports_no_data() {
        let mut explorer = Explorer::new(ExplorerOptions::default());
        explorer.focus_next();
        assert!(matches!(
            explorer.activate(),
            Err(ExplorerError::NoDataAvailable)
        ));
    }

    #[test]
    fn back_from_search_clears_query() {
        let mut explorer = explorer();
        explorer.push_query_char('d');
        explorer.push_query_char('o');
        assert_eq!(explorer.visible_layers().len(), 2);

        explorer.back();
        assert_eq!(explorer.query(), "");
        assert_eq!(explorer.visible_layers().len(), 3);
    }

    #[test]
    fn block_category_lists_every_block() {
        let mut explorer = explorer();
        explorer.select_category("block", Some(0)).unwrap();
        assert_eq!(explorer.entity_cursor().count(), 1);
        assert_eq!(explorer.detail().title.as_deref(), Some("Block Entity"));
    }

    #[test]
    fn frozen_layer_toggle_is_a_no_op() {
        let mut explorer = explorer();
        assert!(!explorer.toggle_layer_visibility(2).unwrap());
        assert!(explorer.data().unwrap().layers[2].is_on);

        assert!(explorer.toggle_layer_visibility(0).unwrap());
        assert!(!explorer.data().unwrap().layers[0].is_on);
    }

    #[test]
    fn toggling_refilters_visibility_query() {
        let mut explorer = explorer();
        explorer.set_query("on:true");
        assert_eq!(explorer.visible_layers().len(), 3);

        explorer.toggle_layer_visibility(1).unwrap();
        let names: Vec<&str> = explorer.visible_layers().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Walls", "Windows"]);
        assert!(matches!(
            explorer.toggle_layer_visibility(5),
            Err(ExplorerError::IndexOutOfRange { index: 5, count: 2 })
        ));
    }

    #[test]
    fn csv_copy_of_one_selected_line() {
        let mut explorer = Explorer::new(ExplorerOptions {
            export_format: ExportFormat::Csv,
            ..Default::default()
        });
        explorer.replace_dataset(drawing());
        explorer.select_category("layer", Some(0)).unwrap();
        explorer.toggle_current_selection().unwrap();

        let mut sink = MemoryClipboard::new();
        assert_eq!(explorer.copy_selected_items(&mut sink).unwrap(), 1);
        let contents = sink.contents.unwrap();
        assert!(contents.starts_with("Type,Layer,Details\nLine,"));
    }

    #[test]
    fn copy_orders_by_layer_and_skips_stale_ids() {
        let mut explorer = explorer();
        explorer.select_category("layer", Some(1)).unwrap();
        explorer.select_all_items().unwrap();
        explorer.select_category("layer", Some(0)).unwrap();
        explorer.select_all_items().unwrap();
        assert_eq!(explorer.selection().selected_count(), 3);

        // Stale handle into a layer that does not exist
        explorer.selection.toggle_selection("9:9");

        let mut sink = MemoryClipboard::new();
        assert_eq!(explorer.copy_selected_items(&mut sink).unwrap(), 3);
        let lines: Vec<String> = sink.contents.unwrap().lines().map(String::from).collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Line: (0.0, 0.0)"));
        assert!(lines[1].starts_with("Line: (20.0, 0.0)"));
        assert!(lines[2].starts_with("Block: DOOR"));
    }

    #[test]
    fn empty_selection_copies_current_entity() {
        let mut explorer = explorer();
        explorer.cycle_export_format();
        explorer.cycle_export_format();
        assert_eq!(explorer.export_format(), ExportFormat::Json);

        explorer.select_category("layer", Some(2)).unwrap();
        let mut sink = MemoryClipboard::new();
        assert_eq!(explorer.copy_selected_items(&mut sink).unwrap(), 1);
        assert!(sink.contents.unwrap().contains("\"type\": \"Circle\""));
    }

    #[test]
    fn clipboard_failure_carries_context() {
        let mut explorer = explorer();
        explorer.select_category("layer", Some(0)).unwrap();
        explorer.select_all_items().unwrap();

        let mut sink = MemoryClipboard::failing("clipboard unavailable");
        let err = explorer.copy_selected_items(&mut sink).unwrap_err();
        assert_eq!(err.to_string(), "failed to copy 2 entities as text");
    }

    #[test]
    fn clipboard_failure_context_uses_singular_for_one_entity() {
        let mut explorer = explorer();
        explorer.select_category("layer", Some(2)).unwrap();

        let mut sink = MemoryClipboard::failing("clipboard unavailable");
        let err = explorer.copy_selected_items(&mut sink).unwrap_err();
        assert_eq!(err.to_string(), "failed to copy 1 entity as text");
    }

    #[test]
    fn select_none_clears_selection() {
        let mut explorer = explorer();
        explorer.select_category("layer", Some(0)).unwrap();
        explorer.select_all_items().unwrap();
        explorer.select_none();
        assert_eq!(explorer.selection().selected_count(), 0);
    }

    #[test]
    fn focus_skips_empty_entities_list() {
        let mut explorer = explorer();
        assert_eq!(explorer.focus_next(), Pane::Layers);
        assert_eq!(explorer.focus_next(), Pane::Search);

        explorer.select_category("layer", Some(0)).unwrap();
        explorer.focus_next();
        assert_eq!(explorer.focus_next(), Pane::Entities);
    }

    #[test]
    fn item_selection_miss_keeps_detail() {
        let mut explorer = explorer();
        let before = explorer.detail().clone();
        assert!(matches!(
            explorer.select_item("text", 0),
            Err(ExplorerError::EntityIndexOutOfRange { count: 0, .. })
        ));
        assert_eq!(explorer.detail(), &before);
    }

    #[test]
    fn text_category_with_no_texts_shows_count() {
        let mut explorer = explorer();
        explorer.show_category("text").unwrap();
        assert_eq!(explorer.detail().to_text(), "Texts Found: 0");
        assert_eq!(explorer.focus(), Pane::Search);
        assert_eq!(explorer.breadcrumb().breadcrumb(), "Texts");
    }
}
