use std::collections::HashSet;

/// Selected item ids plus the category and view mode they were picked in
#[derive(Debug, Clone)]
pub struct SelectionState {
    selected: HashSet<String>,
    pub category: String,
    pub view_mode: String,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected: HashSet::new(),
            category: String::new(),
            view_mode: "layers".to_string(),
        }
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns true if it is now selected.
    pub fn toggle_selection(&mut self, id: &str) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    pub fn select_all<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected.extend(ids.into_iter().map(Into::into));
    }

    pub fn select_none(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected ids in no particular order
    pub fn selected_item_ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }
}
