// Pane focus state machine
//
// Four focusable regions. Forward and backward cycling skip the entities
// pane while it has nothing to show. Leaving help always lands on search.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Search,
    Layers,
    Entities,
    Help,
}

impl Pane {
    pub fn name(self) -> &'static str {
        match self {
            Pane::Search => "search",
            Pane::Layers => "layers",
            Pane::Entities => "entities",
            Pane::Help => "help",
        }
    }
}

impl fmt::Display for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaneNavigator {
    focus: Pane,
}

impl PaneNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Pane {
        self.focus
    }

    pub fn set_focus(&mut self, pane: Pane) {
        self.focus = pane;
    }

    /// Primary cycle key
    pub fn forward(&mut self, entities_empty: bool) -> Pane {
        self.focus = match self.focus {
            Pane::Search => Pane::Layers,
            Pane::Layers if entities_empty => Pane::Search,
            Pane::Layers => Pane::Entities,
            Pane::Entities => Pane::Search,
            Pane::Help => Pane::Search,
        };
        self.focus
    }

    /// Reverse cycle key, the exact inverse of `forward`
    pub fn backward(&mut self, entities_empty: bool) -> Pane {
        self.focus = match self.focus {
            Pane::Search if entities_empty => Pane::Layers,
            Pane::Search => Pane::Entities,
            Pane::Layers => Pane::Search,
            Pane::Entities => Pane::Layers,
            Pane::Help => Pane::Search,
        };
        self.focus
    }

    pub fn show_help(&mut self) {
        self.focus = Pane::Help;
    }

    /// Leave help. Returns to search whatever pane help was opened from.
    pub fn leave_help(&mut self) {
        if self.focus == Pane::Help {
            self.focus = Pane::Search;
        }
    }

    pub fn toggle_help(&mut self) {
        if self.focus == Pane::Help {
            self.leave_help();
        } else {
            self.show_help();
        }
    }
}
