// Layer filter
//
// A query is parsed once into a `LayerFilter` and then applied to the layer
// collection. Exactly one rule is active per query; directives are checked
// before the name match so "on:true" never matches a layer called "on:true".

use crate::model::Layer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerFilter {
    /// Empty query, every layer passes
    All,
    Visible(bool),
    Frozen(bool),
    /// Lowercased substring of the layer name
    Name(String),
}

impl LayerFilter {
    pub fn parse(query: &str) -> Self {
        if query.is_empty() {
            return LayerFilter::All;
        }

        let lowered = query.to_lowercase();
        if lowered.starts_with("on:true") {
            LayerFilter::Visible(true)
        } else if lowered.starts_with("on:false") {
            LayerFilter::Visible(false)
        } else if lowered.starts_with("frozen:true") {
            LayerFilter::Frozen(true)
        } else if lowered.starts_with("frozen:false") {
            LayerFilter::Frozen(false)
        } else {
            LayerFilter::Name(lowered)
        }
    }

    pub fn matches(&self, layer: &Layer) -> bool {
        match self {
            LayerFilter::All => true,
            LayerFilter::Visible(on) => layer.is_on == *on,
            LayerFilter::Frozen(frozen) => layer.is_frozen == *frozen,
            LayerFilter::Name(needle) => layer.name.to_lowercase().contains(needle.as_str()),
        }
    }

    /// Indices into `layers` that pass, in their original order
    pub fn apply(&self, layers: &[Layer]) -> Vec<usize> {
        layers
            .iter()
            .enumerate()
            .filter(|(_, layer)| self.matches(layer))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Filter `layers` by a raw query string, returning matching indices
pub fn filter_layers(layers: &[Layer], query: &str) -> Vec<usize> {
    LayerFilter::parse(query).apply(layers)
}
