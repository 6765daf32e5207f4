// Breadcrumb trail for the current drill-down.
//
// Segments are only ever appended. Going back starts a new trail instead of
// popping; see `Explorer::back`.

#[derive(Debug, Clone, Default)]
pub struct BreadcrumbTracker {
    path: Vec<String>,
}

impl BreadcrumbTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate_to(&mut self, segment: impl Into<String>) {
        self.path.push(segment.into());
    }

    /// "Seg1 > Seg2 > ..." with each segment's first character uppercased
    pub fn breadcrumb(&self) -> String {
        self.path
            .iter()
            .map(|s| capitalize(s))
            .collect::<Vec<_>>()
            .join(" > ")
    }

    pub fn can_go_back(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.path
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_capitalized_trail() {
        let mut crumbs = BreadcrumbTracker::new();
        assert!(!crumbs.can_go_back());
        assert_eq!(crumbs.breadcrumb(), "");

        crumbs.navigate_to("layers");
        crumbs.navigate_to("walls");
        crumbs.navigate_to("eXTRA");
        assert!(crumbs.can_go_back());
        assert_eq!(crumbs.breadcrumb(), "Layers > Walls > EXTRA");
    }

    #[test]
    fn empty_segment_stays_empty() {
        let mut crumbs = BreadcrumbTracker::new();
        crumbs.navigate_to("");
        crumbs.navigate_to("0");
        assert_eq!(crumbs.breadcrumb(), " > 0");
    }
}
