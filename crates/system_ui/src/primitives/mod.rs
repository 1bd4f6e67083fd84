//! Pagination, selector, feedback, and overlay primitives.

use leptos::*;

mod feedback;
mod overlays;
mod pagination;
mod selects;

pub use feedback::{Loading, SkeletonText};
pub use overlays::ModalFooter;
pub use pagination::Pagination;
pub use selects::{PageSizesSelect, PagesSelect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Spinner presentation for [`Loading`].
pub enum LoadingType {
    /// Regular inline spinner.
    Regular,
    /// Small spinner with a background track.
    Small,
    /// Spinner covering the whole page.
    Overlay,
}

impl Default for LoadingType {
    fn default() -> Self {
        Self::Regular
    }
}

impl LoadingType {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Small => "small",
            Self::Overlay => "overlay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Placeholder shape for [`SkeletonText`].
pub enum SkeletonTextType {
    /// Paragraph-width placeholder.
    Paragraph,
    /// Single line placeholder.
    Line,
}

impl Default for SkeletonTextType {
    fn default() -> Self {
        Self::Paragraph
    }
}

impl SkeletonTextType {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Line => "line",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Bumps a revision signal; a no-op once the owning scope is disposed.
pub(crate) fn bump_revision(revision: RwSignal<u64>) {
    revision.try_update(|revision| *revision += 1);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-pagination", None), "ui-pagination");
        assert_eq!(merge_layout_class("ui-pagination", Some("")), "ui-pagination");
        assert_eq!(
            merge_layout_class("ui-pagination", Some("table-footer")),
            "ui-pagination table-footer"
        );
    }

    #[test]
    fn variant_tokens_match_attribute_values() {
        assert_eq!(LoadingType::default().token(), "regular");
        assert_eq!(LoadingType::Overlay.token(), "overlay");
        assert_eq!(SkeletonTextType::default().token(), "paragraph");
        assert_eq!(SkeletonTextType::Line.token(), "line");
        assert_eq!(bool_token(true), "true");
    }
}
