//! Light-DOM descendants and the post-update push of derived values into them.

use std::{cell::RefCell, rc::Rc};

use crate::model::{DirtyFields, PaginationConfig, PaginationField, PaginationState};

/// Contract of a descendant that selects the page size.
pub trait PageSizesSelectControl {
    /// Pushes the element's rows per page.
    fn set_value(&self, page_size: u64);
}

/// Contract of a descendant that selects the current page.
pub trait PagesSelectControl {
    /// Pushes the element's zero-based current page.
    fn set_value(&self, page: u64);

    /// `None` means the page count is indeterminate, not zero.
    fn set_total_pages(&self, total_pages: Option<u64>);
}

#[derive(Clone)]
enum Descendant {
    PageSizesSelect {
        tag: String,
        control: Rc<dyn PageSizesSelectControl>,
    },
    PagesSelect {
        tag: String,
        control: Rc<dyn PagesSelectControl>,
    },
    Other {
        tag: String,
    },
}

impl Descendant {
    fn tag(&self) -> &str {
        match self {
            Self::PageSizesSelect { tag, .. } | Self::PagesSelect { tag, .. } | Self::Other { tag } => {
                tag
            }
        }
    }

    fn control_ptr(&self) -> Option<*const ()> {
        match self {
            Self::PageSizesSelect { control, .. } => Some(Rc::as_ptr(control).cast::<()>()),
            Self::PagesSelect { control, .. } => Some(Rc::as_ptr(control).cast::<()>()),
            Self::Other { .. } => None,
        }
    }
}

/// Ordered light-DOM children of one pagination element.
#[derive(Default)]
pub struct LightDom {
    children: RefCell<Vec<Descendant>>,
}

impl LightDom {
    /// Creates an empty child list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a page-size selector under `tag`.
    pub fn append_page_sizes_select(
        &self,
        tag: impl Into<String>,
        control: Rc<dyn PageSizesSelectControl>,
    ) {
        self.children.borrow_mut().push(Descendant::PageSizesSelect {
            tag: tag.into(),
            control,
        });
    }

    /// Appends a page selector under `tag`.
    pub fn append_pages_select(&self, tag: impl Into<String>, control: Rc<dyn PagesSelectControl>) {
        self.children.borrow_mut().push(Descendant::PagesSelect {
            tag: tag.into(),
            control,
        });
    }

    /// Appends a child that matches no pagination contract.
    pub fn append_other(&self, tag: impl Into<String>) {
        self.children
            .borrow_mut()
            .push(Descendant::Other { tag: tag.into() });
    }

    /// Removes every child with `tag`, returning how many were removed.
    pub fn remove_tag(&self, tag: &str) -> usize {
        let mut children = self.children.borrow_mut();
        let before = children.len();
        children.retain(|child| child.tag() != tag);
        before - children.len()
    }

    /// Removes the child backed by `child`, leaving other children with the same tag.
    ///
    /// Returns whether a child was removed.
    pub fn remove_child<T: ?Sized>(&self, child: &Rc<T>) -> bool {
        let target = Rc::as_ptr(child).cast::<()>();
        let mut children = self.children.borrow_mut();
        match children
            .iter()
            .position(|descendant| descendant.control_ptr() == Some(target))
        {
            Some(index) => {
                children.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.borrow().len()
    }

    /// Whether there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.borrow().is_empty()
    }

    /// Page-size selectors whose tag matches `selector`, in document order.
    pub fn page_sizes_selects(&self, selector: &str) -> Vec<Rc<dyn PageSizesSelectControl>> {
        self.children
            .borrow()
            .iter()
            .filter_map(|child| match child {
                Descendant::PageSizesSelect { tag, control } if tag == selector => {
                    Some(Rc::clone(control))
                }
                _ => None,
            })
            .collect()
    }

    /// Page selectors whose tag matches `selector`, in document order.
    pub fn pages_selects(&self, selector: &str) -> Vec<Rc<dyn PagesSelectControl>> {
        self.children
            .borrow()
            .iter()
            .filter_map(|child| match child {
                Descendant::PagesSelect { tag, control } if tag == selector => {
                    Some(Rc::clone(control))
                }
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Number of property writes one sync pass made.
pub struct SyncReport {
    /// Page-size values pushed.
    pub page_size_writes: usize,
    /// Current-page values pushed.
    pub page_writes: usize,
    /// Page counts pushed.
    pub total_pages_writes: usize,
}

impl SyncReport {
    /// Sum of all writes.
    pub fn total_writes(&self) -> usize {
        self.page_size_writes + self.page_writes + self.total_pages_writes
    }
}

/// Pushes derived values into matching descendants for the fields in `changed`.
///
/// Matching children are queried after the borrow on the child list is released, so a
/// control reacting to a write may safely touch the light DOM.
pub fn sync_children(
    light_dom: &LightDom,
    config: &PaginationConfig,
    state: &PaginationState,
    changed: DirtyFields,
) -> SyncReport {
    let mut report = SyncReport::default();
    let page_size_changed = changed.contains(PaginationField::PageSize);

    if page_size_changed {
        for select in light_dom.page_sizes_selects(&config.selector_page_sizes_select) {
            select.set_value(state.page_size);
            report.page_size_writes += 1;
        }
    }

    let page_changed = changed.contains_any(&[PaginationField::PageSize, PaginationField::Start]);
    let total_changed = changed.contains_any(&[PaginationField::PageSize, PaginationField::Total]);
    if !page_changed && !total_changed {
        return report;
    }

    let current_page = state.current_page();
    let total_pages = state.total_pages();
    for select in light_dom.pages_selects(&config.selector_pages_select) {
        if page_changed {
            select.set_value(current_page);
            report.page_writes += 1;
        }
        if total_changed {
            select.set_total_pages(total_pages);
            report.total_pages_writes += 1;
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct RecordingSelect {
        writes: RefCell<Vec<String>>,
    }

    impl PageSizesSelectControl for RecordingSelect {
        fn set_value(&self, page_size: u64) {
            self.writes.borrow_mut().push(format!("size={page_size}"));
        }
    }

    impl PagesSelectControl for RecordingSelect {
        fn set_value(&self, page: u64) {
            self.writes.borrow_mut().push(format!("page={page}"));
        }

        fn set_total_pages(&self, total_pages: Option<u64>) {
            self.writes
                .borrow_mut()
                .push(format!("total={total_pages:?}"));
        }
    }

    fn changed(fields: &[PaginationField]) -> DirtyFields {
        fields
            .iter()
            .fold(DirtyFields::default(), |dirty, field| dirty.with(*field))
    }

    #[test]
    fn start_change_updates_only_page_value() {
        let config = PaginationConfig::default();
        let light_dom = LightDom::new();
        let pages = Rc::new(RecordingSelect::default());
        let sizes = Rc::new(RecordingSelect::default());
        light_dom.append_pages_select("bx-pages-select", pages.clone());
        light_dom.append_page_sizes_select("bx-page-sizes-select", sizes.clone());
        let state = PaginationState {
            start: 25,
            total: Some(100),
            ..PaginationState::default()
        };

        let report = sync_children(&light_dom, &config, &state, changed(&[PaginationField::Start]));

        assert_eq!(*pages.writes.borrow(), vec!["page=2"]);
        assert!(sizes.writes.borrow().is_empty());
        assert_eq!(report.total_writes(), 1);
    }

    #[test]
    fn page_size_change_cascades_to_every_derived_value() {
        let config = PaginationConfig::default();
        let light_dom = LightDom::new();
        let pages = Rc::new(RecordingSelect::default());
        let sizes = Rc::new(RecordingSelect::default());
        light_dom.append_page_sizes_select("bx-page-sizes-select", sizes.clone());
        light_dom.append_pages_select("bx-pages-select", pages.clone());
        let state = PaginationState {
            start: 40,
            page_size: 20,
            total: Some(95),
            ..PaginationState::default()
        };

        let report = sync_children(
            &light_dom,
            &config,
            &state,
            changed(&[PaginationField::PageSize]),
        );

        assert_eq!(*sizes.writes.borrow(), vec!["size=20"]);
        assert_eq!(*pages.writes.borrow(), vec!["page=2", "total=Some(5)"]);
        assert_eq!(
            report,
            SyncReport {
                page_size_writes: 1,
                page_writes: 1,
                total_pages_writes: 1,
            }
        );
    }

    #[test]
    fn unknown_total_is_pushed_as_indeterminate() {
        let config = PaginationConfig::default();
        let light_dom = LightDom::new();
        let pages = Rc::new(RecordingSelect::default());
        light_dom.append_pages_select("bx-pages-select", pages.clone());

        sync_children(
            &light_dom,
            &config,
            &PaginationState::default(),
            changed(&[PaginationField::Total]),
        );

        assert_eq!(*pages.writes.borrow(), vec!["total=None"]);
    }

    #[test]
    fn every_matching_child_is_written_and_others_are_skipped() {
        let config = PaginationConfig::default();
        let light_dom = LightDom::new();
        let first = Rc::new(RecordingSelect::default());
        let second = Rc::new(RecordingSelect::default());
        let foreign = Rc::new(RecordingSelect::default());
        light_dom.append_pages_select("bx-pages-select", first.clone());
        light_dom.append_other("bx-loading");
        light_dom.append_pages_select("bx-pages-select", second.clone());
        light_dom.append_pages_select("cds-pages-select", foreign.clone());

        let report = sync_children(
            &light_dom,
            &config,
            &PaginationState::default(),
            changed(&[PaginationField::Start]),
        );

        assert_eq!(report.page_writes, 2);
        assert_eq!(*first.writes.borrow(), vec!["page=0"]);
        assert_eq!(*second.writes.borrow(), vec!["page=0"]);
        assert!(foreign.writes.borrow().is_empty());
    }

    #[test]
    fn empty_light_dom_and_unrelated_changes_are_noops() {
        let config = PaginationConfig::default();
        let report = sync_children(
            &LightDom::new(),
            &config,
            &PaginationState::default(),
            DirtyFields::all(),
        );
        assert_eq!(report, SyncReport::default());

        let light_dom = LightDom::new();
        let pages = Rc::new(RecordingSelect::default());
        light_dom.append_pages_select("bx-pages-select", pages.clone());
        sync_children(
            &light_dom,
            &config,
            &PaginationState::default(),
            changed(&[PaginationField::Disabled, PaginationField::PrevButtonText]),
        );
        assert!(pages.writes.borrow().is_empty());
    }

    #[test]
    fn remove_tag_detaches_matching_children() {
        let light_dom = LightDom::new();
        light_dom.append_other("bx-loading");
        light_dom.append_pages_select("bx-pages-select", Rc::new(RecordingSelect::default()));
        assert_eq!(light_dom.remove_tag("bx-pages-select"), 1);
        assert_eq!(light_dom.len(), 1);
        assert!(light_dom.pages_selects("bx-pages-select").is_empty());
    }
    #[test]
    fn remove_child_detaches_only_that_instance() {
        let config = PaginationConfig::default();
        let light_dom = LightDom::new();
        let kept = Rc::new(RecordingSelect::default());
        let removed = Rc::new(RecordingSelect::default());
        light_dom.append_pages_select("bx-pages-select", kept.clone());
        light_dom.append_pages_select("bx-pages-select", removed.clone());
        light_dom.append_page_sizes_select("bx-page-sizes-select", removed.clone());

        assert!(light_dom.remove_child(&removed));
        assert!(light_dom.remove_child(&removed));
        assert!(!light_dom.remove_child(&removed));
        assert_eq!(light_dom.len(), 1);

        sync_children(
            &light_dom,
            &config,
            &PaginationState::default(),
            changed(&[PaginationField::Start]),
        );
        assert_eq!(*kept.writes.borrow(), vec!["page=0"]);
        assert!(removed.writes.borrow().is_empty());
    }
}
