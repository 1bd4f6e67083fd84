//! The element catalog: pagination plus its two selector children, registered per prefix.

use std::rc::Rc;

use element_contract::{ElementDefinition, ElementError, ElementHost, ElementRef, ElementRegistry};

use crate::{
    attributes::observed_attribute_names,
    element::PaginationElement,
    model::PaginationConfig,
    selects::{PageSizesSelectElement, PagesSelectElement},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One entry of the element catalog.
pub enum CatalogElement {
    /// The pagination element.
    Pagination,
    /// The page selector.
    PagesSelect,
    /// The page-size selector.
    PageSizesSelect,
}

const CATALOG: [CatalogElement; 3] = [
    CatalogElement::Pagination,
    CatalogElement::PagesSelect,
    CatalogElement::PageSizesSelect,
];

/// Every catalog entry, in registration order.
pub fn catalog_elements() -> &'static [CatalogElement] {
    &CATALOG
}

impl CatalogElement {
    /// Tag this entry is registered under for `config`.
    pub fn tag(self, config: &PaginationConfig) -> &str {
        match self {
            Self::Pagination => &config.tag,
            Self::PagesSelect => &config.selector_pages_select,
            Self::PageSizesSelect => &config.selector_page_sizes_select,
        }
    }

    fn definition(self, config: &PaginationConfig) -> ElementDefinition {
        let tag = self.tag(config).to_string();
        let config = config.clone();
        match self {
            Self::Pagination => ElementDefinition::new(
                tag,
                observed_attribute_names(),
                Rc::new(move |host: ElementHost| -> ElementRef {
                    Rc::new(PaginationElement::with_config(host, config.clone()))
                }),
            ),
            Self::PagesSelect => ElementDefinition::new(
                tag,
                Vec::new(),
                Rc::new(move |host: ElementHost| -> ElementRef {
                    PagesSelectElement::new(host.events, &config)
                }),
            ),
            Self::PageSizesSelect => ElementDefinition::new(
                tag,
                Vec::new(),
                Rc::new(move |host: ElementHost| -> ElementRef {
                    PageSizesSelectElement::new(host.events, &config)
                }),
            ),
        }
    }
}

/// Registers the pagination element and its selector children under `config`'s tags.
///
/// # Errors
///
/// Fails on the first tag that is already defined or malformed; earlier tags stay registered.
pub fn define_catalog(
    registry: &mut ElementRegistry,
    config: &PaginationConfig,
) -> Result<(), ElementError> {
    for element in catalog_elements() {
        registry.define(element.definition(config))?;
    }
    Ok(())
}
