//! Attribute codec table of the pagination element.

use element_contract::{
    parse_boolean_attribute, parse_number_attribute, serialize_boolean_attribute,
    AttributeCodec, AttributeKind, ElementError,
};

use crate::{
    model::{
        DEFAULT_NEXT_BUTTON_TEXT, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_LABEL_TEXT,
        DEFAULT_PREV_BUTTON_TEXT,
    },
    store::PaginationStore,
};

/// Observed attributes of the pagination element with their parse and serialize functions.
pub static PAGINATION_ATTRIBUTES: [AttributeCodec<PaginationStore>; 8] = [
    AttributeCodec {
        name: "start",
        kind: AttributeKind::Number,
        parse: parse_start,
        serialize: |store| Some(store.state().start.to_string()),
    },
    AttributeCodec {
        name: "page-size",
        kind: AttributeKind::Number,
        parse: parse_page_size,
        serialize: |store| Some(store.state().page_size.to_string()),
    },
    AttributeCodec {
        name: "total",
        kind: AttributeKind::Number,
        parse: parse_total,
        serialize: |store| store.state().total.map(|total| total.to_string()),
    },
    AttributeCodec {
        name: "at-last-page",
        kind: AttributeKind::Boolean,
        parse: parse_at_last_page,
        serialize: |store| serialize_boolean_attribute(store.state().at_last_page == Some(true)),
    },
    AttributeCodec {
        name: "disabled",
        kind: AttributeKind::Boolean,
        parse: |store, raw| {
            store.set_disabled(parse_boolean_attribute(raw));
            Ok(())
        },
        serialize: |store| serialize_boolean_attribute(store.state().disabled),
    },
    AttributeCodec {
        name: "prev-button-text",
        kind: AttributeKind::String,
        parse: |store, raw| {
            store.set_prev_button_text(raw.unwrap_or(DEFAULT_PREV_BUTTON_TEXT));
            Ok(())
        },
        serialize: |store| Some(store.state().prev_button_text.clone()),
    },
    AttributeCodec {
        name: "next-button-text",
        kind: AttributeKind::String,
        parse: |store, raw| {
            store.set_next_button_text(raw.unwrap_or(DEFAULT_NEXT_BUTTON_TEXT));
            Ok(())
        },
        serialize: |store| Some(store.state().next_button_text.clone()),
    },
    AttributeCodec {
        name: "page-size-label-text",
        kind: AttributeKind::String,
        parse: |store, raw| {
            store.set_page_size_label_text(raw.unwrap_or(DEFAULT_PAGE_SIZE_LABEL_TEXT));
            Ok(())
        },
        serialize: |store| Some(store.state().page_size_label_text.clone()),
    },
];

fn parse_start(store: &mut PaginationStore, raw: Option<&str>) -> Result<(), ElementError> {
    let start = parse_number_attribute("start", raw)?.unwrap_or(0);
    store.set_start(start);
    Ok(())
}

fn parse_page_size(store: &mut PaginationStore, raw: Option<&str>) -> Result<(), ElementError> {
    let page_size = parse_number_attribute("page-size", raw)?.unwrap_or(DEFAULT_PAGE_SIZE);
    store
        .set_page_size(page_size)
        .map_err(|_| ElementError::InvalidAttribute {
            name: "page-size".to_string(),
            value: raw.unwrap_or_default().to_string(),
        })?;
    Ok(())
}

fn parse_total(store: &mut PaginationStore, raw: Option<&str>) -> Result<(), ElementError> {
    store.set_total(parse_number_attribute("total", raw)?);
    Ok(())
}

/// Presence sets the override; removal returns it to unset rather than `false`.
fn parse_at_last_page(store: &mut PaginationStore, raw: Option<&str>) -> Result<(), ElementError> {
    store.set_at_last_page(raw.map(|_| true));
    Ok(())
}

/// Attribute names in table order.
pub fn observed_attribute_names() -> Vec<&'static str> {
    PAGINATION_ATTRIBUTES.iter().map(|codec| codec.name).collect()
}
