//! Attribute/property codec primitives.
//!
//! Elements describe their attribute surface as a static table of [`AttributeCodec`] rows
//! instead of reflecting over properties at runtime.

use crate::ElementError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Property type an attribute decodes into.
pub enum AttributeKind {
    /// Non-negative integer.
    Number,
    /// Presence-based boolean.
    Boolean,
    /// Free text.
    String,
}

/// One row of an element's attribute table.
///
/// `T` is the element-side property store the codec reads from and writes into.
pub struct AttributeCodec<T> {
    /// Attribute name (kebab-case).
    pub name: &'static str,
    /// Decoded property type.
    pub kind: AttributeKind,
    /// Decodes the raw attribute (`None` when removed) into the store.
    pub parse: fn(&mut T, Option<&str>) -> Result<(), ElementError>,
    /// Encodes the current property value; `None` means the attribute is absent.
    pub serialize: fn(&T) -> Option<String>,
}

/// Looks up the codec row for `name`.
///
/// # Errors
///
/// Returns [`ElementError::UnknownAttribute`] when no row matches.
pub fn find_codec<'a, T>(
    table: &'a [AttributeCodec<T>],
    name: &str,
) -> Result<&'a AttributeCodec<T>, ElementError> {
    table
        .iter()
        .find(|codec| codec.name == name)
        .ok_or_else(|| ElementError::UnknownAttribute(name.to_string()))
}

/// Decodes a numeric attribute; a removed attribute decodes to `None`.
///
/// # Errors
///
/// Returns [`ElementError::InvalidAttribute`] for text that is not a non-negative integer.
pub fn parse_number_attribute(name: &str, raw: Option<&str>) -> Result<Option<u64>, ElementError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Some(0));
    }
    trimmed
        .parse::<u64>()
        .map(Some)
        .map_err(|_| ElementError::InvalidAttribute {
            name: name.to_string(),
            value: raw.to_string(),
        })
}

/// Decodes a presence-based boolean attribute.
pub fn parse_boolean_attribute(raw: Option<&str>) -> bool {
    raw.is_some()
}

/// Encodes a presence-based boolean attribute.
pub fn serialize_boolean_attribute(value: bool) -> Option<String> {
    value.then(String::new)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn number_attribute_accepts_integers_and_empty_text() {
        assert_eq!(parse_number_attribute("start", Some("25")), Ok(Some(25)));
        assert_eq!(parse_number_attribute("start", Some(" 7 ")), Ok(Some(7)));
        assert_eq!(parse_number_attribute("start", Some("")), Ok(Some(0)));
        assert_eq!(parse_number_attribute("start", None), Ok(None));
    }

    #[test]
    fn number_attribute_rejects_negative_and_garbage() {
        assert_eq!(
            parse_number_attribute("page-size", Some("-1")),
            Err(ElementError::InvalidAttribute {
                name: "page-size".to_string(),
                value: "-1".to_string(),
            })
        );
        assert!(parse_number_attribute("page-size", Some("ten")).is_err());
    }

    #[test]
    fn boolean_attribute_is_presence_based() {
        assert!(parse_boolean_attribute(Some("")));
        assert!(parse_boolean_attribute(Some("false")));
        assert!(!parse_boolean_attribute(None));
        assert_eq!(serialize_boolean_attribute(true), Some(String::new()));
        assert_eq!(serialize_boolean_attribute(false), None);
    }
}
