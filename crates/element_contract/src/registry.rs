//! Explicit element registry keyed by tag name.

use std::{collections::BTreeMap, rc::Rc};

use crate::{ElementError, ElementRef, EventHub, UpdateScheduler};

/// Host-provided resources injected into every element an [`ElementRegistry`] creates.
#[derive(Clone)]
pub struct ElementHost {
    /// Event target owned by the new element.
    pub events: EventHub,
    /// Batching boundary for deferred update passes.
    pub scheduler: Rc<dyn UpdateScheduler>,
}

impl ElementHost {
    /// Creates host resources around a fresh event target.
    pub fn new(scheduler: Rc<dyn UpdateScheduler>) -> Self {
        Self {
            events: EventHub::new(),
            scheduler,
        }
    }
}

/// Constructor stored for one tag.
pub type ElementFactory = Rc<dyn Fn(ElementHost) -> ElementRef>;

#[derive(Clone)]
/// Registered element definition.
pub struct ElementDefinition {
    /// Tag name.
    pub tag: String,
    /// Attribute names the element observes.
    pub observed_attributes: Vec<&'static str>,
    factory: ElementFactory,
}

impl ElementDefinition {
    /// Creates a definition from a tag and factory.
    pub fn new(
        tag: impl Into<String>,
        observed_attributes: Vec<&'static str>,
        factory: ElementFactory,
    ) -> Self {
        Self {
            tag: tag.into(),
            observed_attributes,
            factory,
        }
    }
}

impl std::fmt::Debug for ElementDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementDefinition")
            .field("tag", &self.tag)
            .field("observed_attributes", &self.observed_attributes)
            .finish_non_exhaustive()
    }
}

/// Tag-name keyed element registry.
///
/// Hosts build one registry at start-up and pass it where elements are created; tests build
/// their own.
#[derive(Default, Debug)]
pub struct ElementRegistry {
    definitions: BTreeMap<String, ElementDefinition>,
}

impl ElementRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `definition` under its tag.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::InvalidTag`] for malformed tag names and
    /// [`ElementError::DuplicateTag`] when the tag is already defined.
    pub fn define(&mut self, definition: ElementDefinition) -> Result<(), ElementError> {
        if !is_valid_tag(&definition.tag) {
            return Err(ElementError::InvalidTag(definition.tag));
        }
        if self.definitions.contains_key(&definition.tag) {
            return Err(ElementError::DuplicateTag(definition.tag));
        }
        self.definitions.insert(definition.tag.clone(), definition);
        Ok(())
    }

    /// Returns the definition for `tag`.
    pub fn get(&self, tag: &str) -> Option<&ElementDefinition> {
        self.definitions.get(tag)
    }

    /// Defined tag names in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Creates an element for `tag` with the supplied host resources.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::UnknownTag`] when `tag` has no definition.
    pub fn create(&self, tag: &str, host: ElementHost) -> Result<ElementRef, ElementError> {
        let definition = self
            .definitions
            .get(tag)
            .ok_or_else(|| ElementError::UnknownTag(tag.to_string()))?;
        Ok((definition.factory)(host))
    }
}

fn is_valid_tag(raw: &str) -> bool {
    let Some(first) = raw.chars().next() else {
        return false;
    };
    first.is_ascii_lowercase()
        && raw.contains('-')
        && !raw.ends_with('-')
        && raw
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{CustomElement, ManualScheduler};

    struct Placeholder {
        tag: String,
    }

    impl CustomElement for Placeholder {
        fn tag_name(&self) -> &str {
            &self.tag
        }

        fn connected(&self) {}

        fn disconnected(&self) {}

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn placeholder(tag: &'static str) -> ElementDefinition {
        ElementDefinition::new(
            tag,
            Vec::new(),
            Rc::new(move |_: ElementHost| {
                Rc::new(Placeholder {
                    tag: tag.to_string(),
                }) as ElementRef
            }),
        )
    }

    #[test]
    fn tags_require_lowercase_hyphenated_names() {
        let mut registry = ElementRegistry::new();
        assert!(registry.define(placeholder("bx-loading")).is_ok());
        assert_eq!(
            registry.define(placeholder("loading")),
            Err(ElementError::InvalidTag("loading".to_string()))
        );
        assert!(registry.define(placeholder("Bx-loading")).is_err());
        assert!(registry.define(placeholder("bx-")).is_err());
    }

    #[test]
    fn duplicate_definitions_are_rejected() {
        let mut registry = ElementRegistry::new();
        registry.define(placeholder("bx-modal-footer")).unwrap();
        assert_eq!(
            registry.define(placeholder("bx-modal-footer")),
            Err(ElementError::DuplicateTag("bx-modal-footer".to_string()))
        );
    }

    #[test]
    fn create_uses_registered_factory() {
        let mut registry = ElementRegistry::new();
        registry.define(placeholder("bx-skeleton-text")).unwrap();
        let host = ElementHost::new(Rc::new(ManualScheduler::new()));

        let element = registry.create("bx-skeleton-text", host.clone()).unwrap();
        assert_eq!(element.tag_name(), "bx-skeleton-text");
        assert!(element.attributes().is_none());
        assert_eq!(
            registry.create("bx-missing", host).err(),
            Some(ElementError::UnknownTag("bx-missing".to_string()))
        );
    }
}
