//! Shared contract types between hosted custom elements and the hosts that mount them.
//!
//! Elements are composed from independent capabilities ([`CustomElement`] lifecycle,
//! [`AttributeReflect`] for the string attribute surface, [`Focusable`] for focus
//! delegation) instead of a base-class hierarchy. Hosts own the [`EventHub`] an element
//! listens on, the [`UpdateScheduler`] that decides when deferred update passes run, and an
//! explicit [`ElementRegistry`] keyed by tag name. Views that watch an element hold an
//! [`ObserverHandle`] and release it when they unmount.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{any::Any, rc::Rc};

use thiserror::Error;

mod attributes;
mod events;
mod observers;
mod registry;
mod scheduler;

pub use attributes::{
    find_codec, parse_boolean_attribute, parse_number_attribute, serialize_boolean_attribute,
    AttributeCodec, AttributeKind,
};
pub use events::{ElementEvent, EventHub, EventListener, ListenerHandle};
pub use observers::{ObserverHandle, Observers};
pub use registry::{ElementDefinition, ElementFactory, ElementHost, ElementRegistry};
pub use scheduler::{ManualScheduler, UpdateScheduler, UpdateTask};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised by element registration, attribute decoding, and payload coercion.
pub enum ElementError {
    /// A tag name was defined twice in the same registry.
    #[error("element `{0}` is already defined")]
    DuplicateTag(String),
    /// A tag name has no definition in the registry.
    #[error("element `{0}` is not defined")]
    UnknownTag(String),
    /// Tag names must be lowercase and contain a hyphen.
    #[error("invalid element tag `{0}`; expected a lowercase name containing `-`")]
    InvalidTag(String),
    /// The attribute is not part of the element's observed attribute surface.
    #[error("attribute `{0}` is not observed")]
    UnknownAttribute(String),
    /// The attribute value could not be decoded into its property type.
    #[error("attribute `{name}` cannot decode `{value}`")]
    InvalidAttribute {
        /// Attribute name.
        name: String,
        /// Raw attribute value.
        value: String,
    },
    /// Page size must be strictly positive.
    #[error("page size must be greater than zero")]
    InvalidPageSize,
    /// An event payload is missing the named field or it is not numeric.
    #[error("event `{event}` carries no usable `{field}`")]
    MalformedPayload {
        /// Event name.
        event: String,
        /// Detail field that was read.
        field: String,
    },
}

/// Lifecycle capability every hosted element implements.
pub trait CustomElement {
    /// Tag name the element was created for.
    fn tag_name(&self) -> &str;

    /// Called when the host attaches the element.
    fn connected(&self);

    /// Called when the host detaches the element.
    fn disconnected(&self);

    /// Attribute capability, when the element exposes one.
    fn attributes(&self) -> Option<&dyn AttributeReflect> {
        None
    }

    /// Focus capability, when the element exposes one.
    fn focus(&self) -> Option<&dyn Focusable> {
        None
    }

    /// Concrete element access for hosts that know the element type.
    fn as_any(&self) -> &dyn Any;
}

/// String attribute surface mirrored onto typed element properties.
pub trait AttributeReflect {
    /// Attribute names the element reacts to.
    fn observed_attributes(&self) -> Vec<&'static str>;

    /// Applies an attribute change; `None` means the attribute was removed.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::UnknownAttribute`] for names outside the observed set and
    /// [`ElementError::InvalidAttribute`] when the value cannot be decoded.
    fn attribute_changed(&self, name: &str, value: Option<&str>) -> Result<(), ElementError>;

    /// Serializes the current property value for `name`; `None` means "attribute absent".
    fn attribute(&self, name: &str) -> Option<String>;
}

/// Focus delegation capability.
pub trait Focusable {
    /// Returns the name of the internal part that should receive focus, if any.
    fn delegated_focus_target(&self) -> Option<&'static str>;
}

/// Shared pointer type produced by element factories.
pub type ElementRef = Rc<dyn CustomElement>;
