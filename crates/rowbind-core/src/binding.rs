//! How a column maps onto entity state.
//!
//! A [`Binding`] is produced by the column binder operations
//! ([`ColumnRegistration::bind_to`] and [`ColumnRegistration::references`])
//! and read by query builders and row hydration.
//!
//! [`ColumnRegistration::bind_to`]: crate::schema::db::ColumnRegistration::bind_to
//! [`ColumnRegistration::references`]: crate::schema::db::ColumnRegistration::references

mod path;
pub use path::PropertyPath;

mod recorder;
pub use recorder::Recorder;

mod selector;
pub use selector::detect_properties;

use crate::schema::{app::PropertyId, db::Table};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// The column maps onto the terminal property of a path on the table's
    /// own entity.
    Nested(NestedBinding),

    /// The column holds the key of a row in another table; the property holds
    /// the related entity.
    Reference(ReferenceBinding),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NestedBinding {
    /// Non-empty, in navigation order.
    pub path: PropertyPath,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceBinding {
    /// The referenced table. Shared, not copied, between aliased tables.
    pub table: Arc<Table>,

    /// The single property holding the related entity.
    pub property: PropertyId,
}

impl Binding {
    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested(..))
    }

    pub fn as_nested(&self) -> Option<&NestedBinding> {
        match self {
            Self::Nested(nested) => Some(nested),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_nested(&self) -> &NestedBinding {
        match self {
            Self::Nested(nested) => nested,
            _ => panic!("expected nested binding, but was {self:?}"),
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(..))
    }

    pub fn as_reference(&self) -> Option<&ReferenceBinding> {
        match self {
            Self::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_reference(&self) -> &ReferenceBinding {
        match self {
            Self::Reference(reference) => reference,
            _ => panic!("expected reference binding, but was {self:?}"),
        }
    }

    /// The first property the binding navigates through.
    pub fn first_property(&self) -> PropertyId {
        match self {
            Self::Nested(nested) => nested.path[0],
            Self::Reference(reference) => reference.property,
        }
    }
}

impl From<NestedBinding> for Binding {
    fn from(value: NestedBinding) -> Self {
        Self::Nested(value)
    }
}

impl From<ReferenceBinding> for Binding {
    fn from(value: ReferenceBinding) -> Self {
        Self::Reference(value)
    }
}

impl NestedBinding {
    pub fn new(path: impl Into<PropertyPath>) -> Self {
        Self { path: path.into() }
    }

    /// The property the column value is assigned to.
    pub fn terminal(&self) -> PropertyId {
        self.path[self.path.len() - 1]
    }
}

impl ReferenceBinding {
    pub fn new(table: Arc<Table>, property: PropertyId) -> Self {
        Self { table, property }
    }
}
