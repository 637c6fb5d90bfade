//! Application-level schema: the entity descriptors selectors navigate.

mod builder;
pub use builder::{Builder, EntityBuilder};

mod entity;
pub use entity::{Entity, EntityId};

mod entity_ref;
pub use entity_ref::EntityRef;

mod property;
pub use property::{Property, PropertyId, PropertyTy};

mod schema;
pub use schema::Schema;

mod ty;
pub use ty::Type;
