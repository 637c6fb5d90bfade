use super::{Property, PropertyId};
use std::fmt;

/// Describes an entity type: its name and declared properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Uniquely identifies the entity within the schema
    pub id: EntityId,

    /// Name of the entity
    pub name: String,

    /// Declared properties, in declaration order
    pub properties: Vec<Property>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct EntityId(pub usize);

impl Entity {
    pub fn property(&self, property: impl Into<PropertyId>) -> &Property {
        let property_id = property.into();
        assert_eq!(self.id, property_id.entity);
        &self.properties[property_id.index]
    }

    pub fn property_by_name(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == name)
    }

    pub fn properties(&self) -> impl ExactSizeIterator<Item = &Property> + '_ {
        self.properties.iter()
    }
}

impl EntityId {
    /// Create a `PropertyId` representing the current entity's property at index `index`.
    pub const fn property(self, index: usize) -> PropertyId {
        PropertyId {
            entity: self,
            index,
        }
    }
}

impl From<&Entity> for EntityId {
    fn from(value: &Entity) -> Self {
        value.id
    }
}

impl From<&Property> for PropertyId {
    fn from(value: &Property) -> Self {
        value.id
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EntityId({})", self.0)
    }
}
