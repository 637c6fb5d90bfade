use super::{Builder, Entity, EntityId, EntityRef, Property, PropertyId, PropertyTy};

use crate::Result;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::Arc;

/// The set of entity descriptors known to the binding engine.
#[derive(Debug, Default)]
pub struct Schema {
    pub entities: IndexMap<EntityId, Entity>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Builds a schema from fully specified entity descriptors.
    ///
    /// Entity ids must match their position, property ids must match their
    /// owner and index, and every entity-typed property must target an entity
    /// in the set.
    pub fn from_entities(entities: impl IntoIterator<Item = Entity>) -> Result<Self> {
        let entities: Vec<_> = entities.into_iter().collect();
        let count = entities.len();

        let schema = Schema {
            entities: entities
                .into_iter()
                .map(|entity| (entity.id, entity))
                .collect(),
        };

        if schema.entities.len() != count {
            return Err(crate::Error::invalid_schema(
                "entity ids must be unique within a schema",
            ));
        }

        schema.verify()?;
        Ok(schema)
    }

    /// Returns a handle tables use to refer to entity `id` of this schema.
    pub fn entity_ref(self: &Arc<Self>, id: impl Into<EntityId>) -> EntityRef {
        let id = id.into();
        assert!(self.entities.contains_key(&id), "invalid entity ID");
        EntityRef::new(self.clone(), id)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Get an entity by ID
    pub fn entity(&self, id: impl Into<EntityId>) -> &Entity {
        self.entities.get(&id.into()).expect("invalid entity ID")
    }

    pub fn get_entity(&self, id: impl Into<EntityId>) -> Option<&Entity> {
        self.entities.get(&id.into())
    }

    pub fn entity_by_name(&self, name: &str) -> Option<&Entity> {
        self.entities().find(|entity| entity.name == name)
    }

    /// Get a property by ID
    pub fn property(&self, id: PropertyId) -> &Property {
        self.entity(id.entity)
            .properties
            .get(id.index)
            .expect("invalid property ID")
    }

    fn verify(&self) -> Result<()> {
        for (position, (id, entity)) in self.entities.iter().enumerate() {
            if id.0 != position {
                return Err(crate::Error::invalid_schema(format!(
                    "entity `{}` has id {} but was registered at position {position}",
                    entity.name, id.0,
                )));
            }

            let mut names = HashSet::new();

            for (index, property) in entity.properties.iter().enumerate() {
                if property.id != id.property(index) {
                    return Err(crate::Error::invalid_schema(format!(
                        "property `{}::{}` has id {:?}, expected {:?}",
                        entity.name,
                        property.name,
                        property.id,
                        id.property(index),
                    )));
                }

                if !names.insert(property.name.as_str()) {
                    return Err(crate::Error::invalid_schema(format!(
                        "entity `{}` declares property `{}` more than once",
                        entity.name, property.name,
                    )));
                }

                if let PropertyTy::Entity(target) = property.ty {
                    if !self.entities.contains_key(&target) {
                        return Err(crate::Error::invalid_schema(format!(
                            "property `{}::{}` references an entity that was not registered \
                             with the schema",
                            entity.name, property.name,
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
