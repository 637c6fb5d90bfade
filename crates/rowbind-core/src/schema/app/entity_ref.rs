use super::{Entity, EntityId, Schema};
use std::{fmt, sync::Arc};

/// Links a table to the entity type its rows hydrate into.
///
/// Holds the schema the entity was declared in, so the recorder can follow
/// entity-typed properties to their targets.
#[derive(Clone)]
pub struct EntityRef {
    schema: Arc<Schema>,
    id: EntityId,
}

impl EntityRef {
    pub(super) fn new(schema: Arc<Schema>, id: EntityId) -> Self {
        Self { schema, id }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn entity(&self) -> &Entity {
        self.schema.entity(self.id)
    }
}

impl PartialEq for EntityRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Arc::ptr_eq(&self.schema, &other.schema)
    }
}

impl fmt::Debug for EntityRef {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EntityRef({:?} {})", self.id, self.entity().name)
    }
}
