use super::{Entity, EntityId, Property, PropertyTy, Schema, Type};
use crate::Result;

/// Incrementally declares entities and their properties.
///
/// Entities are declared up front so properties can point at entities
/// declared later, including the entity itself.
///
/// ```
/// use rowbind_core::schema::app::{Schema, Type};
///
/// let mut builder = Schema::builder();
/// let department = builder.declare("Department");
/// let employee = builder.declare("Employee");
///
/// builder
///     .entity(department)
///     .scalar("id", Type::I32)
///     .scalar("name", Type::String);
///
/// builder
///     .entity(employee)
///     .scalar("id", Type::I32)
///     .entity("department", department)
///     .entity("manager", employee)
///     .nullable();
///
/// let schema = builder.build().unwrap();
/// assert_eq!(schema.entity(employee).properties.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    entities: Vec<Entity>,
}

/// Adds properties to one declared entity.
#[derive(Debug)]
pub struct EntityBuilder<'a> {
    entity: &'a mut Entity,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves an id for a new, empty entity.
    pub fn declare(&mut self, name: &str) -> EntityId {
        let id = EntityId(self.entities.len());
        self.entities.push(Entity {
            id,
            name: name.to_string(),
            properties: vec![],
        });
        id
    }

    #[track_caller]
    pub fn entity(&mut self, id: EntityId) -> EntityBuilder<'_> {
        EntityBuilder {
            entity: self.entities.get_mut(id.0).expect("invalid entity ID"),
        }
    }

    pub fn build(self) -> Result<Schema> {
        Schema::from_entities(self.entities)
    }
}

impl EntityBuilder<'_> {
    pub fn id(&self) -> EntityId {
        self.entity.id
    }

    /// Declares a scalar property.
    pub fn scalar(&mut self, name: &str, ty: Type) -> &mut Self {
        self.push(name, PropertyTy::Scalar(ty))
    }

    /// Declares a property holding an instance of `target`.
    pub fn entity(&mut self, name: &str, target: EntityId) -> &mut Self {
        self.push(name, PropertyTy::Entity(target))
    }

    /// Marks the most recently declared property as nullable.
    #[track_caller]
    pub fn nullable(&mut self) -> &mut Self {
        let property = self
            .entity
            .properties
            .last_mut()
            .expect("no property declared yet");
        property.nullable = true;
        self
    }

    fn push(&mut self, name: &str, ty: PropertyTy) -> &mut Self {
        let id = self.entity.id.property(self.entity.properties.len());
        self.entity.properties.push(Property {
            id,
            name: name.to_string(),
            ty,
            nullable: false,
        });
        self
    }
}
