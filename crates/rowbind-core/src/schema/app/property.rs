use super::{EntityId, Type};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Uniquely identifies the property within the schema.
    pub id: PropertyId,

    /// The property name, as selectors read it.
    pub name: String,

    /// Scalar or entity-typed.
    pub ty: PropertyTy,

    /// True if the property may hold no value.
    pub nullable: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PropertyId {
    pub entity: EntityId,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyTy {
    /// A plain value. Property paths end here.
    Scalar(Type),

    /// Holds another entity, which a selector can keep navigating.
    Entity(EntityId),
}

impl Property {
    pub fn id(&self) -> PropertyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &PropertyTy {
        &self.ty
    }

    pub fn is_entity(&self) -> bool {
        self.ty.is_entity()
    }

    /// If the property is entity-typed, returns the target entity.
    pub fn target(&self) -> Option<EntityId> {
        self.ty.as_entity()
    }
}

impl PropertyTy {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(..))
    }

    pub fn as_scalar(&self) -> Option<Type> {
        match self {
            Self::Scalar(ty) => Some(*ty),
            _ => None,
        }
    }

    pub fn is_entity(&self) -> bool {
        matches!(self, Self::Entity(..))
    }

    pub fn as_entity(&self) -> Option<EntityId> {
        match self {
            Self::Entity(target) => Some(*target),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_entity(&self) -> EntityId {
        match self {
            Self::Entity(target) => *target,
            _ => panic!("expected entity-typed property, but was {self:?}"),
        }
    }
}

impl fmt::Debug for PropertyId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "PropertyId({}/{})", self.entity.0, self.index)
    }
}
