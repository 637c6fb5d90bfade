use crate::schema::app::{Property, PropertyId, Schema};
use std::{fmt, ops};

/// Ordered property hops from an entity to a (possibly nested) property,
/// e.g. `employee → manager → department`.
///
/// Each property is declared on the entity reached by the one before it.
/// Paths produced by selector evaluation are never empty.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    steps: Vec<PropertyId>,
}

impl PropertyPath {
    pub fn as_slice(&self) -> &[PropertyId] {
        &self.steps[..]
    }

    /// Looks up each step's descriptor in `schema`.
    pub fn resolve<'a>(
        &'a self,
        schema: &'a Schema,
    ) -> impl ExactSizeIterator<Item = &'a Property> + 'a {
        self.steps.iter().map(move |id| schema.property(*id))
    }

    /// Formats the path as dotted property names, `manager.department.name`.
    pub fn display<'a>(&'a self, schema: &'a Schema) -> impl fmt::Display + 'a {
        DisplayPath { path: self, schema }
    }
}

struct DisplayPath<'a> {
    path: &'a PropertyPath,
    schema: &'a Schema,
}

impl fmt::Display for DisplayPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, property) in self.path.resolve(self.schema).enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(&property.name)?;
        }
        Ok(())
    }
}

impl ops::Deref for PropertyPath {
    type Target = [PropertyId];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl From<Vec<PropertyId>> for PropertyPath {
    fn from(steps: Vec<PropertyId>) -> Self {
        Self { steps }
    }
}

impl<const N: usize> From<[PropertyId; N]> for PropertyPath {
    fn from(steps: [PropertyId; N]) -> Self {
        Self {
            steps: steps.into(),
        }
    }
}

impl From<PropertyId> for PropertyPath {
    fn from(step: PropertyId) -> Self {
        Self { steps: vec![step] }
    }
}

impl<'a> IntoIterator for &'a PropertyPath {
    type Item = &'a PropertyId;
    type IntoIter = std::slice::Iter<'a, PropertyId>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Debug for PropertyPath {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(&self.steps).finish()
    }
}
