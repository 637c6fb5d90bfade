use super::{join, Column, ColumnId, ColumnRegistration, JoinConfig, JoinedReference, Type};
use crate::binding::{self, PropertyPath, Recorder};
use crate::schema::app::EntityRef;
use crate::{Error, Result};

use indexmap::IndexMap;
use std::fmt;

/// A database table definition and the entity its rows map onto.
///
/// Tables are built once, at schema definition time: columns are registered
/// and bound through [`ColumnRegistration`]. Once published (typically behind
/// an `Arc`) a table is only read.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name of the table
    name: String,

    /// Alias distinguishing this copy of the table within one query
    alias: Option<String>,

    /// The entity rows hydrate into. Binding requires one.
    entity: Option<EntityRef>,

    /// The table's columns, by name, in registration order
    columns: IndexMap<String, Column>,
}

impl Table {
    /// Creates a table with no entity. Its columns can be declared but not
    /// bound.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            entity: None,
            columns: IndexMap::new(),
        }
    }

    /// Creates a table whose rows map onto `entity`.
    pub fn with_entity(name: impl Into<String>, entity: EntityRef) -> Self {
        Self {
            entity: Some(entity),
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The name queries refer to this table by.
    pub fn alias_or_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    pub fn entity(&self) -> Option<&EntityRef> {
        self.entity.as_ref()
    }

    /// Declares a new column.
    pub fn register_column(
        &mut self,
        name: impl Into<String>,
        ty: Type,
    ) -> Result<ColumnRegistration<'_>> {
        let name = name.into();

        if self.columns.contains_key(&name) {
            return Err(Error::duplicate_column(&self.name, name));
        }

        let id = ColumnId(self.columns.len());
        self.columns.insert(name.clone(), Column::new(id, name, ty));

        Ok(ColumnRegistration::new(self, id))
    }

    /// Re-opens an already declared column, e.g. to bind it after the fact.
    pub fn column_registration(&mut self, name: &str) -> Result<ColumnRegistration<'_>> {
        let id = self.get(name)?.id;
        Ok(ColumnRegistration::new(self, id))
    }

    /// Looks up a column by name.
    pub fn get(&self, name: &str) -> Result<&Column> {
        self.columns
            .get(name)
            .ok_or_else(|| Error::column_not_found(&self.name, name))
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let (_, column) = self
            .columns
            .get_index(id.into().0)
            .expect("invalid column ID");
        column
    }

    pub(super) fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        let (_, column) = self
            .columns
            .get_index_mut(id.0)
            .expect("invalid column ID");
        column
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.columns.values()
    }

    /// The first primary key column, if any.
    pub fn primary_key(&self) -> Option<&Column> {
        self.primary_keys().next()
    }

    pub fn primary_keys(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns().filter(|column| column.primary_key)
    }

    /// Returns a copy of this table under `alias`, with the same columns
    /// and bindings.
    ///
    /// Use it when the same table appears more than once in a query.
    /// Bindings are shared with the source table, not rebuilt.
    pub fn aliased(&self, alias: impl Into<String>) -> Table {
        Table {
            name: self.name.clone(),
            alias: Some(alias.into()),
            entity: self.entity.clone(),
            columns: self.columns.clone(),
        }
    }

    /// Expands every reference binding reachable from this table into an
    /// aliased join, using the default [`JoinConfig`].
    pub fn reference_joins(&self) -> Result<Vec<JoinedReference>> {
        self.reference_joins_with(&JoinConfig::default())
    }

    pub fn reference_joins_with(&self, config: &JoinConfig) -> Result<Vec<JoinedReference>> {
        join::plan(self, config)
    }

    pub(super) fn detect_binding_properties<R>(
        &self,
        selector: impl FnOnce(Recorder) -> R,
    ) -> Result<PropertyPath> {
        let Some(entity) = &self.entity else {
            return Err(Error::unconfigured_entity(&self.name));
        };

        binding::detect_properties(entity, selector)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table {}", self.name)?;
        if let Some(alias) = &self.alias {
            write!(f, " alias {alias}")?;
        }
        Ok(())
    }
}
