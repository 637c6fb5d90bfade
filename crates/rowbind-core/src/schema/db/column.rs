use super::{Table, Type};
use crate::binding::{Binding, NestedBinding, Recorder, ReferenceBinding};
use crate::{Error, Result};

use std::{fmt, sync::Arc};

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Position of the column within its table. Aliased copies keep it.
    pub id: ColumnId,

    /// The name of the column in the database.
    pub name: String,

    /// The database storage type of the column.
    pub ty: Type,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,

    /// Set at most once, by `bind_to` or `references`.
    binding: Option<Binding>,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId(pub usize);

/// A column being declared on a table, ready to be bound.
///
/// Returned by [`Table::register_column`] and
/// [`Table::column_registration`]. The binder operations consume it.
pub struct ColumnRegistration<'a> {
    table: &'a mut Table,
    id: ColumnId,
}

impl Column {
    pub(super) fn new(id: ColumnId, name: String, ty: Type) -> Self {
        Self {
            id,
            name,
            ty,
            primary_key: false,
            binding: None,
        }
    }

    pub fn binding(&self) -> Option<&Binding> {
        self.binding.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// The column's label in a select list: `{alias or table name}_{column}`.
    pub fn label(&self, table: &Table) -> String {
        format!("{}_{}", table.alias_or_name(), self.name)
    }
}

impl<'a> ColumnRegistration<'a> {
    pub(super) fn new(table: &'a mut Table, id: ColumnId) -> Self {
        Self { table, id }
    }

    pub fn id(&self) -> ColumnId {
        self.id
    }

    pub fn column(&self) -> &Column {
        self.table.column(self.id)
    }

    /// Marks the column as (part of) the table's primary key.
    pub fn primary_key(self) -> Self {
        self.table.column_mut(self.id).primary_key = true;
        self
    }

    /// Binds the column to the property path `selector` navigates, e.g.
    /// `|e| e.get("manager").get("department").get("id")`.
    ///
    /// The selector runs against a [`Recorder`] for the table's entity.
    pub fn bind_to<R>(self, selector: impl FnOnce(Recorder) -> R) -> Result<ColumnId> {
        let path = self.table.detect_binding_properties(selector)?;

        if log::log_enabled!(log::Level::Debug) {
            if let Some(entity) = self.table.entity() {
                log::debug!(
                    "binding `{}.{}` to `{}`",
                    self.table.name(),
                    self.column().name,
                    path.display(entity.schema()),
                );
            }
        }

        self.bind(NestedBinding { path }.into())
    }

    /// Binds the column to a row of `reference_table`, held by the single
    /// entity-typed property `selector` reads, e.g. `|e| e.get("department")`.
    ///
    /// Join planning aliases the referenced table per join, so the same
    /// table may be referenced from several columns.
    pub fn references<R>(
        self,
        reference_table: &Arc<Table>,
        selector: impl FnOnce(Recorder) -> R,
    ) -> Result<ColumnId> {
        let path = self.table.detect_binding_properties(selector)?;

        let [property] = path.as_slice() else {
            return Err(Error::nested_reference());
        };

        if let Some(entity) = self.table.entity() {
            let schema = entity.schema();
            let held = schema.property(*property);

            if held.target() != reference_table.entity().map(|target| target.id()) {
                return Err(Error::reference_type_mismatch(
                    &schema.entity(property.entity).name,
                    &held.name,
                    reference_table.name(),
                ));
            }
        }

        log::debug!(
            "binding `{}.{}` as a reference to `{}`",
            self.table.name(),
            self.column().name,
            reference_table.name(),
        );

        self.bind(
            ReferenceBinding {
                table: reference_table.clone(),
                property: *property,
            }
            .into(),
        )
    }

    fn bind(self, binding: Binding) -> Result<ColumnId> {
        let column = self.table.column(self.id);

        if column.is_bound() {
            return Err(Error::already_bound(self.table.name(), &column.name));
        }

        self.table.column_mut(self.id).binding = Some(binding);
        Ok(self.id)
    }
}

impl fmt::Debug for ColumnRegistration<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("ColumnRegistration")
            .field("table", &self.table.name())
            .field("column", &self.column().name)
            .finish()
    }
}

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({})", self.0)
    }
}
