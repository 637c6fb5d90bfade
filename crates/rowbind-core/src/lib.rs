//! Resolves the entity property a table column is bound to.
//!
//! Columns are bound by handing the binder a selector closure. The closure
//! runs once, at definition time, against a [`binding::Recorder`] that
//! records which properties it reads; the recorded path becomes the
//! column's [`binding::Binding`].
//!
//! ```
//! use rowbind_core::schema::{app, db};
//! use std::sync::Arc;
//!
//! # fn main() -> rowbind_core::Result<()> {
//! let mut builder = app::Schema::builder();
//! let department = builder.declare("Department");
//! let employee = builder.declare("Employee");
//! builder
//!     .entity(department)
//!     .scalar("id", app::Type::I32)
//!     .scalar("name", app::Type::String);
//! builder
//!     .entity(employee)
//!     .scalar("id", app::Type::I32)
//!     .scalar("name", app::Type::String)
//!     .entity("department", department);
//! let schema = Arc::new(builder.build()?);
//!
//! let mut departments = db::Table::with_entity("t_department", schema.entity_ref(department));
//! departments
//!     .register_column("id", db::Type::Integer(4))?
//!     .primary_key()
//!     .bind_to(|d| d.get("id"))?;
//! let departments = Arc::new(departments);
//!
//! let mut employees = db::Table::with_entity("t_employee", schema.entity_ref(employee));
//! employees
//!     .register_column("name", db::Type::VarChar(128))?
//!     .bind_to(|e| e.get("name"))?;
//! employees
//!     .register_column("department_id", db::Type::Integer(4))?
//!     .references(&departments, |e| e.get("department"))?;
//!
//! let joins = employees.reference_joins()?;
//! assert_eq!(joins[0].alias(), "_ref0");
//! # Ok(())
//! # }
//! ```

mod error;
pub use error::{Error, IntoError};

pub mod binding;

pub mod schema;

/// A Result type alias that uses rowbind's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
