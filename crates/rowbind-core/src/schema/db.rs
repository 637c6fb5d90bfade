//! Table definitions and the column binder.

mod column;
pub use column::{Column, ColumnId, ColumnRegistration};

mod join;
pub use join::{JoinConfig, JoinedReference};

mod table;
pub use table::Table;

mod ty;
pub use ty::Type;
