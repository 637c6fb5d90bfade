use std::fmt;

/// The declared type of a scalar entity property.
///
/// Only the shape matters to the binding engine: a scalar ends a property
/// path, while entity-typed properties (see [`PropertyTy::Entity`]) can be
/// navigated further.
///
/// [`PropertyTy::Entity`]: super::PropertyTy::Entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I32,
    I64,
    F64,
    String,
    Decimal,
    Date,
    DateTime,
    Uuid,
    Bytes,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::Bool => "bool",
            Type::I32 => "i32",
            Type::I64 => "i64",
            Type::F64 => "f64",
            Type::String => "String",
            Type::Decimal => "Decimal",
            Type::Date => "Date",
            Type::DateTime => "DateTime",
            Type::Uuid => "Uuid",
            Type::Bytes => "Vec<u8>",
        };
        f.write_str(name)
    }
}
