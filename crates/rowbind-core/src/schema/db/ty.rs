use std::fmt;

/// Storage type of a column, as it would appear in `CREATE TABLE`.
///
/// The binder never inspects it; it travels with the column for the query
/// builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// A boolean value
    Boolean,

    /// A signed integer of `n` bytes
    Integer(u8),

    /// A double precision float
    Double,

    /// Unconstrained text type
    Text,

    /// Text type with an explicit maximum length
    VarChar(u64),

    /// Fixed-point decimal with precision and scale
    Decimal(u32, u32),

    Date,

    Timestamp,

    /// 128-bit universally unique identifier (UUID)
    Uuid,

    Blob,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => f.write_str("BOOLEAN"),
            Type::Integer(1..=2) => f.write_str("SMALLINT"),
            Type::Integer(3..=4) => f.write_str("INTEGER"),
            Type::Integer(_) => f.write_str("BIGINT"),
            Type::Double => f.write_str("DOUBLE PRECISION"),
            Type::Text => f.write_str("TEXT"),
            Type::VarChar(size) => write!(f, "VARCHAR({size})"),
            Type::Decimal(precision, scale) => write!(f, "DECIMAL({precision}, {scale})"),
            Type::Date => f.write_str("DATE"),
            Type::Timestamp => f.write_str("TIMESTAMP"),
            Type::Uuid => f.write_str("UUID"),
            Type::Blob => f.write_str("BLOB"),
        }
    }
}
