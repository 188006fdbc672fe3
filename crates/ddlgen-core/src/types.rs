//! SQL type keyword to Java type mapping.

/// Host type used when a SQL keyword has no entry in the mapping table.
pub const OBJECT_TYPE: &str = "java.lang.Object";

/// Resolve a SQL type keyword (`VARCHAR`, `int`, `Timestamp`, ...) to a
/// fully-qualified Java type name.
///
/// The lookup is case-insensitive and total: unknown or vendor-specific
/// keywords resolve to [`OBJECT_TYPE`] instead of failing.
pub fn map_type(sql_type: &str) -> &'static str {
    match sql_type.trim().to_ascii_uppercase().as_str() {
        // Character / text types
        "CHAR" | "CHARACTER" | "NCHAR" | "VARCHAR" | "VARCHAR2" | "NVARCHAR" | "NVARCHAR2"
        | "TEXT" | "TINYTEXT" | "MEDIUMTEXT" | "LONGTEXT" | "NTEXT" | "CLOB" | "NCLOB"
        | "ENUM" | "SET" | "JSON" | "JSONB" | "UUID" | "XML" => "java.lang.String",

        // Integer types
        "TINYINT" => "java.lang.Byte",
        "SMALLINT" | "INT2" => "java.lang.Short",
        "MEDIUMINT" | "INT" | "INTEGER" | "INT4" | "SERIAL" | "YEAR" => "java.lang.Integer",
        "BIGINT" | "INT8" | "BIGSERIAL" => "java.lang.Long",

        // Floating point types
        "FLOAT" | "REAL" | "FLOAT4" => "java.lang.Float",
        "DOUBLE" | "FLOAT8" => "java.lang.Double",

        // Fixed-point types
        "DECIMAL" | "DEC" | "NUMERIC" | "NUMBER" | "MONEY" => "java.math.BigDecimal",

        // Date / time types
        "DATE" => "java.sql.Date",
        "TIME" => "java.sql.Time",
        "DATETIME" | "DATETIME2" | "TIMESTAMP" | "TIMESTAMPTZ" => "java.sql.Timestamp",

        // Boolean types
        "BOOLEAN" | "BOOL" | "BIT" => "java.lang.Boolean",

        // Binary types
        "BINARY" | "VARBINARY" | "BLOB" | "TINYBLOB" | "MEDIUMBLOB" | "LONGBLOB" | "BYTEA"
        | "RAW" => "byte[]",

        _ => OBJECT_TYPE,
    }
}

/// Strip the package qualifier from a host type (`java.lang.String` -> `String`).
pub fn simple_type_name(host_type: &str) -> &str {
    host_type
        .rsplit_once('.')
        .map_or(host_type, |(_, simple)| simple)
}
