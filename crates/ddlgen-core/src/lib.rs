pub mod schema;
pub mod types;

pub use schema::{Column, ColumnName, Table, TableError, TableName};
pub use types::{OBJECT_TYPE, map_type, simple_type_name};
