pub mod column;
pub mod table;

pub use column::Column;
pub use table::{Table, TableError};

pub type TableName = String;
pub type ColumnName = String;
