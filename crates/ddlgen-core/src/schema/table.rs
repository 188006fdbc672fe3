use ddlgen_naming::to_pascal_case;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

use crate::schema::{TableName, column::Column};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("table '{0}' has no columns")]
    NoColumns(String),
}

/// A parsed table: its normalized name and its columns in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    table_name: TableName,
    source_name: TableName,
    columns: Vec<Column>,
}

impl Table {
    /// Build a table from the unquoted identifier written in the DDL.
    ///
    /// The table name is the Pascal case of the lower-cased source name, so
    /// `USERS`, `users` and `Users` all become `Users`.
    pub fn new(source_name: impl Into<TableName>, columns: Vec<Column>) -> Result<Self, TableError> {
        let source_name = source_name.into();
        if columns.is_empty() {
            return Err(TableError::NoColumns(source_name));
        }
        Ok(Self {
            table_name: to_pascal_case(&source_name.to_lowercase()),
            source_name,
            columns,
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The identifier as written in the DDL, quotes stripped.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Columns flagged as primary key, in source order.
    pub fn primary_key_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.is_primary_key()).collect()
    }

    /// Columns not part of the primary key, in source order.
    pub fn non_key_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| !c.is_primary_key()).collect()
    }

    pub fn has_primary_key(&self) -> bool {
        self.columns.iter().any(Column::is_primary_key)
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Table", 4)?;
        state.serialize_field("tableName", &self.table_name)?;
        state.serialize_field("sourceName", &self.source_name)?;
        state.serialize_field("columns", &self.columns)?;
        state.serialize_field("primaryKeyColumns", &self.primary_key_columns())?;
        state.end()
    }
}
