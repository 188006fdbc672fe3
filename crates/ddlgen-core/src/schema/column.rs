use ddlgen_naming::{to_camel_case, to_pascal_case};
use serde::Serialize;

use crate::schema::ColumnName;
use crate::types::{map_type, simple_type_name};

/// One column parsed from a `CREATE TABLE` statement.
///
/// Every name and type field is derived from `column_name` and `sql_type` when
/// the column is built, so the derived forms cannot drift from the source
/// identifier. Only the primary-key flag may change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    column_name: ColumnName,
    camel_name: String,
    pascal_name: String,
    sql_type: String,
    host_type: String,
    simple_host_type: String,
    is_primary_key: bool,
}

impl Column {
    /// Build a column from its unquoted identifier and base type keyword.
    ///
    /// The type keyword is upper-cased; callers strip size/precision suffixes.
    pub fn new(column_name: impl Into<ColumnName>, sql_type: &str, is_primary_key: bool) -> Self {
        let column_name = column_name.into();
        let camel_name = to_camel_case(&column_name);
        let pascal_name = to_pascal_case(&camel_name);
        let sql_type = sql_type.to_ascii_uppercase();
        let host_type = map_type(&sql_type);
        Self {
            column_name,
            camel_name,
            pascal_name,
            host_type: host_type.to_string(),
            simple_host_type: simple_type_name(host_type).to_string(),
            sql_type,
            is_primary_key,
        }
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    pub fn camel_name(&self) -> &str {
        &self.camel_name
    }

    pub fn pascal_name(&self) -> &str {
        &self.pascal_name
    }

    pub fn sql_type(&self) -> &str {
        &self.sql_type
    }

    /// Fully-qualified host type, e.g. `java.lang.Integer`.
    pub fn host_type(&self) -> &str {
        &self.host_type
    }

    /// Host type without its package, e.g. `Integer`.
    pub fn simple_host_type(&self) -> &str {
        &self.simple_host_type
    }

    pub fn is_primary_key(&self) -> bool {
        self.is_primary_key
    }

    /// Flag the column as part of the primary key. Idempotent.
    pub fn mark_primary_key(&mut self) {
        self.is_primary_key = true;
    }
}
