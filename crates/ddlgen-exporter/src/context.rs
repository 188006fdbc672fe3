use chrono::{Local, NaiveDate};
use ddlgen_core::{Column, Table};
use ddlgen_naming::{lower_first, to_snake_case};
use serde::Serialize;

/// Package used when no base package is configured.
pub const DEFAULT_BASE_PACKAGE: &str = "egovframework.example.sample";

/// Version stamped into generated files.
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything a template needs to render one artifact for one table.
///
/// All fields are derived from a [`Table`], the base package and the
/// generation date. Serialized field names are camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext {
    pub base_package: String,
    /// Pascal-cased table name, e.g. `Users`.
    pub table_name: String,
    /// Table identifier as written in the DDL, used in SQL.
    pub source_table_name: String,
    /// Lower camel class name, e.g. `users`.
    pub class_name: String,
    /// Mapper namespace, `{pkg}.service.impl.{T}Mapper`.
    pub namespace: String,
    pub result_map_id: String,
    pub parameter_type: String,
    pub result_type: String,
    pub default_vo_type: String,
    pub vo_name: String,
    pub default_vo_name: String,
    pub service_name: String,
    pub service_impl_name: String,
    pub mapper_name: String,
    pub controller_name: String,
    pub service_package: String,
    pub impl_package: String,
    pub web_package: String,
    /// Request mapping prefix, e.g. `/users`.
    pub url_prefix: String,
    /// Snake-cased directory for view pages.
    pub view_dir: String,
    pub columns: Vec<Column>,
    pub primary_key_columns: Vec<Column>,
    /// Generation date, `YYYY-MM-DD`.
    pub created_date: String,
    pub version: String,
}

impl RenderContext {
    pub fn has_primary_key(&self) -> bool {
        !self.primary_key_columns.is_empty()
    }

    /// Columns that an UPDATE may set: every non-key column.
    pub fn updatable_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| !c.is_primary_key()).collect()
    }

    /// True when key-addressed update statements make sense.
    pub fn supports_update(&self) -> bool {
        self.has_primary_key() && self.columns.len() > self.primary_key_columns.len()
    }
}

/// Resolve the effective base package: trimmed, or the default when unset/blank.
pub fn effective_base_package(base_package: Option<&str>) -> &str {
    base_package
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_BASE_PACKAGE)
}

/// Build the render context for a table, stamped with today's date.
pub fn build_context(table: &Table, base_package: Option<&str>) -> RenderContext {
    build_context_on(table, base_package, Local::now().date_naive())
}

/// Build the render context for a table with an explicit generation date.
pub fn build_context_on(
    table: &Table,
    base_package: Option<&str>,
    date: NaiveDate,
) -> RenderContext {
    let pkg = effective_base_package(base_package);
    let t = table.table_name();
    let service_package = format!("{pkg}.service");
    let impl_package = format!("{pkg}.service.impl");
    let class_name = lower_first(t);
    let view_dir = to_snake_case(t);

    RenderContext {
        base_package: pkg.to_string(),
        table_name: t.to_string(),
        source_table_name: table.source_name().to_string(),
        namespace: format!("{impl_package}.{t}Mapper"),
        result_map_id: format!("{class_name}Result"),
        parameter_type: format!("{service_package}.{t}VO"),
        result_type: format!("{service_package}.{t}VO"),
        default_vo_type: format!("{service_package}.{t}DefaultVO"),
        vo_name: format!("{t}VO"),
        default_vo_name: format!("{t}DefaultVO"),
        service_name: format!("{t}Service"),
        service_impl_name: format!("{t}ServiceImpl"),
        mapper_name: format!("{t}Mapper"),
        controller_name: format!("{t}Controller"),
        web_package: format!("{pkg}.web"),
        url_prefix: format!("/{view_dir}"),
        columns: table.columns().to_vec(),
        primary_key_columns: table.primary_key_columns().into_iter().cloned().collect(),
        created_date: date.format("%Y-%m-%d").to_string(),
        version: GENERATOR_VERSION.to_string(),
        class_name,
        view_dir,
        service_package,
        impl_package,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddlgen_core::Column;
    use rstest::rstest;

    fn users() -> Table {
        Table::new(
            "users",
            vec![
                Column::new("id", "INT", true),
                Column::new("user_name", "VARCHAR", false),
                Column::new("created_at", "TIMESTAMP", false),
            ],
        )
        .unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn derives_names_from_package_and_table() {
        let ctx = build_context_on(&users(), Some("com.acme.board"), date());

        assert_eq!(ctx.base_package, "com.acme.board");
        assert_eq!(ctx.table_name, "Users");
        assert_eq!(ctx.source_table_name, "users");
        assert_eq!(ctx.class_name, "users");
        assert_eq!(ctx.namespace, "com.acme.board.service.impl.UsersMapper");
        assert_eq!(ctx.result_map_id, "usersResult");
        assert_eq!(ctx.parameter_type, "com.acme.board.service.UsersVO");
        assert_eq!(ctx.result_type, "com.acme.board.service.UsersVO");
        assert_eq!(ctx.default_vo_type, "com.acme.board.service.UsersDefaultVO");
        assert_eq!(ctx.vo_name, "UsersVO");
        assert_eq!(ctx.default_vo_name, "UsersDefaultVO");
        assert_eq!(ctx.service_name, "UsersService");
        assert_eq!(ctx.service_impl_name, "UsersServiceImpl");
        assert_eq!(ctx.mapper_name, "UsersMapper");
        assert_eq!(ctx.controller_name, "UsersController");
        assert_eq!(ctx.service_package, "com.acme.board.service");
        assert_eq!(ctx.impl_package, "com.acme.board.service.impl");
        assert_eq!(ctx.web_package, "com.acme.board.web");
        assert_eq!(ctx.url_prefix, "/users");
        assert_eq!(ctx.view_dir, "users");
        assert_eq!(ctx.created_date, "2024-03-09");
        assert_eq!(ctx.version, GENERATOR_VERSION);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn missing_package_uses_default(#[case] pkg: Option<&str>) {
        let ctx = build_context_on(&users(), pkg, date());
        assert_eq!(ctx.base_package, DEFAULT_BASE_PACKAGE);
        assert_eq!(
            ctx.namespace,
            "egovframework.example.sample.service.impl.UsersMapper"
        );
    }

    #[test]
    fn columns_and_keys_keep_order() {
        let ctx = build_context_on(&users(), None, date());
        let names: Vec<&str> = ctx.columns.iter().map(|c| c.column_name()).collect();
        assert_eq!(names, vec!["id", "user_name", "created_at"]);
        assert_eq!(ctx.primary_key_columns.len(), 1);
        assert_eq!(ctx.primary_key_columns[0].column_name(), "id");
        assert!(ctx.has_primary_key());
        assert!(ctx.supports_update());
        assert_eq!(ctx.updatable_columns().len(), 2);
    }

    #[test]
    fn table_without_key_disables_update() {
        let table = Table::new("log_entry", vec![Column::new("msg", "TEXT", false)]).unwrap();
        let ctx = build_context_on(&table, None, date());
        assert!(!ctx.has_primary_key());
        assert!(!ctx.supports_update());
        assert_eq!(ctx.table_name, "Log_entry");
        assert_eq!(ctx.view_dir, "log_entry");
        assert_eq!(ctx.class_name, "log_entry");
    }

    #[test]
    fn identical_inputs_give_identical_contexts() {
        let a = build_context_on(&users(), Some("com.acme"), date());
        let b = build_context_on(&users(), Some("com.acme"), date());
        assert_eq!(a, b);
    }

    #[test]
    fn build_context_stamps_today() {
        let ctx = build_context(&users(), None);
        assert_eq!(
            ctx.created_date,
            Local::now().date_naive().format("%Y-%m-%d").to_string()
        );
    }

    #[test]
    fn serializes_camel_case_fields() {
        let ctx = build_context_on(&users(), None, date());
        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(value["tableName"], "Users");
        assert_eq!(value["resultMapId"], "usersResult");
        assert_eq!(value["columns"][1]["camelName"], "userName");
        assert_eq!(value["primaryKeyColumns"][0]["columnName"], "id");
        assert_eq!(value["createdDate"], "2024-03-09");
    }
}
