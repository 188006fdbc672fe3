use crate::context::RenderContext;
use crate::render::{bind, key_predicate};

const INDENT: &str = "    ";

/// Render the MyBatis mapper XML.
///
/// Key-addressed statements (select one, update, delete) are emitted only
/// when the table has a primary key.
pub fn render_mapper_xml(ctx: &RenderContext) -> String {
    let t = &ctx.table_name;
    let src = &ctx.source_table_name;
    let column_list: Vec<String> = ctx
        .columns
        .iter()
        .map(|c| c.column_name().to_string())
        .collect();

    let mut lines: Vec<String> = Vec::new();
    lines.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.into());
    lines.push(
        r#"<!DOCTYPE mapper PUBLIC "-//mybatis.org//DTD Mapper 3.0//EN" "http://mybatis.org/dtd/mybatis-3-mapper.dtd">"#
            .into(),
    );
    lines.push(format!("<!-- Generated by ddlgen {} on {} -->", ctx.version, ctx.created_date));
    lines.push(format!("<mapper namespace=\"{}\">", ctx.namespace));
    lines.push(String::new());

    render_result_map(&mut lines, ctx);

    // List with paging
    lines.push(format!(
        "{INDENT}<select id=\"select{t}List\" parameterType=\"{}\" resultMap=\"{}\">",
        ctx.default_vo_type, ctx.result_map_id
    ));
    render_select_columns(&mut lines, &column_list);
    lines.push(format!("{INDENT}{INDENT}FROM {src}"));
    if ctx.has_primary_key() {
        let order: Vec<String> = ctx
            .primary_key_columns
            .iter()
            .map(|c| format!("{} DESC", c.column_name()))
            .collect();
        lines.push(format!("{INDENT}{INDENT}ORDER BY {}", order.join(", ")));
    }
    lines.push(format!(
        "{INDENT}{INDENT}LIMIT #{{recordCountPerPage}} OFFSET #{{firstIndex}}"
    ));
    lines.push(format!("{INDENT}</select>"));
    lines.push(String::new());

    lines.push(format!(
        "{INDENT}<select id=\"select{t}ListTotCnt\" parameterType=\"{}\" resultType=\"int\">",
        ctx.default_vo_type
    ));
    lines.push(format!("{INDENT}{INDENT}SELECT COUNT(*) totcnt"));
    lines.push(format!("{INDENT}{INDENT}FROM {src}"));
    lines.push(format!("{INDENT}</select>"));
    lines.push(String::new());

    if ctx.has_primary_key() {
        lines.push(format!(
            "{INDENT}<select id=\"select{t}\" parameterType=\"{}\" resultMap=\"{}\">",
            ctx.parameter_type, ctx.result_map_id
        ));
        render_select_columns(&mut lines, &column_list);
        lines.push(format!("{INDENT}{INDENT}FROM {src}"));
        lines.push(format!("{INDENT}{INDENT}WHERE {}", key_predicate(ctx)));
        lines.push(format!("{INDENT}</select>"));
        lines.push(String::new());
    }

    // Insert
    let values: Vec<String> = ctx.columns.iter().map(bind).collect();
    lines.push(format!(
        "{INDENT}<insert id=\"insert{t}\" parameterType=\"{}\">",
        ctx.parameter_type
    ));
    lines.push(format!(
        "{INDENT}{INDENT}INSERT INTO {src} ({})",
        column_list.join(", ")
    ));
    lines.push(format!("{INDENT}{INDENT}VALUES ({})", values.join(", ")));
    lines.push(format!("{INDENT}</insert>"));
    lines.push(String::new());

    if ctx.supports_update() {
        let assignments: Vec<String> = ctx
            .updatable_columns()
            .into_iter()
            .map(|c| format!("{} = {}", c.column_name(), bind(c)))
            .collect();
        lines.push(format!(
            "{INDENT}<update id=\"update{t}\" parameterType=\"{}\">",
            ctx.parameter_type
        ));
        lines.push(format!("{INDENT}{INDENT}UPDATE {src}"));
        lines.push(format!("{INDENT}{INDENT}SET {}", assignments.join(", ")));
        lines.push(format!("{INDENT}{INDENT}WHERE {}", key_predicate(ctx)));
        lines.push(format!("{INDENT}</update>"));
        lines.push(String::new());
    }

    if ctx.has_primary_key() {
        lines.push(format!(
            "{INDENT}<delete id=\"delete{t}\" parameterType=\"{}\">",
            ctx.parameter_type
        ));
        lines.push(format!("{INDENT}{INDENT}DELETE FROM {src}"));
        lines.push(format!("{INDENT}{INDENT}WHERE {}", key_predicate(ctx)));
        lines.push(format!("{INDENT}</delete>"));
        lines.push(String::new());
    }

    lines.push("</mapper>".into());
    lines.push(String::new());

    lines.join("\n")
}

fn render_result_map(lines: &mut Vec<String>, ctx: &RenderContext) {
    lines.push(format!(
        "{INDENT}<resultMap id=\"{}\" type=\"{}\">",
        ctx.result_map_id, ctx.result_type
    ));
    for column in &ctx.columns {
        let tag = if column.is_primary_key() { "id" } else { "result" };
        lines.push(format!(
            "{INDENT}{INDENT}<{tag} property=\"{}\" column=\"{}\"/>",
            column.camel_name(),
            column.column_name()
        ));
    }
    lines.push(format!("{INDENT}</resultMap>"));
    lines.push(String::new());
}

fn render_select_columns(lines: &mut Vec<String>, column_list: &[String]) {
    lines.push(format!("{INDENT}{INDENT}SELECT"));
    let last = column_list.len().saturating_sub(1);
    for (i, name) in column_list.iter().enumerate() {
        let sep = if i == last { "" } else { "," };
        lines.push(format!("{INDENT}{INDENT}{INDENT}{name}{sep}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures;

    #[test]
    fn renders_result_map_with_key_tag() {
        let xml = render_mapper_xml(&fixtures::users());
        assert!(xml.contains(
            "<resultMap id=\"usersResult\" type=\"com.acme.board.service.UsersVO\">"
        ));
        assert!(xml.contains("<id property=\"id\" column=\"id\"/>"));
        assert!(xml.contains("<result property=\"userName\" column=\"user_name\"/>"));
        assert!(xml.contains("<result property=\"createdAt\" column=\"created_at\"/>"));
    }

    #[test]
    fn renders_crud_statements() {
        let xml = render_mapper_xml(&fixtures::users());
        assert!(xml.contains("<select id=\"selectUsersList\""));
        assert!(xml.contains("ORDER BY id DESC"));
        assert!(xml.contains("LIMIT #{recordCountPerPage} OFFSET #{firstIndex}"));
        assert!(xml.contains("<select id=\"selectUsersListTotCnt\""));
        assert!(xml.contains("<select id=\"selectUsers\""));
        assert!(xml.contains("INSERT INTO users (id, user_name, balance, created_at)"));
        assert!(xml.contains("VALUES (#{id}, #{userName}, #{balance}, #{createdAt})"));
        assert!(xml.contains(
            "SET user_name = #{userName}, balance = #{balance}, created_at = #{createdAt}"
        ));
        assert!(xml.contains("DELETE FROM users"));
        assert_eq!(xml.matches("WHERE id = #{id}").count(), 3);
        assert!(xml.trim_end().ends_with("</mapper>"));
    }

    #[test]
    fn select_columns_have_no_trailing_comma() {
        let xml = render_mapper_xml(&fixtures::users());
        assert!(xml.contains("            created_at\n        FROM users"));
    }

    #[test]
    fn keyless_table_omits_key_statements() {
        let xml = render_mapper_xml(&fixtures::keyless());
        assert!(xml.contains("<select id=\"selectAudit_logList\""));
        assert!(xml.contains("<insert id=\"insertAudit_log\""));
        assert!(!xml.contains("<select id=\"selectAudit_log\" "));
        assert!(!xml.contains("<update"));
        assert!(!xml.contains("<delete"));
        assert!(!xml.contains("ORDER BY"));
        assert!(!xml.contains("<id "));
    }

    #[test]
    fn composite_key_joins_predicates() {
        let xml = render_mapper_xml(&fixtures::order_line());
        assert!(xml.contains("WHERE order_id = #{orderId} AND line_no = #{lineNo}"));
        assert!(xml.contains("ORDER BY order_id DESC, line_no DESC\n"));
        assert!(xml.contains("SET qty = #{qty}"));
    }
}
