use crate::context::RenderContext;

const INDENT: &str = "    ";

fn render_directives(lines: &mut Vec<String>, with_form: bool) {
    lines.push(r#"<%@ page contentType="text/html; charset=utf-8" pageEncoding="utf-8" %>"#.into());
    lines.push(r#"<%@ taglib prefix="c" uri="http://java.sun.com/jsp/jstl/core" %>"#.into());
    if with_form {
        lines.push(
            r#"<%@ taglib prefix="form" uri="http://www.springframework.org/tags/form" %>"#.into(),
        );
    }
}

fn render_head(lines: &mut Vec<String>, ctx: &RenderContext, title: &str) {
    lines.push(format!(
        "<%-- Generated by ddlgen {} on {} --%>",
        ctx.version, ctx.created_date
    ));
    lines.push("<!DOCTYPE html>".into());
    lines.push("<html>".into());
    lines.push("<head>".into());
    lines.push(format!("{INDENT}<meta charset=\"utf-8\">"));
    lines.push(format!("{INDENT}<title>{title}</title>"));
    lines.push("</head>".into());
    lines.push("<body>".into());
    lines.push(format!("<h2>{title}</h2>"));
}

fn render_tail(lines: &mut Vec<String>) {
    lines.push("</body>".into());
    lines.push("</html>".into());
    lines.push(String::new());
}

/// Render the paged list page backed by `{url}/list.do`.
pub fn render_list(ctx: &RenderContext) -> String {
    let url = &ctx.url_prefix;
    let i2 = INDENT.repeat(2);
    let i3 = INDENT.repeat(3);
    let i4 = INDENT.repeat(4);
    let colspan = ctx.columns.len() + usize::from(ctx.has_primary_key());

    let mut lines: Vec<String> = Vec::new();
    render_directives(&mut lines, false);
    render_head(&mut lines, ctx, &format!("{} List", ctx.table_name));

    lines.push(format!(
        "<form id=\"listForm\" name=\"listForm\" action=\"<c:url value='{url}/list.do'/>\" method=\"post\">"
    ));
    lines.push(format!(
        "{INDENT}<input type=\"hidden\" name=\"pageIndex\" value=\"<c:out value='${{searchVO.pageIndex}}'/>\"/>"
    ));
    lines.push(format!("{INDENT}<table>"));
    lines.push(format!("{i2}<thead>"));
    lines.push(format!("{i3}<tr>"));
    for column in &ctx.columns {
        lines.push(format!("{i4}<th>{}</th>", column.column_name()));
    }
    if ctx.has_primary_key() {
        lines.push(format!("{i4}<th></th>"));
    }
    lines.push(format!("{i3}</tr>"));
    lines.push(format!("{i2}</thead>"));
    lines.push(format!("{i2}<tbody>"));
    lines.push(format!(
        "{i2}<c:forEach var=\"result\" items=\"${{resultList}}\">"
    ));
    lines.push(format!("{i3}<tr>"));
    for column in &ctx.columns {
        lines.push(format!(
            "{i4}<td><c:out value=\"${{result.{}}}\"/></td>",
            column.camel_name()
        ));
    }
    if ctx.has_primary_key() {
        lines.push(format!("{i4}<td>"));
        lines.push(format!(
            "{i4}{INDENT}<c:url var=\"editUrl\" value=\"{url}/updateView.do\">"
        ));
        for key in &ctx.primary_key_columns {
            lines.push(format!(
                "{i4}{i2}<c:param name=\"{0}\" value=\"${{result.{0}}}\"/>",
                key.camel_name()
            ));
        }
        lines.push(format!("{i4}{INDENT}</c:url>"));
        lines.push(format!("{i4}{INDENT}<a href=\"${{editUrl}}\">Edit</a>"));
        lines.push(format!("{i4}</td>"));
    }
    lines.push(format!("{i3}</tr>"));
    lines.push(format!("{i2}</c:forEach>"));
    lines.push(format!("{i2}<c:if test=\"${{empty resultList}}\">"));
    lines.push(format!(
        "{i3}<tr><td colspan=\"{colspan}\">No data.</td></tr>"
    ));
    lines.push(format!("{i2}</c:if>"));
    lines.push(format!("{i2}</tbody>"));
    lines.push(format!("{INDENT}</table>"));
    lines.push(format!(
        "{INDENT}<p>Total: <c:out value=\"${{totCnt}}\"/></p>"
    ));
    lines.push(format!(
        "{INDENT}<a href=\"<c:url value='{url}/addView.do'/>\">Register</a>"
    ));
    lines.push("</form>".into());

    render_tail(&mut lines);
    lines.join("\n")
}

/// Render the create/edit form page.
///
/// Tables with a primary key switch to edit mode when the bound object
/// already carries a key value.
pub fn render_register(ctx: &RenderContext) -> String {
    let url = &ctx.url_prefix;
    let model = format!("{}VO", ctx.class_name);
    let i2 = INDENT.repeat(2);
    let i3 = INDENT.repeat(3);

    let mut lines: Vec<String> = Vec::new();
    render_directives(&mut lines, true);
    render_head(&mut lines, ctx, &format!("{} Register", ctx.table_name));

    match ctx.primary_key_columns.first() {
        Some(key) => lines.push(format!(
            "<c:set var=\"editing\" value=\"${{not empty {model}.{}}}\"/>",
            key.camel_name()
        )),
        None => lines.push("<c:set var=\"editing\" value=\"false\"/>".into()),
    }
    let action = if ctx.supports_update() {
        "${editing ? 'update' : 'add'}"
    } else {
        "add"
    };
    lines.push(format!(
        "<form:form modelAttribute=\"{model}\" id=\"detailForm\" name=\"detailForm\" method=\"post\" action=\"${{pageContext.request.contextPath}}{url}/{action}.do\">"
    ));
    lines.push(format!("{INDENT}<table>"));
    for column in &ctx.columns {
        let name = column.camel_name();
        lines.push(format!("{i2}<tr>"));
        lines.push(format!(
            "{i3}<th><label for=\"{name}\">{}</label></th>",
            column.column_name()
        ));
        lines.push(format!("{i3}<td><form:input path=\"{name}\"/></td>"));
        lines.push(format!("{i2}</tr>"));
    }
    lines.push(format!("{INDENT}</table>"));
    lines.push(format!("{INDENT}<button type=\"submit\">Save</button>"));
    if ctx.has_primary_key() {
        lines.push(format!("{INDENT}<c:if test=\"${{editing}}\">"));
        lines.push(format!(
            "{i2}<button type=\"submit\" formaction=\"${{pageContext.request.contextPath}}{url}/delete.do\">Delete</button>"
        ));
        lines.push(format!("{INDENT}</c:if>"));
    }
    lines.push(format!(
        "{INDENT}<a href=\"<c:url value='{url}/list.do'/>\">List</a>"
    ));
    lines.push("</form:form>".into());

    render_tail(&mut lines);
    lines.join("\n")
}
