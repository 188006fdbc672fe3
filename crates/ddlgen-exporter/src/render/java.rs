use ddlgen_core::Column;
use ddlgen_naming::to_pascal_case;

use crate::context::RenderContext;
use crate::render::java_imports;

const INDENT: &str = "    ";

/// View names resolve under `/WEB-INF/jsp/`, matching the JSP routes.
const VIEW_ROOT: &str = "egovframework";

/// Search and paging properties carried by every DefaultVO: (type, name, initial value).
const SEARCH_PROPERTIES: [(&str, &str, &str); 8] = [
    ("String", "searchCondition", "\"\""),
    ("String", "searchKeyword", "\"\""),
    ("int", "pageIndex", "1"),
    ("int", "pageUnit", "10"),
    ("int", "pageSize", "10"),
    ("int", "firstIndex", "1"),
    ("int", "lastIndex", "1"),
    ("int", "recordCountPerPage", "10"),
];

/// Whether a property of this name is inherited from the DefaultVO.
fn is_search_property(name: &str) -> bool {
    SEARCH_PROPERTIES.iter().any(|(_, property, _)| *property == name)
}

/// A data-access method shared by the mapper, the service and its implementation.
struct Method {
    returns: String,
    name: String,
    param_type: String,
    param_name: &'static str,
}

impl Method {
    fn signature(&self) -> String {
        format!(
            "{} {}({} {}) throws Exception",
            self.returns, self.name, self.param_type, self.param_name
        )
    }

    fn is_void(&self) -> bool {
        self.returns == "void"
    }
}

fn data_methods(ctx: &RenderContext) -> Vec<Method> {
    let t = &ctx.table_name;
    let vo = ctx.vo_name.as_str();
    let default_vo = ctx.default_vo_name.as_str();
    let method = |returns: String, name: String, param_type: &str, param_name| Method {
        returns,
        name,
        param_type: param_type.to_string(),
        param_name,
    };

    let mut methods = vec![
        method(
            format!("List<{vo}>"),
            format!("select{t}List"),
            default_vo,
            "searchVO",
        ),
        method("int".into(), format!("select{t}ListTotCnt"), default_vo, "searchVO"),
    ];
    if ctx.has_primary_key() {
        methods.push(method(vo.to_string(), format!("select{t}"), vo, "vo"));
    }
    methods.push(method("void".into(), format!("insert{t}"), vo, "vo"));
    if ctx.supports_update() {
        methods.push(method("void".into(), format!("update{t}"), vo, "vo"));
    }
    if ctx.has_primary_key() {
        methods.push(method("void".into(), format!("delete{t}"), vo, "vo"));
    }
    methods
}

fn render_header(lines: &mut Vec<String>, package: &str, import_groups: &[Vec<String>]) {
    lines.push(format!("package {package};"));
    lines.push(String::new());
    for group in import_groups.iter().filter(|g| !g.is_empty()) {
        for import in group {
            lines.push(format!("import {import};"));
        }
        lines.push(String::new());
    }
}

fn render_class_doc(lines: &mut Vec<String>, summary: &str, ctx: &RenderContext) {
    lines.push("/**".into());
    lines.push(format!(" * {summary}"));
    lines.push(" *".into());
    lines.push(format!(" * @since {}", ctx.created_date));
    lines.push(format!(" * @version ddlgen {}", ctx.version));
    lines.push(" */".into());
}

fn render_accessors(lines: &mut Vec<String>, ty: &str, name: &str) {
    let pascal = to_pascal_case(name);
    lines.push(String::new());
    lines.push(format!("{INDENT}public {ty} get{pascal}() {{"));
    lines.push(format!("{INDENT}{INDENT}return {name};"));
    lines.push(format!("{INDENT}}}"));
    lines.push(String::new());
    lines.push(format!("{INDENT}public void set{pascal}({ty} {name}) {{"));
    lines.push(format!("{INDENT}{INDENT}this.{name} = {name};"));
    lines.push(format!("{INDENT}}}"));
}

fn service_imports(ctx: &RenderContext, names: &[&str]) -> Vec<String> {
    names
        .iter()
        .map(|n| format!("{}.{n}", ctx.service_package))
        .collect()
}

/// Render the value object bean with one property per column.
pub fn render_vo(ctx: &RenderContext) -> String {
    let columns: Vec<&Column> = ctx
        .columns
        .iter()
        .filter(|column| {
            let inherited = is_search_property(column.camel_name());
            if inherited {
                log::warn!(
                    "{}.{} maps to {}, already declared by {}; property not redeclared",
                    ctx.source_table_name,
                    column.column_name(),
                    column.camel_name(),
                    ctx.default_vo_name
                );
            }
            !inherited
        })
        .collect();
    let imports: Vec<String> = java_imports(columns.iter().copied())
        .into_iter()
        .map(String::from)
        .collect();

    let mut lines: Vec<String> = Vec::new();
    render_header(&mut lines, &ctx.service_package, &[imports]);
    render_class_doc(
        &mut lines,
        &format!("Value object for the {} table.", ctx.source_table_name),
        ctx,
    );
    lines.push(format!(
        "public class {} extends {} {{",
        ctx.vo_name, ctx.default_vo_name
    ));
    lines.push(String::new());
    lines.push(format!(
        "{INDENT}private static final long serialVersionUID = 1L;"
    ));

    for column in &columns {
        lines.push(String::new());
        lines.push(format!("{INDENT}/** {} */", column.column_name()));
        lines.push(format!(
            "{INDENT}private {} {};",
            column.simple_host_type(),
            column.camel_name()
        ));
    }

    for column in &columns {
        render_accessors(&mut lines, column.simple_host_type(), column.camel_name());
    }

    lines.push("}".into());
    lines.push(String::new());

    lines.join("\n")
}

/// Render the search/paging base bean.
pub fn render_default_vo(ctx: &RenderContext) -> String {
    let mut lines: Vec<String> = Vec::new();
    render_header(
        &mut lines,
        &ctx.service_package,
        &[vec!["java.io.Serializable".into()]],
    );
    render_class_doc(
        &mut lines,
        &format!("Search and paging conditions for the {} table.", ctx.source_table_name),
        ctx,
    );
    lines.push(format!(
        "public class {} implements Serializable {{",
        ctx.default_vo_name
    ));
    lines.push(String::new());
    lines.push(format!(
        "{INDENT}private static final long serialVersionUID = 1L;"
    ));
    lines.push(String::new());

    for (ty, name, init) in SEARCH_PROPERTIES {
        lines.push(format!("{INDENT}private {ty} {name} = {init};"));
    }

    for (ty, name, _) in SEARCH_PROPERTIES {
        render_accessors(&mut lines, ty, name);
    }

    lines.push("}".into());
    lines.push(String::new());

    lines.join("\n")
}

/// Render the data-access mapper interface bound to the mapper XML namespace.
pub fn render_mapper(ctx: &RenderContext) -> String {
    let mut lines: Vec<String> = Vec::new();
    render_header(
        &mut lines,
        &ctx.impl_package,
        &[
            vec!["java.util.List".into()],
            vec!["org.egovframe.rte.psl.dataaccess.mapper.Mapper".into()],
            service_imports(ctx, &[ctx.default_vo_name.as_str(), ctx.vo_name.as_str()]),
        ],
    );
    render_class_doc(
        &mut lines,
        &format!("Data access for the {} table.", ctx.source_table_name),
        ctx,
    );
    lines.push(format!("@Mapper(\"{}Mapper\")", ctx.class_name));
    lines.push(format!("public interface {} {{", ctx.mapper_name));

    for method in data_methods(ctx) {
        lines.push(String::new());
        lines.push(format!("{INDENT}{};", method.signature()));
    }

    lines.push("}".into());
    lines.push(String::new());

    lines.join("\n")
}

/// Render the service interface.
pub fn render_service(ctx: &RenderContext) -> String {
    let mut lines: Vec<String> = Vec::new();
    render_header(&mut lines, &ctx.service_package, &[vec!["java.util.List".into()]]);
    render_class_doc(
        &mut lines,
        &format!("Business operations for the {} table.", ctx.source_table_name),
        ctx,
    );
    lines.push(format!("public interface {} {{", ctx.service_name));

    for method in data_methods(ctx) {
        lines.push(String::new());
        lines.push(format!("{INDENT}{};", method.signature()));
    }

    lines.push("}".into());
    lines.push(String::new());

    lines.join("\n")
}

/// Render the service implementation delegating to the mapper.
pub fn render_service_impl(ctx: &RenderContext) -> String {
    let mapper_field = format!("{}Mapper", ctx.class_name);

    let mut lines: Vec<String> = Vec::new();
    render_header(
        &mut lines,
        &ctx.impl_package,
        &[
            vec!["java.util.List".into()],
            vec!["javax.annotation.Resource".into()],
            vec![
                "org.egovframe.rte.fdl.cmmn.EgovAbstractServiceImpl".into(),
                "org.springframework.stereotype.Service".into(),
            ],
            service_imports(
                ctx,
                &[
                    ctx.default_vo_name.as_str(),
                    ctx.service_name.as_str(),
                    ctx.vo_name.as_str(),
                ],
            ),
        ],
    );
    render_class_doc(
        &mut lines,
        &format!("Default {} implementation.", ctx.service_name),
        ctx,
    );
    lines.push(format!("@Service(\"{}Service\")", ctx.class_name));
    lines.push(format!(
        "public class {} extends EgovAbstractServiceImpl implements {} {{",
        ctx.service_impl_name, ctx.service_name
    ));
    lines.push(String::new());
    lines.push(format!("{INDENT}@Resource(name = \"{mapper_field}\")"));
    lines.push(format!("{INDENT}private {} {mapper_field};", ctx.mapper_name));

    for method in data_methods(ctx) {
        let call = format!("{mapper_field}.{}({})", method.name, method.param_name);
        lines.push(String::new());
        lines.push(format!("{INDENT}@Override"));
        lines.push(format!("{INDENT}public {} {{", method.signature()));
        if method.is_void() {
            lines.push(format!("{INDENT}{INDENT}{call};"));
        } else {
            lines.push(format!("{INDENT}{INDENT}return {call};"));
        }
        lines.push(format!("{INDENT}}}"));
    }

    lines.push("}".into());
    lines.push(String::new());

    lines.join("\n")
}

/// Render the Spring MVC controller serving the list and register pages.
pub fn render_controller(ctx: &RenderContext) -> String {
    let t = &ctx.table_name;
    let url = &ctx.url_prefix;
    let service_field = format!("{}Service", ctx.class_name);
    let model_name = format!("{}VO", ctx.class_name);
    let list_view = format!("{VIEW_ROOT}/{}/{t}List", ctx.view_dir);
    let register_view = format!("{VIEW_ROOT}/{}/{t}Register", ctx.view_dir);
    let redirect = format!("redirect:{url}/list.do");

    let mut lines: Vec<String> = Vec::new();
    render_header(
        &mut lines,
        &ctx.web_package,
        &[
            vec!["java.util.List".into()],
            vec!["javax.annotation.Resource".into()],
            vec![
                "org.springframework.stereotype.Controller".into(),
                "org.springframework.ui.Model".into(),
                "org.springframework.web.bind.annotation.ModelAttribute".into(),
                "org.springframework.web.bind.annotation.RequestMapping".into(),
                "org.springframework.web.bind.annotation.RequestMethod".into(),
                "org.springframework.web.bind.support.SessionStatus".into(),
            ],
            service_imports(
                ctx,
                &[
                    ctx.default_vo_name.as_str(),
                    ctx.service_name.as_str(),
                    ctx.vo_name.as_str(),
                ],
            ),
        ],
    );
    render_class_doc(
        &mut lines,
        &format!("Web entry points for the {} table.", ctx.source_table_name),
        ctx,
    );
    lines.push("@Controller".into());
    lines.push(format!("public class {} {{", ctx.controller_name));
    lines.push(String::new());
    lines.push(format!("{INDENT}@Resource(name = \"{service_field}\")"));
    lines.push(format!("{INDENT}private {} {service_field};", ctx.service_name));

    // List
    lines.push(String::new());
    lines.push(format!("{INDENT}@RequestMapping(value = \"{url}/list.do\")"));
    lines.push(format!(
        "{INDENT}public String select{t}List(@ModelAttribute(\"searchVO\") {} searchVO, Model model) throws Exception {{",
        ctx.default_vo_name
    ));
    lines.push(format!(
        "{INDENT}{INDENT}searchVO.setFirstIndex((searchVO.getPageIndex() - 1) * searchVO.getPageUnit());"
    ));
    lines.push(format!(
        "{INDENT}{INDENT}searchVO.setRecordCountPerPage(searchVO.getPageUnit());"
    ));
    lines.push(format!(
        "{INDENT}{INDENT}List<{}> resultList = {service_field}.select{t}List(searchVO);",
        ctx.vo_name
    ));
    lines.push(format!(
        "{INDENT}{INDENT}model.addAttribute(\"resultList\", resultList);"
    ));
    lines.push(format!(
        "{INDENT}{INDENT}model.addAttribute(\"totCnt\", {service_field}.select{t}ListTotCnt(searchVO));"
    ));
    lines.push(format!("{INDENT}{INDENT}return \"{list_view}\";"));
    lines.push(format!("{INDENT}}}"));

    // Register form
    lines.push(String::new());
    lines.push(format!("{INDENT}@RequestMapping(value = \"{url}/addView.do\")"));
    lines.push(format!(
        "{INDENT}public String add{t}View(@ModelAttribute(\"searchVO\") {} searchVO, Model model) throws Exception {{",
        ctx.default_vo_name
    ));
    lines.push(format!(
        "{INDENT}{INDENT}model.addAttribute(\"{model_name}\", new {}());",
        ctx.vo_name
    ));
    lines.push(format!("{INDENT}{INDENT}return \"{register_view}\";"));
    lines.push(format!("{INDENT}}}"));

    render_form_action(&mut lines, ctx, "add", &format!("insert{t}"), &redirect);

    if ctx.has_primary_key() {
        lines.push(String::new());
        lines.push(format!("{INDENT}@RequestMapping(value = \"{url}/updateView.do\")"));
        lines.push(format!(
            "{INDENT}public String update{t}View(@ModelAttribute(\"{model_name}\") {} {model_name}, Model model) throws Exception {{",
            ctx.vo_name
        ));
        lines.push(format!(
            "{INDENT}{INDENT}model.addAttribute(\"{model_name}\", {service_field}.select{t}({model_name}));"
        ));
        lines.push(format!("{INDENT}{INDENT}return \"{register_view}\";"));
        lines.push(format!("{INDENT}}}"));
    }

    if ctx.supports_update() {
        render_form_action(&mut lines, ctx, "update", &format!("update{t}"), &redirect);
    }

    if ctx.has_primary_key() {
        render_form_action(&mut lines, ctx, "delete", &format!("delete{t}"), &redirect);
    }

    lines.push("}".into());
    lines.push(String::new());

    lines.join("\n")
}

/// POST handler that forwards the bound VO to one service call and redirects.
fn render_form_action(
    lines: &mut Vec<String>,
    ctx: &RenderContext,
    action: &str,
    service_method: &str,
    redirect: &str,
) {
    let service_field = format!("{}Service", ctx.class_name);
    let model_name = format!("{}VO", ctx.class_name);

    lines.push(String::new());
    lines.push(format!(
        "{INDENT}@RequestMapping(value = \"{}/{action}.do\", method = RequestMethod.POST)",
        ctx.url_prefix
    ));
    lines.push(format!(
        "{INDENT}public String {service_method}(@ModelAttribute(\"{model_name}\") {} {model_name}, SessionStatus status) throws Exception {{",
        ctx.vo_name
    ));
    lines.push(format!(
        "{INDENT}{INDENT}{service_field}.{service_method}({model_name});"
    ));
    lines.push(format!("{INDENT}{INDENT}status.setComplete();"));
    lines.push(format!("{INDENT}{INDENT}return \"{redirect}\";"));
    lines.push(format!("{INDENT}}}"));
}
