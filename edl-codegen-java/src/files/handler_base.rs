//! The shared handler base unit: response mapping and aggregate rendering.

use edl_codegen::CodeFragment;
use edl_ir::{Spec, Value};

use crate::ast::{JavaClass, JavaField, JavaMethod, str_lit};
use crate::java_file::JavaFile;
use crate::naming::HANDLER_BASE_CLASS;

const MAP: &str = "Map<String, Object>";
const INFOS: &str = "List<Map<String, Object>>";

/// Renders `ExceptionHandlerBase`: the container-response template as a
/// nested `Map.ofEntries`/`List.of` literal, the response-field rename
/// mapping, and the runtime mirror of the aggregate rendering visitor.
pub struct HandlerBase<'a> {
    spec: &'a Spec,
}

impl<'a> HandlerBase<'a> {
    pub fn new(spec: &'a Spec) -> Self {
        Self { spec }
    }

    pub fn class_name(&self) -> &'static str {
        HANDLER_BASE_CLASS
    }

    pub fn render(&self) -> String {
        let template_literal = match &self.spec.container_response {
            Some(template) => template_literal(template),
            None => "Map.of()".to_string(),
        };

        let mut map_response = JavaMethod::new("protected", MAP, "mapResponse")
            .param(MAP, "info")
            .line(format!("{MAP} body = new LinkedHashMap<>();"));
        for (field, public_key) in &self.spec.response_fields {
            map_response = map_response.fragment(CodeFragment::braced(
                format!("if (info.containsKey({}))", str_lit(field)),
                vec![CodeFragment::line(format!(
                    "body.put({}, info.get({}));",
                    str_lit(public_key),
                    str_lit(field)
                ))],
            ));
        }
        map_response = map_response.line("return body;");

        let render_container = JavaMethod::new("protected", "Object", "renderContainerTemplate")
            .param("Object", "template")
            .param(INFOS, "infos")
            .fragment(CodeFragment::braced(
                "if (template instanceof Map)",
                vec![
                    CodeFragment::line(format!("{MAP} result = new LinkedHashMap<>();")),
                    CodeFragment::line(format!("{MAP} map = ({MAP}) template;")),
                    CodeFragment::braced(
                        "for (Map.Entry<String, Object> entry : map.entrySet())",
                        vec![CodeFragment::line(
                            "result.put(entry.getKey(), \
                             renderContainerTemplate(entry.getValue(), infos));",
                        )],
                    ),
                    CodeFragment::line("return result;"),
                ],
            ))
            .fragment(CodeFragment::braced(
                "if (template instanceof List)",
                vec![
                    CodeFragment::line("List<?> list = (List<?>) template;"),
                    CodeFragment::braced(
                        "if (list.size() == 1)",
                        vec![
                            CodeFragment::line("List<Object> rendered = new ArrayList<>();"),
                            CodeFragment::braced(
                                format!("for ({MAP} info : infos)"),
                                vec![CodeFragment::line(
                                    "rendered.add(renderValue(list.get(0), info));",
                                )],
                            ),
                            CodeFragment::line("return rendered;"),
                        ],
                    ),
                    CodeFragment::line("return list;"),
                ],
            ))
            .line("return template;");

        let render_value = JavaMethod::new("protected", "Object", "renderValue")
            .param("Object", "template")
            .param(MAP, "info")
            .fragment(CodeFragment::braced(
                "if (template instanceof Map)",
                vec![
                    CodeFragment::line(format!("{MAP} result = new LinkedHashMap<>();")),
                    CodeFragment::line(format!("{MAP} map = ({MAP}) template;")),
                    CodeFragment::braced(
                        "for (Map.Entry<String, Object> entry : map.entrySet())",
                        vec![CodeFragment::line(
                            "result.put(entry.getKey(), renderValue(entry.getValue(), info));",
                        )],
                    ),
                    CodeFragment::line("return result;"),
                ],
            ))
            .fragment(CodeFragment::braced(
                "if (template instanceof List)",
                vec![
                    CodeFragment::line("List<?> list = (List<?>) template;"),
                    CodeFragment::line("List<Object> rendered = new ArrayList<>();"),
                    CodeFragment::braced(
                        "for (Object entry : list)",
                        vec![CodeFragment::line("rendered.add(renderValue(entry, info));")],
                    ),
                    CodeFragment::line("return rendered;"),
                ],
            ))
            .fragment(CodeFragment::braced(
                "if (template instanceof String)",
                vec![
                    CodeFragment::line("String key = (String) template;"),
                    CodeFragment::braced(
                        "if (info.containsKey(key))",
                        vec![CodeFragment::line("return info.get(key);")],
                    ),
                    CodeFragment::line("return key;"),
                ],
            ))
            .line("return template;");

        let class = JavaClass::new(HANDLER_BASE_CLASS)
            .modifier("abstract")
            .field(
                JavaField::new("protected static final", "Object", "CONTAINER_TEMPLATE")
                    .init(template_literal),
            )
            .method(map_response)
            .method(render_container)
            .method(render_value);

        JavaFile::new(&self.spec.package, class)
            .import("java.util.ArrayList")
            .import("java.util.LinkedHashMap")
            .import("java.util.List")
            .import("java.util.Map")
            .render()
    }
}

/// Render a container-response template value as a Java literal over
/// `Map.ofEntries`/`List.of`.
fn template_literal(value: &Value) -> String {
    match value {
        Value::Map(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("Map.entry({}, {})", str_lit(k), template_literal(v)))
                .collect();
            format!("Map.ofEntries({})", entries.join(", "))
        }
        Value::List(list) => {
            let items: Vec<String> = list.iter().map(template_literal).collect();
            format!("List.of({})", items.join(", "))
        }
        Value::String(s) => str_lit(s),
        Value::Int(n) => {
            if i32::try_from(*n).is_ok() {
                n.to_string()
            } else {
                format!("{n}L")
            }
        }
        Value::Bool(b) => b.to_string(),
        Value::Null => str_lit("null"),
    }
}
