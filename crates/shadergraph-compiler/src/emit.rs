//! GLSL emission (spec §5.4): one statement per scheduled node, built from
//! the operator table's declarative templates. Three things don't fall out
//! of plain template substitution and get special treatment here:
//!
//! - a destructor's multi-output ports (`x`/`y`/`z`/`w`) are resolved at the
//!   *consuming* edge, not the destructor itself, by appending `.<port>` to
//!   the source variable;
//! - `fragment_output`'s input is coerced to `vec4` according to its
//!   resolved type rather than passed through verbatim;
//! - `custom_code` splices a parameter's text directly and is scanned for
//!   uniform/helper references it doesn't declare through the static table.

use std::collections::{HashMap, HashSet};

use shadergraph_ir::{sanitize_id, NodeKind};

use crate::infer::{port_name, TypeMap};
use crate::operators::{self, GlslType, OutputType};
use crate::validate::ValidatedGraph;

const KNOWN_UNIFORMS: &[&str] = &["iResolution", "iTime", "iMouse"];
const KNOWN_HELPERS: &[&str] = &["perlin", "simplex", "sdf_torus_dist"];

/// The emitter's output: one GLSL statement per node plus the accumulated
/// uniform and helper dependencies those statements pulled in.
#[derive(Debug, Clone)]
pub struct Emitted {
    pub statements: Vec<String>,
    pub uniforms: HashSet<&'static str>,
    /// Helper names in first-required order; duplicates removed.
    pub helpers: Vec<&'static str>,
}

fn incoming<'a>(graph: &'a ValidatedGraph, target: &str, target_port: &str) -> Option<(&'a str, &'a str)> {
    graph
        .edges()
        .iter()
        .rev()
        .find(|e| e.target == target && e.target_port == target_port)
        .map(|e| (e.source.as_str(), e.source_port.as_str()))
}

/// The expression a consumer substitutes for a given (source, source_port)
/// pair: the sanitized variable name, or `<var>.<port>` for a destructor's
/// selected component.
fn source_expr(source_id: &str, source_port: &str) -> String {
    let var = sanitize_id(source_id);
    match source_port {
        "x" | "y" | "z" | "w" => format!("{var}.{source_port}"),
        _ => var,
    }
}

fn coerce_to_vec4(expr: &str, ty: GlslType) -> String {
    match ty {
        GlslType::Float => format!("vec4(vec3({expr}), 1.0)"),
        GlslType::Vec2 => format!("vec4({expr}, 0.0, 1.0)"),
        GlslType::Vec3 => format!("vec4({expr}, 1.0)"),
        GlslType::Vec4 | GlslType::Void => expr.to_string(),
    }
}

/// Extracts the distinct `{name}` placeholders in a template, in order of
/// first appearance.
fn placeholders(template: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let key = &rest[start + 1..start + end];
        if seen.insert(key.to_string()) {
            out.push(key.to_string());
        }
        rest = &rest[start + end + 1..];
    }
    out
}

fn render(template: &str, values: &HashMap<String, String>) -> String {
    let mut out = template.to_string();
    for key in placeholders(template) {
        if let Some(v) = values.get(&key) {
            out = out.replace(&format!("{{{key}}}"), v);
        }
    }
    out
}

fn scan_custom_code(code: &str) -> (Vec<&'static str>, Vec<&'static str>) {
    let uniforms = KNOWN_UNIFORMS
        .iter()
        .copied()
        .filter(|u| code.contains(u))
        .collect();
    let helpers = KNOWN_HELPERS
        .iter()
        .copied()
        .filter(|h| code.contains(h))
        .collect();
    (uniforms, helpers)
}

fn add_helper(name: &'static str, seen: &mut HashSet<&'static str>, helpers: &mut Vec<&'static str>) {
    if seen.insert(name) {
        helpers.push(name);
    }
}

pub fn emit(graph: &ValidatedGraph, order: &[String], types: &TypeMap) -> Emitted {
    let mut statements = Vec::with_capacity(order.len());
    let mut uniforms: HashSet<&'static str> = HashSet::new();
    let mut helpers: Vec<&'static str> = Vec::new();
    let mut helpers_seen: HashSet<&'static str> = HashSet::new();

    for id in order {
        let node = graph.node(id).expect("scheduled id came from this graph");
        let desc = operators::descriptor(node.kind);
        let own_type = types[id];

        for u in desc.required_uniforms {
            uniforms.insert(u);
        }
        for h in desc.required_helpers {
            add_helper(h, &mut helpers_seen, &mut helpers);
        }

        let var = sanitize_id(id);
        let mut values: HashMap<String, String> = HashMap::new();
        values.insert("output".to_string(), var.clone());
        values.insert("type".to_string(), own_type.as_str().to_string());

        // Polymorphic ops (add, clamp, normalize, ...) share their resolved
        // type across every input, so an unconnected port falls back to
        // `own_type`'s default. Fixed-type ops (constructors, promotions,
        // SDF primitives, ...) take scalar or mixed-arity inputs that have
        // nothing to do with the node's own output type, so an unconnected
        // port there falls back to plain `float` — matching the original
        // compiler's universal `expected_type = 'float'` default for any
        // input it can't otherwise infer.
        let unconnected_default = match desc.output_type {
            OutputType::Polymorphic => own_type,
            OutputType::Fixed(_) | OutputType::FromParameter(_) => GlslType::Float,
        };

        let mut input_exprs: Vec<String> = Vec::with_capacity(desc.arity);
        for i in 1..=desc.arity {
            let port = port_name(node.kind, i);
            let expr = match incoming(graph, id, &port) {
                Some((source, source_port)) => source_expr(source, source_port),
                None => node
                    .parameters
                    .get(&port)
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| unconnected_default.default_literal().to_string()),
            };
            input_exprs.push(expr);
        }

        if matches!(node.kind, NodeKind::FragmentOutput) {
            input_exprs[0] = match incoming(graph, id, "color") {
                Some((source, source_port)) => {
                    let raw = source_expr(source, source_port);
                    let source_type = types.get(source).copied().unwrap_or(GlslType::Vec4);
                    coerce_to_vec4(&raw, source_type)
                }
                // the validator only guarantees a fragment_output node
                // exists, not that it's wired; an unconnected sink still
                // emits valid GLSL.
                None => "vec4(0.0, 0.0, 0.0, 1.0)".to_string(),
            };
        }

        for (i, expr) in input_exprs.iter().enumerate() {
            values.insert(format!("input{}", i + 1), expr.clone());
        }
        // Single-input operators also template as bare `{input1}`, which the
        // loop above already covers; arity 0 leaves this unused.

        if matches!(node.kind, NodeKind::CustomCode) {
            let code = node
                .parameters
                .get("code")
                .map(|v| v.to_string())
                .unwrap_or_else(|| "0.0".to_string());
            let (scanned_uniforms, scanned_helpers) = scan_custom_code(&code);
            for u in scanned_uniforms {
                uniforms.insert(u);
            }
            for h in scanned_helpers {
                add_helper(h, &mut helpers_seen, &mut helpers);
            }
            values.insert("code".to_string(), code);
        }

        // Any placeholder left over here (`value`, `x`, `y`, `z`, ...) names a
        // scalar literal parameter, never a data port, so its fallback is
        // always a plain float default regardless of the node's own output
        // type (e.g. `vec2_constant`'s `{x}`/`{y}` default to `0.0`, not
        // `vec2(0.0)`).
        for key in placeholders(desc.glsl_template) {
            if values.contains_key(&key) {
                continue;
            }
            let literal = node
                .parameters
                .get(&key)
                .map(|v| v.to_string())
                .unwrap_or_else(|| GlslType::Float.default_literal().to_string());
            values.insert(key, literal);
        }

        statements.push(render(desc.glsl_template, &values));
    }

    Emitted {
        statements,
        uniforms,
        helpers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infer::infer;
    use crate::schedule::schedule;
    use crate::validate::validate;
    use shadergraph_core::CompilerConfig;
    use shadergraph_ir::{EdgeDocument, GraphDocument, NodeDocument, ParamValue};
    use std::collections::HashMap as StdMap;

    fn node(id: &str, kind: &str) -> NodeDocument {
        NodeDocument {
            id: id.to_string(),
            kind: kind.to_string(),
            parameters: StdMap::new(),
        }
    }

    fn node_with(id: &str, kind: &str, params: &[(&str, ParamValue)]) -> NodeDocument {
        NodeDocument {
            id: id.to_string(),
            kind: kind.to_string(),
            parameters: params.iter().cloned().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }

    fn edge(source: &str, target: &str, target_port: &str) -> EdgeDocument {
        EdgeDocument {
            source: source.to_string(),
            target: target.to_string(),
            source_port: "output".to_string(),
            target_port: target_port.to_string(),
        }
    }

    fn compile_to_emitted(doc: &GraphDocument, cfg: &CompilerConfig) -> Emitted {
        let (g, _) = validate(doc, cfg).unwrap();
        let order = schedule(&g).unwrap();
        let types = infer(&g, &order, cfg).unwrap();
        emit(&g, &order, &types)
    }

    #[test]
    fn emits_a_statement_per_node_and_collects_the_time_uniform() {
        let doc = GraphDocument {
            nodes: vec![node("t", "time_input"), node("out", "fragment_output")],
            edges: vec![edge("t", "out", "color")],
        };
        let e = compile_to_emitted(&doc, &CompilerConfig::default());
        assert_eq!(e.statements.len(), 2);
        assert!(e.statements[0].contains("iTime"));
        assert!(e.uniforms.contains("iTime"));
    }

    #[test]
    fn coerces_float_output_to_vec4() {
        let doc = GraphDocument {
            nodes: vec![node("t", "time_input"), node("out", "fragment_output")],
            edges: vec![edge("t", "out", "color")],
        };
        let e = compile_to_emitted(&doc, &CompilerConfig::default());
        assert!(e.statements[1].contains("vec4(vec3(v_t), 1.0)"));
    }

    #[test]
    fn resolves_destructor_port_selector() {
        let doc = GraphDocument {
            nodes: vec![
                node("a", "vec3_constant"),
                node("split", "split_vec3"),
                node("out", "fragment_output"),
            ],
            edges: vec![
                edge("a", "split", "input"),
                EdgeDocument {
                    source: "split".to_string(),
                    target: "out".to_string(),
                    source_port: "x".to_string(),
                    target_port: "color".to_string(),
                },
            ],
        };
        let e = compile_to_emitted(&doc, &CompilerConfig::default());
        assert!(e.statements[2].contains("v_split.x"));
    }

    #[test]
    fn custom_code_is_scanned_for_uniform_and_helper_use() {
        let doc = GraphDocument {
            nodes: vec![
                node_with(
                    "custom",
                    "custom_code",
                    &[
                        ("return_type", ParamValue::Text("float".to_string())),
                        ("code", ParamValue::Text("perlin(vec2(iTime))".to_string())),
                    ],
                ),
                node("out", "fragment_output"),
            ],
            edges: vec![edge("custom", "out", "color")],
        };
        let e = compile_to_emitted(&doc, &CompilerConfig::default());
        assert!(e.uniforms.contains("iTime"));
        assert!(e.helpers.contains(&"perlin"));
    }

    #[test]
    fn unconnected_inputs_fall_back_to_a_default_literal() {
        let doc = GraphDocument {
            nodes: vec![node("s", "sin"), node("out", "fragment_output")],
            edges: vec![edge("s", "out", "color")],
        };
        let e = compile_to_emitted(&doc, &CompilerConfig::default());
        assert!(e.statements[0].contains("sin(0.0)"));
    }

    #[test]
    fn unconnected_constructor_inputs_default_to_scalar_float_not_own_type() {
        let doc = GraphDocument {
            nodes: vec![node("c", "vec3_construct"), node("out", "fragment_output")],
            edges: vec![edge("c", "out", "color")],
        };
        let e = compile_to_emitted(&doc, &CompilerConfig::default());
        assert!(e.statements[0].contains("vec3 v_c = vec3(0.0, 0.0, 0.0);"));
    }

    #[test]
    fn unconnected_sdf_sphere_point_input_defaults_to_scalar_float() {
        let doc = GraphDocument {
            nodes: vec![node("d", "sdf_sphere"), node("out", "fragment_output")],
            edges: vec![edge("d", "out", "color")],
        };
        let e = compile_to_emitted(&doc, &CompilerConfig::default());
        assert!(e.statements[0].contains("length(0.0) - 0.0"));
    }
}
