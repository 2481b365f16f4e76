//! Type inference (spec §5.3 / §9): data-directed, not constraint-solved.
//! Each node's output type is either fixed by its operator, read from a
//! parameter (`custom_code`), or resolved from the first connected input in
//! port priority order (`input`, then `input1`, `input2`, ...). Runs once,
//! in schedule order, so every input a node looks up has already been
//! resolved.

use std::collections::HashMap;

use shadergraph_core::CompilerConfig;
use shadergraph_ir::NodeKind;

use crate::error::CompileError;
use crate::operators::{self, GlslType, OutputType};
use crate::validate::ValidatedGraph;

pub type TypeMap = HashMap<String, GlslType>;

/// The wire name of a node's `position`th (1-indexed) data input port.
/// The first port is always named `input`; later ports are numbered
/// `input1`, `input2`, ... The terminal sink is the one exception: its
/// single port is named `color`, not `input`.
pub fn port_name(kind: NodeKind, position: usize) -> String {
    if kind.is_terminal() && position == 1 {
        return "color".to_string();
    }
    if position == 1 {
        "input".to_string()
    } else {
        format!("input{}", position - 1)
    }
}

/// Resolves the node at `target_port` that feeds it, if any is wired.
fn incoming<'a>(
    graph: &'a ValidatedGraph,
    target: &str,
    target_port: &str,
) -> Option<&'a str> {
    graph
        .edges()
        .iter()
        .rev()
        .find(|e| e.target == target && e.target_port == target_port)
        .map(|e| e.source.as_str())
}

pub fn infer(
    graph: &ValidatedGraph,
    order: &[String],
    config: &CompilerConfig,
) -> Result<TypeMap, CompileError> {
    let mut types: TypeMap = HashMap::with_capacity(order.len());

    for id in order {
        let node = graph.node(id).expect("scheduled id came from this graph");
        let desc = operators::descriptor(node.kind);

        let ty = match desc.output_type {
            OutputType::Fixed(t) => t,
            OutputType::FromParameter(key) => node
                .parameters
                .get(key)
                .and_then(|v| v.as_str())
                .and_then(GlslType::from_str)
                .unwrap_or(GlslType::Float),
            OutputType::Polymorphic => {
                let mut resolved = None;
                for i in 1..=desc.arity {
                    let port = port_name(node.kind, i);
                    if let Some(source) = incoming(graph, id, &port) {
                        let source_ty = types
                            .get(source)
                            .copied()
                            .expect("source precedes target in schedule order");
                        if resolved.is_none() {
                            resolved = Some(source_ty);
                        } else if config.strict_types && resolved != Some(source_ty) {
                            return Err(CompileError::type_mismatch(
                                id,
                                resolved.unwrap().as_str(),
                                source_ty.as_str(),
                            ));
                        }
                    }
                }
                resolved.unwrap_or(GlslType::Float)
            }
        };

        types.insert(id.clone(), ty);
    }

    Ok(types)
}
