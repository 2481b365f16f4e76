#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]

//! Graph-to-GLSL compilation: validate, schedule, infer, emit, assemble.
//!
//! [`compile`] is the single entry point. It is pure and holds no state
//! across calls — the operator table in [`operators`] is process-wide and
//! immutable, and every per-call accumulator is local to the call, so
//! concurrent callers never interfere with each other (spec §6).

pub mod catalog;
pub mod emit;
mod error;
pub mod helpers;
pub mod infer;
pub mod operators;
pub mod schedule;
pub mod validate;

pub use error::{CompileError, ErrorKind};
pub use validate::{ResolvedNode, ValidatedGraph};

use std::time::Duration;

use serde::{Deserialize, Serialize};
use shadergraph_core::CompilerConfig;
use shadergraph_ir::GraphDocument;

/// One uniform declaration the assembled shader requires.
#[derive(Debug, Clone, Serialize)]
pub struct UniformInfo {
    pub name: &'static str,
    pub glsl_type: &'static str,
}

/// A compile request: the graph plus optional overrides of the default
/// [`CompilerConfig`] limits. Overrides are flat fields rather than a nested
/// config object so a caller can send just the graph and nothing else.
#[derive(Debug, Clone, Deserialize)]
pub struct CompileRequest {
    pub graph: GraphDocument,
    #[serde(default)]
    pub strict_types: bool,
    #[serde(default)]
    pub max_nodes: Option<usize>,
    #[serde(default)]
    pub max_edges: Option<usize>,
}

impl CompileRequest {
    fn config(&self) -> CompilerConfig {
        let defaults = CompilerConfig::default();
        CompilerConfig {
            max_nodes: self.max_nodes.unwrap_or(defaults.max_nodes),
            max_edges: self.max_edges.unwrap_or(defaults.max_edges),
            strict_types: self.strict_types,
        }
    }
}

/// The outcome of a compile call: either GLSL source plus its metadata, or
/// the single fatal error that stopped compilation.
#[derive(Debug, Clone, Serialize)]
pub struct CompileResponse {
    pub success: bool,
    pub code: Option<String>,
    pub uniforms: Vec<UniformInfo>,
    pub helper_functions: Vec<String>,
    pub warnings: Vec<String>,
    pub error: Option<CompileError>,
    pub compile_time: Duration,
}

impl CompileResponse {
    fn failure(error: CompileError, compile_time: Duration) -> Self {
        Self {
            success: false,
            code: None,
            uniforms: Vec::new(),
            helper_functions: Vec::new(),
            warnings: Vec::new(),
            error: Some(error),
            compile_time,
        }
    }
}

/// Runs the full pipeline over a request and always returns a response —
/// never an `Err` — with `success` and `error` carrying the outcome. This
/// matches the closed error taxonomy's intent: a caller branches on
/// `success`, not on a Rust `Result`, at the API boundary.
pub fn compile(request: &CompileRequest) -> CompileResponse {
    compile_timed(request, Duration::default)
}

/// Same as [`compile`] but lets a caller (tests, the CLI) supply its own
/// clock, since this crate never reads wall-clock time on its own —
/// `std::time::Instant::now()` would make the pure compile function depend
/// on ambient state.
pub fn compile_timed(
    request: &CompileRequest,
    elapsed: impl FnOnce() -> Duration,
) -> CompileResponse {
    let config = request.config();

    let (graph, warnings) = match validate::validate(&request.graph, &config) {
        Ok(ok) => ok,
        Err(e) => return CompileResponse::failure(e, elapsed()),
    };
    let order = match schedule::schedule(&graph) {
        Ok(ok) => ok,
        Err(e) => return CompileResponse::failure(e, elapsed()),
    };
    let types = match infer::infer(&graph, &order, &config) {
        Ok(ok) => ok,
        Err(e) => return CompileResponse::failure(e, elapsed()),
    };
    let emitted = emit::emit(&graph, &order, &types);
    let code = assemble::assemble(&emitted);

    let mut uniforms: Vec<&str> = emitted.uniforms.iter().copied().collect();
    uniforms.sort_unstable();
    let uniforms = uniforms
        .into_iter()
        .map(|name| UniformInfo {
            name,
            glsl_type: if name == "iResolution" { "vec2" } else { "float" },
        })
        .collect();

    CompileResponse {
        success: true,
        code: Some(code),
        uniforms,
        helper_functions: emitted.helpers.iter().map(|h| h.to_string()).collect(),
        warnings,
        error: None,
        compile_time: elapsed(),
    }
}

mod assemble;

#[cfg(test)]
mod tests {
    use super::*;
    use shadergraph_ir::{EdgeDocument, NodeDocument};
    use std::collections::HashMap;

    fn node(id: &str, kind: &str) -> NodeDocument {
        NodeDocument {
            id: id.to_string(),
            kind: kind.to_string(),
            parameters: HashMap::new(),
        }
    }

    fn edge(source: &str, target: &str) -> EdgeDocument {
        EdgeDocument {
            source: source.to_string(),
            target: target.to_string(),
            source_port: "output".to_string(),
            target_port: "color".to_string(),
        }
    }

    #[test]
    fn compiles_a_minimal_graph_end_to_end() {
        let request = CompileRequest {
            graph: GraphDocument {
                nodes: vec![node("t", "time_input"), node("out", "fragment_output")],
                edges: vec![edge("t", "out")],
            },
            strict_types: false,
            max_nodes: None,
            max_edges: None,
        };
        let response = compile(&request);
        assert!(response.success);
        let code = response.code.unwrap();
        assert!(code.contains("uniform float iTime;"));
        assert!(code.contains("void mainImage"));
        assert!(response.uniforms.iter().any(|u| u.name == "iTime"));
    }

    #[test]
    fn reports_structural_errors_without_panicking() {
        let request = CompileRequest {
            graph: GraphDocument {
                nodes: vec![node("a", "time_input")],
                edges: vec![],
            },
            strict_types: false,
            max_nodes: None,
            max_edges: None,
        };
        let response = compile(&request);
        assert!(!response.success);
        assert_eq!(response.error.unwrap().kind, ErrorKind::MissingOutput);
    }

    #[test]
    fn respects_overridden_size_limits() {
        let request = CompileRequest {
            graph: GraphDocument {
                nodes: vec![node("t", "time_input"), node("out", "fragment_output")],
                edges: vec![edge("t", "out")],
            },
            strict_types: false,
            max_nodes: Some(1),
            max_edges: None,
        };
        let response = compile(&request);
        assert!(!response.success);
        assert_eq!(response.error.unwrap().kind, ErrorKind::TooLarge);
    }
}
