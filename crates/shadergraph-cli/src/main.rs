//! Thin runnable entry point for the shadergraph compiler: reads a graph
//! JSON document from a file or stdin, compiles it, and prints GLSL to
//! stdout or a JSON diagnostic to stderr. No network I/O, no persistence —
//! this exists only so the compiler crate has something to run.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use shadergraph_compiler::{compile, CompileRequest};
use shadergraph_core::CompilerConfig;
use shadergraph_ir::GraphDocument;

/// Compile a shadergraph node graph into a GLSL fragment shader.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the graph JSON document. Reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Reject polymorphic nodes whose connected inputs disagree in type.
    #[arg(long)]
    strict: bool,

    /// Override the maximum accepted node count.
    #[arg(long)]
    max_nodes: Option<usize>,

    /// Override the maximum accepted edge count.
    #[arg(long)]
    max_edges: Option<usize>,

    /// List every recognized operator kind and exit.
    #[arg(long)]
    list_ops: bool,
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list_ops {
        for op in shadergraph_compiler::catalog::describe() {
            println!("{:<20} {:<12} arity={} -> {}", op.tag, op.category, op.arity, op.output_type);
        }
        return ExitCode::SUCCESS;
    }

    let raw = match read_input(cli.input.as_ref()) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::error!(%err, "failed to read input");
            return ExitCode::FAILURE;
        }
    };

    let graph: GraphDocument = match serde_json::from_str(&raw) {
        Ok(graph) => graph,
        Err(err) => {
            tracing::error!(%err, "input is not a valid graph document");
            print_error_json(&format!("malformed input: {err}"));
            return ExitCode::FAILURE;
        }
    };

    let defaults = CompilerConfig::default();
    let request = CompileRequest {
        graph,
        strict_types: cli.strict,
        max_nodes: cli.max_nodes.or(Some(defaults.max_nodes)),
        max_edges: cli.max_edges.or(Some(defaults.max_edges)),
    };

    let response = compile(&request);

    for warning in &response.warnings {
        tracing::warn!("{warning}");
    }

    if !response.success {
        let error = response.error.expect("failure carries an error");
        tracing::error!(kind = %error.kind, "{}", error.message);
        print_error_json(&error.message);
        return ExitCode::FAILURE;
    }

    print!("{}", response.code.expect("success carries code"));
    ExitCode::SUCCESS
}

fn print_error_json(message: &str) {
    let payload = serde_json::json!({ "success": false, "error": message });
    eprintln!("{payload}");
}
