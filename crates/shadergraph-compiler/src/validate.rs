//! The structural validator (spec §4.1): accepts a raw `GraphDocument` and
//! either returns a normalized, kind-resolved graph plus non-fatal warnings,
//! or a single fatal `CompileError`. Checks run in the fixed order documented
//! in spec §4.1, short-circuiting on the first fatal class.

use std::collections::{HashMap, HashSet};

use shadergraph_core::CompilerConfig;
use shadergraph_ir::{sanitize_id, EdgeDocument, GraphDocument, NodeId, NodeKind, ParamValue};

use crate::error::CompileError;

/// A node once its wire-format `kind` string has resolved to a `NodeKind`.
#[derive(Debug, Clone)]
pub struct ResolvedNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub parameters: HashMap<String, ParamValue>,
}

/// The validator's output: a graph known to have exactly one terminal sink,
/// unique (and uniquely-sanitized) node ids, and no dangling edges.
#[derive(Debug, Clone)]
pub struct ValidatedGraph {
    nodes: Vec<ResolvedNode>,
    index: HashMap<String, usize>,
    edges: Vec<EdgeDocument>,
    output_index: usize,
}

impl ValidatedGraph {
    pub fn nodes(&self) -> &[ResolvedNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeDocument] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&ResolvedNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn output(&self) -> &ResolvedNode {
        &self.nodes[self.output_index]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

pub fn validate(
    doc: &GraphDocument,
    config: &CompilerConfig,
) -> Result<(ValidatedGraph, Vec<String>), CompileError> {
    // 2. Every node carries a non-empty identifier and a recognized kind.
    let mut resolved = Vec::with_capacity(doc.nodes.len());
    for n in &doc.nodes {
        if n.id.is_empty() {
            return Err(CompileError::malformed("node id must not be empty"));
        }
        let kind = NodeKind::from_tag(&n.kind)
            .ok_or_else(|| CompileError::unknown_kind(&n.id, &n.kind))?;
        resolved.push(ResolvedNode {
            id: NodeId(n.id.clone()),
            kind,
            parameters: n.parameters.clone(),
        });
    }

    // 3. Identifiers are unique.
    let mut seen_ids: HashSet<&str> = HashSet::new();
    for n in &resolved {
        if !seen_ids.insert(n.id.0.as_str()) {
            return Err(CompileError::duplicate_id(&n.id.0));
        }
    }

    // Sanitized-name collision: two distinct ids must not sanitize to the
    // same GLSL variable name.
    let mut seen_sanitized: HashMap<String, &str> = HashMap::new();
    for n in &resolved {
        let sanitized = sanitize_id(&n.id.0);
        if let Some(other) = seen_sanitized.get(sanitized.as_str()) {
            return Err(CompileError::sanitized_id_collision(
                other, &n.id.0, &sanitized,
            ));
        }
        seen_sanitized.insert(sanitized, n.id.0.as_str());
    }

    // 4. Exactly one fragment_output node.
    let output_indices: Vec<usize> = resolved
        .iter()
        .enumerate()
        .filter(|(_, n)| n.kind.is_terminal())
        .map(|(i, _)| i)
        .collect();
    let output_index = match output_indices.len() {
        0 => return Err(CompileError::missing_output()),
        1 => output_indices[0],
        n => return Err(CompileError::multiple_outputs(n)),
    };

    // 5. Every edge's source and target resolve to known identifiers.
    let index: HashMap<String, usize> = resolved
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.0.clone(), i))
        .collect();
    for e in &doc.edges {
        if !index.contains_key(&e.source) {
            return Err(CompileError::dangling_edge("source", &e.source));
        }
        if !index.contains_key(&e.target) {
            return Err(CompileError::dangling_edge("target", &e.target));
        }
    }

    // 6. Size limits.
    if resolved.len() > config.max_nodes {
        return Err(CompileError::too_large(
            "nodes",
            config.max_nodes,
            resolved.len(),
        ));
    }
    if doc.edges.len() > config.max_edges {
        return Err(CompileError::too_large(
            "edges",
            config.max_edges,
            doc.edges.len(),
        ));
    }

    let mut warnings = Vec::new();

    // Warning: multiple incoming edges to the same (target, target_port).
    let mut seen_ports: HashSet<(&str, &str)> = HashSet::new();
    let mut overwritten_ports: HashSet<(&str, &str)> = HashSet::new();
    for e in &doc.edges {
        let key = (e.target.as_str(), e.target_port.as_str());
        if !seen_ports.insert(key) {
            overwritten_ports.insert(key);
        }
    }
    for (target, port) in overwritten_ports {
        warnings.push(format!(
            "multiple edges target {target}.{port}; the last one wins"
        ));
    }

    // Warning: nodes unreachable from the terminal sink.
    let output_id = resolved[output_index].id.0.as_str();
    let mut reaches_output: HashMap<&str, Vec<&str>> = HashMap::new();
    for e in &doc.edges {
        reaches_output
            .entry(e.target.as_str())
            .or_default()
            .push(e.source.as_str());
    }
    let mut reachable: HashSet<&str> = HashSet::new();
    let mut stack = vec![output_id];
    while let Some(id) = stack.pop() {
        if reachable.insert(id) {
            if let Some(preds) = reaches_output.get(id) {
                stack.extend(preds.iter().copied());
            }
        }
    }
    for n in &resolved {
        if !reachable.contains(n.id.0.as_str()) {
            warnings.push(format!(
                "node '{}' is unreachable from the terminal sink",
                n.id.0
            ));
        }
    }

    Ok((
        ValidatedGraph {
            nodes: resolved,
            index,
            edges: doc.edges.clone(),
            output_index,
        },
        warnings,
    ))
}
