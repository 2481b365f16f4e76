use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::param::ParamValue;

/// A node identifier as it appears in the wire document. Stable across a
/// single compile call; used as the key for every per-node accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

fn default_source_port() -> String {
    "output".to_string()
}

fn default_target_port() -> String {
    "input".to_string()
}

/// A node record as it appears in the raw `{nodes, edges}` intake document.
///
/// `kind` is kept as the raw wire string rather than the closed `NodeKind`
/// enum: an unrecognized tag must surface as the validator's `unknown_kind`
/// diagnostic, not a JSON-deserialization failure. `NodeKind::from_tag`
/// resolves it once the document has passed the earlier shape checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDocument {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub parameters: HashMap<String, ParamValue>,
}

/// A directed edge as it appears in the raw intake document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDocument {
    pub source: String,
    pub target: String,
    #[serde(default = "default_source_port")]
    pub source_port: String,
    #[serde(default = "default_target_port")]
    pub target_port: String,
}

/// The raw `{nodes, edges}` document accepted from a caller. Transport
/// agnostic: whatever deserializes this from JSON is someone else's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<NodeDocument>,
    pub edges: Vec<EdgeDocument>,
}

/// The normalized, structurally-accepted graph IR: nodes keyed by id with
/// insertion order preserved as the scheduler's tie-breaker, edges kept in
/// their original sequence.
///
/// Construct via `shadergraph_compiler::validate` — a `Graph` here is a
/// plain data container, not a guarantee; validity is the validator's
/// contract to uphold, not something this type enforces at construction.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<NodeDocument>,
    index: HashMap<String, usize>,
    edges: Vec<EdgeDocument>,
}

impl Graph {
    pub fn new(nodes: Vec<NodeDocument>, edges: Vec<EdgeDocument>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();
        Self {
            nodes,
            index,
            edges,
        }
    }

    pub fn nodes(&self) -> &[NodeDocument] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeDocument] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&NodeDocument> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Derives the emitted GLSL variable name from a node id: replace any
/// character outside `[A-Za-z0-9_]` with `_` and prefix with `v_`.
pub fn sanitize_id(id: &str) -> String {
    let mut out = String::with_capacity(id.len() + 2);
    out.push_str("v_");
    for c in id.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
        } else {
            out.push('_');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_hyphens_and_dots() {
        assert_eq!(sanitize_id("node-1.a"), "v_node_1_a");
    }

    #[test]
    fn preserves_already_safe_ids() {
        assert_eq!(sanitize_id("abc_123"), "v_abc_123");
    }

    #[test]
    fn graph_preserves_insertion_order() {
        let nodes = vec![
            NodeDocument {
                id: "b".into(),
                kind: "time_input".into(),
                parameters: HashMap::new(),
            },
            NodeDocument {
                id: "a".into(),
                kind: "fragment_output".into(),
                parameters: HashMap::new(),
            },
        ];
        let g = Graph::new(nodes, vec![]);
        assert_eq!(g.nodes()[0].id, "b");
        assert_eq!(g.nodes()[1].id, "a");
        assert!(g.contains("a"));
        assert!(!g.contains("z"));
    }
}
