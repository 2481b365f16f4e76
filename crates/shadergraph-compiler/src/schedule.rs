//! Topological scheduling (spec §9): an iterative Kahn's algorithm, not
//! recursive DFS, so a pathological linear chain can't blow the stack.
//! Ties are broken by insertion order — the order the caller wrote the
//! nodes in the document is preserved wherever the graph allows it, which
//! is what makes `compile()` deterministic across runs.

use std::collections::{HashMap, VecDeque};

use crate::error::CompileError;
use crate::validate::ValidatedGraph;

/// Returns node ids in a valid evaluation order: every node appears after
/// all of its data-dependencies.
pub fn schedule(graph: &ValidatedGraph) -> Result<Vec<String>, CompileError> {
    let position: HashMap<&str, usize> = graph
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.0.as_str(), i))
        .collect();

    let mut in_degree: HashMap<&str, usize> = graph
        .nodes()
        .iter()
        .map(|n| (n.id.0.as_str(), 0usize))
        .collect();
    let mut successors: HashMap<&str, Vec<&str>> = HashMap::new();
    for e in graph.edges() {
        *in_degree.get_mut(e.target.as_str()).expect("validated") += 1;
        successors
            .entry(e.source.as_str())
            .or_default()
            .push(e.target.as_str());
    }

    // Ready queue seeded with zero-in-degree nodes, ordered by their
    // position in the original document.
    let mut ready: VecDeque<&str> = graph
        .nodes()
        .iter()
        .map(|n| n.id.0.as_str())
        .filter(|id| in_degree[id] == 0)
        .collect();

    let mut order = Vec::with_capacity(graph.len());
    while let Some(id) = ready.pop_front() {
        order.push(id.to_string());
        if let Some(succs) = successors.get(id) {
            let mut newly_ready: Vec<&str> = Vec::new();
            for &succ in succs {
                let d = in_degree.get_mut(succ).expect("validated");
                *d -= 1;
                if *d == 0 {
                    newly_ready.push(succ);
                }
            }
            newly_ready.sort_by_key(|id| position[id]);
            for id in newly_ready {
                ready.push_back(id);
            }
        }
        // Keep the ready queue itself ordered by original position, in case
        // a single step enqueues nodes out of document order.
        let mut as_vec: Vec<&str> = ready.into_iter().collect();
        as_vec.sort_by_key(|id| position[id]);
        ready = as_vec.into();
    }

    if order.len() != graph.len() {
        let remaining: Vec<String> = graph
            .nodes()
            .iter()
            .map(|n| n.id.0.clone())
            .filter(|id| !order.contains(id))
            .collect();
        return Err(CompileError::cycle_detected(remaining));
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;
    use shadergraph_core::CompilerConfig;
    use shadergraph_ir::{EdgeDocument, GraphDocument, NodeDocument};
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
            target_port: "input".to_string(),
        }
    }

    #[test]
    fn orders_a_simple_chain() {
        let doc = GraphDocument {
            nodes: vec![
                node("t", "time_input"),
                node("s", "sin"),
                node("out", "fragment_output"),
            ],
            edges: vec![edge("t", "s"), edge("s", "out")],
        };
        let (g, _) = validate(&doc, &CompilerConfig::default()).unwrap();
        let order = schedule(&g).unwrap();
        assert_eq!(order, vec!["t", "s", "out"]);
    }

    #[test]
    fn detects_a_cycle() {
        let doc = GraphDocument {
            nodes: vec![
                node("a", "sin"),
                node("b", "cos"),
                node("out", "fragment_output"),
            ],
            edges: vec![edge("a", "b"), edge("b", "a"), edge("a", "out")],
        };
        let (g, _) = validate(&doc, &CompilerConfig::default()).unwrap();
        let err = schedule(&g).unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::CycleDetected);
    }

    #[test]
    fn breaks_ties_by_insertion_order() {
        let doc = GraphDocument {
            nodes: vec![
                node("b", "time_input"),
                node("a", "time_input"),
                node("mix", "add"),
                node("out", "fragment_output"),
            ],
            edges: vec![edge("b", "mix"), edge("a", "mix"), edge("mix", "out")],
        };
        let (g, _) = validate(&doc, &CompilerConfig::default()).unwrap();
        let order = schedule(&g).unwrap();
        assert_eq!(order, vec!["b", "a", "mix", "out"]);
    }
}
