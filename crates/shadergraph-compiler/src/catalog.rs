//! The operator catalog: a listing view over the static operator table, for
//! the CLI's `--list-ops` and for tests that assert every kind has sane
//! metadata. Never consulted by the compile pipeline itself.

use shadergraph_ir::{NodeCategory, NodeKind};

use crate::operators::{self, OutputType};

#[derive(Debug, Clone, serde::Serialize)]
pub struct OperatorInfo {
    pub tag: &'static str,
    pub category: &'static str,
    pub arity: usize,
    pub output_type: String,
}

fn category_name(category: NodeCategory) -> &'static str {
    match category {
        NodeCategory::Input => "input",
        NodeCategory::Arithmetic => "arithmetic",
        NodeCategory::ScalarMath => "scalar_math",
        NodeCategory::Clamping => "clamping",
        NodeCategory::Vector => "vector",
        NodeCategory::Constructor => "constructor",
        NodeCategory::Destructor => "destructor",
        NodeCategory::Generator => "generator",
        NodeCategory::Sdf => "sdf",
        NodeCategory::Escape => "escape",
        NodeCategory::Output => "output",
    }
}

/// Describes every known operator, in `NodeKind`'s declaration order.
pub fn describe() -> Vec<OperatorInfo> {
    shadergraph_ir::ALL
        .iter()
        .map(|&kind| describe_one(kind))
        .collect()
}

fn describe_one(kind: NodeKind) -> OperatorInfo {
    let desc = operators::descriptor(kind);
    let output_type = match desc.output_type {
        OutputType::Fixed(t) => t.as_str().to_string(),
        OutputType::Polymorphic => "polymorphic".to_string(),
        OutputType::FromParameter(key) => format!("from_parameter({key})"),
    };
    OperatorInfo {
        tag: kind.tag(),
        category: category_name(kind.category()),
        arity: desc.arity,
        output_type,
    }
}
