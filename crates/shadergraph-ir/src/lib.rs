#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]

//! shadergraph graph vocabulary.
//!
//! This crate is contract-only: it defines the node/edge/graph shapes a
//! caller sends in and the closed operator enumeration the compiler
//! recognizes. It performs no validation and no GLSL emission — that's
//! `shadergraph-compiler`'s job, operating over the types defined here.

mod graph;
mod node_kind;
mod param;

pub use graph::{sanitize_id, EdgeDocument, Graph, GraphDocument, NodeDocument, NodeId};
pub use node_kind::{NodeCategory, NodeKind, ALL};
pub use param::{format_glsl_float, ParamValue};
