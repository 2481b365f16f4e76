use std::fmt;

use serde::Serialize;

/// The closed taxonomy of fatal compile failures (spec §7).
///
/// Every variant corresponds to exactly one validator/scheduler/inferencer
/// check; there is no catch-all "other" — an error the compiler cannot name
/// precisely is a bug in the compiler, not a caller mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Malformed,
    UnknownKind,
    DuplicateId,
    SanitizedIdCollision,
    MissingOutput,
    MultipleOutputs,
    DanglingEdge,
    TooLarge,
    CycleDetected,
    TypeMismatch,
}

impl ErrorKind {
    /// The wire-format name used in diagnostics and the JSON error taxonomy.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Malformed => "malformed",
            ErrorKind::UnknownKind => "unknown_kind",
            ErrorKind::DuplicateId => "duplicate_id",
            ErrorKind::SanitizedIdCollision => "sanitized_id_collision",
            ErrorKind::MissingOutput => "missing_output",
            ErrorKind::MultipleOutputs => "multiple_outputs",
            ErrorKind::DanglingEdge => "dangling_edge",
            ErrorKind::TooLarge => "too_large",
            ErrorKind::CycleDetected => "cycle_detected",
            ErrorKind::TypeMismatch => "type_mismatch",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fatal compile failure: the kind (closed taxonomy), a human-readable
/// message, and — only for `CycleDetected` — the offending node-id set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileError {
    pub kind: ErrorKind,
    pub message: String,
    pub node_ids: Vec<String>,
}

impl CompileError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            node_ids: Vec::new(),
        }
    }

    pub fn with_node_ids(mut self, node_ids: Vec<String>) -> Self {
        self.node_ids = node_ids;
        self
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Malformed, message)
    }

    pub fn unknown_kind(node_id: &str, kind: &str) -> Self {
        Self::new(
            ErrorKind::UnknownKind,
            format!("node '{node_id}' has unknown kind '{kind}'"),
        )
    }

    pub fn duplicate_id(node_id: &str) -> Self {
        Self::new(
            ErrorKind::DuplicateId,
            format!("duplicate node id '{node_id}'"),
        )
    }

    pub fn sanitized_id_collision(a: &str, b: &str, sanitized: &str) -> Self {
        Self::new(
            ErrorKind::SanitizedIdCollision,
            format!("node ids '{a}' and '{b}' both sanitize to '{sanitized}'"),
        )
    }

    pub fn missing_output() -> Self {
        Self::new(ErrorKind::MissingOutput, "no fragment_output node found")
    }

    pub fn multiple_outputs(count: usize) -> Self {
        Self::new(
            ErrorKind::MultipleOutputs,
            format!("expected exactly one fragment_output node, found {count}"),
        )
    }

    pub fn dangling_edge(endpoint: &str, node_id: &str) -> Self {
        Self::new(
            ErrorKind::DanglingEdge,
            format!("edge {endpoint} '{node_id}' does not refer to a known node"),
        )
    }

    pub fn too_large(what: &str, limit: usize, actual: usize) -> Self {
        Self::new(
            ErrorKind::TooLarge,
            format!("too many {what}: {actual} exceeds limit of {limit}"),
        )
    }

    pub fn cycle_detected(node_ids: Vec<String>) -> Self {
        let message = format!("cycle detected among nodes: {}", node_ids.join(", "));
        Self::new(ErrorKind::CycleDetected, message).with_node_ids(node_ids)
    }

    pub fn type_mismatch(node_id: &str, expected: &str, found: &str) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("node '{node_id}' expected input type {expected}, found {found}"),
        )
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for CompileError {}
