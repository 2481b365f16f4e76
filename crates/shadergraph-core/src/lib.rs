#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]

//! Ambient stack shared by every shadergraph crate: error taxonomy for
//! everything around the compile pipeline, and the size/mode config the
//! validator and type inferencer are parameterized over.

pub mod config;
pub mod error;

pub use config::CompilerConfig;
pub use error::EngineError;
