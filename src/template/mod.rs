//! Shape template catalog and identity rewriting
//!
//! Templates are immutable, shared definitions whose element and group ids are
//! placeholders. The rewriter turns a template into elements with fresh ids
//! before anything reaches a scene.

mod builtin;
mod registry;
mod rewriter;

pub use builtin::{builtin, builtin_templates};
pub use registry::{ShapeCatalog, ShapeTemplate};
pub use rewriter::{rewrite, rewrite_identities};
