//! Domain vocabulary shared by the registry and its errors.
//!
//! Contact attributes are addressed through [`ContactField`] so that
//! validation failures can name the offending field without string matching.

pub mod field;

pub use field::ContactField;
