//! Data models for registry entities.

pub mod contact;

pub use contact::Contact;
