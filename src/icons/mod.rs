// src/icons/mod.rs
pub mod registry;

pub use registry::{BundledIcon, IconRegistry, IconSource};
