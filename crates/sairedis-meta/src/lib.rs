//! SAIREDIS Metadata - describes the value shape of every attribute
//!
//! Attribute records do not carry their own shape. The registry maps
//! (object type, attribute id) to an `AttrMetadata` that says which value
//! type the attribute holds and whether it references other objects.
//!
//! The registry is built once and then shared read-only, typically as an
//! `Arc<MetadataRegistry>`.

pub mod metadata;
pub mod registry;
pub mod standard;
pub mod value_type;

pub use metadata::*;
pub use registry::*;
pub use value_type::*;
