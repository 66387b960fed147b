//! SAIREDIS Core - Fundamental types shared by the client library
//!
//! This crate defines the data every other crate walks over:
//! - Object identifiers (ObjectId, ObjectList)
//! - Object categories (ObjectType)
//! - Attribute records (AttrId, Attribute, AttributeValue, AclData)
//! - Error types

pub mod attr;
pub mod error;
pub mod id;
pub mod object_type;

pub use attr::*;
pub use error::*;
pub use id::*;
pub use object_type::*;
