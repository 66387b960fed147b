//! Error types for SAIREDIS

use thiserror::Error;

use crate::{AttrId, ObjectType};

/// Core SAIREDIS errors
///
/// Metadata errors signal a mismatch between the registry and the code
/// walking attribute records. They are programming errors and are never
/// retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaiError {
    // Metadata errors
    #[error("unable to get metadata for object type {object_type}, attribute {attr_id}")]
    MetadataNotFound {
        object_type: ObjectType,
        attr_id: AttrId,
    },

    #[error("metadata for object type {object_type}, attribute {attr_id} registered twice")]
    DuplicateMetadata {
        object_type: ObjectType,
        attr_id: AttrId,
    },

    #[error(
        "attribute {attr_name} of {object_type} is object id ({value_type}), but not processed"
    )]
    UnhandledOidAttribute {
        object_type: ObjectType,
        attr_name: String,
        value_type: String,
    },

    #[error("attribute {attr_name} of {object_type} declared as {expected}, record holds {actual}")]
    ValueTypeMismatch {
        object_type: ObjectType,
        attr_name: String,
        expected: String,
        actual: &'static str,
    },

    // Notification errors
    #[error("unknown notification: {0}")]
    UnknownNotification(String),
}

/// Result type for SAIREDIS operations
pub type SaiResult<T> = Result<T, SaiError>;
