//! Per-attribute metadata

use sairedis_core::{AttrId, ObjectType};

use crate::AttrValueType;

/// Describes one attribute of one object type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttrMetadata {
    pub object_type: ObjectType,
    pub attr_id: AttrId,
    /// Human-readable id name, e.g. `SAI_PORT_ATTR_SPEED`
    pub attr_id_name: String,
    pub value_type: AttrValueType,
    /// Attribute references other objects
    pub is_oid_attribute: bool,
    /// Object types an oid attribute may point at
    pub allowed_object_types: Vec<ObjectType>,
}

impl AttrMetadata {
    /// Create metadata; the oid flag follows the value type
    pub fn new(
        object_type: ObjectType,
        attr_id: AttrId,
        attr_id_name: impl Into<String>,
        value_type: AttrValueType,
    ) -> Self {
        AttrMetadata {
            object_type,
            attr_id,
            attr_id_name: attr_id_name.into(),
            value_type,
            is_oid_attribute: value_type.is_oid(),
            allowed_object_types: Vec::new(),
        }
    }

    /// Override the oid flag
    pub fn with_oid_flag(mut self, is_oid_attribute: bool) -> Self {
        self.is_oid_attribute = is_oid_attribute;
        self
    }

    pub fn with_allowed(mut self, object_types: &[ObjectType]) -> Self {
        self.allowed_object_types = object_types.to_vec();
        self
    }

    /// Is `object_type` a valid target of this attribute?
    ///
    /// An empty allow-list accepts any type.
    pub fn allows(&self, object_type: ObjectType) -> bool {
        self.allowed_object_types.is_empty() || self.allowed_object_types.contains(&object_type)
    }
}
