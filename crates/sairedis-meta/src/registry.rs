//! Metadata registry

use std::collections::HashMap;

use sairedis_core::{AttrId, ObjectType, SaiError, SaiResult};

use crate::AttrMetadata;

/// Read-only table of attribute metadata keyed by (object type, attr id)
///
/// Built once through `RegistryBuilder`; no mutation is possible
/// afterwards, so a shared reference can be read from any thread.
#[derive(Debug, Default)]
pub struct MetadataRegistry {
    attrs: HashMap<(ObjectType, AttrId), AttrMetadata>,
}

impl MetadataRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Look up metadata, `None` on a miss
    pub fn get(&self, object_type: ObjectType, attr_id: AttrId) -> Option<&AttrMetadata> {
        self.attrs.get(&(object_type, attr_id))
    }

    /// Look up metadata, treating a miss as an error
    pub fn require(&self, object_type: ObjectType, attr_id: AttrId) -> SaiResult<&AttrMetadata> {
        self.get(object_type, attr_id)
            .ok_or(SaiError::MetadataNotFound {
                object_type,
                attr_id,
            })
    }

    /// Is any attribute registered for this object type?
    pub fn knows_object_type(&self, object_type: ObjectType) -> bool {
        self.attrs.keys().any(|(ot, _)| *ot == object_type)
    }

    /// All attributes of one object type, ordered by id
    pub fn attrs_of(&self, object_type: ObjectType) -> Vec<&AttrMetadata> {
        let mut attrs: Vec<_> = self
            .attrs
            .values()
            .filter(|md| md.object_type == object_type)
            .collect();
        attrs.sort_by_key(|md| md.attr_id);
        attrs
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

/// Builder for `MetadataRegistry`
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    attrs: Vec<AttrMetadata>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        RegistryBuilder::default()
    }

    pub fn attr(mut self, metadata: AttrMetadata) -> Self {
        self.attrs.push(metadata);
        self
    }

    pub fn attrs(mut self, metadata: impl IntoIterator<Item = AttrMetadata>) -> Self {
        self.attrs.extend(metadata);
        self
    }

    /// Freeze the registry, rejecting duplicate keys
    pub fn build(self) -> SaiResult<MetadataRegistry> {
        let mut attrs = HashMap::with_capacity(self.attrs.len());

        for md in self.attrs {
            let key = (md.object_type, md.attr_id);
            if attrs.contains_key(&key) {
                return Err(SaiError::DuplicateMetadata {
                    object_type: md.object_type,
                    attr_id: md.attr_id,
                });
            }
            attrs.insert(key, md);
        }

        tracing::debug!("metadata registry built with {} attributes", attrs.len());

        Ok(MetadataRegistry { attrs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttrValueType;

    fn lag_member_attrs() -> Vec<AttrMetadata> {
        vec![
            AttrMetadata::new(
                ObjectType::LagMember,
                AttrId::new(0),
                "SAI_LAG_MEMBER_ATTR_LAG_ID",
                AttrValueType::ObjectId,
            ),
            AttrMetadata::new(
                ObjectType::LagMember,
                AttrId::new(1),
                "SAI_LAG_MEMBER_ATTR_PORT_ID",
                AttrValueType::ObjectId,
            ),
        ]
    }

    #[test]
    fn test_registry_lookup() {
        let registry = MetadataRegistry::builder()
            .attrs(lag_member_attrs())
            .build()
            .unwrap();

        assert_eq!(registry.len(), 2);
        let md = registry.get(ObjectType::LagMember, AttrId::new(1)).unwrap();
        assert_eq!(md.attr_id_name, "SAI_LAG_MEMBER_ATTR_PORT_ID");
        assert!(registry.get(ObjectType::Port, AttrId::new(1)).is_none());
        assert!(registry.knows_object_type(ObjectType::LagMember));
        assert!(!registry.knows_object_type(ObjectType::Port));
    }

    #[test]
    fn test_require_miss() {
        let registry = MetadataRegistry::default();
        let err = registry.require(ObjectType::Port, AttrId::new(7)).unwrap_err();

        assert_eq!(
            err,
            SaiError::MetadataNotFound {
                object_type: ObjectType::Port,
                attr_id: AttrId::new(7),
            }
        );
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut attrs = lag_member_attrs();
        attrs.push(attrs[0].clone());

        let err = MetadataRegistry::builder().attrs(attrs).build().unwrap_err();
        assert!(matches!(err, SaiError::DuplicateMetadata { .. }));
    }

    #[test]
    fn test_attrs_of_sorted() {
        let mut attrs = lag_member_attrs();
        attrs.reverse();
        let registry = MetadataRegistry::builder().attrs(attrs).build().unwrap();

        let ids: Vec<_> = registry
            .attrs_of(ObjectType::LagMember)
            .iter()
            .map(|md| md.attr_id)
            .collect();
        assert_eq!(ids, vec![AttrId::new(0), AttrId::new(1)]);
    }
}
