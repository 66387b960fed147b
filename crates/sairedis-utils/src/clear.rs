//! Object id scrubbing
//!
//! Before an object's attributes are persisted, diffed against another
//! switch's view or torn down, every embedded object id has to be replaced
//! with the NULL id. Which attributes hold ids is only known through the
//! metadata registry, so the scrubber resolves each attribute's metadata
//! first and clears according to the declared value type.

use std::sync::Arc;

use sairedis_core::{
    AclData, Attribute, AttributeValue, ObjectId, ObjectList, ObjectType, SaiError, SaiResult,
};
use sairedis_meta::{AttrMetadata, AttrValueType, MetadataRegistry};

use crate::{MissingMetadataPolicy, ScrubConfig};

/// Set every populated slot of `list` to NULL
///
/// Slots past `count` and the count itself are left as they are.
pub fn clear_oid_list(list: &mut ObjectList) {
    for oid in list.as_mut_slice() {
        *oid = ObjectId::NULL;
    }
}

/// Clear the object ids held by `value`, interpreted through `md`
///
/// Returns the number of reference slots overwritten. Disabled ACL fields
/// and actions are left untouched. An oid attribute whose value type has
/// no clearing rule is an error, as is a value whose variant disagrees
/// with an oid value type.
pub fn clear_attr_value(md: &AttrMetadata, value: &mut AttributeValue) -> SaiResult<usize> {
    use AttrValueType as T;
    use AttributeValue as V;

    match (md.value_type, value) {
        (T::ObjectId, V::Oid(oid)) => Ok(clear_slot(md, 0, oid)),
        (T::ObjectList, V::ObjList(list)) => Ok(clear_slots(md, list)),
        (T::AclFieldDataObjectId, V::AclField(data))
        | (T::AclActionDataObjectId, V::AclAction(data)) => match data {
            Some(AclData::Oid(oid)) => Ok(clear_slot(md, 0, oid)),
            Some(other) => Err(mismatch(md, other.kind())),
            None => Ok(0),
        },
        (T::AclFieldDataObjectList, V::AclField(data))
        | (T::AclActionDataObjectList, V::AclAction(data)) => match data {
            Some(AclData::ObjList(list)) => Ok(clear_slots(md, list)),
            Some(other) => Err(mismatch(md, other.kind())),
            None => Ok(0),
        },
        (t, value) if t.is_oid() => Err(mismatch(md, value.kind())),
        (t, _) if md.is_oid_attribute => {
            let err = SaiError::UnhandledOidAttribute {
                object_type: md.object_type,
                attr_name: md.attr_id_name.clone(),
                value_type: t.name().to_string(),
            };
            tracing::error!("{}", err);
            Err(err)
        }
        _ => Ok(0),
    }
}

fn clear_slot(md: &AttrMetadata, slot: usize, oid: &mut ObjectId) -> usize {
    tracing::trace!("{}[{}]: {} -> NULL", md.attr_id_name, slot, oid);
    *oid = ObjectId::NULL;
    1
}

fn clear_slots(md: &AttrMetadata, list: &mut ObjectList) -> usize {
    list.as_mut_slice()
        .iter_mut()
        .enumerate()
        .map(|(slot, oid)| clear_slot(md, slot, oid))
        .sum()
}

fn mismatch(md: &AttrMetadata, actual: &'static str) -> SaiError {
    let err = SaiError::ValueTypeMismatch {
        object_type: md.object_type,
        attr_name: md.attr_id_name.clone(),
        expected: md.value_type.name().to_string(),
        actual,
    };
    tracing::error!("{}", err);
    err
}

/// Clears object ids from attribute records using a shared registry
#[derive(Clone, Debug)]
pub struct OidScrubber {
    registry: Arc<MetadataRegistry>,
    config: ScrubConfig,
}

impl OidScrubber {
    pub fn new(registry: Arc<MetadataRegistry>) -> Self {
        Self::with_config(registry, ScrubConfig::default())
    }

    pub fn with_config(registry: Arc<MetadataRegistry>, config: ScrubConfig) -> Self {
        OidScrubber { registry, config }
    }

    pub fn registry(&self) -> &MetadataRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ScrubConfig {
        &self.config
    }

    /// Clear every object id in `attrs`
    ///
    /// Returns the number of reference slots overwritten. Stops at the
    /// first error; attributes before it are already cleared.
    pub fn clear_oid_values(
        &self,
        object_type: ObjectType,
        attrs: &mut [Attribute],
    ) -> SaiResult<usize> {
        tracing::debug!("clearing oids of {} attributes of {}", attrs.len(), object_type);

        let mut cleared = 0;
        for attr in attrs.iter_mut() {
            cleared += self.clear_attribute(object_type, attr)?;
        }

        Ok(cleared)
    }

    /// Clear the object ids of a single attribute
    pub fn clear_attribute(
        &self,
        object_type: ObjectType,
        attr: &mut Attribute,
    ) -> SaiResult<usize> {
        let md = match self.registry.get(object_type, attr.id) {
            Some(md) => md,
            None => {
                let err = SaiError::MetadataNotFound {
                    object_type,
                    attr_id: attr.id,
                };
                return match self.config.on_missing_metadata {
                    MissingMetadataPolicy::Abort => {
                        tracing::error!("{}", err);
                        Err(err)
                    }
                    MissingMetadataPolicy::Skip => {
                        tracing::warn!("{}, skipping", err);
                        Ok(0)
                    }
                };
            }
        };

        clear_attr_value(md, &mut attr.value)
    }
}
