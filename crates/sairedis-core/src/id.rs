//! Object identity types
//!
//! Object ids are 64-bit handles minted by the client library. They are
//! opaque to everything except the layout helpers below and are never
//! dereferenced here.

use std::fmt;

use crate::ObjectType;

/// Object identifier (reference to an object owned elsewhere)
///
/// Format: \[switch_index:8\]\[object_type:8\]\[index:48\]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// "No object" sentinel
    pub const NULL: ObjectId = ObjectId(0);

    const INDEX_MASK: u64 = 0x0000_FFFF_FFFF_FFFF;

    #[inline]
    pub fn new(id: u64) -> Self {
        ObjectId(id)
    }

    /// Build an id from its switch index, object type and per-type index
    #[inline]
    pub fn from_parts(switch_index: u8, object_type: ObjectType, index: u64) -> Self {
        let id = ((switch_index as u64) << 56)
            | ((object_type.to_u32() as u64 & 0xFF) << 48)
            | (index & Self::INDEX_MASK);
        ObjectId(id)
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self == ObjectId::NULL
    }

    #[inline]
    pub fn switch_index(self) -> u8 {
        (self.0 >> 56) as u8
    }

    /// Object type encoded in the id, `None` for NULL or unknown types
    pub fn object_type(self) -> Option<ObjectType> {
        if self.is_null() {
            return None;
        }
        ObjectType::from_u32(((self.0 >> 48) & 0xFF) as u32)
    }

    #[inline]
    pub fn index(self) -> u64 {
        self.0 & Self::INDEX_MASK
    }

    /// Id of the switch this object belongs to (NULL for NULL)
    pub fn switch_id(self) -> ObjectId {
        if self.is_null() {
            return ObjectId::NULL;
        }
        let switch_index = self.switch_index();
        ObjectId::from_parts(switch_index, ObjectType::Switch, switch_index as u64)
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({:#018x})", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oid:{:#x}", self.0)
    }
}

/// Bounded list of object ids
///
/// `count` is authoritative; `list.len()` is the storage capacity and
/// slots past `count` hold unspecified values.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ObjectList {
    pub count: u32,
    pub list: Vec<ObjectId>,
}

impl ObjectList {
    /// List whose count covers every element
    pub fn new(list: Vec<ObjectId>) -> Self {
        ObjectList {
            count: list.len() as u32,
            list,
        }
    }

    /// Empty list with `capacity` NULL slots
    pub fn with_capacity(capacity: usize) -> Self {
        ObjectList {
            count: 0,
            list: vec![ObjectId::NULL; capacity],
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.list.len()
    }

    /// Populated region, bounded by capacity
    pub fn as_slice(&self) -> &[ObjectId] {
        let len = (self.count as usize).min(self.list.len());
        &self.list[..len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [ObjectId] {
        let len = (self.count as usize).min(self.list.len());
        &mut self.list[..len]
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl From<Vec<ObjectId>> for ObjectList {
    fn from(list: Vec<ObjectId>) -> Self {
        ObjectList::new(list)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn arb_object_type() -> impl Strategy<Value = ObjectType> {
        prop::sample::select(ObjectType::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_from_parts_roundtrip(
            switch_index in any::<u8>(),
            object_type in arb_object_type(),
            index in 0u64..=0x0000_FFFF_FFFF_FFFF,
        ) {
            let id = ObjectId::from_parts(switch_index, object_type, index);

            prop_assert_eq!(id.switch_index(), switch_index);
            prop_assert_eq!(id.object_type(), Some(object_type));
            prop_assert_eq!(id.index(), index);
            prop_assert_eq!(id.switch_id().switch_index(), switch_index);
        }
    }

    #[test]
    fn test_object_id_parts() {
        let id = ObjectId::from_parts(3, ObjectType::Port, 0x1234);

        assert_eq!(id.switch_index(), 3);
        assert_eq!(id.object_type(), Some(ObjectType::Port));
        assert_eq!(id.index(), 0x1234);
    }

    #[test]
    fn test_object_id_index_truncation() {
        let id = ObjectId::from_parts(1, ObjectType::Lag, u64::MAX);
        assert_eq!(id.index(), 0x0000_FFFF_FFFF_FFFF);
        assert_eq!(id.object_type(), Some(ObjectType::Lag));
    }

    #[test]
    fn test_switch_id() {
        let port = ObjectId::from_parts(2, ObjectType::Port, 77);
        let switch = port.switch_id();

        assert_eq!(switch.object_type(), Some(ObjectType::Switch));
        assert_eq!(switch.switch_index(), 2);
        assert_eq!(switch.switch_id(), switch);
        assert_eq!(ObjectId::NULL.switch_id(), ObjectId::NULL);
    }

    #[test]
    fn test_null_has_no_type() {
        assert!(ObjectId::NULL.is_null());
        assert_eq!(ObjectId::NULL.object_type(), None);
    }

    #[test]
    fn test_object_list_bounds() {
        let mut list = ObjectList::new(vec![ObjectId::new(1), ObjectId::new(2)]);
        list.count = 5;
        assert_eq!(list.as_slice().len(), 2);

        let empty = ObjectList::with_capacity(4);
        assert!(empty.is_empty());
        assert_eq!(empty.capacity(), 4);
        assert!(empty.as_slice().is_empty());
    }
}
