//! Attribute records
//!
//! An attribute is an (id, value) pair. Which `AttributeValue` variant a
//! given id carries is declared by the metadata registry; the record alone
//! does not say whether its value is meant to hold object references.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::{ObjectId, ObjectList};

/// Attribute identifier, scoped to an object type
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AttrId(pub u32);

impl AttrId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        AttrId(id)
    }
}

impl fmt::Debug for AttrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Attr({:#x})", self.0)
    }
}

impl fmt::Display for AttrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payload of an ACL match field or ACL action parameter
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AclData {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    S32(i32),
    Mac([u8; 6]),
    Ipv4(Ipv4Addr),
    Oid(ObjectId),
    ObjList(ObjectList),
}

impl AclData {
    pub fn kind(&self) -> &'static str {
        match self {
            AclData::Bool(_) => "bool",
            AclData::U8(_) => "u8",
            AclData::U16(_) => "u16",
            AclData::U32(_) => "u32",
            AclData::S32(_) => "s32",
            AclData::Mac(_) => "mac",
            AclData::Ipv4(_) => "ipv4",
            AclData::Oid(_) => "oid",
            AclData::ObjList(_) => "objlist",
        }
    }
}

/// Attribute value
///
/// ACL fields and actions are `None` when disabled; an enabled entry
/// always carries its payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeValue {
    Bool(bool),
    Chardata(String),
    U8(u8),
    S8(i8),
    U16(u16),
    S16(i16),
    U32(u32),
    S32(i32),
    U64(u64),
    S64(i64),
    Mac([u8; 6]),
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    Oid(ObjectId),
    ObjList(ObjectList),
    U8List(Vec<u8>),
    U32List(Vec<u32>),
    S32List(Vec<i32>),
    AclField(Option<AclData>),
    AclAction(Option<AclData>),
}

impl AttributeValue {
    /// Short variant name, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            AttributeValue::Bool(_) => "bool",
            AttributeValue::Chardata(_) => "chardata",
            AttributeValue::U8(_) => "u8",
            AttributeValue::S8(_) => "s8",
            AttributeValue::U16(_) => "u16",
            AttributeValue::S16(_) => "s16",
            AttributeValue::U32(_) => "u32",
            AttributeValue::S32(_) => "s32",
            AttributeValue::U64(_) => "u64",
            AttributeValue::S64(_) => "s64",
            AttributeValue::Mac(_) => "mac",
            AttributeValue::Ipv4(_) => "ipv4",
            AttributeValue::Ipv6(_) => "ipv6",
            AttributeValue::Oid(_) => "oid",
            AttributeValue::ObjList(_) => "objlist",
            AttributeValue::U8List(_) => "u8list",
            AttributeValue::U32List(_) => "u32list",
            AttributeValue::S32List(_) => "s32list",
            AttributeValue::AclField(_) => "aclfield",
            AttributeValue::AclAction(_) => "aclaction",
        }
    }
}

/// Attribute record
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub id: AttrId,
    pub value: AttributeValue,
}

impl Attribute {
    pub fn new(id: AttrId, value: AttributeValue) -> Self {
        Attribute { id, value }
    }

    pub fn oid(id: AttrId, oid: ObjectId) -> Self {
        Attribute::new(id, AttributeValue::Oid(oid))
    }

    pub fn objlist(id: AttrId, list: Vec<ObjectId>) -> Self {
        Attribute::new(id, AttributeValue::ObjList(ObjectList::new(list)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_constructors() {
        let attr = Attribute::oid(AttrId::new(4), ObjectId::new(9));
        assert_eq!(attr.value, AttributeValue::Oid(ObjectId::new(9)));

        let attr = Attribute::objlist(AttrId::new(5), vec![ObjectId::new(1), ObjectId::new(2)]);
        match attr.value {
            AttributeValue::ObjList(list) => assert_eq!(list.count, 2),
            other => panic!("unexpected value {:?}", other),
        }
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(AttributeValue::AclField(None).kind(), "aclfield");
        assert_eq!(AclData::ObjList(ObjectList::default()).kind(), "objlist");
    }
}
