//! Attribute value types

use std::fmt;

use sairedis_core::{AclData, AttributeValue};

/// Declared value shape of an attribute
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttrValueType {
    Bool,
    Chardata,
    U8,
    S8,
    U16,
    S16,
    U32,
    S32,
    U64,
    S64,
    Mac,
    Ipv4,
    Ipv6,
    ObjectId,
    ObjectList,
    U8List,
    U32List,
    S32List,
    AclFieldDataBool,
    AclFieldDataU8,
    AclFieldDataU16,
    AclFieldDataU32,
    AclFieldDataMac,
    AclFieldDataIpv4,
    AclFieldDataObjectId,
    AclFieldDataObjectList,
    AclActionDataU32,
    AclActionDataS32,
    AclActionDataMac,
    AclActionDataIpv4,
    AclActionDataObjectId,
    AclActionDataObjectList,
}

impl AttrValueType {
    /// Every value type
    pub const ALL: [AttrValueType; 32] = [
        AttrValueType::Bool,
        AttrValueType::Chardata,
        AttrValueType::U8,
        AttrValueType::S8,
        AttrValueType::U16,
        AttrValueType::S16,
        AttrValueType::U32,
        AttrValueType::S32,
        AttrValueType::U64,
        AttrValueType::S64,
        AttrValueType::Mac,
        AttrValueType::Ipv4,
        AttrValueType::Ipv6,
        AttrValueType::ObjectId,
        AttrValueType::ObjectList,
        AttrValueType::U8List,
        AttrValueType::U32List,
        AttrValueType::S32List,
        AttrValueType::AclFieldDataBool,
        AttrValueType::AclFieldDataU8,
        AttrValueType::AclFieldDataU16,
        AttrValueType::AclFieldDataU32,
        AttrValueType::AclFieldDataMac,
        AttrValueType::AclFieldDataIpv4,
        AttrValueType::AclFieldDataObjectId,
        AttrValueType::AclFieldDataObjectList,
        AttrValueType::AclActionDataU32,
        AttrValueType::AclActionDataS32,
        AttrValueType::AclActionDataMac,
        AttrValueType::AclActionDataIpv4,
        AttrValueType::AclActionDataObjectId,
        AttrValueType::AclActionDataObjectList,
    ];

    /// Does a value of this type carry object ids?
    pub fn is_oid(self) -> bool {
        matches!(
            self,
            AttrValueType::ObjectId
                | AttrValueType::ObjectList
                | AttrValueType::AclFieldDataObjectId
                | AttrValueType::AclFieldDataObjectList
                | AttrValueType::AclActionDataObjectId
                | AttrValueType::AclActionDataObjectList
        )
    }

    pub fn is_acl_field(self) -> bool {
        matches!(
            self,
            AttrValueType::AclFieldDataBool
                | AttrValueType::AclFieldDataU8
                | AttrValueType::AclFieldDataU16
                | AttrValueType::AclFieldDataU32
                | AttrValueType::AclFieldDataMac
                | AttrValueType::AclFieldDataIpv4
                | AttrValueType::AclFieldDataObjectId
                | AttrValueType::AclFieldDataObjectList
        )
    }

    pub fn is_acl_action(self) -> bool {
        matches!(
            self,
            AttrValueType::AclActionDataU32
                | AttrValueType::AclActionDataS32
                | AttrValueType::AclActionDataMac
                | AttrValueType::AclActionDataIpv4
                | AttrValueType::AclActionDataObjectId
                | AttrValueType::AclActionDataObjectList
        )
    }

    /// Check whether `value` is a variant this type may hold
    ///
    /// Disabled ACL fields and actions match their ACL type regardless of
    /// payload.
    pub fn matches(self, value: &AttributeValue) -> bool {
        use AttrValueType as T;
        use AttributeValue as V;

        match (self, value) {
            (T::Bool, V::Bool(_))
            | (T::Chardata, V::Chardata(_))
            | (T::U8, V::U8(_))
            | (T::S8, V::S8(_))
            | (T::U16, V::U16(_))
            | (T::S16, V::S16(_))
            | (T::U32, V::U32(_))
            | (T::S32, V::S32(_))
            | (T::U64, V::U64(_))
            | (T::S64, V::S64(_))
            | (T::Mac, V::Mac(_))
            | (T::Ipv4, V::Ipv4(_))
            | (T::Ipv6, V::Ipv6(_))
            | (T::ObjectId, V::Oid(_))
            | (T::ObjectList, V::ObjList(_))
            | (T::U8List, V::U8List(_))
            | (T::U32List, V::U32List(_))
            | (T::S32List, V::S32List(_)) => true,
            (t, V::AclField(data)) if t.is_acl_field() => {
                data.as_ref().map_or(true, |d| t.matches_acl_data(d))
            }
            (t, V::AclAction(data)) if t.is_acl_action() => {
                data.as_ref().map_or(true, |d| t.matches_acl_data(d))
            }
            _ => false,
        }
    }

    fn matches_acl_data(self, data: &AclData) -> bool {
        use AttrValueType as T;

        matches!(
            (self, data),
            (T::AclFieldDataBool, AclData::Bool(_))
                | (T::AclFieldDataU8, AclData::U8(_))
                | (T::AclFieldDataU16, AclData::U16(_))
                | (T::AclFieldDataU32 | T::AclActionDataU32, AclData::U32(_))
                | (T::AclActionDataS32, AclData::S32(_))
                | (T::AclFieldDataMac | T::AclActionDataMac, AclData::Mac(_))
                | (T::AclFieldDataIpv4 | T::AclActionDataIpv4, AclData::Ipv4(_))
                | (T::AclFieldDataObjectId | T::AclActionDataObjectId, AclData::Oid(_))
                | (
                    T::AclFieldDataObjectList | T::AclActionDataObjectList,
                    AclData::ObjList(_)
                )
        )
    }

    /// Canonical serialized name
    pub fn name(self) -> &'static str {
        match self {
            AttrValueType::Bool => "SAI_ATTR_VALUE_TYPE_BOOL",
            AttrValueType::Chardata => "SAI_ATTR_VALUE_TYPE_CHARDATA",
            AttrValueType::U8 => "SAI_ATTR_VALUE_TYPE_UINT8",
            AttrValueType::S8 => "SAI_ATTR_VALUE_TYPE_INT8",
            AttrValueType::U16 => "SAI_ATTR_VALUE_TYPE_UINT16",
            AttrValueType::S16 => "SAI_ATTR_VALUE_TYPE_INT16",
            AttrValueType::U32 => "SAI_ATTR_VALUE_TYPE_UINT32",
            AttrValueType::S32 => "SAI_ATTR_VALUE_TYPE_INT32",
            AttrValueType::U64 => "SAI_ATTR_VALUE_TYPE_UINT64",
            AttrValueType::S64 => "SAI_ATTR_VALUE_TYPE_INT64",
            AttrValueType::Mac => "SAI_ATTR_VALUE_TYPE_MAC",
            AttrValueType::Ipv4 => "SAI_ATTR_VALUE_TYPE_IPV4",
            AttrValueType::Ipv6 => "SAI_ATTR_VALUE_TYPE_IPV6",
            AttrValueType::ObjectId => "SAI_ATTR_VALUE_TYPE_OBJECT_ID",
            AttrValueType::ObjectList => "SAI_ATTR_VALUE_TYPE_OBJECT_LIST",
            AttrValueType::U8List => "SAI_ATTR_VALUE_TYPE_UINT8_LIST",
            AttrValueType::U32List => "SAI_ATTR_VALUE_TYPE_UINT32_LIST",
            AttrValueType::S32List => "SAI_ATTR_VALUE_TYPE_INT32_LIST",
            AttrValueType::AclFieldDataBool => "SAI_ATTR_VALUE_TYPE_ACL_FIELD_DATA_BOOL",
            AttrValueType::AclFieldDataU8 => "SAI_ATTR_VALUE_TYPE_ACL_FIELD_DATA_UINT8",
            AttrValueType::AclFieldDataU16 => "SAI_ATTR_VALUE_TYPE_ACL_FIELD_DATA_UINT16",
            AttrValueType::AclFieldDataU32 => "SAI_ATTR_VALUE_TYPE_ACL_FIELD_DATA_UINT32",
            AttrValueType::AclFieldDataMac => "SAI_ATTR_VALUE_TYPE_ACL_FIELD_DATA_MAC",
            AttrValueType::AclFieldDataIpv4 => "SAI_ATTR_VALUE_TYPE_ACL_FIELD_DATA_IPV4",
            AttrValueType::AclFieldDataObjectId => "SAI_ATTR_VALUE_TYPE_ACL_FIELD_DATA_OBJECT_ID",
            AttrValueType::AclFieldDataObjectList => {
                "SAI_ATTR_VALUE_TYPE_ACL_FIELD_DATA_OBJECT_LIST"
            }
            AttrValueType::AclActionDataU32 => "SAI_ATTR_VALUE_TYPE_ACL_ACTION_DATA_UINT32",
            AttrValueType::AclActionDataS32 => "SAI_ATTR_VALUE_TYPE_ACL_ACTION_DATA_INT32",
            AttrValueType::AclActionDataMac => "SAI_ATTR_VALUE_TYPE_ACL_ACTION_DATA_MAC",
            AttrValueType::AclActionDataIpv4 => "SAI_ATTR_VALUE_TYPE_ACL_ACTION_DATA_IPV4",
            AttrValueType::AclActionDataObjectId => {
                "SAI_ATTR_VALUE_TYPE_ACL_ACTION_DATA_OBJECT_ID"
            }
            AttrValueType::AclActionDataObjectList => {
                "SAI_ATTR_VALUE_TYPE_ACL_ACTION_DATA_OBJECT_LIST"
            }
        }
    }
}

impl fmt::Display for AttrValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sairedis_core::{ObjectId, ObjectList};

    fn arb_oid() -> impl Strategy<Value = ObjectId> {
        any::<u64>().prop_map(ObjectId::new)
    }

    fn arb_oid_list() -> impl Strategy<Value = ObjectList> {
        prop::collection::vec(arb_oid(), 0..4).prop_map(ObjectList::new)
    }

    fn arb_oid_acl_data() -> impl Strategy<Value = AclData> {
        prop_oneof![
            arb_oid().prop_map(AclData::Oid),
            arb_oid_list().prop_map(AclData::ObjList),
        ]
    }

    /// Values that carry object ids
    fn arb_oid_value() -> impl Strategy<Value = AttributeValue> {
        prop_oneof![
            arb_oid().prop_map(AttributeValue::Oid),
            arb_oid_list().prop_map(AttributeValue::ObjList),
            arb_oid_acl_data().prop_map(|d| AttributeValue::AclField(Some(d))),
            arb_oid_acl_data().prop_map(|d| AttributeValue::AclAction(Some(d))),
        ]
    }

    proptest! {
        #[test]
        fn prop_only_oid_types_hold_oids(
            value_type in prop::sample::select(AttrValueType::ALL.to_vec()),
            value in arb_oid_value(),
        ) {
            if value_type.matches(&value) {
                prop_assert!(value_type.is_oid(), "{} accepted {:?}", value_type, value);
            }
        }

        #[test]
        fn prop_every_oid_value_has_one_oid_type(value in arb_oid_value()) {
            let matching: Vec<_> = AttrValueType::ALL
                .iter()
                .filter(|t| t.matches(&value))
                .collect();
            prop_assert_eq!(matching.len(), 1);
            prop_assert!(matching[0].is_oid());
        }
    }

    #[test]
    fn test_oid_types() {
        assert!(AttrValueType::ObjectId.is_oid());
        assert!(AttrValueType::AclActionDataObjectList.is_oid());
        assert!(!AttrValueType::U32List.is_oid());
        assert!(!AttrValueType::AclFieldDataU32.is_oid());
    }

    #[test]
    fn test_matches_scalar() {
        assert!(AttrValueType::ObjectId.matches(&AttributeValue::Oid(ObjectId::NULL)));
        assert!(!AttrValueType::ObjectId.matches(&AttributeValue::U64(0)));
        assert!(AttrValueType::ObjectList.matches(&AttributeValue::ObjList(ObjectList::default())));
    }

    #[test]
    fn test_matches_acl() {
        let field = AttributeValue::AclField(Some(AclData::Oid(ObjectId::new(1))));
        assert!(AttrValueType::AclFieldDataObjectId.matches(&field));
        assert!(!AttrValueType::AclFieldDataObjectList.matches(&field));
        assert!(!AttrValueType::AclActionDataObjectId.matches(&field));

        // Disabled entries carry no payload to disagree with
        assert!(AttrValueType::AclFieldDataObjectList.matches(&AttributeValue::AclField(None)));
        assert!(AttrValueType::AclActionDataS32.matches(&AttributeValue::AclAction(None)));
        assert!(!AttrValueType::AclActionDataS32.matches(&AttributeValue::AclField(None)));
    }
}
