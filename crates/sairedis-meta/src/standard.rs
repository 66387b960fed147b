//! Standard attribute set
//!
//! Metadata for the attributes the client library handles out of the box.
//! ACL entry fields and actions live in their own id ranges.

use sairedis_core::{AttrId, ObjectType, SaiResult};

use crate::{AttrMetadata, AttrValueType, MetadataRegistry};

pub mod switch {
    use super::AttrId;

    pub const PORT_LIST: AttrId = AttrId::new(2);
    pub const CPU_PORT: AttrId = AttrId::new(4);
    pub const DEFAULT_VIRTUAL_ROUTER_ID: AttrId = AttrId::new(27);
    pub const SRC_MAC_ADDRESS: AttrId = AttrId::new(46);
}

pub mod port {
    use super::AttrId;

    pub const QOS_QUEUE_LIST: AttrId = AttrId::new(20);
    pub const SPEED: AttrId = AttrId::new(32);
    pub const ADMIN_STATE: AttrId = AttrId::new(35);
    pub const INGRESS_ACL: AttrId = AttrId::new(61);
    pub const INGRESS_MIRROR_SESSION: AttrId = AttrId::new(64);
}

pub mod lag_member {
    use super::AttrId;

    pub const LAG_ID: AttrId = AttrId::new(0);
    pub const PORT_ID: AttrId = AttrId::new(1);
    pub const EGRESS_DISABLE: AttrId = AttrId::new(2);
}

pub mod acl_entry {
    use super::AttrId;

    pub const TABLE_ID: AttrId = AttrId::new(0);
    pub const PRIORITY: AttrId = AttrId::new(1);
    pub const ADMIN_STATE: AttrId = AttrId::new(2);
    pub const FIELD_IN_PORT: AttrId = AttrId::new(0x1000);
    pub const FIELD_IN_PORTS: AttrId = AttrId::new(0x1001);
    pub const FIELD_DST_IP: AttrId = AttrId::new(0x1008);
    pub const FIELD_L4_DST_PORT: AttrId = AttrId::new(0x100F);
    pub const ACTION_REDIRECT: AttrId = AttrId::new(0x2000);
    pub const ACTION_PACKET_ACTION: AttrId = AttrId::new(0x2002);
    pub const ACTION_MIRROR_INGRESS: AttrId = AttrId::new(0x2006);
    pub const ACTION_COUNTER: AttrId = AttrId::new(0x2008);
}

pub mod twamp_session {
    use super::AttrId;

    pub const PORT: AttrId = AttrId::new(0);
    pub const VIRTUAL_ROUTER: AttrId = AttrId::new(9);
    pub const SESSION_ENABLE_TRANSMIT: AttrId = AttrId::new(12);
    pub const TX_INTERVAL: AttrId = AttrId::new(19);
}

/// Metadata for every attribute in this module
pub fn attributes() -> Vec<AttrMetadata> {
    use AttrValueType as T;
    use ObjectType as O;

    vec![
        // Switch
        AttrMetadata::new(O::Switch, switch::PORT_LIST, "SAI_SWITCH_ATTR_PORT_LIST", T::ObjectList)
            .with_allowed(&[O::Port]),
        AttrMetadata::new(O::Switch, switch::CPU_PORT, "SAI_SWITCH_ATTR_CPU_PORT", T::ObjectId)
            .with_allowed(&[O::Port]),
        AttrMetadata::new(
            O::Switch,
            switch::DEFAULT_VIRTUAL_ROUTER_ID,
            "SAI_SWITCH_ATTR_DEFAULT_VIRTUAL_ROUTER_ID",
            T::ObjectId,
        )
        .with_allowed(&[O::VirtualRouter]),
        AttrMetadata::new(
            O::Switch,
            switch::SRC_MAC_ADDRESS,
            "SAI_SWITCH_ATTR_SRC_MAC_ADDRESS",
            T::Mac,
        ),
        // Port
        AttrMetadata::new(
            O::Port,
            port::QOS_QUEUE_LIST,
            "SAI_PORT_ATTR_QOS_QUEUE_LIST",
            T::ObjectList,
        )
        .with_allowed(&[O::Queue]),
        AttrMetadata::new(O::Port, port::SPEED, "SAI_PORT_ATTR_SPEED", T::U32),
        AttrMetadata::new(O::Port, port::ADMIN_STATE, "SAI_PORT_ATTR_ADMIN_STATE", T::Bool),
        AttrMetadata::new(O::Port, port::INGRESS_ACL, "SAI_PORT_ATTR_INGRESS_ACL", T::ObjectId)
            .with_allowed(&[O::AclTable]),
        AttrMetadata::new(
            O::Port,
            port::INGRESS_MIRROR_SESSION,
            "SAI_PORT_ATTR_INGRESS_MIRROR_SESSION",
            T::ObjectList,
        )
        .with_allowed(&[O::MirrorSession]),
        // LAG member
        AttrMetadata::new(
            O::LagMember,
            lag_member::LAG_ID,
            "SAI_LAG_MEMBER_ATTR_LAG_ID",
            T::ObjectId,
        )
        .with_allowed(&[O::Lag]),
        AttrMetadata::new(
            O::LagMember,
            lag_member::PORT_ID,
            "SAI_LAG_MEMBER_ATTR_PORT_ID",
            T::ObjectId,
        )
        .with_allowed(&[O::Port]),
        AttrMetadata::new(
            O::LagMember,
            lag_member::EGRESS_DISABLE,
            "SAI_LAG_MEMBER_ATTR_EGRESS_DISABLE",
            T::Bool,
        ),
        // ACL entry
        AttrMetadata::new(
            O::AclEntry,
            acl_entry::TABLE_ID,
            "SAI_ACL_ENTRY_ATTR_TABLE_ID",
            T::ObjectId,
        )
        .with_allowed(&[O::AclTable]),
        AttrMetadata::new(O::AclEntry, acl_entry::PRIORITY, "SAI_ACL_ENTRY_ATTR_PRIORITY", T::U32),
        AttrMetadata::new(
            O::AclEntry,
            acl_entry::ADMIN_STATE,
            "SAI_ACL_ENTRY_ATTR_ADMIN_STATE",
            T::Bool,
        ),
        AttrMetadata::new(
            O::AclEntry,
            acl_entry::FIELD_IN_PORT,
            "SAI_ACL_ENTRY_ATTR_FIELD_IN_PORT",
            T::AclFieldDataObjectId,
        )
        .with_allowed(&[O::Port]),
        AttrMetadata::new(
            O::AclEntry,
            acl_entry::FIELD_IN_PORTS,
            "SAI_ACL_ENTRY_ATTR_FIELD_IN_PORTS",
            T::AclFieldDataObjectList,
        )
        .with_allowed(&[O::Port]),
        AttrMetadata::new(
            O::AclEntry,
            acl_entry::FIELD_DST_IP,
            "SAI_ACL_ENTRY_ATTR_FIELD_DST_IP",
            T::AclFieldDataIpv4,
        ),
        AttrMetadata::new(
            O::AclEntry,
            acl_entry::FIELD_L4_DST_PORT,
            "SAI_ACL_ENTRY_ATTR_FIELD_L4_DST_PORT",
            T::AclFieldDataU16,
        ),
        AttrMetadata::new(
            O::AclEntry,
            acl_entry::ACTION_REDIRECT,
            "SAI_ACL_ENTRY_ATTR_ACTION_REDIRECT",
            T::AclActionDataObjectId,
        )
        .with_allowed(&[O::Port, O::Lag, O::NextHop, O::NextHopGroup]),
        AttrMetadata::new(
            O::AclEntry,
            acl_entry::ACTION_PACKET_ACTION,
            "SAI_ACL_ENTRY_ATTR_ACTION_PACKET_ACTION",
            T::AclActionDataS32,
        ),
        AttrMetadata::new(
            O::AclEntry,
            acl_entry::ACTION_MIRROR_INGRESS,
            "SAI_ACL_ENTRY_ATTR_ACTION_MIRROR_INGRESS",
            T::AclActionDataObjectList,
        )
        .with_allowed(&[O::MirrorSession]),
        AttrMetadata::new(
            O::AclEntry,
            acl_entry::ACTION_COUNTER,
            "SAI_ACL_ENTRY_ATTR_ACTION_COUNTER",
            T::AclActionDataObjectId,
        )
        .with_allowed(&[O::AclCounter]),
        // TWAMP session
        AttrMetadata::new(
            O::TwampSession,
            twamp_session::PORT,
            "SAI_TWAMP_SESSION_ATTR_PORT",
            T::ObjectId,
        )
        .with_allowed(&[O::Port]),
        AttrMetadata::new(
            O::TwampSession,
            twamp_session::VIRTUAL_ROUTER,
            "SAI_TWAMP_SESSION_ATTR_VIRTUAL_ROUTER",
            T::ObjectId,
        )
        .with_allowed(&[O::VirtualRouter]),
        AttrMetadata::new(
            O::TwampSession,
            twamp_session::SESSION_ENABLE_TRANSMIT,
            "SAI_TWAMP_SESSION_ATTR_SESSION_ENABLE_TRANSMIT",
            T::Bool,
        ),
        AttrMetadata::new(
            O::TwampSession,
            twamp_session::TX_INTERVAL,
            "SAI_TWAMP_SESSION_ATTR_TX_INTERVAL",
            T::U32,
        ),
    ]
}

/// Registry holding the standard attribute set
pub fn registry() -> SaiResult<MetadataRegistry> {
    MetadataRegistry::builder().attrs(attributes()).build()
}
