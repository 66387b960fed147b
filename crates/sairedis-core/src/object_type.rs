//! Object type definitions
//!
//! Every attribute record belongs to exactly one object type; the pair
//! (object type, attribute id) is the key into the metadata registry.

use std::fmt;

/// Object category
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u32)]
pub enum ObjectType {
    #[default]
    Null = 0,
    Port = 1,
    Lag = 2,
    VirtualRouter = 3,
    NextHop = 4,
    NextHopGroup = 5,
    RouterInterface = 6,
    AclTable = 7,
    AclEntry = 8,
    AclCounter = 9,
    MirrorSession = 14,
    Policer = 18,
    Queue = 21,
    BufferPool = 24,
    LagMember = 27,
    Switch = 33,
    TwampSession = 105,
}

impl ObjectType {
    /// All known object types, `Null` excluded
    pub const ALL: [ObjectType; 16] = [
        ObjectType::Port,
        ObjectType::Lag,
        ObjectType::VirtualRouter,
        ObjectType::NextHop,
        ObjectType::NextHopGroup,
        ObjectType::RouterInterface,
        ObjectType::AclTable,
        ObjectType::AclEntry,
        ObjectType::AclCounter,
        ObjectType::MirrorSession,
        ObjectType::Policer,
        ObjectType::Queue,
        ObjectType::BufferPool,
        ObjectType::LagMember,
        ObjectType::Switch,
        ObjectType::TwampSession,
    ];

    /// Parse from the numeric object type
    pub fn from_u32(v: u32) -> Option<Self> {
        match v {
            0 => Some(ObjectType::Null),
            1 => Some(ObjectType::Port),
            2 => Some(ObjectType::Lag),
            3 => Some(ObjectType::VirtualRouter),
            4 => Some(ObjectType::NextHop),
            5 => Some(ObjectType::NextHopGroup),
            6 => Some(ObjectType::RouterInterface),
            7 => Some(ObjectType::AclTable),
            8 => Some(ObjectType::AclEntry),
            9 => Some(ObjectType::AclCounter),
            14 => Some(ObjectType::MirrorSession),
            18 => Some(ObjectType::Policer),
            21 => Some(ObjectType::Queue),
            24 => Some(ObjectType::BufferPool),
            27 => Some(ObjectType::LagMember),
            33 => Some(ObjectType::Switch),
            105 => Some(ObjectType::TwampSession),
            _ => None,
        }
    }

    #[inline]
    pub fn to_u32(self) -> u32 {
        self as u32
    }

    /// Canonical serialized name
    pub fn name(self) -> &'static str {
        match self {
            ObjectType::Null => "SAI_OBJECT_TYPE_NULL",
            ObjectType::Port => "SAI_OBJECT_TYPE_PORT",
            ObjectType::Lag => "SAI_OBJECT_TYPE_LAG",
            ObjectType::VirtualRouter => "SAI_OBJECT_TYPE_VIRTUAL_ROUTER",
            ObjectType::NextHop => "SAI_OBJECT_TYPE_NEXT_HOP",
            ObjectType::NextHopGroup => "SAI_OBJECT_TYPE_NEXT_HOP_GROUP",
            ObjectType::RouterInterface => "SAI_OBJECT_TYPE_ROUTER_INTERFACE",
            ObjectType::AclTable => "SAI_OBJECT_TYPE_ACL_TABLE",
            ObjectType::AclEntry => "SAI_OBJECT_TYPE_ACL_ENTRY",
            ObjectType::AclCounter => "SAI_OBJECT_TYPE_ACL_COUNTER",
            ObjectType::MirrorSession => "SAI_OBJECT_TYPE_MIRROR_SESSION",
            ObjectType::Policer => "SAI_OBJECT_TYPE_POLICER",
            ObjectType::Queue => "SAI_OBJECT_TYPE_QUEUE",
            ObjectType::BufferPool => "SAI_OBJECT_TYPE_BUFFER_POOL",
            ObjectType::LagMember => "SAI_OBJECT_TYPE_LAG_MEMBER",
            ObjectType::Switch => "SAI_OBJECT_TYPE_SWITCH",
            ObjectType::TwampSession => "SAI_OBJECT_TYPE_TWAMP_SESSION",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
