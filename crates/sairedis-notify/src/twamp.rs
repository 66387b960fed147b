//! TWAMP session event notification

use sairedis_core::{ObjectId, ObjectType};
use sairedis_meta::MetadataRegistry;

use crate::{Notification, NotificationKind, SwitchNotifications};

/// TWAMP session state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TwampSessionState {
    #[default]
    Inactive,
    Active,
}

/// Single statistic reported with a session event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TwampSessionStat {
    pub id: u32,
    pub value: u64,
}

/// One session event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwampSessionEventData {
    pub twamp_session_id: ObjectId,
    pub session_state: TwampSessionState,
    pub session_stats: Vec<TwampSessionStat>,
}

impl TwampSessionEventData {
    pub fn new(twamp_session_id: ObjectId, session_state: TwampSessionState) -> Self {
        TwampSessionEventData {
            twamp_session_id,
            session_state,
            session_stats: Vec::new(),
        }
    }
}

/// Batch of TWAMP session events from one switch
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationTwampSessionEvent {
    data: Vec<TwampSessionEventData>,
}

impl NotificationTwampSessionEvent {
    pub fn new(data: Vec<TwampSessionEventData>) -> Self {
        NotificationTwampSessionEvent { data }
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[TwampSessionEventData] {
        &self.data
    }

    /// Non-NULL session ids that are not TWAMP sessions
    pub fn invalid_session_ids(&self) -> Vec<ObjectId> {
        self.data
            .iter()
            .map(|d| d.twamp_session_id)
            .filter(|oid| !oid.is_null() && oid.object_type() != Some(ObjectType::TwampSession))
            .collect()
    }
}

impl Notification for NotificationTwampSessionEvent {
    fn kind(&self) -> NotificationKind {
        NotificationKind::TwampSessionEvent
    }

    fn switch_id(&self) -> ObjectId {
        self.any_object_id().switch_id()
    }

    fn any_object_id(&self) -> ObjectId {
        self.data
            .iter()
            .map(|d| d.twamp_session_id)
            .find(|oid| !oid.is_null())
            .unwrap_or(ObjectId::NULL)
    }

    fn process_metadata(&self, registry: &MetadataRegistry) -> usize {
        let mut problems = 0;

        if !registry.knows_object_type(ObjectType::TwampSession) {
            tracing::warn!("{} not present in metadata registry", ObjectType::TwampSession);
            problems += 1;
        }

        for oid in self.invalid_session_ids() {
            tracing::warn!("twamp session event for {} which is not a twamp session", oid);
            problems += 1;
        }

        problems
    }

    fn execute_callback(&self, callbacks: &SwitchNotifications) {
        match &callbacks.on_twamp_session_event {
            Some(callback) => callback(self.data()),
            None => tracing::debug!(
                "no callback for {}, dropping {} events",
                self.kind(),
                self.count()
            ),
        }
    }
}
