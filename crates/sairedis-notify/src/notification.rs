//! Notification trait and callback table

use std::fmt;
use std::str::FromStr;

use sairedis_core::{ObjectId, SaiError};
use sairedis_meta::MetadataRegistry;

use crate::TwampSessionEventData;

/// Notification kind, named as on the notification channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    TwampSessionEvent,
}

impl NotificationKind {
    pub fn name(self) -> &'static str {
        match self {
            NotificationKind::TwampSessionEvent => "twamp_session_event",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NotificationKind {
    type Err = SaiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "twamp_session_event" => Ok(NotificationKind::TwampSessionEvent),
            other => Err(SaiError::UnknownNotification(other.to_string())),
        }
    }
}

/// Callback invoked with a batch of TWAMP session events
pub type TwampSessionEventCallback = Box<dyn Fn(&[TwampSessionEventData]) + Send + Sync>;

/// Callbacks registered by the switch owner
///
/// Unset callbacks drop the matching notifications.
#[derive(Default)]
pub struct SwitchNotifications {
    pub on_twamp_session_event: Option<TwampSessionEventCallback>,
}

impl SwitchNotifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_twamp_session_event(
        mut self,
        callback: impl Fn(&[TwampSessionEventData]) + Send + Sync + 'static,
    ) -> Self {
        self.on_twamp_session_event = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for SwitchNotifications {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitchNotifications")
            .field("on_twamp_session_event", &self.on_twamp_session_event.is_some())
            .finish()
    }
}

/// A decoded switch notification
pub trait Notification {
    fn kind(&self) -> NotificationKind;

    /// Switch the notification originates from, NULL if unknown
    fn switch_id(&self) -> ObjectId;

    /// Any object id carried by the notification, NULL if none
    fn any_object_id(&self) -> ObjectId;

    /// Check the carried object ids against the registry
    ///
    /// Problems are logged; returns how many were found.
    fn process_metadata(&self, registry: &MetadataRegistry) -> usize;

    /// Hand the notification to the matching callback, if registered
    fn execute_callback(&self, callbacks: &SwitchNotifications);
}
