//! Scrubber configuration

/// What to do when an attribute has no registered metadata
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MissingMetadataPolicy {
    /// Fail the whole batch
    #[default]
    Abort,
    /// Log a warning and move on to the next attribute
    Skip,
}

/// OID scrubber configuration
///
/// Only registry misses are affected by the policy. An oid attribute with
/// an unhandled value type, or a record disagreeing with its metadata, is
/// always an error.
#[derive(Clone, Debug, Default)]
pub struct ScrubConfig {
    pub on_missing_metadata: MissingMetadataPolicy,
}

impl ScrubConfig {
    /// Configuration that tolerates attributes unknown to the registry
    pub fn lenient() -> Self {
        ScrubConfig {
            on_missing_metadata: MissingMetadataPolicy::Skip,
        }
    }
}
