//! Job configuration.

use std::str::FromStr;

use crate::transform::RecordPolicy;

/// What a run does when one source object cannot be processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the run with the object's error.
    #[default]
    Abort,
    /// Log the error, leave the destination object untouched, move on.
    Skip,
}

/// Error returned when parsing a policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown policy {0:?}: expected \"abort\" or \"skip\"")]
pub struct InvalidPolicy(String);

impl FromStr for FailurePolicy {
    type Err = InvalidPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abort" => Ok(FailurePolicy::Abort),
            "skip" => Ok(FailurePolicy::Skip),
            other => Err(InvalidPolicy(other.to_string())),
        }
    }
}

impl FromStr for RecordPolicy {
    type Err = InvalidPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abort" => Ok(RecordPolicy::AbortBatch),
            "skip" => Ok(RecordPolicy::SkipRecord),
            other => Err(InvalidPolicy(other.to_string())),
        }
    }
}

/// Configuration for a [`TransformJob`](crate::job::TransformJob).
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Bucket holding the raw feed snapshots
    pub source_bucket: String,
    /// Bucket receiving translated objects, under the same keys
    pub destination_bucket: String,
    /// Handling of a bad event inside one object
    pub record_policy: RecordPolicy,
    /// Handling of an object that fails as a whole
    pub failure_policy: FailurePolicy,
}

impl JobConfig {
    /// Create a config with both policies at their aborting defaults.
    pub fn new(source_bucket: impl Into<String>, destination_bucket: impl Into<String>) -> Self {
        Self {
            source_bucket: source_bucket.into(),
            destination_bucket: destination_bucket.into(),
            record_policy: RecordPolicy::default(),
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_record_policy(mut self, policy: RecordPolicy) -> Self {
        self.record_policy = policy;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = JobConfig::new("src", "dst");

        assert_eq!(config.source_bucket, "src");
        assert_eq!(config.destination_bucket, "dst");
        assert_eq!(config.record_policy, RecordPolicy::AbortBatch);
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
    }

    #[test]
    fn config_builder() {
        let config = JobConfig::new("src", "dst")
            .with_record_policy(RecordPolicy::SkipRecord)
            .with_failure_policy(FailurePolicy::Skip);

        assert_eq!(config.record_policy, RecordPolicy::SkipRecord);
        assert_eq!(config.failure_policy, FailurePolicy::Skip);
    }

    #[test]
    fn parse_policies() {
        assert_eq!("abort".parse(), Ok(FailurePolicy::Abort));
        assert_eq!("skip".parse(), Ok(FailurePolicy::Skip));
        assert_eq!("abort".parse(), Ok(RecordPolicy::AbortBatch));
        assert_eq!("skip".parse(), Ok(RecordPolicy::SkipRecord));

        let err = "retry".parse::<FailurePolicy>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown policy \"retry\": expected \"abort\" or \"skip\""
        );
        assert!("Skip".parse::<RecordPolicy>().is_err());
    }
}
