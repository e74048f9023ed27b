//! One pass over a source prefix: read, translate, write back.

use tracing::{debug, error, info};

use crate::config::{FailurePolicy, JobConfig};
use crate::driver::WorkUnit;
use crate::source::ArrivalDocument;
use crate::store::{ObjectStore, StoreError};
use crate::transform::{TranslateError, Translation, Translator};

/// Errors that stop a job.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    /// The object store failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// An object body is not an arrival document
    #[error("failed to decode {key}: {message}")]
    Decode { key: String, message: String },

    /// An event in an object could not be translated
    #[error("failed to translate {key}: {source}")]
    Translate { key: String, source: TranslateError },
}

/// Counts for one processed prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitReport {
    pub objects_written: usize,
    pub objects_failed: usize,
    pub events_accepted: usize,
    pub events_rejected: usize,
    pub events_skipped: usize,
}

impl UnitReport {
    fn record(&mut self, translation: &Translation) {
        self.objects_written += 1;
        self.events_accepted += translation.accepted;
        self.events_rejected += translation.rejected;
        self.events_skipped += translation.skipped;
    }

    /// Add another report's counts to this one.
    pub fn merge(&mut self, other: &UnitReport) {
        self.objects_written += other.objects_written;
        self.objects_failed += other.objects_failed;
        self.events_accepted += other.events_accepted;
        self.events_rejected += other.events_rejected;
        self.events_skipped += other.events_skipped;
    }
}

/// Translates every object under a prefix from the source bucket into the
/// destination bucket.
pub struct TransformJob<S> {
    store: S,
    config: JobConfig,
    translator: Translator,
}

impl<S: ObjectStore> TransformJob<S> {
    pub fn new(store: S, config: JobConfig) -> Self {
        let translator = Translator::new(config.record_policy);
        Self {
            store,
            config,
            translator,
        }
    }

    pub fn config(&self) -> &JobConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Process the work unit's year/month prefix.
    pub async fn run_unit(&self, unit: &WorkUnit) -> Result<UnitReport, JobError> {
        self.run_prefix(&unit.prefix()).await
    }

    /// Process every source object whose key starts with `prefix`, in key
    /// order.
    ///
    /// A failure to list aborts regardless of policy. Failures of single
    /// objects follow the configured [`FailurePolicy`].
    pub async fn run_prefix(&self, prefix: &str) -> Result<UnitReport, JobError> {
        let keys = self.store.list(&self.config.source_bucket, prefix).await?;
        debug!(prefix, objects = keys.len(), "Listed source objects");

        let mut report = UnitReport::default();
        for key in &keys {
            match self.process_object(key).await {
                Ok(translation) => report.record(&translation),
                Err(e) => match self.config.failure_policy {
                    FailurePolicy::Abort => return Err(e),
                    FailurePolicy::Skip => {
                        error!(key = %key, error = %e, "Skipping object");
                        report.objects_failed += 1;
                    }
                },
            }
        }

        Ok(report)
    }

    /// Translate one source object and write the result under the same key.
    ///
    /// Nothing is written if translation fails.
    pub async fn process_object(&self, key: &str) -> Result<Translation, JobError> {
        let body = self.store.get(&self.config.source_bucket, key).await?;

        let document = ArrivalDocument::from_slice(&body).map_err(|e| JobError::Decode {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        let translation = self
            .translator
            .translate(&document.realtime_arrival_list)
            .map_err(|source| JobError::Translate {
                key: key.to_string(),
                source,
            })?;

        self.store
            .put(
                &self.config.destination_bucket,
                key,
                translation.text.clone().into_bytes(),
            )
            .await?;

        info!(
            key,
            accepted = translation.accepted,
            rejected = translation.rejected,
            skipped = translation.skipped,
            "Wrote translated object"
        );

        Ok(translation)
    }
}
