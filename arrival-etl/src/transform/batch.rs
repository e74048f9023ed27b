//! Batch translation: one source object's events to one output body.

use tracing::warn;

use crate::source::{ArrivalEvent, RawArrivalEvent};

use super::encode::encode_line;
use super::error::{RecordError, TranslateError};
use super::mapper::{is_accepted, transform};

/// What to do when a single event cannot be mapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordPolicy {
    /// Discard the whole batch and return the error.
    #[default]
    AbortBatch,
    /// Log the event, leave it out, and keep going.
    SkipRecord,
}

/// Output of one batch translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    /// Newline-terminated JSON lines, one per accepted event.
    pub text: String,
    /// Events written to `text`.
    pub accepted: usize,
    /// Events dropped by the arrival-code filter.
    pub rejected: usize,
    /// Events dropped under [`RecordPolicy::SkipRecord`].
    pub skipped: usize,
}

/// Translates batches under a fixed [`RecordPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    policy: RecordPolicy,
}

impl Translator {
    pub fn new(policy: RecordPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> RecordPolicy {
        self.policy
    }

    /// Translate every event in order.
    ///
    /// Every record must carry its required fields whether or not it passes
    /// the arrival-code filter. Under [`RecordPolicy::AbortBatch`] the first
    /// failure discards everything produced so far.
    pub fn translate(&self, events: &[RawArrivalEvent]) -> Result<Translation, TranslateError> {
        let mut out = Translation::default();

        for (index, raw) in events.iter().enumerate() {
            match translate_one(raw) {
                Ok(Some(line)) => {
                    out.text.push_str(&line);
                    out.text.push('\n');
                    out.accepted += 1;
                }
                Ok(None) => out.rejected += 1,
                Err(source) => match self.policy {
                    RecordPolicy::AbortBatch => return Err(TranslateError { index, source }),
                    RecordPolicy::SkipRecord => {
                        warn!(
                            index,
                            field = source.field(),
                            value = source.value(),
                            error = %source,
                            "Skipping event"
                        );
                        out.skipped += 1;
                    }
                },
            }
        }

        Ok(out)
    }
}

/// `None` when the event is filtered out.
fn translate_one(raw: &RawArrivalEvent) -> Result<Option<String>, RecordError> {
    let event = ArrivalEvent::from_raw(raw)?;
    if !is_accepted(&event) {
        return Ok(None);
    }

    let record = transform(&event)?;
    let line = encode_line(&record).map_err(|e| RecordError::Encode(e.to_string()))?;
    Ok(Some(line))
}

/// Translate a batch with the default policy (abort on the first bad event).
///
/// # Examples
///
/// ```
/// use arrival_etl::source::RawArrivalEvent;
/// use arrival_etl::transform::translate;
///
/// assert_eq!(translate(&[]).unwrap(), "");
///
/// let event: RawArrivalEvent = serde_json::from_str(
///     r#"{"arvlCd":"1","statnNm":"강남","updnLine":"0","subwayId":"1002","recptnDt":"2023-06-26 08:15:00"}"#,
/// ).unwrap();
/// assert_eq!(
///     translate(&[event]).unwrap(),
///     "{\"stationNm\": \"강남역\", \"inOutTag\": 1, \"lineNum\": \"2호선\", \"weekTag\": 1, \"arriveTime\": \"08:15:00\", \"arriveDate\": \"2023-06-26\"}\n",
/// );
/// ```
pub fn translate(events: &[RawArrivalEvent]) -> Result<String, TranslateError> {
    Translator::default().translate(events).map(|t| t.text)
}
