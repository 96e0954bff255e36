//! Input-collection constraints applied before a sample is recorded.
//!
//! A [`SampleForm`] is what a collection surface gathers: every field may be
//! absent. [`SampleForm::into_sample`] enforces the questionnaire's widget
//! constraints (required choices, the collection window, score range) and
//! produces the immutable [`Sample`] the ledger stores.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::IntakeError;
use crate::sample::{format_decimal, Country, MediaCategory, Sample, TranscriptAvailability};
use crate::window::CollectionWindow;

/// Score widgets move in hundredths.
const STEPS_PER_UNIT: f64 = 100.0;

/// Score widgets move in steps of this size.
pub const SCORE_STEP: f64 = 1.0 / STEPS_PER_UNIT;

/// Raw answers for one media sample, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SampleForm {
    pub country: Option<Country>,
    pub media_category: Option<MediaCategory>,
    #[serde(deserialize_with = "null_as_empty")]
    pub media_title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub media_platform: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub media_link: String,
    pub media_date: Option<NaiveDate>,
    pub transcript_available: Option<TranscriptAvailability>,
    #[serde(deserialize_with = "null_as_empty")]
    pub transcript_notes: String,
    #[serde(deserialize_with = "loose_text")]
    pub raw_reach: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub reach_estimation: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub amplification_notes: String,
    pub reach_score: Option<f64>,
    pub salience_score: Option<f64>,
    #[serde(deserialize_with = "null_as_empty")]
    pub reflected_issues: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub issue_engagement: String,
    pub logos_score: Option<f64>,
    #[serde(deserialize_with = "null_as_empty")]
    pub logos_explanation: String,
    pub pathos_score: Option<f64>,
    #[serde(deserialize_with = "null_as_empty")]
    pub pathos_explanation: String,
    pub ethos_score: Option<f64>,
    #[serde(deserialize_with = "null_as_empty")]
    pub ethos_explanation: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub persuasive_note: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub final_reflection: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub public_issues: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub issues_explanation: String,
}

/// Answers given once per session: the country, the salient-issues section
/// and the closing reflection. They are copied onto every sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionContext {
    pub country: Option<Country>,
    #[serde(deserialize_with = "null_as_empty")]
    pub public_issues: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub issues_explanation: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub final_reflection: String,
}

impl SampleForm {
    /// Fills blank session-scoped answers from `context`.
    ///
    /// Answers already present on the form win.
    #[must_use]
    pub fn with_context(mut self, context: &SessionContext) -> Self {
        if self.country.is_none() {
            self.country = context.country;
        }
        fill_blank(&mut self.public_issues, &context.public_issues);
        fill_blank(&mut self.issues_explanation, &context.issues_explanation);
        fill_blank(&mut self.final_reflection, &context.final_reflection);
        self
    }

    /// Applies the collection constraints and builds a [`Sample`].
    ///
    /// A missing score counts as the slider's resting value, `0.0`. Scores
    /// inside the range are snapped to [`SCORE_STEP`].
    ///
    /// # Errors
    ///
    /// - [`IntakeError::MissingField`] if a required choice or the date is absent.
    /// - [`IntakeError::DateOutsideWindow`] if `mediaDate` is outside `window`.
    /// - [`IntakeError::ScoreOutOfRange`] if a score is not a finite value in `[0, 1]`.
    pub fn into_sample(self, window: &CollectionWindow) -> Result<Sample, IntakeError> {
        let country = self.country.ok_or(IntakeError::MissingField("country"))?;
        let media_category = self
            .media_category
            .ok_or(IntakeError::MissingField("mediaCategory"))?;
        let transcript_available = self
            .transcript_available
            .ok_or(IntakeError::MissingField("transcriptAvailable"))?;
        let media_date = self
            .media_date
            .ok_or(IntakeError::MissingField("mediaDate"))?;

        if !window.contains(media_date) {
            return Err(IntakeError::DateOutsideWindow {
                date: media_date,
                start: window.start,
                end: window.end,
            });
        }

        Ok(Sample {
            country,
            media_category,
            media_title: self.media_title,
            media_platform: self.media_platform,
            media_link: self.media_link,
            media_date,
            transcript_available,
            transcript_notes: self.transcript_notes,
            raw_reach: self.raw_reach,
            reach_estimation: self.reach_estimation,
            amplification_notes: self.amplification_notes,
            reach_score: score("reachScore", self.reach_score)?,
            salience_score: score("salienceScore", self.salience_score)?,
            reflected_issues: self.reflected_issues,
            issue_engagement: self.issue_engagement,
            logos_score: score("logosScore", self.logos_score)?,
            logos_explanation: self.logos_explanation,
            pathos_score: score("pathosScore", self.pathos_score)?,
            pathos_explanation: self.pathos_explanation,
            ethos_score: score("ethosScore", self.ethos_score)?,
            ethos_explanation: self.ethos_explanation,
            persuasive_note: self.persuasive_note,
            final_reflection: self.final_reflection,
            public_issues: self.public_issues,
            issues_explanation: self.issues_explanation,
        })
    }
}

fn fill_blank(target: &mut String, fallback: &str) {
    if target.trim().is_empty() && !fallback.is_empty() {
        fallback.clone_into(target);
    }
}

fn score(field: &'static str, value: Option<f64>) -> Result<f64, IntakeError> {
    let value = value.unwrap_or(0.0);
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(IntakeError::ScoreOutOfRange { field, value });
    }
    Ok(snap_to_step(value))
}

fn snap_to_step(value: f64) -> f64 {
    (value * STEPS_PER_UNIT).round() / STEPS_PER_UNIT
}

/// Reads an unanswered text question (`null`, or an empty YAML value) as
/// empty text.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts free text that a YAML author may have written as a bare number
/// (`rawReach: 120000`). Numbers become their decimal text, with whole floats
/// keeping their `.0`; the value is never validated.
fn loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Int(i64),
        Float(f64),
        Missing(()),
    }

    Ok(match Loose::deserialize(deserializer)? {
        Loose::Text(s) => s,
        Loose::Int(n) => n.to_string(),
        Loose::Float(n) => format_decimal(n),
        Loose::Missing(()) => String::new(),
    })
}

#[cfg(test)]
#[path = "intake_test.rs"]
mod tests;
