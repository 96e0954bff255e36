//! The sample record: one researcher's evaluation of one media item.
//!
//! Field names on the wire (relay JSON and CSV header) are the camelCase
//! names listed in [`Sample::FIELD_NAMES`]. Enum values serialize to the same
//! labels the questionnaire shows to researchers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    Lebanon,
    Tunisia,
}

impl Country {
    pub const ALL: [Country; 2] = [Country::Lebanon, Country::Tunisia];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Country::Lebanon => "Lebanon",
            Country::Tunisia => "Tunisia",
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaCategory {
    #[serde(rename = "TV")]
    Tv,
    Radio,
    Print,
    #[serde(rename = "Online news")]
    OnlineNews,
    Podcast,
    #[serde(rename = "Social media")]
    SocialMedia,
    #[serde(rename = "Other/hybrid")]
    OtherHybrid,
}

impl MediaCategory {
    pub const ALL: [MediaCategory; 7] = [
        MediaCategory::Tv,
        MediaCategory::Radio,
        MediaCategory::Print,
        MediaCategory::OnlineNews,
        MediaCategory::Podcast,
        MediaCategory::SocialMedia,
        MediaCategory::OtherHybrid,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MediaCategory::Tv => "TV",
            MediaCategory::Radio => "Radio",
            MediaCategory::Print => "Print",
            MediaCategory::OnlineNews => "Online news",
            MediaCategory::Podcast => "Podcast",
            MediaCategory::SocialMedia => "Social media",
            MediaCategory::OtherHybrid => "Other/hybrid",
        }
    }
}

impl std::fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranscriptAvailability {
    Yes,
    No,
    #[serde(rename = "Not sure")]
    NotSure,
}

impl TranscriptAvailability {
    pub const ALL: [TranscriptAvailability; 3] = [
        TranscriptAvailability::Yes,
        TranscriptAvailability::No,
        TranscriptAvailability::NotSure,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TranscriptAvailability::Yes => "Yes",
            TranscriptAvailability::No => "No",
            TranscriptAvailability::NotSure => "Not sure",
        }
    }
}

impl std::fmt::Display for TranscriptAvailability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One evaluated media item, fixed at submission time.
///
/// Optional free-text answers are empty strings rather than `None`, so every
/// serialized record carries every key. Scores are expected in `[0.0, 1.0]`;
/// that range is enforced by intake, not by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub country: Country,
    pub media_category: MediaCategory,
    pub media_title: String,
    pub media_platform: String,
    pub media_link: String,
    pub media_date: NaiveDate,
    pub transcript_available: TranscriptAvailability,
    pub transcript_notes: String,
    /// Audience figure as typed by the researcher. Never parsed.
    pub raw_reach: String,
    pub reach_estimation: String,
    pub amplification_notes: String,
    pub reach_score: f64,
    pub salience_score: f64,
    pub reflected_issues: String,
    pub issue_engagement: String,
    pub logos_score: f64,
    pub logos_explanation: String,
    pub pathos_score: f64,
    pub pathos_explanation: String,
    pub ethos_score: f64,
    pub ethos_explanation: String,
    pub persuasive_note: String,
    pub final_reflection: String,
    pub public_issues: String,
    pub issues_explanation: String,
}

impl Sample {
    /// Wire names of every field, in declaration order.
    ///
    /// Must stay in lockstep with [`Sample::field_values`].
    pub const FIELD_NAMES: [&'static str; 25] = [
        "country",
        "mediaCategory",
        "mediaTitle",
        "mediaPlatform",
        "mediaLink",
        "mediaDate",
        "transcriptAvailable",
        "transcriptNotes",
        "rawReach",
        "reachEstimation",
        "amplificationNotes",
        "reachScore",
        "salienceScore",
        "reflectedIssues",
        "issueEngagement",
        "logosScore",
        "logosExplanation",
        "pathosScore",
        "pathosExplanation",
        "ethosScore",
        "ethosExplanation",
        "persuasiveNote",
        "finalReflection",
        "publicIssues",
        "issuesExplanation",
    ];

    /// Stringified field values in [`Sample::FIELD_NAMES`] order.
    ///
    /// Dates render as `YYYY-MM-DD`; scores always carry a decimal point.
    #[must_use]
    pub fn field_values(&self) -> [String; 25] {
        [
            self.country.to_string(),
            self.media_category.to_string(),
            self.media_title.clone(),
            self.media_platform.clone(),
            self.media_link.clone(),
            self.media_date.format("%Y-%m-%d").to_string(),
            self.transcript_available.to_string(),
            self.transcript_notes.clone(),
            self.raw_reach.clone(),
            self.reach_estimation.clone(),
            self.amplification_notes.clone(),
            format_decimal(self.reach_score),
            format_decimal(self.salience_score),
            self.reflected_issues.clone(),
            self.issue_engagement.clone(),
            format_decimal(self.logos_score),
            self.logos_explanation.clone(),
            format_decimal(self.pathos_score),
            self.pathos_explanation.clone(),
            format_decimal(self.ethos_score),
            self.ethos_explanation.clone(),
            self.persuasive_note.clone(),
            self.final_reflection.clone(),
            self.public_issues.clone(),
            self.issues_explanation.clone(),
        ]
    }
}

/// Renders a float as plain decimal text, keeping a trailing `.0` on whole
/// numbers (`1.0`, not `1`).
#[must_use]
pub fn format_decimal(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn sample() -> Sample {
        Sample {
            country: Country::Tunisia,
            media_category: MediaCategory::OnlineNews,
            media_title: "Evening bulletin".to_string(),
            media_platform: "Mosaique FM".to_string(),
            media_link: String::new(),
            media_date: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            transcript_available: TranscriptAvailability::NotSure,
            transcript_notes: String::new(),
            raw_reach: "~1.2M views".to_string(),
            reach_estimation: "YouTube counter".to_string(),
            amplification_notes: String::new(),
            reach_score: 1.0,
            salience_score: 0.35,
            reflected_issues: "cost of living".to_string(),
            issue_engagement: "central".to_string(),
            logos_score: 0.0,
            logos_explanation: String::new(),
            pathos_score: 0.5,
            pathos_explanation: String::new(),
            ethos_score: 0.25,
            ethos_explanation: String::new(),
            persuasive_note: String::new(),
            final_reflection: String::new(),
            public_issues: "inflation, migration".to_string(),
            issues_explanation: String::new(),
        }
    }

    #[test]
    fn enums_serialize_to_questionnaire_labels() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["country"], "Tunisia");
        assert_eq!(json["mediaCategory"], "Online news");
        assert_eq!(json["transcriptAvailable"], "Not sure");
        assert_eq!(
            serde_json::to_value(MediaCategory::OtherHybrid).unwrap(),
            "Other/hybrid"
        );
    }

    #[test]
    fn display_matches_serde_label_for_every_variant() {
        for category in MediaCategory::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.to_string());
        }
        for answer in TranscriptAvailability::ALL {
            let json = serde_json::to_value(answer).unwrap();
            assert_eq!(json, answer.to_string());
        }
    }

    #[test]
    fn field_names_match_serialized_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        let keys: BTreeSet<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let declared: BTreeSet<&str> = Sample::FIELD_NAMES.into_iter().collect();
        assert_eq!(keys, declared);
    }

    #[test]
    fn json_uses_native_types() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["mediaDate"], "2025-02-03");
        assert!(json["salienceScore"].is_f64());
        assert_eq!(json["rawReach"], "~1.2M views");
    }

    #[test]
    fn field_values_follow_declared_order() {
        let values = sample().field_values();
        assert_eq!(values[0], "Tunisia");
        assert_eq!(values[5], "2025-02-03");
        assert_eq!(values[11], "1.0");
        assert_eq!(values[12], "0.35");
        assert_eq!(values[15], "0.0");
        assert_eq!(values[23], "inflation, migration");
    }

    #[test]
    fn format_decimal_keeps_fraction_digits() {
        assert_eq!(format_decimal(0.5), "0.5");
        assert_eq!(format_decimal(0.01), "0.01");
        assert_eq!(format_decimal(1.0), "1.0");
        assert_eq!(format_decimal(0.0), "0.0");
    }
}
