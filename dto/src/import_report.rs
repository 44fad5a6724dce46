use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewReason {
    /// The name ended with a number and the line before the title was numeric too.
    /// The number found in the name has been kept.
    ConcurrentNumberFallbacks,
    /// A number line has been found while the name also ended with a number.
    /// The number line has been kept.
    NumberFoundTwice,
    /// The number has been taken from the line preceding the title, which may be a page number.
    NumberFromPrecedingLine,
}

/// An entry which has been imported but deserves a human check.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReviewNote {
    registration_number: u32,
    reason: ReviewReason,
    line_index: usize,
}

impl ReviewNote {
    pub fn new(registration_number: u32, reason: ReviewReason, line_index: usize) -> Self {
        Self {
            registration_number,
            reason,
            line_index,
        }
    }
}

/// Outcome of a roster import.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    extracted: usize,
    inserted: usize,
    updated: usize,
    flagged: Vec<ReviewNote>,
}

impl ImportReport {
    pub fn new(extracted: usize, inserted: usize, updated: usize, flagged: Vec<ReviewNote>) -> Self {
        Self {
            extracted,
            inserted,
            updated,
            flagged,
        }
    }
}
