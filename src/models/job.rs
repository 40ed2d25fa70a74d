//! Job posting row model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Seniority band of a posting, from the dataset's two-letter codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    /// Entry level (EN)
    Entry,
    /// Mid level (MI)
    Mid,
    /// Senior level (SE)
    Senior,
    /// Executive level (EX)
    Executive,
}

impl ExperienceLevel {
    /// Parse a two-letter dataset code; unknown codes yield `None`
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "EN" => Some(Self::Entry),
            "MI" => Some(Self::Mid),
            "SE" => Some(Self::Senior),
            "EX" => Some(Self::Executive),
            _ => None,
        }
    }

    /// The two-letter dataset code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Entry => "EN",
            Self::Mid => "MI",
            Self::Senior => "SE",
            Self::Executive => "EX",
        }
    }
}

/// One job posting. Immutable once loaded; one row per posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    /// Posting identifier
    pub job_id: String,
    /// Country of the hiring company, exactly as it appears in the dataset
    pub company_location: String,
    /// Annual salary in USD
    pub salary_usd: f64,
    /// Years of professional experience required
    pub years_experience: f64,
    /// Seniority band, if the dataset code was recognized
    pub experience_level: Option<ExperienceLevel>,
    /// Share of remote work: 0, 50 or 100
    pub remote_ratio: u8,
    /// Comma-delimited list of required skills
    pub required_skills: String,
    /// Date the posting went live
    pub posting_date: Option<NaiveDate>,
    /// Benefits score, where the dataset carries one
    pub benefits_score: Option<f64>,
}
