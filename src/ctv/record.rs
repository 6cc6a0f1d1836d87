use crate::Violation;

use chrono::{DateTime, Utc};

use serde::{Deserialize, Serialize};

/// One CSV row exactly as read. Absent or empty cells are empty strings.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub organization_id: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "GBP")]
    Gbp,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Eur, Currency::Usd, Currency::Gbp];
    pub const NAMES: &'static [&'static str] = &["EUR", "USD", "GBP"];

    pub fn as_str(&self) -> &'static str {
        return match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
        };
    }

    /// Case-sensitive, no trimming
    pub fn parse(value: &str) -> Option<Self> {
        return Self::ALL.into_iter().find(|c| c.as_str() == value);
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Pending,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Success, Status::Error, Status::Pending];
    pub const NAMES: &'static [&'static str] = &["Success", "Error", "Pending"];

    pub fn as_str(&self) -> &'static str {
        return match self {
            Status::Success => "Success",
            Status::Error => "Error",
            Status::Pending => "Pending",
        };
    }

    /// Case-sensitive, no trimming
    pub fn parse(value: &str) -> Option<Self> {
        return Self::ALL.into_iter().find(|s| s.as_str() == value);
    }
}

/// A row that passed every field rule, with amount and timestamp normalized
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub id: String,
    pub organization_id: String,
    pub amount: u64,
    pub currency: Currency,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

/// A row that failed one or more field rules, serialized as the raw cells plus `errors`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    #[serde(flatten)]
    pub record: RawRecord,
    pub errors: Vec<Violation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid(TransactionRecord),
    Invalid(RejectedRecord),
}
