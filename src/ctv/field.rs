use serde::ser::{Serialize, SerializeStruct, Serializer};

use thiserror::Error;

/// The six columns of a card transaction file, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    OrganizationId,
    Amount,
    Currency,
    Status,
    CreatedAt,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Id,
        Field::OrganizationId,
        Field::Amount,
        Field::Currency,
        Field::Status,
        Field::CreatedAt,
    ];

    /// Column name as it appears in the CSV header and in JSON output
    pub fn as_str(&self) -> &'static str {
        return match self {
            Field::Id => "id",
            Field::OrganizationId => "organization_id",
            Field::Amount => "amount",
            Field::Currency => "currency",
            Field::Status => "status",
            Field::CreatedAt => "created_at",
        };
    }
}

/// A single failed field rule. Collected per record, never propagated as a fatal error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("value is required and must not be empty")]
    Missing,

    #[error("expected a base-10 integer, got {0:?}")]
    NotAnInteger(String),

    #[error("must be greater than or equal to {min}, got {value}")]
    BelowMinimum { value: String, min: i64 },

    #[error("value exceeds the supported integer range: {0}")]
    Overflow(String),

    #[error("expected one of {allowed:?}, got {value:?}")]
    NotAllowed {
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("not a valid ISO-8601 timestamp with offset: {value:?} ({reason})")]
    BadTimestamp { value: String, reason: String },

    #[error("timestamp must be UTC, got offset {offset} in {value:?}")]
    NotUtc { value: String, offset: String },
}

impl FieldError {
    /// Taxonomy name reported alongside the message
    pub fn kind(&self) -> &'static str {
        return match self {
            FieldError::Missing => "MissingField",
            FieldError::NotAnInteger(_) => "TypeError",
            FieldError::BelowMinimum { .. } | FieldError::Overflow(_) => "RangeError",
            FieldError::NotAllowed { .. } => "EnumError",
            FieldError::BadTimestamp { .. } => "FormatError",
            FieldError::NotUtc { .. } => "TimezoneError",
        };
    }
}

/// A failed rule bound to the field it was found on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: Field,
    pub error: FieldError,
}

impl Violation {
    pub fn new(field: Field, error: FieldError) -> Self {
        return Self { field, error };
    }

    pub fn message(&self) -> String {
        return format!("{}: {}", self.error.kind(), self.error);
    }
}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Violation", 2)?;
        state.serialize_field("field", self.field.as_str())?;
        state.serialize_field("message", &self.message())?;
        return state.end();
    }
}
