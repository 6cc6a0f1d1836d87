use crate::record::{Currency, RawRecord, RejectedRecord, Status, TransactionRecord, ValidationOutcome};
use crate::{Field, FieldError, Violation};

use std::num::IntErrorKind;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// Text must contain something other than whitespace. The original text is kept.
pub fn required(value: &str) -> Result<String, FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Missing);
    }

    return Ok(value.to_string());
}

/// Base-10 integer, surrounding whitespace ignored, no lower than zero and no higher than `u64::MAX`
pub fn non_negative_integer(value: &str) -> Result<u64, FieldError> {
    let amount: i128 = value.trim().parse().map_err(|e: std::num::ParseIntError| {
        match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                FieldError::Overflow(value.to_string())
            }
            _ => FieldError::NotAnInteger(value.to_string()),
        }
    })?;

    if amount < 0 {
        return Err(FieldError::BelowMinimum {
            value: amount.to_string(),
            min: 0,
        });
    }

    return u64::try_from(amount).map_err(|_| FieldError::Overflow(value.to_string()));
}

pub fn currency(value: &str) -> Result<Currency, FieldError> {
    return Currency::parse(value).ok_or_else(|| FieldError::NotAllowed {
        value: value.to_string(),
        allowed: Currency::NAMES,
    });
}

pub fn status(value: &str) -> Result<Status, FieldError> {
    return Status::parse(value).ok_or_else(|| FieldError::NotAllowed {
        value: value.to_string(),
        allowed: Status::NAMES,
    });
}

/// ISO-8601 extended forms with an explicit offset: minute or second precision,
/// optional fraction, `T`/`t`/space separator, `+hh`, `+hhmm` or `+hh:mm` offsets.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%dt%H:%M:%S%.f%#z",
    "%Y-%m-%dt%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M%#z",
];

/// Same shapes, for text whose `Z` designator has already been stripped
const ZULU_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dt%H:%M:%S%.f",
    "%Y-%m-%dt%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// RFC 3339 first, then the wider ISO-8601 forms. The RFC 3339 error is the one reported.
fn parse_iso8601(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    let rfc3339_err = match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) => return Ok(parsed),
        Err(e) => e,
    };

    if let Some(parsed) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(value, format).ok())
    {
        return Ok(parsed);
    }

    let zulu = value
        .strip_suffix('Z')
        .or_else(|| value.strip_suffix('z'))
        .and_then(|naive| {
            ZULU_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
        });

    if let Some(naive) = zulu {
        return Ok(naive.and_utc().fixed_offset());
    }

    return Err(rfc3339_err);
}

/// ISO-8601 timestamp whose offset is exactly zero. A missing offset is a format failure.
pub fn utc_timestamp(value: &str) -> Result<DateTime<Utc>, FieldError> {
    let parsed = parse_iso8601(value).map_err(|e| FieldError::BadTimestamp {
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    if parsed.offset().local_minus_utc() != 0 {
        return Err(FieldError::NotUtc {
            value: value.to_string(),
            offset: parsed.offset().to_string(),
        });
    }

    return Ok(parsed.with_timezone(&Utc));
}

impl RawRecord {
    /// Runs every field rule, in column order, and classifies the row.
    /// All failures are collected; no rule is skipped because an earlier one failed.
    pub fn validate(self) -> ValidationOutcome {
        let id = required(&self.id);
        let organization_id = required(&self.organization_id);
        let amount = non_negative_integer(&self.amount);
        let currency = currency(&self.currency);
        let status = status(&self.status);
        let created_at = utc_timestamp(&self.created_at);

        match (id, organization_id, amount, currency, status, created_at) {
            (
                Ok(id),
                Ok(organization_id),
                Ok(amount),
                Ok(currency),
                Ok(status),
                Ok(created_at),
            ) => ValidationOutcome::Valid(TransactionRecord {
                id,
                organization_id,
                amount,
                currency,
                status,
                created_at,
            }),
            (id, organization_id, amount, currency, status, created_at) => {
                let errors = [
                    id.err().map(|e| Violation::new(Field::Id, e)),
                    organization_id
                        .err()
                        .map(|e| Violation::new(Field::OrganizationId, e)),
                    amount.err().map(|e| Violation::new(Field::Amount, e)),
                    currency.err().map(|e| Violation::new(Field::Currency, e)),
                    status.err().map(|e| Violation::new(Field::Status, e)),
                    created_at.err().map(|e| Violation::new(Field::CreatedAt, e)),
                ]
                .into_iter()
                .flatten()
                .collect();

                ValidationOutcome::Invalid(RejectedRecord {
                    record: self,
                    errors,
                })
            }
        }
    }
}
