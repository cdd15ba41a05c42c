/*
 * Responsibility
 * - guestbook entry の request/response DTO
 * - 存在チェック → trim 後の空チェック (この順番で判定する)
 */
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::repos::entry_repo::EntryRow;

pub const MSG_REQUIRED: &str = "Name and message are required";
pub const MSG_EMPTY: &str = "Name and message cannot be empty";

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub name: Option<String>,
    pub message: Option<String>,
}

/// Validated, trimmed input ready for insertion.
#[derive(Debug, PartialEq, Eq)]
pub struct NewEntry {
    pub name: String,
    pub message: String,
}

impl CreateEntryRequest {
    /// Parse a raw request body.
    ///
    /// Anything that is not a JSON object with string `name` and `message`
    /// (empty body, invalid JSON, arrays, `null` or non-string fields) counts
    /// as missing fields.
    pub fn parse(body: &[u8]) -> Result<Self, &'static str> {
        let value: serde_json::Value = serde_json::from_slice(body).map_err(|_| MSG_REQUIRED)?;
        if !value.is_object() {
            return Err(MSG_REQUIRED);
        }
        serde_json::from_value(value).map_err(|_| MSG_REQUIRED)
    }

    pub fn validate(self) -> Result<NewEntry, &'static str> {
        let (Some(name), Some(message)) = (self.name, self.message) else {
            return Err(MSG_REQUIRED);
        };

        let name = name.trim();
        let message = message.trim();
        if name.is_empty() || message.is_empty() {
            return Err(MSG_EMPTY);
        }

        Ok(NewEntry {
            name: name.to_string(),
            message: message.to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub id: i32,
    pub name: String,
    pub message: String,
    pub created_at: Option<String>,
}

impl From<EntryRow> for EntryResponse {
    fn from(row: EntryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            message: row.message,
            created_at: row.created_at.map(iso8601),
        }
    }
}

/// ISO-8601 without offset (the column has no time zone).
/// Fraction is six digits when present, omitted on whole seconds.
fn iso8601(ts: NaiveDateTime) -> String {
    if ts.nanosecond() == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn validate(body: &str) -> Result<NewEntry, &'static str> {
        CreateEntryRequest::parse(body.as_bytes())?.validate()
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let entry = validate(r#"{"name": "  Ada ", "message": "\thello\n"}"#).unwrap();
        assert_eq!(
            entry,
            NewEntry {
                name: "Ada".into(),
                message: "hello".into()
            }
        );
    }

    #[test]
    fn missing_field_beats_empty_field() {
        assert_eq!(validate(r#"{"message": "hi"}"#), Err(MSG_REQUIRED));
        assert_eq!(validate(r#"{"name": "  "}"#), Err(MSG_REQUIRED));
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(validate(r#"{"name": "  ", "message": "hi"}"#), Err(MSG_EMPTY));
        assert_eq!(validate(r#"{"name": "Ada", "message": ""}"#), Err(MSG_EMPTY));
    }

    #[test]
    fn non_object_bodies_are_missing_fields() {
        assert_eq!(validate(""), Err(MSG_REQUIRED));
        assert_eq!(validate("not json"), Err(MSG_REQUIRED));
        assert_eq!(validate(r#"["Ada", "hi"]"#), Err(MSG_REQUIRED));
        assert_eq!(validate(r#"{"name": null, "message": "hi"}"#), Err(MSG_REQUIRED));
        assert_eq!(validate(r#"{"name": 7, "message": "hi"}"#), Err(MSG_REQUIRED));
    }

    fn rendered_at(micros: u32) -> Option<String> {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_micro_opt(14, 5, 7, micros)
            .unwrap();
        EntryResponse::from(EntryRow {
            id: 1,
            name: "Ada".into(),
            message: "hi".into(),
            created_at: Some(ts),
        })
        .created_at
    }

    #[test]
    fn created_at_renders_as_iso8601() {
        assert_eq!(rendered_at(123456).as_deref(), Some("2024-03-09T14:05:07.123456"));
    }

    #[test]
    fn created_at_keeps_six_fraction_digits_on_whole_milliseconds() {
        assert_eq!(rendered_at(123000).as_deref(), Some("2024-03-09T14:05:07.123000"));
        assert_eq!(rendered_at(5).as_deref(), Some("2024-03-09T14:05:07.000005"));
    }

    #[test]
    fn created_at_drops_fraction_on_whole_seconds() {
        assert_eq!(rendered_at(0).as_deref(), Some("2024-03-09T14:05:07"));
    }
}
