//! Core types for Noteboard
//!
//! `Note` is the normalized record the reducers hold. `NoteDto` is what the
//! server actually sends: its `created` field arrives either as epoch
//! milliseconds (notes created through `POST /notes`) or as a date string
//! (notes that went through an edit), so conversion goes through
//! [`CreatedValue::to_datetime`].

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, NotesError};

/// Server-assigned note identifier
pub type NoteKey = i64;

/// Literal message the server sends after a successful delete
pub const DELETED_MESSAGE: &str = "deleted";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub key: NoteKey,
    pub name: String,
    pub description: String,
    pub created: DateTime<Utc>,
}

impl Note {
    pub fn new(key: NoteKey, name: &str, description: &str, created: DateTime<Utc>) -> Self {
        Self {
            key,
            name: name.to_string(),
            description: description.to_string(),
            created,
        }
    }
}

/// Check a name typed into a form before it is sent
///
/// The server accepts anything, so this is only used by front-ends.
pub fn validate_name(name: &str) -> Result<(), NotesError> {
    if name.trim().is_empty() {
        return Err(NotesError::InvalidInput("Name cannot be empty".to_string()));
    }
    Ok(())
}

/// Note as it appears on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteDto {
    pub key: NoteKey,
    pub name: String,
    pub description: String,
    pub created: CreatedValue,
}

impl TryFrom<NoteDto> for Note {
    type Error = ApiError;

    fn try_from(dto: NoteDto) -> Result<Self, Self::Error> {
        let created = dto.created.to_datetime()?;
        Ok(Note {
            key: dto.key,
            name: dto.name,
            description: dto.description,
            created,
        })
    }
}

/// Convert a batch of DTOs, failing on the first malformed date
pub fn notes_from_dtos(dtos: Vec<NoteDto>) -> Result<Vec<Note>, ApiError> {
    dtos.into_iter().map(Note::try_from).collect()
}

/// `created` timestamp in either of the shapes the server emits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatedValue {
    Millis(i64),
    Text(String),
}

/// Date-only layouts seen in `created` strings, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y"];

impl CreatedValue {
    /// Normalize to a UTC timestamp
    ///
    /// Date-only strings resolve to midnight UTC of that day.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, ApiError> {
        match self {
            CreatedValue::Millis(ms) => DateTime::<Utc>::from_timestamp_millis(*ms)
                .ok_or_else(|| ApiError::Parse(format!("Timestamp out of range: {}", ms))),
            CreatedValue::Text(text) => parse_date_text(text.trim()),
        }
    }

    /// Locale-style date string sent back on edit (`M/D/YYYY`)
    pub fn locale_date(created: &DateTime<Utc>) -> Self {
        CreatedValue::Text(created.format("%-m/%-d/%Y").to_string())
    }
}

fn parse_date_text(text: &str) -> Result<DateTime<Utc>, ApiError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    // "1/5/2024, 10:30:00 AM" and similar: the date part is enough
    let date_part = text.split(',').next().unwrap_or(text).trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| ApiError::Parse(format!("Unrecognized date: '{}'", text)))
}

/// Body for create and update requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotePayload {
    pub name: String,
    pub description: String,
    pub created: CreatedValue,
}

impl NotePayload {
    /// Creation payload stamped with the current time in epoch milliseconds
    pub fn create(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            created: CreatedValue::Millis(Utc::now().timestamp_millis()),
        }
    }

    /// Update payload carrying the note's original creation date
    pub fn update(note: &Note) -> Self {
        Self {
            name: note.name.clone(),
            description: note.description.clone(),
            created: CreatedValue::locale_date(&note.created),
        }
    }
}

/// Response of `GET /notes`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub items: Vec<NoteDto>,
}

impl ListResponse {
    /// Only a present, nonzero count marks the list as usable
    pub fn has_count(&self) -> bool {
        matches!(self.count, Some(n) if n > 0)
    }
}

/// Response of `DELETE /notes/{key}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub message: String,
}

impl DeleteResponse {
    pub fn is_deleted(&self) -> bool {
        self.message == DELETED_MESSAGE
    }
}
