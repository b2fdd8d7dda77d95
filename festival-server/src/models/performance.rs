//! Performance records and the validated shape used to write them

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::validation::{require_ordered, require_text};
use super::ValidationError;

/// Performance record, always owned by one festival
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Performance {
    pub id: i64,
    pub festival_id: i64,
    pub name: String,
    pub genre: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Validated performance fields, used for both create and update
#[derive(Debug, Clone, PartialEq)]
pub struct NewPerformance {
    name: String,
    genre: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
}

impl NewPerformance {
    /// Validate performance fields.
    ///
    /// `name` and `genre` must be non-empty and `end_time` must not
    /// precede `start_time`.
    pub fn new(
        name: impl Into<String>,
        genre: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let genre = genre.into();
        require_text("name", &name)?;
        require_text("genre", &genre)?;
        require_ordered(("start_time", &start_time), ("end_time", &end_time))?;

        Ok(Self {
            name,
            genre,
            start_time,
            end_time,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    /// Attach store-assigned ids.
    pub fn into_performance(self, id: i64, festival_id: i64) -> Performance {
        Performance {
            id,
            festival_id,
            name: self.name,
            genre: self.genre,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 4, hour, 0, 0).unwrap()
    }

    #[test]
    fn valid_performance() {
        let p = NewPerformance::new("Headliner", "rock", at(21), at(23)).unwrap();
        let p = p.into_performance(3, 1);
        assert_eq!(p.festival_id, 1);
        assert_eq!(p.genre, "rock");
    }

    #[test]
    fn rejects_empty_genre() {
        let err = NewPerformance::new("Opener", "", at(18), at(19)).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "genre" });
    }

    #[test]
    fn rejects_reversed_times() {
        let err = NewPerformance::new("Opener", "jazz", at(19), at(18)).unwrap_err();
        assert_eq!(err.to_string(), "end_time cannot be before start_time");
    }

    #[test]
    fn serializes_rfc3339_times() {
        let p = NewPerformance::new("Opener", "jazz", at(18), at(19))
            .unwrap()
            .into_performance(1, 2);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["start_time"], "2025-07-04T18:00:00Z");
        assert_eq!(json["festival_id"], 2);
    }
}
