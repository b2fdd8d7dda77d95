//! Festival records and the validated shape used to write them

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use super::validation::{require_ordered, require_text};
use super::{Location, Performance, ValidationError};

/// Festival record
///
/// `performances` is only populated when a read asks for them; it is
/// omitted from JSON otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Festival {
    pub id: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: Location,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performances: Option<Vec<Performance>>,
}

/// Validated festival fields, ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewFestival {
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    location: Location,
}

impl NewFestival {
    /// Validate festival fields.
    ///
    /// # Rules
    /// - `name` must not be empty or whitespace
    /// - `end_date` must not precede `start_date`
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        location: Location,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        require_text("name", &name)?;
        require_ordered(("start_date", &start_date), ("end_date", &end_date))?;

        Ok(Self {
            name,
            start_date,
            end_date,
            location,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Attach a store-assigned id.
    pub fn into_festival(self, id: i64) -> Festival {
        Festival {
            id,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            location: self.location,
            performances: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_single_day_festival() {
        let f = NewFestival::new("Roskilde", date(2025, 6, 28), date(2025, 6, 28), Location::new(55.6, 12.1));
        assert!(f.is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let err = NewFestival::new(" ", date(2025, 6, 28), date(2025, 7, 5), Location::new(0.0, 0.0))
            .unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "name" });
    }

    #[test]
    fn rejects_reversed_dates() {
        let err = NewFestival::new("Sziget", date(2025, 8, 11), date(2025, 8, 6), Location::new(47.5, 19.0))
            .unwrap_err();
        assert_eq!(err.to_string(), "end_date cannot be before start_date");
    }

    #[test]
    fn performances_omitted_unless_loaded() {
        let festival = NewFestival::new("Exit", date(2025, 7, 10), date(2025, 7, 13), Location::new(45.25, 19.86))
            .unwrap()
            .into_festival(7);

        let json = serde_json::to_value(&festival).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["start_date"], "2025-07-10");
        assert_eq!(json["location"], serde_json::json!([45.25, 19.86]));
        assert!(json.get("performances").is_none());

        let loaded = Festival {
            performances: Some(Vec::new()),
            ..festival
        };
        let json = serde_json::to_value(&loaded).unwrap();
        assert_eq!(json["performances"], serde_json::json!([]));
    }
}
