//! Geographic point codec
//!
//! A `Location` crosses three representations:
//! - in memory: a pair of `f64`
//! - JSON: a two-element numeric array, `[x, y]`
//! - PostgreSQL: a `POINT`, exchanged as the text literal `(x,y)`
//!
//! Queries bind the literal with `$n::text::point` and read the column
//! back with `location::text`, so the sqlx impls below speak `TEXT`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef};
use sqlx::{Decode, Encode, Postgres, Type, ValueRef};

/// A two-component coordinate (latitude/longitude or x/y)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

/// Failure decoding a point literal
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocationError {
    #[error("point value is NULL")]
    Null,

    #[error("malformed point literal '{0}': expected (x,y)")]
    Malformed(String),

    #[error("invalid point coordinate '{0}'")]
    InvalidNumber(String),
}

impl Location {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Decode a store value, where `None` is SQL NULL.
    pub fn from_point_literal(value: Option<&str>) -> Result<Self, LocationError> {
        value.ok_or(LocationError::Null)?.parse()
    }

    /// Within `epsilon` on both axes.
    pub fn approx_eq(&self, other: &Location, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl From<[f64; 2]> for Location {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Location> for [f64; 2] {
    fn from(l: Location) -> Self {
        [l.x, l.y]
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || LocationError::Malformed(s.to_owned());

        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;

        let (x, y) = inner.split_once(',').ok_or_else(malformed)?;
        if y.contains(',') {
            return Err(malformed());
        }

        Ok(Self {
            x: parse_coordinate(x)?,
            y: parse_coordinate(y)?,
        })
    }
}

fn parse_coordinate(raw: &str) -> Result<f64, LocationError> {
    let raw = raw.trim();
    raw.parse()
        .map_err(|_| LocationError::InvalidNumber(raw.to_owned()))
}

impl Type<Postgres> for Location {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Postgres> for Location {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <String as Encode<'q, Postgres>>::encode_by_ref(&self.to_string(), buf)
    }
}

impl<'r> Decode<'r, Postgres> for Location {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Err(Box::new(LocationError::Null));
        }
        let text = <&str as Decode<'r, Postgres>>::decode(value)?;
        Ok(Location::from_point_literal(Some(text))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_point_literal() {
        assert_eq!(Location::new(12.34, 56.78).to_string(), "(12.34,56.78)");
        assert_eq!(Location::new(-0.5, 3.0).to_string(), "(-0.5,3)");
    }

    #[test]
    fn parses_point_literal() {
        let loc: Location = "(12.34,56.78)".parse().unwrap();
        assert_eq!(loc, Location::new(12.34, 56.78));

        let spaced: Location = " ( -1.5 , 2e3 ) ".parse().unwrap();
        assert_eq!(spaced, Location::new(-1.5, 2000.0));
    }

    #[test]
    fn literal_round_trip_is_exact() {
        let loc = Location::new(51.477_928, -0.001_545);
        let back: Location = loc.to_string().parse().unwrap();
        assert_eq!(back, loc);
    }

    #[test]
    fn null_is_an_error() {
        assert_eq!(Location::from_point_literal(None), Err(LocationError::Null));
    }

    #[test]
    fn rejects_malformed_literals() {
        for bad in ["12.34,56.78", "(12.34,56.78", "(12.34)", "(1,2,3)", ""] {
            let err = bad.parse::<Location>().unwrap_err();
            assert!(matches!(err, LocationError::Malformed(_)), "{bad}: {err:?}");
        }
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        let err = "(north,56.78)".parse::<Location>().unwrap_err();
        assert_eq!(err, LocationError::InvalidNumber("north".into()));

        let err = "(1,)".parse::<Location>().unwrap_err();
        assert_eq!(err, LocationError::InvalidNumber(String::new()));
    }

    #[test]
    fn json_is_two_element_array() {
        let json = serde_json::to_string(&Location::new(12.34, 56.78)).unwrap();
        assert_eq!(json, "[12.34,56.78]");

        let loc: Location = serde_json::from_str("[12.34, 56.78]").unwrap();
        assert!(loc.approx_eq(&Location::new(12.34, 56.78), f64::EPSILON));
    }

    #[test]
    fn json_rejects_wrong_shapes() {
        assert!(serde_json::from_str::<Location>("[1.0]").is_err());
        assert!(serde_json::from_str::<Location>("[1.0, 2.0, 3.0]").is_err());
        assert!(serde_json::from_str::<Location>(r#"{"x": 1.0, "y": 2.0}"#).is_err());
        assert!(serde_json::from_str::<Location>(r#"["1", "2"]"#).is_err());
        assert!(serde_json::from_str::<Location>("null").is_err());
    }
}
