//! Wire date-times in the server's wall-clock zone.
//!
//! The server serialises date-times as `yyyy-MM-dd HH:mm:ss` without any
//! zone or offset; the values are wall-clock times in the zone the server is
//! configured with (`Europe/Madrid` for the production deployment). The zone
//! is therefore a client configuration value, and conversion to and from
//! UTC takes it as a parameter.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

const WIRE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A date-time exactly as it appears on the wire: naive wall-clock time in
/// the server's zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerLocalDateTime(NaiveDateTime);

impl ServerLocalDateTime {
    /// Wraps a naive wall-clock value.
    #[must_use]
    pub const fn new(naive: NaiveDateTime) -> Self {
        Self(naive)
    }

    /// Returns the underlying naive value.
    #[must_use]
    pub const fn naive(self) -> NaiveDateTime {
        self.0
    }

    /// Interprets the wall-clock value in `zone` and converts it to UTC.
    ///
    /// Returns `None` for wall-clock values that do not exist in `zone`
    /// (spring-forward gaps); ambiguous values (fall-back overlaps) resolve
    /// to the earlier instant.
    #[must_use]
    pub fn to_utc(self, zone: Tz) -> Option<DateTime<Utc>> {
        zone.from_local_datetime(&self.0)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
    }

    /// Converts a UTC instant to the wall-clock value the server would show.
    #[must_use]
    pub fn from_utc(instant: DateTime<Utc>, zone: Tz) -> Self {
        Self(instant.with_timezone(&zone).naive_local())
    }
}

impl fmt::Display for ServerLocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(WIRE_FORMAT))
    }
}

impl Serialize for ServerLocalDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.format(WIRE_FORMAT))
    }
}

impl<'de> Deserialize<'de> for ServerLocalDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, WIRE_FORMAT)
            .map(Self)
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn wire(text: &str) -> ServerLocalDateTime {
        serde_json::from_value(serde_json::Value::String(text.to_owned())).unwrap()
    }

    #[test]
    fn parses_and_reprints_the_wire_format() {
        let value = wire("2019-03-04 15:30:00");
        assert_eq!(value.to_string(), "2019-03-04 15:30:00");
        assert_eq!(
            serde_json::to_value(value).unwrap(),
            serde_json::Value::String("2019-03-04 15:30:00".to_owned())
        );
    }

    #[test]
    fn converts_madrid_wall_clock_to_utc() {
        // CET, one hour ahead of UTC in winter.
        let value = wire("2019-01-15 10:00:00");
        let utc = value.to_utc(chrono_tz::Europe::Madrid).unwrap();
        assert_eq!(utc.to_rfc3339(), "2019-01-15T09:00:00+00:00");
    }

    #[test]
    fn round_trips_through_utc() {
        let zone = chrono_tz::Europe::Madrid;
        let original = wire("2021-07-01 12:00:00");
        let back = ServerLocalDateTime::from_utc(original.to_utc(zone).unwrap(), zone);
        assert_eq!(back, original);
    }

    #[test]
    fn nonexistent_wall_clock_value_is_rejected() {
        // 2021-03-28 02:30 never happened in Madrid (spring forward).
        let gap = ServerLocalDateTime::new(
            NaiveDate::from_ymd_opt(2021, 3, 28)
                .unwrap()
                .and_hms_opt(2, 30, 0)
                .unwrap(),
        );
        assert_eq!(gap.to_utc(chrono_tz::Europe::Madrid), None);
    }
}
