use {
    crate::{
        constants::{ISO8601_COMPACT_FORMAT, ISO8601_DATE_FORMAT},
        SigningError,
    },
    chrono::{
        offset::{FixedOffset, TimeZone},
        DateTime, NaiveDate, SubsecRound, Utc,
    },
    lazy_static::lazy_static,
    regex::{Captures, Regex},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

lazy_static! {
    /// ISO 8601 timestamp format, basic or extended.
    static ref ISO_8601_REGEX: Regex = Regex::new(
        r"(?x)^
        (?P<year>\d{4})-?
        (?P<month>0[1-9]|1[0-2])-?
        (?P<day>0[1-9]|[12][0-9]|3[01])
        T
        (?P<hour>[01][0-9]|2[0-3]):?
        (?P<minute>[0-5][0-9]):?
        (?P<second>[0-5][0-9]|60)
        (?:[.,](?P<frac>[0-9]+))?
        (?P<offset>[-+][01][0-9]:?[0-5][0-9]|Z)$").expect("ISO 8601 regex must compile");
}

/// The instant a request is signed, pinned to UTC with whole-second precision.
///
/// SigV4 needs the same instant in two textual forms: the long form (`YYYYMMDD'T'HHMMSS'Z'`) used in the
/// `X-Amz-Date` header and string to sign, and the short form (`YYYYMMDD`) used in the credential scope and the
/// `kDate` key derivation. Both are produced from chrono format strings, so they never depend on the process locale
/// and no formatter state is shared between calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SigningTimestamp {
    timestamp: DateTime<Utc>,
}

impl SigningTimestamp {
    /// The current time.
    pub fn now() -> Self {
        Utc::now().into()
    }

    /// Parse an ISO 8601 timestamp in either basic (`20240101T000000Z`) or extended (`2024-01-01T00:00:00+00:00`)
    /// format. Fractional seconds are accepted and dropped.
    pub fn parse_from_iso8601(s: &str) -> Result<Self, SigningError> {
        let cap = ISO_8601_REGEX.captures(s).ok_or_else(|| malformed(s))?;

        let year: i32 = capture_number(&cap, "year", s)?;
        let month: u32 = capture_number(&cap, "month", s)?;
        let day: u32 = capture_number(&cap, "day", s)?;
        let hour: u32 = capture_number(&cap, "hour", s)?;
        let minute: u32 = capture_number(&cap, "minute", s)?;
        let second: u32 = capture_number(&cap, "second", s)?;

        let offset_str = cap.name("offset").map(|m| m.as_str()).ok_or_else(|| malformed(s))?;
        let offset_secs = if offset_str == "Z" {
            0
        } else {
            let offset_condensed = offset_str.replace(':', "");
            // Must be [+-]HHMM at this point
            let (sign_str, hm) = offset_condensed.split_at(1);
            let (hour_off_str, minute_off_str) = hm.split_at(2);

            let sign = if sign_str == "-" {
                -1
            } else {
                1
            };

            let hour = i32::from_str(hour_off_str).map_err(|_| malformed(s))?;
            let min = i32::from_str(minute_off_str).map_err(|_| malformed(s))?;
            sign * (hour * 3600 + min * 60)
        };

        let offset = FixedOffset::east_opt(offset_secs).ok_or_else(|| malformed(s))?;
        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .ok_or_else(|| malformed(s))?;
        let timestamp = offset.from_local_datetime(&naive).single().ok_or_else(|| malformed(s))?;

        Ok(timestamp.into())
    }

    /// The timestamp in UTC.
    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The long form, `YYYYMMDD'T'HHMMSS'Z'`, e.g. `20240101T000000Z`.
    #[inline]
    pub fn long_date(&self) -> String {
        self.timestamp.format(ISO8601_COMPACT_FORMAT).to_string()
    }

    /// The short form, `YYYYMMDD`, e.g. `20240101`.
    #[inline]
    pub fn short_date(&self) -> String {
        self.timestamp.format(ISO8601_DATE_FORMAT).to_string()
    }

    /// The calendar date in UTC.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for SigningTimestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Self {
            timestamp: dt.with_timezone(&Utc).trunc_subsecs(0),
        }
    }
}

impl FromStr for SigningTimestamp {
    type Err = SigningError;

    fn from_str(s: &str) -> Result<Self, SigningError> {
        Self::parse_from_iso8601(s)
    }
}

impl Display for SigningTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.long_date())
    }
}

fn capture_number<T: FromStr>(cap: &Captures<'_>, name: &str, s: &str) -> Result<T, SigningError> {
    cap.name(name).and_then(|m| T::from_str(m.as_str()).ok()).ok_or_else(|| malformed(s))
}

fn malformed(s: &str) -> SigningError {
    SigningError::MalformedTimestamp(format!(
        "Date must be in ISO-8601 'basic format'. Got '{}'. See http://en.wikipedia.org/wiki/ISO_8601",
        s
    ))
}
