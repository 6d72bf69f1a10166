//! Implementation of the [`TimeOfDay`] type

use core::{
    fmt::{self, Display},
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

use crate::{parse, Duration, Error, SECONDS_PER_DAY, SECONDS_PER_HOUR};

/// A point in time within a single day, from `00:00:00` up to and including
/// `23:59:59`.
///
/// Adding or subtracting a [`Duration`] wraps around midnight:
/// ```
/// # use daytime::{Duration, TimeOfDay};
/// let late = TimeOfDay::new(23, 0, 0).unwrap();
/// let two_hours = Duration::new(2, 0, 0).unwrap();
///
/// assert_eq!(late + two_hours, TimeOfDay::new(1, 0, 0).unwrap());
/// assert_eq!(TimeOfDay::MIDNIGHT - two_hours, TimeOfDay::new(22, 0, 0).unwrap());
/// ```
///
/// Ordering is chronological within the day, so midnight is the smallest
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    // field order determines the derived ordering
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TimeOfDay {
    /// The start of the day, `00:00:00`
    pub const MIDNIGHT: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Create a time of day from its hour (`0..=23`), minute (`0..=59`) and
    /// second (`0..=59`).
    ///
    /// # Example
    /// ```
    /// # use daytime::{Error, TimeOfDay};
    /// assert_eq!(TimeOfDay::new(23, 59, 59).unwrap().to_string(), "23:59:59");
    /// assert_eq!(TimeOfDay::new(24, 0, 0), Err(Error::OutOfRange));
    /// ```
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, Error> {
        if hours > 23 || minutes > 59 || seconds > 59 {
            return Err(Error::OutOfRange);
        }

        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Create a time of day at a whole minute.
    pub fn from_hm(hours: u8, minutes: u8) -> Result<Self, Error> {
        Self::new(hours, minutes, 0)
    }

    /// Create a time of day at a whole hour.
    pub fn from_h(hours: u8) -> Result<Self, Error> {
        Self::new(hours, 0, 0)
    }

    pub const fn hours(&self) -> u8 {
        self.hours
    }

    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// The number of seconds elapsed since midnight, in `0..86400`
    pub const fn seconds_of_day(&self) -> u64 {
        self.hours as u64 * SECONDS_PER_HOUR + self.minutes as u64 * 60 + self.seconds as u64
    }

    /// Compare two times of day chronologically.
    pub fn compare(&self, other: &Self) -> core::cmp::Ordering {
        self.cmp(other)
    }

    /// Wrap a duration into a single day by taking its hour count modulo 24.
    /// Minutes and seconds are kept as they are.
    fn wrap(duration: Duration) -> Self {
        Self {
            hours: (duration.hours() % 24) as u8,
            minutes: duration.minutes(),
            seconds: duration.seconds(),
        }
    }

    /// The time of day `duration` after `self`, wrapping past midnight.
    ///
    /// Whole days in `duration` have no effect on the result.
    ///
    /// # Example
    /// ```
    /// # use daytime::{Duration, TimeOfDay};
    /// let result = TimeOfDay::MIDNIGHT.plus(Duration::new(47, 59, 59).unwrap());
    /// assert_eq!(result.to_string(), "23:59:59");
    /// ```
    pub fn plus(self, duration: Duration) -> Self {
        let within_day = Duration::from(duration.total_seconds() % SECONDS_PER_DAY);
        Self::wrap(Duration::from(self) + within_day)
    }

    /// The time of day `duration` before `self`, wrapping past midnight.
    ///
    /// Only the hour count of `duration` is reduced to within a day before
    /// subtracting.
    ///
    /// # Example
    /// ```
    /// # use daytime::{Duration, TimeOfDay};
    /// let result = TimeOfDay::MIDNIGHT.minus(Duration::new(1, 1, 1).unwrap());
    /// assert_eq!(result.to_string(), "22:58:59");
    /// ```
    pub fn minus(self, duration: Duration) -> Self {
        let this = Duration::from(self);
        let other = Duration::from(Self::wrap(duration));

        if this > other {
            Self::wrap(this - other)
        } else {
            Self::wrap(Duration::from(SECONDS_PER_DAY) - (other - this))
        }
    }
}

impl Add<Duration> for TimeOfDay {
    type Output = TimeOfDay;

    fn add(self, rhs: Duration) -> Self::Output {
        self.plus(rhs)
    }
}

impl AddAssign<Duration> for TimeOfDay {
    fn add_assign(&mut self, rhs: Duration) {
        *self = self.plus(rhs);
    }
}

impl Sub<Duration> for TimeOfDay {
    type Output = TimeOfDay;

    fn sub(self, rhs: Duration) -> Self::Output {
        self.minus(rhs)
    }
}

impl SubAssign<Duration> for TimeOfDay {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = self.minus(rhs);
    }
}

impl Add for TimeOfDay {
    type Output = TimeOfDay;

    fn add(self, rhs: TimeOfDay) -> Self::Output {
        self.plus(Duration::from(rhs))
    }
}

impl Sub for TimeOfDay {
    type Output = TimeOfDay;

    fn sub(self, rhs: TimeOfDay) -> Self::Output {
        self.minus(Duration::from(rhs))
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [hours, minutes, seconds] = parse::components(s)?;

        Self::new(
            parse::hour_of_day(hours)?,
            parse::sexagesimal(minutes)?,
            parse::sexagesimal(seconds)?,
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
