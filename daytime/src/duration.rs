//! Implementation of the [`Duration`] type

use core::{
    fmt::{self, Display},
    ops::{Add, AddAssign, Mul, Sub, SubAssign},
    str::FromStr,
};

use crate::{parse, Error, TimeOfDay, SECONDS_PER_HOUR};

/// A non-negative span of whole seconds.
///
/// Unlike a [`TimeOfDay`], a [`Duration`] is not limited to a single day: its
/// hour count is unbounded. Subtracting two durations yields the absolute
/// difference between them, so the result is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration {
    seconds: u64,
}

impl Duration {
    /// A duration of zero seconds
    pub const ZERO: Self = Self { seconds: 0 };

    /// Create a duration from hours, minutes and seconds.
    ///
    /// The hour count is unbounded, minutes and seconds must lie in `0..=59`.
    ///
    /// # Example
    /// ```
    /// # use daytime::{Duration, Error};
    /// assert_eq!(Duration::new(48, 0, 59).unwrap().to_string(), "48:00:59");
    /// assert_eq!(Duration::new(0, 60, 0), Err(Error::OutOfRange));
    /// ```
    pub fn new(hours: u64, minutes: u8, seconds: u8) -> Result<Self, Error> {
        if minutes > 59 || seconds > 59 {
            return Err(Error::OutOfRange);
        }

        hours
            .checked_mul(SECONDS_PER_HOUR)
            .and_then(|total| total.checked_add(u64::from(minutes) * 60 + u64::from(seconds)))
            .map(Self::from_total)
            .ok_or(Error::OutOfRange)
    }

    /// Create a duration from hours and minutes.
    pub fn from_hm(hours: u64, minutes: u8) -> Result<Self, Error> {
        Self::new(hours, minutes, 0)
    }

    /// Create a duration from a raw number of seconds, which may not be
    /// negative.
    ///
    /// # Example
    /// ```
    /// # use daytime::{Duration, Error};
    /// assert_eq!(Duration::from_secs(86400).unwrap().to_string(), "24:00:00");
    /// assert_eq!(Duration::from_secs(-1), Err(Error::OutOfRange));
    /// ```
    pub fn from_secs(seconds: i64) -> Result<Self, Error> {
        u64::try_from(seconds)
            .map(Self::from_total)
            .map_err(|_| Error::OutOfRange)
    }

    pub(crate) const fn from_total(seconds: u64) -> Self {
        Self { seconds }
    }

    /// The whole hours in this duration. This is not wrapped at 24.
    pub const fn hours(&self) -> u64 {
        self.seconds / SECONDS_PER_HOUR
    }

    /// The minutes past the whole hours, in `0..=59`
    pub const fn minutes(&self) -> u8 {
        ((self.seconds / 60) % 60) as u8
    }

    /// The seconds past the whole minutes, in `0..=59`
    pub const fn seconds(&self) -> u8 {
        (self.seconds % 60) as u8
    }

    pub const fn total_hours(&self) -> u64 {
        self.hours()
    }

    pub const fn total_minutes(&self) -> u64 {
        self.seconds / 60
    }

    pub const fn total_seconds(&self) -> u64 {
        self.seconds
    }

    /// Compare two durations by their length.
    pub fn compare(&self, other: &Self) -> core::cmp::Ordering {
        self.cmp(other)
    }

    /// The sum of two durations.
    ///
    /// # Panics
    /// Panics when the total number of seconds overflows a [`u64`].
    pub fn plus(self, other: Self) -> Self {
        self.seconds
            .checked_add(other.seconds)
            .map(Self::from_total)
            .expect("overflow when adding durations")
    }

    /// The absolute difference between two durations, so
    /// `a.minus(b) == b.minus(a)`.
    ///
    /// # Example
    /// ```
    /// # use daytime::Duration;
    /// let one = Duration::new(1, 0, 0).unwrap();
    /// let day = Duration::new(24, 0, 0).unwrap();
    /// assert_eq!(one.minus(day).to_string(), "23:00:00");
    /// assert_eq!(day.minus(one).to_string(), "23:00:00");
    /// ```
    pub fn minus(self, other: Self) -> Self {
        Self::from_total(self.seconds.abs_diff(other.seconds))
    }

    /// Scale this duration by `factor`.
    ///
    /// Fails with [`Error::OutOfRange`] when the product would be negative or
    /// does not fit in the underlying integer. The `*` operator with a [`u64`]
    /// computes the same product but panics on overflow instead.
    ///
    /// # Example
    /// ```
    /// # use daytime::{Duration, Error};
    /// let period = Duration::new(1, 30, 0).unwrap();
    /// assert_eq!(period.multiply(3).unwrap().to_string(), "4:30:00");
    /// assert_eq!(period.multiply(-1), Err(Error::OutOfRange));
    /// assert_eq!(Duration::ZERO.multiply(-1), Ok(Duration::ZERO));
    /// ```
    pub fn multiply(self, factor: i64) -> Result<Self, Error> {
        let product = i128::from(self.seconds) * i128::from(factor);

        u64::try_from(product)
            .map(Self::from_total)
            .map_err(|_| Error::OutOfRange)
    }

    fn scale(self, factor: u64) -> Self {
        self.seconds
            .checked_mul(factor)
            .map(Self::from_total)
            .expect("overflow when multiplying duration by scalar")
    }
}

impl From<u64> for Duration {
    fn from(seconds: u64) -> Self {
        Self::from_total(seconds)
    }
}

impl TryFrom<i64> for Duration {
    type Error = Error;

    fn try_from(seconds: i64) -> Result<Self, Self::Error> {
        Self::from_secs(seconds)
    }
}

impl From<TimeOfDay> for Duration {
    fn from(time: TimeOfDay) -> Self {
        Self::from_total(time.seconds_of_day())
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Self::Output {
        self.plus(rhs)
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        *self = self.plus(rhs);
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Self::Output {
        self.minus(rhs)
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = self.minus(rhs);
    }
}

/// # Panics
/// Panics when the product overflows a [`u64`] number of seconds. Use
/// [`Duration::multiply`] to get [`Error::OutOfRange`] instead.
impl Mul<u64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: u64) -> Self::Output {
        self.scale(rhs)
    }
}

/// # Panics
/// Panics on overflow, like `Duration * u64`.
impl Mul<Duration> for u64 {
    type Output = Duration;

    fn mul(self, rhs: Duration) -> Self::Output {
        rhs.scale(self)
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours(), self.minutes(), self.seconds())
    }
}

impl FromStr for Duration {
    type Err = Error;

    /// Parse the `H:MM:SS` form produced by [`Display`]. The hour count may
    /// not carry leading zeroes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [hours, minutes, seconds] = parse::components(s)?;

        let minutes = parse::sexagesimal(minutes)?;
        let seconds = parse::sexagesimal(seconds)?;
        let hours = parse::hour_count(hours)?;

        Self::new(hours, minutes, seconds)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
