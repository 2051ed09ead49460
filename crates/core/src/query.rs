use std::{fmt, str::FromStr};

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

static HHMM: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3])([0-5][0-9])$").expect("valid HHMM regex"));

/// Which weekday column of the schedule table to read.
///
/// `0` reads every column. `1` through `7` pick one `td` position in each
/// row, which on the schedule site runs Sunday (`1`) to Saturday (`7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySelector(u8);

impl DaySelector {
	pub const ALL: Self = Self(0);
	pub const TUESDAY: Self = Self(3);

	/// The 1-based column position, or `None` when every column is read.
	#[must_use]
	pub fn column(self) -> Option<usize> {
		(self.0 != 0).then_some(usize::from(self.0))
	}
}

impl FromStr for DaySelector {
	type Err = ValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.parse::<u8>() {
			Ok(day) if day <= 7 => Ok(Self(day)),
			_ => Err(ValidationError::Day(s.to_string())),
		}
	}
}

impl fmt::Display for DaySelector {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A wall-clock time given as `HHMM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LessonTime(NaiveTime);

impl LessonTime {
	/// Parse `value`, naming `param` in the error.
	///
	/// # Errors
	///
	/// Returns [`ValidationError::Time`] unless `value` is `0000` through `2359`.
	pub fn parse(param: &'static str, value: &str) -> Result<Self, ValidationError> {
		let invalid = || ValidationError::Time {
			param,
			value: value.to_string(),
		};

		let captures = HHMM.captures(value).ok_or_else(invalid)?;
		let hour = captures[1].parse().map_err(|_| invalid())?;
		let minute = captures[2].parse().map_err(|_| invalid())?;

		NaiveTime::from_hms_opt(hour, minute, 0)
			.map(Self)
			.ok_or_else(invalid)
	}

	#[must_use]
	pub fn time(self) -> NaiveTime {
		self.0
	}
}

impl fmt::Display for LessonTime {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.0.format("%H%M"))
	}
}

const fn hhmm(hour: u32, minute: u32) -> LessonTime {
	match NaiveTime::from_hms_opt(hour, minute, 0) {
		Some(time) => LessonTime(time),
		None => panic!("invalid lesson time"),
	}
}

/// The validated parameters of one calendar request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonQuery {
	pub day: DaySelector,
	pub start: LessonTime,
	pub end: LessonTime,
}

impl Default for LessonQuery {
	/// The weekly Tuesday evening lesson.
	fn default() -> Self {
		Self {
			day: DaySelector::TUESDAY,
			start: Self::DEFAULT_START,
			end: Self::DEFAULT_END,
		}
	}
}

impl LessonQuery {
	pub const DEFAULT_START: LessonTime = hhmm(19, 30);
	pub const DEFAULT_END: LessonTime = hhmm(20, 30);

	/// Validate raw query parameters. Missing ones take their default.
	///
	/// # Errors
	///
	/// Returns the first [`ValidationError`], checking `day`, `start` then `end`.
	pub fn from_params(
		day: Option<&str>,
		start: Option<&str>,
		end: Option<&str>,
	) -> Result<Self, ValidationError> {
		let default = Self::default();

		Ok(Self {
			day: day.map_or(Ok(default.day), |s| s.parse())?,
			start: start.map_or(Ok(default.start), |s| LessonTime::parse("start", s))?,
			end: end.map_or(Ok(default.end), |s| LessonTime::parse("end", s))?,
		})
	}
}
