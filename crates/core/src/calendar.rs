use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;

/// A single lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
	pub summary: String,
	pub location: String,
	pub date: NaiveDate,
	pub start: NaiveTime,
	pub end: NaiveTime,
	pub tz: Tz,
}

impl fmt::Display for Event {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let tzid = self.tz.name();

		writeln!(f, "BEGIN:VEVENT")?;
		writeln!(f, "SUMMARY:{}", self.summary)?;
		writeln!(f, "LOCATION:{}", self.location)?;
		writeln!(
			f,
			"DTSTART;TZID={tzid}:{}",
			self.date.and_time(self.start).format("%Y%m%dT%H%M%S")
		)?;
		writeln!(
			f,
			"DTEND;TZID={tzid}:{}",
			self.date.and_time(self.end).format("%Y%m%dT%H%M%S")
		)?;
		writeln!(f, "END:VEVENT")
	}
}

/// A calendar feed. Rendered with [`fmt::Display`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
	pub title: String,
	pub description: String,
	pub tz: Tz,
	pub events: Vec<Event>,
}

impl Calendar {
	#[must_use]
	pub fn new(title: impl Into<String>, description: impl Into<String>, tz: Tz) -> Self {
		Self {
			title: title.into(),
			description: description.into(),
			tz,
			events: Vec::new(),
		}
	}

	pub fn push(&mut self, event: Event) -> &mut Self {
		self.events.push(event);
		self
	}
}

impl Extend<Event> for Calendar {
	fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
		self.events.extend(iter);
	}
}

impl fmt::Display for Calendar {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "BEGIN:VCALENDAR")?;
		writeln!(f, "X-WR-CALNAME:{}", self.title)?;
		writeln!(f, "X-WR-CALDESC:{}", self.description)?;
		writeln!(f, "X-WR-TIMEZONE:{}", self.tz.name())?;

		for event in &self.events {
			write!(f, "{event}")?;
		}

		writeln!(f, "END:VCALENDAR")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn calendar() -> Calendar {
		Calendar::new("Lessons", "http://example.com/schedule", chrono_tz::Asia::Tokyo)
	}

	fn event(day: u32, summary: &str, location: &str) -> Event {
		Event {
			summary: summary.to_string(),
			location: location.to_string(),
			date: NaiveDate::from_ymd_opt(2019, 10, day).unwrap(),
			start: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
			end: NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
			tz: chrono_tz::Asia::Tokyo,
		}
	}

	#[test]
	fn empty_calendar() {
		assert_eq!(
			calendar().to_string(),
			"BEGIN:VCALENDAR\n\
			 X-WR-CALNAME:Lessons\n\
			 X-WR-CALDESC:http://example.com/schedule\n\
			 X-WR-TIMEZONE:Asia/Tokyo\n\
			 END:VCALENDAR\n"
		);
	}

	#[test]
	fn single_event() {
		let mut calendar = calendar();
		calendar.push(event(1, "有楽町山野", "有楽町\\, 東京"));

		assert_eq!(
			calendar.to_string(),
			"BEGIN:VCALENDAR\n\
			 X-WR-CALNAME:Lessons\n\
			 X-WR-CALDESC:http://example.com/schedule\n\
			 X-WR-TIMEZONE:Asia/Tokyo\n\
			 BEGIN:VEVENT\n\
			 SUMMARY:有楽町山野\n\
			 LOCATION:有楽町\\, 東京\n\
			 DTSTART;TZID=Asia/Tokyo:20191001T193000\n\
			 DTEND;TZID=Asia/Tokyo:20191001T203000\n\
			 END:VEVENT\n\
			 END:VCALENDAR\n"
		);
	}

	#[test]
	fn events_keep_order_and_blank_location() {
		let mut calendar = calendar();
		calendar.extend([event(29, "b", ""), event(15, "a", "")]);

		let text = calendar.to_string();

		assert_eq!(text.matches("BEGIN:VEVENT\n").count(), 2);
		assert_eq!(text.matches("END:VEVENT\n").count(), 2);
		assert!(text.contains("LOCATION:\n"));
		assert!(text.find("20191029T1930").unwrap() < text.find("20191015T1930").unwrap());
	}
}
