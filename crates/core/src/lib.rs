#![warn(clippy::pedantic)]

use calendar::Event;
use query::LessonQuery;
use select::document::Document;

pub mod calendar;
pub mod decode;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod location;
pub mod query;
pub mod schedule;

pub use error::{Error, ValidationError};

pub const TZ: chrono_tz::Tz = chrono_tz::Asia::Tokyo;
pub const SCHEDULE_URL: &str = "http://nagayo.sakura.ne.jp/cgi/schedule/schedule.cgi";
pub const CALENDAR_TITLE: &str = "石川永世 レッスンスケジュール";

/// An empty lesson calendar described by `source`.
#[must_use]
pub fn create_calendar(source: &str) -> calendar::Calendar {
	calendar::Calendar::new(CALENDAR_TITLE, source, TZ)
}

/// Turn one schedule page into lessons for the selected weekday column.
///
/// # Errors
///
/// Returns [`Error::PatternMismatch`] when the page has no readable month
/// header. Cells that do not name a real date are skipped.
pub fn lessons(document: &Document, query: &LessonQuery) -> Result<Vec<Event>, Error> {
	let ym = schedule::year_month(document)?;

	let events = schedule::date_cells(document, query.day)
		.into_iter()
		.filter_map(|cell| {
			let Some(date) = ym.date(&cell.day) else {
				tracing::warn!(
					"skipping {}: no day {} in {}-{}",
					cell.summary,
					cell.day,
					ym.year,
					ym.month
				);
				return None;
			};

			Some(Event {
				location: location::resolve(&cell.summary).to_string(),
				summary: cell.summary,
				date,
				start: query.start.time(),
				end: query.end.time(),
				tz: TZ,
			})
		})
		.collect();

	Ok(events)
}
