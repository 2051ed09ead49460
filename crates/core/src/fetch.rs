use std::time::Duration;

use chrono::{Datelike, Months, NaiveDate};
use select::document::Document;

use crate::{calendar::Calendar, decode, error::Error, query::LessonQuery};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Downloads monthly schedule pages.
#[derive(Debug, Clone)]
pub struct Fetcher {
	client: reqwest::Client,
	url: String,
}

impl Fetcher {
	/// # Errors
	///
	/// Returns [`Error::Fetch`] if the HTTP client cannot be built.
	pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
		let client = reqwest::Client::builder().timeout(timeout).build()?;

		Ok(Self {
			client,
			url: url.into(),
		})
	}

	#[must_use]
	pub fn url(&self) -> &str {
		&self.url
	}

	/// Fetch and parse the page for the month containing `month`.
	///
	/// # Errors
	///
	/// Returns [`Error::Fetch`] on network failures and error statuses.
	pub async fn month(&self, month: NaiveDate) -> Result<Document, Error> {
		let body = self
			.client
			.get(&self.url)
			.query(&[("year", month.year().to_string()), ("month", month.month().to_string())])
			.send()
			.await?
			.error_for_status()?
			.bytes()
			.await?;

		Ok(decode::parse_document(&body))
	}

	/// Build the calendar for the months before, of and after `today`.
	///
	/// Months that fail to download or parse are logged and left out.
	pub async fn calendar(&self, query: &LessonQuery, today: NaiveDate) -> Calendar {
		let mut calendar = crate::create_calendar(&self.url);

		for month in surrounding_months(today) {
			let lessons = match self.month(month).await {
				Ok(document) => crate::lessons(&document, query),
				Err(err) => Err(err),
			};

			match lessons {
				Ok(events) => {
					tracing::info!("{} lessons in {}", events.len(), month.format("%Y-%m"));
					calendar.extend(events);
				}
				Err(err) => tracing::warn!("skipping {}: {err}", month.format("%Y-%m")),
			}
		}

		calendar
	}
}

/// The first days of the previous, current and next month.
#[must_use]
pub fn surrounding_months(today: NaiveDate) -> Vec<NaiveDate> {
	let first = today.with_day(1).unwrap_or(today);

	[
		first.checked_sub_months(Months::new(1)),
		Some(first),
		first.checked_add_months(Months::new(1)),
	]
	.into_iter()
	.flatten()
	.collect()
}
