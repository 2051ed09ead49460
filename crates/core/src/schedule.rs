use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use select::{
	document::Document,
	node::Node,
	predicate::{Attr, Name, Predicate},
};

use crate::{error::Error, query::DaySelector};

// 2019年2月 -> 2019, 2
static YEAR_MONTH: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^([0-9]{4}).*?([0-9]{1,2}).*$").expect("valid year-month regex"));
// 12有楽町山野 -> 12, 有楽町山野
static DATE_CELL: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^([0-9]{1,2})(.*$)").expect("valid date cell regex"));

/// The month shown by a schedule page, as printed in its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearMonth {
	pub year: String,
	pub month: String,
}

impl YearMonth {
	/// The date of `day` in this month, if it exists.
	#[must_use]
	pub fn date(&self, day: &str) -> Option<NaiveDate> {
		NaiveDate::from_ymd_opt(
			self.year.parse().ok()?,
			self.month.parse().ok()?,
			day.parse().ok()?,
		)
	}
}

/// One table cell split into its day of month and the text after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCell {
	pub day: String,
	pub summary: String,
}

/// Read the month from the header cell spanning all seven columns.
///
/// # Errors
///
/// Returns [`Error::PatternMismatch`] if the header is missing or does not
/// start with a four digit year followed by a month number.
pub fn year_month(document: &Document) -> Result<YearMonth, Error> {
	let text = document
		.find(Name("td").and(Attr("colspan", "7")))
		.next()
		.map(|node| node.text())
		.unwrap_or_default();

	let captures = YEAR_MONTH
		.captures(&text)
		.ok_or_else(|| Error::PatternMismatch {
			what: "year-month header",
			text: text.clone(),
		})?;

	tracing::debug!(year = &captures[1], month = &captures[2], "matched header {text:?}");

	Ok(YearMonth {
		year: captures[1].to_string(),
		month: captures[2].to_string(),
	})
}

/// Collect the dated cells of every row but the header, in document order.
#[must_use]
pub fn date_cells(document: &Document, day: DaySelector) -> Vec<RawCell> {
	let column = day.column();

	document
		.find(Name("td"))
		.filter(|cell| {
			cell.parent()
				.is_some_and(|row| row.name() == Some("tr") && position_of_type(&row) > 1)
		})
		.filter(|cell| column.map_or(true, |column| position_of_type(cell) == column))
		.filter_map(|cell| parse_cell(&cell.text()))
		.collect()
}

fn parse_cell(text: &str) -> Option<RawCell> {
	let Some(captures) = DATE_CELL.captures(text) else {
		tracing::trace!("skipping cell {text:?}");
		return None;
	};

	tracing::debug!(day = &captures[1], summary = &captures[2], "matched cell");

	if captures[2].is_empty() {
		return None;
	}

	Some(RawCell {
		day: captures[1].to_string(),
		summary: captures[2].to_string(),
	})
}

/// 1-based position among siblings sharing this element's tag.
fn position_of_type(node: &Node) -> usize {
	let name = node.name();
	let mut position = 1;
	let mut sibling = node.prev();

	while let Some(prev) = sibling {
		if prev.name().is_some() && prev.name() == name {
			position += 1;
		}

		sibling = prev.prev();
	}

	position
}
