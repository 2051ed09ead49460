use chrono::{NaiveDate, NaiveTime};
use nagayo_core::{
	decode,
	query::{DaySelector, LessonQuery},
	schedule::{self, RawCell, YearMonth},
};
use select::document::Document;

const OCTOBER_2019: &str = include_str!("fixtures/schedule_2019_10.html");

fn october() -> Document {
	let (bytes, _, _) = encoding_rs::EUC_JP.encode(OCTOBER_2019);
	decode::parse_document(&bytes)
}

fn cells(day: &str) -> Vec<(String, String)> {
	schedule::date_cells(&october(), day.parse::<DaySelector>().unwrap())
		.into_iter()
		.map(|RawCell { day, summary }| (day, summary))
		.collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
	expected
		.iter()
		.map(|(day, summary)| ((*day).to_string(), (*summary).to_string()))
		.collect()
}

#[test]
fn header_month() {
	assert_eq!(
		schedule::year_month(&october()).unwrap(),
		YearMonth {
			year: "2019".to_string(),
			month: "10".to_string(),
		}
	);
}

#[test]
fn sunday_column() {
	assert_eq!(cells("1"), pairs(&[("20", "★フォーク有楽町")]));
}

#[test]
fn tuesday_column() {
	assert_eq!(
		cells("3"),
		pairs(&[("1", "有楽町山野"), ("15", "有楽町山野"), ("29", "有楽町山野")])
	);
}

#[test]
fn empty_columns() {
	for day in ["2", "4", "6", "7"] {
		assert!(cells(day).is_empty(), "column {day}");
	}
}

#[test]
fn all_columns_row_major() {
	assert_eq!(
		cells("0"),
		pairs(&[
			("1", "有楽町山野"),
			("10", "新宿"),
			("15", "有楽町山野"),
			("20", "★フォーク有楽町"),
			("29", "有楽町山野"),
		])
	);
}

#[test]
fn lessons_for_tuesday() {
	let query = LessonQuery::from_params(Some("3"), Some("1930"), Some("2030")).unwrap();
	let events = nagayo_core::lessons(&october(), &query).unwrap();

	let dates = events.iter().map(|event| event.date).collect::<Vec<_>>();
	assert_eq!(
		dates,
		[1, 15, 29]
			.map(|day| NaiveDate::from_ymd_opt(2019, 10, day).unwrap())
			.to_vec()
	);

	for event in &events {
		assert_eq!(event.summary, "有楽町山野");
		assert!(event.location.starts_with("ヤマノミュージックサロン有楽町"));
		assert_eq!(event.start, NaiveTime::from_hms_opt(19, 30, 0).unwrap());
		assert_eq!(event.end, NaiveTime::from_hms_opt(20, 30, 0).unwrap());
	}
}

#[test]
fn unknown_venue_has_blank_location() {
	let query = LessonQuery::from_params(Some("5"), Some("1000"), Some("1100")).unwrap();
	let events = nagayo_core::lessons(&october(), &query).unwrap();

	assert_eq!(events.len(), 1);
	assert_eq!(events[0].summary, "新宿");
	assert_eq!(events[0].location, "");
}

#[test]
fn rendered_calendar() {
	let mut calendar = nagayo_core::create_calendar(nagayo_core::SCHEDULE_URL);
	calendar.extend(nagayo_core::lessons(&october(), &LessonQuery::default()).unwrap());

	let text = calendar.to_string();

	assert!(text.starts_with(
		"BEGIN:VCALENDAR\n\
		 X-WR-CALNAME:石川永世 レッスンスケジュール\n\
		 X-WR-CALDESC:http://nagayo.sakura.ne.jp/cgi/schedule/schedule.cgi\n\
		 X-WR-TIMEZONE:Asia/Tokyo\n"
	));
	assert!(text.ends_with("END:VEVENT\nEND:VCALENDAR\n"));
	assert_eq!(text.matches("BEGIN:VEVENT").count(), 3);
	assert!(text.contains(
		"DTSTART;TZID=Asia/Tokyo:20191015T193000\nDTEND;TZID=Asia/Tokyo:20191015T203000\n"
	));
	assert!(text.contains("LOCATION:ヤマノミュージックサロン有楽町 〒100-0006\\, 東京都千代田区\\, 有楽町2丁目10番1号\n"));
}

#[test]
fn page_without_header_yields_error() {
	let (bytes, _, _) = encoding_rs::EUC_JP.encode("<table><tr><td>10月</td></tr><tr><td>1有楽町山野</td></tr></table>");
	let document = decode::parse_document(&bytes);

	assert!(nagayo_core::lessons(&document, &LessonQuery::default()).is_err());
}
