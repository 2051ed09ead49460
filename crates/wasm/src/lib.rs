#![warn(clippy::pedantic)]

use nagayo_core::{decode, query::LessonQuery};
use wasm_bindgen::prelude::wasm_bindgen;

/// Convert one saved EUC-JP schedule page into calendar text.
///
/// # Errors
///
/// Returns the validation or header error message.
#[wasm_bindgen]
pub fn from_html(html: &[u8], day: &str, start: &str, end: &str) -> Result<String, String> {
	let query = LessonQuery::from_params(Some(day), Some(start), Some(end)).map_err(|err| err.to_string())?;
	let events = nagayo_core::lessons(&decode::parse_document(html), &query).map_err(|err| err.to_string())?;

	let mut calendar = nagayo_core::create_calendar(nagayo_core::SCHEDULE_URL);
	calendar.extend(events);

	Ok(calendar.to_string())
}
