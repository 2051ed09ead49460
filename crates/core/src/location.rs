use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Lesson venues keyed by the exact text used on the schedule page.
/// Commas in addresses are already escaped for the calendar output.
static LOCATIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
	HashMap::from([(
		"有楽町山野",
		"ヤマノミュージックサロン有楽町 〒100-0006\\, 東京都千代田区\\, 有楽町2丁目10番1号",
	)])
});

/// The address for a lesson summary, or an empty string for unknown venues.
#[must_use]
pub fn resolve(summary: &str) -> &'static str {
	LOCATIONS.get(summary).copied().unwrap_or_default()
}
