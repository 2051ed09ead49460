//! The schedule site serves EUC-JP without reliable encoding declarations,
//! so bodies are decoded here before they reach the HTML parser.

use encoding_rs::EUC_JP;
use select::document::Document;

/// Decode EUC-JP bytes, replacing malformed sequences with U+FFFD.
#[must_use]
pub fn decode_euc_jp(bytes: &[u8]) -> String {
	let (text, had_errors) = EUC_JP.decode_without_bom_handling(bytes);

	if had_errors {
		tracing::debug!("malformed EUC-JP sequences replaced while decoding");
	}

	text.into_owned()
}

/// Decode and parse a schedule page.
#[must_use]
pub fn parse_document(bytes: &[u8]) -> Document {
	Document::from(decode_euc_jp(bytes).as_str())
}
