use std::collections::BTreeMap;

const SEPARATORS: &[char] = &[' ', '\t', '\n'];

/// Splits trailing modifier text into `key=value` pairs.
///
/// A token without `=` past its first byte maps to itself: `cache` reads as
/// `cache=cache`, `=x` as key `=x` with value `=x`. Later keys win.
pub fn parse_map(body: &str) -> BTreeMap<&str, &str> {
	body.split(SEPARATORS)
		.filter(|token| !token.is_empty())
		.map(|token| match token.find('=') {
			Some(idx) if idx > 0 => (&token[..idx], &token[idx + 1..]),
			_ => (token, token),
		})
		.collect()
}
