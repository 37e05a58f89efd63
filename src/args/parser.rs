use super::error::{ArgsError, Result};
use super::modifiers::parse_map;
use super::SpatialArgs;
use crate::operation::Operation;
use crate::shape::ShapeReader;
use std::collections::BTreeMap;

/// Parses `Operation(shape) [key=value ...]`.
///
/// The shape body is everything between the first `(` and the last `)`, handed
/// trimmed to `reader`. Recognized modifiers are `cache`, `score`, `min` and
/// `max`; anything else is rejected. The result is not validated.
pub fn parse<'a, R>(query: &'a str, reader: &R) -> Result<'a, SpatialArgs<R::Shape>>
where
	R: ShapeReader + ?Sized,
{
	let (open, close) = match (query.find('('), query.rfind(')')) {
		(Some(open), Some(close)) if open < close => (open, close),
		_ => return Err(ArgsError::MalformedSyntax { query }),
	};

	let name = query[..open].trim();
	if name.contains(char::is_whitespace) {
		return Err(ArgsError::MalformedSyntax { query });
	}
	let operation = Operation::by_name(name).ok_or(ArgsError::UnknownOperation { name })?;

	let body = query[open + 1..close].trim();
	if body.is_empty() {
		return Err(ArgsError::MissingBody { query });
	}
	let shape = reader.read_shape(body)?;
	let mut args = SpatialArgs::new(operation, shape);

	let tail = query[close + 1..].trim();
	if !tail.is_empty() {
		let mut modifiers = parse_map(tail);
		log::trace!("{} modifiers: {:?}", operation, modifiers);
		args.cacheable = read_bool(modifiers.remove("cache"), args.cacheable);
		args.calculate_score = read_bool(modifiers.remove("score"), true);
		args.min = read_number(&mut modifiers, "min")?;
		args.max = read_number(&mut modifiers, "max")?;
		if !modifiers.is_empty() {
			return Err(ArgsError::UnknownParameters {
				keys: modifiers.into_keys().collect(),
			});
		}
	}

	if !operation.score_is_meaningful() {
		args.calculate_score = false;
	}
	log::debug!("parsed {:?} as {}", query, operation);
	Ok(args)
}

// Anything but a case-insensitive "true" is false.
fn read_bool(value: Option<&str>, default: bool) -> bool {
	value.map_or(default, |v| v.eq_ignore_ascii_case("true"))
}

fn read_number<'a>(modifiers: &mut BTreeMap<&'a str, &'a str>, key: &'static str) -> Result<'a, Option<f64>> {
	let value = match modifiers.remove(key) {
		Some(value) => value,
		None => return Ok(None),
	};
	value
		.parse()
		.map(Some)
		.map_err(|source| ArgsError::InvalidNumber { key, value, source })
}
