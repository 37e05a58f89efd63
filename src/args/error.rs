use crate::operation::Operation;
use crate::shape::ShapeError;
use std::num::ParseFloatError;

pub type Result<'a, T> = std::result::Result<T, ArgsError<'a>>;

/// Why a query string could not be turned into [`SpatialArgs`](super::SpatialArgs).
///
/// Variants borrow the offending part of the query.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError<'a> {
	#[error("missing parens: {query}")]
	MalformedSyntax { query: &'a str },

	#[error("unknown operation: {name}")]
	UnknownOperation { name: &'a str },

	#[error("missing body: {query}")]
	MissingBody { query: &'a str },

	#[error("invalid shape: {0}")]
	InvalidShape(#[from] ShapeError),

	#[error("invalid number for {key}: {value}")]
	InvalidNumber {
		key: &'static str,
		value: &'a str,
		source: ParseFloatError,
	},

	#[error("unused parameters: {}", .keys.join(", "))]
	UnknownParameters { keys: Vec<&'a str> },
}

/// Raised by [`SpatialArgs::validate`](super::SpatialArgs::validate).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{operation} only supports geometry with area")]
pub struct InvalidArgs {
	pub operation: Operation,
}
