mod error;
mod modifiers;
mod parser;


pub use error::{ArgsError, InvalidArgs, Result};
pub use modifiers::parse_map;
pub use parser::parse;

use crate::operation::Operation;
use crate::shape::{Shape, ShapeReader};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated arguments of a spatial query: what to test, against which shape, and how.
///
/// Construction does not check the shape against the operation, call
/// [`SpatialArgs::validate`] for that.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
	from = "Stored<S>",
	bound(deserialize = "S: Deserialize<'de>", serialize = "S: Serialize")
)]
pub struct SpatialArgs<S> {
	operation: Operation,
	shape: S,
	cacheable: bool,
	calculate_score: bool,
	min: Option<f64>,
	max: Option<f64>,
}

impl<S> SpatialArgs<S> {
	pub fn new(operation: Operation, shape: S) -> Self {
		Self {
			operation,
			shape,
			cacheable: true,
			calculate_score: operation.score_is_meaningful(),
			min: None,
			max: None,
		}
	}

	pub fn with_cacheable(mut self, cacheable: bool) -> Self {
		self.cacheable = cacheable;
		self
	}

	/// Has no effect for operations whose score is meaningless.
	pub fn with_calculate_score(mut self, calculate_score: bool) -> Self {
		self.calculate_score = calculate_score && self.operation.score_is_meaningful();
		self
	}

	pub fn with_min(mut self, min: Option<f64>) -> Self {
		self.min = min;
		self
	}

	pub fn with_max(mut self, max: Option<f64>) -> Self {
		self.max = max;
		self
	}

	pub fn operation(&self) -> Operation {
		self.operation
	}

	pub fn shape(&self) -> &S {
		&self.shape
	}

	pub fn into_shape(self) -> S {
		self.shape
	}

	pub fn is_cacheable(&self) -> bool {
		self.cacheable
	}

	pub fn calculate_score(&self) -> bool {
		self.calculate_score
	}

	pub fn min(&self) -> Option<f64> {
		self.min
	}

	pub fn max(&self) -> Option<f64> {
		self.max
	}
}

impl<S: Shape> SpatialArgs<S> {
	pub fn parse<'a, R>(query: &'a str, reader: &R) -> Result<'a, Self>
	where
		R: ShapeReader<Shape = S> + ?Sized,
	{
		parse(query, reader)
	}

	/// Checks that an operation requiring an area-bearing target got one.
	pub fn validate(&self) -> std::result::Result<(), InvalidArgs> {
		if self.operation.target_needs_area() && !self.shape.has_area() {
			return Err(InvalidArgs {
				operation: self.operation,
			});
		}
		Ok(())
	}
}

/// Prints the query form accepted by [`parse`], listing only non-default modifiers.
impl<S: fmt::Display> fmt::Display for SpatialArgs<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}({})", self.operation, self.shape)?;
		if !self.cacheable {
			f.write_str(" cache=false")?;
		}
		if !self.calculate_score && self.operation.score_is_meaningful() {
			f.write_str(" score=false")?;
		}
		if let Some(min) = self.min {
			write!(f, " min={}", min)?;
		}
		if let Some(max) = self.max {
			write!(f, " max={}", max)?;
		}
		Ok(())
	}
}

#[derive(Deserialize)]
struct Stored<S> {
	operation: Operation,
	shape: S,
	cacheable: bool,
	calculate_score: bool,
	min: Option<f64>,
	max: Option<f64>,
}

impl<S> From<Stored<S>> for SpatialArgs<S> {
	fn from(stored: Stored<S>) -> Self {
		SpatialArgs::new(stored.operation, stored.shape)
			.with_cacheable(stored.cacheable)
			.with_calculate_score(stored.calculate_score)
			.with_min(stored.min)
			.with_max(stored.max)
	}
}
