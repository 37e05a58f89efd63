//! The geometry side of a query: anything that can report whether it has area,
//! and a reader turning shape text into such a value.

mod simple;

pub use simple::{Circle, Point, Rectangle, SimpleShape, SimpleShapeReader};

pub trait Shape {
	fn has_area(&self) -> bool;
}

pub trait ShapeReader {
	type Shape: Shape;

	fn read_shape(&self, text: &str) -> Result<Self::Shape, ShapeError>;
}

impl<R: ShapeReader + ?Sized> ShapeReader for &R {
	type Shape = R::Shape;

	fn read_shape(&self, text: &str) -> Result<Self::Shape, ShapeError> {
		(**self).read_shape(text)
	}
}

/// Reader failure, kept as a message so any geometry backend can produce one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ShapeError {
	pub message: String,
}

impl ShapeError {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}
