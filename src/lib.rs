//! Parsing of spatial query arguments such as
//! `Intersects(POINT(30 10)) cache=false min=5`.
//!
//! The operation comes from the closed [`Operation`] set, the shape body is
//! handed to a [`ShapeReader`](shape::ShapeReader) and trailing `key=value`
//! modifiers tune caching, scoring and distance bounds.

mod args;
mod operation;
pub mod shape;

pub use args::{parse, parse_map, ArgsError, InvalidArgs, Result, SpatialArgs};
pub use operation::{Flags, Operation, UnknownOperation};

#[cfg(test)]
mod tests;
