use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named spatial predicate.
///
/// The set is closed; each variant carries fixed capability flags, see [`Operation::flags`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
	BBoxIntersects,
	BBoxWithin,
	Contains,
	Intersects,
	IsEqualTo,
	IsDisjointTo,
	IsWithin,
	Overlaps,
	SimilarTo,
	Distance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flags {
	pub score_is_meaningful: bool,
	pub source_needs_area: bool,
	pub target_needs_area: bool,
}

const fn flags(score_is_meaningful: bool, source_needs_area: bool, target_needs_area: bool) -> Flags {
	Flags {
		score_is_meaningful,
		source_needs_area,
		target_needs_area,
	}
}

impl Operation {
	pub const ALL: [Operation; 10] = [
		Operation::BBoxIntersects,
		Operation::BBoxWithin,
		Operation::Contains,
		Operation::Intersects,
		Operation::IsEqualTo,
		Operation::IsDisjointTo,
		Operation::IsWithin,
		Operation::Overlaps,
		Operation::SimilarTo,
		Operation::Distance,
	];

	/// Exact, case-sensitive lookup.
	pub fn by_name(name: &str) -> Option<Operation> {
		Self::ALL.into_iter().find(|op| op.name() == name)
	}

	pub fn name(self) -> &'static str {
		match self {
			Operation::BBoxIntersects => "BBoxIntersects",
			Operation::BBoxWithin => "BBoxWithin",
			Operation::Contains => "Contains",
			Operation::Intersects => "Intersects",
			Operation::IsEqualTo => "IsEqualTo",
			Operation::IsDisjointTo => "IsDisjointTo",
			Operation::IsWithin => "IsWithin",
			Operation::Overlaps => "Overlaps",
			Operation::SimilarTo => "SimilarTo",
			Operation::Distance => "Distance",
		}
	}

	pub fn flags(self) -> Flags {
		match self {
			Operation::BBoxIntersects => flags(true, false, false),
			Operation::BBoxWithin => flags(true, false, false),
			Operation::Contains => flags(true, true, false),
			Operation::Intersects => flags(true, false, false),
			Operation::IsEqualTo => flags(false, false, false),
			Operation::IsDisjointTo => flags(false, false, false),
			Operation::IsWithin => flags(true, false, true),
			Operation::Overlaps => flags(true, false, true),
			Operation::SimilarTo => flags(true, false, false),
			Operation::Distance => flags(true, false, false),
		}
	}

	pub fn score_is_meaningful(self) -> bool {
		self.flags().score_is_meaningful
	}

	pub fn source_needs_area(self) -> bool {
		self.flags().source_needs_area
	}

	pub fn target_needs_area(self) -> bool {
		self.flags().target_needs_area
	}
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
	type Err = UnknownOperation;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Operation::by_name(s).ok_or_else(|| UnknownOperation(s.to_owned()))
	}
}

impl fmt::Display for Operation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
