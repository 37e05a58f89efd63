use super::{Shape, ShapeError, ShapeReader};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
	pub min_x: f64,
	pub min_y: f64,
	pub max_x: f64,
	pub max_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
	pub center: Point,
	pub radius: f64,
}

/// Shapes understood by [`SimpleShapeReader`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SimpleShape {
	Point(Point),
	Rectangle(Rectangle),
	Circle(Circle),
}

impl Shape for SimpleShape {
	fn has_area(&self) -> bool {
		match self {
			SimpleShape::Point(_) => false,
			SimpleShape::Rectangle(r) => r.max_x > r.min_x && r.max_y > r.min_y,
			SimpleShape::Circle(c) => c.radius > 0.0,
		}
	}
}

impl fmt::Display for SimpleShape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SimpleShape::Point(p) => write!(f, "POINT({} {})", p.x, p.y),
			SimpleShape::Rectangle(r) => {
				write!(f, "ENVELOPE({} {} {} {})", r.min_x, r.min_y, r.max_x, r.max_y)
			}
			SimpleShape::Circle(c) => {
				write!(f, "CIRCLE({} {} d={})", c.center.x, c.center.y, c.radius)
			}
		}
	}
}

/// Reads `POINT(x y)`, `ENVELOPE(minX minY maxX maxY)` and `CIRCLE(x y d=r)`.
///
/// Keywords are case-insensitive, coordinates may be separated by whitespace
/// or commas. Without a keyword two numbers make a point and four a rectangle.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleShapeReader;

impl ShapeReader for SimpleShapeReader {
	type Shape = SimpleShape;

	fn read_shape(&self, text: &str) -> Result<SimpleShape, ShapeError> {
		let tokens = Tokenizer::from(text).collect::<Result<Vec<_>, _>>()?;
		let mut tokens = tokens.into_iter().peekable();

		let keyword = match tokens.peek() {
			None => return Err(ShapeError::new("empty shape")),
			Some(Token::Word(word)) => {
				let word = *word;
				tokens.next();
				if tokens.next() != Some(Token::OpenParen) {
					return Err(ShapeError::new(format!("expected '(' after {}", word)));
				}
				Some(word)
			}
			Some(_) => None,
		};

		let mut coords = Vec::new();
		let mut radius = None;
		let mut closed = keyword.is_none();
		while let Some(token) = tokens.next() {
			match token {
				Token::Number(n) => coords.push(n),
				Token::Comma => {}
				Token::CloseParen if !closed => {
					closed = true;
					break;
				}
				Token::Word(name) if name.eq_ignore_ascii_case("d") => {
					match (tokens.next(), tokens.next()) {
						(Some(Token::Equals), Some(Token::Number(n))) => radius = Some(n),
						_ => return Err(ShapeError::new("expected a number after 'd='")),
					}
				}
				other => return Err(ShapeError::new(format!("unexpected {}", other))),
			}
		}
		if !closed {
			return Err(ShapeError::new("missing ')'"));
		}
		if let Some(extra) = tokens.next() {
			return Err(ShapeError::new(format!("unexpected {} after shape", extra)));
		}

		let keyword = keyword.map(|k| k.to_ascii_uppercase());
		match (keyword.as_deref(), coords.as_slice(), radius) {
			(Some("POINT") | None, &[x, y], None) => Ok(SimpleShape::Point(Point { x, y })),
			(Some("ENVELOPE") | Some("RECT") | None, &[min_x, min_y, max_x, max_y], None) => {
				if min_x > max_x || min_y > max_y {
					return Err(ShapeError::new("envelope minimum exceeds maximum"));
				}
				Ok(SimpleShape::Rectangle(Rectangle {
					min_x,
					min_y,
					max_x,
					max_y,
				}))
			}
			(Some("CIRCLE"), &[x, y], Some(radius)) | (Some("CIRCLE"), &[x, y, radius], None) => {
				if radius < 0.0 {
					return Err(ShapeError::new("circle radius must not be negative"));
				}
				Ok(SimpleShape::Circle(Circle {
					center: Point { x, y },
					radius,
				}))
			}
			(Some(k @ ("POINT" | "ENVELOPE" | "RECT" | "CIRCLE")), coords, _) => Err(ShapeError::new(
				format!("wrong number of coordinates for {}: {}", k, coords.len()),
			)),
			(Some(k), _, _) => Err(ShapeError::new(format!("unknown shape: {}", k))),
			(None, coords, _) => Err(ShapeError::new(format!(
				"expected 2 or 4 coordinates, got {}",
				coords.len()
			))),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token<'a> {
	Word(&'a str),
	Number(f64),
	OpenParen,
	CloseParen,
	Comma,
	Equals,
}

impl fmt::Display for Token<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Token::Word(w) => write!(f, "'{}'", w),
			Token::Number(n) => write!(f, "number {}", n),
			Token::OpenParen => f.write_str("'('"),
			Token::CloseParen => f.write_str("')'"),
			Token::Comma => f.write_str("','"),
			Token::Equals => f.write_str("'='"),
		}
	}
}

struct Tokenizer<'a> {
	tail: &'a str,
	position: usize,
}

impl<'a> From<&'a str> for Tokenizer<'a> {
	fn from(input: &'a str) -> Self {
		Self {
			tail: input,
			position: 0,
		}
	}
}

impl<'a> Iterator for Tokenizer<'a> {
	type Item = Result<Token<'a>, ShapeError>;

	fn next(&mut self) -> Option<Self::Item> {
		self.advance_bytes(self.try_chars(|c| c.is_whitespace()));
		let c = self.tail.chars().next()?;
		let punct = [
			('(', Token::OpenParen),
			(')', Token::CloseParen),
			(',', Token::Comma),
			('=', Token::Equals),
		];
		for (p, token) in punct {
			if c == p {
				self.advance_bytes(1);
				return Some(Ok(token));
			}
		}

		let position = self.position;
		let word = self.advance_bytes(self.try_chars(|&c| !"(),=".contains(c) && !c.is_whitespace()));
		if c.is_alphabetic() {
			return Some(Ok(Token::Word(word)));
		}
		let result = match word.parse::<f64>() {
			Ok(n) if n.is_finite() => Ok(Token::Number(n)),
			_ => Err(ShapeError::new(format!(
				"invalid coordinate '{}' at {}",
				word, position
			))),
		};
		Some(result)
	}
}

impl<'a> Tokenizer<'a> {
	fn try_chars(&self, f: impl FnMut(&char) -> bool) -> usize {
		self.tail.chars().take_while(f).map(char::len_utf8).sum()
	}

	fn advance_bytes(&mut self, count: usize) -> &'a str {
		let (word, tail) = self.tail.split_at(count);
		self.position += count;
		self.tail = tail;
		word
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn read(text: &str) -> Result<SimpleShape, ShapeError> {
		SimpleShapeReader.read_shape(text)
	}

	fn point(x: f64, y: f64) -> SimpleShape {
		SimpleShape::Point(Point { x, y })
	}

	fn rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> SimpleShape {
		SimpleShape::Rectangle(Rectangle {
			min_x,
			min_y,
			max_x,
			max_y,
		})
	}

	fn circle(x: f64, y: f64, radius: f64) -> SimpleShape {
		SimpleShape::Circle(Circle {
			center: Point { x, y },
			radius,
		})
	}

	#[test]
	fn accepted() {
		let cases = [
			("POINT(30 10)", point(30.0, 10.0)),
			("point ( -1.5 , 2e3 )", point(-1.5, 2000.0)),
			("30 10", point(30.0, 10.0)),
			("ENVELOPE(-10 -20 10 20)", rect(-10.0, -20.0, 10.0, 20.0)),
			("Rect(0,0,1,1)", rect(0.0, 0.0, 1.0, 1.0)),
			("0 0 5 0", rect(0.0, 0.0, 5.0, 0.0)),
			("CIRCLE(1 2 d=3)", circle(1.0, 2.0, 3.0)),
			("circle(1 2 3.5)", circle(1.0, 2.0, 3.5)),
			("Circle(1 2 D = 0)", circle(1.0, 2.0, 0.0)),
		];
		for (text, expected) in cases {
			assert_eq!(read(text), Ok(expected), "{}", text);
		}
	}

	#[test]
	fn rejected() {
		let cases = [
			("", "empty shape"),
			("   ", "empty shape"),
			("POINT 30 10", "expected '(' after POINT"),
			("POINT(30 10", "missing ')'"),
			("POINT(30)", "wrong number of coordinates for POINT: 1"),
			("POINT(30 10) extra", "unexpected 'extra' after shape"),
			("POLYGON(1 2)", "unknown shape: POLYGON"),
			("1 2 3", "expected 2 or 4 coordinates, got 3"),
			("1 x", "unexpected 'x'"),
			("POINT(1 2,,3x)", "invalid coordinate '3x' at 11"),
			("POINT(1 NaN)", "unexpected 'NaN'"),
			("ENVELOPE(5 0 1 1)", "envelope minimum exceeds maximum"),
			("CIRCLE(0 0 d=-1)", "circle radius must not be negative"),
			("CIRCLE(0 0 d=)", "expected a number after 'd='"),
			("1 2)", "unexpected ')'"),
		];
		for (text, message) in cases {
			assert_eq!(read(text), Err(ShapeError::new(message)), "{}", text);
		}
	}

	#[test]
	fn area() {
		let cases = [
			(point(1.0, 1.0), false),
			(rect(0.0, 0.0, 1.0, 1.0), true),
			(rect(0.0, 0.0, 1.0, 0.0), false),
			(circle(0.0, 0.0, 2.0), true),
			(circle(0.0, 0.0, 0.0), false),
		];
		for (shape, has_area) in cases {
			assert_eq!(shape.has_area(), has_area, "{}", shape);
		}
	}

	#[test]
	fn display_reads_back() {
		for shape in [point(30.0, -10.25), rect(-1.0, -2.0, 3.0, 4.0), circle(0.5, 0.0, 7.0)] {
			assert_eq!(read(&shape.to_string()), Ok(shape));
		}
	}
}
