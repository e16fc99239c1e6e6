use core::fmt;
use core::str::FromStr;
use std::f64::consts::PI;

use serde_derive::{Deserialize, Serialize};

pub trait Area {
    fn area(&self) -> f64;
}

/// The discriminant of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Circle, ShapeKind::Square];

    pub const fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown shape kind `{0}`")]
pub struct UnknownKind(pub String);

impl FromStr for ShapeKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_owned()))
    }
}

/// A 2D shape, tagged by its [`ShapeKind`].
///
/// The serialized form carries the tag in a `kind` field:
/// `{ kind = "circle", radius = 5 }` or `{ kind = "square", sideLength = 10 }`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
pub enum Shape {
    Circle {
        radius: f64,
    },
    Square {
        #[serde(rename = "sideLength", alias = "side_length")]
        side_length: f64,
    },
}

pub fn circle(radius: f64) -> Shape {
    Shape::Circle { radius }
}

pub fn square(side_length: f64) -> Shape {
    Shape::Square { side_length }
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Square { .. } => ShapeKind::Square,
        }
    }
}

impl Area for Shape {
    // no wildcard arm: a new variant must bring its own formula
    #[inline]
    fn area(&self) -> f64 {
        match *self {
            Shape::Circle { radius } => PI * radius.powi(2),
            Shape::Square { side_length } => side_length.powi(2),
        }
    }
}

pub fn area(shape: &Shape) -> f64 {
    shape.area()
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle { radius } => write!(f, "circle({radius})"),
            Shape::Square { side_length } => write!(f, "square({side_length})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_areas() {
        assert_eq!(area(&circle(5.0)), 78.53981633974483);
        assert_eq!(area(&square(10.0)), 100.0);
        assert_eq!(area(&circle(0.0)), 0.0);
        assert_eq!(area(&square(1.0)), 1.0);
    }

    #[test]
    fn circle_is_pi_r_squared() {
        for r in [0.0, 0.5, 1.0, 2.25, 7.0, 1e3] {
            let expected = PI * r * r;
            assert!((circle(r).area() - expected).abs() <= 1e-9 * expected.max(1.0));
        }
    }

    #[test]
    fn idempotent() {
        let s = square(3.5);
        assert_eq!(s.area(), s.area());
        assert_eq!(s.area(), 12.25);
    }

    #[test]
    fn kinds() {
        assert_eq!(circle(1.0).kind(), ShapeKind::Circle);
        assert_eq!(square(1.0).kind(), ShapeKind::Square);
        assert_eq!("circle".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
        assert_eq!("square".parse::<ShapeKind>(), Ok(ShapeKind::Square));
        assert_eq!(
            "Circle".parse::<ShapeKind>(),
            Err(UnknownKind("Circle".into()))
        );
        assert_eq!(ShapeKind::Square.to_string(), "square");
    }

    #[test]
    fn display() {
        assert_eq!(circle(5.0).to_string(), "circle(5)");
        assert_eq!(square(2.5).to_string(), "square(2.5)");
    }
}
