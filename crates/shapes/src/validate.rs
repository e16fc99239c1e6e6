use crate::shape::{Area, Shape, ShapeKind};

/// What to do with a shape whose attribute makes no geometric sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Compute whatever the formula gives.
    #[default]
    PassThrough,
    /// Fail on negative or non-finite attributes. Zero is a valid, degenerate shape.
    Reject,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("invalid {kind}: {attribute} must be finite and non-negative, found {value}")]
pub struct InvalidShapeError {
    pub kind: ShapeKind,
    pub attribute: &'static str,
    pub value: f64,
}

impl Shape {
    /// The name and value of the single attribute this shape carries.
    pub fn attribute(&self) -> (&'static str, f64) {
        match *self {
            Shape::Circle { radius } => ("radius", radius),
            Shape::Square { side_length } => ("sideLength", side_length),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        let (_, value) = self.attribute();
        !(value.is_finite() && value > 0.0)
    }

    pub fn validate(&self, policy: Policy) -> Result<(), InvalidShapeError> {
        match policy {
            Policy::PassThrough => Ok(()),
            Policy::Reject => {
                let (attribute, value) = self.attribute();
                if value.is_finite() && value >= 0.0 {
                    Ok(())
                } else {
                    Err(InvalidShapeError {
                        kind: self.kind(),
                        attribute,
                        value,
                    })
                }
            }
        }
    }

    pub fn checked_area(&self, policy: Policy) -> Result<f64, InvalidShapeError> {
        self.validate(policy)?;
        if warns_degenerate(self, policy) {
            log::warn!("{} is degenerate", self);
        }
        Ok(self.area())
    }
}

/// Strict callers see degenerate shapes through `validate` instead.
fn warns_degenerate(shape: &Shape, policy: Policy) -> bool {
    policy == Policy::PassThrough && shape.is_degenerate()
}
