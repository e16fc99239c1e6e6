//! Areas of tagged 2D shapes.
//!
//! ```
//! use shapes::{circle, square, Area};
//!
//! assert_eq!(circle(5.0).area(), 78.53981633974483);
//! assert_eq!(square(10.0).area(), 100.0);
//! ```

mod config;
mod registry;
pub mod script;
mod shape;
mod validate;

pub use config::*;
pub use registry::*;
pub use shape::*;
pub use validate::*;
