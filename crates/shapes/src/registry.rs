use std::collections::HashMap;

use crate::shape::{self, Shape};

struct Fun {
    arity: usize,
    handler: Box<dyn Fn(&[f64]) -> Option<Shape> + Send + Sync>,
}

/// Named shape constructors, called with untyped numeric arguments.
#[derive(Default)]
pub struct Registry {
    functions: HashMap<&'static str, Fun>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no shape named `{0}`")]
    UnknownShape(String),
    #[error("`{name}` takes {expected} argument(s) but {found} were supplied")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry knowing `circle(radius)` and `square(side_length)`.
    pub fn with_builtins() -> Self {
        Self::new()
            .register("circle", shape::circle)
            .register("square", shape::square)
    }

    pub fn register<Args, S: ShapeConstructor<Args>>(mut self, name: &'static str, s: S) -> Self {
        self.functions.insert(
            name,
            Fun {
                arity: S::ARITY,
                handler: Box::new(move |args: &[f64]| s.call(args)),
            },
        );
        self
    }

    pub fn exists(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn arity(&self, name: &str) -> Option<usize> {
        self.functions.get(name).map(|f| f.arity)
    }

    pub fn call(&self, name: &str, args: &[f64]) -> Result<Shape, RegistryError> {
        let f = self
            .functions
            .get(name)
            .ok_or_else(|| RegistryError::UnknownShape(name.to_owned()))?;
        let mismatch = || RegistryError::ArityMismatch {
            name: name.to_owned(),
            expected: f.arity,
            found: args.len(),
        };
        if args.len() != f.arity {
            return Err(mismatch());
        }
        (f.handler)(args).ok_or_else(mismatch)
    }
}

pub trait ShapeConstructor<Args = ()>: 'static + Copy + Send + Sync {
    const ARITY: usize;
    /// Returns `None` when `args` doesn't hold exactly `ARITY` values.
    fn call(&self, args: &[f64]) -> Option<Shape>;
}

macro_rules! tuple_impls {
    ( $c:expr ; $( $name:ident: $t:ty ),* ) => {
        impl<Fun> ShapeConstructor<($($t,)*)> for Fun
        where
            Fun: 'static + Copy + Send + Sync,
            Fun: Fn($($t),*) -> Shape,
        {
            const ARITY: usize = $c;
            fn call(&self, args: &[f64]) -> Option<Shape> {
                match *args {
                    [$($name),*] => Some((self)($($name,)*)),
                    _ => None,
                }
            }
        }
    };
}

tuple_impls! { 0; }
tuple_impls! { 1; a:f64 }
tuple_impls! { 2; a:f64,b:f64 }
tuple_impls! { 3; a:f64,b:f64,c:f64 }
tuple_impls! { 4; a:f64,b:f64,c:f64,d:f64 }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{circle, square};

    #[test]
    fn builtins() {
        let r = Registry::with_builtins();
        assert!(r.exists("circle"));
        assert!(r.exists("square"));
        assert!(!r.exists("triangle"));
        assert_eq!(r.arity("circle"), Some(1));
        assert_eq!(r.call("circle", &[5.0]), Ok(circle(5.0)));
        assert_eq!(r.call("square", &[10.0]), Ok(square(10.0)));
    }

    #[test]
    fn errors() {
        let r = Registry::with_builtins();
        assert_eq!(
            r.call("hexagon", &[1.0]),
            Err(RegistryError::UnknownShape("hexagon".into()))
        );
        assert_eq!(
            r.call("square", &[1.0, 2.0]),
            Err(RegistryError::ArityMismatch {
                name: "square".into(),
                expected: 1,
                found: 2,
            })
        );
    }

    #[test]
    fn arguments_keep_their_order() {
        // width is ignored, only the first argument counts
        let r = Registry::new().register("first", |a: f64, _b: f64| square(a));
        assert_eq!(r.arity("first"), Some(2));
        assert_eq!(r.call("first", &[3.0, 4.0]), Ok(square(3.0)));

        let r = Registry::new().register("unit", || circle(1.0));
        assert_eq!(r.call("unit", &[]), Ok(circle(1.0)));
    }
}
