//! Type-erased drawn values and the argument cursor laws read from.

use std::any::{type_name, Any};
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::function::{Fn1, Fn2, PureFn};
use crate::law::LawViolation;

/// Object-safe view of a drawn value.
pub trait Erased: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug> Erased for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A value produced by a generator, with its concrete type erased.
///
/// Cloning is cheap; the value itself is shared.
#[derive(Clone)]
pub struct Drawn {
    inner: Rc<dyn Erased>,
    type_name: &'static str,
}

impl Drawn {
    pub fn new<T: Any + fmt::Debug>(value: T) -> Self {
        let inner: Rc<dyn Erased> = Rc::new(value);
        Self {
            inner,
            type_name: type_name::<T>(),
        }
    }

    /// Name of the concrete type held.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        // Go through the trait object; `Rc` itself is also `Erased`.
        let inner: &dyn Erased = &*self.inner;
        inner.as_any().downcast_ref::<T>()
    }

    pub fn downcast<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }
}

impl fmt::Debug for Drawn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner: &dyn Erased = &*self.inner;
        fmt::Debug::fmt(inner, f)
    }
}

/// Drawn arguments of one law evaluation, consumed in signature order.
#[derive(Debug)]
pub struct Args {
    values: Vec<Drawn>,
    cursor: usize,
}

impl Args {
    pub fn new(values: Vec<Drawn>) -> Self {
        Self { values, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Arguments not consumed yet.
    pub fn remaining(&self) -> usize {
        self.values.len() - self.cursor
    }

    fn next_drawn(&mut self) -> Result<&Drawn, LawViolation> {
        let position = self.cursor;
        let drawn = self.values.get(position).ok_or_else(|| {
            LawViolation::Signature(format!(
                "argument #{} requested but only {} were drawn",
                position + 1,
                self.values.len()
            ))
        })?;
        self.cursor += 1;
        Ok(drawn)
    }

    /// Take the next argument as a `T`.
    pub fn next<T: Any + Clone>(&mut self) -> Result<T, LawViolation> {
        let position = self.cursor + 1;
        let drawn = self.next_drawn()?;
        drawn.downcast::<T>().ok_or_else(|| {
            LawViolation::Signature(format!(
                "argument #{} is a `{}`, expected `{}`",
                position,
                drawn.type_name(),
                type_name::<T>()
            ))
        })
    }

    /// Take the next argument as a one-argument function `A -> R`.
    pub fn function1<A, R>(&mut self) -> Result<Fn1<A, R>, LawViolation>
    where
        A: Hash + 'static,
        R: Any + Clone,
    {
        let pure: PureFn = self.next()?;
        Fn1::new(pure)
    }

    /// Take the next argument as a two-argument function `A -> B -> R`.
    pub fn function2<A, B, R>(&mut self) -> Result<Fn2<A, B, R>, LawViolation>
    where
        A: Hash + 'static,
        B: Hash + 'static,
        R: Any + Clone,
    {
        let pure: PureFn = self.next()?;
        Fn2::new(pure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn downcast_recovers_the_concrete_value() {
        let drawn = Drawn::new(Value::Int(5));
        assert!(drawn.is::<Value>());
        assert!(!drawn.is::<i64>());
        assert_eq!(drawn.downcast::<Value>(), Some(Value::Int(5)));
        assert_eq!(drawn.downcast::<i64>(), None);
    }

    #[test]
    fn debug_shows_the_inner_value() {
        let drawn = Drawn::new(Some(3_u8));
        assert_eq!(format!("{:?}", drawn), "Some(3)");
        assert!(drawn.type_name().contains("Option"));
    }

    #[test]
    fn clones_share_the_value() {
        let drawn = Drawn::new(vec![1, 2, 3]);
        let copy = drawn.clone();
        assert_eq!(copy.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn args_are_consumed_in_order() {
        let mut args = Args::new(vec![Drawn::new(1_i64), Drawn::new(true)]);
        assert_eq!(args.len(), 2);
        assert_eq!(args.next::<i64>().unwrap(), 1);
        assert_eq!(args.remaining(), 1);
        assert!(args.next::<bool>().unwrap());
        assert_eq!(args.remaining(), 0);
    }

    #[test]
    fn running_out_of_args_is_a_signature_violation() {
        let mut args = Args::new(vec![]);
        let err = args.next::<i64>().unwrap_err();
        assert!(err.to_string().contains("argument #1 requested"));
    }

    #[test]
    fn mismatched_type_names_both_sides() {
        let mut args = Args::new(vec![Drawn::new(String::from("x"))]);
        let err = args.next::<i64>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("String"), "{message}");
        assert!(message.contains("i64"), "{message}");
    }
}
