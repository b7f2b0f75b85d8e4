//! Pure function values drawn for function-typed law parameters.
//!
//! A drawn function is a seed plus a generator for its return type. Calling
//! it hashes the seed together with the arguments, seeds a fresh RNG with
//! that hash and draws one return value. The same arguments always produce
//! the same result and a call touches nothing outside its own runner.

use std::any::{type_name, Any};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::rc::Rc;

use proptest::strategy::{BoxedStrategy, Strategy, ValueTree};
use proptest::test_runner::{Config, RngAlgorithm, TestRng, TestRunner};

use crate::drawn::Drawn;
use crate::law::LawViolation;

/// An arity-checked, referentially transparent function with erased types.
#[derive(Clone)]
pub struct PureFn {
    seed: u64,
    arity: usize,
    returns: BoxedStrategy<Drawn>,
    signature: Rc<str>,
}

impl PureFn {
    pub fn new(
        seed: u64,
        arity: usize,
        returns: BoxedStrategy<Drawn>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            seed,
            arity,
            returns,
            signature: Rc::from(signature.into()),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Fingerprint of one argument list, mixed with this function's seed.
    pub fn fingerprint<T: Hash + ?Sized>(&self, args: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        args.hash(&mut hasher);
        hasher.finish()
    }

    /// The value this function returns for arguments with `fingerprint`.
    pub fn output(&self, fingerprint: u64) -> Result<Drawn, LawViolation> {
        let mut runner = TestRunner::new_with_rng(Config::default(), rng_for(fingerprint));
        self.returns
            .new_tree(&mut runner)
            .map(|tree| tree.current())
            .map_err(|reason| {
                LawViolation::Failed(format!(
                    "function `{}` could not produce a value: {}",
                    self.signature, reason
                ))
            })
    }

    fn expect_arity(&self, arity: usize) -> Result<(), LawViolation> {
        if self.arity == arity {
            Ok(())
        } else {
            Err(LawViolation::Signature(format!(
                "function `{}` takes {} argument(s), used with {}",
                self.signature, self.arity, arity
            )))
        }
    }

    fn expect_returns<R: Any>(&self) -> Result<(), LawViolation> {
        let sample = self.output(0)?;
        if sample.is::<R>() {
            Ok(())
        } else {
            Err(LawViolation::Signature(format!(
                "function `{}` returns `{}`, expected `{}`",
                self.signature,
                sample.type_name(),
                type_name::<R>()
            )))
        }
    }

    fn typed_output<R: Any + Clone>(&self, fingerprint: u64) -> Result<R, LawViolation> {
        let drawn = self.output(fingerprint)?;
        drawn.downcast::<R>().ok_or_else(|| {
            LawViolation::Signature(format!(
                "function `{}` returned `{}`, expected `{}`",
                self.signature,
                drawn.type_name(),
                type_name::<R>()
            ))
        })
    }
}

impl fmt::Debug for PureFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<pure {} #{:016x}>", self.signature, self.seed)
    }
}

fn rng_for(fingerprint: u64) -> TestRng {
    let mut bytes = [0_u8; 32];
    let mut state = fingerprint;
    for chunk in bytes.chunks_exact_mut(8) {
        state = splitmix64(state);
        chunk.copy_from_slice(&state.to_le_bytes());
    }
    TestRng::from_seed(RngAlgorithm::ChaCha, &bytes)
}

fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Typed view of a drawn one-argument function `A -> R`.
pub struct Fn1<A, R> {
    inner: PureFn,
    _marker: PhantomData<fn(&A) -> R>,
}

impl<A, R> Fn1<A, R>
where
    A: Hash + 'static,
    R: Any + Clone,
{
    /// Check arity and return type, then wrap.
    pub fn new(inner: PureFn) -> Result<Self, LawViolation> {
        inner.expect_arity(1)?;
        inner.expect_returns::<R>()?;
        Ok(Self {
            inner,
            _marker: PhantomData,
        })
    }

    pub fn try_call(&self, a: &A) -> Result<R, LawViolation> {
        self.inner.typed_output(self.inner.fingerprint(a))
    }

    /// Apply the function.
    ///
    /// # Panics
    ///
    /// If the return generator stops producing values, which the property
    /// engine then reports as a failure of the law being checked.
    pub fn call(&self, a: &A) -> R {
        self.try_call(a).unwrap_or_else(|violation| panic!("{}", violation))
    }

    pub fn as_pure(&self) -> &PureFn {
        &self.inner
    }
}

impl<A, R> Clone for Fn1<A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<A, R> fmt::Debug for Fn1<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

/// Typed view of a drawn two-argument function `A -> B -> R`.
pub struct Fn2<A, B, R> {
    inner: PureFn,
    _marker: PhantomData<fn(&A, &B) -> R>,
}

impl<A, B, R> Fn2<A, B, R>
where
    A: Hash + 'static,
    B: Hash + 'static,
    R: Any + Clone,
{
    pub fn new(inner: PureFn) -> Result<Self, LawViolation> {
        inner.expect_arity(2)?;
        inner.expect_returns::<R>()?;
        Ok(Self {
            inner,
            _marker: PhantomData,
        })
    }

    pub fn try_call(&self, a: &A, b: &B) -> Result<R, LawViolation> {
        self.inner.typed_output(self.inner.fingerprint(&(a, b)))
    }

    /// Apply the function.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Fn1::call`].
    pub fn call(&self, a: &A, b: &B) -> R {
        self.try_call(a, b)
            .unwrap_or_else(|violation| panic!("{}", violation))
    }

    pub fn as_pure(&self) -> &PureFn {
        &self.inner
    }
}

impl<A, B, R> Clone for Fn2<A, B, R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<A, B, R> fmt::Debug for Fn2<A, B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}
