//! Element bound for vectors and matrices.
//!
//! Matrices in practice are mostly zeros, so the element type only has to say
//! what zero and one are and how two values order. `num-traits` already
//! provides both for every primitive numeric type.

use std::fmt::Debug;

use num_traits::Num;

/// Numeric element stored in a [`Vector`](crate::Vector) or [`Matrix`](crate::Matrix).
///
/// Blanket-implemented for every `Num + Copy + Default + PartialOrd + Debug`
/// type, so `f64`, `f32` and the integer primitives all qualify. `Default`
/// must agree with `Zero`: the default is what sparse storage elides.
pub trait Scalar: Num + Copy + Default + PartialOrd + Debug + Send + Sync + 'static {}

impl<T> Scalar for T where T: Num + Copy + Default + PartialOrd + Debug + Send + Sync + 'static {}
