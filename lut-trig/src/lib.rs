//! # `lut-trig`: lookup table trigonometry
//!
//! Approximate trigonometric functions that read precomputed tables instead of evaluating
//! the exact functions on every call. Two engines are provided:
//!
//!  * [`TrigLut`] answers sin, cos, tan, csc, sec, and cot from one bucket-centered sine
//!    table. Angles are quantized to a table index, never interpolated.
//!  * [`InverseTrigLut`] answers asin, acos, and atan from an arcsine table and an arctangent
//!    table, interpolating linearly between neighboring entries.
//!
//! The element type and the table resolutions are generic parameters. Each distinct
//! combination gets its own table, built with the exact functions the first time it is
//! requested and then shared read-only by every thread for the rest of the process.
//!
//! The free functions in this crate use the default resolution of 16 bits:
//!
//! ```
//! use std::f32::consts::FRAC_PI_2;
//!
//! assert_eq!(lut_trig::sin(FRAC_PI_2), 1.0);
//! assert_eq!(lut_trig::asin(1.5f64), std::f64::consts::FRAC_PI_2);
//! ```
//!
//! Results are approximations. Error shrinks as the resolution grows, and the derived
//! functions return infinities where the table value they divide by is exactly zero.

#[cfg(test)]
mod test;

mod error;
mod float;
mod forward;
mod inverse;

pub use error::TrigError;
pub use float::{LutFloat, TableCache};
pub use forward::TrigLut;
pub use inverse::InverseTrigLut;

/// Resolution of the tables behind the free functions.
pub const DEFAULT_BITS: u32 = 16;

/// Smallest sine table resolution. At 2 bits and above, the indices of 0°, 90°, 180°, and
/// 270° are distinct, so each keeps its exact value.
pub const MIN_FORWARD_BITS: u32 = 2;

/// Smallest inverse table resolution: 2 entries, one interpolation step.
pub const MIN_INVERSE_BITS: u32 = 1;

/// Largest resolution of any table. Each element type may cap lower through
/// [`LutFloat::MAX_BITS`]: `f32` stops at 23 bits, where `i + 0.5` still fits the mantissa.
pub const MAX_BITS: u32 = 30;

/// Half-width of the domain covered by the arctangent table. Larger inputs use an asymptotic
/// approximation.
pub const ATAN_MAX_RANGE: f64 = 100.0;

#[inline]
pub fn sin<T: LutFloat>(radians: T) -> T {
	T::cache().forward().sin(radians)
}

#[inline]
pub fn cos<T: LutFloat>(radians: T) -> T {
	T::cache().forward().cos(radians)
}

#[inline]
pub fn tan<T: LutFloat>(radians: T) -> T {
	T::cache().forward().tan(radians)
}

#[inline]
pub fn csc<T: LutFloat>(radians: T) -> T {
	T::cache().forward().csc(radians)
}

#[inline]
pub fn sec<T: LutFloat>(radians: T) -> T {
	T::cache().forward().sec(radians)
}

#[inline]
pub fn cot<T: LutFloat>(radians: T) -> T {
	T::cache().forward().cot(radians)
}

#[inline]
pub fn asin<T: LutFloat>(x: T) -> T {
	T::cache().inverse().asin(x)
}

#[inline]
pub fn acos<T: LutFloat>(x: T) -> T {
	T::cache().inverse().acos(x)
}

#[inline]
pub fn atan<T: LutFloat>(x: T) -> T {
	T::cache().inverse().atan(x)
}
