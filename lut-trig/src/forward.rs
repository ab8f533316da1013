use std::fmt;

use crate::error::TrigError;
use crate::float::{LutFloat, TableKind};
use crate::{DEFAULT_BITS, MIN_FORWARD_BITS};

/// Sine, cosine, and the functions derived from them, read from a single sine table with
/// `1 << BITS` entries covering one full period.
///
/// Entry `i` holds the sine of the center of its bucket, `(i + 0.5) / count * 2π`, except for
/// the entries at 0°, 90°, 180°, and 270°, which hold their exact values. Lookups quantize the
/// angle and never interpolate.
///
/// A `TrigLut` is a cheap handle: every handle with the same `T` and `BITS` reads the same
/// table, which is built the first time [`TrigLut::get`] is called for that combination.
#[derive(Copy, Clone)]
pub struct TrigLut<T: 'static, const BITS: u32 = DEFAULT_BITS> {
	sin: &'static [T]
}

impl<T, const BITS: u32> TrigLut<T, BITS> where T: LutFloat {
	const VALID: () = assert!(
		BITS >= MIN_FORWARD_BITS && BITS <= T::MAX_BITS,
		"sine table resolution is below 2 bits or above the element type's MAX_BITS"
	);

	pub const SIN_COUNT: usize = 1 << BITS;
	pub const SIN_MASK: usize = Self::SIN_COUNT - 1;

	/// Returns a handle to the shared sine table, building it first if needed.
	pub fn get() -> Self {
		#[allow(clippy::let_unit_value)]
		let () = Self::VALID;

		TrigLut { sin: T::cache().table(TableKind::Sin, BITS, Self::build) }
	}

	/// Number of table indices per radian.
	#[inline]
	pub fn radian_to_index() -> T {
		T::from_index(Self::SIN_COUNT) / T::TAU()
	}

	/// Number of table indices per degree.
	#[inline]
	pub fn degree_to_index() -> T {
		T::from_index(Self::SIN_COUNT) / T::from_index(360)
	}

	/// Table index of an angle in degrees, truncated toward zero.
	#[inline]
	pub fn degree_index(degrees: usize) -> usize {
		(T::from_index(degrees) * Self::degree_to_index()).to_index() & Self::SIN_MASK
	}

	/// Quantizes an angle into a table index.
	///
	/// The angle is truncated toward zero, then wrapped into `[0, count)` with a Euclidean
	/// modulo on the float value so that any finite magnitude maps into the table.
	#[inline]
	pub fn index_of(radians: T) -> usize {
		let count = T::from_index(Self::SIN_COUNT);
		let mut index = (radians * Self::radian_to_index()).trunc() % count;

		if index < T::zero() {
			index = index + count;
		}

		// The addition above rounds up to `count` when `count` exceeds the mantissa.
		index.to_index() & Self::SIN_MASK
	}

	/// Sine of an angle in radians. NaN and infinite angles return NaN.
	#[inline]
	pub fn sin(&self, radians: T) -> T {
		if !radians.is_finite() {
			return T::nan();
		}

		self.sin[Self::index_of(radians)]
	}

	/// Cosine of an angle in radians, computed as `sin(x + π/2)` on the same table.
	#[inline]
	pub fn cos(&self, radians: T) -> T {
		self.sin(radians + T::FRAC_PI_2())
	}

	/// Tangent of an angle in radians. Angles whose cosine quantizes to zero return an
	/// infinity.
	#[inline]
	pub fn tan(&self, radians: T) -> T {
		self.sin(radians) / self.cos(radians)
	}

	#[inline]
	pub fn csc(&self, radians: T) -> T {
		T::one() / self.sin(radians)
	}

	#[inline]
	pub fn sec(&self, radians: T) -> T {
		T::one() / self.cos(radians)
	}

	#[inline]
	pub fn cot(&self, radians: T) -> T {
		self.cos(radians) / self.sin(radians)
	}

	/// Like [`TrigLut::sin`], but rejects NaN and infinite angles.
	pub fn checked_sin(&self, radians: T) -> Result<T, TrigError> {
		TrigError::finite(radians).map(|radians| self.sin(radians))
	}

	pub fn checked_cos(&self, radians: T) -> Result<T, TrigError> {
		TrigError::finite(radians).map(|radians| self.cos(radians))
	}

	pub fn checked_tan(&self, radians: T) -> Result<T, TrigError> {
		TrigError::finite(radians).map(|radians| self.tan(radians))
	}

	/// Number of entries in the sine table.
	pub fn len(&self) -> usize {
		self.sin.len()
	}

	/// The shared sine table.
	pub fn table(&self) -> &'static [T] {
		self.sin
	}

	/// Samples one period of sine at the center of each of `count` buckets, then pins the four
	/// cardinal angles to their exact values.
	fn build(count: usize) -> Box<[T]> {
		let half = T::constant(0.5);
		let slices = T::from_index(count);

		let mut table: Vec<T> = (0..count)
			.map(|index| ((T::from_index(index) + half) / slices * T::TAU()).sin())
			.collect();

		// With at least 2 bits, these four indices are distinct.
		table[Self::degree_index(0)] = T::zero();
		table[Self::degree_index(90)] = T::one();
		table[Self::degree_index(180)] = T::zero();
		table[Self::degree_index(270)] = -T::one();

		table.into_boxed_slice()
	}
}

impl<T: 'static, const BITS: u32> fmt::Debug for TrigLut<T, BITS> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("TrigLut").field("bits", &BITS).field("len", &self.sin.len()).finish()
	}
}
