use std::fmt;

use crate::float::{LutFloat, TableKind};
use crate::{ATAN_MAX_RANGE, DEFAULT_BITS, MIN_INVERSE_BITS};

/// Arcsine, arccosine, and arctangent, read from an arcsine table with `1 << ASIN_BITS`
/// entries and an arctangent table with `1 << ATAN_BITS` entries.
///
/// Both tables sample their domain uniformly, endpoints included: the arcsine table covers
/// `[-1, 1]` and the arctangent table covers `[-ATAN_MAX_RANGE, ATAN_MAX_RANGE]`. Lookups
/// interpolate linearly between the two nearest entries.
///
/// Like [`TrigLut`](crate::TrigLut), this is a handle over tables shared by the whole
/// process. The two tables are cached independently, so engines that agree on one of the bit
/// widths share that table.
#[derive(Copy, Clone)]
pub struct InverseTrigLut<T: 'static, const ASIN_BITS: u32 = DEFAULT_BITS, const ATAN_BITS: u32 = DEFAULT_BITS> {
	asin: &'static [T],
	atan: &'static [T]
}

impl<T, const ASIN_BITS: u32, const ATAN_BITS: u32> InverseTrigLut<T, ASIN_BITS, ATAN_BITS> where T: LutFloat {
	const VALID: () = assert!(
		ASIN_BITS >= MIN_INVERSE_BITS && ASIN_BITS <= T::MAX_BITS && ATAN_BITS >= MIN_INVERSE_BITS && ATAN_BITS <= T::MAX_BITS,
		"inverse table resolution is below 1 bit or above the element type's MAX_BITS"
	);

	pub const ASIN_COUNT: usize = 1 << ASIN_BITS;
	pub const ASIN_MASK: usize = Self::ASIN_COUNT - 1;

	pub const ATAN_COUNT: usize = 1 << ATAN_BITS;
	pub const ATAN_MASK: usize = Self::ATAN_COUNT - 1;

	/// Returns a handle to the shared tables, building them first if needed.
	pub fn get() -> Self {
		#[allow(clippy::let_unit_value)]
		let () = Self::VALID;

		let cache = T::cache();

		InverseTrigLut {
			asin: cache.table(TableKind::Asin, ASIN_BITS, build_asin_table::<T>),
			atan: cache.table(TableKind::Atan, ATAN_BITS, build_atan_table::<T>)
		}
	}

	/// Arcsine. Inputs at or beyond ±1 return exactly ±π/2.
	#[inline]
	pub fn asin(&self, x: T) -> T {
		if x <= -T::one() {
			return -T::FRAC_PI_2();
		}

		if x >= T::one() {
			return T::FRAC_PI_2();
		}

		let position = (x + T::one()) * T::constant(0.5) * T::from_index(Self::ASIN_MASK);

		interpolate(self.asin, position)
	}

	/// Arccosine, computed as `π/2 - asin(x)`.
	#[inline]
	pub fn acos(&self, x: T) -> T {
		T::FRAC_PI_2() - self.asin(x)
	}

	/// Arctangent. Inputs beyond `±ATAN_MAX_RANGE` use `±π/2 - 1/x` instead of the table.
	#[inline]
	pub fn atan(&self, x: T) -> T {
		let range = T::constant(ATAN_MAX_RANGE);

		if x < -range {
			return -T::FRAC_PI_2() - x.recip();
		}

		if x > range {
			return T::FRAC_PI_2() - x.recip();
		}

		let normalized = (x + range) / (range + range);

		interpolate(self.atan, normalized * T::from_index(Self::ATAN_MASK))
	}

	/// The shared arcsine table.
	pub fn asin_table(&self) -> &'static [T] {
		self.asin
	}

	/// The shared arctangent table.
	pub fn atan_table(&self) -> &'static [T] {
		self.atan
	}
}

impl<T: 'static, const ASIN_BITS: u32, const ATAN_BITS: u32> fmt::Debug for InverseTrigLut<T, ASIN_BITS, ATAN_BITS> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("InverseTrigLut")
			.field("asin_bits", &ASIN_BITS)
			.field("atan_bits", &ATAN_BITS)
			.finish()
	}
}

/// Reads `table` at a fractional `position` in `[0, len - 1]`, blending the two neighboring
/// entries. The last entry is returned as is.
#[inline]
fn interpolate<T: LutFloat>(table: &[T], position: T) -> T {
	let last = table.len() - 1;
	let index = position.floor().to_index();

	if index < last {
		let frac = position - T::from_index(index);

		table[index] * (T::one() - frac) + table[index + 1] * frac
	} else {
		table[last]
	}
}

/// Maps `index` linearly onto `[-half_width, half_width]`, with index 0 at the lower end and
/// index `count - 1` at the upper end.
fn sample_point<T: LutFloat>(index: usize, count: usize, half_width: T) -> T {
	-half_width + (half_width + half_width) * T::from_index(index) / T::from_index(count - 1)
}

fn build_asin_table<T: LutFloat>(count: usize) -> Box<[T]> {
	(0..count).map(|index| sample_point(index, count, T::one()).asin()).collect()
}

fn build_atan_table<T: LutFloat>(count: usize) -> Box<[T]> {
	let range = T::constant(ATAN_MAX_RANGE);

	(0..count).map(|index| sample_point(index, count, range).atan()).collect()
}
