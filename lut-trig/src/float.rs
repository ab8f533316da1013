use std::any;
use std::collections::hash_map::Entry;
use std::time::Instant;

use fxhash::FxHashMap;
use num_traits::{Float, FloatConst};
use spin::{Once, RwLock};

use crate::forward::TrigLut;
use crate::inverse::InverseTrigLut;
use crate::MAX_BITS;

/// Tables of one kind, keyed by their bit width. Tables are leaked on insertion and live
/// until the process exits.
type Registry<T> = Once<RwLock<FxHashMap<u32, &'static [T]>>>;

/// The function sampled by a table.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum TableKind {
	Sin,
	Asin,
	Atan
}

impl TableKind {
	fn name(self) -> &'static str {
		match self {
			TableKind::Sin => "sin",
			TableKind::Asin => "asin",
			TableKind::Atan => "atan"
		}
	}
}

/// A floating point type that lookup tables can be built for.
///
/// Each implementing type owns its own [`TableCache`], so `f32` and `f64` tables of the
/// same resolution are built and stored independently.
pub trait LutFloat: Float + FloatConst + Send + Sync + 'static {
	/// Largest table resolution for this type. Beyond it, neighboring indices (and the bucket
	/// centers `i + 0.5`) are no longer distinct in the mantissa.
	const MAX_BITS: u32;

	/// Converts a table index (or table length) into this type.
	fn from_index(index: usize) -> Self;

	/// Converts a non-negative, integral value back into a table index.
	/// Negative values and NaN become 0.
	fn to_index(self) -> usize;

	/// Converts a constant into this type, rounding if needed.
	fn constant(value: f64) -> Self;

	/// The process-wide cache holding every table built for this type.
	fn cache() -> &'static TableCache<Self>;
}

macro_rules! lut_float {
	($t:ty, $max_bits:expr) => {
		impl LutFloat for $t {
			const MAX_BITS: u32 = $max_bits;

			#[inline]
			fn from_index(index: usize) -> Self {
				index as $t
			}

			#[inline]
			fn to_index(self) -> usize {
				self as usize
			}

			#[inline]
			fn constant(value: f64) -> Self {
				value as $t
			}

			fn cache() -> &'static TableCache<Self> {
				static CACHE: TableCache<$t> = TableCache::new();

				&CACHE
			}
		}
	};
}

lut_float!(f32, 23);
lut_float!(f64, MAX_BITS);

/// Every lookup table built for the element type `T`.
///
/// Lookups take a read lock. A missing table is built with no lock held, then inserted under
/// the write lock. Threads racing on the same missing table may each build it, but only the
/// first insert is kept; the others are dropped, so every caller sees the same fully built
/// table.
pub struct TableCache<T: 'static> {
	sin: Registry<T>,
	asin: Registry<T>,
	atan: Registry<T>,
	forward: Once<TrigLut<T>>,
	inverse: Once<InverseTrigLut<T>>
}

impl<T: 'static> TableCache<T> {
	pub const fn new() -> Self {
		TableCache {
			sin: Once::new(),
			asin: Once::new(),
			atan: Once::new(),
			forward: Once::new(),
			inverse: Once::new()
		}
	}
}

impl<T> TableCache<T> where T: LutFloat {
	/// The default resolution forward engine, used by the free functions.
	#[inline]
	pub fn forward(&self) -> &TrigLut<T> {
		self.forward.call_once(TrigLut::get)
	}

	/// The default resolution inverse engine, used by the free functions.
	#[inline]
	pub fn inverse(&self) -> &InverseTrigLut<T> {
		self.inverse.call_once(InverseTrigLut::get)
	}

	/// Returns the table of `kind` with `1 << bits` entries, building it with `build` if
	/// this is the first request for it.
	pub(crate) fn table<F>(&'static self, kind: TableKind, bits: u32, build: F) -> &'static [T]
		where F: FnOnce(usize) -> Box<[T]>
	{
		let registry = match kind {
			TableKind::Sin => &self.sin,
			TableKind::Asin => &self.asin,
			TableKind::Atan => &self.atan
		};

		let registry = registry.call_once(|| RwLock::new(FxHashMap::default()));

		let cached = registry.read().get(&bits).cloned();

		if let Some(table) = cached {
			return table;
		}

		let start = Instant::now();
		let built = build(1 << bits);
		let us = start.elapsed().as_micros() as u64;

		let mut tables = registry.write();

		let table = match tables.entry(bits) {
			// Another thread finished the same table while this one was building.
			Entry::Occupied(entry) => *entry.get(),
			Entry::Vacant(entry) => {
				let table: &'static [T] = Box::leak(built);

				tracing::debug!(
					element = any::type_name::<T>(),
					kind = kind.name(),
					bits,
					count = table.len(),
					us,
					"built lookup table"
				);

				*entry.insert(table)
			}
		};

		table
	}
}
