use std::f32::consts::{FRAC_PI_2, PI};
use std::io::{self, Write};
use std::ptr;
use std::sync::{Arc, Mutex};
use std::thread;

use crate::{InverseTrigLut, LutFloat, TrigLut};

#[test]
fn test_free_functions() {
	assert_eq!(crate::sin(0.0f32), 0.0);
	assert_eq!(crate::sin(FRAC_PI_2), 1.0);
	assert!(crate::sin(PI).abs() <= std::f32::consts::TAU / 65536.0);
	assert_eq!(crate::cos(0.0f64), 1.0);

	assert_eq!(crate::asin(-1.5f32), -FRAC_PI_2);
	assert!(crate::asin(0.0f32).abs() < 1.0e-4);
	assert_eq!(crate::asin(1.5f32), FRAC_PI_2);
	assert!((crate::acos(0.0f64) - std::f64::consts::FRAC_PI_2).abs() < 1.0e-9);
	assert!((crate::atan(1000.0f32) - (FRAC_PI_2 - 0.001)).abs() < 1.0e-6);
	assert!((crate::atan(1.0f64) - std::f64::consts::FRAC_PI_4).abs() < 1.0e-5);
}

#[test]
fn test_free_functions_forward() {
	let forward = TrigLut::<f64>::get();
	let inverse = InverseTrigLut::<f64>::get();

	for step in -300..300 {
		let x = (step as f64) * 0.0123;

		assert_eq!(crate::sin(x), forward.sin(x));
		assert_eq!(crate::cos(x), forward.cos(x));
		assert_eq!(crate::tan(x), forward.tan(x));
		assert_eq!(crate::csc(x), forward.csc(x));
		assert_eq!(crate::sec(x), forward.sec(x));
		assert_eq!(crate::cot(x), forward.cot(x));
		assert_eq!(crate::asin(x), inverse.asin(x));
		assert_eq!(crate::acos(x), inverse.acos(x));
		assert_eq!(crate::atan(x), inverse.atan(x));
	}
}

#[test]
fn test_shared_tables() {
	let a = TrigLut::<f32, 11>::get();
	let b = TrigLut::<f32, 11>::get();

	assert!(ptr::eq(a.table(), b.table()));
	assert!(ptr::eq(TrigLut::<f32>::get().table(), <f32 as LutFloat>::cache().forward().table()));

	// The arcsine table is shared even though the arctangent resolutions differ.
	let c = InverseTrigLut::<f64, 9, 5>::get();
	let d = InverseTrigLut::<f64, 9, 7>::get();

	assert!(ptr::eq(c.asin_table(), d.asin_table()));
	assert_eq!(c.atan_table().len(), 32);
	assert_eq!(d.atan_table().len(), 128);
}

#[test]
fn test_independent_element_types() {
	let single = TrigLut::<f32, 13>::get();
	let double = TrigLut::<f64, 13>::get();

	assert_eq!(single.len(), double.len());

	for (index, (&s, &d)) in single.table().iter().zip(double.table()).enumerate() {
		if (s as f64 - d).abs() > 1.0e-6 {
			panic!("test_independent_element_types: mismatch @ index {}: {} (f32) != {} (f64)", index, s, d);
		}
	}
}

#[test]
fn test_concurrent_first_use() {
	let handles: Vec<_> = (0..8)
		.map(|_| thread::spawn(|| {
			let forward = TrigLut::<f64, 17>::get();
			let inverse = InverseTrigLut::<f32, 17, 17>::get();

			(forward.table().as_ptr() as usize, inverse.atan_table().as_ptr() as usize, forward.sin(1.0))
		}))
		.collect();

	let results: Vec<_> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();

	for result in &results[1..] {
		assert_eq!(result, &results[0]);
	}
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().unwrap().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

#[test]
fn test_build_logs_once() {
	let captured = Captured::default();
	let writer = captured.clone();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(tracing::Level::DEBUG)
		.with_ansi(false)
		.with_writer(move || writer.clone())
		.finish();

	tracing::subscriber::with_default(subscriber, || {
		TrigLut::<f32, 5>::get();
		TrigLut::<f32, 5>::get();
	});

	let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();

	assert_eq!(output.matches("built lookup table").count(), 1, "{}", output);
	assert!(output.contains("bits=5"), "{}", output);
	assert!(output.contains("count=32"), "{}", output);
	assert!(output.contains("sin"), "{}", output);
	assert!(output.contains("f32"), "{}", output);
}
