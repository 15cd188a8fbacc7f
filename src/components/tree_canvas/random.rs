/// Source of uniform samples in `[0, 1)` used for block placement.
pub trait Random {
	fn next_f64(&mut self) -> f64;

	/// Integer-valued sample in `[min, max]`, inclusive on both ends.
	fn random_in(&mut self, min: f64, max: f64) -> f64 {
		(self.next_f64() * (max - min + 1.0)).floor() + min
	}
}

/// Browser `Math.random`. Only usable on the wasm target.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRandom;

impl Random for BrowserRandom {
	fn next_f64(&mut self) -> f64 {
		js_sys::Math::random()
	}
}

/// Deterministic linear congruential generator, stable across runs.
#[cfg(test)]
#[derive(Clone, Debug)]
pub struct SeededRandom {
	seed: usize,
}

#[cfg(test)]
impl SeededRandom {
	pub fn new(seed: usize) -> Self {
		Self {
			seed: seed % 233280,
		}
	}
}

#[cfg(test)]
impl Random for SeededRandom {
	fn next_f64(&mut self) -> f64 {
		self.seed = (self.seed * 9301 + 49297) % 233280;
		(self.seed as f64) / 233280.0
	}
}
