use rand::Rng;

use serde::{Deserialize, Serialize};

/// Added to `human_level` to get the substitution probability.
pub const SUBSTITUTION_OFFSET: f32 = 0.1;

/// Added to `human_level` to get the ending-rewrite probability.
pub const ENDING_OFFSET: f32 = 0.2;

/// Multiplied with `noise_level` to get the per-token filler probability.
pub const NOISE_SCALE: f32 = 0.05;

/// The two user-facing sliders of a humanize request.
///
/// Levels are conceptually in `[0, 1]` but are never clamped: derived
/// probabilities above 1 simply mean "always".
///
/// # Derived probabilities
/// - substitution: `human_level + 0.1`
/// - filler injection (per token): `noise_level * 0.05`
/// - ending rewrite (per sentence): `human_level + 0.2`
///
/// A `human_level` of zero or below switches substitution and endings off
/// entirely; the offsets only apply to positive levels. The resulting step
/// is deliberate: `0.0` gives probability 0 while `0.001` already gives
/// `0.101` for substitution, so zero stays a true "off" switch.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Levels {
	/// Frequency of filler-phrase injection.
	#[serde(default = "default_level")]
	pub noise_level: f32,

	/// Aggressiveness of vocabulary and ending casualization.
	#[serde(default = "default_level")]
	pub human_level: f32,
}

fn default_level() -> f32 {
	0.5
}

impl Default for Levels {
	fn default() -> Self {
		Self { noise_level: default_level(), human_level: default_level() }
	}
}

impl Levels {
	pub fn new(noise_level: f32, human_level: f32) -> Self {
		Self { noise_level, human_level }
	}

	/// Probability that a lexicon word gets replaced.
	pub fn substitution_probability(&self) -> f32 {
		Self::offset(self.human_level, SUBSTITUTION_OFFSET)
	}

	/// Probability that a filler is prepended to a token.
	pub fn noise_probability(&self) -> f32 {
		self.noise_level * NOISE_SCALE
	}

	/// Probability that a matched sentence ending gets rewritten.
	pub fn ending_probability(&self) -> f32 {
		Self::offset(self.human_level, ENDING_OFFSET)
	}

	fn offset(level: f32, offset: f32) -> f32 {
		if level > 0.0 { level + offset } else { 0.0 }
	}
}

/// Draws once and returns `true` with the given probability.
///
/// Non-positive (or NaN) probabilities never draw from `rng`, so a disabled
/// stage leaves the random stream untouched. Probabilities of 1 or more
/// always succeed.
pub(crate) fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f32) -> bool {
	if probability.is_nan() || probability <= 0.0 {
		return false;
	}
	rng.random::<f32>() < probability
}
