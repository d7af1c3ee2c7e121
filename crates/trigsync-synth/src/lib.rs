//! Synthetic trigger and measurement signal generation
//!
//! Produces the same shapes of data a real acquisition would: a TTL square
//! wave (optionally jittered or frequency-swept) and a multi-channel voltage
//! stream sampled at a much higher rate. Used by tests and benchmarks; the
//! analysis crates never depend on this one.
//!
//! Generation modes are explicit enum parameters rather than module-level
//! switches, so a caller always states which behavior it wants.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use trigsync_core::{Channel, MeasurementSignal, TriggerSample};

/// Trigger timing behavior
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerProfile {
    /// Perfectly periodic square wave at the given frequency (Hz)
    Uniform { frequency: f64 },
    /// Nominal frequency with Gaussian jitter on each period length
    Jittered { frequency: f64, jitter_std: f64 },
    /// Each period drawn uniformly from the `[f_min, f_max]` frequency band
    Swept { f_min: f64, f_max: f64 },
}

/// Measurement value behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementMode {
    /// One random voltage per trigger interval, held constant across all
    /// samples in it, so per-interval spread collapses to 0
    ConstantPerInterval,
    /// Independent random voltage at every sampling instant
    Noise,
}

const V_MAX: f64 = 5.0;

/// Generate a 0/1 square wave covering `duration` seconds
///
/// The line starts low at t = 0 and toggles every half period, so every full
/// period contributes exactly one rising edge.
pub fn generate_trigger<R: Rng>(
    profile: TriggerProfile,
    duration: f64,
    rng: &mut R,
) -> Vec<TriggerSample> {
    let mut samples = Vec::new();
    let mut t = 0.0;
    let mut level = 0u8;
    while t < duration {
        samples.push(TriggerSample::new(t, level));
        level = 1 - level;
        t += half_period(profile, rng);
    }
    samples
}

fn half_period<R: Rng>(profile: TriggerProfile, rng: &mut R) -> f64 {
    match profile {
        TriggerProfile::Uniform { frequency } => 1.0 / (2.0 * frequency),
        TriggerProfile::Jittered {
            frequency,
            jitter_std,
        } => {
            let nominal = 1.0 / frequency;
            let normal =
                Normal::new(nominal, jitter_std).expect("jitter_std must be non-negative and finite");
            // A draw at or below zero would move time backwards
            let period = normal.sample(rng).max(nominal / 100.0);
            period / 2.0
        }
        TriggerProfile::Swept { f_min, f_max } => {
            let freq = rng.gen_range(f_min..f_max);
            1.0 / (2.0 * freq)
        }
    }
}

/// Generate a measurement stream aligned to the given rising edges
///
/// Each interval `[edges[i], edges[i+1])` is filled with
/// `floor((end - start) * sample_rate)` evenly spaced samples, end exclusive.
/// Intervals too short to hold a single sample are left empty, which is how
/// gap scenarios are produced deliberately. Channels are named `ch1..chN`
/// and carry uniform voltages in `[0, 5)`.
pub fn generate_measurement<R: Rng>(
    edges: &[f64],
    sample_rate: f64,
    num_channels: usize,
    mode: MeasurementMode,
    rng: &mut R,
) -> MeasurementSignal {
    let mut timestamps = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); num_channels];

    for pair in edges.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let n_samples = ((end - start) * sample_rate) as usize;
        if n_samples == 0 {
            continue;
        }
        let step = (end - start) / n_samples as f64;
        for k in 0..n_samples {
            timestamps.push(start + k as f64 * step);
        }
        for column in columns.iter_mut() {
            match mode {
                MeasurementMode::ConstantPerInterval => {
                    let value = rng.gen_range(0.0..V_MAX);
                    column.extend(std::iter::repeat(value).take(n_samples));
                }
                MeasurementMode::Noise => {
                    column.extend((0..n_samples).map(|_| rng.gen_range(0.0..V_MAX)));
                }
            }
        }
    }

    let channels = columns
        .into_iter()
        .enumerate()
        .map(|(i, values)| Channel::new(format!("ch{}", i + 1), values))
        .collect();
    MeasurementSignal::new(timestamps, channels)
}
