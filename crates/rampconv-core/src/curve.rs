//! Keyframed scalar curves and four-channel colour curve sets.
//!
//! A [`CurveSet`] holds one [`FloatCurve`] per RGBA channel. Keys are
//! appended in time order by the converter, so no sorting is done here.
//!
//! # Evaluation
//! Consumers decide how to interpolate. [`FloatCurve::evaluate`] offers
//! piecewise-linear interpolation for previews and baking:
//! ```text
//! v(t) = v0 + (v1 - v0) × (t - t0) / (t1 - t0)
//! ```
//! Times outside the key range clamp to the first/last key's value.
//!
//! # Complexity
//! - Append: amortised O(1)
//! - Evaluate: O(log N) binary search + O(1) interpolation
//! - Bake: O(size × log N)

use serde::{Deserialize, Serialize};

use crate::color_management::LinearColor;

/// One sample point on a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

/// Identifies one of the four curves in a [`CurveSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Alpha => 3,
        }
    }
}

/// A scalar curve made of keyframes in ascending time order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloatCurve {
    keys: Vec<Keyframe>,
}

impl FloatCurve {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
        }
    }

    /// Append a key. Callers append in non-decreasing time order.
    pub fn add_key(&mut self, time: f32, value: f32) {
        // Very wide rows can round neighbouring times to the same f32.
        debug_assert!(
            self.keys.last().is_none_or(|k| k.time <= time),
            "keys must be appended in non-decreasing time order"
        );
        self.keys.push(Keyframe { time, value });
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Times of the first and last key, `None` when empty.
    pub fn time_range(&self) -> Option<(f32, f32)> {
        Some((self.keys.first()?.time, self.keys.last()?.time))
    }

    /// Evaluate the curve at time `t` with linear interpolation.
    ///
    /// Returns 0.0 for an empty curve and the first key's value for NaN.
    pub fn evaluate(&self, t: f32) -> f32 {
        let keys = &self.keys;
        let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
            return 0.0;
        };

        // Clamp to range; NaN has no position on the curve.
        if t.is_nan() || t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }

        // Index of the first key strictly after t; always in 1..len here.
        let hi = keys.partition_point(|k| k.time <= t);
        let k0 = keys[hi - 1];
        let k1 = keys[hi];

        let span = k1.time - k0.time;
        if span.abs() < 1e-10 {
            return k0.value;
        }
        k0.value + (k1.value - k0.value) * (t - k0.time) / span
    }
}

/// Four synchronized channel curves (R, G, B, A) built from one image row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveSet {
    curves: [FloatCurve; 4],
}

impl CurveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty set with room for `keys` keys per channel.
    pub fn with_capacity(keys: usize) -> Self {
        Self {
            curves: std::array::from_fn(|_| FloatCurve::with_capacity(keys)),
        }
    }

    pub fn channel(&self, channel: Channel) -> &FloatCurve {
        &self.curves[channel.index()]
    }

    /// Curves in R, G, B, A order.
    pub fn curves(&self) -> &[FloatCurve; 4] {
        &self.curves
    }

    /// Append one key per channel at `time`.
    pub fn add_color_key(&mut self, time: f32, color: LinearColor) {
        for (curve, value) in self.curves.iter_mut().zip(color.to_array()) {
            curve.add_key(time, value);
        }
    }

    /// Number of keys per channel. All channels always agree.
    pub fn key_count(&self) -> usize {
        self.curves[0].len()
    }

    /// Evaluate all four channels at time `t`.
    pub fn evaluate(&self, t: f32) -> LinearColor {
        let [r, g, b, a] = &self.curves;
        LinearColor::new(r.evaluate(t), g.evaluate(t), b.evaluate(t), a.evaluate(t))
    }

    /// Sample the set at `size` evenly spaced times over [0, 1].
    pub fn bake(&self, size: usize) -> Vec<LinearColor> {
        (0..size)
            .map(|i| {
                let t = i as f32 / (size - 1).max(1) as f32;
                self.evaluate(t)
            })
            .collect()
    }
}
