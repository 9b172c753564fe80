//! Live-tunable knobs read by the per-frame updater.
//!
//! The panel writes through [`Params::set`], which snaps a raw slider value to
//! the knob's step grid and clamps it into range. Nothing else validates them.

/// Identifies one of the six knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKey {
    Scaler,
    RotationRate,
    TimeMultiplier,
    Smoothing,
    ShapeSpin,
    ShapeScaler,
}

/// Range and step of a knob as exposed on the panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamSpec {
    pub key: ParamKey,
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ParamSpec {
    /// Snap to the nearest step counted from `min`, then clamp into range.
    pub fn clamp_to_step(&self, value: f32) -> f32 {
        if !value.is_finite() {
            return self.min;
        }
        let steps = ((value - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

pub static PARAM_SPECS: [ParamSpec; 6] = [
    ParamSpec {
        key: ParamKey::Scaler,
        label: "scaler",
        min: 0.0,
        max: 2.0,
        step: 0.1,
    },
    ParamSpec {
        key: ParamKey::RotationRate,
        label: "rotationRate",
        min: 2.0,
        max: 64.0,
        step: 2.0,
    },
    ParamSpec {
        key: ParamKey::TimeMultiplier,
        label: "timeMultiplier",
        min: 5.0,
        max: 50.0,
        step: 5.0,
    },
    ParamSpec {
        key: ParamKey::Smoothing,
        label: "smoothing",
        min: 0.5,
        max: 1.0,
        step: 0.01,
    },
    ParamSpec {
        key: ParamKey::ShapeSpin,
        label: "shapeSpin",
        min: 20.0,
        max: 500.0,
        step: 20.0,
    },
    ParamSpec {
        key: ParamKey::ShapeScaler,
        label: "shapeScaler",
        min: 16.0,
        max: 256.0,
        step: 16.0,
    },
];

#[inline]
pub fn spec_for(key: ParamKey) -> &'static ParamSpec {
    match key {
        ParamKey::Scaler => &PARAM_SPECS[0],
        ParamKey::RotationRate => &PARAM_SPECS[1],
        ParamKey::TimeMultiplier => &PARAM_SPECS[2],
        ParamKey::Smoothing => &PARAM_SPECS[3],
        ParamKey::ShapeSpin => &PARAM_SPECS[4],
        ParamKey::ShapeScaler => &PARAM_SPECS[5],
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    /// Baseline added to every shape's scale
    pub scaler: f32,
    /// Camera drift divisor (larger drifts slower)
    pub rotation_rate: f32,
    /// Shader time advance per second
    pub time_multiplier: f32,
    /// Analyser smoothing time constant
    pub smoothing: f32,
    /// Oscillation divisor for per-shape spin
    pub shape_spin: f32,
    /// Frequency-to-scale divisor
    pub shape_scaler: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            scaler: 0.1,
            rotation_rate: 32.0,
            time_multiplier: 10.0,
            smoothing: 0.9,
            shape_spin: 140.0,
            shape_scaler: 128.0,
        }
    }
}

impl Params {
    pub fn get(&self, key: ParamKey) -> f32 {
        match key {
            ParamKey::Scaler => self.scaler,
            ParamKey::RotationRate => self.rotation_rate,
            ParamKey::TimeMultiplier => self.time_multiplier,
            ParamKey::Smoothing => self.smoothing,
            ParamKey::ShapeSpin => self.shape_spin,
            ParamKey::ShapeScaler => self.shape_scaler,
        }
    }

    /// Store `value` after range/step enforcement; returns what was stored.
    pub fn set(&mut self, key: ParamKey, value: f32) -> f32 {
        let v = spec_for(key).clamp_to_step(value);
        let slot = match key {
            ParamKey::Scaler => &mut self.scaler,
            ParamKey::RotationRate => &mut self.rotation_rate,
            ParamKey::TimeMultiplier => &mut self.time_multiplier,
            ParamKey::Smoothing => &mut self.smoothing,
            ParamKey::ShapeSpin => &mut self.shape_spin,
            ParamKey::ShapeScaler => &mut self.shape_scaler,
        };
        *slot = v;
        v
    }
}
