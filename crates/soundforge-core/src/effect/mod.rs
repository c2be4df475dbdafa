//! Typed effect parameters for the effects rack
//!
//! Each `EffectKind` owns a closed, ordered set of `EffectParam`s with a
//! range, unit and default. Values are stored in that order.

use crate::error::{EditError, EditResult};

/// Effect parameter keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectParam {
    RoomSize,
    Damping,
    WetLevel,
    DryLevel,
    PreDelay,
    Time,
    Feedback,
    Drive,
    Tone,
    Level,
    Rate,
    Depth,
    LowGain,
    MidGain,
    HighGain,
    LowFreq,
    MidFreq,
    HighFreq,
    Threshold,
    Ratio,
    Attack,
    Release,
    Makeup,
}

impl EffectParam {
    pub fn name(&self) -> &'static str {
        match self {
            EffectParam::RoomSize => "Room Size",
            EffectParam::Damping => "Damping",
            EffectParam::WetLevel => "Wet Level",
            EffectParam::DryLevel => "Dry Level",
            EffectParam::PreDelay => "Pre-delay",
            EffectParam::Time => "Time",
            EffectParam::Feedback => "Feedback",
            EffectParam::Drive => "Drive",
            EffectParam::Tone => "Tone",
            EffectParam::Level => "Level",
            EffectParam::Rate => "Rate",
            EffectParam::Depth => "Depth",
            EffectParam::LowGain => "Low Gain",
            EffectParam::MidGain => "Mid Gain",
            EffectParam::HighGain => "High Gain",
            EffectParam::LowFreq => "Low Freq",
            EffectParam::MidFreq => "Mid Freq",
            EffectParam::HighFreq => "High Freq",
            EffectParam::Threshold => "Threshold",
            EffectParam::Ratio => "Ratio",
            EffectParam::Attack => "Attack",
            EffectParam::Release => "Release",
            EffectParam::Makeup => "Makeup",
        }
    }
}

/// Range and display metadata for one parameter of one effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub param: EffectParam,
    pub unit: &'static str,
    pub min: f32,
    pub max: f32,
    pub default: f32,
}

const fn spec(param: EffectParam, unit: &'static str, min: f32, max: f32, default: f32) -> ParamSpec {
    ParamSpec { param, unit, min, max, default }
}

const REVERB: [ParamSpec; 5] = [
    spec(EffectParam::RoomSize, "%", 0.0, 100.0, 50.0),
    spec(EffectParam::Damping, "%", 0.0, 100.0, 30.0),
    spec(EffectParam::WetLevel, "%", 0.0, 100.0, 25.0),
    spec(EffectParam::DryLevel, "%", 0.0, 100.0, 70.0),
    spec(EffectParam::PreDelay, "ms", 0.0, 200.0, 20.0),
];

const DELAY: [ParamSpec; 3] = [
    spec(EffectParam::Time, "ms", 1.0, 2000.0, 250.0),
    spec(EffectParam::Feedback, "%", 0.0, 100.0, 40.0),
    spec(EffectParam::WetLevel, "%", 0.0, 100.0, 30.0),
];

const DISTORTION: [ParamSpec; 3] = [
    spec(EffectParam::Drive, "%", 0.0, 100.0, 20.0),
    spec(EffectParam::Tone, "%", 0.0, 100.0, 50.0),
    spec(EffectParam::Level, "%", 0.0, 100.0, 75.0),
];

const CHORUS: [ParamSpec; 3] = [
    spec(EffectParam::Rate, "Hz", 0.1, 10.0, 2.0),
    spec(EffectParam::Depth, "%", 0.0, 100.0, 40.0),
    spec(EffectParam::WetLevel, "%", 0.0, 100.0, 35.0),
];

const EQ: [ParamSpec; 6] = [
    spec(EffectParam::LowGain, "dB", -24.0, 24.0, 0.0),
    spec(EffectParam::MidGain, "dB", -24.0, 24.0, 0.0),
    spec(EffectParam::HighGain, "dB", -24.0, 24.0, 0.0),
    spec(EffectParam::LowFreq, "Hz", 20.0, 500.0, 100.0),
    spec(EffectParam::MidFreq, "Hz", 200.0, 5000.0, 1000.0),
    spec(EffectParam::HighFreq, "Hz", 2000.0, 20000.0, 8000.0),
];

const COMPRESSOR: [ParamSpec; 5] = [
    spec(EffectParam::Threshold, "dB", -60.0, 0.0, -12.0),
    spec(EffectParam::Ratio, ":1", 1.0, 20.0, 4.0),
    spec(EffectParam::Attack, "ms", 0.1, 100.0, 10.0),
    spec(EffectParam::Release, "ms", 10.0, 1000.0, 100.0),
    spec(EffectParam::Makeup, "dB", 0.0, 24.0, 0.0),
];

/// Effect types available in the rack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Reverb,
    Delay,
    Distortion,
    Chorus,
    ParametricEq,
    Compressor,
}

impl EffectKind {
    pub const ALL: [EffectKind; 6] = [
        EffectKind::Reverb,
        EffectKind::Delay,
        EffectKind::Distortion,
        EffectKind::Chorus,
        EffectKind::ParametricEq,
        EffectKind::Compressor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EffectKind::Reverb => "Reverb",
            EffectKind::Delay => "Delay",
            EffectKind::Distortion => "Distortion",
            EffectKind::Chorus => "Chorus",
            EffectKind::ParametricEq => "Parametric EQ",
            EffectKind::Compressor => "Compressor",
        }
    }

    /// Parameters of this effect, in display order
    pub fn params(&self) -> &'static [ParamSpec] {
        match self {
            EffectKind::Reverb => &REVERB,
            EffectKind::Delay => &DELAY,
            EffectKind::Distortion => &DISTORTION,
            EffectKind::Chorus => &CHORUS,
            EffectKind::ParametricEq => &EQ,
            EffectKind::Compressor => &COMPRESSOR,
        }
    }

    pub fn spec(&self, param: EffectParam) -> Option<&'static ParamSpec> {
        self.params().iter().find(|s| s.param == param)
    }
}

/// One effect instance: kind, bypass state and current values
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    kind: EffectKind,
    enabled: bool,
    values: Vec<f32>,
}

impl Effect {
    /// New effect at its default values
    pub fn new(kind: EffectKind, enabled: bool) -> Self {
        Self {
            kind,
            enabled,
            values: kind.params().iter().map(|s| s.default).collect(),
        }
    }

    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn get(&self, param: EffectParam) -> Option<f32> {
        self.index_of(param).map(|i| self.values[i])
    }

    /// Set a parameter, clamped to its range. Returns the stored value.
    pub fn set(&mut self, param: EffectParam, value: f32) -> EditResult<f32> {
        if !value.is_finite() {
            return Err(EditError::NonFiniteValue { param: param.name() });
        }
        let index = self.index_of(param).ok_or(EditError::UnknownParameter {
            effect: self.kind.name(),
            param: param.name(),
        })?;
        let spec = &self.kind.params()[index];
        let clamped = value.clamp(spec.min, spec.max);
        self.values[index] = clamped;
        Ok(clamped)
    }

    /// Parameter specs paired with their current values
    pub fn params(&self) -> impl Iterator<Item = (&'static ParamSpec, f32)> + '_ {
        self.kind.params().iter().zip(self.values.iter().copied())
    }

    /// Restore every parameter to its default
    pub fn reset(&mut self) {
        for (value, spec) in self.values.iter_mut().zip(self.kind.params()) {
            *value = spec.default;
        }
    }

    fn index_of(&self, param: EffectParam) -> Option<usize> {
        self.kind.params().iter().position(|s| s.param == param)
    }
}

/// Ordered effect chain
#[derive(Debug, Clone, PartialEq)]
pub struct EffectsRack {
    effects: Vec<Effect>,
}

impl Default for EffectsRack {
    /// Reverb and chorus on, the rest bypassed
    fn default() -> Self {
        Self {
            effects: EffectKind::ALL
                .into_iter()
                .map(|kind| Effect::new(kind, matches!(kind, EffectKind::Reverb | EffectKind::Chorus)))
                .collect(),
        }
    }
}

impl EffectsRack {
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn effect(&self, kind: EffectKind) -> Option<&Effect> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    /// Flip an effect's bypass state, returning the new state
    pub fn toggle(&mut self, kind: EffectKind) -> EditResult<bool> {
        let effect = self.effect_mut(kind)?;
        effect.enabled = !effect.enabled;
        log::info!("{} {}", if effect.enabled { "enabled" } else { "bypassed" }, kind.name());
        Ok(effect.enabled)
    }

    pub fn set(&mut self, kind: EffectKind, param: EffectParam, value: f32) -> EditResult<f32> {
        self.effect_mut(kind)?.set(param, value)
    }

    /// Restore one effect's parameters to their defaults (bypass state kept)
    pub fn reset(&mut self, kind: EffectKind) -> EditResult<()> {
        self.effect_mut(kind)?.reset();
        Ok(())
    }

    fn effect_mut(&mut self, kind: EffectKind) -> EditResult<&mut Effect> {
        self.effects
            .iter_mut()
            .find(|e| e.kind == kind)
            .ok_or(EditError::EffectNotFound(kind.name()))
    }
}
