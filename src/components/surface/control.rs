use serde::{Deserialize, Serialize};

/// A hinged control surface spanning part of a lifting surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSurface {
    pub name: String,
    /// Spanwise coordinate where the control starts (m).
    pub span_start: f64,
    /// Spanwise coordinate where the control ends (m).
    pub span_end: f64,
    /// Hinge position as a fraction of local chord, measured from the trailing edge.
    pub chord_fraction: f64,
    /// Deflection per unit control input.
    #[serde(default = "default_gain")]
    pub gain: f64,
}

fn default_gain() -> f64 {
    1.0
}

impl ControlSurface {
    pub fn new(name: impl Into<String>, span_start: f64, span_end: f64, chord_fraction: f64) -> Self {
        Self {
            name: name.into(),
            span_start,
            span_end,
            chord_fraction,
            gain: default_gain(),
        }
    }

    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }
}
