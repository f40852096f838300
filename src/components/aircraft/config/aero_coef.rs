use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Aerodynamic coefficient curves of a surface as functions of angle of attack
/// and sideslip (radians).
///
/// Every method defaults to zero, so an implementation only overrides the
/// curves it actually models.
pub trait CoefficientModel: Debug + Send + Sync {
    /// Lift coefficient.
    fn cl(&self, _alpha: f64, _beta: f64) -> f64 {
        0.0
    }

    /// Side-force coefficient.
    fn cy(&self, _alpha: f64, _beta: f64) -> f64 {
        0.0
    }

    /// Drag coefficient.
    fn cd(&self, _alpha: f64, _beta: f64) -> f64 {
        0.0
    }

    /// Pitching-moment coefficient.
    fn cm(&self, _alpha: f64, _beta: f64) -> f64 {
        0.0
    }

    /// Yawing-moment coefficient.
    fn cn(&self, _alpha: f64, _beta: f64) -> f64 {
        0.0
    }

    /// Rolling-moment coefficient.
    fn c_roll(&self, _alpha: f64, _beta: f64) -> f64 {
        0.0
    }
}

/// Returns zero for any input. The default model of every surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ZeroCoefficients;

impl CoefficientModel for ZeroCoefficients {}

/// Linear lift, pitch and sideslip derivatives with a parabolic drag curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearCoefficients {
    /// Lift coefficient at zero angle of attack.
    pub c_l_0: f64,
    /// Lift curve slope (per rad).
    pub c_l_alpha: f64,
    /// Drag coefficient at zero angle of attack.
    pub c_d_0: f64,
    /// Quadratic drag coefficient with respect to α².
    pub c_d_alpha2: f64,
    /// Pitching moment at zero angle of attack.
    pub c_m_0: f64,
    /// Pitching-moment slope (per rad).
    pub c_m_alpha: f64,
    /// Side force due to sideslip (per rad).
    pub c_y_beta: f64,
    /// Rolling moment due to sideslip (per rad).
    pub c_roll_beta: f64,
    /// Yawing moment due to sideslip (per rad).
    pub c_n_beta: f64,
}

impl CoefficientModel for LinearCoefficients {
    fn cl(&self, alpha: f64, _beta: f64) -> f64 {
        self.c_l_0 + self.c_l_alpha * alpha
    }

    fn cy(&self, _alpha: f64, beta: f64) -> f64 {
        self.c_y_beta * beta
    }

    fn cd(&self, alpha: f64, _beta: f64) -> f64 {
        self.c_d_0 + self.c_d_alpha2 * alpha * alpha
    }

    fn cm(&self, alpha: f64, _beta: f64) -> f64 {
        self.c_m_0 + self.c_m_alpha * alpha
    }

    fn cn(&self, _alpha: f64, beta: f64) -> f64 {
        self.c_n_beta * beta
    }

    fn c_roll(&self, _alpha: f64, beta: f64) -> f64 {
        self.c_roll_beta * beta
    }
}
