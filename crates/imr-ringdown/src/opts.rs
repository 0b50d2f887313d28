use serde::{Deserialize, Serialize};

fn default_window_min() -> f64 {
    0.0
}

fn default_window_max() -> f64 {
    0.99
}

/// Closed spin interval over which the published fits are trusted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinWindow {
    /// Lowest trusted spin.
    #[serde(default = "default_window_min")]
    pub min: f64,
    /// Highest trusted spin.
    #[serde(default = "default_window_max")]
    pub max: f64,
}

impl Default for SpinWindow {
    fn default() -> Self {
        Self {
            min: default_window_min(),
            max: default_window_max(),
        }
    }
}

impl SpinWindow {
    /// Whether `spin` lies inside the closed window.
    pub fn contains(&self, spin: f64) -> bool {
        spin >= self.min && spin <= self.max
    }

    /// Clamps `spin` into the window.
    pub fn clamp(&self, spin: f64) -> f64 {
        spin.clamp(self.min, self.max)
    }
}

/// What to do with spins outside [`SpinWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtrapolationPolicy {
    /// Evaluate the fit as-is; only undefined real powers fail.
    #[default]
    Extrapolate,
    /// Pull spins into the window before evaluating, and clamp spins
    /// recovered by inversion.
    Clamp,
    /// Fail with a numeric-domain error.
    Reject,
}

/// Options shared by every fit evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FitOpts {
    /// Handling of spins outside the validity window.
    #[serde(default)]
    pub extrapolation: ExtrapolationPolicy,
    /// Validity window of the fits.
    #[serde(default)]
    pub validity: SpinWindow,
}

impl FitOpts {
    /// Options with the given policy and the default window.
    pub fn with_policy(extrapolation: ExtrapolationPolicy) -> Self {
        Self {
            extrapolation,
            validity: SpinWindow::default(),
        }
    }

    /// Returns a copy with a finite, correctly ordered window.
    ///
    /// Non-finite bounds fall back to the defaults; swapped bounds are
    /// reordered.
    pub fn sanitised(&self) -> Self {
        let min = if self.validity.min.is_finite() {
            self.validity.min
        } else {
            default_window_min()
        };
        let max = if self.validity.max.is_finite() {
            self.validity.max
        } else {
            default_window_max()
        };
        Self {
            extrapolation: self.extrapolation,
            validity: SpinWindow {
                min: min.min(max),
                max: min.max(max),
            },
        }
    }
}
