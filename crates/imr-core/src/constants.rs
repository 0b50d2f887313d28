//! Fixed physical constants shared by every conversion.

/// Speed of light in vacuum (m/s).
pub const C_LIGHT: f64 = 299_792_458.0;

/// Newton's constant times the solar mass (m^3/s^2).
pub const GM_SUN: f64 = 1.327_124_400_18e20;

/// Light-crossing time of one solar mass, `GM_SUN / c^3` (s).
pub const T_SUN: f64 = GM_SUN / (C_LIGHT * C_LIGHT * C_LIGHT);
