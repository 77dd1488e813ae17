// Visual tuning constants, scaled for on-screen legibility rather than
// physical accuracy.

/// Nuclear radius prefactor in `r = R0 * A^(1/3)`. A display scale, not the
/// empirical 1.2 fm.
pub const NUCLEUS_R0: f32 = 0.4;

/// Assumed volume fill ratio when backing out a single-nucleon radius from
/// total nucleus volume (close-packing of equal spheres).
pub const PACKING_FRACTION: f32 = 0.74;

/// Angular speed of electron revolution, radians per second.
pub const ORBIT_ANGULAR_SPEED: f32 = 0.8;

/// Bounds for the randomly sampled nucleus spin speed, radians per second.
pub const SPIN_SPEED_MIN: f32 = 0.2;
pub const SPIN_SPEED_MAX: f32 = 0.6;
