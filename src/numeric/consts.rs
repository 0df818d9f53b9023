// ============================================================================
// Mathematical Constants
// ============================================================================

/// Euler's number
pub const E: f64 = std::f64::consts::E;
pub const PI: f64 = std::f64::consts::PI;
/// π / 2
pub const PI_2: f64 = std::f64::consts::FRAC_PI_2;
/// τ = 2π
pub const TAU: f64 = std::f64::consts::TAU;
/// τ / 4, the same value as [`PI_2`]
pub const TAU_4: f64 = PI_2;
/// Golden ratio φ
pub const PHI: f64 = 1.618_033_988_749_894_8;
/// φ - 1 = 1 / φ
pub const PSI: f64 = 0.618_033_988_749_894_8;
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;
pub const SQRT_5: f64 = 2.236_067_977_499_789_6;
pub const SQRT_7: f64 = 2.645_751_311_064_590_6;
pub const LN_2: f64 = std::f64::consts::LN_2;
