//! Tier-dependent scaling: the overall difficulty multiplier, stat exponents and the
//! damage divisor.

use crate::{
    core::tier::{TierDescriptor, TierInput, resolve_tier},
    errors::Result,
};

/// Per-tier multiplier, indexed by `tier - 1`.
pub const TIER_MULTIPLIERS: [f64; 18] = [
    1.0, 1.0, 1.0, 1.0, 1.05, 1.17, 1.40, 1.93, 3.38, 14.6, 597.0, 245_000.0, 7.34e7, 1.76e10,
    3.17e12, 1.27e14, 2.54e15, 5.07e16,
];

/// Extra multiplier applied to every stat in tournament mode.
pub const TOURNAMENT_BASE_MULTIPLIER: f64 = 9.3;

/// Health exponent base for normal tiers.
pub const HP_EXPONENT_BASE: f64 = 2.13;
/// Health exponent base in tournament mode.
pub const HP_EXPONENT_BASE_TOURNAMENT: f64 = 2.308;

/// Damage exponent base for normal tiers.
pub const DMG_EXPONENT_BASE: f64 = 2.007;
/// Damage exponent base in tournament mode, as reported by
/// [`calculate_dmg_exponent`]. The enemy damage formula uses
/// [`crate::core::enemy::DMG_FORMULA_EXPONENT_BASE_TOURNAMENT`] instead.
pub const DMG_EXPONENT_BASE_TOURNAMENT: f64 = 2.105;

/// Tiers above this reuse its exponent deltas and divisor.
const TABLE_CAP_TIER: u32 = 15;

/// Health exponent increase by tier (tiers not listed add nothing).
const HP_EXPONENT_DELTAS: [(u32, f64); 5] =
    [(11, 0.01), (12, 0.1), (13, 0.22), (14, 0.36), (15, 0.51)];

/// Damage exponent increase by tier (tiers not listed add nothing).
const DMG_EXPONENT_DELTAS: [(u32, f64); 6] = [
    (10, 0.002),
    (11, 0.004),
    (12, 0.02),
    (13, 0.046),
    (14, 0.073),
    (15, 0.102),
];

/// Enemy damage divisor by tier (tiers not listed divide by 1).
const DMG_DIVISORS: [(u32, f64); 6] = [
    (10, 2.3),
    (11, 11.5),
    (12, 115.0),
    (13, 5750.0),
    (14, 287_500.0),
    (15, 14_375_000.0),
];

fn capped_lookup(table: &[(u32, f64)], tier: u32, default: f64) -> f64 {
    let key = tier.min(TABLE_CAP_TIER);
    table
        .iter()
        .find(|&&(t, _)| t == key)
        .map_or(default, |&(_, value)| value)
}

/// Multiplier from [`TIER_MULTIPLIERS`] for a validated tier.
#[must_use]
pub fn tier_multiplier(tier: u32) -> f64 {
    debug_assert!((1..=18).contains(&tier), "tier {tier} escaped validation");
    tier.checked_sub(1)
        .and_then(|index| TIER_MULTIPLIERS.get(index as usize))
        .copied()
        .unwrap_or(f64::NAN)
}

/// Overall difficulty multiplier of a tier. Tier 1 is exactly `1` in both modes.
#[must_use]
pub fn tier_difficulty(descriptor: &TierDescriptor) -> f64 {
    let tier = descriptor.tier();
    if tier == 1 {
        return 1.0;
    }

    let t = f64::from(tier);
    let linear = 1.0 + (t - 1.0) * 15.5;
    let exponential = 1.43f64.powf(t - 2.0) + 0.2 * (t - 1.0);
    let tournament = if descriptor.is_tournament() {
        TOURNAMENT_BASE_MULTIPLIER
    } else {
        1.0
    };

    linear * exponential * tier_multiplier(tier) * tournament
}

/// Health exponent delta for a tier, capped at tier 15.
#[must_use]
pub fn hp_exponent_delta(tier: u32) -> f64 {
    capped_lookup(&HP_EXPONENT_DELTAS, tier, 0.0)
}

/// Damage exponent delta for a tier, capped at tier 15.
#[must_use]
pub fn dmg_exponent_delta(tier: u32) -> f64 {
    capped_lookup(&DMG_EXPONENT_DELTAS, tier, 0.0)
}

/// Enemy damage divisor for a tier, capped at tier 15.
#[must_use]
pub fn dmg_divisor(tier: u32) -> f64 {
    capped_lookup(&DMG_DIVISORS, tier, 1.0)
}

/// Exponent applied to the wave number in the enemy health formula.
///
/// # Errors
/// Fails only when given an invalid tier token.
pub fn calculate_hp_exponent<'a>(tier: impl Into<TierInput<'a>>) -> Result<f64> {
    let descriptor = resolve_tier(tier)?;
    let base = if descriptor.is_tournament() {
        HP_EXPONENT_BASE_TOURNAMENT
    } else {
        HP_EXPONENT_BASE
    };
    Ok(base + hp_exponent_delta(descriptor.tier()))
}

/// Damage exponent of a tier using the `2.007` / `2.105` bases.
///
/// Note: the enemy damage formula uses a different tournament base (`2.355`);
/// the two have never agreed and both are kept as-is.
///
/// # Errors
/// Fails only when given an invalid tier token.
pub fn calculate_dmg_exponent<'a>(tier: impl Into<TierInput<'a>>) -> Result<f64> {
    let descriptor = resolve_tier(tier)?;
    let base = if descriptor.is_tournament() {
        DMG_EXPONENT_BASE_TOURNAMENT
    } else {
        DMG_EXPONENT_BASE
    };
    Ok(base + dmg_exponent_delta(descriptor.tier()))
}
