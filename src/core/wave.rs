//! Wave-based scaling of enemy stats.
//!
//! Every `N` waves enemies gain an additive bonus (summed into `bonus_sum`) and a
//! multiplicative step (folded into `power_product`). Health and damage use separate
//! threshold tables.

/// `(every N waves, additive bonus)` for enemy health.
pub const HP_BONUS_THRESHOLDS: [(f64, f64); 12] = [
    (5.0, 0.04),
    (10.0, 0.05),
    (25.0, 0.06),
    (50.0, 0.08),
    (60.0, 0.1),
    (72.0, 0.18),
    (83.0, 0.2),
    (94.0, 0.21),
    (100.0, 0.12),
    (107.0, 0.1),
    (200.0, 0.15),
    (900.0, 0.35),
];

/// `(every N waves, multiplicative base)` for enemy health.
pub const HP_POWER_THRESHOLDS: [(f64, f64); 15] = [
    (30.0, 1.035),
    (60.0, 1.02),
    (72.0, 1.025),
    (83.0, 1.03),
    (94.0, 1.03),
    (100.0, 1.02),
    (107.0, 1.02),
    (139.0, 1.11),
    (182.0, 1.11),
    (200.0, 1.03),
    (241.0, 1.13),
    (332.0, 1.13),
    (400.0, 1.06),
    (900.0, 1.15),
    (1024.0, 1.15),
];

/// `(every N waves, additive bonus)` for enemy damage.
pub const DMG_BONUS_THRESHOLDS: [(f64, f64); 7] = [
    (5.0, 0.02),
    (10.0, 0.025),
    (25.0, 0.012),
    (50.0, 0.017),
    (100.0, 0.02),
    (200.0, 0.025),
    (900.0, 0.02),
];

/// `(every N waves, multiplicative base)` for enemy damage.
pub const DMG_POWER_THRESHOLDS: [(f64, f64); 9] = [
    (30.0, 1.005),
    (72.0, 1.01),
    (83.0, 1.01),
    (94.0, 1.01),
    (107.0, 1.01),
    (200.0, 1.02),
    (400.0, 1.02),
    (900.0, 1.035),
    (1024.0, 1.05),
];

/// `(every N waves, base, minimum tier)` extra damage steps used by
/// [`WaveMultipliers::adjusted_product`]. A minimum tier of 0 means ungated.
pub const DMG_TIER_GATED_THRESHOLDS: [(f64, f64, u32); 4] = [
    (139.0, 1.025, 7),
    (182.0, 1.025, 8),
    (241.0, 1.03, 0),
    (332.0, 1.03, 0),
];

/// Which enemy stat a set of multipliers applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    /// Enemy health
    Health,
    /// Enemy damage
    Damage,
}

/// Additive and multiplicative wave scaling for one stat at one wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveMultipliers {
    /// Sum of `weight * floor(wave / N)` over the bonus table
    pub bonus_sum: f64,
    /// Product of `base ^ floor(wave / N)` over the power table
    pub power_product: f64,
    stat: Stat,
    wave: f64,
}

impl WaveMultipliers {
    /// The stat these multipliers were computed for.
    #[must_use]
    pub const fn stat(&self) -> Stat {
        self.stat
    }

    /// `power_product` with the extra tier-gated damage steps folded in.
    ///
    /// Only defined for damage; returns `None` for health. Enemy damage itself is
    /// computed from the plain `power_product`, this is exposed for callers that
    /// want the adjusted curve.
    #[must_use]
    pub fn adjusted_product(&self, tier: u32) -> Option<f64> {
        if self.stat != Stat::Damage {
            return None;
        }

        let adjusted = DMG_TIER_GATED_THRESHOLDS
            .iter()
            .filter(|&&(_, _, min_tier)| tier >= min_tier)
            .fold(self.power_product, |product, &(every, base, _)| {
                product * base.powf(steps(self.wave, every))
            });
        Some(adjusted)
    }
}

/// Number of completed `every`-wave steps.
fn steps(wave: f64, every: f64) -> f64 {
    (wave / every).floor()
}

fn bonus_sum(wave: f64, table: &[(f64, f64)]) -> f64 {
    table
        .iter()
        .map(|&(every, weight)| weight * steps(wave, every))
        .sum()
}

fn power_product(wave: f64, table: &[(f64, f64)]) -> f64 {
    table
        .iter()
        .fold(1.0, |product, &(every, base)| {
            product * base.powf(steps(wave, every))
        })
}

/// Health scaling at `wave`.
#[must_use]
pub fn hp_wave_multipliers(wave: f64) -> WaveMultipliers {
    WaveMultipliers {
        bonus_sum: bonus_sum(wave, &HP_BONUS_THRESHOLDS),
        power_product: power_product(wave, &HP_POWER_THRESHOLDS),
        stat: Stat::Health,
        wave,
    }
}

/// Damage scaling at `wave`.
#[must_use]
pub fn dmg_wave_multipliers(wave: f64) -> WaveMultipliers {
    WaveMultipliers {
        bonus_sum: bonus_sum(wave, &DMG_BONUS_THRESHOLDS),
        power_product: power_product(wave, &DMG_POWER_THRESHOLDS),
        stat: Stat::Damage,
        wave,
    }
}

/// Scaling for either stat. Waves below 1 are outside the model and are not checked.
#[must_use]
pub fn calculate_wave_multipliers(wave: f64, stat: Stat) -> WaveMultipliers {
    let multipliers = match stat {
        Stat::Health => hp_wave_multipliers(wave),
        Stat::Damage => dmg_wave_multipliers(wave),
    };
    tracing::trace!(
        wave,
        ?stat,
        bonus_sum = multipliers.bonus_sum,
        power_product = multipliers.power_product,
        "wave multipliers"
    );
    multipliers
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_hp_power_product_first_threshold() {
        assert_eq!(calculate_wave_multipliers(29.0, Stat::Health).power_product, 1.0);
        assert_eq!(calculate_wave_multipliers(30.0, Stat::Health).power_product, 1.035);
    }

    #[test]
    fn test_hp_bonus_sum() {
        // wave 10: two 5-steps and one 10-step
        assert!(close(hp_wave_multipliers(10.0).bonus_sum, 2.0 * 0.04 + 0.05));
        // wave 100: 20*.04 + 10*.05 + 4*.06 + 2*.08 + 1*.1 + 1*.18 + 1*.2 + 1*.21 + 1*.12
        let expected = 0.8 + 0.5 + 0.24 + 0.16 + 0.1 + 0.18 + 0.2 + 0.21 + 0.12;
        assert!(close(hp_wave_multipliers(100.0).bonus_sum, expected));
        assert_eq!(hp_wave_multipliers(4.0).bonus_sum, 0.0);
    }

    #[test]
    fn test_hp_power_product_at_wave_100() {
        let expected = 1.035_f64.powi(3) * 1.02 * 1.025 * 1.03 * 1.03 * 1.02;
        assert!(close(hp_wave_multipliers(100.0).power_product, expected));
    }

    #[test]
    fn test_dmg_multipliers() {
        let multipliers = dmg_wave_multipliers(50.0);
        let expected_bonus = 10.0 * 0.02 + 5.0 * 0.025 + 2.0 * 0.012 + 0.017;
        assert!(close(multipliers.bonus_sum, expected_bonus));
        assert_eq!(multipliers.power_product, 1.005);
        assert_eq!(multipliers.stat(), Stat::Damage);
    }

    #[test]
    fn test_adjusted_product_only_for_damage() {
        assert_eq!(hp_wave_multipliers(500.0).adjusted_product(10), None);
        assert!(dmg_wave_multipliers(500.0).adjusted_product(10).is_some());
    }

    #[test]
    fn test_adjusted_product_tier_gates() {
        let multipliers = dmg_wave_multipliers(400.0);
        let plain = multipliers.power_product;
        // floor(400/139)=2, floor(400/182)=2, floor(400/241)=1, floor(400/332)=1
        let ungated = plain * 1.03 * 1.03;

        assert!(close(multipliers.adjusted_product(6).unwrap(), ungated));
        assert!(close(
            multipliers.adjusted_product(7).unwrap(),
            ungated * 1.025_f64.powi(2)
        ));
        assert!(close(
            multipliers.adjusted_product(8).unwrap(),
            ungated * 1.025_f64.powi(2) * 1.025_f64.powi(2)
        ));
    }

    #[test]
    fn test_adjusted_product_below_thresholds_is_plain() {
        let multipliers = dmg_wave_multipliers(100.0);
        assert_eq!(
            multipliers.adjusted_product(18).unwrap(),
            multipliers.power_product
        );
    }
}
