//! Enemy health and damage at a given wave and tier.
//!
//! Combines the wave scaling from [`crate::core::wave`] with the tier scaling from
//! [`crate::core::difficulty`]. All functions are pure.

use crate::{
    core::{
        difficulty::{
            DMG_EXPONENT_BASE, calculate_hp_exponent, dmg_divisor, dmg_exponent_delta,
            tier_difficulty,
        },
        notation::{NumberInput, format_number_output, parse_number_input},
        tier::{TierDescriptor, TierInput, resolve_tier},
        wave::{dmg_wave_multipliers, hp_wave_multipliers},
    },
    errors::Result,
};
use std::fmt::Write;

/// Tournament exponent base used by [`calculate_enemy_dmg`].
///
/// Differs from [`crate::core::difficulty::DMG_EXPONENT_BASE_TOURNAMENT`] (2.105);
/// keep both until someone confirms which one the game uses.
pub const DMG_FORMULA_EXPONENT_BASE_TOURNAMENT: f64 = 2.355;

/// Reply when skips remove every wave before the target.
pub const SKIPS_EXCEED_WAVE: &str = "Error: Skips exceed target wave";

/// Base and scaling factors of the tournament ruleset.
struct ModeFactors {
    base: f64,
    scaling: f64,
}

const fn mode_factors(descriptor: &TierDescriptor) -> ModeFactors {
    if descriptor.is_tournament() {
        ModeFactors {
            base: 9.3,
            scaling: 7.3,
        }
    } else {
        ModeFactors {
            base: 1.0,
            scaling: 1.0,
        }
    }
}

/// Health and damage of an enemy at one wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    /// Enemy health
    pub hp: f64,
    /// Enemy damage
    pub dmg: f64,
}

/// Enemy health at `wave`.
///
/// Waves below 1 are outside the model; the result is then meaningless but no
/// error is raised.
///
/// # Errors
/// Fails only when `tier` is an invalid token.
pub fn calculate_enemy_hp<'a>(wave: f64, tier: impl Into<TierInput<'a>>) -> Result<f64> {
    let descriptor = resolve_tier(tier)?;
    let ModeFactors { base, scaling } = mode_factors(&descriptor);
    let growth: f64 = if descriptor.is_tournament() { 1.004 } else { 1.0 };

    let multipliers = hp_wave_multipliers(wave);
    let exponent = calculate_hp_exponent(descriptor)?;

    let base_hp = 0.05 * base * wave.powf(exponent) + 0.8 * scaling * wave + 1.5;
    let wave_multiplier = (1.0 + multipliers.bonus_sum) * multipliers.power_product;
    let tournament_multiplier = if descriptor.is_tournament() {
        1.65f64.powf(((wave - 1.0).max(1.0) / 100.0).floor())
    } else {
        1.0
    };

    Ok(base_hp
        * wave_multiplier
        * tier_difficulty(&descriptor)
        * growth.powf(wave)
        * tournament_multiplier)
}

/// Enemy damage at `wave`.
///
/// Uses the plain damage `power_product`; the tier-gated
/// [`crate::core::wave::WaveMultipliers::adjusted_product`] is not applied.
///
/// # Errors
/// Fails only when `tier` is an invalid token.
pub fn calculate_enemy_dmg<'a>(wave: f64, tier: impl Into<TierInput<'a>>) -> Result<f64> {
    let descriptor = resolve_tier(tier)?;
    let tier = descriptor.tier();
    let ModeFactors { base, scaling } = mode_factors(&descriptor);

    let exponent_base = if descriptor.is_tournament() {
        DMG_FORMULA_EXPONENT_BASE_TOURNAMENT
    } else {
        DMG_EXPONENT_BASE
    };
    let exponent = exponent_base + dmg_exponent_delta(tier);

    let hundred_plus_multiplier = if descriptor.is_tournament() {
        1.06f64.powf(((wave - 100.0).max(0.0) / 100.0).floor())
    } else {
        1.0
    };

    let base_dmg = 0.021 * base * wave.powf(exponent) + 0.16 * scaling * wave + 1.07;
    let multipliers = dmg_wave_multipliers(wave);
    let tier_damage_multiplier = match tier {
        0..=3 => 0.94,
        4..=6 => 0.9,
        _ => 0.86,
    };

    Ok(base_dmg
        * (1.0 + multipliers.bonus_sum)
        * multipliers.power_product
        * tier_difficulty(&descriptor)
        * hundred_plus_multiplier
        * tier_damage_multiplier
        / dmg_divisor(tier))
}

/// Health and damage together, each at its own (already skip-adjusted) wave.
///
/// # Errors
/// Fails only when `tier` is an invalid token.
pub fn calculate_enemy_stats<'a>(
    hp_wave: f64,
    dmg_wave: f64,
    tier: impl Into<TierInput<'a>>,
) -> Result<EnemyStats> {
    let descriptor = resolve_tier(tier)?;
    Ok(EnemyStats {
        hp: calculate_enemy_hp(hp_wave, descriptor)?,
        dmg: calculate_enemy_dmg(dmg_wave, descriptor)?,
    })
}

/// Builds the enemy stat report for a target wave, taking life skips into account.
///
/// Attack skips lower the wave used for damage, health skips the wave used for
/// health. Never fails: problems come back as a string starting with `"Error: "`.
#[must_use]
pub fn enemy_stat_finder_wave<'a, 'b, 'c, 'd>(
    tier: impl Into<TierInput<'a>>,
    wave: impl Into<NumberInput<'b>>,
    attack_skips: impl Into<NumberInput<'c>>,
    health_skips: impl Into<NumberInput<'d>>,
    precision: usize,
) -> String {
    stat_report(tier, wave, attack_skips, health_skips, precision)
        .unwrap_or_else(|e| format!("Error: {e}"))
}

fn stat_report<'a, 'b, 'c, 'd>(
    tier: impl Into<TierInput<'a>>,
    wave: impl Into<NumberInput<'b>>,
    attack_skips: impl Into<NumberInput<'c>>,
    health_skips: impl Into<NumberInput<'d>>,
    precision: usize,
) -> Result<String> {
    let descriptor = resolve_tier(tier)?;
    let wave = parse_number_input(wave)?;
    let attack_skips = parse_number_input(attack_skips)?;
    let health_skips = parse_number_input(health_skips)?;

    if wave - attack_skips.max(health_skips) <= 0.0 {
        return Ok(SKIPS_EXCEED_WAVE.to_string());
    }

    let stats = calculate_enemy_stats(wave - health_skips, wave - attack_skips, descriptor)?;
    tracing::debug!(%descriptor, wave, attack_skips, health_skips, ?stats, "enemy stats");

    let mut report = String::new();
    writeln!(report, "Wave: {}", format_number_output(wave, precision))?;
    writeln!(
        report,
        "Attack Skips (EALS): {}",
        format_number_output(attack_skips, precision)
    )?;
    writeln!(
        report,
        "Health Skips (EHLS): {}",
        format_number_output(health_skips, precision)
    )?;
    writeln!(report, "Enemy HP: {}", format_number_output(stats.hp, precision))?;
    write!(report, "Enemy DMG: {}", format_number_output(stats.dmg, precision))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::{tier::parse_tier, wave::dmg_wave_multipliers};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_tier_one_hp_at_wave_one() {
        // 0.05 * 1^2.13 + 0.8 + 1.5, no wave bonuses yet
        assert!(close(calculate_enemy_hp(1.0, "1").unwrap(), 2.35));
    }

    #[test]
    fn test_tier_one_dmg_at_wave_one() {
        // (0.021 + 0.16 + 1.07) * 0.94
        assert!(close(calculate_enemy_dmg(1.0, "1").unwrap(), 1.251 * 0.94));
    }

    #[test]
    fn test_tournament_hp_at_wave_one() {
        // 0.05 * 9.3 + 0.8 * 7.3 + 1.5, times 1.004^1 and 1.65^0
        let expected = (0.05 * 9.3 + 0.8 * 7.3 + 1.5) * 1.004;
        assert!(close(calculate_enemy_hp(1.0, "1+").unwrap(), expected));
    }

    #[test]
    fn test_tournament_dmg_uses_formula_exponent_base() {
        let wave = 250.0_f64;
        let descriptor = parse_tier("3+").unwrap();
        let multipliers = dmg_wave_multipliers(wave);
        let base_dmg =
            0.021 * 9.3 * wave.powf(DMG_FORMULA_EXPONENT_BASE_TOURNAMENT) + 0.16 * 7.3 * wave + 1.07;
        let expected = base_dmg
            * (1.0 + multipliers.bonus_sum)
            * multipliers.power_product
            * tier_difficulty(&descriptor)
            * 1.06
            * 0.94;
        assert!(close(calculate_enemy_dmg(wave, descriptor).unwrap(), expected));
    }

    #[test]
    fn test_stats_increase_with_wave() {
        for token in ["1", "5", "9", "10", "14", "18", "1+", "8+", "14+"] {
            let mut last_hp = 0.0;
            let mut last_dmg = 0.0;
            for wave in 1..=1200 {
                let wave = f64::from(wave);
                let hp = calculate_enemy_hp(wave, token).unwrap();
                let dmg = calculate_enemy_dmg(wave, token).unwrap();
                assert!(hp > last_hp, "hp not increasing at tier {token} wave {wave}");
                assert!(dmg > last_dmg, "dmg not increasing at tier {token} wave {wave}");
                last_hp = hp;
                last_dmg = dmg;
            }
        }
    }

    #[test]
    fn test_dmg_divisor_jump_at_tier_ten() {
        let wave = 500.0;
        let tier_nine = calculate_enemy_dmg(wave, "9").unwrap();
        let tier_ten = calculate_enemy_dmg(wave, "10").unwrap();

        let nine = parse_tier("9").unwrap();
        let ten = parse_tier("10").unwrap();
        // tier 10 adds a 0.002 exponent delta and divides by 2.3
        let expected_ratio = tier_difficulty(&ten) / tier_difficulty(&nine) / 2.3;
        let base = |exp: f64| 0.021 * wave.powf(exp) + 0.16 * wave + 1.07;
        let expected_ratio = expected_ratio * base(2.009) / base(2.007);

        assert!(close(tier_ten / tier_nine, expected_ratio));
    }

    #[test]
    fn test_invalid_tier_propagates() {
        assert!(calculate_enemy_hp(10.0, "2+").is_err());
        assert!(calculate_enemy_dmg(10.0, "19").is_err());
    }

    #[test]
    fn test_finder_skips_exceed_wave() {
        assert_eq!(enemy_stat_finder_wave("5", 10.0, 15.0, 0.0, 2), SKIPS_EXCEED_WAVE);
        assert_eq!(enemy_stat_finder_wave("5", 10.0, 0.0, 10.0, 2), SKIPS_EXCEED_WAVE);
    }

    #[test]
    fn test_finder_report_lines() {
        let report = enemy_stat_finder_wave("1", "1K", "100", "200", 2);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Wave: 1.00K");
        assert_eq!(lines[1], "Attack Skips (EALS): 100");
        assert_eq!(lines[2], "Health Skips (EHLS): 200");

        let hp = format_number_output(calculate_enemy_hp(800.0, "1").unwrap(), 2);
        let dmg = format_number_output(calculate_enemy_dmg(900.0, "1").unwrap(), 2);
        assert_eq!(lines[3], format!("Enemy HP: {hp}"));
        assert_eq!(lines[4], format!("Enemy DMG: {dmg}"));
    }

    #[test]
    fn test_finder_rounds_ties_up() {
        let report = enemy_stat_finder_wave("1", "1125", "0", "0", 2);
        assert_eq!(report.lines().next(), Some("Wave: 1.13K"));
    }

    #[test]
    fn test_finder_huge_waves_stay_readable() {
        let report = enemy_stat_finder_wave("18", "100K", "0", "0", 2);
        let hp_line = report.lines().nth(3).unwrap();
        assert!(hp_line.starts_with("Enemy HP: 3.27"), "{hp_line}");
        assert!(hp_line.ends_with("e+218AJ"), "{hp_line}");

        let report = enemy_stat_finder_wave("18", "1M", "0", "0", 2);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[3], "Enemy HP: InfinityAJ");
        assert_eq!(lines[4], "Enemy DMG: InfinityAJ");
    }

    #[test]
    fn test_finder_reports_errors_as_text() {
        let report = enemy_stat_finder_wave("2+", 100.0, 0.0, 0.0, 2);
        assert!(report.starts_with("Error: Invalid tournament tier"));

        let report = enemy_stat_finder_wave("5", "lots", "0", "0", 2);
        assert!(report.starts_with("Error: Invalid number format"));
    }
}
