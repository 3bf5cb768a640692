//! Report generation for multi-wave tables and tier summaries.
//!
//! This module computes the rows behind `/wavetable` and `/tierinfo` and renders them
//! as fixed-width text. All functions are framework-agnostic; the bot layer only
//! wraps the output in an embed.

use crate::{
    core::{
        difficulty::{calculate_dmg_exponent, calculate_hp_exponent, dmg_divisor, tier_difficulty},
        enemy::{calculate_enemy_dmg, calculate_enemy_hp},
        notation::format_number_output,
        tier::{TierDescriptor, TierInput, resolve_tier},
    },
    errors::{Error, Result},
};
use std::fmt::Write;

/// One row of a wave table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStatRow {
    /// Wave number
    pub wave: u32,
    /// Enemy health at this wave
    pub hp: f64,
    /// Enemy damage at this wave
    pub dmg: f64,
}

/// Tier-level scaling factors, independent of wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierSummary {
    /// The tier being summarised
    pub descriptor: TierDescriptor,
    /// Health exponent
    pub hp_exponent: f64,
    /// Damage exponent as reported by the standalone utility
    pub dmg_exponent: f64,
    /// Overall difficulty multiplier
    pub difficulty: f64,
    /// Enemy damage divisor
    pub dmg_divisor: f64,
}

/// Computes enemy stats every `step` waves from `start` through `end` inclusive.
///
/// # Arguments
/// * `tier` - Tier token or descriptor
/// * `start` / `end` - First and last wave, `1 <= start <= end`
/// * `step` - Distance between rows, at least 1
/// * `max_rows` - Upper bound on the number of rows produced
///
/// # Errors
/// [`Error::InvalidWaveRange`] when the bounds are inconsistent or would need more
/// than `max_rows` rows, plus tier parse errors.
pub fn generate_wave_table<'a>(
    tier: impl Into<TierInput<'a>>,
    start: u32,
    end: u32,
    step: u32,
    max_rows: usize,
) -> Result<Vec<EnemyStatRow>> {
    let descriptor = resolve_tier(tier)?;

    if start == 0 {
        return Err(Error::InvalidWaveRange {
            message: "start wave must be at least 1".to_string(),
        });
    }
    if end < start {
        return Err(Error::InvalidWaveRange {
            message: format!("end wave {end} is before start wave {start}"),
        });
    }
    if step == 0 {
        return Err(Error::InvalidWaveRange {
            message: "step must be at least 1".to_string(),
        });
    }

    let row_count = ((end - start) / step) as usize + 1;
    if row_count > max_rows {
        return Err(Error::InvalidWaveRange {
            message: format!(
                "{row_count} rows requested, at most {max_rows} allowed; use a larger step"
            ),
        });
    }

    (start..=end)
        .step_by(step as usize)
        .map(|wave| {
            let w = f64::from(wave);
            Ok(EnemyStatRow {
                wave,
                hp: calculate_enemy_hp(w, descriptor)?,
                dmg: calculate_enemy_dmg(w, descriptor)?,
            })
        })
        .collect()
}

/// Renders rows as a fixed-width table suitable for a code block.
///
/// # Errors
/// Only fails if writing to the buffer fails.
pub fn format_wave_table(rows: &[EnemyStatRow], precision: usize) -> Result<String> {
    let mut table = String::new();
    writeln!(table, "{:>6} | {:>12} | {:>12}", "Wave", "HP", "DMG")?;
    writeln!(table, "{}", "-".repeat(6 + 3 + 12 + 3 + 12))?;
    for row in rows {
        writeln!(
            table,
            "{:>6} | {:>12} | {:>12}",
            row.wave,
            format_number_output(row.hp, precision),
            format_number_output(row.dmg, precision)
        )?;
    }
    Ok(table)
}

/// Collects the wave-independent scaling factors of a tier.
///
/// # Errors
/// Fails only when `tier` is an invalid token.
pub fn tier_summary<'a>(tier: impl Into<TierInput<'a>>) -> Result<TierSummary> {
    let descriptor = resolve_tier(tier)?;
    Ok(TierSummary {
        descriptor,
        hp_exponent: calculate_hp_exponent(descriptor)?,
        dmg_exponent: calculate_dmg_exponent(descriptor)?,
        difficulty: tier_difficulty(&descriptor),
        dmg_divisor: dmg_divisor(descriptor.tier()),
    })
}
