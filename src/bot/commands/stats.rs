//! Enemy stat Discord commands - `enemystats`, `wavetable`, `tierinfo` and `notation`.
//!
//! These commands parse user input through the core modules and render the results
//! as embeds. Validation errors from the core are shown to the user as replies.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::{
            enemy, notation,
            report::{self, TierSummary},
            settings,
            tier::TierDescriptor,
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;

    const ENEMY_STATS_COLOR: u32 = 0x00E6_7E22;
    const TIER_INFO_COLOR: u32 = 0x0034_98DB;

    /// Resolves the tier to use: the explicit argument, else the user's default.
    async fn tier_or_default(
        ctx: poise::Context<'_, BotData, Error>,
        tier: Option<String>,
        default_tier: Option<TierDescriptor>,
    ) -> Result<Option<String>> {
        if let Some(tier) = tier {
            return Ok(Some(tier.trim().to_string()));
        }
        if let Some(default_tier) = default_tier {
            return Ok(Some(default_tier.to_string()));
        }

        ctx.say("❌ No tier given and no default tier set. Pass `tier` or use `/settings tier`.")
            .await?;
        Ok(None)
    }

    /// Shows enemy health and damage at a wave, with optional life skips.
    ///
    /// Numbers accept suffix notation such as `4.5K`. Without a tier the user's
    /// default tier from `/settings tier` is used.
    #[poise::command(slash_command, prefix_command, rename = "enemystats")]
    pub async fn enemy_stats(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Target wave (e.g. 4500 or 4.5K)"] wave: String,
        #[description = "Tier, e.g. 12 or 8+ for tournament"]
        #[autocomplete = "autocomplete::autocomplete_tier"]
        tier: Option<String>,
        #[description = "Enemy attack level skips (EALS)"] attack_skips: Option<String>,
        #[description = "Enemy health level skips (EHLS)"] health_skips: Option<String>,
    ) -> Result<()> {
        let user_id = ctx.author().id.to_string();
        tracing::info!(%user_id, %wave, ?tier, "enemystats invoked");

        let data = ctx.data();
        let prefs = settings::get_user_preferences(&data.database, &user_id, &data.config.bot)
            .await?;
        let Some(tier) = tier_or_default(ctx, tier, prefs.default_tier).await? else {
            return Ok(());
        };

        let report = enemy::enemy_stat_finder_wave(
            tier.as_str(),
            wave.as_str(),
            attack_skips.as_deref().unwrap_or("0"),
            health_skips.as_deref().unwrap_or("0"),
            prefs.precision,
        );

        if report.starts_with("Error: ") {
            ctx.say(format!("❌ {report}")).await?;
            return Ok(());
        }

        let embed = serenity::CreateEmbed::default()
            .title(format!("👾 Enemy Stats - Tier {tier}"))
            .description(format!("```\n{report}\n```"))
            .color(ENEMY_STATS_COLOR);

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows enemy health and damage across a range of waves.
    ///
    /// Without a step the range is split into the configured number of rows.
    #[poise::command(slash_command, prefix_command, rename = "wavetable")]
    pub async fn wave_table(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Tier, e.g. 12 or 8+ for tournament"]
        #[autocomplete = "autocomplete::autocomplete_tier"]
        tier: String,
        #[description = "First wave"] start: u32,
        #[description = "Last wave"] end: u32,
        #[description = "Waves between rows"] step: Option<u32>,
    ) -> Result<()> {
        let user_id = ctx.author().id.to_string();
        tracing::info!(%user_id, %tier, start, end, ?step, "wavetable invoked");

        let data = ctx.data();
        let bot_config = &data.config.bot;
        let prefs = settings::get_user_preferences(&data.database, &user_id, bot_config).await?;

        let step = step.unwrap_or_else(|| default_step(start, end, bot_config.wave_table_rows));
        let rows = match report::generate_wave_table(
            tier.as_str(),
            start,
            end,
            step,
            bot_config.max_wave_table_rows,
        ) {
            Ok(rows) => rows,
            Err(e @ (Error::Database(_) | Error::FrameworkError(_))) => return Err(e),
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        let table = report::format_wave_table(&rows, prefs.precision)?;
        let embed = serenity::CreateEmbed::default()
            .title(format!("📈 Waves {start}-{end} - Tier {tier}"))
            .description(format!("```\n{table}```"))
            .color(ENEMY_STATS_COLOR)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "{} row{} | step {step}",
                rows.len(),
                if rows.len() == 1 { "" } else { "s" }
            )));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Step that splits `start..=end` into roughly `rows` rows.
    fn default_step(start: u32, end: u32, rows: usize) -> u32 {
        let rows = u32::try_from(rows.max(2)).unwrap_or(u32::MAX);
        (end.saturating_sub(start) / (rows - 1)).max(1)
    }

    /// Shows the wave-independent scaling factors of a tier.
    #[poise::command(slash_command, prefix_command, rename = "tierinfo")]
    pub async fn tier_info(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Tier, e.g. 12 or 8+ for tournament"]
        #[autocomplete = "autocomplete::autocomplete_tier"]
        tier: String,
    ) -> Result<()> {
        let summary = match report::tier_summary(tier.trim()) {
            Ok(summary) => summary,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        let embed = tier_info_embed(&summary);
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    fn tier_info_embed(summary: &TierSummary) -> serenity::CreateEmbed {
        let mode = if summary.descriptor.is_tournament() {
            "Tournament"
        } else {
            "Normal"
        };

        serenity::CreateEmbed::default()
            .title(format!("🏰 Tier {}", summary.descriptor))
            .description(format!("Mode: **{mode}**"))
            .color(TIER_INFO_COLOR)
            .fields(vec![
                (
                    "HP Exponent",
                    format!("{:.3}", summary.hp_exponent),
                    true,
                ),
                (
                    "DMG Exponent",
                    format!("{:.3}", summary.dmg_exponent),
                    true,
                ),
                (
                    "Difficulty",
                    notation::format_number_output(summary.difficulty, 2),
                    true,
                ),
                (
                    "DMG Divisor",
                    notation::format_number_output(summary.dmg_divisor, 2),
                    true,
                ),
            ])
    }

    /// Converts between plain numbers and suffix notation.
    #[poise::command(slash_command, prefix_command)]
    pub async fn notation(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Number such as 1234567, 1.5e9 or 3.2AB"] value: String,
        #[description = "Decimal places"] precision: Option<u32>,
    ) -> Result<()> {
        let data = ctx.data();
        let precision = precision.map_or(data.config.bot.default_precision, |p| {
            usize::try_from(p).unwrap_or(usize::MAX)
        });
        if precision > data.config.bot.max_precision {
            ctx.say(format!(
                "❌ Precision must be at most {}",
                data.config.bot.max_precision
            ))
            .await?;
            return Ok(());
        }

        match notation::parse_number_input(value.as_str()) {
            Ok(number) => {
                ctx.say(format!(
                    "🔢 `{}` = **{}** ({number:e})",
                    value.trim(),
                    notation::format_number_output(number, precision)
                ))
                .await?;
            }
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
            }
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_default_step_splits_range() {
            assert_eq!(default_step(1, 1000, 10), 111);
            assert_eq!(default_step(100, 100, 10), 1);
            assert_eq!(default_step(1, 5, 10), 1);
            assert_eq!(default_step(1, 101, 1), 100);
        }
    }
}

// Re-export all commands
pub use inner::*;
