//! Settings Discord commands - per-user default tier and precision.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::settings,
        errors::{Error, Result},
    };

    /// Parent command for personal preferences.
    #[poise::command(
        slash_command,
        subcommands("settings_tier", "settings_precision", "settings_show", "settings_reset")
    )]
    pub async fn settings(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Settings command. Available subcommands:\n\
            `/settings tier` - Set your default tier\n\
            `/settings precision` - Set decimal places on large numbers\n\
            `/settings show` - Show your settings\n\
            `/settings reset` - Forget all your settings";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Sets the tier used when a command is run without one.
    #[poise::command(slash_command, rename = "tier")]
    pub async fn settings_tier(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Tier, e.g. 12 or 8+ for tournament"]
        #[autocomplete = "autocomplete::autocomplete_tier"]
        tier: String,
    ) -> Result<()> {
        let user_id = ctx.author().id.to_string();
        let db = &ctx.data().database;

        match settings::set_default_tier(db, &user_id, &tier).await {
            Ok(descriptor) => {
                tracing::info!(%user_id, %descriptor, "default tier updated");
                ctx.say(format!("✅ Default tier set to **{descriptor}**"))
                    .await?;
            }
            Err(e @ Error::Database(_)) => {
                tracing::error!("Failed to store default tier: {e}");
                return Err(e);
            }
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
            }
        }
        Ok(())
    }

    /// Sets how many decimal places large numbers are shown with.
    #[poise::command(slash_command, rename = "precision")]
    pub async fn settings_precision(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Decimal places (e.g. 2 shows 1.23M)"] precision: u32,
    ) -> Result<()> {
        let user_id = ctx.author().id.to_string();
        let data = ctx.data();
        let precision = usize::try_from(precision).unwrap_or(usize::MAX);

        match settings::set_precision(&data.database, &user_id, precision, &data.config.bot).await
        {
            Ok(()) => {
                ctx.say(format!("✅ Precision set to **{precision}**"))
                    .await?;
            }
            Err(e @ Error::Config { .. }) => {
                ctx.say(format!("❌ {e}")).await?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Shows your stored settings.
    #[poise::command(slash_command, rename = "show")]
    pub async fn settings_show(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user_id = ctx.author().id.to_string();
        let data = ctx.data();
        let prefs =
            settings::get_user_preferences(&data.database, &user_id, &data.config.bot).await?;

        let tier = prefs
            .default_tier
            .map_or_else(|| "not set".to_string(), |tier| tier.to_string());
        ctx.say(format!(
            "⚙️ **Your settings**\nDefault tier: **{tier}**\nPrecision: **{}**",
            prefs.precision
        ))
        .await?;
        Ok(())
    }

    /// Forgets all your stored settings.
    #[poise::command(slash_command, rename = "reset")]
    pub async fn settings_reset(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user_id = ctx.author().id.to_string();
        let removed = settings::clear_settings(&ctx.data().database, &user_id).await?;

        if removed == 0 {
            ctx.say("ℹ️ You have no stored settings.").await?;
        } else {
            ctx.say("✅ Your settings were reset to the defaults.")
                .await?;
        }
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
