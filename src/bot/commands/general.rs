//! General Discord commands - ping, help, and other utility commands.
//! This module contains simple commands that don't require database operations.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**Tower Companion Help**\n\
        Numbers accept suffixes: K, M, B, T, q, Q, s, S, O, N, D, AA-AJ (case-sensitive).\n\
        Tiers are `1`-`18`; tournament tiers are `1+`, `3+`, `5+`, `8+`, `11+`, `14+`.\n\n\
        **Enemy Stats**\n\
        • `/enemystats <wave> [tier] [attack_skips] [health_skips]` - Enemy HP and damage at a wave.\n\
        • `/wavetable <tier> <start> <end> [step]` - Enemy HP and damage over a wave range.\n\
        • `/tierinfo <tier>` - Exponents and difficulty multiplier of a tier.\n\
        • `/notation <value> [precision]` - Convert a number to suffix notation.\n\n\
        **Settings**\n\
        • `/settings tier|precision|show|reset` - Manage your defaults.\n\n\
        **Utility Commands**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
