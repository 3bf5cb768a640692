//! Autocomplete handlers for Discord slash command parameters.

use crate::{bot::BotData, core::tier, errors::Error};

/// Provides autocomplete suggestions for tier tokens.
///
/// Suggests every valid token (`1`-`18`, then the tournament tiers) that starts with
/// what the user has typed so far.
///
/// # Arguments
/// * `_ctx` - The poise context (unused, but required by poise signature)
/// * `partial` - The partial string the user has typed so far
pub async fn autocomplete_tier(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    matching_tier_tokens(partial)
}

/// Valid tier tokens starting with `partial`, capped at Discord's 25 choices.
#[must_use]
pub fn matching_tier_tokens(partial: &str) -> Vec<String> {
    let partial = partial.trim();
    tier::valid_tier_tokens()
        .into_iter()
        .filter(|token| token.starts_with(partial))
        .take(25) // Discord autocomplete limit
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_partial_lists_all_tokens() {
        let tokens = matching_tier_tokens("");
        assert_eq!(tokens.len(), 24);
        assert_eq!(tokens[0], "1");
        assert_eq!(tokens[23], "14+");
    }

    #[test]
    fn test_prefix_filter() {
        assert_eq!(
            matching_tier_tokens("1"),
            vec![
                "1", "10", "11", "12", "13", "14", "15", "16", "17", "18", "1+", "11+", "14+"
            ]
        );
        assert_eq!(matching_tier_tokens("8"), vec!["8", "8+"]);
        assert!(matching_tier_tokens("x").is_empty());
    }
}
