//! User settings business logic.
//!
//! Stores per-user preferences (default tier, display precision) as key-value rows in
//! the `user_settings` table. Stored values are re-validated on read so that a row
//! written by an older version can never feed an invalid tier into the calculations.

use crate::{
    config::app::BotConfig,
    core::tier::{TierDescriptor, parse_tier},
    entities::{UserSetting, user_setting},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{Set, prelude::*};

/// Key of the user's default tier token.
pub const DEFAULT_TIER_KEY: &str = "default_tier";
/// Key of the user's number display precision.
pub const PRECISION_KEY: &str = "precision";

/// Effective preferences of one user, with bot defaults filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserPreferences {
    /// Tier used when a command is run without one
    pub default_tier: Option<TierDescriptor>,
    /// Decimal places shown on suffixed numbers
    pub precision: usize,
}

/// Reads a single setting value for a user.
///
/// # Errors
/// Returns [`Error::Database`] on query failure.
pub async fn get_setting<C>(db: &C, user_id: &str, key: &str) -> Result<Option<String>>
where
    C: ConnectionTrait,
{
    let setting = UserSetting::find()
        .filter(user_setting::Column::UserId.eq(user_id))
        .filter(user_setting::Column::Key.eq(key))
        .one(db)
        .await?;
    Ok(setting.map(|s| s.value))
}

/// Inserts or updates a setting value for a user.
///
/// # Errors
/// Returns [`Error::Database`] on query failure.
pub async fn set_setting<C>(db: &C, user_id: &str, key: &str, value: &str) -> Result<()>
where
    C: ConnectionTrait,
{
    let now = Utc::now().naive_utc();

    let existing = UserSetting::find()
        .filter(user_setting::Column::UserId.eq(user_id))
        .filter(user_setting::Column::Key.eq(key))
        .one(db)
        .await?;

    if let Some(setting) = existing {
        let mut active_model: user_setting::ActiveModel = setting.into();
        active_model.value = Set(value.to_string());
        active_model.updated_at = Set(now);
        active_model.update(db).await?;
    } else {
        let new_setting = user_setting::ActiveModel {
            user_id: Set(user_id.to_string()),
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };
        new_setting.insert(db).await?;
    }

    Ok(())
}

/// Removes every stored setting of a user, returning how many rows were deleted.
///
/// # Errors
/// Returns [`Error::Database`] on query failure.
pub async fn clear_settings<C>(db: &C, user_id: &str) -> Result<u64>
where
    C: ConnectionTrait,
{
    let result = UserSetting::delete_many()
        .filter(user_setting::Column::UserId.eq(user_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Loads a user's preferences, falling back to the bot defaults.
///
/// Stored values that no longer parse or exceed the configured maximum are ignored
/// and logged.
///
/// # Errors
/// Returns [`Error::Database`] on query failure.
pub async fn get_user_preferences<C>(
    db: &C,
    user_id: &str,
    config: &BotConfig,
) -> Result<UserPreferences>
where
    C: ConnectionTrait,
{
    let default_tier = match get_setting(db, user_id, DEFAULT_TIER_KEY).await? {
        Some(token) => parse_tier(&token)
            .inspect_err(|e| {
                tracing::warn!(user_id, %token, "ignoring stored default tier: {e}");
            })
            .ok(),
        None => None,
    };

    let precision = get_setting(db, user_id, PRECISION_KEY)
        .await?
        .and_then(|value| match value.parse::<usize>() {
            Ok(precision) if precision <= config.max_precision => Some(precision),
            _ => {
                tracing::warn!(user_id, %value, "ignoring stored precision");
                None
            }
        })
        .unwrap_or(config.default_precision);

    Ok(UserPreferences {
        default_tier,
        precision,
    })
}

/// Validates and stores a user's default tier.
///
/// # Errors
/// Tier parse errors, or [`Error::Database`] on write failure.
pub async fn set_default_tier<C>(db: &C, user_id: &str, token: &str) -> Result<TierDescriptor>
where
    C: ConnectionTrait,
{
    let descriptor = parse_tier(token.trim())?;
    set_setting(db, user_id, DEFAULT_TIER_KEY, &descriptor.to_string()).await?;
    Ok(descriptor)
}

/// Validates and stores a user's display precision.
///
/// # Errors
/// [`Error::Config`] when `precision` exceeds the configured maximum, or
/// [`Error::Database`] on write failure.
pub async fn set_precision<C>(
    db: &C,
    user_id: &str,
    precision: usize,
    config: &BotConfig,
) -> Result<()>
where
    C: ConnectionTrait,
{
    if precision > config.max_precision {
        return Err(Error::Config {
            message: format!(
                "Precision {precision} is too large, maximum is {}",
                config.max_precision
            ),
        });
    }
    set_setting(db, user_id, PRECISION_KEY, &precision.to_string()).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_get_missing_setting() -> Result<()> {
        let db = setup_test_db().await?;
        assert_eq!(get_setting(&db, "user1", DEFAULT_TIER_KEY).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_set_setting_upserts() -> Result<()> {
        let db = setup_test_db().await?;

        set_setting(&db, "user1", "custom", "a").await?;
        set_setting(&db, "user1", "custom", "b").await?;

        assert_eq!(
            get_setting(&db, "user1", "custom").await?,
            Some("b".to_string())
        );
        let rows = UserSetting::find().all(&db).await?;
        assert_eq!(rows.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_settings_are_per_user() -> Result<()> {
        let db = setup_test_db().await?;

        set_default_tier(&db, "user1", "8+").await?;
        set_default_tier(&db, "user2", "12").await?;

        let config = test_bot_config();
        let first = get_user_preferences(&db, "user1", &config).await?;
        let second = get_user_preferences(&db, "user2", &config).await?;
        assert_eq!(first.default_tier.unwrap().to_string(), "8+");
        assert_eq!(second.default_tier.unwrap().to_string(), "12");
        Ok(())
    }

    #[tokio::test]
    async fn test_set_default_tier_validates() -> Result<()> {
        let db = setup_test_db().await?;

        let result = set_default_tier(&db, "user1", "2+").await;
        assert!(matches!(result, Err(Error::InvalidTournamentTier { tier: 2 })));
        assert_eq!(get_setting(&db, "user1", DEFAULT_TIER_KEY).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_preferences_fall_back_to_defaults() -> Result<()> {
        let db = setup_test_db().await?;
        let config = test_bot_config();

        let prefs = get_user_preferences(&db, "nobody", &config).await?;
        assert_eq!(prefs.default_tier, None);
        assert_eq!(prefs.precision, config.default_precision);
        Ok(())
    }

    #[tokio::test]
    async fn test_preferences_ignore_invalid_stored_values() -> Result<()> {
        let db = setup_test_db().await?;
        let config = test_bot_config();

        set_setting(&db, "user1", DEFAULT_TIER_KEY, "42").await?;
        set_setting(&db, "user1", PRECISION_KEY, "99").await?;

        let prefs = get_user_preferences(&db, "user1", &config).await?;
        assert_eq!(prefs.default_tier, None);
        assert_eq!(prefs.precision, config.default_precision);
        Ok(())
    }

    #[tokio::test]
    async fn test_set_precision() -> Result<()> {
        let db = setup_test_db().await?;
        let config = test_bot_config();

        set_precision(&db, "user1", 4, &config).await?;
        assert_eq!(
            get_user_preferences(&db, "user1", &config).await?.precision,
            4
        );

        let too_big = set_precision(&db, "user1", config.max_precision + 1, &config).await;
        assert!(matches!(too_big, Err(Error::Config { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_clear_settings() -> Result<()> {
        let db = setup_test_db().await?;
        let config = test_bot_config();

        set_default_tier(&db, "user1", "5").await?;
        set_precision(&db, "user1", 3, &config).await?;
        set_default_tier(&db, "user2", "6").await?;

        assert_eq!(clear_settings(&db, "user1").await?, 2);
        assert_eq!(get_setting(&db, "user1", PRECISION_KEY).await?, None);
        assert!(get_setting(&db, "user2", DEFAULT_TIER_KEY).await?.is_some());
        Ok(())
    }
}
