//! User setting entity - per-user key-value preferences.
//!
//! Each row stores one preference (e.g. `"default_tier"`) for one Discord user.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User setting database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_settings")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord user ID the setting belongs to
    pub user_id: String,
    /// Setting key (e.g., `"default_tier"`, `"precision"`)
    pub key: String,
    /// Setting value stored as string
    pub value: String,
    /// When this setting was last modified
    pub updated_at: DateTime,
}

/// `UserSetting` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
