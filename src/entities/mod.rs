//! Entity module - `SeaORM` entity definitions for the database.

pub mod user_setting;

pub use user_setting::{
    Column as UserSettingColumn, Entity as UserSetting, Model as UserSettingModel,
};
