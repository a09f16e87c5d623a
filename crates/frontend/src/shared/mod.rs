pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod date_utils;
pub mod format;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod notices;
