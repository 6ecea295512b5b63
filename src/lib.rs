//! Library entry for Kheti Guru: localization and keyword question routing.

pub mod assistant;
pub mod config;
pub mod i18n;
pub mod storage;
