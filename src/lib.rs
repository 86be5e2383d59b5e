//! NYC Finder CLI
//!
//! Web版と同じ検索コア（nyc-finder-common）をネイティブ環境で動かす。

pub mod browse;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod render;
pub mod source;
pub mod store;
