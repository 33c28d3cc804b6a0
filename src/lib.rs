// src/lib.rs

pub mod c_api;
pub mod config;
pub mod conformance;
pub mod core;
pub mod error;
pub mod learning;
pub mod persistence;

pub use crate::config::Config;
pub use crate::core::engine::{Normalizer, DEFAULT_OVERRIDES};
pub use crate::core::rules::{FrenchRules, TextRules};
pub use crate::core::store::{LookupStore, Table};
pub use crate::core::types::{ResolvedForm, Stage};
pub use crate::error::{NormError, Result};
