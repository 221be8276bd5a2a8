//! Core types for the marquee box-office evaluation toolkit.
//!
//! This crate defines the observation frame ([`Frame`]), the dataset-scope
//! configuration ([`DatasetConfig`]), the curated title catalogs, the error
//! type ([`EvalError`]), and the tracing conventions shared by every other
//! crate in the workspace. It has minimal external dependencies and is
//! intended to be depended on by all of them.

pub mod config;
pub mod error;
pub mod frame;
pub mod titles;
pub mod tracing_config;

pub use config::{DatasetConfig, DatasetScope, DATASET_END_YEAR};
pub use error::{EvalError, EvalResult};
pub use frame::{columns, Column, Frame};
pub use titles::{
    pattern_group, PatternGroup, TitleCatalog, ALL_LIVE_ACTION_REMAKES, ALL_SUPERHERO_FILMS,
    DC_FILMS, DISNEY_LIVE_ACTION_REMAKES, FAST_FURIOUS_FILMS, FRANCHISE_SEQUELS,
    MARVEL_MCU_FILMS, MEDIA_ADAPTATIONS, NON_MCU_SUPERHERO_FILMS, OTHER_LIVE_ACTION_REMAKES,
    REMAKE_PATTERNS, REMAKE_TITLE_INDICATORS, STAR_WARS_FILMS, WIZARDING_WORLD_FILMS,
};
