// src/filtering/mod.rs

//! Provides the filters applied by the collector.
//!
//! `ExclusionSet` prunes directories during the walk; `ExtensionFilter` decides
//! which of the remaining files are collected.

mod exclusion;
mod extension;
mod file_type;

pub use exclusion::ExclusionSet;
pub use extension::ExtensionFilter;
pub(crate) use file_type::is_file_type;
