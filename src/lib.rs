pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::engine::CompareEngine;
pub use crate::core::{prefix_count::PrefixCountComparator, weighted::WeightedComparator};
pub use crate::domain::model::{ComparisonReport, Design, ParsedPattern};
pub use crate::domain::ports::{Comparator, ConfigProvider};
pub use crate::utils::error::{CompareError, Result};
