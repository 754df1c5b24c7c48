use crate::core::ConfigProvider;
use crate::domain::model::Design;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-compare")]
#[command(about = "A small CLI tool for custom string equivalence checks")]
pub struct CliConfig {
    /// First string, matched against the rule
    #[arg(value_name = "STRING1")]
    pub left: Option<String>,

    /// Second string, defines the rule
    #[arg(value_name = "STRING2")]
    pub right: Option<String>,

    /// Which comparison rules to apply
    #[arg(long, value_enum, default_value = "weighted")]
    pub design: Design,

    #[arg(long, help = "Print the comparison report as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn left(&self) -> &str {
        self.left.as_deref().unwrap_or("")
    }

    fn right(&self) -> &str {
        self.right.as_deref().unwrap_or("")
    }

    fn design(&self) -> Design {
        self.design
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_required_field("STRING1", &self.left)?;
        validate_required_field("STRING2", &self.right)?;
        Ok(())
    }
}
