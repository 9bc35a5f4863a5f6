use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

/// Connection settings shared by every subcommand. The collection name and
/// public origin are deployment details, not part of the card contract.
#[derive(Debug, Clone, Parser)]
pub struct CliConfig {
    #[arg(long)]
    pub store_endpoint: String,

    #[arg(long, default_value = "cards")]
    pub collection: String,

    #[arg(long, default_value = "https://wbify.com")]
    pub public_origin: String,

    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    /// Text-generation endpoint; only used when the API credential env var
    /// is set.
    #[arg(
        long,
        default_value = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
    )]
    pub bio_endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("store_endpoint", &self.store_endpoint)?;
        validation::validate_url("public_origin", &self.public_origin)?;
        validation::validate_non_empty_string("collection", &self.collection)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        Ok(())
    }
}
