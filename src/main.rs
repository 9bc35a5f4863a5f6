use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use cardlink::config::card_file::CardFile;
use cardlink::utils::{logger, validation::Validate};
use cardlink::{
    encode_contact, vcf_file_name, BioSuggestionClient, CardField, CardGateway, CliConfig,
    HttpDocumentStore,
};

#[derive(Parser)]
#[command(name = "cardlink")]
#[command(about = "Publish and fetch digital business cards")]
struct Cli {
    #[command(flatten)]
    config: CliConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Publish a card described in a TOML file under its custom link
    Publish {
        /// Path to the card TOML file
        #[arg(short, long)]
        card: PathBuf,

        /// Also write a vCard export next to the publish
        #[arg(long)]
        vcf: Option<PathBuf>,

        /// Ask the text-generation service for a bio before publishing
        #[arg(long)]
        suggest_bio: bool,
    },
    /// Fetch a published card by slug
    Fetch {
        slug: String,

        /// Print the raw stored document instead of a summary
        #[arg(long)]
        json: bool,

        /// Write a vCard export of the fetched card
        #[arg(long)]
        vcf: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.config.verbose);

    if let Err(e) = cli.config.validate() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = HttpDocumentStore::with_timeout(
        &cli.config.store_endpoint,
        &cli.config.collection,
        Duration::from_secs(cli.config.timeout_seconds),
    );
    let gateway = CardGateway::new(store, &cli.config.public_origin);

    match cli.command {
        Command::Publish {
            card,
            vcf,
            suggest_bio,
        } => {
            let card_file = CardFile::from_file(&card)
                .with_context(|| format!("failed to load card file {}", card.display()))?;
            let mut record = card_file.into_card();

            if suggest_bio {
                // Capability decided once: no credential means no call at all.
                match BioSuggestionClient::from_env(&cli.config.bio_endpoint) {
                    Some(client) => {
                        let text = client
                            .suggest_bio(
                                &record.name,
                                &record.title,
                                &record.company,
                                "Professional, minimalist, friendly",
                            )
                            .await;
                        record.set_field(CardField::Bio, &text);
                        println!("💬 Suggested bio: {}", text);
                    }
                    None => {
                        println!("💬 {}", cardlink::core::bio::BIO_PLACEHOLDER);
                    }
                }
            }

            let receipt = match gateway.publish(&record).await {
                Ok(receipt) => receipt,
                Err(e) => {
                    eprintln!("❌ Failed to publish card: {}", e);
                    std::process::exit(1);
                }
            };
            println!("✅ Card published at {}", receipt.share_url);
            tracing::info!("Published '{}' at {}", receipt.slug, receipt.published_at);

            if let Some(path) = vcf {
                std::fs::write(&path, encode_contact(&record))?;
                println!("📇 Contact export written to {}", path.display());
            }
        }
        Command::Fetch { slug, json, vcf } => {
            let record = match gateway.fetch(&slug).await {
                Ok(Some(record)) => record,
                Ok(None) => {
                    eprintln!("Card not found.");
                    eprintln!(
                        "Create your own at {}",
                        cli.config.public_origin.trim_end_matches('/')
                    );
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("❌ Failed to load card: {}", e);
                    std::process::exit(1);
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{} — {}", record.name, record.title);
                if !record.company.is_empty() {
                    println!("{}", record.company);
                }
                if !record.location.is_empty() {
                    println!("{}", record.location);
                }
                for link in &record.social_links {
                    println!("  {}: {}", link.platform, link.url);
                }
            }

            if let Some(path) = vcf {
                std::fs::write(&path, encode_contact(&record))?;
                println!("📇 Saved as {} ({})", path.display(), vcf_file_name(&record));
            }
        }
    }

    Ok(())
}
