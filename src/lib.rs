pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::{HttpDocumentStore, InMemoryStore};
pub use crate::core::bio::BioSuggestionClient;
pub use crate::core::gateway::{CardGateway, PublishReceipt};
pub use crate::core::vcard::{encode_contact, vcf_file_name};
pub use crate::domain::model::{CardField, CardRecord, SocialLink};
pub use crate::domain::ports::CardStore;
pub use crate::domain::slug::{is_valid_slug, normalize_slug};
pub use crate::utils::error::{CardError, Result};
