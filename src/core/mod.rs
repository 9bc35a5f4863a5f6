pub mod bio;
pub mod gateway;
pub mod vcard;

pub use crate::domain::model::{CardField, CardRecord, SocialLink};
pub use crate::domain::ports::CardStore;
pub use crate::utils::error::Result;
pub use bio::BioSuggestionClient;
pub use gateway::{CardGateway, PublishReceipt};
