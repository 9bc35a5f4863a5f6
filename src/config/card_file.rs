use crate::domain::model::{CardField, CardRecord, SocialLink};
use crate::utils::error::{CardError, Result};
use crate::utils::validation::{self, Validate};
use serde::Deserialize;
use std::path::Path;

/// A card described in a TOML file, the CLI's stand-in for the builder
/// form. Missing fields stay empty; colors fall back to the default theme.
#[derive(Debug, Clone, Deserialize)]
pub struct CardFile {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_theme_color")]
    pub theme_color: String,
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub banner_image: String,
    #[serde(default)]
    pub social_links: Vec<SocialEntry>,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialEntry {
    pub platform: String,
    pub url: String,
}

fn default_theme_color() -> String {
    "#4F46E5".to_string()
}

fn default_secondary_color() -> String {
    "#111827".to_string()
}

impl CardFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let processed = substitute_env_vars(&content);
        let card_file: CardFile =
            toml::from_str(&processed).map_err(|e| CardError::ConfigError {
                message: format!("card file parsing error: {}", e),
            })?;
        card_file.validate()?;
        Ok(card_file)
    }

    /// Builds the in-memory record. The slug goes through the normalizer
    /// like any other slug write; social link ids are generated here since
    /// the file has no stable ids to offer.
    pub fn into_card(self) -> CardRecord {
        let social_links = self
            .social_links
            .iter()
            .map(|entry| SocialLink::new(&entry.platform, &entry.url))
            .collect();

        let mut card = CardRecord {
            name: self.name,
            title: self.title,
            company: self.company,
            bio: self.bio,
            phone: self.phone,
            email: self.email,
            website: self.website,
            location: self.location,
            theme_color: self.theme_color,
            secondary_color: self.secondary_color,
            profile_image: self.profile_image,
            banner_image: self.banner_image,
            social_links,
            slug: String::new(),
        };
        card.set_field(CardField::Slug, &self.slug);
        card
    }
}

/// Replaces `${VAR_NAME}` with the environment value, leaving the literal
/// text in place when the variable is unset.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

impl Validate for CardFile {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("name", &self.name)?;
        validation::validate_hex_color("theme_color", &self.theme_color)?;
        validation::validate_hex_color("secondary_color", &self.secondary_color)?;
        if !self.profile_image.is_empty() {
            validation::validate_url("profile_image", &self.profile_image)?;
        }
        if !self.banner_image.is_empty() {
            validation::validate_url("banner_image", &self.banner_image)?;
        }
        Ok(())
    }
}
