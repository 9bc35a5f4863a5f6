use crate::domain::slug::normalize_slug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One social profile shown on the card. Vec order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub platform: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(platform: &str, url: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            platform: platform.to_string(),
            url: url.to_string(),
        }
    }
}

/// The complete set of fields describing one digital business card.
/// Serialized with camelCase names so the stored document keeps the shape
/// the public viewer expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub name: String,
    pub title: String,
    pub company: String,
    pub bio: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub location: String,
    pub theme_color: String,
    pub secondary_color: String,
    pub profile_image: String,
    pub banner_image: String,
    pub social_links: Vec<SocialLink>,
    pub slug: String,
}

/// Names every directly editable string field of a [`CardRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Name,
    Title,
    Company,
    Bio,
    Phone,
    Email,
    Website,
    Location,
    ThemeColor,
    SecondaryColor,
    ProfileImage,
    BannerImage,
    Slug,
}

impl CardRecord {
    /// Field-level update: every field stores the value verbatim except
    /// `Slug`, which is normalized on the way in. The record can never hold
    /// a slug with characters outside `[a-z0-9-]`, doubled hyphens, or
    /// leading/trailing hyphens.
    pub fn set_field(&mut self, field: CardField, value: &str) {
        let slot = match field {
            CardField::Name => &mut self.name,
            CardField::Title => &mut self.title,
            CardField::Company => &mut self.company,
            CardField::Bio => &mut self.bio,
            CardField::Phone => &mut self.phone,
            CardField::Email => &mut self.email,
            CardField::Website => &mut self.website,
            CardField::Location => &mut self.location,
            CardField::ThemeColor => &mut self.theme_color,
            CardField::SecondaryColor => &mut self.secondary_color,
            CardField::ProfileImage => &mut self.profile_image,
            CardField::BannerImage => &mut self.banner_image,
            CardField::Slug => {
                self.slug = normalize_slug(value);
                return;
            }
        };
        *slot = value.to_string();
    }

    /// Appends an empty link on the first preset platform and returns its id.
    pub fn add_social_link(&mut self) -> String {
        let link = SocialLink::new(crate::domain::presets::SOCIAL_PLATFORMS[0], "");
        let id = link.id.clone();
        self.social_links.push(link);
        id
    }

    pub fn update_social_link(&mut self, id: &str, field: SocialLinkField, value: &str) {
        if let Some(link) = self.social_links.iter_mut().find(|l| l.id == id) {
            match field {
                SocialLinkField::Platform => link.platform = value.to_string(),
                SocialLinkField::Url => link.url = value.to_string(),
            }
        }
    }

    pub fn remove_social_link(&mut self, id: &str) {
        self.social_links.retain(|l| l.id != id);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialLinkField {
    Platform,
    Url,
}
