use crate::domain::model::{CardRecord, SocialLink};

/// A preset color scheme the builder offers alongside free-form colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub bg: &'static str,
}

pub const THEMES: &[Theme] = &[
    Theme { id: "midnight", name: "Midnight Blue", primary: "#1E40AF", secondary: "#1e1b4b", bg: "#f8fafc" },
    Theme { id: "emerald", name: "Emerald Forest", primary: "#059669", secondary: "#064e3b", bg: "#f0fdf4" },
    Theme { id: "sunset", name: "Sunset Glow", primary: "#EA580C", secondary: "#7c2d12", bg: "#fffaf5" },
    Theme { id: "royal", name: "Royal Purple", primary: "#7C3AED", secondary: "#4c1d95", bg: "#f5f3ff" },
    Theme { id: "monochrome", name: "Sleek Onyx", primary: "#27272a", secondary: "#09090b", bg: "#ffffff" },
];

pub const SOCIAL_PLATFORMS: &[&str] = &[
    "LinkedIn", "Twitter", "Instagram", "GitHub", "YouTube", "Facebook", "TikTok", "WhatsApp",
];

/// The card a fresh editing session starts from.
pub fn sample_card() -> CardRecord {
    CardRecord {
        name: "Jane Doe".to_string(),
        title: "Senior Brand Architect".to_string(),
        company: "Creative Pulse Studios".to_string(),
        bio: "Passionate about building digital experiences that resonate. Helping brands \
              bridge the gap between imagination and reality through strategic design."
            .to_string(),
        phone: "+1 (555) 000-1234".to_string(),
        email: "jane@creativepulse.com".to_string(),
        website: "www.creativepulse.com".to_string(),
        location: "San Francisco, CA".to_string(),
        theme_color: "#4F46E5".to_string(),
        secondary_color: "#111827".to_string(),
        profile_image: "https://picsum.photos/seed/profile/400/400".to_string(),
        banner_image: "https://picsum.photos/seed/banner/800/400".to_string(),
        social_links: vec![
            SocialLink::new("LinkedIn", "https://linkedin.com"),
            SocialLink::new("Twitter", "https://twitter.com"),
            SocialLink::new("Instagram", "https://instagram.com"),
        ],
        slug: "jane-doe".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slug::is_valid_slug;

    #[test]
    fn test_sample_card_slug_is_valid() {
        assert!(is_valid_slug(&sample_card().slug));
    }

    #[test]
    fn test_theme_colors_are_hex() {
        for theme in THEMES {
            assert!(theme.primary.starts_with('#'));
            assert!(theme.secondary.starts_with('#'));
            assert!(theme.bg.starts_with('#'));
        }
    }
}
