use serde::{Deserialize, Serialize};

/// The fixed set of renderable section keys. `sections_enabled` entries are
/// stored as free strings so unknown keys survive round-trips; the renderer
/// ignores anything it cannot parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKey {
    Hero,
    About,
    HowItWorks,
    Testimonials,
    Pricing,
    Cta,
}

impl SectionKey {
    pub fn parse(key: &str) -> Option<SectionKey> {
        match key {
            "hero" => Some(SectionKey::Hero),
            "about" => Some(SectionKey::About),
            "how_it_works" => Some(SectionKey::HowItWorks),
            "testimonials" => Some(SectionKey::Testimonials),
            "pricing" => Some(SectionKey::Pricing),
            "cta" => Some(SectionKey::Cta),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Hero => "hero",
            SectionKey::About => "about",
            SectionKey::HowItWorks => "how_it_works",
            SectionKey::Testimonials => "testimonials",
            SectionKey::Pricing => "pricing",
            SectionKey::Cta => "cta",
        }
    }
}

pub fn canonical_section_order() -> Vec<String> {
    ["hero", "about", "how_it_works", "testimonials", "pricing", "cta"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HeroConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_primary_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_secondary_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImagePlacement {
    Left,
    Right,
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AboutConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_points: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_placement: Option<ImagePlacement>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HowItWorksStep {
    pub title: String,
    pub description: String,
    pub icon_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HowItWorksConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<HowItWorksStep>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialLayout {
    Slider,
    Grid,
    Single,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TestimonialsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<TestimonialLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_enabled: Option<bool>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PricingLayout {
    Cards,
    Table,
    Simple,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PricingDisplayConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_style: Option<PricingLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_comparison: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_tier: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ThemeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_pairing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_style: Option<String>,
}

/// Per-workspace landing page document. Every section is independently
/// optional: an absent section means "use the built-in default for that
/// section", while omission from the page is controlled solely by
/// `sections_enabled`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LandingPageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<AboutConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub how_it_works: Option<HowItWorksConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<TestimonialsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_display: Option<PricingDisplayConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections_enabled: Option<Vec<String>>,
}

impl LandingPageConfig {
    /// The document every workspace starts with.
    pub fn default_config() -> LandingPageConfig {
        LandingPageConfig {
            hero: Some(HeroConfig {
                headline: Some("Transform Your Life".to_string()),
                subheadline: Some("Elite coaching for high performers ready to level up".to_string()),
                cta_primary_text: Some("Start Your Journey".to_string()),
                cta_secondary_text: Some("Learn More".to_string()),
                background_style: Some("gradient".to_string()),
                hero_image_url: None,
            }),
            about: Some(AboutConfig {
                title: Some("About Your Coach".to_string()),
                description: Some("Experience transformation through proven coaching methodologies.".to_string()),
                bullet_points: Some(vec![
                    "Personalized coaching plans".to_string(),
                    "Weekly 1:1 sessions".to_string(),
                    "Progress tracking and accountability".to_string(),
                ]),
                image_placement: Some(ImagePlacement::Right),
            }),
            how_it_works: Some(HowItWorksConfig {
                title: Some("How It Works".to_string()),
                steps: Some(vec![
                    HowItWorksStep {
                        title: "Book Your Call".to_string(),
                        description: "Schedule a discovery session to discuss your goals".to_string(),
                        icon_name: "Calendar".to_string(),
                    },
                    HowItWorksStep {
                        title: "Get Your Plan".to_string(),
                        description: "Receive a personalized coaching roadmap".to_string(),
                        icon_name: "BookOpen".to_string(),
                    },
                    HowItWorksStep {
                        title: "Transform".to_string(),
                        description: "Execute with guidance and accountability".to_string(),
                        icon_name: "TrendingUp".to_string(),
                    },
                ]),
            }),
            testimonials: Some(TestimonialsConfig {
                layout: Some(TestimonialLayout::Slider),
                max_visible: Some(3),
                rotation_enabled: Some(true),
            }),
            pricing_display: Some(PricingDisplayConfig {
                layout_style: Some(PricingLayout::Cards),
                show_comparison: Some(false),
                highlight_tier: None,
            }),
            theme: Some(ThemeConfig {
                primary_color: Some("#3B82F6".to_string()),
                secondary_color: Some("#8B5CF6".to_string()),
                font_pairing: Some("inter".to_string()),
                button_style: Some("rounded".to_string()),
            }),
            sections_enabled: Some(canonical_section_order()),
        }
    }

    /// Section-granular merge against the built-in defaults: a section
    /// present in the stored document wholly replaces the default section,
    /// even when only partially populated. Individual fields are never
    /// backfilled across documents.
    pub fn merged_with_defaults(&self) -> LandingPageConfig {
        let defaults = Self::default_config();
        LandingPageConfig {
            hero: self.hero.clone().or(defaults.hero),
            about: self.about.clone().or(defaults.about),
            how_it_works: self.how_it_works.clone().or(defaults.how_it_works),
            testimonials: self.testimonials.clone().or(defaults.testimonials),
            pricing_display: self.pricing_display.clone().or(defaults.pricing_display),
            theme: self.theme.clone().or(defaults.theme),
            sections_enabled: self.sections_enabled.clone().or(defaults.sections_enabled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_is_section_granular() {
        let stored = LandingPageConfig {
            hero: Some(HeroConfig {
                headline: Some("X".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let effective = stored.merged_with_defaults();

        // A partially populated hero replaces the default hero entirely;
        // the missing subheadline must NOT be backfilled.
        let hero = effective.hero.unwrap();
        assert_eq!(hero.headline.as_deref(), Some("X"));
        assert_eq!(hero.subheadline, None);
        assert_eq!(hero.cta_primary_text, None);

        // Absent sections fall back to the full default section.
        let about = effective.about.unwrap();
        assert_eq!(about.title.as_deref(), Some("About Your Coach"));
        assert_eq!(about.bullet_points.unwrap().len(), 3);
    }

    #[test]
    fn test_merge_defaults_sections_enabled() {
        let stored = LandingPageConfig::default();
        let effective = stored.merged_with_defaults();
        assert_eq!(
            effective.sections_enabled.unwrap(),
            vec!["hero", "about", "how_it_works", "testimonials", "pricing", "cta"]
        );
    }

    #[test]
    fn test_merge_preserves_stored_section_order() {
        let stored = LandingPageConfig {
            sections_enabled: Some(vec!["cta".to_string(), "hero".to_string()]),
            ..Default::default()
        };
        let effective = stored.merged_with_defaults();
        assert_eq!(effective.sections_enabled.unwrap(), vec!["cta", "hero"]);
    }

    #[test]
    fn test_partial_hero_serializes_without_empty_fields() {
        let hero = HeroConfig {
            headline: Some("X".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&hero).unwrap();
        assert_eq!(json, serde_json::json!({ "headline": "X" }));
    }

    #[test]
    fn test_section_key_parsing() {
        assert_eq!(SectionKey::parse("how_it_works"), Some(SectionKey::HowItWorks));
        assert_eq!(SectionKey::parse("banner"), None);
        assert_eq!(SectionKey::Cta.as_str(), "cta");
    }
}
