use serde::Serialize;

use crate::domain::models::landing::{
    HowItWorksStep, ImagePlacement, LandingPageConfig, PricingLayout, SectionKey,
    TestimonialLayout,
};
use crate::domain::models::pricing::PricingTier;
use crate::domain::models::testimonial::Testimonial;
use crate::domain::models::workspace::Workspace;

const DEFAULT_HERO_HEADLINE: &str = "Transform Your Life";
const DEFAULT_HERO_SUBHEADLINE: &str = "Elite coaching for high performers ready to level up";
const DEFAULT_CTA_PRIMARY: &str = "Get Started";
const DEFAULT_CTA_SECONDARY: &str = "Learn More";
const DEFAULT_CTA_HEADING: &str = "Ready to Transform?";
const DEFAULT_CTA_MESSAGE: &str =
    "Your transformation starts with a single decision. Get started today.";
const DEFAULT_CTA_BUTTON: &str = "Start Your Journey";

/// Theme resolved to plain data: configuration colors over workspace
/// branding colors. Threaded through the response instead of being applied
/// as a global side effect.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResolvedTheme {
    pub primary_color: String,
    pub secondary_color: String,
    pub font_pairing: String,
    pub button_style: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderedSection {
    Hero {
        headline: String,
        subheadline: String,
        cta_primary_text: String,
        cta_secondary_text: String,
        background_style: String,
        hero_image_url: Option<String>,
    },
    About {
        title: String,
        description: String,
        bullet_points: Vec<String>,
        image_placement: ImagePlacement,
    },
    HowItWorks {
        title: String,
        steps: Vec<HowItWorksStep>,
    },
    Testimonials {
        layout: TestimonialLayout,
        max_visible: u32,
        rotation_enabled: bool,
        entries: Vec<Testimonial>,
    },
    Pricing {
        layout_style: PricingLayout,
        show_comparison: bool,
        tiers: Vec<PricingTier>,
    },
    Cta {
        heading: String,
        message: String,
        button_text: String,
    },
}

impl RenderedSection {
    pub fn key(&self) -> SectionKey {
        match self {
            RenderedSection::Hero { .. } => SectionKey::Hero,
            RenderedSection::About { .. } => SectionKey::About,
            RenderedSection::HowItWorks { .. } => SectionKey::HowItWorks,
            RenderedSection::Testimonials { .. } => SectionKey::Testimonials,
            RenderedSection::Pricing { .. } => SectionKey::Pricing,
            RenderedSection::Cta { .. } => SectionKey::Cta,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RenderedPage {
    pub theme: ResolvedTheme,
    pub sections: Vec<RenderedSection>,
}

/// Slider position for rotating testimonials. Advancing wraps modulo the
/// testimonial count.
#[derive(Debug, Clone, Copy)]
pub struct TestimonialRotation {
    index: usize,
    count: usize,
}

impl TestimonialRotation {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> usize {
        if self.count > 0 {
            self.index = (self.index + 1) % self.count;
        }
        self.index
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Composes the ordered section list for a workspace's public page from its
/// effective configuration and live content. Sections walk
/// `sections_enabled` in stored order; testimonials and pricing are dropped
/// when their live content is empty, and unknown keys are skipped.
pub fn render(
    workspace: &Workspace,
    tiers: &[PricingTier],
    testimonials: &[Testimonial],
) -> RenderedPage {
    let config = workspace.landing_page_config.0.merged_with_defaults();
    let theme = resolve_theme(workspace, &config);

    let enabled = config.sections_enabled.clone().unwrap_or_default();
    let mut sections = Vec::with_capacity(enabled.len());

    for key in &enabled {
        let Some(key) = SectionKey::parse(key) else {
            continue;
        };

        match key {
            SectionKey::Hero => sections.push(render_hero(workspace, &config)),
            SectionKey::About => sections.push(render_about(&config)),
            SectionKey::HowItWorks => sections.push(render_how_it_works(&config)),
            SectionKey::Testimonials => {
                if !testimonials.is_empty() {
                    sections.push(render_testimonials(&config, testimonials));
                }
            }
            SectionKey::Pricing => {
                if !tiers.is_empty() {
                    sections.push(render_pricing(&config, tiers));
                }
            }
            SectionKey::Cta => sections.push(render_cta(workspace)),
        }
    }

    RenderedPage { theme, sections }
}

fn resolve_theme(workspace: &Workspace, config: &LandingPageConfig) -> ResolvedTheme {
    let theme = config.theme.clone().unwrap_or_default();
    ResolvedTheme {
        primary_color: theme.primary_color.unwrap_or_else(|| workspace.primary_color.clone()),
        secondary_color: theme
            .secondary_color
            .unwrap_or_else(|| workspace.secondary_color.clone()),
        font_pairing: theme.font_pairing.unwrap_or_else(|| "inter".to_string()),
        button_style: theme.button_style.unwrap_or_else(|| "rounded".to_string()),
    }
}

fn render_hero(workspace: &Workspace, config: &LandingPageConfig) -> RenderedSection {
    let hero = config.hero.clone().unwrap_or_default();

    // Field fallback chain: section config, then workspace branding, then
    // the hardcoded default.
    let subheadline = hero
        .subheadline
        .or_else(|| non_empty(&workspace.tagline).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_HERO_SUBHEADLINE.to_string());

    RenderedSection::Hero {
        headline: hero.headline.unwrap_or_else(|| DEFAULT_HERO_HEADLINE.to_string()),
        subheadline,
        cta_primary_text: hero
            .cta_primary_text
            .unwrap_or_else(|| DEFAULT_CTA_PRIMARY.to_string()),
        cta_secondary_text: hero
            .cta_secondary_text
            .unwrap_or_else(|| DEFAULT_CTA_SECONDARY.to_string()),
        background_style: hero.background_style.unwrap_or_else(|| "gradient".to_string()),
        hero_image_url: hero.hero_image_url,
    }
}

fn render_about(config: &LandingPageConfig) -> RenderedSection {
    let about = config.about.clone().unwrap_or_default();
    RenderedSection::About {
        title: about.title.unwrap_or_else(|| "About Your Coach".to_string()),
        description: about.description.unwrap_or_default(),
        bullet_points: about.bullet_points.unwrap_or_default(),
        image_placement: about.image_placement.unwrap_or(ImagePlacement::Right),
    }
}

fn render_how_it_works(config: &LandingPageConfig) -> RenderedSection {
    let how = config.how_it_works.clone().unwrap_or_default();
    RenderedSection::HowItWorks {
        title: how.title.unwrap_or_else(|| "How It Works".to_string()),
        steps: how.steps.unwrap_or_default(),
    }
}

fn render_testimonials(config: &LandingPageConfig, testimonials: &[Testimonial]) -> RenderedSection {
    let section = config.testimonials.clone().unwrap_or_default();
    RenderedSection::Testimonials {
        layout: section.layout.unwrap_or(TestimonialLayout::Slider),
        max_visible: section.max_visible.unwrap_or(3).max(1),
        // Rotation defaults on when the stored document says nothing.
        rotation_enabled: section.rotation_enabled.unwrap_or(true),
        entries: testimonials.to_vec(),
    }
}

fn render_pricing(config: &LandingPageConfig, tiers: &[PricingTier]) -> RenderedSection {
    let display = config.pricing_display.clone().unwrap_or_default();
    RenderedSection::Pricing {
        layout_style: display.layout_style.unwrap_or(PricingLayout::Cards),
        show_comparison: display.show_comparison.unwrap_or(false),
        tiers: tiers.to_vec(),
    }
}

fn render_cta(workspace: &Workspace) -> RenderedSection {
    RenderedSection::Cta {
        heading: DEFAULT_CTA_HEADING.to_string(),
        message: non_empty(&workspace.tagline)
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_CTA_MESSAGE.to_string()),
        button_text: DEFAULT_CTA_BUTTON.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::landing::HeroConfig;
    use sqlx::types::Json;

    fn workspace_with_config(config: LandingPageConfig) -> Workspace {
        let mut workspace = Workspace::new("Acme Coaching".into(), "acme-coaching".into(), None);
        workspace.landing_page_config = Json(config);
        workspace
    }

    fn tier(workspace_id: &str) -> PricingTier {
        PricingTier::new(workspace_id.to_string(), "Starter".into(), 99.0, 8)
    }

    fn approved_testimonial(workspace_id: &str) -> Testimonial {
        let mut t = Testimonial::new(workspace_id.to_string(), "Jamie".into(), "Changed my life".into());
        t.is_approved = true;
        t
    }

    #[test]
    fn test_rotation_wraps_modulo_count() {
        let mut rotation = TestimonialRotation::new(3);
        let mut seen = vec![rotation.current()];
        for _ in 0..5 {
            seen.push(rotation.advance());
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_rotation_on_empty_set_stays_put() {
        let mut rotation = TestimonialRotation::new(0);
        assert_eq!(rotation.advance(), 0);
    }

    #[test]
    fn test_sections_follow_enabled_order() {
        let config = LandingPageConfig {
            sections_enabled: Some(vec!["cta".into(), "hero".into(), "about".into()]),
            ..Default::default()
        };
        let workspace = workspace_with_config(config);
        let page = render(&workspace, &[], &[]);
        let keys: Vec<&str> = page.sections.iter().map(|s| s.key().as_str()).collect();
        assert_eq!(keys, vec!["cta", "hero", "about"]);
    }

    #[test]
    fn test_unknown_section_keys_are_ignored() {
        let config = LandingPageConfig {
            sections_enabled: Some(vec!["hero".into(), "banner".into(), "cta".into()]),
            ..Default::default()
        };
        let workspace = workspace_with_config(config);
        let page = render(&workspace, &[], &[]);
        let keys: Vec<&str> = page.sections.iter().map(|s| s.key().as_str()).collect();
        assert_eq!(keys, vec!["hero", "cta"]);
    }

    #[test]
    fn test_empty_live_content_drops_listed_sections() {
        let config = LandingPageConfig {
            sections_enabled: Some(vec![
                "hero".into(),
                "pricing".into(),
                "testimonials".into(),
                "cta".into(),
            ]),
            ..Default::default()
        };
        let workspace = workspace_with_config(config);
        let tiers = vec![tier(&workspace.id)];

        // One active tier, zero approved testimonials: testimonials is
        // dropped even though listed.
        let page = render(&workspace, &tiers, &[]);
        let keys: Vec<&str> = page.sections.iter().map(|s| s.key().as_str()).collect();
        assert_eq!(keys, vec!["hero", "pricing", "cta"]);
    }

    #[test]
    fn test_hero_subheadline_fallback_chain() {
        // Tier 1: explicit section config wins.
        let config = LandingPageConfig {
            hero: Some(HeroConfig {
                subheadline: Some("From config".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let mut workspace = workspace_with_config(config);
        workspace.tagline = "From tagline".into();
        let page = render(&workspace, &[], &[]);
        match &page.sections[0] {
            RenderedSection::Hero { subheadline, .. } => assert_eq!(subheadline, "From config"),
            other => panic!("expected hero, got {:?}", other),
        }

        // Tier 2: workspace branding field. The stored hero section exists
        // (so it replaced the default wholesale) but has no subheadline.
        let config = LandingPageConfig {
            hero: Some(HeroConfig::default()),
            ..Default::default()
        };
        let mut workspace = workspace_with_config(config);
        workspace.tagline = "From tagline".into();
        let page = render(&workspace, &[], &[]);
        match &page.sections[0] {
            RenderedSection::Hero { subheadline, .. } => assert_eq!(subheadline, "From tagline"),
            other => panic!("expected hero, got {:?}", other),
        }

        // Tier 3: hardcoded default.
        let config = LandingPageConfig {
            hero: Some(HeroConfig::default()),
            ..Default::default()
        };
        let workspace = workspace_with_config(config);
        let page = render(&workspace, &[], &[]);
        match &page.sections[0] {
            RenderedSection::Hero { subheadline, .. } => {
                assert_eq!(subheadline, DEFAULT_HERO_SUBHEADLINE)
            }
            other => panic!("expected hero, got {:?}", other),
        }
    }

    #[test]
    fn test_cta_message_falls_back_to_tagline_then_default() {
        let mut workspace = workspace_with_config(LandingPageConfig::default());
        workspace.tagline = "Be unstoppable".into();
        let page = render(&workspace, &[], &[]);
        let cta = page.sections.iter().find(|s| s.key() == SectionKey::Cta).unwrap();
        match cta {
            RenderedSection::Cta { message, .. } => assert_eq!(message, "Be unstoppable"),
            other => panic!("expected cta, got {:?}", other),
        }

        let workspace = workspace_with_config(LandingPageConfig::default());
        let page = render(&workspace, &[], &[]);
        let cta = page.sections.iter().find(|s| s.key() == SectionKey::Cta).unwrap();
        match cta {
            RenderedSection::Cta { message, .. } => assert_eq!(message, DEFAULT_CTA_MESSAGE),
            other => panic!("expected cta, got {:?}", other),
        }
    }

    #[test]
    fn test_theme_prefers_config_over_branding() {
        let mut workspace = workspace_with_config(LandingPageConfig::default_config());
        workspace.primary_color = "#111111".into();
        let page = render(&workspace, &[], &[]);
        // default_config carries its own theme colors.
        assert_eq!(page.theme.primary_color, "#3B82F6");

        // A stored-but-empty theme section replaces the default section, so
        // individual fields fall through to the workspace branding colors.
        let config = LandingPageConfig {
            theme: Some(crate::domain::models::landing::ThemeConfig::default()),
            ..Default::default()
        };
        let mut workspace = workspace_with_config(config);
        workspace.primary_color = "#111111".into();
        let page = render(&workspace, &[], &[]);
        assert_eq!(page.theme.primary_color, "#111111");
    }

    #[test]
    fn test_rotation_defaults_true_when_absent() {
        let config = LandingPageConfig {
            sections_enabled: Some(vec!["testimonials".into()]),
            ..Default::default()
        };
        let workspace = workspace_with_config(config);
        let testimonials = vec![approved_testimonial(&workspace.id)];
        let page = render(&workspace, &[], &testimonials);
        match &page.sections[0] {
            RenderedSection::Testimonials { rotation_enabled, .. } => assert!(*rotation_enabled),
            other => panic!("expected testimonials, got {:?}", other),
        }
    }
}
