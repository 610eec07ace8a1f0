use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::models::landing::{
    canonical_section_order, AboutConfig, HeroConfig, HowItWorksConfig, HowItWorksStep,
    ImagePlacement, LandingPageConfig, PricingDisplayConfig, PricingLayout, TestimonialLayout,
    TestimonialsConfig, ThemeConfig,
};
use crate::domain::ports::LlmService;

pub const DEFAULT_TONE: &str = "professional and motivational";
const DEFAULT_NICHE_LABEL: &str = "general coaching";

/// The prompt is only quoted into the about section when it carries enough
/// substance to read as a description.
const PROMPT_QUOTE_THRESHOLD: usize = 50;
const PROMPT_QUOTE_LEN: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoachingNiche {
    Fitness,
    Business,
    Mindset,
    Career,
    Relationships,
    Trauma,
    Spirituality,
    Life,
    Executive,
    Health,
}

impl CoachingNiche {
    pub fn label(&self) -> &'static str {
        match self {
            CoachingNiche::Fitness => "fitness",
            CoachingNiche::Business => "business",
            CoachingNiche::Mindset => "mindset",
            CoachingNiche::Career => "career",
            CoachingNiche::Relationships => "relationships",
            CoachingNiche::Trauma => "trauma",
            CoachingNiche::Spirituality => "spirituality",
            CoachingNiche::Life => "life",
            CoachingNiche::Executive => "executive",
            CoachingNiche::Health => "health",
        }
    }
}

fn system_prompt(tone: &str, niche_label: &str) -> String {
    format!(
        r#"You are an expert landing page copywriter specializing in coaching businesses.
Convert the user's coaching description into a structured landing page configuration.

Extract:
1. A compelling headline (5-10 words, benefit-focused)
2. A subheadline (15-25 words, explaining the transformation)
3. Primary CTA text (2-4 words, action-oriented)
4. Secondary CTA text (2-4 words)
5. About section (title, 2-3 sentence description, 3 bullet points)
6. How it works (3 steps with titles and descriptions)

Tone: {}
Niche: {}

Return valid JSON with this structure:
{{
  "hero": {{
    "headline": "string",
    "subheadline": "string",
    "cta_primary_text": "string",
    "cta_secondary_text": "string",
    "background_style": "gradient"
  }},
  "about": {{
    "title": "string",
    "description": "string",
    "bullet_points": ["string", "string", "string"],
    "image_placement": "right"
  }},
  "how_it_works": {{
    "title": "How It Works",
    "steps": [
      {{"title": "string", "description": "string", "icon_name": "Calendar"}},
      {{"title": "string", "description": "string", "icon_name": "BookOpen"}},
      {{"title": "string", "description": "string", "icon_name": "TrendingUp"}}
    ]
  }},
  "sections_enabled": ["hero", "about", "how_it_works", "testimonials", "pricing", "cta"]
}}"#,
        tone, niche_label
    )
}

/// Only hero/about/how_it_works come from the external API; the remaining
/// sections always use these fixed values.
fn fixed_tail_sections(config: &mut LandingPageConfig) {
    config.testimonials = Some(TestimonialsConfig {
        layout: Some(TestimonialLayout::Slider),
        max_visible: Some(3),
        rotation_enabled: Some(true),
    });
    config.pricing_display = Some(PricingDisplayConfig {
        layout_style: Some(PricingLayout::Cards),
        show_comparison: Some(false),
        highlight_tier: None,
    });
    config.theme = Some(ThemeConfig {
        primary_color: Some("#3B82F6".to_string()),
        secondary_color: Some("#8B5CF6".to_string()),
        font_pairing: Some("inter".to_string()),
        button_style: Some("rounded".to_string()),
    });
}

fn niche_hero(niche: CoachingNiche) -> HeroConfig {
    let (headline, subheadline, cta_primary, cta_secondary) = match niche {
        CoachingNiche::Fitness => (
            "Transform Your Fitness Journey",
            "Achieve your goals with personalized training and expert guidance",
            "Start Training",
            "View Programs",
        ),
        CoachingNiche::Business => (
            "Scale Your Business with Confidence",
            "Strategic coaching for entrepreneurs ready to break through plateaus",
            "Book Strategy Call",
            "Learn More",
        ),
        CoachingNiche::Mindset => (
            "Unlock Your Limitless Potential",
            "Transform limiting beliefs into unstoppable momentum",
            "Begin Transformation",
            "How It Works",
        ),
        CoachingNiche::Career => (
            "Navigate Your Career Transition",
            "Expert guidance to land your dream role and advance your career",
            "Start Your Journey",
            "View Success Stories",
        ),
        CoachingNiche::Relationships => (
            "Build Deeper Connections",
            "Transform your relationships through communication and understanding",
            "Get Started",
            "Learn Our Method",
        ),
        CoachingNiche::Trauma => (
            "Healing Is Possible",
            "Compassionate, trauma-informed support for your healing journey",
            "Begin Healing",
            "About Our Approach",
        ),
        CoachingNiche::Spirituality => (
            "Awaken Your Spiritual Path",
            "Discover deeper meaning and connection in your life",
            "Start Your Practice",
            "Explore",
        ),
        CoachingNiche::Life => (
            "Navigate Life's Transitions",
            "Expert coaching for the moments that matter most",
            "Book Your Session",
            "Learn More",
        ),
        CoachingNiche::Executive => (
            "Lead with Impact",
            "Executive coaching for leaders driving organizational transformation",
            "Schedule Consultation",
            "Our Approach",
        ),
        CoachingNiche::Health => (
            "Optimize Your Wellbeing",
            "Holistic health coaching for sustainable lifestyle transformation",
            "Start Your Plan",
            "View Programs",
        ),
    };

    HeroConfig {
        headline: Some(headline.to_string()),
        subheadline: Some(subheadline.to_string()),
        cta_primary_text: Some(cta_primary.to_string()),
        cta_secondary_text: Some(cta_secondary.to_string()),
        background_style: Some("gradient".to_string()),
        hero_image_url: None,
    }
}

/// Deterministic template path: a fixed base document, hero overridden from
/// the niche table when the niche is recognized. The about description
/// quotes the first 200 characters of the prompt when the prompt is longer
/// than 50 characters.
pub fn fallback_config(prompt: &str, niche: Option<CoachingNiche>) -> LandingPageConfig {
    let description = if prompt.chars().count() > PROMPT_QUOTE_THRESHOLD {
        prompt.chars().take(PROMPT_QUOTE_LEN).collect()
    } else {
        "Experience transformation through proven coaching methodologies tailored to your unique goals."
            .to_string()
    };

    let hero = match niche {
        Some(niche) => niche_hero(niche),
        None => HeroConfig {
            headline: Some("Transform Your Life".to_string()),
            subheadline: Some("Elite coaching for high performers ready to level up".to_string()),
            cta_primary_text: Some("Get Started".to_string()),
            cta_secondary_text: Some("Learn More".to_string()),
            background_style: Some("gradient".to_string()),
            hero_image_url: None,
        },
    };

    let mut config = LandingPageConfig {
        hero: Some(hero),
        about: Some(AboutConfig {
            title: Some("About Your Coach".to_string()),
            description: Some(description),
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
                    description: "Schedule a discovery session to discuss your goals and challenges"
                        .to_string(),
                    icon_name: "Calendar".to_string(),
                },
                HowItWorksStep {
                    title: "Get Your Plan".to_string(),
                    description: "Receive a personalized coaching roadmap designed for you".to_string(),
                    icon_name: "BookOpen".to_string(),
                },
                HowItWorksStep {
                    title: "Transform".to_string(),
                    description: "Execute with guidance, support, and accountability".to_string(),
                    icon_name: "TrendingUp".to_string(),
                },
            ]),
        }),
        testimonials: None,
        pricing_display: None,
        theme: None,
        sections_enabled: Some(canonical_section_order()),
    };

    fixed_tail_sections(&mut config);
    config
}

/// Landing page generation over an external text-completion API with a
/// deterministic local fallback. `generate` never fails: absence of an API
/// key, transport errors and unparseable responses all collapse into the
/// template path.
pub struct ContentGenerator {
    llm: Arc<dyn LlmService>,
    api_key: Option<String>,
}

impl ContentGenerator {
    pub fn new(llm: Arc<dyn LlmService>, api_key: Option<String>) -> Self {
        Self { llm, api_key }
    }

    pub async fn generate(
        &self,
        prompt: &str,
        niche: Option<CoachingNiche>,
        tone: Option<&str>,
    ) -> LandingPageConfig {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("Text-generation API key not configured, using fallback template");
            return fallback_config(prompt, niche);
        };

        let tone = tone.unwrap_or(DEFAULT_TONE);
        let niche_label = niche.map(|n| n.label()).unwrap_or(DEFAULT_NICHE_LABEL);
        let system = system_prompt(tone, niche_label);

        let raw = match self.llm.generate(api_key, prompt, &system).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Landing page generation failed, using fallback template: {}", e);
                return fallback_config(prompt, niche);
            }
        };

        match serde_json::from_str::<LandingPageConfig>(&raw) {
            Ok(mut config) => {
                if config.sections_enabled.is_none() {
                    config.sections_enabled = Some(canonical_section_order());
                }
                fixed_tail_sections(&mut config);
                info!("Generated landing page config from external API");
                config
            }
            Err(e) => {
                warn!("Generated config failed to parse, using fallback template: {}", e);
                fallback_config(prompt, niche)
            }
        }
    }
}
