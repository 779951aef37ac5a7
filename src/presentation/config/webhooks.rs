/// The workflow-automation service hosting every agent's webhook.
pub const DEFAULT_WEBHOOK_BASE: &str = "https://neulandai.app.n8n.cloud";

/// Fixed map from agent category slug to its remote webhook URL.
///
/// The base is overridable (tests, local rigs); the per-category paths are
/// part of the contract with the automation service and stay hardcoded.
#[derive(Debug, Clone)]
pub struct WebhookRegistry {
    base_url: String,
}

impl WebhookRegistry {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `None` for categories this deployment does not know about.
    pub fn url_for(&self, category: &str) -> Option<String> {
        let path = match category {
            "landing-analyzer" => "landing-analyzer",
            "seo" => "seo-audit-agent",
            // Capital I matches the workflow as registered upstream.
            "website-intelligence" => "website-Intelligence",
            "research" => "research-agent",
            "leadgen" => "lead-generator",
            "support" => "support-agent",
            "ops" => "ops-agent",
            "imgen" => "image-generation",
            "competitor-tracker" => "competitor-tracker",
            "pricing-scraper" => "pricing-scraper",
            "social-listening" => "social-listening",
            "email-drafting" => "email-drafting",
            "ad-copy-generator" => "ad-copy-generator",
            "blog-outline" => "blog-outline-generator",
            "newsletter-curator" => "newsletter-curator",
            _ => return None,
        };
        Some(format!("{}/webhook/{}", self.base_url, path))
    }
}

impl Default for WebhookRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_WEBHOOK_BASE)
    }
}
