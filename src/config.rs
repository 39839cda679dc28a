use std::time::Duration;

use log::Level;

pub const SITE_NAME: &str = "Tech Advice Hub";

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Public key value shipped in the repo. A build that still carries it has
/// no relay credentials.
pub const PLACEHOLDER_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";

pub const SUCCESS_BANNER_TTL: Duration = Duration::from_secs(8);
pub const UNCONFIGURED_DELAY: Duration = Duration::from_secs(1);

pub const REVOLUT_NOTICE: &str = "Revolut tag: @your-tag\n\nThank you for considering a donation!";
pub const DONATION_NOTICE: &str =
    "Donation platform coming soon!\n\nThank you for your interest in supporting this service!";

#[derive(Clone, Debug, PartialEq)]
pub struct RelayConfig {
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
}

impl RelayConfig {
    /// Credentials baked in at build time, e.g.
    /// `EMAILJS_PUBLIC_KEY=... trunk build --release`.
    pub fn from_build_env() -> Self {
        Self {
            public_key: option_env!("EMAILJS_PUBLIC_KEY")
                .unwrap_or(PLACEHOLDER_PUBLIC_KEY)
                .to_string(),
            service_id: option_env!("EMAILJS_SERVICE_ID")
                .unwrap_or("YOUR_SERVICE_ID")
                .to_string(),
            template_id: option_env!("EMAILJS_TEMPLATE_ID")
                .unwrap_or("YOUR_TEMPLATE_ID")
                .to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.public_key != PLACEHOLDER_PUBLIC_KEY
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_key_means_unconfigured() {
        let config = RelayConfig {
            public_key: PLACEHOLDER_PUBLIC_KEY.to_string(),
            service_id: "service_abc".to_string(),
            template_id: "template_abc".to_string(),
        };
        assert!(!config.is_configured());

        let config = RelayConfig {
            public_key: "pk_live_123".to_string(),
            ..config
        };
        assert!(config.is_configured());
    }
}
