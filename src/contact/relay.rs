use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config::{self, RelayConfig};
use crate::contact::validation::ContactSubmission;

const NOT_SPECIFIED: &str = "Not specified";

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RelayError {
    #[error("could not encode relay request: {0}")]
    Encode(String),
    #[error("relay unreachable: {0}")]
    Network(String),
    #[error("relay rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Field names the email template expects.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub category: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
    pub to_name: String,
}

impl TemplateParams {
    pub fn from_submission(submission: &ContactSubmission) -> Self {
        let or_unspecified = |value: &str| {
            if value.is_empty() {
                NOT_SPECIFIED.to_string()
            } else {
                value.to_string()
            }
        };

        Self {
            from_name: submission.name.clone(),
            from_email: submission.email.clone(),
            category: submission.category.clone(),
            budget: or_unspecified(&submission.budget),
            timeline: or_unspecified(&submission.timeline),
            message: submission.message.clone(),
            to_name: config::SITE_NAME.to_string(),
        }
    }
}

/// How a submission attempt ended once the controller stopped waiting.
#[derive(Debug, PartialEq)]
pub enum Resolution {
    Delivered,
    Failed(RelayError),
    Unconfigured,
}

pub trait EmailRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), RelayError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// EmailJS REST API client.
#[derive(Clone)]
pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), RelayError> {
        let request = Request::post(config::EMAILJS_ENDPOINT)
            .json(&SendRequest {
                service_id: &self.config.service_id,
                template_id: &self.config.template_id,
                user_id: &self.config.public_key,
                template_params: params,
            })
            .map_err(|e| RelayError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(RelayError::Rejected { status, body })
        }
    }
}

pub async fn deliver<R: EmailRelay>(relay: &R, params: &TemplateParams) -> Resolution {
    match relay.send(params).await {
        Ok(()) => Resolution::Delivered,
        Err(e) => Resolution::Failed(e),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::contact::validation::sample_submission;

    /// In-memory relay that records what it was asked to send.
    pub(crate) struct RecordingRelay {
        pub sent: RefCell<Vec<TemplateParams>>,
        pub reply: Result<(), RelayError>,
    }

    impl RecordingRelay {
        pub fn replying(reply: Result<(), RelayError>) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                reply,
            }
        }
    }

    impl EmailRelay for RecordingRelay {
        async fn send(&self, params: &TemplateParams) -> Result<(), RelayError> {
            self.sent.borrow_mut().push(params.clone());
            self.reply.clone()
        }
    }

    #[test]
    fn blank_optional_fields_become_not_specified() {
        let params = TemplateParams::from_submission(&sample_submission());
        assert_eq!(params.from_name, "Jane Doe");
        assert_eq!(params.from_email, "jane@example.com");
        assert_eq!(params.category, "advice");
        assert_eq!(params.budget, "Not specified");
        assert_eq!(params.timeline, "Not specified");
        assert_eq!(params.to_name, "Tech Advice Hub");
    }

    #[test]
    fn filled_optional_fields_pass_through() {
        let mut submission = sample_submission();
        submission.budget = "500-1000".to_string();
        submission.timeline = "week".to_string();
        let params = TemplateParams::from_submission(&submission);
        assert_eq!(params.budget, "500-1000");
        assert_eq!(params.timeline, "week");
    }

    #[test]
    fn request_body_uses_relay_field_names() {
        let params = TemplateParams::from_submission(&sample_submission());
        let body = serde_json::to_value(SendRequest {
            service_id: "svc",
            template_id: "tpl",
            user_id: "pk",
            template_params: &params,
        })
        .unwrap();
        assert_eq!(body["service_id"], "svc");
        assert_eq!(body["user_id"], "pk");
        assert_eq!(body["template_params"]["from_email"], "jane@example.com");
    }

    #[test]
    fn deliver_maps_relay_outcome() {
        let params = TemplateParams::from_submission(&sample_submission());

        let relay = RecordingRelay::replying(Ok(()));
        assert_eq!(block_on(deliver(&relay, &params)), Resolution::Delivered);
        assert_eq!(relay.sent.borrow().as_slice(), &[params.clone()]);

        let failure = RelayError::Rejected {
            status: 400,
            body: "The user ID is invalid".to_string(),
        };
        let relay = RecordingRelay::replying(Err(failure.clone()));
        assert_eq!(
            block_on(deliver(&relay, &params)),
            Resolution::Failed(failure)
        );
    }
}
