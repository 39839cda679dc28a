use std::time::Duration;

use log::{debug, error, info, warn};

use crate::config::{self, RelayConfig};
use crate::contact::relay::{RelayError, Resolution, TemplateParams};
use crate::contact::status::{HideTicket, StatusKind, StatusReporter};
use crate::contact::validation::{validate, ContactSubmission};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

pub const DELIVERED_MESSAGE: &str =
    "✅ Thank you for your message! I'll get back to you within 24 hours with personalized tech advice.";
pub const FAILED_MESSAGE: &str =
    "❌ Sorry, there was an error sending your message. Please try again or contact me directly.";
pub const UNCONFIGURED_MESSAGE: &str =
    "⚙️ Email sending is not configured yet. Please check the setup instructions in the console.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
}

/// What the view has to do after a submit.
#[derive(Debug, PartialEq)]
pub enum SubmitAction {
    /// A previous submission is still in flight.
    Ignored,
    /// Validation failed and the errors are on the status banner.
    Rejected,
    /// No relay credentials: wait, then resolve with `Resolution::Unconfigured`.
    Simulate(Duration),
    /// Call the relay, then resolve with its outcome.
    Deliver(TemplateParams),
}

#[derive(Debug, Default, PartialEq)]
pub struct Settled {
    pub clear_form: bool,
    pub hide: Option<HideTicket>,
}

impl Settled {
    /// Empties the form after a delivered message. The character counter
    /// follows the message field back to zero.
    pub fn apply_to(&self, submission: &mut ContactSubmission) {
        if self.clear_form {
            *submission = ContactSubmission::default();
        }
    }
}

/// Submit state, status banner and relay credentials of one contact form.
pub struct FormController {
    state: SubmitState,
    status: StatusReporter,
    config: RelayConfig,
}

impl FormController {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            state: SubmitState::Idle,
            status: StatusReporter::default(),
            config,
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == SubmitState::Sending
    }

    pub fn button_label(&self) -> &'static str {
        match self.state {
            SubmitState::Idle => SUBMIT_LABEL,
            SubmitState::Sending => SENDING_LABEL,
        }
    }

    pub fn status(&self) -> &StatusReporter {
        &self.status
    }

    pub fn expire_status(&mut self, ticket: HideTicket) -> bool {
        self.status.expire(ticket)
    }

    pub fn submit(&mut self, submission: &ContactSubmission) -> SubmitAction {
        if self.is_sending() {
            debug!("Submit ignored, previous message still sending");
            return SubmitAction::Ignored;
        }

        if let Err(errors) = validate(submission) {
            debug!("Contact form rejected with {} error(s)", errors.len());
            self.status.show(StatusKind::Error, errors.to_message());
            return SubmitAction::Rejected;
        }

        self.state = SubmitState::Sending;

        if !self.config.is_configured() {
            log_setup_instructions(submission);
            return SubmitAction::Simulate(config::UNCONFIGURED_DELAY);
        }

        SubmitAction::Deliver(TemplateParams::from_submission(submission))
    }

    pub fn resolve(&mut self, resolution: Resolution) -> Settled {
        self.state = SubmitState::Idle;

        match resolution {
            Resolution::Delivered => {
                info!("Contact message delivered");
                Settled {
                    clear_form: true,
                    hide: self.status.show(StatusKind::Success, DELIVERED_MESSAGE),
                }
            }
            Resolution::Failed(e) => {
                report_failure(&e);
                self.status.show(StatusKind::Error, FAILED_MESSAGE);
                Settled::default()
            }
            Resolution::Unconfigured => {
                self.status.show(StatusKind::Error, UNCONFIGURED_MESSAGE);
                Settled::default()
            }
        }
    }
}

fn report_failure(e: &RelayError) {
    error!("Email relay error: {}", e);
}

fn log_setup_instructions(submission: &ContactSubmission) {
    warn!("📧 EmailJS setup required!");
    info!("Please follow these steps to enable email sending:");
    info!("1. Go to https://www.emailjs.com/ and create a free account");
    info!("2. Set up an email service (Gmail, Outlook, etc.)");
    info!("3. Create an email template");
    info!("4. Rebuild with EMAILJS_PUBLIC_KEY, EMAILJS_SERVICE_ID and EMAILJS_TEMPLATE_ID set");
    info!("5. Form data would be: {:?}", submission);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::components::char_counter::counter_label;
    use crate::contact::relay::{deliver, tests::RecordingRelay};
    use crate::contact::validation::sample_submission;

    fn configured() -> RelayConfig {
        RelayConfig {
            public_key: "pk_test".to_string(),
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
        }
    }

    fn unconfigured() -> RelayConfig {
        RelayConfig {
            public_key: config::PLACEHOLDER_PUBLIC_KEY.to_string(),
            ..configured()
        }
    }

    /// Runs a full submit as the view would, returning the settle result.
    fn run(
        controller: &mut FormController,
        relay: &RecordingRelay,
        submission: &ContactSubmission,
    ) -> Option<Settled> {
        match controller.submit(submission) {
            SubmitAction::Deliver(params) => {
                assert!(controller.is_sending());
                let resolution = block_on(deliver(relay, &params));
                Some(controller.resolve(resolution))
            }
            SubmitAction::Simulate(_) => Some(controller.resolve(Resolution::Unconfigured)),
            SubmitAction::Rejected | SubmitAction::Ignored => None,
        }
    }

    #[test]
    fn invalid_submission_never_reaches_relay() {
        let mut controller = FormController::new(configured());
        let relay = RecordingRelay::replying(Ok(()));
        let mut submission = sample_submission();
        submission.message = "too short".to_string();
        submission.category.clear();

        assert!(run(&mut controller, &relay, &submission).is_none());
        assert!(relay.sent.borrow().is_empty());
        assert_eq!(controller.state(), SubmitState::Idle);

        let banner = controller.status().banner().unwrap();
        assert_eq!(banner.kind, StatusKind::Error);
        assert_eq!(banner.message.lines().count(), 2);
    }

    #[test]
    fn valid_submission_enters_sending() {
        let mut controller = FormController::new(configured());
        assert_eq!(controller.button_label(), SUBMIT_LABEL);

        let action = controller.submit(&sample_submission());
        assert!(matches!(action, SubmitAction::Deliver(_)));
        assert_eq!(controller.state(), SubmitState::Sending);
        assert_eq!(controller.button_label(), SENDING_LABEL);
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut controller = FormController::new(configured());
        controller.submit(&sample_submission());
        assert_eq!(controller.submit(&sample_submission()), SubmitAction::Ignored);
        assert_eq!(controller.submit(&ContactSubmission::default()), SubmitAction::Ignored);
        assert!(controller.status().banner().is_none());
    }

    #[test]
    fn unconfigured_relay_simulates_then_reports_error() {
        let mut controller = FormController::new(unconfigured());
        let relay = RecordingRelay::replying(Ok(()));

        let action = controller.submit(&sample_submission());
        assert_eq!(action, SubmitAction::Simulate(Duration::from_secs(1)));
        assert!(controller.is_sending());

        let settled = controller.resolve(Resolution::Unconfigured);
        assert_eq!(settled, Settled::default());
        assert_eq!(controller.state(), SubmitState::Idle);
        assert!(relay.sent.borrow().is_empty());

        let banner = controller.status().banner().unwrap();
        assert_eq!(banner.kind, StatusKind::Error);
        assert_eq!(banner.message, UNCONFIGURED_MESSAGE);
    }

    #[test]
    fn delivery_clears_form_and_hides_after_timeout() {
        let mut controller = FormController::new(configured());
        let relay = RecordingRelay::replying(Ok(()));

        let settled = run(&mut controller, &relay, &sample_submission()).unwrap();
        assert_eq!(relay.sent.borrow().len(), 1);
        assert!(settled.clear_form);
        assert_eq!(controller.state(), SubmitState::Idle);
        assert_eq!(
            controller.status().banner().unwrap().kind,
            StatusKind::Success
        );

        let ticket = settled.hide.unwrap();
        assert_eq!(ticket.after(), Duration::from_secs(8));
        assert!(controller.expire_status(ticket));
        assert!(!controller.status().is_visible());
    }

    #[test]
    fn delivery_empties_form_and_resets_counter() {
        let mut controller = FormController::new(configured());
        let relay = RecordingRelay::replying(Ok(()));
        let mut form = sample_submission();
        form.budget = "500-1000".to_string();

        let settled = run(&mut controller, &relay, &form).unwrap();
        settled.apply_to(&mut form);

        assert_eq!(form, ContactSubmission::default());
        assert_eq!(
            counter_label(form.message.chars().count()),
            "0 characters (minimum 20)"
        );
    }

    #[test]
    fn failed_or_unconfigured_delivery_keeps_form() {
        let mut controller = FormController::new(configured());
        let relay = RecordingRelay::replying(Err(RelayError::Network("offline".to_string())));
        let mut form = sample_submission();

        let settled = run(&mut controller, &relay, &form).unwrap();
        settled.apply_to(&mut form);
        assert_eq!(form, sample_submission());

        let mut controller = FormController::new(unconfigured());
        let settled = run(&mut controller, &relay, &form).unwrap();
        settled.apply_to(&mut form);
        assert_eq!(form, sample_submission());
    }

    #[test]
    fn delivery_failure_hides_error_detail() {
        let mut controller = FormController::new(configured());
        let relay = RecordingRelay::replying(Err(RelayError::Rejected {
            status: 412,
            body: "template_secret_detail".to_string(),
        }));

        let settled = run(&mut controller, &relay, &sample_submission()).unwrap();
        assert!(!settled.clear_form);
        assert!(settled.hide.is_none());
        assert_eq!(controller.state(), SubmitState::Idle);

        let banner = controller.status().banner().unwrap();
        assert_eq!(banner.kind, StatusKind::Error);
        assert_eq!(banner.message, FAILED_MESSAGE);
        assert!(!banner.message.contains("template_secret_detail"));
        assert!(!banner.message.contains("412"));
    }

    #[test]
    fn resubmit_after_failure_is_allowed() {
        let mut controller = FormController::new(configured());
        let failing = RecordingRelay::replying(Err(RelayError::Network("offline".to_string())));
        run(&mut controller, &failing, &sample_submission());

        let working = RecordingRelay {
            sent: RefCell::new(Vec::new()),
            reply: Ok(()),
        };
        let settled = run(&mut controller, &working, &sample_submission()).unwrap();
        assert!(settled.clear_form);
        assert_eq!(working.sent.borrow().len(), 1);
    }
}
