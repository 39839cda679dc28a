use std::time::Duration;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatusBanner {
    pub kind: StatusKind,
    pub message: String,
}

impl StatusBanner {
    pub fn class(&self) -> String {
        format!("form-status {}", self.kind.class())
    }
}

/// Issued for banners that hide themselves. Only the ticket of the banner
/// currently on screen can hide it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HideTicket {
    generation: u64,
    after: Duration,
}

impl HideTicket {
    pub fn after(&self) -> Duration {
        self.after
    }
}

#[derive(Debug, Default)]
pub struct StatusReporter {
    banner: Option<StatusBanner>,
    generation: u64,
}

impl StatusReporter {
    pub fn banner(&self) -> Option<&StatusBanner> {
        self.banner.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.banner.is_some()
    }

    /// Replaces whatever is on screen. The caller schedules `expire` for the
    /// returned ticket and scrolls the status region into view.
    pub fn show(&mut self, kind: StatusKind, message: impl Into<String>) -> Option<HideTicket> {
        self.generation += 1;
        self.banner = Some(StatusBanner {
            kind,
            message: message.into(),
        });

        match kind {
            StatusKind::Success => Some(HideTicket {
                generation: self.generation,
                after: config::SUCCESS_BANNER_TTL,
            }),
            StatusKind::Error => None,
        }
    }

    /// Returns true when the ticket's banner was still showing and got hidden.
    pub fn expire(&mut self, ticket: HideTicket) -> bool {
        if ticket.generation != self.generation || self.banner.is_none() {
            return false;
        }
        self.banner = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_banner_hides_after_eight_seconds() {
        let mut status = StatusReporter::default();
        let ticket = status.show(StatusKind::Success, "Thanks!").unwrap();
        assert_eq!(ticket.after(), Duration::from_secs(8));
        assert!(status.is_visible());
        assert_eq!(status.banner().unwrap().class(), "form-status success");

        assert!(status.expire(ticket));
        assert!(!status.is_visible());
        assert!(!status.expire(ticket));
    }

    #[test]
    fn error_banner_persists() {
        let mut status = StatusReporter::default();
        assert!(status.show(StatusKind::Error, "Broken").is_none());
        assert_eq!(status.banner().unwrap().class(), "form-status error");
    }

    #[test]
    fn latest_banner_replaces_previous() {
        let mut status = StatusReporter::default();
        status.show(StatusKind::Error, "first");
        status.show(StatusKind::Success, "second");
        assert_eq!(
            status.banner(),
            Some(&StatusBanner {
                kind: StatusKind::Success,
                message: "second".to_string(),
            })
        );
    }

    #[test]
    fn stale_ticket_does_not_hide_newer_banner() {
        let mut status = StatusReporter::default();
        let ticket = status.show(StatusKind::Success, "sent").unwrap();
        status.show(StatusKind::Error, "validation failed");

        assert!(!status.expire(ticket));
        assert_eq!(status.banner().unwrap().kind, StatusKind::Error);
    }

    #[test]
    fn expired_success_ticket_leaves_later_error_visible() {
        let mut status = StatusReporter::default();
        status.show(StatusKind::Error, "Please enter your full name");
        let ticket = status.show(StatusKind::Success, "sent").unwrap();
        status.show(StatusKind::Error, "Please enter a valid email address");

        assert!(!status.expire(ticket));
        assert!(status.is_visible());
        assert_eq!(
            status.banner().unwrap().message,
            "Please enter a valid email address"
        );
    }
}
