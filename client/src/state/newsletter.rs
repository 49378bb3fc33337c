//! Newsletter signup form state.
//!
//! The form has no backend: a valid address is acknowledged locally and
//! the input cleared.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignupStatus {
    #[default]
    Idle,
    Invalid,
    Accepted,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsletterState {
    pub email: String,
    pub status: SignupStatus,
}

impl NewsletterState {
    /// Replace the draft address. Editing clears any previous verdict.
    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.status = SignupStatus::Idle;
    }

    /// Validate the draft. Returns the accepted address, if any.
    pub fn submit(&mut self) -> Option<String> {
        let email = self.email.trim();
        if is_valid_email(email) {
            let accepted = email.to_owned();
            self.email.clear();
            self.status = SignupStatus::Accepted;
            Some(accepted)
        } else {
            self.status = SignupStatus::Invalid;
            None
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self.status {
            SignupStatus::Idle => None,
            SignupStatus::Invalid => Some("Please enter a valid email address."),
            SignupStatus::Accepted => Some("Thanks for subscribing! Watch your inbox for updates."),
        }
    }
}

/// Shape check: `local@domain.tld`, no whitespace, one `@`, no empty
/// domain labels.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((_, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    tld.len() >= 2 && domain.split('.').all(|label| !label.is_empty())
}
