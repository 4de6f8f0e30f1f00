//! Contact form state: draft, validation, and the two delivery modes.
//!
//! DESIGN
//! ======
//! `ContactState` is a pure state machine. The form component owns the
//! browser side effects (navigating to the `mailto:` link, waiting out the
//! simulated delay) and reports back through [`finish_simulated`], so the
//! confirmation toast fires exactly once per submission, even when the form
//! unmounted while the message was "sending".

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::site::ContactMode;
use crate::state::toast::{ToastKind, ToastState};

/// Delay before a simulated submission completes.
pub const SIMULATED_DELAY_MS: u32 = 1_500;

/// What the visitor has typed so far.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// A draft that passed validation, with surrounding whitespace trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Every field is required; the email must look like an address.
    pub fn validate(&self) -> Result<ValidContact, &'static str> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err("Please fill in your name, email and message.");
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err("Enter a valid email address."),
        }
        Ok(ValidContact { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
    }
}

/// Build the `mailto:` link handed to the visitor's mail client.
pub fn mailto_href(to: &str, contact: &ValidContact) -> String {
    let subject = format!("Portfolio Contact from {}", contact.name);
    let body = format!("Message from: {}\nEmail: {}\n\n{}", contact.name, contact.email, contact.message);
    format!("mailto:{to}?subject={}&body={}", urlencoding::encode(&subject), urlencoding::encode(&body))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// A simulated submission is waiting out its delay.
    Sending,
}

/// What the caller must do after a successful [`ContactState::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Navigate the window to this `mailto:` URL.
    OpenMailto(String),
    /// Wait [`SIMULATED_DELAY_MS`] and then call [`ContactState::complete`].
    Pending,
}

#[derive(Clone, Debug, Default)]
pub struct ContactState {
    pub draft: ContactDraft,
    pub status: SubmitStatus,
    /// Last validation message, cleared on the next successful submit.
    pub error: Option<&'static str>,
}

impl ContactState {
    pub fn with_draft(draft: ContactDraft) -> Self {
        Self { draft, ..Self::default() }
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    pub fn submit(
        &mut self,
        mode: ContactMode,
        to: &str,
        toasts: &mut ToastState,
    ) -> Result<SubmitOutcome, &'static str> {
        if self.is_sending() {
            return Err("Your message is already on its way.");
        }
        let contact = self.draft.validate().inspect_err(|msg| self.error = Some(*msg))?;
        self.error = None;
        match mode {
            ContactMode::Mailto => {
                toasts.push(
                    ToastKind::Info,
                    "Opening email client",
                    "Your default email client will open to send the message.",
                );
                Ok(SubmitOutcome::OpenMailto(mailto_href(to, &contact)))
            }
            ContactMode::Simulated => {
                self.status = SubmitStatus::Sending;
                Ok(SubmitOutcome::Pending)
            }
        }
    }

    /// Finish a simulated submission. Returns `false` if none was pending.
    pub fn complete(&mut self, toasts: &mut ToastState) -> bool {
        if !self.is_sending() {
            return false;
        }
        confirm_sent(toasts);
        self.draft = ContactDraft::default();
        self.status = SubmitStatus::Idle;
        true
    }
}

fn confirm_sent(toasts: &mut ToastState) {
    toasts.push(ToastKind::Success, "Message sent", "Thanks for reaching out. I'll get back to you soon.");
}

/// Complete a simulated send after its delay.
///
/// `contact` belongs to the form and is disposed if the visitor navigated
/// away meanwhile; the app-level `toasts` queue still gets the confirmation.
/// Returns whether the persisted draft should be cleared.
pub fn finish_simulated(contact: RwSignal<ContactState>, toasts: RwSignal<ToastState>) -> bool {
    let mut completed = false;
    let form_alive = contact.try_update(|c| toasts.try_update(|t| completed = c.complete(t))).is_some();
    if form_alive {
        return completed;
    }
    toasts.try_update(confirm_sent);
    true
}
