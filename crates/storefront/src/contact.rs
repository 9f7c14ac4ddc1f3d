//! Contact form validation.
//!
//! Validation happens entirely on the page; nothing is sent anywhere. The
//! result is a [`FormFeedback`] describing what the feedback line under the
//! form should say and for how long.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use saber_simples_core::{Email, EmailError};

use crate::messages;

/// How long the success message stays up.
pub const SUCCESS_FEEDBACK_DURATION: Duration = Duration::from_secs(5);

/// Why a submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("name and email are required")]
    MissingRequired,

    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Contact form data as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: Email,
    pub message: String,
}

impl ContactForm {
    /// Trim and validate the form.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::MissingRequired` if the name or email is blank
    /// and `ContactError::InvalidEmail` if the email is malformed.
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();

        if name.is_empty() || email.is_empty() {
            return Err(ContactError::MissingRequired);
        }

        let email = Email::parse(email)?;

        Ok(ContactSubmission {
            name: name.to_string(),
            email,
            message: self.message.trim().to_string(),
        })
    }

    /// Validate and describe the feedback to show.
    #[must_use]
    pub fn submit(&self) -> FormFeedback {
        match self.validate() {
            Ok(submission) => {
                tracing::info!(email_domain = %submission.email.domain(), "Contact form accepted");
                FormFeedback::success()
            }
            Err(e) => {
                tracing::debug!(error = %e, "Contact form rejected");
                FormFeedback::error(&e)
            }
        }
    }
}

/// Tone of the feedback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Error,
    Success,
}

impl FeedbackTone {
    /// Text color used on the page.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Error => "#d32f2f",
            Self::Success => "#ffb300",
        }
    }
}

/// What the feedback line should show after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFeedback {
    pub tone: FeedbackTone,
    pub message: &'static str,
    /// When to blank the line again; `None` keeps it until the next submit.
    pub clear_after: Option<Duration>,
    /// Whether the form fields should be reset.
    pub reset_form: bool,
}

impl FormFeedback {
    fn success() -> Self {
        Self {
            tone: FeedbackTone::Success,
            message: messages::CONTACT_SENT,
            clear_after: Some(SUCCESS_FEEDBACK_DURATION),
            reset_form: true,
        }
    }

    fn error(error: &ContactError) -> Self {
        let message = match error {
            ContactError::MissingRequired => messages::CONTACT_MISSING_REQUIRED,
            ContactError::InvalidEmail(_) => messages::CONTACT_INVALID_EMAIL,
        };
        Self {
            tone: FeedbackTone::Error,
            message,
            clear_after: None,
            reset_form: false,
        }
    }
}
