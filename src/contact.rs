// SPDX-License-Identifier: MPL-2.0
//! Contact form submissions and the `mailto:` handoff.
//!
//! The crate never sends mail. It validates a submission and composes the
//! `mailto:` URI the host opens in the visitor's mail client. The message
//! body is a short Vietnamese cover note wrapping the visitor's text.

use url::form_urlencoded;

/// Form field identifiers, used to key validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    /// Catalog key for the field's label, for rendering error hints.
    #[must_use]
    pub fn label_key(&self) -> &'static str {
        match self {
            ContactField::Name => "contact.form.name_label",
            ContactField::Email => "contact.form.email_label",
            ContactField::Subject => "contact.form.subject_label",
            ContactField::Message => "contact.form.message_label",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One contact form submission, exactly as the visitor typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Checks that every field carries content and the email address has a
    /// plausible shape. Returns the offending fields, in form order.
    pub fn validate(&self) -> Result<(), Vec<ContactField>> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(ContactField::Name);
        }
        if self.email.trim().is_empty() || !email_looks_valid(self.email.trim()) {
            missing.push(ContactField::Email);
        }
        if self.subject.trim().is_empty() {
            missing.push(ContactField::Subject);
        }
        if self.message.trim().is_empty() {
            missing.push(ContactField::Message);
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    /// Composes the `mailto:` URI for this submission.
    ///
    /// `recipient` is the profile email from the catalog and is used
    /// verbatim. Subject and body are percent-encoded; mail clients read a
    /// literal `+` in a mailto query, so the form encoding's `+`-for-space
    /// is rewritten to `%20` (a typed `+` is already `%2B` by then).
    #[must_use]
    pub fn mailto_link(&self, recipient: &str) -> String {
        let body = format!(
            "Tên: {}\nEmail: {}\n\nTin nhắn:\n{}",
            self.name, self.email, self.message
        );
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("subject", &self.subject)
            .append_pair("body", &body)
            .finish()
            .replace('+', "%20");
        format!("mailto:{}?{}", recipient, query)
    }
}

/// Minimal address check: one `@` with content on both sides and no
/// whitespace anywhere.
fn email_looks_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}
