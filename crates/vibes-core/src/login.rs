//! Login overlay state.
//!
//! Sign-in is a stub: submitting performs no validation and no credential
//! exchange, it only closes the overlay.

/// Visibility and draft fields of the login dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginOverlay {
    open: bool,
    email: String,
    password: String,
}

impl LoginOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the dialog and drops the drafts along with its content.
    pub fn close(&mut self) {
        self.open = false;
        self.email.clear();
        self.password.clear();
    }

    /// Open-change callback from the dialog (backdrop, close button, Escape).
    pub fn set_open(&mut self, open: bool) {
        if open { self.open() } else { self.close() }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Handles form submission.
    pub fn submit(&mut self) {
        tracing::debug!(has_email = !self.email.is_empty(), "Login submitted");
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut login = LoginOverlay::new();
        assert!(!login.is_open());
        login.open();
        assert!(login.is_open());
        login.set_open(false);
        assert!(!login.is_open());
        login.set_open(true);
        assert!(login.is_open());
    }

    #[test]
    fn test_submit_closes_and_clears() {
        let mut login = LoginOverlay::new();
        login.open();
        login.set_email("you@example.com");
        login.set_password("hunter2");
        assert_eq!(login.email(), "you@example.com");

        login.submit();
        assert!(!login.is_open());
        assert_eq!(login.email(), "");
        assert_eq!(login.password(), "");
    }

    #[test]
    fn test_submit_with_empty_fields() {
        let mut login = LoginOverlay::new();
        login.open();
        login.submit();
        assert!(!login.is_open());
    }
}
