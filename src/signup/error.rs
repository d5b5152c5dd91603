//! Registration form error types.

/// Errors raised while editing the registration form.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignupError {
    /// A field key that the form does not know about
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// A membership value outside of the supported tiers
    #[error("Unknown membership type: {0}")]
    UnknownMembershipType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_error_display() {
        let error = SignupError::UnknownField("age".to_string());
        assert!(error.to_string().contains("Unknown form field"));
        assert!(error.to_string().contains("age"));

        let error = SignupError::UnknownMembershipType("gold".to_string());
        assert!(error.to_string().contains("Unknown membership type"));
        assert!(error.to_string().contains("gold"));
    }
}
