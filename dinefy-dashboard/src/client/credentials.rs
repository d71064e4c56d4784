//! Test-mode credential check
//!
//! There is no account store. The only identity is a fixed test pair, and it
//! is honored only while test mode is on.

pub const TEST_EMAIL: &str = "root@gmail.com";
pub const TEST_PASSWORD: &str = "12345678";

#[derive(Debug, Clone, Copy)]
pub struct CredentialVerifier {
    test_mode: bool,
}

impl CredentialVerifier {
    pub fn new(test_mode: bool) -> Self {
        Self { test_mode }
    }

    pub fn verify(&self, email: &str, password: &str) -> bool {
        self.test_mode && email == TEST_EMAIL && password == TEST_PASSWORD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_mode_pair() {
        let verifier = CredentialVerifier::new(true);
        assert!(verifier.verify("root@gmail.com", "12345678"));
        assert!(!verifier.verify("root@gmail.com", "123456789"));
        assert!(!verifier.verify("Root@gmail.com", "12345678"));
    }

    #[test]
    fn test_disabled_rejects_everything() {
        let verifier = CredentialVerifier::new(false);
        assert!(!verifier.verify(TEST_EMAIL, TEST_PASSWORD));
    }
}
