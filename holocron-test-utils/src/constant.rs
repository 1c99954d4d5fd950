//! Constant values shared across tests.
//!
//! None of these are real credentials.

/// Secret used to sign access tokens in tests.
pub static TEST_JWT_SECRET: &str = "test-jwt-secret";

/// Plaintext password given to every fixture user.
pub static TEST_PASSWORD: &str = "correct-horse-battery-staple";
