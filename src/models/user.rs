use serde::Serialize;

/// Account record. The password is stored as-is: the system this tool
/// replaces kept plaintext credentials and that behavior is preserved
/// on purpose, not hardened.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub email: String,
    pub password: String,
    pub created_at: String,
}
