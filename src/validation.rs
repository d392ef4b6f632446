//! Input checks applied at the service boundary before any state is touched.

/// Longest session id accepted. Chat platforms use short opaque channel ids.
pub const MAX_SESSION_ID_LEN: usize = 128;
/// Longest identity accepted.
pub const MAX_IDENTITY_LEN: usize = 80;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Session id is empty")]
    EmptySession,

    #[error("Session id is too long (maximum {max} characters)")]
    SessionTooLong { max: usize },

    #[error("Session id contains invalid characters: {chars}")]
    InvalidSessionCharacters { chars: String },

    #[error("Identity is empty")]
    EmptyIdentity,

    #[error("Identity is too long (maximum {max} characters)")]
    IdentityTooLong { max: usize },

    #[error("Identity contains control characters")]
    IdentityControlCharacters,
}

/// Validate a session id. Colons are rejected because they separate the id from the
/// key suffix in storage.
pub fn validate_session_id(id: &str) -> Result<&str, InputError> {
    if id.is_empty() {
        return Err(InputError::EmptySession);
    }
    if id.chars().count() > MAX_SESSION_ID_LEN {
        return Err(InputError::SessionTooLong {
            max: MAX_SESSION_ID_LEN,
        });
    }
    let bad: String = id
        .chars()
        .filter(|c| *c == ':' || c.is_whitespace() || c.is_control())
        .collect();
    if !bad.is_empty() {
        return Err(InputError::InvalidSessionCharacters {
            chars: format!("{:?}", bad),
        });
    }
    Ok(id)
}

/// Validate the sender's identity and return it trimmed.
pub fn validate_identity(identity: &str) -> Result<&str, InputError> {
    let trimmed = identity.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyIdentity);
    }
    if trimmed.chars().count() > MAX_IDENTITY_LEN {
        return Err(InputError::IdentityTooLong {
            max: MAX_IDENTITY_LEN,
        });
    }
    if trimmed.chars().any(char::is_control) {
        return Err(InputError::IdentityControlCharacters);
    }
    Ok(trimmed)
}
