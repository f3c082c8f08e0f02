use thiserror::Error;

/// Session-level error taxonomy.
///
/// The session store never raises these to the view layer: each operation
/// catches its own failure and publishes `Display` output as the error
/// string, so the variant messages here ARE the user-visible copy.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login email not present in the fixture directory.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration email collides with the fixture directory.
    #[error("Email already in use")]
    EmailInUse,

    /// A profile mutation was requested with no current session.
    #[error("No user logged in")]
    NotLoggedIn,

    /// Catch-all for slot I/O, serialization, and other runtime failures.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(#[from] anyhow::Error),
}
