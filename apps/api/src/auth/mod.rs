// Sign-in: OAuth provider discovery and the portal's own role-carrying sessions.
// The OAuth authorization-code exchange is left to the identity provider.

pub mod handlers;
pub mod providers;
pub mod session;
