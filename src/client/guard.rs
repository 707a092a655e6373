//! Session guard for the default shell's route tree.
//!
//! The decision is a pure function over the session state and the requested
//! destination; the `RequireSession` layout in `client::components` applies
//! the returned decision to the render tree.

use crate::client::router::Route;
use crate::client::store::session::SessionState;


/// Outcome of evaluating a navigation against the current session.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteDecision {
    /// Render the requested destination.
    Allow,
    /// Replace the location with the given route instead.
    Redirect(Route),
}

/// Decides whether `destination` may render under `session`.
///
/// Unguarded destinations are always allowed. Guarded destinations are
/// allowed with a user present and redirected to the login page otherwise;
/// "no session" is the only denial the shell distinguishes.
pub fn evaluate(session: &SessionState, destination: &Route) -> RouteDecision {
    if !destination.requires_session() || session.is_present() {
        RouteDecision::Allow
    } else {
        RouteDecision::Redirect(Route::Login {})
    }
}
