//! Domain error types.
//!
//! These errors describe a misconfigured network catalog. They are raised
//! once, when the network is built, and never during trip planning.

/// Errors from validating a network catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The catalog contains no stops at all
    #[error("network has no stops")]
    EmptyNetwork,

    /// A route has fewer than two stops
    #[error("route {0} must have at least two stops")]
    RouteTooShort(String),

    /// A stop appears twice within one route
    #[error("route {route} visits stop {stop} more than once")]
    DuplicateStopInRoute { route: String, stop: String },

    /// Two routes share a name
    #[error("route {0} is defined more than once")]
    DuplicateRoute(String),

    /// A headway of zero minutes
    #[error("route {0} has a zero-minute headway")]
    ZeroHeadway(String),

    /// A service window that starts after it ends
    #[error("route {0} has a service window that starts after it ends")]
    InvalidServiceWindow(String),
}
