pub mod api;
pub mod auth;
pub mod guard;
pub mod router;
pub mod session;
pub mod store;
pub mod upload;

pub use auth::AuthService;
pub use guard::{decide, Decision, Redirect, Requirement, RouteGuard};
pub use router::Route;
pub use session::SessionClient;
pub use store::{Session, SessionState, SessionStore};
