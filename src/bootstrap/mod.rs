//! Startup readiness and the route guard between onboarding and the main app.

pub mod driver;
pub mod guard;
pub mod machine;
pub mod signals;

pub use driver::{load_onboarding_state, run_bootstrap};
pub use guard::{Decision, Location, Phase, evaluate};
pub use machine::{BootstrapEvent, Effect, RouteGuard};
pub use signals::ReadinessSignals;
