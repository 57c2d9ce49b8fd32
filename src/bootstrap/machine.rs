use super::guard::{Decision, Location, Phase, evaluate};
use super::ReadinessSignals;
use crate::core::{GoodAdsError, Result};
use tracing::{Level, event};

/// Inputs to the route guard.
#[derive(Debug)]
pub enum BootstrapEvent {
    /// Fonts and other presentation assets finished loading
    AssetsReady,
    /// The onboarding flag was read, or reading it failed
    StateLoaded(Result<bool>),
    /// Onboarding completed, or an external reset cleared it
    OnboardedChanged(bool),
    /// The navigation collaborator moved (user action, back, deep link)
    NavigationAttempt(Location),
}

/// Side effects the presentation layer must carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    DismissSplash,
    /// Replace the current route
    Navigate(Location),
}

/// Event-driven wrapper around [`evaluate`].
///
/// Every event updates the snapshot and re-runs the pure decision, so the
/// result does not depend on the order in which readiness arrives.
#[derive(Debug, Default)]
pub struct RouteGuard {
    signals: ReadinessSignals,
    location: Option<Location>,
    splash_dismissed: bool,
    load_error: Option<GoodAdsError>,
}

impl RouteGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signals(&self) -> ReadinessSignals {
        self.signals
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn phase(&self) -> Phase {
        self.decision().phase()
    }

    pub fn decision(&self) -> Decision {
        evaluate(self.signals, self.location)
    }

    pub fn splash_dismissed(&self) -> bool {
        self.splash_dismissed
    }

    /// The storage error that forced the onboarding fallback, if any
    pub fn load_error(&self) -> Option<&GoodAdsError> {
        self.load_error.as_ref()
    }

    pub fn apply(&mut self, event: BootstrapEvent) -> Vec<Effect> {
        let before = self.phase();

        match event {
            BootstrapEvent::AssetsReady => {
                self.signals = self.signals.with_assets_ready();
            }
            BootstrapEvent::StateLoaded(Ok(onboarded)) => {
                self.load_error = None;
                self.signals = self.signals.with_state_loaded(onboarded);
            }
            BootstrapEvent::StateLoaded(Err(err)) => {
                event!(
                    Level::ERROR,
                    error = %err,
                    "failed to read onboarding state, falling back to onboarding"
                );
                self.load_error = Some(err);
                self.signals = self.signals.with_state_loaded(false);
            }
            BootstrapEvent::OnboardedChanged(onboarded) => {
                if !self.signals.persisted_state_loaded {
                    event!(Level::DEBUG, onboarded, "onboarded change before state load ignored");
                }
                self.signals = self.signals.with_onboarded(onboarded);
            }
            BootstrapEvent::NavigationAttempt(location) => {
                self.location = Some(location);
            }
        }

        let decision = self.decision();
        let mut effects = Vec::new();

        if let Decision::Render { redirect, .. } = decision {
            if !self.splash_dismissed {
                self.splash_dismissed = true;
                effects.push(Effect::DismissSplash);
            }
            if let Some(target) = redirect {
                event!(Level::DEBUG, from = ?self.location, to = target.path(), "route guard redirect");
                self.location = Some(target);
                effects.push(Effect::Navigate(target));
            }
        }

        let after = self.phase();
        if before != after {
            event!(Level::INFO, from = %before, to = %after, "app phase changed");
        }

        effects
    }
}
