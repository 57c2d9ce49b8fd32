use super::ReadinessSignals;
use std::fmt;

/// Top-level section the app is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Bootstrapping,
    Onboarding,
    Main,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Bootstrapping => "bootstrapping",
            Phase::Onboarding => "onboarding",
            Phase::Main => "main",
        };
        f.write_str(name)
    }
}

/// Where the navigation collaborator currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Any screen of the tabbed main section
    Main,
    /// The onboarding entry point
    Onboarding,
    /// Unknown route; never redirected
    NotFound,
}

impl Location {
    pub fn path(&self) -> &'static str {
        match self {
            Location::Main => "/(tabs)",
            Location::Onboarding => "/onboarding",
            Location::NotFound => "/+not-found",
        }
    }
}

/// Output of one guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Render nothing and keep the splash up
    Defer,
    /// Render `phase`, replacing the current route with `redirect` if set
    Render {
        phase: Phase,
        redirect: Option<Location>,
    },
}

impl Decision {
    pub fn phase(&self) -> Phase {
        match self {
            Decision::Defer => Phase::Bootstrapping,
            Decision::Render { phase, .. } => *phase,
        }
    }

    pub fn redirect(&self) -> Option<Location> {
        match self {
            Decision::Defer => None,
            Decision::Render { redirect, .. } => *redirect,
        }
    }

    pub fn shows_splash(&self) -> bool {
        matches!(self, Decision::Defer)
    }
}

/// Pure route-guard decision over a signal snapshot and the current location.
///
/// `location` is `None` until the navigation collaborator reports one; the
/// first decision then routes straight to the section matching `onboarded`.
pub fn evaluate(signals: ReadinessSignals, location: Option<Location>) -> Decision {
    if !signals.is_ready() {
        return Decision::Defer;
    }

    let (phase, home) = if signals.onboarded {
        (Phase::Main, Location::Main)
    } else {
        (Phase::Onboarding, Location::Onboarding)
    };

    let redirect = match location {
        None => Some(home),
        Some(Location::Main) if !signals.onboarded => Some(Location::Onboarding),
        Some(Location::Onboarding) if signals.onboarded => Some(Location::Main),
        Some(_) => None,
    };

    Decision::Render { phase, redirect }
}
