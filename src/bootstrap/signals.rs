/// Snapshot of everything the route guard decides on.
///
/// `onboarded` is meaningless until `persisted_state_loaded` is set; the
/// builders below keep it `false` until then.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadinessSignals {
    pub assets_ready: bool,
    pub persisted_state_loaded: bool,
    pub onboarded: bool,
}

impl ReadinessSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both startup conditions hold; UI may be shown.
    pub fn is_ready(&self) -> bool {
        self.assets_ready && self.persisted_state_loaded
    }

    pub fn with_assets_ready(mut self) -> Self {
        self.assets_ready = true;
        self
    }

    pub fn with_state_loaded(mut self, onboarded: bool) -> Self {
        self.persisted_state_loaded = true;
        self.onboarded = onboarded;
        self
    }

    /// Live update of the completion flag. Ignored before the state loaded.
    pub fn with_onboarded(mut self, onboarded: bool) -> Self {
        if self.persisted_state_loaded {
            self.onboarded = onboarded;
        }
        self
    }
}
