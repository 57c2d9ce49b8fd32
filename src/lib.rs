// ============================================================================
// GoodAds Core Library
// ============================================================================

pub mod bootstrap;
pub mod config;
pub mod core;
pub mod identity;
pub mod leaderboard;
pub mod onboarding;
pub mod storage;

// Re-export main types for convenience
pub use config::AppConfig;
pub use crate::core::{GoodAdsError, Identity, PersistedProfile, Result, ScoreRecord};
pub use identity::{IdentityGenerator, IdentityStore, generate};
pub use storage::{FileStore, InMemoryStore, KeyValueStore};

pub use bootstrap::{BootstrapEvent, Decision, Effect, Location, Phase, ReadinessSignals, RouteGuard};
pub use leaderboard::{RankMarker, RankedRow, rank};

// ============================================================================
// High-level App API
// ============================================================================

/// The coordination core wired to one storage backend.
///
/// Owns the identity store and the route guard so a presentation layer only
/// has to forward readiness and navigation events and act on the effects.
///
/// # Examples
///
/// ```
/// use goodads::{App, BootstrapEvent, Effect, InMemoryStore, Location};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> goodads::Result<()> {
/// let mut app = App::new(InMemoryStore::new());
///
/// app.apply(BootstrapEvent::AssetsReady);
/// let effects = app.load_persisted_state().await;
/// assert_eq!(effects, vec![Effect::DismissSplash, Effect::Navigate(Location::Onboarding)]);
/// # Ok(())
/// # }
/// ```
pub struct App<S> {
    store: IdentityStore<S>,
    guard: RouteGuard,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(backend: S) -> Self {
        Self::with_config(backend, &AppConfig::default())
    }

    pub fn with_config(backend: S, config: &AppConfig) -> Self {
        Self {
            store: IdentityStore::with_config(backend, config),
            guard: RouteGuard::new(),
        }
    }

    pub fn store(&self) -> &IdentityStore<S> {
        &self.store
    }

    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    pub fn apply(&mut self, event: BootstrapEvent) -> Vec<Effect> {
        self.guard.apply(event)
    }

    /// Read the onboarding flag and feed the outcome into the guard
    pub async fn load_persisted_state(&mut self) -> Vec<Effect> {
        let event = bootstrap::load_onboarding_state(&self.store).await;
        self.guard.apply(event)
    }

    /// Persist `identity` and tell the guard onboarding is done.
    ///
    /// On any error nothing is written and the guard is left unchanged.
    pub async fn complete_onboarding(&mut self, identity: &str) -> Result<(Identity, Vec<Effect>)> {
        let identity = self.store.complete_onboarding(identity).await?;
        let effects = self.guard.apply(BootstrapEvent::OnboardedChanged(true));
        Ok((identity, effects))
    }

    /// Wipe the profile and send the guard back to onboarding
    pub async fn reset(&mut self) -> Result<Vec<Effect>> {
        self.store.reset().await?;
        Ok(self.guard.apply(BootstrapEvent::OnboardedChanged(false)))
    }

    pub async fn leaderboard<Src>(&self, source: &Src) -> Result<Vec<RankedRow>>
    where
        Src: leaderboard::ScoreSource + ?Sized,
    {
        leaderboard::load_leaderboard(source, &self.store).await
    }
}
