use super::machine::{BootstrapEvent, Effect, RouteGuard};
use crate::identity::IdentityStore;
use crate::storage::KeyValueStore;
use std::future::Future;

/// Read the onboarding flag and wrap the outcome as a guard event.
pub async fn load_onboarding_state<S: KeyValueStore>(store: &IdentityStore<S>) -> BootstrapEvent {
    BootstrapEvent::StateLoaded(store.is_onboarded().await)
}

/// Run the asset loader and the persisted-state read concurrently, feeding
/// each into `guard` as soon as it completes.
///
/// Returns every effect produced along the way, in order.
pub async fn run_bootstrap<S, F>(
    guard: &mut RouteGuard,
    assets: F,
    store: &IdentityStore<S>,
) -> Vec<Effect>
where
    S: KeyValueStore,
    F: Future<Output = ()>,
{
    let state = load_onboarding_state(store);
    tokio::pin!(assets);
    tokio::pin!(state);

    let mut assets_done = false;
    let mut state_done = false;
    let mut effects = Vec::new();

    while !(assets_done && state_done) {
        tokio::select! {
            _ = &mut assets, if !assets_done => {
                assets_done = true;
                effects.extend(guard.apply(BootstrapEvent::AssetsReady));
            }
            loaded = &mut state, if !state_done => {
                state_done = true;
                effects.extend(guard.apply(loaded));
            }
        }
    }

    effects
}
