//! End-to-end launches against a file-backed profile

use goodads::leaderboard::StaticScoreSource;
use goodads::onboarding::{FinishOutcome, FlowStep, OnboardingFlow};
use goodads::{
    App, AppConfig, BootstrapEvent, Effect, FileStore, IdentityGenerator, Location, Phase,
};
use tempfile::TempDir;

fn launch(config: &AppConfig) -> App<FileStore> {
    App::with_config(FileStore::new(config.profile_path()), config)
}

#[tokio::test]
async fn test_first_launch_then_relaunch() {
    let temp_dir = TempDir::new().unwrap();
    let config = AppConfig::new(temp_dir.path());

    // first launch: storage answers before fonts are ready
    let mut app = launch(&config);
    assert!(app.load_persisted_state().await.is_empty());
    let effects = app.apply(BootstrapEvent::AssetsReady);
    assert_eq!(
        effects,
        vec![Effect::DismissSplash, Effect::Navigate(Location::Onboarding)]
    );

    let mut flow = OnboardingFlow::with_generator(IdentityGenerator::seeded(11), &config);
    assert_eq!(flow.next(), FlowStep::Slide(1));
    assert_eq!(flow.next(), FlowStep::Slide(2));
    assert_eq!(flow.next(), FlowStep::ReadyToFinish);

    let generated = flow.draft().to_string();
    let identity = match flow.finish(app.store()).await.unwrap() {
        FinishOutcome::Completed(identity) => identity,
        FinishOutcome::Rejected(prompt) => panic!("unexpected prompt: {:?}", prompt),
    };
    assert_eq!(identity.as_str(), generated);

    let effects = app.apply(BootstrapEvent::OnboardedChanged(true));
    assert_eq!(effects, vec![Effect::Navigate(Location::Main)]);
    drop(app);

    // relaunch: fonts first this time
    let mut app = launch(&config);
    assert!(app.apply(BootstrapEvent::AssetsReady).is_empty());
    let effects = app.load_persisted_state().await;
    assert_eq!(
        effects,
        vec![Effect::DismissSplash, Effect::Navigate(Location::Main)]
    );
    assert_eq!(app.guard().phase(), Phase::Main);

    // back navigation into onboarding is bounced
    let effects = app.apply(BootstrapEvent::NavigationAttempt(Location::Onboarding));
    assert_eq!(effects, vec![Effect::Navigate(Location::Main)]);

    let rows = app.leaderboard(&StaticScoreSource::demo()).await.unwrap();
    assert!(rows.iter().all(|r| !r.is_current_user || r.identity == generated));
}

#[tokio::test]
async fn test_rejected_identity_keeps_user_in_onboarding() {
    let temp_dir = TempDir::new().unwrap();
    let config = AppConfig::new(temp_dir.path());
    let mut app = launch(&config);
    app.apply(BootstrapEvent::AssetsReady);
    app.load_persisted_state().await;

    let mut flow = OnboardingFlow::with_generator(IdentityGenerator::seeded(5), &config);
    flow.edit_identity("  ");
    assert!(matches!(
        flow.finish(app.store()).await.unwrap(),
        FinishOutcome::Rejected(_)
    ));
    assert!(!config.profile_path().exists());

    // deep link into the main section is refused
    let effects = app.apply(BootstrapEvent::NavigationAttempt(Location::Main));
    assert_eq!(effects, vec![Effect::Navigate(Location::Onboarding)]);

    flow.regenerate();
    assert!(matches!(
        flow.finish(app.store()).await.unwrap(),
        FinishOutcome::Completed(_)
    ));
}

#[tokio::test]
async fn test_reset_sends_user_back_to_onboarding() {
    let temp_dir = TempDir::new().unwrap();
    let config = AppConfig::new(temp_dir.path());
    let mut app = launch(&config);
    app.apply(BootstrapEvent::AssetsReady);
    app.load_persisted_state().await;
    app.complete_onboarding("NobleKnight-40").await.unwrap();
    assert_eq!(app.guard().phase(), Phase::Main);

    let effects = app.reset().await.unwrap();
    assert_eq!(effects, vec![Effect::Navigate(Location::Onboarding)]);
    assert!(!config.profile_path().exists());

    let mut relaunched = launch(&config);
    relaunched.apply(BootstrapEvent::AssetsReady);
    relaunched.load_persisted_state().await;
    assert_eq!(relaunched.guard().phase(), Phase::Onboarding);
}
