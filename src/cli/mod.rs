use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use goodads::bootstrap::{Effect, RouteGuard, run_bootstrap};
use goodads::leaderboard::{StaticScoreSource, load_leaderboard};
use goodads::onboarding::{FinishOutcome, OnboardingFlow};
use goodads::{AppConfig, FileStore, IdentityStore, generate};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "goodads")]
#[command(about = "Inspect and drive the GoodAds identity, onboarding and leaderboard core")]
pub struct Cli {
    /// Directory holding the profile file (defaults to $GOODADS_DATA_DIR or ./.goodads)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the persisted onboarding state
    Status,
    /// Draw fresh identities
    Generate {
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Complete onboarding with the given identity (a generated one if omitted)
    Onboard { identity: Option<String> },
    /// Wipe the persisted profile
    Reset,
    /// Print the ranked leaderboard
    Leaderboard {
        /// JSON array of {"identity", "score"} records; the demo board if omitted
        #[arg(long)]
        scores: Option<PathBuf>,
    },
    /// Run the startup sequence and print the guard's effects
    Boot {
        /// Simulated asset loading time
        #[arg(long, default_value_t = 0)]
        assets_delay_ms: u64,
    },
}

impl Cli {
    pub fn config(&self) -> AppConfig {
        match &self.data_dir {
            Some(dir) => AppConfig::new(dir),
            None => AppConfig::from_env(),
        }
    }

    pub async fn run(self) -> Result<()> {
        let config = self.config();
        config.validate()?;
        let store = IdentityStore::with_config(FileStore::new(config.profile_path()), &config);

        match self.command {
            Command::Status => {
                let profile = store.profile().await?;
                println!("profile:    {}", config.profile_path().display());
                println!("onboarded:  {}", profile.completed);
                println!(
                    "identity:   {}",
                    profile.identity.as_deref().unwrap_or("<none>")
                );
                Ok(())
            }
            Command::Generate { count } => {
                for _ in 0..count {
                    println!("{}", generate());
                }
                Ok(())
            }
            Command::Onboard { identity } => {
                let mut flow = OnboardingFlow::new(&config);
                if let Some(identity) = identity {
                    flow.edit_identity(&identity);
                }
                match flow.finish(&store).await? {
                    FinishOutcome::Completed(identity) => {
                        println!("onboarded as {}", identity);
                        Ok(())
                    }
                    FinishOutcome::Rejected(prompt) => bail!("{} {}", prompt.title, prompt.message),
                }
            }
            Command::Reset => {
                store.reset().await?;
                println!("profile cleared");
                Ok(())
            }
            Command::Leaderboard { scores } => {
                let source = match scores {
                    Some(path) => {
                        let json = tokio::fs::read_to_string(&path).await.with_context(|| {
                            format!("Failed to read score file '{}'", path.display())
                        })?;
                        StaticScoreSource::from_json(&json)?
                    }
                    None => StaticScoreSource::demo(),
                };

                for row in load_leaderboard(&source, &store).await? {
                    let marker = row.marker();
                    println!(
                        "{:>6}  {:<24} {:>8}",
                        marker.to_string(),
                        row.display_name(),
                        row.score
                    );
                }
                Ok(())
            }
            Command::Boot { assets_delay_ms } => {
                let mut guard = RouteGuard::new();
                let assets = tokio::time::sleep(Duration::from_millis(assets_delay_ms));
                let effects = run_bootstrap(&mut guard, assets, &store).await;

                for effect in effects {
                    match effect {
                        Effect::DismissSplash => println!("dismiss splash"),
                        Effect::Navigate(location) => println!("navigate {}", location.path()),
                    }
                }
                println!("phase: {}", guard.phase());
                if let Some(err) = guard.load_error() {
                    println!("load error: {}", err);
                }
                Ok(())
            }
        }
    }
}
