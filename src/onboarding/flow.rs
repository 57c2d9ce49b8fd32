use super::{SLIDES, Slide};
use crate::config::AppConfig;
use crate::core::{GoodAdsError, Identity, Result};
use crate::identity::{IdentityGenerator, IdentityStore};
use crate::storage::KeyValueStore;
use rand::Rng;
use rand::rngs::StdRng;

/// Result of pressing the primary button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStep {
    /// Moved to this slide
    Slide(usize),
    /// Already on the last slide; call [`OnboardingFlow::finish`]
    ReadyToFinish,
}

/// Inline message shown when the identity is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPrompt {
    pub title: String,
    pub message: String,
}

impl ValidationPrompt {
    fn too_short(min_len: usize) -> Self {
        Self {
            title: "Too short!".to_string(),
            message: format!("Your ID needs to be at least {} characters long.", min_len),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishOutcome {
    Completed(Identity),
    Rejected(ValidationPrompt),
}

/// State of the introduction slides and the identity being drafted.
pub struct OnboardingFlow<R: Rng = StdRng> {
    index: usize,
    draft: String,
    generator: IdentityGenerator<R>,
    max_input: usize,
}

impl OnboardingFlow<StdRng> {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_generator(IdentityGenerator::from_entropy(), config)
    }
}

impl<R: Rng> OnboardingFlow<R> {
    /// Start on the first slide with a freshly drawn identity
    pub fn with_generator(mut generator: IdentityGenerator<R>, config: &AppConfig) -> Self {
        let draft = generator.generate();
        Self {
            index: 0,
            draft,
            generator,
            max_input: config.max_identity_input,
        }
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_slide(&self) -> &'static Slide {
        &SLIDES[self.index]
    }

    pub fn is_last_slide(&self) -> bool {
        self.index == SLIDES.len() - 1
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_last_slide() { "Let's Go!" } else { "Next" }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn next(&mut self) -> FlowStep {
        if self.is_last_slide() {
            FlowStep::ReadyToFinish
        } else {
            self.index += 1;
            FlowStep::Slide(self.index)
        }
    }

    /// Follow a swipe. Swiping is locked once the identity slide is shown.
    pub fn swipe_to(&mut self, index: usize) -> bool {
        if self.is_last_slide() || index >= SLIDES.len() {
            return false;
        }
        self.index = index;
        true
    }

    /// Replace the draft, keeping at most `max_identity_input` characters
    pub fn edit_identity(&mut self, text: &str) {
        self.draft = text.chars().take(self.max_input).collect();
    }

    pub fn regenerate(&mut self) -> &str {
        self.draft = self.generator.generate();
        &self.draft
    }

    /// Validate and persist the draft.
    ///
    /// A too-short identity comes back as [`FinishOutcome::Rejected`] with
    /// nothing written; storage failures are returned as errors.
    pub async fn finish<S: KeyValueStore>(
        &self,
        store: &IdentityStore<S>,
    ) -> Result<FinishOutcome> {
        match store.complete_onboarding(&self.draft).await {
            Ok(identity) => Ok(FinishOutcome::Completed(identity)),
            Err(GoodAdsError::Validation(_)) => Ok(FinishOutcome::Rejected(
                ValidationPrompt::too_short(store.min_identity_len()),
            )),
            Err(err) => Err(err),
        }
    }
}
