//! The one-time introduction shown before the main app.

pub mod flow;

pub use flow::{FinishOutcome, FlowStep, OnboardingFlow, ValidationPrompt};

/// Static content of one introduction slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Slide carries the identity input field
    pub is_input: bool,
}

pub const SLIDES: [Slide; 3] = [
    Slide {
        id: "1",
        icon: "heart.fill",
        title: "Ads for Good?",
        description: "Yes, it's weird. You watch ads, and 100% of the revenue goes to charity.\n\nTurn your procrastination into donation.",
        is_input: false,
    },
    Slide {
        id: "2",
        icon: "chart.bar.fill",
        title: "Climb the Ranks",
        description: "Compete on the global leaderboard. Become the ultimate philanthropist without spending a dime.\n\nWarning: Can cause feelings of extreme smugness.",
        is_input: false,
    },
    Slide {
        id: "3",
        icon: "person.fill",
        title: "Who are you?",
        description: "This is your unique Philanthropist ID. You can change it now, or keep it mysterious.",
        is_input: true,
    },
];
