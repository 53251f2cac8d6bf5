/// Top-level screens of the experience, in session order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Splash,
    Wheel,
    Nucleus,
    Reflection,
    Profile,
    Closing,
}

/// How long the splash screen holds before the wheel appears.
pub const SPLASH_DURATION_MS: u32 = 3000;

/// Delay between session completion and the reload, so the closing cue can
/// be heard.
pub const RELOAD_DELAY_MS: u32 = 1500;

/// How long the copy button shows its confirmation label.
pub const COPY_LABEL_RESET_MS: u32 = 2000;

/// The flow is strictly linear; `Closing` exits via reload only.
#[must_use]
pub const fn next_stage(stage: Stage) -> Option<Stage> {
    match stage {
        Stage::Start => Some(Stage::Splash),
        Stage::Splash => Some(Stage::Wheel),
        Stage::Wheel => Some(Stage::Nucleus),
        Stage::Nucleus => Some(Stage::Reflection),
        Stage::Reflection => Some(Stage::Profile),
        Stage::Profile => Some(Stage::Closing),
        Stage::Closing => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_advance_linearly_and_end_at_closing() {
        let mut stage = Stage::Start;
        let mut visited = vec![stage];
        while let Some(next) = next_stage(stage) {
            stage = next;
            visited.push(stage);
        }
        assert_eq!(
            visited,
            vec![
                Stage::Start,
                Stage::Splash,
                Stage::Wheel,
                Stage::Nucleus,
                Stage::Reflection,
                Stage::Profile,
                Stage::Closing,
            ]
        );
    }
}
