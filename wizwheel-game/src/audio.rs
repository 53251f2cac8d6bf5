//! Sound-cue model and the playback capability seam.
//!
//! Controllers emit [`Cue`] values at transition points and never observe
//! playback outcome: an [`AudioSink`] must be fire-and-forget, must not
//! panic, and must tolerate platforms that block playback until a user
//! gesture has occurred.

/// Background music resting volume.
pub const BACKGROUND_VOLUME: f32 = 0.25;

/// Background music volume while the wheel is spinning.
pub const DUCKED_VOLUME: f32 = 0.08;

/// A named sound-effect trigger point, decoupled from any audio asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Click,
    Hover,
    Spin,
    Reveal,
    Success,
    Copy,
    Close,
    Transition,
    Submit,
    Awaken,
    Particle,
    NucleusGlow,
    Complete,
    SessionEnd,
    Splash,
    Background,
}

impl Cue {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Hover => "hover",
            Self::Spin => "spin",
            Self::Reveal => "reveal",
            Self::Success => "success",
            Self::Copy => "copy",
            Self::Close => "close",
            Self::Transition => "transition",
            Self::Submit => "submit",
            Self::Awaken => "awaken",
            Self::Particle => "particle",
            Self::NucleusGlow => "nucleus-glow",
            Self::Complete => "complete",
            Self::SessionEnd => "session-end",
            Self::Splash => "splash",
            Self::Background => "background",
        }
    }

    /// Default playback options for this cue.
    #[must_use]
    pub const fn default_opts(self) -> PlayOpts {
        match self {
            Self::Background => PlayOpts {
                volume: BACKGROUND_VOLUME,
                looped: true,
            },
            Self::Hover => PlayOpts {
                volume: 0.3,
                looped: false,
            },
            Self::Reveal | Self::Awaken => PlayOpts {
                volume: 0.8,
                looped: false,
            },
            Self::Spin => PlayOpts {
                volume: 0.7,
                looped: false,
            },
            _ => PlayOpts {
                volume: 0.6,
                looped: false,
            },
        }
    }
}

/// Volume and looping for a single playback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayOpts {
    pub volume: f32,
    pub looped: bool,
}

/// Playback capability injected into controllers.
///
/// Implementations must never panic and must swallow platform playback
/// failures; the session state machine does not depend on any outcome here.
pub trait AudioSink {
    fn play(&self, cue: Cue, opts: PlayOpts);

    /// Play a cue with its default options.
    fn play_cue(&self, cue: Cue) {
        self.play(cue, cue.default_opts());
    }

    /// Adjust the background music volume, if music is playing. The default
    /// implementation ignores the request.
    fn set_background_volume(&self, _volume: f32) {}
}

/// Sink that drops every cue; used in tests and headless contexts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&self, _cue: Cue, _opts: PlayOpts) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_cue_loops_at_resting_volume() {
        let opts = Cue::Background.default_opts();
        assert!(opts.looped);
        assert!((opts.volume - BACKGROUND_VOLUME).abs() < f32::EPSILON);
    }

    #[test]
    fn effect_cues_do_not_loop() {
        for cue in [Cue::Click, Cue::Spin, Cue::Reveal, Cue::SessionEnd] {
            assert!(!cue.default_opts().looped, "{} should not loop", cue.as_str());
        }
    }

    #[test]
    fn null_sink_accepts_every_cue() {
        let sink = NullSink;
        sink.play_cue(Cue::Reveal);
        sink.set_background_volume(DUCKED_VOLUME);
    }
}
