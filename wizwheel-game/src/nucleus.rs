//! The nucleus orbit mini-game.
//!
//! Nine particles orbit the nucleus; clicking one reveals its reflection
//! prompt and marks it. Once every particle has been clicked the nucleus
//! glows and the completion control appears. Same effect-list style as the
//! wheel session controller.

use crate::audio::Cue;
use crate::data::{Particle, ParticleRing};
use crate::session::Effect;

#[derive(Debug, Clone)]
pub struct NucleusGame {
    ring: ParticleRing,
    clicked: Vec<bool>,
    active: Option<usize>,
    glow_fired: bool,
}

impl NucleusGame {
    #[must_use]
    pub fn new(ring: ParticleRing) -> Self {
        let clicked = vec![false; ring.len()];
        Self {
            ring,
            clicked,
            active: None,
            glow_fired: false,
        }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.ring.particles
    }

    #[must_use]
    pub fn is_clicked(&self, index: usize) -> bool {
        self.clicked.get(index).copied().unwrap_or(false)
    }

    /// Particle whose prompt modal is currently open.
    #[must_use]
    pub fn active_particle(&self) -> Option<&Particle> {
        self.active.and_then(|i| self.ring.particles.get(i))
    }

    #[must_use]
    pub fn all_clicked(&self) -> bool {
        !self.clicked.is_empty() && self.clicked.iter().all(|c| *c)
    }

    /// Open a particle's prompt. A re-click only re-opens the modal; the
    /// click cue and glow check fire once per particle.
    pub fn click_particle(&mut self, index: usize) -> Vec<Effect> {
        if index >= self.ring.len() {
            return Vec::new();
        }
        if self.clicked[index] {
            self.active = Some(index);
            return Vec::new();
        }

        self.clicked[index] = true;
        self.active = Some(index);
        let mut effects = vec![Effect::Play(Cue::Particle)];
        if self.all_clicked() && !self.glow_fired {
            self.glow_fired = true;
            effects.push(Effect::Play(Cue::NucleusGlow));
        }
        effects
    }

    pub fn close_modal(&mut self) -> Vec<Effect> {
        if self.active.take().is_none() {
            return Vec::new();
        }
        vec![Effect::Play(Cue::Close)]
    }

    /// Finish the mini-game; only available once every particle is clicked.
    pub fn complete(&mut self) -> Vec<Effect> {
        if !self.all_clicked() {
            return Vec::new();
        }
        vec![Effect::Play(Cue::Complete)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> NucleusGame {
        NucleusGame::new(ParticleRing::load_from_static())
    }

    #[test]
    fn clicking_marks_and_opens_the_prompt() {
        let mut g = game();
        let effects = g.click_particle(0);
        assert!(g.is_clicked(0));
        assert_eq!(g.active_particle().unwrap().id, 1);
        assert_eq!(effects, vec![Effect::Play(Cue::Particle)]);
    }

    #[test]
    fn reclick_reopens_without_replaying_the_cue() {
        let mut g = game();
        g.click_particle(3);
        g.close_modal();
        let effects = g.click_particle(3);
        assert!(effects.is_empty());
        assert_eq!(g.active_particle().unwrap().id, 4);
    }

    #[test]
    fn out_of_range_clicks_are_ignored() {
        let mut g = game();
        assert!(g.click_particle(99).is_empty());
        assert!(g.active_particle().is_none());
    }

    #[test]
    fn glow_fires_exactly_once_when_the_ring_completes() {
        let mut g = game();
        for i in 0..8 {
            let effects = g.click_particle(i);
            assert!(!effects.contains(&Effect::Play(Cue::NucleusGlow)));
        }
        assert!(!g.all_clicked());

        let effects = g.click_particle(8);
        assert!(g.all_clicked());
        assert!(effects.contains(&Effect::Play(Cue::NucleusGlow)));

        // Nothing left to re-trigger the glow.
        g.close_modal();
        assert!(g.click_particle(8).is_empty());
    }

    #[test]
    fn completion_is_gated_on_the_full_ring() {
        let mut g = game();
        assert!(g.complete().is_empty());
        for i in 0..9 {
            g.click_particle(i);
        }
        assert_eq!(g.complete(), vec![Effect::Play(Cue::Complete)]);
    }

    #[test]
    fn close_without_open_modal_is_a_no_op() {
        let mut g = game();
        assert!(g.close_modal().is_empty());
        g.click_particle(1);
        assert_eq!(g.close_modal(), vec![Effect::Play(Cue::Close)]);
        assert!(g.active_particle().is_none());
    }
}
