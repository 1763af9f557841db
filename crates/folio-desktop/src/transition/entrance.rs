//! Intro and home page entrance timelines

use serde::Serialize;
use super::ease_in_out;

/// Delay between consecutive skill cards sliding in
pub const CARD_STAGGER_MS: f64 = 120.0;

/// Step of an entrance sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// Electrons start orbiting
    Orbit,
    HideBlue,
    HideYellow,
    HideGreen,
    HideRed,
    /// Nucleus grows to fill the screen
    ExpandNucleus,
    /// Nucleus fades to black
    Darken,
    /// Profile page replaces the loader
    ShowProfile,
    /// Avatar springs in on the home page
    ScaleInProfile,
    ShowGreeting,
    /// Section cards slide in, each staggered by [`CARD_STAGGER_MS`]
    ShowCards,
    ShowSocials,
}

/// Loader cues, offsets from the start in milliseconds
const LOADER_CUES: [(Cue, f64); 8] = [
    (Cue::Orbit, 0.0),
    (Cue::HideBlue, 400.0),
    (Cue::HideYellow, 800.0),
    (Cue::HideGreen, 1200.0),
    (Cue::HideRed, 1400.0),
    (Cue::ExpandNucleus, 2000.0),
    (Cue::Darken, 3000.0),
    (Cue::ShowProfile, 5000.0),
];

/// Home page cues
const HOME_CUES: [(Cue, f64); 4] = [
    (Cue::ScaleInProfile, 300.0),
    (Cue::ShowGreeting, 800.0),
    (Cue::ShowCards, 1300.0),
    (Cue::ShowSocials, 1800.0),
];

/// Entrance sequence started at a fixed time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceTimeline {
    start_ms: f64,
    cues: &'static [(Cue, f64)],
}

impl EntranceTimeline {
    /// Atom loader sequence ending with the profile page
    pub fn loader(start_ms: f64) -> Self {
        Self {
            start_ms,
            cues: &LOADER_CUES,
        }
    }

    /// Home page sequence: avatar, greeting, cards, socials
    pub fn home(start_ms: f64) -> Self {
        Self {
            start_ms,
            cues: &HOME_CUES,
        }
    }

    /// Every cue with its offset in milliseconds, in firing order
    pub fn cues(&self) -> &'static [(Cue, f64)] {
        self.cues
    }

    /// Absolute time a cue fires, if it belongs to this sequence
    pub fn time_of(&self, cue: Cue) -> Option<f64> {
        self.cues
            .iter()
            .find(|(c, _)| *c == cue)
            .map(|(_, offset)| self.start_ms + offset)
    }

    /// Absolute time the card at `index` starts sliding in
    pub fn card_start(&self, index: usize) -> Option<f64> {
        let cards = self.time_of(Cue::ShowCards)?;
        Some(cards + index as f64 * CARD_STAGGER_MS)
    }

    /// Cues that have fired by `now_ms`
    pub fn fired(&self, now_ms: f64) -> Vec<Cue> {
        self.cues
            .iter()
            .filter(|(_, offset)| self.start_ms + offset <= now_ms)
            .map(|(cue, _)| *cue)
            .collect()
    }

    /// Cues that fire in `(since_ms, now_ms]`, for hosts polling once per frame
    pub fn due(&self, since_ms: f64, now_ms: f64) -> Vec<Cue> {
        self.cues
            .iter()
            .filter(|(_, offset)| {
                let at = self.start_ms + offset;
                at > since_ms && at <= now_ms
            })
            .map(|(cue, _)| *cue)
            .collect()
    }

    /// Eased `[0, 1]` progress of an animation of `duration_ms` kicked off by `cue`.
    ///
    /// A cue outside this sequence stays at 0. A non-positive or non-finite
    /// duration jumps straight to 1 once the cue fires.
    pub fn fade(&self, cue: Cue, duration_ms: f64, now_ms: f64) -> f32 {
        let Some(at) = self.time_of(cue) else {
            return 0.0;
        };
        animate(at, duration_ms, now_ms)
    }

    /// Eased progress of the slide-in of the card at `index`
    pub fn card_progress(&self, index: usize, duration_ms: f64, now_ms: f64) -> f32 {
        match self.card_start(index) {
            Some(at) => animate(at, duration_ms, now_ms),
            None => 0.0,
        }
    }

    /// Last cue has fired
    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.cues
            .last()
            .map_or(true, |(_, offset)| now_ms >= self.start_ms + offset)
    }
}

fn animate(at: f64, duration_ms: f64, now_ms: f64) -> f32 {
    let elapsed = now_ms - at;
    if !duration_ms.is_finite() || duration_ms <= 0.0 {
        return if elapsed >= 0.0 { 1.0 } else { 0.0 };
    }
    ease_in_out((elapsed / duration_ms) as f32)
}
