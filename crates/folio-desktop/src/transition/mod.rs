//! Presentation effects
//!
//! Time-driven state machines behind the loading screen and profile page.
//! None of them touch window state. Every method takes the current time
//! (`now_ms`) so they can be tested without a frame clock.

mod easing;
mod loading;
mod typewriter;
mod entrance;
mod particles;

pub use easing::{ease_in_out, ease_out_cubic};
pub use loading::{LoadingProgress, LOADING_STEP, LOADING_TICK_MS};
pub use typewriter::{Typewriter, ERASE_INTERVAL_MS, TYPEWRITER_INTERVAL_MS};
pub use entrance::{Cue, EntranceTimeline, CARD_STAGGER_MS};
pub use particles::{Particle, ParticleField, MAX_PARTICLES};
