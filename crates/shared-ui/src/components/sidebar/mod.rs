mod component;
mod transition;

pub use component::*;
pub use transition::{TransitionGate, TRANSITION_MS};
