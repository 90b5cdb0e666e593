//! Animated statistics strip.

#[cfg(target_arch = "wasm32")]
mod bindings;
mod counter;

#[cfg(target_arch = "wasm32")]
pub use bindings::StatsCounter;
pub use counter::{CountUp, CountUpTask, StatsTrigger, TextSink, parse_target};
