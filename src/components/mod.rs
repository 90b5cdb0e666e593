//! Page components. Each keeps its rules in a DOM-free core and, on wasm, a
//! thin binding that wires the core to elements and events.

pub mod contact;
pub mod particles;
pub mod portfolio;
pub mod scheduler;
pub mod scroll;
pub mod stats;
pub mod traffic;
