//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

#[cfg(not(target_arch = "wasm32"))]
fn main() {
	eprintln!("portfolio-fx runs in the browser. Build with `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
	portfolio_fx::init_logging();
	portfolio_fx::start();
}
