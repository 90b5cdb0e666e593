//! Contact section: copy-to-clipboard and the client-only form.

#[cfg(target_arch = "wasm32")]
mod bindings;
mod feedback;

#[cfg(target_arch = "wasm32")]
pub use bindings::{ContactForm, CopyButton};
pub use feedback::{ACKNOWLEDGEMENT, COPIED_CLASS, COPIED_LABEL, COPY_LABEL, CopyFeedback, describe_fields};
