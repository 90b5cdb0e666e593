//! Copy-button feedback and the contact form acknowledgement.

/// Idle copy button text.
pub const COPY_LABEL: &str = "Copy";
/// Button text while the copied state lasts.
pub const COPIED_LABEL: &str = "Copied!";
/// Class on the button while it reads [`COPIED_LABEL`].
pub const COPIED_CLASS: &str = "copied";

/// Shown after a contact form submission. Nothing is sent anywhere.
pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! Since this is a static site, please send your message directly to the email address shown above.";

/// "Copied!" state of the copy button.
///
/// Each copy bumps a generation; a revert timer only applies if no newer copy
/// happened since it was scheduled.
#[derive(Clone, Debug, Default)]
pub struct CopyFeedback {
	generation: u64,
	copied: bool,
}

impl CopyFeedback {
	/// Enter the copied state; returns the generation the revert must present.
	pub fn copied(&mut self) -> u64 {
		self.generation += 1;
		self.copied = true;
		self.generation
	}

	/// Leave the copied state if `generation` is still the latest copy.
	pub fn revert(&mut self, generation: u64) -> bool {
		if self.copied && generation == self.generation {
			self.copied = false;
			true
		} else {
			false
		}
	}

	/// Whether the button currently reads "Copied!".
	pub fn is_copied(&self) -> bool {
		self.copied
	}

	/// Button text for the current state.
	pub fn label(&self) -> &'static str {
		if self.copied { COPIED_LABEL } else { COPY_LABEL }
	}
}

/// One-line description of submitted form fields for the debug log.
pub fn describe_fields<I, S>(names: I) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let names: Vec<String> = names.into_iter().map(|n| n.as_ref().to_string()).collect();
	format!("{} field(s): {}", names.len(), names.join(", "))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn revert_restores_label() {
		let mut feedback = CopyFeedback::default();
		assert_eq!(feedback.label(), "Copy");
		let generation = feedback.copied();
		assert_eq!(feedback.label(), "Copied!");
		assert!(feedback.revert(generation));
		assert_eq!(feedback.label(), "Copy");
		assert!(!feedback.revert(generation));
	}

	#[test]
	fn stale_revert_is_ignored() {
		let mut feedback = CopyFeedback::default();
		let first = feedback.copied();
		let second = feedback.copied();
		assert!(!feedback.revert(first));
		assert!(feedback.is_copied());
		assert!(feedback.revert(second));
		assert!(!feedback.is_copied());
	}

	#[test]
	fn fields_are_listed() {
		assert_eq!(
			describe_fields(["name", "email", "message"]),
			"3 field(s): name, email, message"
		);
		assert_eq!(describe_fields(Vec::<String>::new()), "0 field(s): ");
	}
}
