//! Number formatting for counters.

/// Group digits in threes with commas, e.g. `1234567` -> `"1,234,567"`.
pub fn thousands(n: u64) -> String {
	let digits = n.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(c);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn groups_by_three() {
		assert_eq!(thousands(0), "0");
		assert_eq!(thousands(999), "999");
		assert_eq!(thousands(1000), "1,000");
		assert_eq!(thousands(1234), "1,234");
		assert_eq!(thousands(123_456), "123,456");
		assert_eq!(thousands(u64::MAX), "18,446,744,073,709,551,615");
	}
}
