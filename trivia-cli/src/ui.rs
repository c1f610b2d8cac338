//! Terminal output helpers

/// Print a success line to stderr so stdout stays machine-readable.
pub fn success(message: &str) {
    eprintln!("✓ {}", message);
}
