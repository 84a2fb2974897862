//! Configuration options for Application format deserialization.
//!
//! The format has exactly one knob: whether keys are matched against record
//! field names case-insensitively. There is no delimiter customization and no
//! line-ending customization for input, and encoding takes no configuration
//! at all.
//!
//! ## Examples
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_application::{from_str_with_options, ApplicationOptions};
//!
//! #[derive(Deserialize)]
//! struct Flags {
//!     verbose: bool,
//! }
//!
//! let options = ApplicationOptions::new().with_case_insensitive_fields(true);
//! let flags: Flags = from_str_with_options("VERBOSE: true", options).unwrap();
//! assert!(flags.verbose);
//! ```

/// Configuration options for Application format deserialization.
///
/// Fixed at construction and applied uniformly to every decode call made
/// through the configured [`Deserializer`](crate::Deserializer). Holds no
/// per-call state, so a single value is safe to clone and share across
/// threads.
///
/// # Examples
///
/// ```rust
/// use serde_application::ApplicationOptions;
///
/// // Default: keys must match field names exactly
/// let options = ApplicationOptions::new();
/// assert!(!options.case_insensitive_fields);
///
/// // Opt in to case-insensitive key matching
/// let options = ApplicationOptions::new().with_case_insensitive_fields(true);
/// assert!(options.case_insensitive_fields);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ApplicationOptions {
    pub case_insensitive_fields: bool,
}

impl ApplicationOptions {
    /// Creates default options (exact, case-sensitive key matching).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether keys are matched against record field names
    /// case-insensitively.
    ///
    /// Matching is ASCII case folding; record field names are identifiers, so
    /// this is the whole alphabet that can differ. With two field names that
    /// collide under case folding the first declared field wins — declaring
    /// such a record is a configuration error this crate does not defend
    /// against.
    #[must_use]
    pub fn with_case_insensitive_fields(mut self, enabled: bool) -> Self {
        self.case_insensitive_fields = enabled;
        self
    }
}
