//! Summarization policy for the descriptor transform.
//!
//! A [`DescribePolicy`] is an immutable configuration record created once per
//! invocation. It holds the truncation thresholds and the two behavioral
//! switches (random example selection and jq-style path keys). Policies make
//! no runtime decisions of their own; the transform reads them.

/// Default maximum array length before an array collapses to a summary.
pub const MAX_ARRAY_DEFAULT: usize = 1;

/// Default maximum string length (in Unicode scalar values) before a string
/// is truncated.
pub const MAX_STRING_DEFAULT: usize = 10;

/// Configuration controlling truncation thresholds and transform behavior.
///
/// Use the constructor [`DescribePolicy::new`] and the `with_*` builder
/// methods to create instances. A policy is never mutated during a transform.
///
/// # Example
///
/// ```rust
/// use describe_json::DescribePolicy;
///
/// let policy = DescribePolicy::new()
///     .with_max_array_size(3)
///     .with_path_keys(true);
/// assert_eq!(policy.max_array_size(), 3);
/// assert!(policy.path_keys_enabled());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DescribePolicy {
    /// Arrays longer than this collapse to the `[label, example]` form.
    max_array_size: usize,
    /// Strings longer than this are truncated with a length and digest suffix.
    max_string_size: usize,
    /// Pick a random example element instead of the first when collapsing.
    randomize: bool,
    /// Rewrite object keys to full jq-style access paths.
    path_keys_enabled: bool,
}

impl DescribePolicy {
    /// Constructs a policy with the default thresholds and both switches off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_array_size: MAX_ARRAY_DEFAULT,
            max_string_size: MAX_STRING_DEFAULT,
            randomize: false,
            path_keys_enabled: false,
        }
    }

    /// Uses a specific maximum array length.
    #[must_use]
    pub fn with_max_array_size(mut self, max_array_size: usize) -> Self {
        self.max_array_size = max_array_size;
        self
    }

    /// Uses a specific maximum string length.
    #[must_use]
    pub fn with_max_string_size(mut self, max_string_size: usize) -> Self {
        self.max_string_size = max_string_size;
        self
    }

    /// Chooses a random example element when collapsing arrays.
    #[must_use]
    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Rewrites object keys to full jq-style access paths.
    #[must_use]
    pub fn with_path_keys(mut self, path_keys_enabled: bool) -> Self {
        self.path_keys_enabled = path_keys_enabled;
        self
    }

    /// The maximum array length before an array collapses.
    pub fn max_array_size(&self) -> usize {
        self.max_array_size
    }

    /// The maximum string length before a string is truncated.
    pub fn max_string_size(&self) -> usize {
        self.max_string_size
    }

    /// Whether a random example element is chosen when collapsing arrays.
    pub fn randomize(&self) -> bool {
        self.randomize
    }

    /// Whether object keys are rewritten to jq-style access paths.
    pub fn path_keys_enabled(&self) -> bool {
        self.path_keys_enabled
    }
}

impl std::default::Default for DescribePolicy {
    fn default() -> Self {
        Self::new()
    }
}
