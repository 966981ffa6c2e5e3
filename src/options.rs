//! Configuration options for conversion.
//!
//! [`ConverterOptions`] bounds the resources a single conversion may use:
//! how deeply sub-collections may nest and how many numbers a single range
//! segment may synthesize.
//!
//! ## Examples
//!
//! ```rust
//! use conf_literal::{Converter, ConverterOptions, TypeGraph};
//!
//! let options = ConverterOptions::new()
//!     .with_max_depth(8)
//!     .with_max_range_len(10_000);
//! let converter = Converter::new(TypeGraph::standard(), options);
//! ```

/// Default ceiling for sub-collection nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default ceiling for numbers synthesized by one `a..b` segment.
pub const DEFAULT_MAX_RANGE_LEN: usize = 1 << 20;

/// Resource limits applied by a [`Converter`](crate::Converter).
///
/// # Examples
///
/// ```rust
/// use conf_literal::ConverterOptions;
///
/// let options = ConverterOptions::new();
/// assert_eq!(options.max_depth, 64);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConverterOptions {
    pub max_depth: usize,
    pub max_range_len: usize,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        ConverterOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            max_range_len: DEFAULT_MAX_RANGE_LEN,
        }
    }
}

impl ConverterOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many levels of nested collections a literal may contain.
    ///
    /// Deeper input fails with [`Error::NestingTooDeep`](crate::Error::NestingTooDeep)
    /// instead of exhausting the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conf_literal::ConverterOptions;
    ///
    /// let options = ConverterOptions::new().with_max_depth(4);
    /// assert_eq!(options.max_depth, 4);
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets how many numbers one `a..b` segment may expand to.
    #[must_use]
    pub fn with_max_range_len(mut self, max_range_len: usize) -> Self {
        self.max_range_len = max_range_len;
        self
    }
}
