/// The default maximum number of nested lists and maps.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// The default maximum payload length of a single frame, 16 MiB.
pub const DEFAULT_MAX_FRAME_LEN: usize = 16 * 1024 * 1024;

/// Resource limits applied while decoding, parsing and deframing.
///
/// Use [`Limits::default()`] to get the default limits and
/// [`Limits::builder()`] to create custom limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub(crate) max_depth: usize,
    pub(crate) max_frame_len: usize,
}

/// A builder for resource limits.
///
/// This struct is typically created using [`Limits::builder()`].
#[derive(Debug, Clone)]
pub struct LimitsBuilder {
    max_depth: usize,
    max_frame_len: usize,
}

impl Default for Limits {
    /// Returns the default limits.
    ///
    /// This is equivalent to the following.
    /// ```
    /// use strata::{Limits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_FRAME_LEN};
    ///
    /// let limits = Limits::builder()
    ///     .max_depth(DEFAULT_MAX_DEPTH)
    ///     .max_frame_len(DEFAULT_MAX_FRAME_LEN)
    ///     .build();
    /// assert_eq!(limits, Limits::default());
    /// ```
    #[inline]
    fn default() -> Self {
        LimitsBuilder::new().build()
    }
}

impl Limits {
    /// Create a new limits builder.
    ///
    /// # Examples
    ///
    /// ```
    /// let limits = strata::Limits::builder().max_depth(32).build();
    /// assert_eq!(limits.max_depth(), 32);
    /// ```
    #[inline]
    pub fn builder() -> LimitsBuilder {
        LimitsBuilder::new()
    }

    /// The maximum number of nested lists and maps.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The maximum payload length of a single frame in bytes.
    #[inline]
    pub fn max_frame_len(&self) -> usize {
        self.max_frame_len
    }
}

impl LimitsBuilder {
    /// Creates a new limits builder populated with the defaults.
    #[inline]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_frame_len: DEFAULT_MAX_FRAME_LEN,
        }
    }

    /// Set the maximum number of nested lists and maps.
    ///
    /// # Panics
    ///
    /// If the depth is zero.
    #[inline]
    pub fn max_depth(&mut self, depth: usize) -> &mut Self {
        assert!(depth > 0, "maximum depth must be at least one");
        self.max_depth = depth;
        self
    }

    /// Set the maximum payload length of a single frame.
    ///
    /// # Panics
    ///
    /// If the length is zero or does not fit in the four byte length prefix.
    #[inline]
    pub fn max_frame_len(&mut self, len: usize) -> &mut Self {
        assert!(
            len > 0 && u32::try_from(len).is_ok(),
            "maximum frame length must be in 1..=u32::MAX"
        );
        self.max_frame_len = len;
        self
    }

    /// Builds the limits.
    #[inline]
    pub fn build(&self) -> Limits {
        Limits {
            max_depth: self.max_depth,
            max_frame_len: self.max_frame_len,
        }
    }
}
