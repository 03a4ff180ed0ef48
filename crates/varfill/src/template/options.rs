//! Options controlling placeholder substitution.

use bon::Builder;

/// Default start marker for placeholders.
pub const DEFAULT_START: &str = "{";

/// Default end marker for placeholders.
pub const DEFAULT_END: &str = "}";

/// Default maximum nesting depth walked by [`substitute`](crate::substitute).
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Options for [`substitute`](crate::substitute) and [`flatten`](crate::flatten).
///
/// # Example
///
/// ```
/// use varfill::SubstituteOptions;
///
/// let options = SubstituteOptions::builder()
///     .start_marker("[[")
///     .end_marker("]]")
///     .max_depth(5)
///     .build();
///
/// assert_eq!(options.placeholder("user.name"), "[[user.name]]");
/// assert!(!options.simple_match());
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct SubstituteOptions {
    /// Match bare path names instead of delimited placeholders.
    #[builder(default)]
    simple_match: bool,

    #[builder(default = DEFAULT_START.to_string())]
    start_marker: String,

    #[builder(default = DEFAULT_END.to_string())]
    end_marker: String,

    /// Prefix prepended to every path name, joined with a dot.
    path_prefix: Option<String>,

    /// Containers are entered only while the current depth is below this value.
    #[builder(default = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl Default for SubstituteOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SubstituteOptions {
    pub fn simple_match(&self) -> bool {
        self.simple_match
    }

    pub fn start_marker(&self) -> &str {
        &self.start_marker
    }

    pub fn end_marker(&self) -> &str {
        &self.end_marker
    }

    pub fn path_prefix(&self) -> Option<&str> {
        self.path_prefix.as_deref()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// A copy of these options with a different depth limit.
    pub fn with_max_depth(&self, max_depth: usize) -> Self {
        Self {
            max_depth,
            ..self.clone()
        }
    }

    /// The text searched for when substituting the leaf at `path`.
    pub fn placeholder(&self, path: &str) -> String {
        if self.simple_match {
            path.to_string()
        } else {
            format!("{}{}{}", self.start_marker, path, self.end_marker)
        }
    }
}
