//! Loader configuration.

/// Default upper bound for a single source line, terminator excluded.
pub const DEFAULT_MAX_LINE_LEN: usize = 4096;

/// Options for the built-in OBJ parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjOptions {
    /// Negate V of every `vt` record, for texture loaders with an inverted V axis (e.g. DDS).
    pub flip_v: bool,
    pub max_line_len: usize,
}

impl Default for ObjOptions {
    fn default() -> Self {
        Self {
            flip_v: false,
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

impl ObjOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flip_v(mut self, flip_v: bool) -> Self {
        self.flip_v = flip_v;
        self
    }

    /// Values below 1 are clamped to 1.
    pub fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_do_not_flip() {
        let o = ObjOptions::default();
        assert!(!o.flip_v);
        assert_eq!(o.max_line_len, DEFAULT_MAX_LINE_LEN);
    }

    #[test]
    fn builder_setters() {
        let o = ObjOptions::new().with_flip_v(true).with_max_line_len(0);
        assert!(o.flip_v);
        assert_eq!(o.max_line_len, 1);
    }
}
