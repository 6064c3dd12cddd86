/// Stack of the distinct indentation widths open along the current nesting
/// path. The bottom entry is always column 0.
///
/// The stack is a plain value: the recognizer clones it before every
/// speculative alternative and restores the clone if the alternative fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentStack {
    levels: Vec<usize>,
}

impl IndentStack {
    /// Implementation limit on simultaneously open indentation levels.
    pub const MAX_LEVELS: usize = 64;
    /// Tabs advance to the next multiple of this column.
    pub const TAB_STOP: usize = 8;

    pub fn new() -> Self {
        Self { levels: vec![0] }
    }

    /// Column width of a whitespace prefix, expanding tabs to tab stops.
    pub fn compute_indent(prefix: &str) -> usize {
        prefix.chars().fold(0, |col, c| match c {
            '\t' => (col / Self::TAB_STOP + 1) * Self::TAB_STOP,
            _ => col + 1,
        })
    }

    pub fn top(&self) -> usize {
        self.levels[self.levels.len() - 1]
    }

    pub fn levels(&self) -> &[usize] {
        &self.levels
    }

    /// Nesting depth of the top entry (0 for the unindented level).
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Records a line at `level` and returns the resulting depth.
    ///
    /// Deeper levels are pushed. Shallower levels pop back to the nearest
    /// entry `<= level`, pushing `level` above it unless it matches exactly.
    ///
    /// # Panics
    ///
    /// Panics if more than [`Self::MAX_LEVELS`] levels would be open at once.
    pub fn push(&mut self, level: usize) -> usize {
        if level < self.top() {
            while self.top() > level {
                self.levels.pop();
            }
        }
        if level > self.top() {
            assert!(
                self.levels.len() < Self::MAX_LEVELS,
                "indent stack overflow: more than {} nested indentation levels",
                Self::MAX_LEVELS
            );
            self.levels.push(level);
        }
        self.depth()
    }
}

impl Default for IndentStack {
    fn default() -> Self {
        Self::new()
    }
}
