/// `E{...}` escape substitutions.
pub struct Escape;

impl Escape {
    pub const LEFT_BRACE: &'static str = "lb";
    pub const RIGHT_BRACE: &'static str = "rb";

    /// Text an escape with the given content stands for.
    pub fn substitute(content: &str) -> &str {
        match content {
            Self::LEFT_BRACE => "{",
            Self::RIGHT_BRACE => "}",
            other => other,
        }
    }
}
