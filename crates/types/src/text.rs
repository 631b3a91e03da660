/// Resolved reading direction for a whole display string.
///
/// Direction is a single classification per string: segments inside an
/// RTL string are reordered at the container level by the renderer, never
/// within a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::Rtl)
    }
}
