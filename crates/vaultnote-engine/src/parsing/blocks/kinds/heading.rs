/// ATX heading syntax.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Splits a heading line into its level (clamped) and text.
    ///
    /// The text may be empty; callers decide whether that is a block.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let text = line.trim_start_matches(Self::MARKER);
        let run = line.len() - text.len();
        if run == 0 {
            return None;
        }
        Some((Self::clamp(run), text.trim_start()))
    }

    pub fn clamp(level: usize) -> u8 {
        level.clamp(1, usize::from(Self::MAX_LEVEL)) as u8
    }

    pub fn render(level: u8, text: &str) -> String {
        let marker = Self::MARKER.to_string().repeat(usize::from(level));
        format!("{marker} {text}")
    }
}
