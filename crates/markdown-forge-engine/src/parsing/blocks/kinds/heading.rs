/// ATX headings, levels 1 to 5.
pub struct Heading;

impl Heading {
    /// Longest prefix first so `## x` is never read as level 1.
    pub const PREFIXES: [(&'static str, u8); 5] = [
        ("##### ", 5),
        ("#### ", 4),
        ("### ", 3),
        ("## ", 2),
        ("# ", 1),
    ];

    /// Level and text of a trimmed heading line.
    pub fn parse(trimmed: &str) -> Option<(u8, &str)> {
        Self::PREFIXES.iter().find_map(|&(prefix, level)| {
            trimmed
                .strip_prefix(prefix)
                .map(|text| (level, text.trim_start()))
        })
    }
}
