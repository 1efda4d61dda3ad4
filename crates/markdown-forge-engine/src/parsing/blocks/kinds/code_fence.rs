#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Backticks,
    Tildes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Fence signature of a trimmed line, if it starts with a fence marker.
    pub fn sig(trimmed: &str) -> Option<FenceSig> {
        if trimmed.starts_with(Self::BACKTICKS) {
            Some(FenceSig::Backticks)
        } else if trimmed.starts_with(Self::TILDES) {
            Some(FenceSig::Tildes)
        } else {
            None
        }
    }

    pub fn kind(sig: FenceSig) -> FenceKind {
        match sig {
            FenceSig::Backticks => FenceKind::Backticks,
            FenceSig::Tildes => FenceKind::Tildes,
        }
    }

    pub fn closes(kind: FenceKind, sig: Option<FenceSig>) -> bool {
        matches!(
            (kind, sig),
            (FenceKind::Backticks, Some(FenceSig::Backticks))
                | (FenceKind::Tildes, Some(FenceSig::Tildes))
        )
    }

    /// Language tag of an opening fence line: whatever follows the marker,
    /// trimmed and lower-cased. `None` when nothing follows.
    pub fn language(trimmed: &str, sig: FenceSig) -> Option<String> {
        let marker = match sig {
            FenceSig::Backticks => '`',
            FenceSig::Tildes => '~',
        };
        let tag = trimmed.trim_start_matches(marker).trim();
        (!tag.is_empty()).then(|| tag.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn detect_backtick_fence() {
        assert_eq!(CodeFence::sig("```rust"), Some(FenceSig::Backticks));
    }

    #[test]
    fn detect_tilde_fence() {
        assert_eq!(CodeFence::sig("~~~"), Some(FenceSig::Tildes));
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello"), None);
        assert_eq!(CodeFence::sig("``inline``"), None);
    }

    #[test]
    fn closes_matching_fence() {
        assert!(CodeFence::closes(
            FenceKind::Backticks,
            Some(FenceSig::Backticks)
        ));
        assert!(CodeFence::closes(FenceKind::Tildes, Some(FenceSig::Tildes)));
    }

    #[test]
    fn does_not_close_mismatched_fence() {
        assert!(!CodeFence::closes(
            FenceKind::Backticks,
            Some(FenceSig::Tildes)
        ));
        assert!(!CodeFence::closes(
            FenceKind::Tildes,
            Some(FenceSig::Backticks)
        ));
        assert!(!CodeFence::closes(FenceKind::Backticks, None));
    }

    #[rstest]
    #[case("```js", Some("js"))]
    #[case("```Python ", Some("python"))]
    #[case("```  TypeScript", Some("typescript"))]
    #[case("````rust", Some("rust"))]
    #[case("```", None)]
    #[case("```   ", None)]
    fn language_tag(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            CodeFence::language(line, FenceSig::Backticks).as_deref(),
            expected
        );
    }

    #[test]
    fn tilde_language_tag() {
        assert_eq!(
            CodeFence::language("~~~sql", FenceSig::Tildes).as_deref(),
            Some("sql")
        );
    }
}
