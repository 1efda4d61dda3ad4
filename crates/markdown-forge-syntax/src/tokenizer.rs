use crate::comments::CommentDelimiter;
use crate::line::CodeLine;
use crate::passes;
use crate::profile::LanguageProfile;

/// Turns one line of source code in a single language into highlighted HTML.
///
/// Implementations describe their language through a [`LanguageProfile`] and
/// may add language-specific rules in [`LanguageTokenizer::structure`]; the
/// shared pipeline in [`passes`] does the rest.
pub trait LanguageTokenizer: Send + Sync {
    /// Canonical registry key (`"javascript"`).
    fn key(&self) -> &'static str;

    /// Fence tags that resolve to this language, lower-case.
    fn aliases(&self) -> &'static [&'static str];

    fn profile(&self) -> &LanguageProfile;

    fn comment_delimiter(&self) -> Option<CommentDelimiter> {
        self.profile().lexical.block_comment
    }

    /// Language-specific pass, run right after the lexical scan.
    fn structure(&self, line: CodeLine) -> CodeLine {
        line
    }

    fn tokenize(&self, line: &str) -> CodeLine {
        passes::run(self, line)
    }

    fn highlight(&self, line: &str) -> String {
        self.tokenize(line).to_html()
    }
}
