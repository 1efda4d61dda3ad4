use crate::comments::CommentDelimiter;
use crate::profile::{CallSites, LanguageProfile, LexicalRules};
use crate::span_class::SpanClass;
use crate::tokenizer::LanguageTokenizer;

const KEYWORDS: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda",
    "match", "case", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with",
    "yield",
];

const SPECIAL: &[&str] = &[
    "True", "False", "None", "self", "cls", "print", "len", "range", "open", "int", "str",
    "float", "bool", "list", "dict", "set", "tuple", "isinstance", "super",
];

const STDLIB: &[&str] = &[
    "sys", "os", "subprocess", "shutil", "glob", "pathlib", "tempfile", "io", "logging",
    "platform", "collections", "heapq", "bisect", "array", "struct", "re", "string", "textwrap",
    "json", "csv", "pickle", "math", "random", "statistics", "datetime", "time", "calendar",
    "itertools", "functools", "operator", "typing", "dataclasses", "enum", "asyncio",
    "threading", "multiprocessing", "socket", "http", "urllib", "unittest",
];

pub struct Python {
    profile: LanguageProfile,
}

impl Python {
    pub fn new() -> Self {
        let lexical = LexicalRules {
            quotes: &['"', '\''],
            line_comment: Some("#"),
            block_comment: Some(CommentDelimiter::Symmetric { marker: "\"\"\"" }),
            ..Default::default()
        };
        Self {
            profile: LanguageProfile::new(lexical, KEYWORDS)
                .with_words(SpanClass::Special, SPECIAL)
                .with_words(SpanClass::Class, STDLIB)
                .with_decorators()
                .with_calls(CallSites::Methods),
        }
    }
}

impl Default for Python {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageTokenizer for Python {
    fn key(&self) -> &'static str {
        "python"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["py", "python", "python3"]
    }

    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn function_definition() {
        assert_snapshot!(
            Python::new().highlight("def greet(self, name='x'):  # hi"),
            @r#"<span class="md-keyword">def</span> greet(<span class="md-special">self</span>, name=<span class="md-string">'x'</span>):  <span class="md-comment"># hi</span>"#
        );
    }

    #[test]
    fn decorator_and_module_call() {
        assert_snapshot!(
            Python::new().highlight("@cache"),
            @r#"<span class="md-decorator">@cache</span>"#
        );
        assert_snapshot!(
            Python::new().highlight("os.path.join(a, 2)"),
            @r#"<span class="md-class">os</span>.path.<span class="md-call-method">join</span>(a, <span class="md-number">2</span>)"#
        );
    }
}
