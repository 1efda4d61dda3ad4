use crate::comments::C_STYLE;
use crate::profile::{CallSites, LanguageProfile, LexicalRules};
use crate::span_class::SpanClass;
use crate::tokenizer::LanguageTokenizer;

pub(crate) const KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "export", "extends", "finally", "for", "from",
    "function", "get", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "of", "package", "private", "protected", "public", "return", "set", "static",
    "super", "switch", "this", "throw", "try", "typeof", "var", "void", "while", "with", "yield",
];

pub(crate) const LITERALS: &[&str] = &["true", "false", "null", "undefined", "NaN", "Infinity"];

pub(crate) const GLOBALS: &[&str] = &[
    "Array", "ArrayBuffer", "BigInt", "Boolean", "Date", "Error", "Function", "JSON", "Map",
    "Math", "Number", "Object", "Promise", "Proxy", "Reflect", "RegExp", "Set", "String",
    "Symbol", "TypeError", "WeakMap", "WeakSet", "console", "document", "globalThis", "module",
    "process", "require", "window",
];

pub(crate) fn lexical_rules() -> LexicalRules {
    LexicalRules {
        quotes: &['"', '\'', '`'],
        line_comment: Some("//"),
        block_comment: Some(C_STYLE),
        regex_literals: true,
        ..Default::default()
    }
}

pub(crate) fn base_profile(keywords: &[&str]) -> LanguageProfile {
    LanguageProfile::new(lexical_rules(), keywords)
        .with_words(SpanClass::Special, LITERALS)
        .with_words(SpanClass::Class, GLOBALS)
        .with_decorators()
        .with_calls(CallSites::Methods)
}

pub struct JavaScript {
    profile: LanguageProfile,
}

impl JavaScript {
    pub fn new() -> Self {
        Self {
            profile: base_profile(KEYWORDS),
        }
    }
}

impl Default for JavaScript {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageTokenizer for JavaScript {
    fn key(&self) -> &'static str {
        "javascript"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["js", "javascript", "mjs", "cjs", "node"]
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
    fn declaration() {
        assert_snapshot!(
            JavaScript::new().highlight("const x = 1;"),
            @r#"<span class="md-keyword">const</span> x = <span class="md-number">1</span>;"#
        );
    }

    #[test]
    fn method_call_on_global() {
        assert_snapshot!(
            JavaScript::new().highlight("console.log('hi', null);"),
            @r#"<span class="md-class">console</span>.<span class="md-call-method">log</span>(<span class="md-string">'hi'</span>, <span class="md-special">null</span>);"#
        );
    }

    #[test]
    fn regex_and_comment() {
        assert_snapshot!(
            JavaScript::new().highlight("if (/^a+$/.test(s)) return; // done"),
            @r#"<span class="md-keyword">if</span> (<span class="md-regex">/^a+$/</span>.<span class="md-call-method">test</span>(s)) <span class="md-keyword">return</span>; <span class="md-comment">// done</span>"#
        );
    }

    #[test]
    fn escapes_markup() {
        assert_snapshot!(
            JavaScript::new().highlight("a < b && c > d"),
            @"a &lt; b &amp;&amp; c &gt; d"
        );
    }
}
