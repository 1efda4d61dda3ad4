use std::sync::OnceLock;

use regex::Regex;

use crate::comments::C_STYLE;
use crate::line::CodeLine;
use crate::profile::{LanguageProfile, LexicalRules};
use crate::span_class::SpanClass;
use crate::tokenizer::LanguageTokenizer;

const KEYWORDS: &[&str] = &[
    "add", "all", "alter", "and", "as", "asc", "begin", "between", "by", "case", "cascade",
    "check", "column", "commit", "constraint", "create", "cross", "database", "default",
    "delete", "desc", "distinct", "drop", "else", "end", "exists", "foreign", "from", "full",
    "function", "grant", "group", "having", "if", "in", "index", "inner", "insert", "into",
    "is", "join", "key", "language", "left", "like", "limit", "not", "null", "offset", "on",
    "or", "order", "outer", "primary", "procedure", "references", "replace", "return",
    "returns", "right", "rollback", "select", "set", "table", "then", "trigger", "truncate",
    "union", "unique", "update", "values", "view", "when", "where", "with",
];

const DATA_TYPES: &[&str] = &[
    "bigint", "bigserial", "binary", "bit", "blob", "boolean", "bool", "bytea", "char",
    "date", "datetime", "decimal", "double", "float", "int", "integer", "interval", "json",
    "jsonb", "money", "numeric", "real", "serial", "smallint", "text", "time", "timestamp",
    "timestamptz", "tinyint", "uuid", "varchar",
];

const LITERALS: &[&str] = &["true", "false"];

/// `$$` body delimiters of PostgreSQL functions.
fn dollar_quote_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\$").expect("Invalid dollar quote regex"))
}

pub struct Sql {
    profile: LanguageProfile,
}

impl Sql {
    pub fn new() -> Self {
        let lexical = LexicalRules {
            quotes: &['\'', '"'],
            line_comment: Some("--"),
            block_comment: Some(C_STYLE),
            ..Default::default()
        };
        Self {
            profile: LanguageProfile::case_insensitive(lexical, KEYWORDS)
                .with_words(SpanClass::Decorator, DATA_TYPES)
                .with_words(SpanClass::Special, LITERALS)
                .with_punctuation(),
        }
    }
}

impl Default for Sql {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageTokenizer for Sql {
    fn key(&self) -> &'static str {
        "sql"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["sql", "psql", "pgsql", "postgres", "postgresql", "mysql", "sqlite"]
    }

    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    fn structure(&self, line: CodeLine) -> CodeLine {
        line.wrap_matches(dollar_quote_regex(), SpanClass::Decorator)
    }
}
