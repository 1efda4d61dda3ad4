//! Built-in language tokenizers, one module per language.

mod css;
mod go;
mod html;
mod javascript;
mod jsx;
mod lua;
mod python;
mod rust;
mod shell;
mod sql;
mod typescript;

pub use css::Css;
pub use go::Go;
pub use html::Html;
pub use javascript::JavaScript;
pub use jsx::Jsx;
pub use lua::Lua;
pub use python::Python;
pub use rust::Rust;
pub use shell::Shell;
pub use sql::Sql;
pub use typescript::TypeScript;

use crate::tokenizer::LanguageTokenizer;

/// Every built-in tokenizer, in registration order.
pub fn builtin() -> Vec<Box<dyn LanguageTokenizer>> {
    vec![
        Box::new(JavaScript::new()),
        Box::new(TypeScript::new()),
        Box::new(Jsx::new()),
        Box::new(Python::new()),
        Box::new(Go::new()),
        Box::new(Rust::new()),
        Box::new(Css::new()),
        Box::new(Sql::new()),
        Box::new(Lua::new()),
        Box::new(Html::new()),
        Box::new(Shell::new()),
    ]
}
