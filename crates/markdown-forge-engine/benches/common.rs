// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** _content_ and `code`.\n\n- Bullet point\n- Another [item](/x)\n\n```rust\nfn example() {\n    println!(\"Hello\"); /* note */\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_front_matter_document(sections: usize) -> String {
    let mut content = String::from(
        "---\ntitle: \"Benchmark\"\nslug: Benchmark Document\ndate: 2024-03-05\nkeywords: a, b, c\n---\n",
    );
    content.push_str(&generate_complex_markdown(sections));
    content
}

#[allow(dead_code)]
pub fn generate_complex_markdown(sections: usize) -> String {
    const FENCES: [(&str, &str); 4] = [
        ("python", "def f(x):\n    \"\"\"Doc\n    string.\"\"\"\n    return x * 2\n"),
        ("ts", "const y: number = compute(1, 'two');\n/* multi\n   line */\n"),
        ("sql", "SELECT id FROM t WHERE x > 1; -- filter\n"),
        ("html", "<div class=\"a\"><!-- c --></div>\n"),
    ];

    let mut content = String::new();
    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\n"));
        content.push_str("Some paragraph content with *multiple* sentences. This helps create realistic document structure for benchmarking.\n\n");
        for i in 0..3 {
            content.push_str(&format!("{}. Item {i} in section {section}\n", i + 1));
        }
        content.push('\n');
        let (lang, code) = FENCES[section % FENCES.len()];
        content.push_str(&format!("```{lang}\n{code}```\n\n"));
    }
    content
}
