use anyhow::{Context, Result};
use clap::Parser;
use markdown_forge_config::Config;
use markdown_forge_engine::{convert_markdown_to_html_with, extract_metadata};
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

#[derive(Parser, Debug)]
#[command(name = "markdown-forge", version)]
#[command(about = "Convert Markdown to HTML with highlighted code blocks")]
struct Args {
    /// Markdown file to convert; reads stdin when omitted
    input: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the front matter as TOML instead of HTML
    #[arg(long)]
    metadata: bool,

    /// Leave out the copy-to-clipboard script
    #[arg(long)]
    no_script: bool,

    /// Emit code blocks as plain escaped text
    #[arg(long)]
    no_highlight: bool,

    /// Config file to use instead of ~/.config/markdown-forge/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the effective settings to the config file and exit
    #[arg(long)]
    init_config: bool,

    /// Log debug detail (unknown languages, unterminated blocks) to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config_path(&self) -> PathBuf {
        match &self.config {
            Some(path) => Config::expand_path(path).unwrap_or_else(|| path.clone()),
            None => Config::config_path(),
        }
    }

    /// The config file's settings with command-line flags applied on top.
    fn effective_config(&self, mut config: Config) -> Config {
        if self.no_script {
            config.copy_script = false;
        }
        if self.no_highlight {
            config.highlight_code = false;
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    run(&args, &mut io::stdin().lock(), &mut io::stdout().lock())
}

fn run(args: &Args, stdin: &mut dyn Read, stdout: &mut dyn Write) -> Result<()> {
    let config_path = args.config_path();
    let loaded = Config::load_from_path(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    if loaded.is_none() {
        log::debug!("No config file at {}, using defaults", config_path.display());
    }
    let config = args.effective_config(loaded.unwrap_or_default());

    if args.init_config {
        config
            .save_to_path(&config_path)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        log::info!("Wrote config to {}", config_path.display());
        return Ok(());
    }

    let markdown = read_input(args.input.as_deref(), stdin)?;
    let rendered = if args.metadata {
        toml::to_string(&extract_metadata(&markdown)).context("Failed to serialize metadata")?
    } else {
        convert_markdown_to_html_with(&markdown, &config.render_options())
            .context("Failed to convert markdown")?
    };

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => stdout
            .write_all(rendered.as_bytes())
            .context("Failed to write to stdout")?,
    }
    Ok(())
}

fn read_input(input: Option<&Path>, stdin: &mut dyn Read) -> Result<String> {
    match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut markdown = String::new();
            stdin
                .read_to_string(&mut markdown)
                .context("Failed to read stdin")?;
            Ok(markdown)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    /// Parse `argv` with a config path inside `dir` so the user's real config
    /// is never touched.
    fn args(dir: &TempDir, argv: &[&str]) -> Args {
        let config = dir.path().join("config.toml");
        let config = config.to_string_lossy();
        let mut full = vec!["markdown-forge", "--config", config.as_ref()];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    fn run_to_string(args: &Args, stdin: &str) -> Result<String> {
        let mut out = Vec::new();
        run(args, &mut stdin.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn converts_stdin_to_stdout() {
        let dir = TempDir::new().unwrap();
        let html = run_to_string(&args(&dir, &["--no-script"]), "# Hi\ntext").unwrap();
        assert_eq!(html, "<h1>Hi</h1>\n<p>text</p>\n");
    }

    #[test]
    fn script_included_by_default() {
        let dir = TempDir::new().unwrap();
        let html = run_to_string(&args(&dir, &[]), "text").unwrap();
        assert!(html.contains("function copyToClipboard(button)"));
    }

    #[test]
    fn reads_file_and_writes_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.md");
        let output = dir.path().join("out.html");
        fs::write(&input, "```rust\nlet x = 1;\n```").unwrap();

        let argv = [
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--no-script",
        ];
        let printed = run_to_string(&args(&dir, &argv), "").unwrap();

        assert_eq!(printed, "");
        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains(r#"<code class="md-code-rust"><span class="md-keyword">let</span>"#));
    }

    #[test]
    fn no_highlight_flag() {
        let dir = TempDir::new().unwrap();
        let html = run_to_string(
            &args(&dir, &["--no-highlight", "--no-script"]),
            "```rust\nlet x = 1;\n```",
        )
        .unwrap();
        assert!(html.contains(r#"<code class="md-code-rust">let x = 1;</code>"#));
    }

    #[test]
    fn metadata_as_toml() {
        let dir = TempDir::new().unwrap();
        let out = run_to_string(
            &args(&dir, &["--metadata"]),
            "---\ntitle: Hi\ncount: 3\nkeywords: a, b\n---\n# Hi",
        )
        .unwrap();
        let parsed: toml::Table = toml::from_str(&out).unwrap();
        assert_eq!(parsed["title"].as_str(), Some("Hi"));
        assert_eq!(parsed["count"].as_float(), Some(3.0));
        assert_eq!(parsed["keywords"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn config_file_and_flags() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "copy_script = false\n[language_aliases]\nrustlang = \"rust\"\n",
        )
        .unwrap();

        let html = run_to_string(&args(&dir, &[]), "```rustlang\nfn f() {}\n```").unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains(r#"<span class="md-keyword">fn</span>"#));
    }

    #[test]
    fn init_config_writes_effective_settings() {
        let dir = TempDir::new().unwrap();
        run_to_string(&args(&dir, &["--init-config", "--no-highlight"]), "").unwrap();

        let saved = Config::load_from_path(dir.path().join("config.toml"))
            .unwrap()
            .unwrap();
        assert!(saved.copy_script);
        assert!(!saved.highlight_code);
    }

    #[test]
    fn bad_config_is_reported() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "copy_script = [").unwrap();
        let err = run_to_string(&args(&dir, &[]), "text").unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load config"));
    }

    #[test]
    fn empty_input_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = run_to_string(&args(&dir, &[]), "").unwrap_err();
        assert!(format!("{err:#}").contains("Invalid input"));
    }
}
