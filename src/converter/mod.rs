//! The pandoc converter: option assembly plus subprocess invocation.

mod exec;
mod options;

use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;
use crate::formats;

pub use self::exec::{pandoc_path, set_pandoc_path};
pub use self::options::PandocOption;

/// Input handed to pandoc: either an inline string piped to its standard
/// input, or an ordered list of file paths passed as leading positional
/// arguments. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Inline document content, piped via stdin.
    Text(String),
    /// Paths of input files, joined with spaces on the command line.
    /// The paths are not shell-escaped; callers supply safe values.
    Files(Vec<PathBuf>),
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<PathBuf>> for Input {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self::Files(paths)
    }
}

impl From<Vec<&str>> for Input {
    fn from(paths: Vec<&str>) -> Self {
        Self::Files(paths.into_iter().map(PathBuf::from).collect())
    }
}

/// One conversion request against the pandoc executable.
///
/// A converter accumulates options across construction and invocation
/// calls; each [`convert`](Converter::convert) spawns one pandoc process
/// and blocks until it exits (or the configured timeout expires).
///
/// # Example
///
/// ```no_run
/// use pandoc_wrap::Converter;
///
/// let html = Converter::markdown("# A Title").to_html()?;
/// # Ok::<(), pandoc_wrap::Error>(())
/// ```
pub struct Converter {
    input: Option<Input>,
    options: Vec<PandocOption>,
    writer: String,
    binary_output: bool,
    timeout: Option<Duration>,
}

impl Converter {
    /// Creates a converter for the given input. Accepts an inline string
    /// or a list of file paths; see [`Input`].
    pub fn new(input: impl Into<Input>) -> Self {
        Self {
            input: Some(input.into()),
            options: Vec::new(),
            writer: "html".to_string(),
            binary_output: false,
            timeout: None,
        }
    }

    /// Creates a converter with no input at all. Pandoc is invoked with
    /// the assembled options only.
    pub fn without_input() -> Self {
        Self {
            input: None,
            options: Vec::new(),
            writer: "html".to_string(),
            binary_output: false,
            timeout: None,
        }
    }

    /// One-shot conversion: build, convert, done.
    pub fn convert_input(
        input: impl Into<Input>,
        options: Vec<PandocOption>,
    ) -> Result<Vec<u8>> {
        Self::new(input).options(options).convert()
    }

    /// Appends a bare flag, e.g. `"standalone"` or `"s"`.
    pub fn option(mut self, name: impl Into<String>) -> Self {
        self.options.push(PandocOption::flag(name));
        self
    }

    /// Appends a flag with an argument, e.g. `("to", "rst")`.
    pub fn option_with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.options.push(PandocOption::value(name, value));
        self
    }

    /// Appends a sequence of options, preserving their order.
    pub fn options(mut self, options: impl IntoIterator<Item = PandocOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Bounds the wall-clock time of subsequent invocations. Equivalent to
    /// supplying a `timeout` option with the duration in seconds.
    pub fn timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    /// The writer format the output will be produced in, as resolved from
    /// the most recent `to`/`t` option (`html` until one is seen).
    pub fn writer(&self) -> &str {
        &self.writer
    }

    /// Renders the pending options into command-line tokens, in order.
    ///
    /// Rendering also resolves instance state carried by reserved options:
    /// `to`/`t` records the writer (and switches to file-based capture for
    /// binary writers), and `timeout` sets the time bound instead of
    /// producing a token. A `timeout` value that does not parse as a
    /// non-negative, finite number of seconds is consumed and ignored
    /// (logged at warn level); it never reaches the command line.
    pub fn tokens(&mut self) -> Vec<String> {
        let options = std::mem::take(&mut self.options);
        let mut tokens = Vec::new();
        self.render_into(&options, &mut tokens);
        self.options = options;
        tokens
    }

    fn render_into(&mut self, options: &[PandocOption], out: &mut Vec<String>) {
        for option in options {
            match option {
                PandocOption::Flag(name) => {
                    if name.is_empty() {
                        continue;
                    }
                    out.push(options::format_flag(name));
                }
                PandocOption::Value(name, value) => {
                    if name.is_empty() || self.note_option(name, value) {
                        continue;
                    }
                    out.push(options::format_flag(name));
                    out.push(value.clone());
                }
                PandocOption::Group(inner) => self.render_into(inner, out),
            }
        }
    }

    /// Records instance state for reserved options. Returns true when the
    /// option is consumed entirely and must not render a token.
    fn note_option(&mut self, name: &str, value: &str) -> bool {
        match name {
            "t" | "to" => {
                self.writer = value.to_string();
                if formats::is_binary_writer(value) {
                    self.binary_output = true;
                }
                false
            }
            "timeout" => {
                let limit = value
                    .parse::<f64>()
                    .ok()
                    .and_then(|seconds| Duration::try_from_secs_f64(seconds).ok());
                match limit {
                    Some(limit) => self.timeout = Some(limit),
                    None => log::warn!("ignoring unusable timeout value {value:?}"),
                }
                true
            }
            _ => false,
        }
    }

    /// Runs the conversion and returns pandoc's output.
    ///
    /// Text writers produce their output on stdout, which is returned as
    /// captured. Binary writers (see [`formats::BINARY_WRITERS`]) are
    /// redirected to a temporary file, whose raw bytes are returned; the
    /// file is removed on every exit path.
    pub fn convert(&mut self) -> Result<Vec<u8>> {
        let mut tokens = self.tokens();
        if !self.binary_output {
            return self.invoke(&tokens);
        }

        let capture = tempfile::NamedTempFile::new()?;
        tokens.push("--output".to_string());
        tokens.push(capture.path().display().to_string());
        self.invoke(&tokens)?;
        let bytes = std::fs::read(capture.path())?;
        // `capture` is dropped here, unlinking the file.
        Ok(bytes)
    }

    /// Appends a `to` option and converts. Backs the generated
    /// `to_<writer>` methods.
    pub(crate) fn convert_to(&mut self, writer: &str) -> Result<Vec<u8>> {
        self.options.push(PandocOption::value("to", writer));
        self.convert()
    }

    fn invoke(&self, tokens: &[String]) -> Result<Vec<u8>> {
        let mut command = pandoc_path();
        if let Some(Input::Files(paths)) = &self.input {
            for path in paths {
                command.push(' ');
                command.push_str(&path.display().to_string());
            }
        }
        for token in tokens {
            command.push(' ');
            command.push_str(token);
        }

        let stdin = match &self.input {
            Some(Input::Text(text)) => Some(text.as_str()),
            _ => None,
        };
        exec::run(&command, stdin, self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(tokens: &[String]) -> String {
        tokens.join(" ")
    }

    #[test]
    fn test_mixed_options_render_in_order() {
        let mut converter = Converter::new("# Test String").options(vec![
            PandocOption::flag("s"),
            PandocOption::group(vec![
                PandocOption::value("f", "markdown"),
                PandocOption::value("to", "rst"),
            ]),
            PandocOption::flag("no-wrap"),
        ]);
        assert_eq!(
            joined(&converter.tokens()),
            "-s -f markdown --to rst --no-wrap"
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut converter = Converter::new("x")
            .option("toc")
            .option_with("to", "rst")
            .option("toc");
        let first = converter.tokens();
        assert_eq!(joined(&first), "--toc --to rst --toc");
        assert_eq!(converter.tokens(), first);
    }

    #[test]
    fn test_underscore_options() {
        let mut converter = Converter::new("x")
            .option_with("email_obfuscation", "javascript")
            .option("table_of_contents");
        assert_eq!(
            joined(&converter.tokens()),
            "--email-obfuscation javascript --table-of-contents"
        );
    }

    #[test]
    fn test_empty_flag_contributes_nothing() {
        let mut converter = Converter::new("x")
            .option("")
            .option_with("", "ignored")
            .option("toc");
        assert_eq!(joined(&converter.tokens()), "--toc");
    }

    #[test]
    fn test_to_option_resolves_writer() {
        let mut converter = Converter::new("x").option_with("t", "rst");
        assert_eq!(joined(&converter.tokens()), "-t rst");
        assert_eq!(converter.writer(), "rst");
    }

    #[test]
    fn test_timeout_option_renders_no_token() {
        let mut converter = Converter::new("x")
            .option_with("timeout", 1)
            .option_with("to", "html");
        assert_eq!(joined(&converter.tokens()), "--to html");
    }
}
