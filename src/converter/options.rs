//! Pandoc command-line option model and flag rendering.

/// A single pandoc option, as supplied by the caller.
///
/// Options are rendered to command-line tokens in the order given; nothing
/// is reordered or deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PandocOption {
    /// A bare flag, e.g. `standalone` renders as `--standalone`.
    Flag(String),
    /// A flag with an argument, e.g. `("to", "html")` renders as `--to html`.
    Value(String, String),
    /// An ordered group of options, flattened recursively in place.
    Group(Vec<PandocOption>),
}

impl PandocOption {
    /// Creates a bare flag option.
    pub fn flag(name: impl Into<String>) -> Self {
        Self::Flag(name.into())
    }

    /// Creates a flag option carrying an argument.
    pub fn value(name: impl Into<String>, value: impl ToString) -> Self {
        Self::Value(name.into(), value.to_string())
    }

    /// Creates a nested option group.
    pub fn group(options: Vec<PandocOption>) -> Self {
        Self::Group(options)
    }
}

impl From<&str> for PandocOption {
    fn from(name: &str) -> Self {
        Self::Flag(name.to_string())
    }
}

impl From<(&str, &str)> for PandocOption {
    fn from((name, value): (&str, &str)) -> Self {
        Self::Value(name.to_string(), value.to_string())
    }
}

/// Renders an option name as a pandoc command-line flag.
///
/// A one-character name becomes a short option (`t` -> `-t`); anything
/// longer becomes a long option with underscores converted to hyphens
/// (`email_obfuscation` -> `--email-obfuscation`).
pub(crate) fn format_flag(name: &str) -> String {
    if name.chars().count() == 1 {
        format!("-{name}")
    } else {
        format!("--{}", name.replace('_', "-"))
    }
}
