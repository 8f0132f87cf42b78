//! The fixed pandoc format registries, and the convenience methods
//! generated from them.
//!
//! Each macro invocation below emits both a registry table and the
//! matching [`Converter`] methods from a single entry list, so the method
//! set always matches the tables exactly.

use crate::converter::{Converter, Input};
use crate::error::Result;

/// Emits the reader registry plus one `Converter::<reader>` constructor
/// per entry, pre-seeding the `from` option.
macro_rules! readers {
    ($(($key:literal, $method:ident, $label:literal),)*) => {
        /// The available readers and their corresponding names. The keys
        /// are the values pandoc accepts for `--from`.
        pub const READERS: &[(&str, &str)] = &[$(($key, $label),)*];

        impl Converter {
            $(
                #[doc = concat!("Creates a converter reading ", $label, " input (`--from ", $key, "`).")]
                pub fn $method(input: impl Into<Input>) -> Converter {
                    Converter::new(input).option_with("from", $key)
                }
            )*
        }
    };
}

/// Emits the string-writer registry plus one `to_<writer>` method per
/// entry. String writers capture pandoc's stdout and return text.
macro_rules! string_writers {
    ($(($key:literal, $method:ident, $label:literal),)*) => {
        /// The available string writers and their corresponding names. The
        /// keys are the values pandoc accepts for `--to`.
        pub const STRING_WRITERS: &[(&str, &str)] = &[$(($key, $label),)*];

        impl Converter {
            $(
                #[doc = concat!("Converts to ", $label, " (`--to ", $key, "`).")]
                pub fn $method(&mut self) -> Result<String> {
                    let bytes = self.convert_to($key)?;
                    Ok(String::from_utf8(bytes)?)
                }
            )*
        }
    };
}

/// Emits the binary-writer registry plus one `to_<writer>` method per
/// entry. Binary writers capture through a temporary file and return raw
/// bytes.
macro_rules! binary_writers {
    ($(($key:literal, $method:ident, $label:literal),)*) => {
        /// The available binary writers and their corresponding names.
        /// Output for these formats is captured via a temporary file.
        pub const BINARY_WRITERS: &[(&str, &str)] = &[$(($key, $label),)*];

        impl Converter {
            $(
                #[doc = concat!("Converts to ", $label, " (`--to ", $key, "`), returning raw bytes.")]
                pub fn $method(&mut self) -> Result<Vec<u8>> {
                    self.convert_to($key)
                }
            )*
        }
    };
}

readers![
    ("native", native, "pandoc native"),
    ("json", json, "pandoc JSON"),
    ("markdown", markdown, "markdown"),
    ("rst", rst, "reStructuredText"),
    ("textile", textile, "textile"),
    ("html", html, "HTML"),
    ("latex", latex, "LaTeX"),
];

string_writers![
    ("native", to_native, "pandoc native"),
    ("json", to_json, "pandoc JSON"),
    ("html", to_html, "HTML"),
    ("html5", to_html5, "HTML5"),
    ("s5", to_s5, "S5 HTML slideshow"),
    ("slidy", to_slidy, "Slidy HTML slideshow"),
    ("dzslides", to_dzslides, "Dzslides HTML slideshow"),
    ("docbook", to_docbook, "DocBook XML"),
    ("opendocument", to_opendocument, "OpenDocument XML"),
    ("latex", to_latex, "LaTeX"),
    ("beamer", to_beamer, "Beamer PDF slideshow"),
    ("context", to_context, "ConTeXt"),
    ("texinfo", to_texinfo, "GNU Texinfo"),
    ("man", to_man, "groff man"),
    ("markdown", to_markdown, "markdown"),
    ("plain", to_plain, "plain"),
    ("rst", to_rst, "reStructuredText"),
    ("mediawiki", to_mediawiki, "MediaWiki markup"),
    ("textile", to_textile, "textile"),
    ("rtf", to_rtf, "rich text format"),
    ("org", to_org, "emacs org mode"),
    ("asciidoc", to_asciidoc, "asciidoc"),
];

binary_writers![
    ("odt", to_odt, "OpenDocument"),
    ("docx", to_docx, "Word docx"),
    ("epub", to_epub, "EPUB V2"),
    ("epub3", to_epub3, "EPUB V3"),
];

/// All writers, string and binary, in registry order.
pub fn writers() -> impl Iterator<Item = (&'static str, &'static str)> {
    STRING_WRITERS.iter().chain(BINARY_WRITERS).copied()
}

/// Whether `key` names a writer whose output must be captured through a
/// file rather than stdout.
pub fn is_binary_writer(key: &str) -> bool {
    BINARY_WRITERS.iter().any(|(k, _)| *k == key)
}
