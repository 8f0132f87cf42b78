//! # pandoc-wrap
//!
//! A programmatic facade over the [pandoc](https://pandoc.org)
//! command-line tool. The library assembles pandoc's command-line options
//! from structured values, feeds input inline or as file paths, runs
//! pandoc as a subprocess, and hands back the converted output. All
//! conversion work is pandoc's; there is no document model here.
//!
//! ## Example
//!
//! ```no_run
//! use pandoc_wrap::Converter;
//!
//! let html = Converter::new("# A Title").to_html()?;
//! println!("{}", html);
//!
//! let epub: Vec<u8> = Converter::new(vec!["intro.md", "body.md"]).to_epub()?;
//! std::fs::write("book.epub", epub)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Reader constructors (`Converter::markdown`, `Converter::latex`, ...)
//! and writer methods (`to_html`, `to_docx`, ...) are generated from the
//! format registries in [`formats`]. String writers return `String`;
//! binary writers capture through a temporary file and return `Vec<u8>`.
//!
//! The executable invoked defaults to `pandoc` on the search path and can
//! be overridden process-wide with [`set_pandoc_path`].

pub mod converter;
pub mod error;
pub mod formats;

pub use converter::{pandoc_path, set_pandoc_path, Converter, Input, PandocOption};
pub use error::{Error, Result};
