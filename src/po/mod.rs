//! PO Module
//!
//! Reads GNU gettext Portable Object files into a [`Catalog`].
//!
//! ## Supported Syntax
//! ```text
//! # translator comment              <- skipped, as are blank lines
//! #, fuzzy                          <- flags are comments too
//! msgid ""                          <- header entry (empty key)
//! msgstr ""
//! "Content-Type: text/plain; charset=UTF-8\n"
//!
//! msgid "Save"                      <- key
//! msgstr "Speichern"                <- translation
//!
//! msgid "Line one\n"                <- C escapes are resolved
//! "Line two"                        <- continuations concatenate
//! msgstr ""                         <- empty translation is kept
//! ```
//!
//! Entries carrying `msgctxt` or `msgid_plural` are validated and then
//! dropped with a warning: LMO has no slot for either.

mod catalog;
mod parser;
mod unescape;

pub use catalog::{Catalog, Entry};
pub use parser::{parse_bytes, parse_file, parse_str};
