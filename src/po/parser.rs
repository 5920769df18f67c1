//! PO Parser
//!
//! Line-oriented state machine over PO text. Directives (`msgctxt`, `msgid`,
//! `msgid_plural`, `msgstr`, `msgstr[N]`) open a field; bare quoted lines
//! extend the most recent one.

use std::fs;
use std::path::Path;

use crate::error::{Po2LmoError, Result};

use super::unescape::unquote;
use super::{Catalog, Entry};

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Parse a PO file from disk
pub fn parse_file(path: &Path) -> Result<Catalog> {
    let content = fs::read(path).map_err(|e| Po2LmoError::read(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read PO file");
    parse_bytes(&content)
}

/// Parse PO text held in memory
pub fn parse_str(content: &str) -> Result<Catalog> {
    parse_bytes(content.as_bytes())
}

/// Parse raw PO bytes; strings are not transcoded
pub fn parse_bytes(content: &[u8]) -> Result<Catalog> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    let mut parser = PoParser::new();
    for (idx, raw) in content.split(|&b| b == b'\n').enumerate() {
        parser.feed_line(idx + 1, raw)?;
    }
    parser.finish()
}

/// Which string a continuation line extends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Msgctxt,
    Msgid,
    MsgidPlural,
    Msgstr,
    MsgstrPlural,
}

/// Why a syntactically valid entry is left out of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unsupported {
    Context,
    Plural,
}

impl Unsupported {
    fn describe(self) -> &'static str {
        match self {
            Unsupported::Context => "message context",
            Unsupported::Plural => "plural forms",
        }
    }
}

/// Entry under construction
#[derive(Debug)]
struct Pending {
    key: Vec<u8>,
    value: Option<Vec<u8>>,
    line: usize,
    context: bool,
    plural: bool,
}

impl Pending {
    fn unsupported(&self) -> Option<Unsupported> {
        if self.plural {
            Some(Unsupported::Plural)
        } else if self.context {
            Some(Unsupported::Context)
        } else {
            None
        }
    }
}

struct PoParser {
    catalog: Catalog,
    pending: Option<Pending>,
    /// Line of a `msgctxt` still waiting for its `msgid`
    context_line: Option<usize>,
    field: Option<Field>,
    skipped: usize,
}

impl PoParser {
    fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            pending: None,
            context_line: None,
            field: None,
            skipped: 0,
        }
    }

    fn feed_line(&mut self, line_no: usize, raw: &[u8]) -> Result<()> {
        let line = raw.trim_ascii();

        if line.is_empty() || line.starts_with(b"#") {
            return Ok(());
        }

        if line.starts_with(b"\"") {
            return self.continuation(line_no, line);
        }

        let split = line
            .iter()
            .position(|&b| b == b'"' || b.is_ascii_whitespace())
            .unwrap_or(line.len());
        let (keyword, rest) = line.split_at(split);
        let rest = rest.trim_ascii_start();

        let directive = String::from_utf8_lossy(keyword);
        let text = || -> Result<Vec<u8>> {
            if rest.is_empty() {
                return Err(Po2LmoError::parse(
                    line_no,
                    format!("expected a quoted string after `{directive}`"),
                ));
            }
            unquote(rest, line_no)
        };

        match keyword {
            b"msgctxt" => {
                let _ = text()?;
                self.msgctxt(line_no)
            }
            b"msgid" => {
                let key = text()?;
                self.msgid(line_no, key)
            }
            b"msgid_plural" => {
                let _ = text()?;
                self.msgid_plural(line_no)
            }
            b"msgstr" => {
                let value = text()?;
                self.msgstr(line_no, value)
            }
            kw if is_plural_msgstr(kw) => {
                let _ = text()?;
                self.msgstr_plural(line_no)
            }
            _ => Err(Po2LmoError::parse(
                line_no,
                format!("unknown directive `{directive}`"),
            )),
        }
    }

    fn continuation(&mut self, line_no: usize, line: &[u8]) -> Result<()> {
        let piece = unquote(line, line_no)?;

        match self.field {
            Some(Field::Msgid) => {
                if let Some(pending) = self.pending.as_mut() {
                    pending.key.extend_from_slice(&piece);
                }
            }
            Some(Field::Msgstr) => {
                if let Some(value) = self.pending.as_mut().and_then(|p| p.value.as_mut()) {
                    value.extend_from_slice(&piece);
                }
            }
            Some(Field::Msgctxt | Field::MsgidPlural | Field::MsgstrPlural) => {}
            None => {
                return Err(Po2LmoError::parse(
                    line_no,
                    "string continuation without a preceding directive",
                ))
            }
        }
        Ok(())
    }

    fn msgctxt(&mut self, line_no: usize) -> Result<()> {
        self.commit()?;
        if let Some(first) = self.context_line {
            return Err(Po2LmoError::parse(
                line_no,
                format!("msgctxt follows msgctxt at line {first} without a msgid"),
            ));
        }
        self.context_line = Some(line_no);
        self.field = Some(Field::Msgctxt);
        Ok(())
    }

    fn msgid(&mut self, line_no: usize, key: Vec<u8>) -> Result<()> {
        self.commit()?;
        self.pending = Some(Pending {
            key,
            value: None,
            line: line_no,
            context: self.context_line.take().is_some(),
            plural: false,
        });
        self.field = Some(Field::Msgid);
        Ok(())
    }

    fn msgid_plural(&mut self, line_no: usize) -> Result<()> {
        match self.pending.as_mut() {
            Some(pending) if pending.value.is_none() && !pending.plural => {
                pending.plural = true;
                self.field = Some(Field::MsgidPlural);
                Ok(())
            }
            _ => Err(Po2LmoError::parse(
                line_no,
                "msgid_plural must directly follow a msgid",
            )),
        }
    }

    fn msgstr(&mut self, line_no: usize, value: Vec<u8>) -> Result<()> {
        let pending = self.expect_open_entry(line_no, "msgstr")?;
        if pending.plural {
            return Err(Po2LmoError::parse(
                line_no,
                "plural entry expects msgstr[N], found msgstr",
            ));
        }
        if pending.value.is_some() {
            return Err(Po2LmoError::parse(
                line_no,
                format!("second msgstr for msgid at line {}", pending.line),
            ));
        }
        pending.value = Some(value);
        self.field = Some(Field::Msgstr);
        Ok(())
    }

    fn msgstr_plural(&mut self, line_no: usize) -> Result<()> {
        let pending = self.expect_open_entry(line_no, "msgstr[N]")?;
        if !pending.plural {
            return Err(Po2LmoError::parse(
                line_no,
                "msgstr[N] without a preceding msgid_plural",
            ));
        }
        // Plural translations are discarded; any one of them completes the entry.
        if pending.value.is_none() {
            pending.value = Some(Vec::new());
        }
        self.field = Some(Field::MsgstrPlural);
        Ok(())
    }

    fn expect_open_entry(&mut self, line_no: usize, directive: &str) -> Result<&mut Pending> {
        self.pending.as_mut().ok_or_else(|| {
            Po2LmoError::parse(line_no, format!("{directive} without a preceding msgid"))
        })
    }

    /// Move the pending entry into the catalog, if it is complete
    fn commit(&mut self) -> Result<()> {
        let Some(pending) = self.pending.take() else {
            return Ok(());
        };
        self.field = None;

        let unsupported = pending.unsupported();
        let Some(value) = pending.value else {
            return Err(Po2LmoError::parse(pending.line, "msgid without msgstr"));
        };

        if let Some(reason) = unsupported {
            self.skipped += 1;
            tracing::warn!(
                line = pending.line,
                msgid = %String::from_utf8_lossy(&pending.key),
                "skipping entry: {} not supported by LMO",
                reason.describe()
            );
            return Ok(());
        }

        self.catalog
            .insert(Entry::new(pending.key, value, pending.line))
    }

    fn finish(mut self) -> Result<Catalog> {
        self.commit()?;
        if let Some(line) = self.context_line {
            return Err(Po2LmoError::parse(line, "msgctxt without a following msgid"));
        }

        tracing::debug!(
            entries = self.catalog.len(),
            skipped = self.skipped,
            "parsed PO catalog"
        );
        Ok(self.catalog)
    }
}

/// `msgstr[N]` with a decimal index
fn is_plural_msgstr(keyword: &[u8]) -> bool {
    keyword
        .strip_prefix(b"msgstr[")
        .and_then(|rest| rest.strip_suffix(b"]"))
        .is_some_and(|index| !index.is_empty() && index.iter().all(u8::is_ascii_digit))
}
