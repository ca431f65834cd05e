//! Reading `.resw` documents.
//!
//! A ResW file is a .NET-style resource document: a root element holding any
//! number of `<data name="...">` entries. Only the `name` attribute matters
//! here; values and comments are never read.

use std::{fs::File, io::Read, path::Path};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::error::Error;

const DATA_ELEMENT: &[u8] = b"data";
const NAME_ATTRIBUTE: &[u8] = b"name";

/// Reads a document from disk, decoding UTF-16 and UTF-8 with or without BOM.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let file = File::open(path)?;
    let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .build(file);

    let mut decoded = String::new();
    decoder.read_to_string(&mut decoded)?;
    Ok(decoded)
}

/// Collects the `name` of every `<data>` entry, in document order.
///
/// Returns `Ok(None)` when the text has no root element at all. Entries whose
/// name is missing, empty or malformed are skipped. Markup errors are
/// returned as [`Error::XmlParse`] or [`Error::MalformedDocument`].
pub fn parse_resource_keys(contents: &str) -> Result<Option<Vec<String>>, Error> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let mut reader = Reader::from_str(contents);
    reader.config_mut().trim_text(true);

    let mut keys = Vec::new();
    let mut depth = 0usize;
    let mut saw_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if depth == 0 {
                    check_single_root(&mut saw_root, e)?;
                }
                depth += 1;
                collect_entry(e, &mut keys);
            }
            Ok(Event::Empty(ref e)) => {
                if depth == 0 {
                    check_single_root(&mut saw_root, e)?;
                }
                collect_entry(e, &mut keys);
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Text(ref t)) if depth == 0 && !t.is_empty() => {
                return Err(Error::malformed("text outside the root element"));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(Error::XmlParse(e)),
        }
    }

    if depth > 0 {
        return Err(Error::malformed(
            "unexpected end of document: unclosed element",
        ));
    }

    if !saw_root {
        return Ok(None);
    }

    Ok(Some(keys))
}

fn check_single_root(saw_root: &mut bool, element: &BytesStart<'_>) -> Result<(), Error> {
    if *saw_root {
        return Err(Error::malformed(format!(
            "second root element `{}`",
            String::from_utf8_lossy(element.name().as_ref())
        )));
    }
    *saw_root = true;
    Ok(())
}

fn collect_entry(element: &BytesStart<'_>, keys: &mut Vec<String>) {
    if element.name().as_ref() != DATA_ELEMENT {
        return;
    }
    match entry_name(element) {
        Some(name) => keys.push(name),
        None => tracing::debug!("skipping <data> entry without a usable name"),
    }
}

fn entry_name(element: &BytesStart<'_>) -> Option<String> {
    for attr in element.attributes().with_checks(false) {
        let attr = match attr {
            Ok(attr) => attr,
            Err(e) => {
                tracing::debug!("malformed attribute on <data>: {}", e);
                return None;
            }
        };
        if attr.key.as_ref() != NAME_ATTRIBUTE {
            continue;
        }
        return match attr.unescape_value() {
            Ok(value) if !value.is_empty() => Some(value.into_owned()),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("cannot unescape <data> name: {}", e);
                None
            }
        };
    }
    None
}
