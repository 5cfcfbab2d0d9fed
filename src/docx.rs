use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use thiserror::Error;
use zip::result::ZipError;
use zip::ZipArchive;

/// Archive member holding the document body.
pub const BODY_MEMBER: &str = "word/document.xml";

const WORDPROCESSING_NS: &[u8] = b"http://schemas.openxmlformats.org/wordprocessingml/2006/main";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unreadable archive: {0}")]
    UnreadableArchive(#[from] ZipError),

    #[error("malformed markup: {0}")]
    MalformedMarkup(String),
}

impl From<quick_xml::Error> for ExtractError {
    fn from(err: quick_xml::Error) -> Self {
        ExtractError::MalformedMarkup(err.to_string())
    }
}

/// Extract the flattened paragraph text of a `.docx` file.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let file = File::open(path).map_err(ZipError::Io)?;
    let body = read_body(BufReader::new(file))?;
    Ok(flatten(&paragraphs(&body)?))
}

/// Read the raw body markup out of a document package.
///
/// The archive is dropped before returning, so the handle never outlives the
/// member read regardless of how parsing goes afterwards.
pub fn read_body<R: Read + Seek>(reader: R) -> Result<Vec<u8>, ExtractError> {
    let mut archive = ZipArchive::new(reader)?;
    let mut member = archive.by_name(BODY_MEMBER)?;
    // The declared size comes from the archive itself, so it is not trusted
    // for pre-allocation.
    let mut body = Vec::new();
    member.read_to_end(&mut body).map_err(ZipError::Io)?;
    Ok(body)
}

/// Collect the visible text of every paragraph, in document order.
///
/// Text runs are concatenated without separators. A paragraph nested inside
/// another (text boxes) contributes to its ancestor and is also emitted on its
/// own, right after the ancestor. Paragraphs without any non-empty run are
/// dropped.
pub fn paragraphs(xml: &[u8]) -> Result<Vec<String>, ExtractError> {
    let mut reader = NsReader::from_reader(xml);
    let mut buf = Vec::new();

    // One slot per paragraph in pre-order; stays None until a run has text.
    let mut slots: Vec<Option<String>> = Vec::new();
    let mut open: Vec<usize> = Vec::new();
    let mut in_text = 0usize;
    let mut depth = 0usize;
    let mut saw_root = false;

    loop {
        let (ns, event) = reader.read_resolved_event_into(&mut buf)?;
        let unbound = matches!(ns, ResolveResult::Unknown(_));
        let in_word_ns =
            matches!(ns, ResolveResult::Bound(Namespace(uri)) if uri == WORDPROCESSING_NS);

        if let Event::Start(e) | Event::Empty(e) = &event {
            if unbound {
                return Err(ExtractError::MalformedMarkup(format!(
                    "unbound namespace prefix on <{}>",
                    String::from_utf8_lossy(e.name().as_ref())
                )));
            }
            if saw_root && depth == 0 {
                return Err(ExtractError::MalformedMarkup(
                    "junk after document element".to_string(),
                ));
            }
            for attr in e.attributes().with_checks(true) {
                attr.map_err(quick_xml::Error::from)?;
            }
        }

        match event {
            Event::Start(e) => {
                saw_root = true;
                depth += 1;
                if in_word_ns {
                    match e.local_name().as_ref() {
                        b"p" => {
                            open.push(slots.len());
                            slots.push(None);
                        }
                        b"t" => in_text += 1,
                        _ => {}
                    }
                }
            }
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                if in_word_ns {
                    match e.local_name().as_ref() {
                        b"p" => {
                            open.pop();
                        }
                        b"t" => in_text = in_text.saturating_sub(1),
                        _ => {}
                    }
                }
            }
            Event::Empty(_) => saw_root = true,
            Event::Text(e) if in_text > 0 => {
                let text = e.unescape()?;
                if !text.is_empty() {
                    for &slot in &open {
                        slots[slot].get_or_insert_with(String::new).push_str(&text);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        return Err(ExtractError::MalformedMarkup(
            "document has no root element".to_string(),
        ));
    }
    if depth != 0 {
        return Err(ExtractError::MalformedMarkup(format!(
            "unexpected end of document with {} unclosed element(s)",
            depth
        )));
    }

    Ok(slots.into_iter().flatten().collect())
}

pub fn flatten(paragraphs: &[String]) -> String {
    paragraphs.join("\n")
}

// ── Tests ──
