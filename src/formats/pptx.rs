//! PowerPoint (.pptx) notes
//!
//! A `.pptx` file is a ZIP archive of XML parts. Slide order comes from
//! `ppt/presentation.xml` (`p:sldIdLst`), resolved to slide parts through
//! `ppt/_rels/presentation.xml.rels`. Each slide contributes one text block
//! built from its top-level shapes that carry a text body; slides with no
//! shape text are left out.

use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use crate::notes::{ExtractionError, ExtractionResult, Result};

const PRESENTATION_PART: &str = "ppt/presentation.xml";
const PRESENTATION_RELS_PART: &str = "ppt/_rels/presentation.xml.rels";

/// Extract one text block per non-empty slide, in presentation order
pub fn extract_slides(data: &[u8]) -> Result<ExtractionResult> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;

    let slide_ids = parse_slide_ids(&read_part(&mut archive, PRESENTATION_PART)?)?;
    let targets = parse_relationships(&read_part(&mut archive, PRESENTATION_RELS_PART)?)?;

    let mut texts = Vec::new();
    for (position, rel_id) in slide_ids.iter().enumerate() {
        let target = targets.get(rel_id).ok_or_else(|| {
            ExtractionError::SlideDeck(format!("Slide relationship '{}' not found", rel_id))
        })?;
        let part = resolve_part_path("ppt", target);

        let shapes = slide_shape_texts(&read_part(&mut archive, &part)?)?;
        match slide_block(&shapes) {
            Some(block) => texts.push(block),
            None => tracing::debug!(slide = position, part = %part, "Slide has no text, skipping"),
        }
    }

    tracing::debug!(slides = slide_ids.len(), text_slides = texts.len(), "Extracted slide deck");

    Ok(ExtractionResult::from_texts(texts))
}

/// Join the trimmed, non-empty shape texts of one slide
///
/// Returns `None` when no shape has any text.
pub fn slide_block<S: AsRef<str>>(shape_texts: &[S]) -> Option<String> {
    let kept: Vec<&str> = shape_texts
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect();

    if kept.is_empty() {
        None
    } else {
        Some(kept.join("\n"))
    }
}

/// Text of every top-level shape with a text body, in document order
///
/// Paragraphs are joined with `\n`. Soft line breaks (`<a:br/>`) also become
/// `\n` rather than a vertical tab, so clients see one kind of line break.
/// Shapes without a text body (pictures, tables, connectors, groups) are
/// skipped.
pub fn slide_shape_texts(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);

    let mut shapes = Vec::new();
    let mut group_depth = 0usize;
    let mut in_shape = false;
    let mut has_body = false;
    let mut in_body = false;
    let mut in_run_text = false;
    let mut paragraphs: Vec<String> = Vec::new();
    let mut paragraph: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"grpSp" => group_depth += 1,
                b"sp" if group_depth == 0 => {
                    in_shape = true;
                    has_body = false;
                    paragraphs.clear();
                }
                b"txBody" if in_shape => {
                    in_body = true;
                    has_body = true;
                }
                b"p" if in_body => paragraph = Some(String::new()),
                b"t" if in_body => in_run_text = true,
                b"br" if in_body => push_break(&mut paragraph),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"br" if in_body => push_break(&mut paragraph),
                b"p" if in_body => paragraphs.push(String::new()),
                b"txBody" if in_shape => has_body = true,
                _ => {}
            },
            Event::Text(t) if in_run_text => {
                if let Some(current) = paragraph.as_mut() {
                    current.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"p" if in_body => {
                    if let Some(done) = paragraph.take() {
                        paragraphs.push(done);
                    }
                }
                b"txBody" => in_body = false,
                b"sp" if in_shape && group_depth == 0 => {
                    in_shape = false;
                    if has_body {
                        shapes.push(paragraphs.join("\n"));
                    }
                    paragraphs.clear();
                }
                b"grpSp" => group_depth = group_depth.saturating_sub(1),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(shapes)
}

fn push_break(paragraph: &mut Option<String>) {
    if let Some(current) = paragraph.as_mut() {
        current.push('\n');
    }
}

/// Relationship ids of `p:sldId` entries, in slide order
fn parse_slide_ids(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut ids = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sldId" => {
                let id = prefixed_attribute(&e, b"id")?.ok_or_else(|| {
                    ExtractionError::SlideDeck("Slide entry without relationship id".into())
                })?;
                ids.push(id);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(ids)
}

/// Map of relationship id to target path
fn parse_relationships(xml: &str) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    let mut targets = HashMap::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                let mut id = None;
                let mut target = None;
                for attr in e.attributes() {
                    let attr = attr.map_err(quick_xml::Error::from)?;
                    match attr.key.as_ref() {
                        b"Id" => id = Some(attr.unescape_value()?.into_owned()),
                        b"Target" => target = Some(attr.unescape_value()?.into_owned()),
                        _ => {}
                    }
                }
                if let (Some(id), Some(target)) = (id, target) {
                    targets.insert(id, target);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(targets)
}

/// Value of a namespaced attribute (e.g. `r:id`), ignoring the unprefixed one
fn prefixed_attribute(element: &BytesStart<'_>, local: &[u8]) -> Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.prefix().is_some() && attr.key.local_name().as_ref() == local {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Resolve a relationship target against the directory of its source part
fn resolve_part_path(base_dir: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut segments: Vec<&str> = base_dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    let mut file = archive
        .by_name(name)
        .map_err(|e| ExtractionError::SlideDeck(format!("Missing part '{}': {}", name, e)))?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| ExtractionError::SlideDeck(format!("Failed to read '{}': {}", name, e)))?;

    Ok(content)
}

// ============================================================================
// Tests
// ============================================================================
