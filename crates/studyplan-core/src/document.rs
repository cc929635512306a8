//! Text extraction from slide decks.
//!
//! A `.pptx` file is a zip archive with one XML part per slide under
//! `ppt/slides/`. Text lives in `<a:t>` runs grouped by `<a:p>` paragraphs.
//! Slides are visited in slide-number order; each non-empty paragraph
//! becomes one output line.

use std::{
    io::{Cursor, Read},
    sync::OnceLock,
};

use regex::Regex;
use zip::ZipArchive;

use crate::error::{PlanError, Result};

fn slide_name_regex() -> &'static Regex {
    static SLIDE_NAME_RE: OnceLock<Regex> = OnceLock::new();
    SLIDE_NAME_RE.get_or_init(|| {
        Regex::new(r"^ppt/slides/slide([0-9]+)\.xml$").expect("slide name regex must compile")
    })
}

fn paragraph_regex() -> &'static Regex {
    static PARAGRAPH_RE: OnceLock<Regex> = OnceLock::new();
    PARAGRAPH_RE.get_or_init(|| {
        Regex::new(r"(?s)<a:p(?:\s[^>]*)?>(.*?)</a:p>").expect("paragraph regex must compile")
    })
}

fn text_run_regex() -> &'static Regex {
    static TEXT_RUN_RE: OnceLock<Regex> = OnceLock::new();
    TEXT_RUN_RE.get_or_init(|| {
        Regex::new(r"(?s)<a:t(?:\s[^>]*)?>(.*?)</a:t>").expect("text run regex must compile")
    })
}

/// Extract the text of every slide in a `.pptx` deck.
///
/// # Errors
///
/// Returns `PlanError::Document` if the bytes are not a zip archive, contain
/// no slides, or a slide part cannot be read as UTF-8.
pub fn extract_slide_text(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| PlanError::document("Attachment is not a slide deck archive").with_source(e))?;

    let mut slides: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| {
            let number = slide_name_regex()
                .captures(name)?
                .get(1)?
                .as_str()
                .parse()
                .ok()?;
            Some((number, name.to_string()))
        })
        .collect();

    if slides.is_empty() {
        return Err(PlanError::document("Archive contains no slides").build());
    }
    slides.sort_by_key(|(number, _)| *number);

    let mut lines = Vec::new();
    for (_, name) in slides {
        let mut xml = String::new();
        archive
            .by_name(&name)
            .map_err(|e| PlanError::document(format!("Cannot open {name}")).with_source(e))?
            .read_to_string(&mut xml)
            .map_err(|e| PlanError::document(format!("Cannot read {name}")).with_source(e))?;
        lines.extend(slide_paragraphs(&xml));
    }

    Ok(lines.join("\n"))
}

/// Non-empty paragraphs of one slide part, runs concatenated.
fn slide_paragraphs(xml: &str) -> Vec<String> {
    paragraph_regex()
        .captures_iter(xml)
        .filter_map(|paragraph| {
            let body = paragraph.get(1)?.as_str();
            let text: String = text_run_regex()
                .captures_iter(body)
                .filter_map(|run| run.get(1).map(|m| unescape_xml(m.as_str())))
                .collect();
            if text.trim().is_empty() {
                None
            } else {
                Some(text)
            }
        })
        .collect()
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
