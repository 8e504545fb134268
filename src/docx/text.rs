//! Flattening WordprocessingML into plain text.

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use anyhow::{Context, Result};

/// How text runs are joined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextLayout {
    /// Runs concatenated with nothing in between.
    #[default]
    Flat,
    /// Newline between paragraphs, tab and break elements kept.
    Paragraphs,
}

/// Concatenate the text of every `w:t` element of a document part, in
/// document order.
pub fn collect_text(xml: &[u8], layout: TextLayout) -> Result<String> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::with_capacity(1024);
    let mut text = String::with_capacity(xml.len() / 4);

    let mut text_depth = 0usize;
    let mut run_depth = 0usize;
    let mut paragraphs = 0usize;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .with_context(|| format!("Malformed XML at byte {}", reader.buffer_position()))?;

        match event {
            Event::Start(e) => match e.name().as_ref() {
                b"w:t" => text_depth += 1,
                b"w:r" => run_depth += 1,
                b"w:p" => start_paragraph(&mut text, &mut paragraphs, layout),
                name if run_depth > 0 => push_control(&mut text, name, layout),
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => text_depth = text_depth.saturating_sub(1),
                b"w:r" => run_depth = run_depth.saturating_sub(1),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" => start_paragraph(&mut text, &mut paragraphs, layout),
                name if run_depth > 0 => push_control(&mut text, name, layout),
                _ => {}
            },
            Event::Text(e) if text_depth > 0 => {
                text.push_str(&e.unescape().context("Bad character reference in text run")?);
            }
            Event::CData(e) if text_depth > 0 => {
                text.push_str(std::str::from_utf8(&e).context("CDATA is not UTF-8")?);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

fn start_paragraph(text: &mut String, paragraphs: &mut usize, layout: TextLayout) {
    if layout == TextLayout::Paragraphs && *paragraphs > 0 {
        text.push('\n');
    }
    *paragraphs += 1;
}

/// Tabs and breaks that sit inside a run.
fn push_control(text: &mut String, name: &[u8], layout: TextLayout) {
    if layout != TextLayout::Paragraphs {
        return;
    }
    match name {
        b"w:tab" => text.push('\t'),
        b"w:br" | b"w:cr" => text.push('\n'),
        _ => {}
    }
}
