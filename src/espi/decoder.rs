//! Extracts interval readings from a Green Button (ESPI) Atom feed.
//!
//! The feed is walked as a namespace-aware event stream. Every element on the
//! path `feed/entry/content/espi:IntervalBlock/espi:IntervalReading` is
//! re-serialized on its own (local names only) and handed to serde, so the
//! envelope never has to be modelled.

use crate::error::DecodeError;
use crate::model::IntervalReading;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::{NsReader, Writer};

/// Namespace of the ESPI usage elements.
pub const ESPI_NAMESPACE: &[u8] = b"http://naesb.org/espi";

#[derive(Clone, Copy)]
enum Step {
    // Atom envelope, matched by local name
    Envelope(&'static [u8]),
    Espi(&'static [u8]),
}

const READING_PATH: [Step; 5] = [
    Step::Envelope(b"feed"),
    Step::Envelope(b"entry"),
    Step::Envelope(b"content"),
    Step::Espi(b"IntervalBlock"),
    Step::Espi(b"IntervalReading"),
];

impl Step {
    fn matches(self, ns: &ResolveResult, local_name: &[u8]) -> bool {
        match self {
            Step::Envelope(name) => local_name == name,
            Step::Espi(name) => {
                local_name == name && matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == ESPI_NAMESPACE)
            }
        }
    }
}

/// Decodes every published interval reading in document order.
///
/// Placeholder readings (zero cost and zero value) are dropped. Any reading
/// that cannot be decoded fails the whole feed.
pub fn decode(xml: &[u8]) -> Result<Vec<IntervalReading>, DecodeError> {
    // skipped subtrees are never decoded, so check the encoding up front
    std::str::from_utf8(xml).map_err(DecodeError::malformed_xml)?;
    let mut reader = NsReader::from_reader(xml);
    let mut readings = Vec::new();
    let mut depth = 0usize;
    let mut matched = 0usize;
    let mut saw_root = false;
    let mut capture: Option<Writer<Vec<u8>>> = None;
    let mut placeholders = 0usize;

    loop {
        let (ns, event) = reader
            .read_resolved_event()
            .map_err(DecodeError::malformed_xml)?;

        match event {
            Event::Start(start) => {
                reject_second_root(depth, saw_root)?;
                saw_root = true;
                if let Some(writer) = capture.as_mut() {
                    write_local(writer, Event::Start(local_start(&start)?))?;
                } else if matched == depth
                    && depth < READING_PATH.len()
                    && READING_PATH[depth].matches(&ns, start.local_name().as_ref())
                {
                    matched += 1;
                    if matched == READING_PATH.len() {
                        let mut writer = Writer::new(Vec::new());
                        write_local(&mut writer, Event::Start(local_start(&start)?))?;
                        capture = Some(writer);
                    }
                }
                depth += 1;
            }
            Event::End(end) => {
                if depth == 0 {
                    return Err(DecodeError::malformed_xml("unexpected closing tag"));
                }
                if let Some(writer) = capture.as_mut() {
                    let name = local_str(end.local_name().into_inner())?;
                    write_local(writer, Event::End(BytesEnd::new(name.to_owned())))?;
                    if depth == READING_PATH.len() {
                        if let Some(writer) = capture.take() {
                            push_reading(&mut readings, &mut placeholders, &writer.into_inner())?;
                        }
                    }
                }
                if matched == depth {
                    matched -= 1;
                }
                depth -= 1;
            }
            Event::Empty(start) => {
                reject_second_root(depth, saw_root)?;
                saw_root = true;
                if let Some(writer) = capture.as_mut() {
                    write_local(writer, Event::Empty(local_start(&start)?))?;
                } else if matched == depth
                    && depth + 1 == READING_PATH.len()
                    && READING_PATH[depth].matches(&ns, start.local_name().as_ref())
                {
                    let mut writer = Writer::new(Vec::new());
                    write_local(&mut writer, Event::Empty(local_start(&start)?))?;
                    push_reading(&mut readings, &mut placeholders, &writer.into_inner())?;
                }
            }
            Event::Text(text) => {
                if let Some(writer) = capture.as_mut() {
                    write_local(writer, Event::Text(text))?;
                }
            }
            Event::CData(data) => {
                if let Some(writer) = capture.as_mut() {
                    write_local(writer, Event::CData(data))?;
                }
            }
            Event::Eof => break,
            // declarations, comments, processing instructions
            _ => {}
        }
    }

    if !saw_root {
        return Err(DecodeError::malformed_xml("document has no root element"));
    }
    if depth != 0 {
        return Err(DecodeError::malformed_xml(format!(
            "{} unclosed element(s) at end of document",
            depth
        )));
    }

    tracing::debug!("Skipped {} placeholder interval readings", placeholders);
    Ok(readings)
}

fn reject_second_root(depth: usize, saw_root: bool) -> Result<(), DecodeError> {
    if depth == 0 && saw_root {
        return Err(DecodeError::malformed_xml("more than one root element"));
    }
    Ok(())
}

fn push_reading(
    readings: &mut Vec<IntervalReading>,
    placeholders: &mut usize,
    subtree: &[u8],
) -> Result<(), DecodeError> {
    let reading: IntervalReading = quick_xml::de::from_reader(subtree)?;
    if reading.is_placeholder() {
        // data not published yet
        *placeholders += 1;
    } else {
        readings.push(reading);
    }
    Ok(())
}

fn local_str(name: &[u8]) -> Result<&str, DecodeError> {
    std::str::from_utf8(name).map_err(DecodeError::malformed_xml)
}

fn local_start(start: &BytesStart) -> Result<BytesStart<'static>, DecodeError> {
    let local_name = start.local_name();
    let name = local_str(local_name.as_ref())?;
    Ok(BytesStart::new(name.to_owned()))
}

fn write_local(writer: &mut Writer<Vec<u8>>, event: Event) -> Result<(), DecodeError> {
    writer
        .write_event(event)
        .map_err(DecodeError::malformed_xml)
}
