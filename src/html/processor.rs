use crate::config::SiteMetadata;
use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesStart, Event},
};
use std::io::Cursor;

use super::common::{XmlWriter, create_xml_reader};
use super::head::write_head_content;

/// Stream an HTML document, injecting site metadata.
///
/// Adds the configured `lang` attribute to `<html>` and writes the head
/// content (charset, title, meta sequence, favicon) before `</head>`.
/// Everything else passes through untouched.
pub fn process_html(content: &[u8], metadata: &SiteMetadata) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Cursor::new(Vec::with_capacity(content.len())));
    let mut reader = create_xml_reader(content);

    loop {
        match reader.read_event() {
            Ok(Event::Start(elem)) if elem.name().as_ref() == b"html" => {
                write_html_with_lang(&elem, &mut writer, metadata)?;
            }
            Ok(Event::End(elem)) if elem.name().as_ref() == b"head" => {
                write_head_content(&mut writer, metadata)?;
            }
            Ok(Event::Eof) => break,
            Ok(event) => writer.write_event(event)?,
            Err(e) => anyhow::bail!(
                "XML parse error at position {}: {:?}",
                reader.error_position(),
                e
            ),
        }
    }

    Ok(writer.into_inner().into_inner())
}

/// Write `<html>` element with `lang` attribute.
pub fn write_html_with_lang(
    elem: &BytesStart<'_>,
    writer: &mut XmlWriter,
    metadata: &SiteMetadata,
) -> Result<()> {
    let mut elem = elem.to_owned();
    elem.push_attribute(("lang", metadata.site.language.as_str()));
    writer.write_event(Event::Start(elem))?;
    Ok(())
}
