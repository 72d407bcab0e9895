use anyhow::Result;
use quick_xml::{
    Reader, Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Cursor;

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

#[inline]
pub fn create_xml_reader(content: &[u8]) -> Reader<&[u8]> {
    let mut reader = Reader::from_reader(content);
    reader.config_mut().trim_text(false);
    reader.config_mut().enable_all_checks(false);
    reader
}

/// Write a text element: `<tag>text</tag>`.
#[inline]
pub fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write an empty element with attributes: `<tag attr1="val1" ... />`.
#[inline]
pub fn write_empty_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}
