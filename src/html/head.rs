use crate::config::{MetaAttribute, MetaTag, SiteMetadata};
use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, Event};
use std::io::Cursor;

use super::common::{XmlWriter, write_empty_elem, write_text_element};

/// Write `<head>` section content before closing tag.
pub fn write_head_content(writer: &mut XmlWriter, metadata: &SiteMetadata) -> Result<()> {
    write_head_inner(writer, metadata)?;
    writer.write_event(Event::End(BytesEnd::new("head")))?;
    Ok(())
}

/// Render the head content as a standalone markup fragment.
pub fn render_head_fragment(metadata: &SiteMetadata) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write_head_inner(&mut writer, metadata)?;
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

fn write_head_inner(writer: &mut XmlWriter, metadata: &SiteMetadata) -> Result<()> {
    let site = &metadata.site;

    write_empty_elem(writer, "meta", &[("charset", &site.charset)])?;

    if !site.title.is_empty() {
        write_text_element(writer, "title", &site.title)?;
    }

    // Site-level description is a fallback; an explicit entry in the meta
    // sequence takes precedence.
    let has_description = metadata
        .meta
        .iter()
        .any(|tag| tag.key() == Some("description"));
    if !site.description.is_empty() && !has_description {
        write_empty_elem(
            writer,
            "meta",
            &[("name", "description"), ("content", &site.description)],
        )?;
    }

    for tag in &metadata.meta {
        write_meta_tag(writer, tag)?;
    }

    if let Some(favicon) = &metadata.favicon {
        write_empty_elem(
            writer,
            "link",
            &[
                ("rel", &favicon.rel),
                ("type", &favicon.mime_type),
                ("href", &favicon.href),
            ],
        )?;
    }

    if let Some(id) = &site.analytics_id {
        write_empty_elem(
            writer,
            "meta",
            &[("name", "generator-analytics"), ("content", id)],
        )?;
    }

    Ok(())
}

/// Write one `<meta>` entry, exposing the dedup hint as `data-hid`.
fn write_meta_tag(writer: &mut XmlWriter, tag: &MetaTag) -> Result<()> {
    let mut attrs: Vec<(&str, &str)> = Vec::with_capacity(3);

    if let Some(hid) = &tag.hid {
        attrs.push(("data-hid", hid));
    }

    if let (Some(axis), Some(key)) = (tag.attribute(), tag.key()) {
        let attr_name = match axis {
            MetaAttribute::Name => "name",
            MetaAttribute::Property => "property",
        };
        attrs.push((attr_name, key));
    }

    attrs.push(("content", &tag.content));
    write_empty_elem(writer, "meta", &attrs)
}
