// src/feed/render.rs

//! RSS 2.0 emitter.

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{AppError, Result};
use crate::models::{FeedDocument, FeedItem};
use crate::utils::xml::{clean_xml_text, escape_cdata};

const DC_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";
const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

/// Render the whole document as pretty-printed RSS 2.0.
///
/// Descriptions are wrapped in CDATA; XML-illegal characters are stripped
/// from every text node.
pub fn render_feed(document: &FeedDocument) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    let channel = &document.channel;

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("rss").with_attributes([
        ("version", "2.0"),
        ("xmlns:dc", DC_NAMESPACE),
        ("xmlns:atom", ATOM_NAMESPACE),
    ])))?;
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    write_text(&mut writer, "title", &channel.title)?;
    write_text(&mut writer, "link", &channel.link)?;
    write_text(&mut writer, "description", &channel.description)?;
    write_text(&mut writer, "language", &channel.language)?;
    writer
        .create_element("atom:link")
        .with_attributes([
            ("href", clean_xml_text(&channel.self_url).as_str()),
            ("rel", "self"),
            ("type", "application/rss+xml"),
        ])
        .write_empty()?;
    write_text(&mut writer, "pubDate", &channel.pub_date)?;

    for item in &document.items {
        write_item(&mut writer, item, &channel.title, &channel.link)?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    let mut xml = String::from_utf8(writer.into_inner())
        .map_err(|e| AppError::feed(format!("rendered feed is not UTF-8: {e}")))?;
    xml.push('\n');
    Ok(xml)
}

fn write_item(
    writer: &mut Writer<Vec<u8>>,
    item: &FeedItem,
    source_name: &str,
    source_url: &str,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("item")))?;

    write_text(writer, "title", &item.title)?;
    write_text(writer, "link", &item.link)?;
    let description = escape_cdata(&clean_xml_text(&item.description));
    writer
        .create_element("description")
        .write_cdata_content(BytesCData::new(description))?;
    writer
        .create_element("guid")
        .with_attribute(("isPermaLink", "false"))
        .write_text_content(BytesText::new(&clean_xml_text(&item.guid)))?;
    write_text(writer, "pubDate", &item.pub_date)?;
    writer
        .create_element("source")
        .with_attribute(("url", clean_xml_text(source_url).as_str()))
        .write_text_content(BytesText::new(&clean_xml_text(source_name)))?;

    writer.write_event(Event::End(BytesEnd::new("item")))?;
    Ok(())
}

fn write_text(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer
        .create_element(name)
        .write_text_content(BytesText::new(&clean_xml_text(text)))?;
    Ok(())
}
