//! WordprocessingML package parts.

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use docxi_model::ExportError;

use crate::common::{
    APPLICATION_NAME, CONTENT_TYPES_NS, CORE_PROPERTIES_NS, CT_CORE_PROPERTIES, CT_DOCUMENT,
    CT_EXTENDED_PROPERTIES, CT_RELATIONSHIPS, CT_STYLES, CT_XML, DC_NS, DCTERMS_NS,
    EXTENDED_PROPERTIES_NS, REL_CORE_PROPERTIES, REL_EXTENDED_PROPERTIES, REL_OFFICE_DOCUMENT,
    REL_STYLES, RELATIONSHIPS_NS, WORDPROCESSING_NS, XSI_NS, emit, is_xml_char, write_declaration,
    write_fonts, write_run_properties, write_text_element,
};

pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const ROOT_RELS_PART: &str = "_rels/.rels";
pub const DOCUMENT_PART: &str = "word/document.xml";
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";
pub const STYLES_PART: &str = "word/styles.xml";
pub const CORE_PART: &str = "docProps/core.xml";
pub const APP_PART: &str = "docProps/app.xml";

/// Split the export body into paragraph texts, one per line.
///
/// An empty body still yields one (empty) paragraph so the document body is
/// never empty.
pub fn paragraphs(body: &str) -> Vec<&str> {
    let lines: Vec<&str> = body.lines().collect();
    if lines.is_empty() { vec![""] } else { lines }
}

pub fn content_types() -> Result<Vec<u8>, ExportError> {
    let mut xml = Writer::new(Vec::new());
    write_declaration(&mut xml)?;
    let mut root = BytesStart::new("Types");
    root.push_attribute(("xmlns", CONTENT_TYPES_NS));
    emit(&mut xml, Event::Start(root))?;
    for (extension, content_type) in [("rels", CT_RELATIONSHIPS), ("xml", CT_XML)] {
        let mut default = BytesStart::new("Default");
        default.push_attribute(("Extension", extension));
        default.push_attribute(("ContentType", content_type));
        emit(&mut xml, Event::Empty(default))?;
    }
    for (part, content_type) in [
        (DOCUMENT_PART, CT_DOCUMENT),
        (STYLES_PART, CT_STYLES),
        (CORE_PART, CT_CORE_PROPERTIES),
        (APP_PART, CT_EXTENDED_PROPERTIES),
    ] {
        let part_name = format!("/{part}");
        let mut override_part = BytesStart::new("Override");
        override_part.push_attribute(("PartName", part_name.as_str()));
        override_part.push_attribute(("ContentType", content_type));
        emit(&mut xml, Event::Empty(override_part))?;
    }
    emit(&mut xml, Event::End(BytesEnd::new("Types")))?;
    Ok(xml.into_inner())
}

pub fn root_relationships() -> Result<Vec<u8>, ExportError> {
    relationships(&[
        ("rId1", REL_OFFICE_DOCUMENT, DOCUMENT_PART),
        ("rId2", REL_CORE_PROPERTIES, CORE_PART),
        ("rId3", REL_EXTENDED_PROPERTIES, APP_PART),
    ])
}

pub fn document_relationships() -> Result<Vec<u8>, ExportError> {
    relationships(&[("rId1", REL_STYLES, "styles.xml")])
}

fn relationships(entries: &[(&str, &str, &str)]) -> Result<Vec<u8>, ExportError> {
    let mut xml = Writer::new(Vec::new());
    write_declaration(&mut xml)?;
    let mut root = BytesStart::new("Relationships");
    root.push_attribute(("xmlns", RELATIONSHIPS_NS));
    emit(&mut xml, Event::Start(root))?;
    for (id, kind, target) in entries {
        let mut relationship = BytesStart::new("Relationship");
        relationship.push_attribute(("Id", *id));
        relationship.push_attribute(("Type", *kind));
        relationship.push_attribute(("Target", *target));
        emit(&mut xml, Event::Empty(relationship))?;
    }
    emit(&mut xml, Event::End(BytesEnd::new("Relationships")))?;
    Ok(xml.into_inner())
}

/// Main document part: one paragraph per line, `font` on every paragraph
/// mark and run.
pub fn document(paragraphs: &[&str], font: &str) -> Result<Vec<u8>, ExportError> {
    let mut xml = Writer::new(Vec::new());
    write_declaration(&mut xml)?;
    let mut root = BytesStart::new("w:document");
    root.push_attribute(("xmlns:w", WORDPROCESSING_NS));
    emit(&mut xml, Event::Start(root))?;
    emit(&mut xml, Event::Start(BytesStart::new("w:body")))?;
    for paragraph in paragraphs {
        write_paragraph(&mut xml, paragraph, font)?;
    }
    emit(&mut xml, Event::Empty(BytesStart::new("w:sectPr")))?;
    emit(&mut xml, Event::End(BytesEnd::new("w:body")))?;
    emit(&mut xml, Event::End(BytesEnd::new("w:document")))?;
    Ok(xml.into_inner())
}

fn write_paragraph(xml: &mut Writer<Vec<u8>>, text: &str, font: &str) -> Result<(), ExportError> {
    emit(xml, Event::Start(BytesStart::new("w:p")))?;
    emit(xml, Event::Start(BytesStart::new("w:pPr")))?;
    write_run_properties(xml, font)?;
    emit(xml, Event::End(BytesEnd::new("w:pPr")))?;

    let text: String = text.chars().filter(|ch| is_xml_char(*ch)).collect();
    if !text.is_empty() {
        emit(xml, Event::Start(BytesStart::new("w:r")))?;
        write_run_properties(xml, font)?;
        for (index, segment) in text.split('\t').enumerate() {
            if index > 0 {
                emit(xml, Event::Empty(BytesStart::new("w:tab")))?;
            }
            if segment.is_empty() {
                continue;
            }
            let mut run_text = BytesStart::new("w:t");
            run_text.push_attribute(("xml:space", "preserve"));
            emit(xml, Event::Start(run_text))?;
            emit(xml, Event::Text(BytesText::new(segment)))?;
            emit(xml, Event::End(BytesEnd::new("w:t")))?;
        }
        emit(xml, Event::End(BytesEnd::new("w:r")))?;
    }
    emit(xml, Event::End(BytesEnd::new("w:p")))
}

/// Style part whose document defaults carry the uniform font.
pub fn styles(font: &str) -> Result<Vec<u8>, ExportError> {
    let mut xml = Writer::new(Vec::new());
    write_declaration(&mut xml)?;
    let mut root = BytesStart::new("w:styles");
    root.push_attribute(("xmlns:w", WORDPROCESSING_NS));
    emit(&mut xml, Event::Start(root))?;
    emit(&mut xml, Event::Start(BytesStart::new("w:docDefaults")))?;
    emit(&mut xml, Event::Start(BytesStart::new("w:rPrDefault")))?;
    emit(&mut xml, Event::Start(BytesStart::new("w:rPr")))?;
    write_fonts(&mut xml, font)?;
    emit(&mut xml, Event::End(BytesEnd::new("w:rPr")))?;
    emit(&mut xml, Event::End(BytesEnd::new("w:rPrDefault")))?;
    emit(&mut xml, Event::End(BytesEnd::new("w:docDefaults")))?;

    let mut normal = BytesStart::new("w:style");
    normal.push_attribute(("w:type", "paragraph"));
    normal.push_attribute(("w:default", "1"));
    normal.push_attribute(("w:styleId", "Normal"));
    emit(&mut xml, Event::Start(normal))?;
    let mut name = BytesStart::new("w:name");
    name.push_attribute(("w:val", "Normal"));
    emit(&mut xml, Event::Empty(name))?;
    emit(&mut xml, Event::End(BytesEnd::new("w:style")))?;

    emit(&mut xml, Event::End(BytesEnd::new("w:styles")))?;
    Ok(xml.into_inner())
}

/// Core properties: title and creation time.
pub fn core_properties(title: &str, timestamp: DateTime<Utc>) -> Result<Vec<u8>, ExportError> {
    let stamp = timestamp.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut xml = Writer::new(Vec::new());
    write_declaration(&mut xml)?;
    let mut root = BytesStart::new("cp:coreProperties");
    root.push_attribute(("xmlns:cp", CORE_PROPERTIES_NS));
    root.push_attribute(("xmlns:dc", DC_NS));
    root.push_attribute(("xmlns:dcterms", DCTERMS_NS));
    root.push_attribute(("xmlns:xsi", XSI_NS));
    emit(&mut xml, Event::Start(root))?;
    write_text_element(&mut xml, "dc:title", title)?;
    write_text_element(&mut xml, "dc:creator", APPLICATION_NAME)?;
    for name in ["dcterms:created", "dcterms:modified"] {
        let mut element = BytesStart::new(name);
        element.push_attribute(("xsi:type", "dcterms:W3CDTF"));
        emit(&mut xml, Event::Start(element))?;
        emit(&mut xml, Event::Text(BytesText::new(&stamp)))?;
        emit(&mut xml, Event::End(BytesEnd::new(name)))?;
    }
    emit(&mut xml, Event::End(BytesEnd::new("cp:coreProperties")))?;
    Ok(xml.into_inner())
}

/// Extended properties: producing application and paragraph count.
pub fn app_properties(paragraph_count: usize) -> Result<Vec<u8>, ExportError> {
    let mut xml = Writer::new(Vec::new());
    write_declaration(&mut xml)?;
    let mut root = BytesStart::new("Properties");
    root.push_attribute(("xmlns", EXTENDED_PROPERTIES_NS));
    emit(&mut xml, Event::Start(root))?;
    write_text_element(&mut xml, "Application", APPLICATION_NAME)?;
    write_text_element(&mut xml, "Paragraphs", &paragraph_count.to_string())?;
    emit(&mut xml, Event::End(BytesEnd::new("Properties")))?;
    Ok(xml.into_inner())
}
