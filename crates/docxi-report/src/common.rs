//! Shared constants and XML helpers for package parts.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use docxi_model::ExportError;

pub const WORDPROCESSING_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
pub const RELATIONSHIPS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
pub const CORE_PROPERTIES_NS: &str =
    "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
pub const EXTENDED_PROPERTIES_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties";
pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";
pub const DCTERMS_NS: &str = "http://purl.org/dc/terms/";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

pub const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
pub const REL_CORE_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
pub const REL_EXTENDED_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
pub const REL_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";

pub const CT_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
pub const CT_XML: &str = "application/xml";
pub const CT_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
pub const CT_STYLES: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
pub const CT_CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";
pub const CT_EXTENDED_PROPERTIES: &str =
    "application/vnd.openxmlformats-officedocument.extended-properties+xml";

/// Application name recorded in document properties.
pub const APPLICATION_NAME: &str = "Docxi";

/// Write one event, mapping writer failures to [`ExportError::Xml`].
pub fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), ExportError> {
    writer
        .write_event(event)
        .map_err(|error| ExportError::Xml(error.to_string()))
}

/// Write the standalone XML declaration every package part starts with.
pub fn write_declaration<W: Write>(writer: &mut Writer<W>) -> Result<(), ExportError> {
    emit(
        writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))),
    )
}

/// Write `<name>text</name>`.
pub fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), ExportError> {
    emit(writer, Event::Start(BytesStart::new(name)))?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(BytesEnd::new(name)))
}

/// Write `<w:rFonts/>` naming `font` for every script slot.
pub fn write_fonts<W: Write>(writer: &mut Writer<W>, font: &str) -> Result<(), ExportError> {
    let mut fonts = BytesStart::new("w:rFonts");
    fonts.push_attribute(("w:ascii", font));
    fonts.push_attribute(("w:hAnsi", font));
    fonts.push_attribute(("w:eastAsia", font));
    fonts.push_attribute(("w:cs", font));
    emit(writer, Event::Empty(fonts))
}

/// Write `<w:rPr><w:rFonts/></w:rPr>`.
pub fn write_run_properties<W: Write>(
    writer: &mut Writer<W>,
    font: &str,
) -> Result<(), ExportError> {
    emit(writer, Event::Start(BytesStart::new("w:rPr")))?;
    write_fonts(writer, font)?;
    emit(writer, Event::End(BytesEnd::new("w:rPr")))
}

/// Characters allowed by the XML 1.0 `Char` production.
pub fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..
    )
}
