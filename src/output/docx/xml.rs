//! WordprocessingML generation for the document body and core properties.

use chrono::SecondsFormat;
use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::{Result as XmlResult, Writer};

use crate::model::{Alignment, Block, Document, Metadata, PageSetup, Run, TabAlignment};

use super::parts::LIST_BULLET_STYLE;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Points to twentieths of a point.
fn twips(points: f32) -> i32 {
    (points * 20.0).round() as i32
}

/// Points to half-points, the unit of `w:sz`.
fn half_points(points: f32) -> u32 {
    (points * 2.0).round().max(1.0) as u32
}

fn declaration(writer: &mut Writer<Vec<u8>>) -> XmlResult<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
}

/// Serialize `word/document.xml`.
pub(crate) fn document_xml(doc: &Document) -> XmlResult<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    declaration(&mut writer)?;
    writer
        .create_element("w:document")
        .with_attribute(("xmlns:w", W_NS))
        .with_attribute(("xmlns:r", R_NS))
        .write_inner_content(|w| -> XmlResult<()> {
            w.create_element("w:body").write_inner_content(|w| -> XmlResult<()> {
                for block in &doc.blocks {
                    write_paragraph(w, block)?;
                }
                write_section(w, &doc.page)
            })?;
            Ok(())
        })?;
    Ok(writer.into_inner())
}

fn write_paragraph(w: &mut Writer<Vec<u8>>, block: &Block) -> XmlResult<()> {
    w.create_element("w:p").write_inner_content(|w| -> XmlResult<()> {
        write_paragraph_properties(w, block)?;
        for run in &block.runs {
            write_run(w, run)?;
        }
        Ok(())
    })?;
    Ok(())
}

fn write_paragraph_properties(w: &mut Writer<Vec<u8>>, block: &Block) -> XmlResult<()> {
    let props = &block.properties;
    w.create_element("w:pPr").write_inner_content(|w| -> XmlResult<()> {
        if props.list_bullet {
            w.create_element("w:pStyle")
                .with_attribute(("w:val", LIST_BULLET_STYLE))
                .write_empty()?;
        }

        if props.bottom_border {
            w.create_element("w:pBdr").write_inner_content(|w| -> XmlResult<()> {
                w.create_element("w:bottom")
                    .with_attribute(("w:val", "single"))
                    .with_attribute(("w:sz", "6"))
                    .with_attribute(("w:space", "1"))
                    .with_attribute(("w:color", "auto"))
                    .write_empty()?;
                Ok(())
            })?;
        }

        if !props.tab_stops.is_empty() {
            w.create_element("w:tabs").write_inner_content(|w| -> XmlResult<()> {
                for stop in &props.tab_stops {
                    let alignment = match stop.alignment {
                        TabAlignment::Left => "left",
                        TabAlignment::Center => "center",
                        TabAlignment::Right => "right",
                    };
                    w.create_element("w:tab")
                        .with_attribute(("w:val", alignment))
                        .with_attribute(("w:pos", twips(stop.position).to_string().as_str()))
                        .write_empty()?;
                }
                Ok(())
            })?;
        }

        w.create_element("w:spacing")
            .with_attribute(("w:before", twips(props.space_before).to_string().as_str()))
            .with_attribute(("w:after", twips(props.space_after).to_string().as_str()))
            .write_empty()?;

        if props.left_indent != 0.0 || props.first_line_indent != 0.0 {
            let left = twips(props.left_indent).to_string();
            let first_line = twips(props.first_line_indent);
            let mut ind = w.create_element("w:ind").with_attribute(("w:left", left.as_str()));
            if first_line < 0 {
                ind = ind.with_attribute(("w:hanging", (-first_line).to_string().as_str()));
            } else if first_line > 0 {
                ind = ind.with_attribute(("w:firstLine", first_line.to_string().as_str()));
            }
            ind.write_empty()?;
        }

        let jc = match props.alignment {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        };
        w.create_element("w:jc").with_attribute(("w:val", jc)).write_empty()?;
        Ok(())
    })?;
    Ok(())
}

fn write_run(w: &mut Writer<Vec<u8>>, run: &Run) -> XmlResult<()> {
    w.create_element("w:r").write_inner_content(|w| -> XmlResult<()> {
        w.create_element("w:rPr").write_inner_content(|w| -> XmlResult<()> {
            let font = run.font_family.as_str();
            let mut fonts = w
                .create_element("w:rFonts")
                .with_attribute(("w:ascii", font))
                .with_attribute(("w:hAnsi", font));
            if run.compat_fonts {
                fonts = fonts
                    .with_attribute(("w:eastAsia", font))
                    .with_attribute(("w:cs", font));
            }
            fonts.write_empty()?;

            if run.bold {
                w.create_element("w:b").write_empty()?;
                w.create_element("w:bCs").write_empty()?;
            }

            let size = half_points(run.size_pt).to_string();
            w.create_element("w:sz")
                .with_attribute(("w:val", size.as_str()))
                .write_empty()?;
            w.create_element("w:szCs")
                .with_attribute(("w:val", size.as_str()))
                .write_empty()?;

            if run.underline {
                w.create_element("w:u")
                    .with_attribute(("w:val", "single"))
                    .write_empty()?;
            }
            Ok(())
        })?;

        for (i, segment) in run.text.split('\t').enumerate() {
            if i > 0 {
                w.create_element("w:tab").write_empty()?;
            }
            if !segment.is_empty() {
                w.create_element("w:t")
                    .with_attribute(("xml:space", "preserve"))
                    .write_text_content(BytesText::new(segment))?;
            }
        }
        Ok(())
    })?;
    Ok(())
}

fn write_section(w: &mut Writer<Vec<u8>>, page: &PageSetup) -> XmlResult<()> {
    let margins = &page.margins;
    w.create_element("w:sectPr").write_inner_content(|w| -> XmlResult<()> {
        w.create_element("w:pgSz")
            .with_attribute(("w:w", twips(page.width).to_string().as_str()))
            .with_attribute(("w:h", twips(page.height).to_string().as_str()))
            .write_empty()?;
        w.create_element("w:pgMar")
            .with_attribute(("w:top", twips(margins.top).to_string().as_str()))
            .with_attribute(("w:right", twips(margins.right).to_string().as_str()))
            .with_attribute(("w:bottom", twips(margins.bottom).to_string().as_str()))
            .with_attribute(("w:left", twips(margins.left).to_string().as_str()))
            .with_attribute(("w:header", "720"))
            .with_attribute(("w:footer", "720"))
            .with_attribute(("w:gutter", "0"))
            .write_empty()?;
        Ok(())
    })?;
    Ok(())
}

/// Serialize `docProps/core.xml`.
pub(crate) fn core_properties_xml(metadata: &Metadata) -> XmlResult<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    declaration(&mut writer)?;
    writer
        .create_element("cp:coreProperties")
        .with_attribute((
            "xmlns:cp",
            "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
        ))
        .with_attribute(("xmlns:dc", "http://purl.org/dc/elements/1.1/"))
        .with_attribute(("xmlns:dcterms", "http://purl.org/dc/terms/"))
        .with_attribute(("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"))
        .write_inner_content(|w| -> XmlResult<()> {
            if let Some(ref title) = metadata.title {
                w.create_element("dc:title")
                    .write_text_content(BytesText::new(title))?;
            }
            if let Some(ref author) = metadata.author {
                w.create_element("dc:creator")
                    .write_text_content(BytesText::new(author))?;
            }
            if let Some(created) = metadata.created {
                let stamp = created.to_rfc3339_opts(SecondsFormat::Secs, true);
                w.create_element("dcterms:created")
                    .with_attribute(("xsi:type", "dcterms:W3CDTF"))
                    .write_text_content(BytesText::new(&stamp))?;
            }
            Ok(())
        })?;
    Ok(writer.into_inner())
}

/// Serialize `docProps/app.xml`.
pub(crate) fn app_properties_xml() -> XmlResult<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    declaration(&mut writer)?;
    writer
        .create_element("Properties")
        .with_attribute((
            "xmlns",
            "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
        ))
        .write_inner_content(|w| -> XmlResult<()> {
            w.create_element("Application")
                .write_text_content(BytesText::new("resume-docx"))?;
            Ok(())
        })?;
    Ok(writer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParagraphProperties, Run};
    use chrono::{TimeZone, Utc};

    fn xml_string(doc: &Document) -> String {
        String::from_utf8(document_xml(doc).unwrap()).unwrap()
    }

    #[test]
    fn test_units() {
        assert_eq!(twips(36.0), 720);
        assert_eq!(twips(540.0), 10800);
        assert_eq!(half_points(10.5), 21);
        assert_eq!(half_points(11.0), 22);
    }

    #[test]
    fn test_run_properties_and_tabs() {
        let mut doc = Document::new(PageSetup::letter(36.0));
        doc.add_block(
            Block::new(
                ParagraphProperties::new()
                    .spacing(8.0, 4.0)
                    .tab_stop(540.0, TabAlignment::Right),
            )
            .with_run(Run::new("Acme", "Cambria", 10.5).bold().with_compat_fonts(true))
            .with_run(Run::new("\t", "Calibri", 10.5))
            .with_run(Run::new("2020 & later", "Calibri", 10.5)),
        );
        let xml = xml_string(&doc);

        assert!(xml.contains(r#"<w:tab w:val="right" w:pos="10800"/>"#));
        assert!(xml.contains(r#"<w:spacing w:before="160" w:after="80"/>"#));
        assert!(xml.contains(
            r#"<w:rFonts w:ascii="Cambria" w:hAnsi="Cambria" w:eastAsia="Cambria" w:cs="Cambria"/>"#
        ));
        assert!(xml.contains(r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri"/>"#));
        assert!(xml.contains("<w:b/>"));
        assert!(xml.contains(r#"<w:sz w:val="21"/>"#));
        assert!(xml.contains("<w:tab/>"));
        assert!(xml.contains("2020 &amp; later"));
        assert!(xml.contains(r#"<w:pgMar w:top="720" w:right="720" w:bottom="720" w:left="720""#));
    }

    #[test]
    fn test_indent_border_and_list_style() {
        let mut doc = Document::default();
        doc.add_block(Block::new(
            ParagraphProperties::new()
                .indent(18.0, -18.0)
                .with_bottom_border(true),
        ));
        doc.add_block(Block::new(
            ParagraphProperties::new()
                .indent(18.0, 0.0)
                .with_list_bullet(true),
        ));
        let xml = xml_string(&doc);

        assert!(xml.contains(r#"<w:ind w:left="360" w:hanging="360"/>"#));
        assert!(xml.contains(r#"<w:ind w:left="360"/>"#));
        assert!(xml.contains("<w:pBdr>"));
        assert!(xml.contains(r#"<w:pStyle w:val="ListBullet"/>"#));
    }

    #[test]
    fn test_core_properties() {
        let metadata = Metadata {
            title: Some("Jo <Dev> - Resume".to_string()),
            author: Some("Jo".to_string()),
            created: None,
        }
        .with_created(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        let xml = String::from_utf8(core_properties_xml(&metadata).unwrap()).unwrap();

        assert!(xml.contains("<dc:title>Jo &lt;Dev&gt; - Resume</dc:title>"));
        assert!(xml.contains("<dc:creator>Jo</dc:creator>"));
        assert!(xml.contains("2024-05-01T12:00:00Z"));
    }
}
