use std::path::Path;

use chrono::{ Datelike, Timelike, Utc };
use pdf_writer::{ Chunk, Date, Name, Pdf, Rect, Ref, TextStr };
use serde::Deserialize;

use crate::types::{ Error, PageSettings, Writer };

const PRODUCER: &str = concat!("hello_pdf ", env!("CARGO_PKG_VERSION"));

/// # A plain text document
/// Each entry in `lines` becomes one line of Helvetica text; an empty entry leaves a blank line.
/// Text is written in WinAnsiEncoding, so characters outside Windows-1252 are rejected by `render`.
///
/// ```
/// use hello_pdf::types::Doc;
///
/// let doc = serde_json::from_str::<Doc>(r#"{"lines": ["first", "second"]}"#).unwrap();
/// let bytes = doc.render().unwrap();
///
/// assert!(bytes.starts_with(b"%PDF-"));
/// ```
#[derive(Debug,Default,Deserialize)]
pub struct Doc {
    pub lines: Vec<String>,
   #[serde(default)]
    pub settings: PageSettings,
}

impl Doc {
    pub fn new() -> Self {
        Doc::default()
    }

    /// builder function appending a line of text
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// builder function replacing the page settings
    pub fn and_settings(mut self, settings: PageSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Entry point: builds the `Writer`, registers Helvetica, outputs a finished PDF
    pub fn render(&self) -> Result<Vec<u8>, Error> {
        let mut pdf = Pdf::new();
        let mut secondary = Chunk::new();
        let mut write_head = Writer::new(self.settings.clone());

        let page_tree_id = write_head.bump();
        let catalog_id = write_head.bump();
        let info_id = write_head.bump();

        write_head.register_font(b"F1", b"Helvetica");

        for line in &self.lines {
            write_head.write_line(line)?;
        }

        let Writer { pages, font_refs, settings, .. } = write_head;
        let page_ids: Vec<Ref> = pages.iter().map(|page| page.page_id).collect();

        for font in &font_refs {
            pdf.type1_font(font.id)
                .base_font(font.base_font)
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        for page in pages {
            secondary.stream(page.content_id, &page.content.finish());

            let mut pdf_page = pdf.page(page.page_id);
            pdf_page.media_box(Rect::new(0.0, 0.0, settings.width, settings.height));
            pdf_page.parent(page_tree_id);
            pdf_page.contents(page.content_id);

            let mut resources = pdf_page.resources();
            let mut fonts = resources.fonts();

            for font in &font_refs {
                fonts.pair(font.resource, font.id);
            }
        }

        pdf.extend(&secondary);

        // Write the root of the page tree.
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        // Write the document catalog.
        pdf.catalog(catalog_id).pages(page_tree_id);

        pdf.document_info(info_id)
            .producer(TextStr(PRODUCER))
            .creator(TextStr(PRODUCER))
            .creation_date(Doc::creation_date());

        let bytes = pdf.finish();
        log::debug!("rendered {} page(s), {} bytes", page_ids.len(), bytes.len());

        Ok(bytes)
    }

    /// renders the document and writes it to `path`, replacing any existing file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let bytes = self.render()?;

        std::fs::write(path, bytes)?;
        log::debug!("wrote pdf to {}", path.display());

        Ok(())
    }

    fn creation_date() -> Date {
        let now = Utc::now();

        Date::new(now.year() as u16)
            .month(now.month() as u8)
            .day(now.day() as u8)
            .hour(now.hour() as u8)
            .minute(now.minute() as u8)
            .second(now.second() as u8)
            .utc_offset_hour(0)
    }
}
