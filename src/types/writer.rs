use pdf_writer::{ Content, Ref, Str };

use crate::types::{ win_ansi, Error, FontReference, Page, PageSettings };

/// the rendering engine
/// contains
/// - page references
/// - ref allocator
/// - registered fonts
/// - page settings
pub struct Writer<'a> {
    pub x: f32,
    pub y: f32,
    pub alloc: Ref,
    pub current_page: Option<Ref>,
    pub font_refs: Vec<FontReference<'a>>,
    pub pages: Vec<Page>,
    pub settings: PageSettings,
}

/// Writer with `PageSettings::default()`
impl Default for Writer<'_> {
    fn default() -> Self {
        Writer::new(PageSettings::default())
    }
}

impl<'a> Writer<'a> {
    /// Instantiates the Ref Allocator and opens the first page with the write head at its top margin
    pub fn new(settings: PageSettings) -> Self {
        let mut writer = Writer {
            x: settings.margin,
            y: settings.top(),
            alloc: Ref::new(1),
            current_page: None,
            font_refs: Vec::with_capacity(1),
            pages: Vec::with_capacity(1),
            settings,
        };

        writer.build_new_page();
        writer
    }

    /// get a new reference for indirect object
    pub fn bump(&mut self) -> Ref {
        self.alloc.bump()
    }

    /// allocates an id for a standard Type1 font and registers it under `resource`
    pub fn register_font(&mut self, resource: &'a [u8], base_font: &'a [u8]) -> Ref {
        let id = self.bump();

        self.font_refs.push(FontReference {
            id,
            resource: pdf_writer::Name(resource),
            base_font: pdf_writer::Name(base_font),
        });

        id
    }

    /// scrolls the writer down the page
    pub fn feed(&mut self, num: f32) {
        self.y -= num;
    }

    /// moves the writer to a new position
    pub fn go_to(&mut self, num_x: f32, num_y: f32) {
        self.x = num_x;
        self.y = num_y;
    }

    /// appends a page and moves the write head to its first line
    pub fn build_new_page(&mut self) {
        let page_id = self.bump();
        let content_id = self.bump();

        self.pages.push(Page {
            page_id,
            content_id,
            content: Content::new()
        });

        self.current_page = Some(page_id);
        self.go_to(self.settings.margin, self.settings.top());
    }

    /// renders one line of text at the write head using the first registered font,
    /// breaking to a new page when the line would cross the bottom margin
    ///
    /// the text is encoded to WinAnsiEncoding; nothing is written if a character has no mapping
    pub fn write_line(&mut self, text: &str) -> Result<(), Error> {
        // fonts must exist by now
        debug_assert!(!self.font_refs.is_empty());

        let encoded = win_ansi::encode(text)?;

        if self.y < self.settings.margin {
            self.build_new_page();
        }

        // empty lines only advance the write head
        if !encoded.is_empty() {
            let font_size = self.settings.font_size;
            let (x, y) = (self.x, self.y);

            if let (Some(font), Some(page)) = (self.font_refs.first(), self.pages.last_mut()) {
                page.content
                    .begin_text()
                    .set_font(font.resource, font_size)
                    .next_line(x, y)
                    .show(Str(&encoded))
                    .end_text();
            }
        }

        self.feed(self.settings.line_height());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_one_page_at_top_margin() {
        let writer = Writer::default();

        assert_eq!(writer.pages.len(), 1);
        assert_eq!(writer.x, 36.0);
        assert_eq!(writer.y, 792.0 - 36.0 - 12.0);
        assert_eq!(writer.current_page, Some(writer.pages[0].page_id));
    }

    #[test]
    fn bump_hands_out_fresh_refs() {
        let mut writer = Writer::default();
        let first = writer.bump();
        let second = writer.bump();

        assert_ne!(first, second);
        assert_ne!(first, writer.pages[0].page_id);
        assert_ne!(first, writer.pages[0].content_id);
    }

    #[test]
    fn overflowing_lines_open_a_new_page() {
        // room for exactly two lines: top = 100 - 10 - 10 = 80, margin = 10, line height = 40
        let settings = PageSettings::new()
            .with_page_size(100.0, 100.0)
            .with_font_size(10.0)
            .and_margin(10.0)
            .and_leading(4.0);
        let mut writer = Writer::new(settings);
        writer.register_font(b"F1", b"Helvetica");

        writer.write_line("one").unwrap();
        writer.write_line("two").unwrap();
        assert_eq!(writer.pages.len(), 1);

        writer.write_line("three").unwrap();
        assert_eq!(writer.pages.len(), 2);
        assert_eq!(writer.current_page, Some(writer.pages[1].page_id));
        assert_eq!(writer.y, 80.0 - 40.0);
    }

    #[test]
    fn unencodable_line_leaves_write_head_in_place() {
        let mut writer = Writer::default();
        let font = writer.register_font(b"F1", b"Helvetica");
        assert_eq!(writer.font_refs[0].id, font);

        let start = writer.y;
        let err = writer.write_line("Ω").unwrap_err();

        assert!(matches!(err, Error::UnsupportedCharacter('Ω')));
        assert_eq!(writer.y, start);
    }
}
