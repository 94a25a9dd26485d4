use pdf_writer::{ Content, Ref };

/// container for pdf_writer page references
pub struct Page {
    pub page_id: Ref,
    pub content_id: Ref,
    pub content: Content
}
