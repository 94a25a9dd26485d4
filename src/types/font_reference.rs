use pdf_writer::{ Name, Ref };

/// a Type1 font registered with the document
/// - `resource`: key used in the page resource dictionary and `Tf` operator
/// - `base_font`: one of the 14 standard PDF fonts
#[derive(Debug)]
pub struct FontReference<'a> {
    pub id: Ref,
    pub resource: Name<'a>,
    pub base_font: Name<'a>,
}
