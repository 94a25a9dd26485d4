use std::path::Path;

use crate::types::{ Doc, Error, Reply };

/// output file of `generate_pdf`, relative to the working directory
pub const PDF_PATH: &str = "ruby_prawn_elixir.pdf";

const PDF_TEXT: &str = "PDF generated with Ruby, Elixir and Prawn";
const PDF_CREATED: &str = "PDF has been created!";

/// Writes a one page PDF to `PDF_PATH`, overwriting any existing file.
pub fn generate_pdf() -> Result<Reply<String>, Error> {
    generate_pdf_at(PDF_PATH)
}

/// `generate_pdf` with an explicit output path
pub fn generate_pdf_at(path: impl AsRef<Path>) -> Result<Reply<String>, Error> {
    Doc::new()
        .with_line(PDF_TEXT)
        .save(path)?;

    let result = String::from(PDF_CREATED);
    println!("{result}");

    Ok(Reply::ok(result))
}
