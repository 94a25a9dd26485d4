mod doc;
mod error;
mod font_reference;
mod page;
mod page_settings;
mod reply;
mod win_ansi;
mod writer;

pub use doc::Doc;
pub use error::Error;
pub use font_reference::FontReference;
pub use page::Page;
pub use page_settings::PageSettings;
pub use reply::{ Reply, Status };
pub use writer::Writer;
