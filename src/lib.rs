//! # Introduction
//!
//! A few small utilities that each print a message and hand back a `(status, value)` pair:
//! two greetings, integer addition, and a one page PDF rendered with
//! [pdf_writer](https://github.com/typst/pdf-writer).
//!
//! Every operation returns a [`Reply`](types::Reply). The status tag is always `ok`;
//! the PDF operations return `Err` only when the file cannot be written.
//!
//! # Basic Usage
//! ```
//! use hello_pdf::{ hello, sum_two_integers, types::Status };
//!
//! let reply = hello("Joe");
//! assert_eq!(reply.status(), Status::Ok);
//! assert_eq!(reply.value(), "Hello Joe");
//!
//! assert_eq!(*sum_two_integers(2, 3).value(), 5);
//! ```
//!
//! ### PDF
//! ```no_run
//! use hello_pdf::generate_pdf;
//!
//! // writes ./ruby_prawn_elixir.pdf
//! let reply = generate_pdf().unwrap();
//! assert_eq!(reply.value(), "PDF has been created!");
//! ```
//!
//! Diagnostics go through the `log` facade; install any logger to see them.
pub mod types;

mod greeting;
mod pdf;

pub use greeting::{ hello, hello_world, sum_two_integers };
pub use pdf::{ generate_pdf, generate_pdf_at, PDF_PATH };
