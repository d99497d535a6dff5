pub mod error;
pub mod parser;

pub use error::{ParseError, Result};
pub use parser::parse;


// Integration tests are in the tests/ directory
