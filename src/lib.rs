pub mod config;
pub mod error;
pub mod factcheck;
pub mod llm;
pub mod ocr;
pub mod server;

pub use error::{Error, Result};
