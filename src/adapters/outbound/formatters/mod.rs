/// Formatter adapters for manifest output formats
mod poetry_formatter;

pub use poetry_formatter::PoetryFormatter;
