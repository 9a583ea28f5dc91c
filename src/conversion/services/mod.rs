mod include_resolver;
mod requirement_parser;

pub use include_resolver::{IncludeResolver, Resolution};
pub use requirement_parser::RequirementParser;
