/// Conversion domain: requirement model and the pure services that
/// resolve includes and parse requirement lines.
pub mod domain;
pub mod services;
