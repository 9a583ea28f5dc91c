/// Data Transfer Objects for application layer
mod convert_request;
mod convert_response;

pub use convert_request::ConvertRequest;
pub use convert_response::ConvertResponse;
