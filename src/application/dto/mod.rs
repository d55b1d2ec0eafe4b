/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod export_format;
mod output_mode;
mod tree_request;
mod tree_response;

pub use export_format::ExportFormat;
pub use output_mode::OutputMode;
pub use tree_request::TreeRequest;
pub use tree_response::TreeResponse;
