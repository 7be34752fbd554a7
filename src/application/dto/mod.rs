/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod credits_request;
mod credits_response;

pub use credits_request::CreditsRequest;
pub use credits_response::CreditsResponse;
