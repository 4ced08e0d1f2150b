pub mod errors;

pub use errors::{ApiError, ErrorResponse, ServiceError, ServiceResult};
