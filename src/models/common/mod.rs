pub mod response;
pub mod serde_helpers;

pub use response::ApiResponse;
pub use serde_helpers::deserialize_some;
