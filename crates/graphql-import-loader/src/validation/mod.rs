mod validation_error;
mod validator;

pub use validation_error::ValidationError;
pub use validator::validate;
