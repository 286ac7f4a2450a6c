pub mod error;
pub mod types;
pub mod value;

pub use error::XFormError;
pub use types::*;
pub use value::*;
