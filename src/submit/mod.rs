pub mod completion;
pub mod encode;
pub mod executor;
pub mod http;
pub mod request;

pub use completion::{ResponseParse, SubmitCompletion};
pub use executor::SubmitExecutor;
pub use request::SubmitRequest;
