pub mod macros;
pub mod prelude;
mod response;

pub use response::TestResponse;
