mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::{Error, ErrorKind};
pub use self::query::SheetQuery;
pub use self::types::{Grid, Row};
