mod payload;
pub use self::payload::{FeedError, Payload, Table, TableCell, TableRow};

mod grid;
pub use self::grid::{Grid, Row};
