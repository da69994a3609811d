mod database;
mod myconfig;
mod search;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::myconfig::{Config, LogFormat};
pub use self::search::SearchMatch;
