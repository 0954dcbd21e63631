pub mod batch;
pub mod paths;
pub mod sqlite;
pub mod store;
