pub mod error;
pub mod extract;
pub mod fetch;
pub mod history;
pub mod summary;
pub mod table;
pub mod teams;
