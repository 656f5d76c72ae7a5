pub mod filter;
pub mod selection;
pub mod session;
pub mod store;
