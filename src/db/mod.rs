pub mod connection;
pub mod naming;
pub mod oracle;
pub mod paging;
pub mod provider;
pub mod script;
pub mod sequence;
pub mod session;
pub mod types;
