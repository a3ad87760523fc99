pub mod coordinator;
pub mod pass;
pub(crate) mod region;
