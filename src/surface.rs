pub mod event;
pub mod system;
