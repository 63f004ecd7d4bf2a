pub mod capability;
pub mod config;
pub mod coordinates;
pub mod error;
pub mod form;
pub mod render;
pub mod session;
pub mod store;
pub mod workout;

#[cfg(test)]
pub(crate) mod test_support;
