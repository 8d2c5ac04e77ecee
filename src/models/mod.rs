pub mod invoice;
pub mod validate;

pub use invoice::*;
pub use validate::*;

#[cfg(test)]
pub(crate) use invoice::fixtures;
