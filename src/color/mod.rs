mod names;
pub(crate) mod resolve;
