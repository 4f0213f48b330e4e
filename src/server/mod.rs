//! On-demand HTTP front end: one image per GET, described by the request path.

pub(crate) mod handler;
pub(crate) mod listen;
