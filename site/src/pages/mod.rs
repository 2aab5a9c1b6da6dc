//! Top-level pages. Each renders inside the document shell in `app`.

pub mod index;
pub mod project;
