pub(crate) mod error_boundary;
pub(crate) mod head;
