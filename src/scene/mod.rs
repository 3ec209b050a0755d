/// Session data model.
pub(crate) mod model;
