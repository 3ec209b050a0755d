pub(crate) mod blend;
pub(crate) mod compose;
pub(crate) mod overlay;
