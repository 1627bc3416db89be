pub(crate) mod helpers;
pub(crate) mod months;
pub(crate) mod phrases;
pub(crate) mod ranges;
pub(crate) mod single;
pub(crate) mod vocab;
