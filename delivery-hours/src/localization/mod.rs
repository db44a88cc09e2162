pub(crate) mod language;
pub(crate) mod localize;

pub use crate::localization::language::{Language, UnknownLanguage};
pub use crate::localization::localize::{Localize, NoLocation, TzLocation};
