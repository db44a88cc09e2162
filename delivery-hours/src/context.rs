use crate::localization::{Language, Localize, NoLocation};

/// All the context attached to delivery availability that alters how dates
/// are interpreted and how labels are rendered.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Context<L = NoLocation> {
    pub locale: L,
    pub language: Language,
}

impl<L> Context<L> {
    /// Attach a new locale component to this context.
    pub fn with_locale<L2: Localize>(self, locale: L2) -> Context<L2> {
        Context { locale, language: self.language }
    }

    /// Attach a new display language to this context.
    pub fn with_language(self, language: Language) -> Self {
        Self { language, ..self }
    }
}

impl Default for Context<NoLocation> {
    fn default() -> Self {
        Self { locale: NoLocation, language: Language::default() }
    }
}
