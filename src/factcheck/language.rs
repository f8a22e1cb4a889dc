/// Locales the UI offers for the answer language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Kannada,
    Tamil,
    Telugu,
    Malayalam,
}

const TABLE: &[(&str, Language)] = &[
    ("en-US", Language::English),
    ("hi-IN", Language::Hindi),
    ("kn-IN", Language::Kannada),
    ("ta-IN", Language::Tamil),
    ("te-IN", Language::Telugu),
    ("ml-IN", Language::Malayalam),
];

impl Language {
    pub const DEFAULT_CODE: &'static str = "en-US";

    pub fn from_code(code: &str) -> Option<Language> {
        TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, lang)| *lang)
    }

    /// Unknown codes fall back to English.
    pub fn resolve(code: &str) -> Language {
        Self::from_code(code).unwrap_or_default()
    }

    pub fn code(self) -> &'static str {
        TABLE
            .iter()
            .find(|(_, lang)| *lang == self)
            .map(|(c, _)| *c)
            .unwrap_or(Self::DEFAULT_CODE)
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Kannada => "Kannada",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::Malayalam => "Malayalam",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
