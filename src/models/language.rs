use serde::{Deserialize, Serialize};

/// ISO 639-1 language codes recognized by the catalog filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Zh,
    Es,
    Fr,
    De,
    It,
    Ja,
    Ko,
    Pt,
    Ru,
    Ar,
    Hi,
    Nl,
    Sv,
    Pl,
    Tr,
    Vi,
    Th,
    Da,
    No,
    Fi,
    El,
    Cs,
    He,
    Id,
    Ms,
    Ro,
    Hu,
    Uk,
}

impl Language {
    pub const ALL: [Language; 29] = [
        Language::En,
        Language::Zh,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::It,
        Language::Ja,
        Language::Ko,
        Language::Pt,
        Language::Ru,
        Language::Ar,
        Language::Hi,
        Language::Nl,
        Language::Sv,
        Language::Pl,
        Language::Tr,
        Language::Vi,
        Language::Th,
        Language::Da,
        Language::No,
        Language::Fi,
        Language::El,
        Language::Cs,
        Language::He,
        Language::Id,
        Language::Ms,
        Language::Ro,
        Language::Hu,
        Language::Uk,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::It => "it",
            Language::Ja => "ja",
            Language::Ko => "ko",
            Language::Pt => "pt",
            Language::Ru => "ru",
            Language::Ar => "ar",
            Language::Hi => "hi",
            Language::Nl => "nl",
            Language::Sv => "sv",
            Language::Pl => "pl",
            Language::Tr => "tr",
            Language::Vi => "vi",
            Language::Th => "th",
            Language::Da => "da",
            Language::No => "no",
            Language::Fi => "fi",
            Language::El => "el",
            Language::Cs => "cs",
            Language::He => "he",
            Language::Id => "id",
            Language::Ms => "ms",
            Language::Ro => "ro",
            Language::Hu => "hu",
            Language::Uk => "uk",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "Chinese",
            Language::Es => "Spanish",
            Language::Fr => "French",
            Language::De => "German",
            Language::It => "Italian",
            Language::Ja => "Japanese",
            Language::Ko => "Korean",
            Language::Pt => "Portuguese",
            Language::Ru => "Russian",
            Language::Ar => "Arabic",
            Language::Hi => "Hindi",
            Language::Nl => "Dutch",
            Language::Sv => "Swedish",
            Language::Pl => "Polish",
            Language::Tr => "Turkish",
            Language::Vi => "Vietnamese",
            Language::Th => "Thai",
            Language::Da => "Danish",
            Language::No => "Norwegian",
            Language::Fi => "Finnish",
            Language::El => "Greek",
            Language::Cs => "Czech",
            Language::He => "Hebrew",
            Language::Id => "Indonesian",
            Language::Ms => "Malay",
            Language::Ro => "Romanian",
            Language::Hu => "Hungarian",
            Language::Uk => "Ukrainian",
        }
    }

    /// Parse a language code, tolerating region qualifiers ("zh-CN", "en-US")
    pub fn from_code(code: &str) -> Option<Language> {
        let base = code.split('-').next().unwrap_or(code).to_lowercase();
        Language::ALL.iter().copied().find(|l| l.code() == base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_handles_region_variants() {
        assert_eq!(Language::from_code("zh-CN"), Some(Language::Zh));
        assert_eq!(Language::from_code("EN"), Some(Language::En));
        assert_eq!(Language::from_code("xx"), None);
    }

    #[test]
    fn codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }
}
