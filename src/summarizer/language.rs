//! Language resources shared by the tokenizer and the stopword filter

use serde::{Deserialize, Serialize};

/// Languages with built-in sentence and stopword resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::German => "german",
            Self::French => "french",
            Self::Spanish => "spanish",
            Self::Italian => "italian",
            Self::Portuguese => "portuguese",
            Self::Dutch => "dutch",
        }
    }

    /// Parse a language name or ISO 639-1 code
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "de" | "german" => Some(Self::German),
            "fr" | "french" => Some(Self::French),
            "es" | "spanish" => Some(Self::Spanish),
            "it" | "italian" => Some(Self::Italian),
            "pt" | "portuguese" => Some(Self::Portuguese),
            "nl" | "dutch" => Some(Self::Dutch),
            _ => None,
        }
    }

    /// Resolve a language, falling back to English when no resources exist.
    ///
    /// A missing resource is not fatal: summarization continues with the
    /// English rules and a warning is logged.
    pub fn resolve(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            tracing::warn!(
                "No sentence resources for language '{}', falling back to english",
                name
            );
            Self::English
        })
    }

    /// Abbreviations (lowercase, without the trailing period) that never end a sentence
    pub fn abbreviations(&self) -> &'static [&'static str] {
        match self {
            Self::English => &[
                "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd",
                "corp", "dept", "approx", "fig", "vol", "jan", "feb", "apr", "jun", "jul",
                "aug", "sep", "sept", "oct", "nov", "dec", "gov", "sen", "capt", "lt", "sgt",
                "ave", "blvd",
            ],
            Self::German => &[
                "dr", "prof", "hr", "fr", "nr", "bzw", "ca", "usw", "vgl", "evtl", "ggf",
                "inkl", "str", "abs", "jan", "feb", "mrz", "apr", "jun", "jul", "aug", "sep",
                "okt", "nov", "dez", "bspw", "zb",
            ],
            Self::French => &[
                "m", "mm", "mme", "mlle", "dr", "pr", "st", "ste", "etc", "env", "cf", "av",
                "bd", "janv", "févr", "avr", "juil", "sept", "oct", "nov", "déc",
            ],
            Self::Spanish => &[
                "sr", "sra", "srta", "dr", "dra", "ud", "uds", "etc", "pág", "núm", "av",
                "ej", "aprox", "ene", "feb", "mar", "abr", "jun", "jul", "ago", "sept", "oct",
                "nov", "dic",
            ],
            Self::Italian => &[
                "sig", "sigg", "dott", "prof", "ing", "avv", "ecc", "pag", "es", "gen", "feb",
                "mar", "apr", "giu", "lug", "ago", "sett", "ott", "nov", "dic",
            ],
            Self::Portuguese => &[
                "sr", "sra", "dr", "dra", "prof", "etc", "pág", "av", "ex", "jan", "fev",
                "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
            ],
            Self::Dutch => &[
                "dhr", "mevr", "mw", "dr", "prof", "ing", "ir", "mr", "drs", "bijv", "bv",
                "enz", "etc", "jan", "feb", "mrt", "apr", "jun", "jul", "aug", "sep", "okt",
                "nov", "dec",
            ],
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
