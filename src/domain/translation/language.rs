use serde::{Deserialize, Serialize};

/// Target language code as accepted by the translation and speech providers.
///
/// A lowercase ISO 639 primary tag (2-3 letters) with an optional region or
/// script subtag, e.g. `es`, `fil`, `zh-CN`, `pt-BR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let raw = raw.trim();
        let (primary, subtag) = match raw.split_once('-') {
            Some((primary, subtag)) => (primary, Some(subtag)),
            None => (raw, None),
        };

        let primary_ok =
            (2..=3).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_alphabetic());
        let subtag_ok = subtag.map_or(true, |s| {
            (2..=4).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric())
        });
        if !primary_ok || !subtag_ok {
            return Err(format!("Unsupported language code: '{}'", raw));
        }

        let code = match subtag {
            Some(s) if s.len() == 2 => format!("{}-{}", primary.to_lowercase(), s.to_uppercase()),
            Some(s) => format!("{}-{}", primary.to_lowercase(), s),
            None => primary.to_lowercase(),
        };
        Ok(LanguageCode(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary tag without region, e.g. `zh` for `zh-CN`
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        LanguageCode::parse(&value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
