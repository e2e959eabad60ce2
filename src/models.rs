use serde::Serialize;

use crate::license::recognizer::Verdict;
use crate::license::License;

/// One lookup result as handed to reporting.
#[derive(Debug, Clone, Serialize)]
pub struct Recognition {
    /// The declared name, or the path of the document that was read.
    pub input: String,
    pub mode: LookupMode,
    pub recognized: bool,
    pub license: License,
}

impl Recognition {
    pub fn new(input: impl Into<String>, mode: LookupMode, verdict: Verdict<'_>) -> Self {
        Self {
            input: input.into(),
            mode,
            recognized: verdict.is_recognized(),
            license: verdict.into_license(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    Name,
    Text,
}

impl std::fmt::Display for LookupMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupMode::Name => write!(f, "name"),
            LookupMode::Text => write!(f, "text"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license::definitions::Catalog;
    use crate::license::recognizer::Recognizer;

    #[test]
    fn test_recognition_json_shape() {
        let catalog = Catalog::standard().unwrap();
        let verdict = Recognizer::new(&catalog).by_name("MIT License");
        let recognition = Recognition::new("MIT License", LookupMode::Name, verdict);

        let json = serde_json::to_value(&recognition).unwrap();
        assert_eq!(json["mode"], "name");
        assert_eq!(json["recognized"], true);
        assert_eq!(json["license"]["short_name"], "MIT");
        assert_eq!(json["license"]["url"], "http://opensource.org/licenses/mit-license");
    }

    #[test]
    fn test_unrecognized_recognition() {
        let catalog = Catalog::standard().unwrap();
        let verdict = Recognizer::new(&catalog).by_name("WTFPL");
        let recognition = Recognition::new("WTFPL", LookupMode::Name, verdict);

        assert!(!recognition.recognized);
        assert_eq!(recognition.license.short_name(), "WTFPL");
        assert_eq!(recognition.license.reference_url(), None);
    }
}
