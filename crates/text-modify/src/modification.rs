use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of rewrite requested from the service. Serialized with the tags the web
/// form has always sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModificationKind {
    ChangeLength,
    Summarize,
    /// Explain simply.
    ExplainLikeImFive,
    ExplainCreatively,
    Humanize,
    Jargonize,
    Formal,
}

impl ModificationKind {
    pub const ALL: [ModificationKind; 7] = [
        ModificationKind::ChangeLength,
        ModificationKind::Summarize,
        ModificationKind::ExplainLikeImFive,
        ModificationKind::ExplainCreatively,
        ModificationKind::Humanize,
        ModificationKind::Jargonize,
        ModificationKind::Formal,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            ModificationKind::ChangeLength => "changeLength",
            ModificationKind::Summarize => "summarize",
            ModificationKind::ExplainLikeImFive => "explainLikeImFive",
            ModificationKind::ExplainCreatively => "explainCreatively",
            ModificationKind::Humanize => "humanize",
            ModificationKind::Jargonize => "jargonize",
            ModificationKind::Formal => "formal",
        }
    }
}

impl fmt::Display for ModificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModification(pub String);

impl fmt::Display for UnknownModification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown modification type: {}", self.0)
    }
}

impl std::error::Error for UnknownModification {}

impl FromStr for ModificationKind {
    type Err = UnknownModification;

    /// Accepts the wire tags and the kebab-case names used on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim() {
            "changeLength" | "change-length" => ModificationKind::ChangeLength,
            "summarize" => ModificationKind::Summarize,
            "explainLikeImFive" | "explain-simply" | "eli5" => ModificationKind::ExplainLikeImFive,
            "explainCreatively" | "explain-creatively" => ModificationKind::ExplainCreatively,
            "humanize" => ModificationKind::Humanize,
            "jargonize" => ModificationKind::Jargonize,
            "formal" | "formalize" => ModificationKind::Formal,
            other => return Err(UnknownModification(other.to_owned())),
        };
        Ok(kind)
    }
}

/// One step of a modification chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modification {
    #[serde(rename = "type")]
    pub kind: ModificationKind,
    /// Free-form target such as `"100 words"` or `"2 paragraphs"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
}

impl Modification {
    pub fn new(kind: ModificationKind) -> Self {
        Self { kind, length: None }
    }

    pub fn with_length(kind: ModificationKind, length: impl Into<String>) -> Self {
        let length = length.into();
        Self {
            kind,
            length: (!length.trim().is_empty()).then_some(length),
        }
    }
}

impl FromStr for Modification {
    type Err = UnknownModification;

    /// `kind` or `kind:length`, e.g. `change-length:100 words`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((kind, length)) => Ok(Modification::with_length(kind.parse()?, length.trim())),
            None => Ok(Modification::new(s.parse()?)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyRequest {
    pub text: String,
    pub modifications: Vec<Modification>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyResponse {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub summary: String,
}

/// Outcome of one writing-quality test.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityCheck {
    pub name: String,
    pub passed: bool,
    pub feedback: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    pub tests: Vec<QualityCheck>,
}

impl QualityReport {
    pub fn passed(&self) -> usize {
        self.tests.iter().filter(|t| t.passed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_from_str() {
        for kind in ModificationKind::ALL {
            assert_eq!(kind.tag().parse::<ModificationKind>().unwrap(), kind);
        }
    }

    #[test]
    fn kebab_aliases() {
        assert_eq!("change-length".parse(), Ok(ModificationKind::ChangeLength));
        assert_eq!("explain-simply".parse(), Ok(ModificationKind::ExplainLikeImFive));
        assert_eq!("formalize".parse(), Ok(ModificationKind::Formal));
        assert!("shout".parse::<ModificationKind>().is_err());
    }

    #[test]
    fn step_syntax() {
        let step: Modification = "change-length: 100 words".parse().unwrap();
        assert_eq!(step, Modification::with_length(ModificationKind::ChangeLength, "100 words"));
        let step: Modification = "humanize".parse().unwrap();
        assert_eq!(step.length, None);
        let step: Modification = "summarize:".parse().unwrap();
        assert_eq!(step.length, None);
    }

    #[test]
    fn wire_format_uses_type_tag() {
        let req: ModifyRequest = serde_json::from_str(
            r#"{"text":"hi","modifications":[{"type":"changeLength","length":"20"},{"type":"jargonize"}]}"#,
        )
        .unwrap();
        assert_eq!(req.modifications.len(), 2);
        assert_eq!(req.modifications[0].kind, ModificationKind::ChangeLength);
        assert_eq!(req.modifications[0].length.as_deref(), Some("20"));
        assert_eq!(req.modifications[1].length, None);

        let v = serde_json::to_value(Modification::new(ModificationKind::ExplainCreatively)).unwrap();
        assert_eq!(v, serde_json::json!({"type": "explainCreatively"}));
    }

    #[test]
    fn quality_report_counts_passes() {
        let report = QualityReport {
            tests: vec![
                QualityCheck { name: "a".into(), passed: true, feedback: String::new() },
                QualityCheck { name: "b".into(), passed: false, feedback: String::new() },
            ],
        };
        assert_eq!(report.passed(), 1);
    }
}
