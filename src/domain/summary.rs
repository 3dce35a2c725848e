use serde::{Deserialize, Deserializer};

/// Presentation transform applied to the joined per-chunk summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryStyle {
    #[default]
    Concise,
    Bullet,
    Detailed,
}

/// Unrecognized style names deserialize as `Concise` rather than failing the
/// request.
impl<'de> Deserialize<'de> for SummaryStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

impl SummaryStyle {
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "bullet" => Self::Bullet,
            "detailed" => Self::Detailed,
            _ => Self::Concise,
        }
    }

    /// Applies the transform. `Concise` returns the input byte-identical.
    pub fn apply(&self, summary: &str) -> String {
        match self {
            Self::Concise => summary.to_string(),
            Self::Bullet => {
                if summary.is_empty() {
                    return String::new();
                }
                summary
                    .split(". ")
                    .map(|sentence| format!("• {}", sentence))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            Self::Detailed => summary.replace(". ", ".\n\n"),
        }
    }
}

/// Output of the summarization pipeline for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    pub text: String,
    pub chunks_total: usize,
    pub chunks_skipped: usize,
}
