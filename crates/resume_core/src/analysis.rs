//! Response model for the backend `/analyze` endpoint.
//!
//! Every field is optional on the wire. Missing or `null` fields deserialize as
//! empty so the renderer can treat "absent" and "empty" the same way.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    /// Integer-like percentage; the backend sends a number, older builds a string.
    pub ats_score: Option<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub detected_skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub deep_intelligence: DeepIntelligence,
    #[serde(deserialize_with = "null_as_default")]
    pub job_suggestions: Vec<JobSuggestion>,
    #[serde(deserialize_with = "null_as_default")]
    pub role_matches: Vec<RoleMatch>,
    #[serde(deserialize_with = "null_as_default")]
    pub skill_roadmap: Vec<RoadmapEntry>,
    pub extracted_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeepIntelligence {
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<String>,
    pub super_query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSuggestion {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleMatch {
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    /// Suitability in `[0, 1]`.
    #[serde(deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub skill: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: SkillStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillStatus {
    Learned,
    Missing,
    #[default]
    #[serde(other)]
    Unknown,
}

/// `null` reads as the field's default, the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl AnalysisResult {
    /// Target for the score reveal: integer prefix of `ats_score`, 0 when absent or invalid.
    pub fn target_score(&self) -> i64 {
        self.ats_score.as_ref().and_then(parse_integer_like).unwrap_or(0)
    }
}

/// Integer-prefix parse of a JSON number or string (`"76.9"` -> 76, `" 42px"` -> 42).
pub fn parse_integer_like(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(text) => parse_integer_prefix(text),
        _ => None,
    }
}

fn parse_integer_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
