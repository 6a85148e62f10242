use super::PollResult;
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Server-assigned poll identifier. The backend issues integers, but nothing
/// on this side relies on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PollId(String);

impl PollId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for PollId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for PollId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

impl Serialize for PollId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0.parse::<i64>() {
            Ok(n) => serializer.serialize_i64(n),
            Err(_) => serializer.serialize_str(&self.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub id: PollId,
    #[serde(alias = "question")]
    pub question_text: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Attached client-side once the viewer has voted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<PollResult>>,
}

/// What a poll card shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PollView<'a> {
    Voting(&'a [String]),
    Results(&'a [PollResult]),
}

impl Poll {
    pub fn new(id: PollId, question_text: String, options: Vec<String>) -> Self {
        Self {
            id,
            question_text,
            options,
            created_at: None,
            results: None,
        }
    }

    pub fn view(&self) -> PollView<'_> {
        match &self.results {
            Some(results) => PollView::Results(results),
            None => PollView::Voting(&self.options),
        }
    }

    pub fn has_results(&self) -> bool {
        self.results.is_some()
    }

    pub fn created_label(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?.trim();
        let naive = DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.naive_local())
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()?;
        Some(naive.format("%Y-%m-%d %H:%M").to_string())
    }
}

impl From<&str> for PollId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
