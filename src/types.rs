//! Core types for clarity360

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Kind of concern being raised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConcernType {
    /// Harassment / Bullying
    Harassment,
    /// Discrimination
    Discrimination,
    /// Policy / Compliance Violation
    PolicyViolation,
    /// Health & Safety Issue
    HealthAndSafety,
    /// Workplace Culture / Team Dynamics
    WorkplaceCulture,
    /// Leadership / Managerial Conduct
    LeadershipConduct,
    /// Welfare / Wellbeing Concern
    Wellbeing,
    /// Complaint (General)
    Complaint,
    /// Suggestion / Improvement Idea
    Suggestion,
    /// Other (Miscellaneous)
    Other,
}

impl ConcernType {
    /// Every concern type, in display order
    pub const ALL: [Self; 10] = [
        Self::Harassment,
        Self::Discrimination,
        Self::PolicyViolation,
        Self::HealthAndSafety,
        Self::WorkplaceCulture,
        Self::LeadershipConduct,
        Self::Wellbeing,
        Self::Complaint,
        Self::Suggestion,
        Self::Other,
    ];

    /// Label shown to users and sent to the server
    pub const fn label(self) -> &'static str {
        match self {
            Self::Harassment => "Harassment / Bullying",
            Self::Discrimination => "Discrimination",
            Self::PolicyViolation => "Policy / Compliance Violation",
            Self::HealthAndSafety => "Health & Safety Issue",
            Self::WorkplaceCulture => "Workplace Culture / Team Dynamics",
            Self::LeadershipConduct => "Leadership / Managerial Conduct",
            Self::Wellbeing => "Welfare / Wellbeing Concern",
            Self::Complaint => "Complaint (General)",
            Self::Suggestion => "Suggestion / Improvement Idea",
            Self::Other => "Other (Miscellaneous)",
        }
    }

    /// Short name accepted on the command line
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Harassment => "harassment",
            Self::Discrimination => "discrimination",
            Self::PolicyViolation => "policy",
            Self::HealthAndSafety => "health-safety",
            Self::WorkplaceCulture => "culture",
            Self::LeadershipConduct => "leadership",
            Self::Wellbeing => "wellbeing",
            Self::Complaint => "complaint",
            Self::Suggestion => "suggestion",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ConcernType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ConcernType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        lookup(&Self::ALL, s, Self::label, Self::slug).ok_or_else(|| Error::UnknownCatalogValue {
            kind: "concern type",
            value: s.to_string(),
        })
    }
}

/// Department the concern relates to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    /// Human Resources (HR)
    HumanResources,
    /// Finance / Accounts
    Finance,
    /// Operations
    Operations,
    /// IT / Technology
    Technology,
    /// Sales
    Sales,
    /// Marketing
    Marketing,
}

impl Department {
    /// Every department, in display order
    pub const ALL: [Self; 6] = [
        Self::HumanResources,
        Self::Finance,
        Self::Operations,
        Self::Technology,
        Self::Sales,
        Self::Marketing,
    ];

    /// Label shown to users and sent to the server
    pub const fn label(self) -> &'static str {
        match self {
            Self::HumanResources => "Human Resources (HR)",
            Self::Finance => "Finance / Accounts",
            Self::Operations => "Operations",
            Self::Technology => "IT / Technology",
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
        }
    }

    /// Short name accepted on the command line
    pub const fn slug(self) -> &'static str {
        match self {
            Self::HumanResources => "hr",
            Self::Finance => "finance",
            Self::Operations => "operations",
            Self::Technology => "it",
            Self::Sales => "sales",
            Self::Marketing => "marketing",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        lookup(&Self::ALL, s, Self::label, Self::slug).ok_or_else(|| Error::UnknownCatalogValue {
            kind: "department",
            value: s.to_string(),
        })
    }
}

fn lookup<T: Copy>(
    all: &[T],
    input: &str,
    label: fn(T) -> &'static str,
    slug: fn(T) -> &'static str,
) -> Option<T> {
    let input = input.trim();
    all.iter()
        .copied()
        .find(|v| label(*v).eq_ignore_ascii_case(input) || slug(*v).eq_ignore_ascii_case(input))
}

/// Status values offered by the status selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusChoice {
    /// Not yet looked at
    Pending,
    /// Being worked on
    InProgress,
    /// Addressed
    Resolved,
    /// Closed without further action
    Closed,
}

impl StatusChoice {
    /// Every selectable status, in selector order
    pub const ALL: [Self; 4] = [Self::Pending, Self::InProgress, Self::Resolved, Self::Closed];

    /// Exact string the server stores
    pub const fn wire_value(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for StatusChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_value())
    }
}

impl FromStr for StatusChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(Error::UnknownStatus(s.to_string())),
        }
    }
}

/// Server-assigned record identifier
///
/// The service has used both numeric and string keys, so both are accepted.
/// Ids compare by their canonical text, so `Text("123")` equals `Number(123)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeedbackId {
    /// Numeric primary key
    Number(u64),
    /// String key (e.g. a document id)
    Text(String),
}

impl FeedbackId {
    fn canonical(&self) -> Cow<'_, str> {
        match self {
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Id encoded for use as a single URL path segment
    pub fn path_segment(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => urlencoding::encode(s).into_owned(),
        }
    }
}

impl PartialEq for FeedbackId {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for FeedbackId {}

impl Hash for FeedbackId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for FeedbackId {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for FeedbackId {
    fn from(s: &str) -> Self {
        s.parse::<u64>()
            .map_or_else(|_| Self::Text(s.to_string()), Self::Number)
    }
}

impl FromStr for FeedbackId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Scalars become text; null, arrays and objects become `None`
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Accepts booleans, `"true"`/`"false"` in any case and `0`/`1`; anything
/// else is `false`
fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        Value::Number(n) => n.as_u64() == Some(1),
        _ => false,
    })
}

/// A submitted piece of feedback as returned by the server
///
/// Every field except `id` is optional on the wire; the server owns the
/// record and this client never rejects a value it does not recognize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    /// Record id
    #[serde(alias = "_id")]
    pub id: FeedbackId,
    /// Concern type label
    #[serde(default, deserialize_with = "lenient_string")]
    pub concern_type: Option<String>,
    /// Department label
    #[serde(default, deserialize_with = "lenient_string")]
    pub department: Option<String>,
    /// Free-text description
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    /// Server-generated summary
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: Option<String>,
    /// Server-generated suggested action
    #[serde(default, deserialize_with = "lenient_string")]
    pub suggested_action: Option<String>,
    /// Workflow status (free-form)
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    /// Urgency (free-form)
    #[serde(default, deserialize_with = "lenient_string")]
    pub urgency: Option<String>,
    /// Whether the submitter asked to stay anonymous
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_anonymous: bool,
    /// Submitter identity, when not anonymous
    #[serde(default, deserialize_with = "lenient_string")]
    pub submitted_by: Option<String>,
    /// Creation timestamp as sent by the server
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
}

impl FeedbackRecord {
    /// Status string, empty when the server sent none
    pub fn status_str(&self) -> &str {
        self.status.as_deref().unwrap_or_default()
    }

    /// Urgency string, empty when the server sent none
    pub fn urgency_str(&self) -> &str {
        self.urgency.as_deref().unwrap_or_default()
    }

    /// Creation time formatted for display
    ///
    /// RFC 3339 timestamps are rendered in UTC; anything else is shown as-is.
    pub fn created_at_display(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        Some(
            chrono::DateTime::parse_from_rfc3339(raw).map_or_else(
                |_| raw.to_string(),
                |ts| {
                    ts.with_timezone(&chrono::Utc)
                        .format("%b %-d, %Y %H:%M UTC")
                        .to_string()
                },
            ),
        )
    }
}
