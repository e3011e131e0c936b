//! Badge styling for status and urgency values
//!
//! Both fields are free-form strings owned by the server. Known values map to
//! a tone; anything else falls back to a default instead of failing.

/// Visual tone of a badge, independent of how it is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Yellow: waiting on someone
    Pending,
    /// Blue: work underway
    Active,
    /// Green: done
    Positive,
    /// Gray: closed or quiet
    Neutral,
    /// Orange: needs attention soon
    Elevated,
    /// Red: needs attention now
    Critical,
}

/// A rendered badge: tone plus the text to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Tone chosen for the value
    pub tone: Tone,
    /// Text shown inside the badge
    pub label: String,
}

fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

/// Tone for a status value; unknown values use the pending tone
pub fn status_tone(status: &str) -> Tone {
    match normalize(status).as_str() {
        "in progress" => Tone::Active,
        "resolved" => Tone::Positive,
        "closed" => Tone::Neutral,
        _ => Tone::Pending,
    }
}

/// Tone for an urgency value; unknown values use the medium tone
pub fn urgency_tone(urgency: &str) -> Tone {
    match normalize(urgency).as_str() {
        "low" => Tone::Positive,
        "high" => Tone::Elevated,
        "critical" => Tone::Critical,
        _ => Tone::Pending,
    }
}

/// Badge for a status value
///
/// An empty status is shown as `pending`, matching its fallback tone.
pub fn status_badge(status: &str) -> Badge {
    let label = if status.trim().is_empty() {
        "pending".to_string()
    } else {
        status.trim().to_string()
    };
    Badge {
        tone: status_tone(status),
        label,
    }
}

/// Badge for an urgency value
///
/// An empty urgency is shown as `Medium`, matching its fallback tone.
pub fn urgency_badge(urgency: &str) -> Badge {
    let label = if urgency.trim().is_empty() {
        "Medium".to_string()
    } else {
        urgency.trim().to_string()
    };
    Badge {
        tone: urgency_tone(urgency),
        label,
    }
}
