//! Notification value objects
//!
//! The `Notification` model is platform-independent: delivery adapters derive
//! everything presentation-specific (glyph, sound name, urgency) from
//! `Severity` via the fixed lookup tables below.

use serde::{Deserialize, Serialize};

/// Severity of a notification, affects glyph and sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Parse a severity string, falling back to `Info` on anything
    /// unrecognized. Incoming requests are never rejected over a bad
    /// severity value.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "info" => Self::Info,
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    /// Get the glyph shown in titles and acknowledgements
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Info => "ℹ️",
            Self::Success => "✅",
            Self::Warning => "⚠️",
            Self::Error => "❌",
        }
    }

    /// Get the macOS alert sound name
    pub const fn macos_sound(&self) -> &'static str {
        match self {
            Self::Info => "Blow",
            Self::Success => "Glass",
            Self::Warning => "Basso",
            Self::Error => "Sosumi",
        }
    }

    /// Get the notify-send urgency level
    pub const fn linux_urgency(&self) -> &'static str {
        match self {
            Self::Error => "critical",
            _ => "normal",
        }
    }

    /// Get the freedesktop sound file played on Linux
    pub const fn linux_sound_file(&self) -> &'static str {
        match self {
            Self::Info => "message.oga",
            Self::Success => "complete.oga",
            Self::Warning => "dialog-warning.oga",
            Self::Error => "dialog-error.oga",
        }
    }
}

/// A notification ready for delivery.
///
/// Built once by the composer, passed by value to a delivery adapter, never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Notification title (without glyph prefix)
    pub title: String,
    /// Body text, may be empty
    pub body: String,
    /// Severity, drives glyph/sound/urgency
    pub severity: Severity,
    /// Whether to play an alert sound
    pub play_sound: bool,
    /// Display duration in seconds (timed-dismiss backends only)
    pub display_seconds: u32,
    /// Agent name, folded into the body prefix
    pub agent: Option<String>,
    /// Task name or number, folded into the body prefix
    pub task: Option<String>,
    /// Subtitle context (repo/branch), native on macOS
    pub subtitle: Option<String>,
}

impl Notification {
    /// Create a notification with defaults (info, sound on, 10 seconds)
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity: Severity::Info,
            play_sound: true,
            display_seconds: 10,
            agent: None,
            task: None,
            subtitle: None,
        }
    }

    /// Set the severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Set whether a sound is played
    pub fn with_sound(mut self, play_sound: bool) -> Self {
        self.play_sound = play_sound;
        self
    }

    /// Set the display duration in seconds
    pub fn with_display_seconds(mut self, seconds: u32) -> Self {
        self.display_seconds = seconds;
        self
    }

    /// Set the agent name
    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Some(agent.into());
        self
    }

    /// Set the task name
    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }

    /// Set the subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Title with the severity glyph prefixed, as shown by the backends
    pub fn decorated_title(&self) -> String {
        format!("{} {}", self.severity.glyph(), self.title)
    }

    /// Body with the agent/task context prefix applied.
    ///
    /// When `include_subtitle` is set the subtitle is folded into the prefix
    /// as `[subtitle]`; the macOS native tier passes `false` because the
    /// subtitle has its own field there.
    pub fn formatted_body(&self, include_subtitle: bool) -> String {
        let mut parts: Vec<String> = Vec::new();

        if include_subtitle {
            if let Some(subtitle) = &self.subtitle {
                parts.push(format!("[{}]", subtitle));
            }
        }
        if let Some(agent) = &self.agent {
            parts.push(capitalize(agent));
        }
        if let Some(task) = &self.task {
            parts.push(task.clone());
        }

        if parts.is_empty() {
            self.body.clone()
        } else {
            format!("{} - {}", parts.join(" | "), self.body)
        }
    }
}

/// Uppercase the first character, leave the rest untouched
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
