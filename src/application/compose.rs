//! Message composer
//!
//! Pure functions that turn an operation's arguments into a `Notification`.
//! No I/O here: composing the same operation/args pair twice yields identical
//! models, which the router relies on.

use serde_json::Value;

use crate::domain::notification::{Notification, Severity};

/// Maximum number of file/worktree names listed before truncating
pub const MAX_LISTED_ITEMS: usize = 5;

/// The closed set of routable operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Notify,
    AskUser,
    NotifyCommit,
    NotifyMerge,
    NotifySync,
}

impl Operation {
    /// Look up an operation by its wire name
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "notify" => Some(Self::Notify),
            "ask_user" => Some(Self::AskUser),
            "notify_commit" => Some(Self::NotifyCommit),
            "notify_merge" => Some(Self::NotifyMerge),
            "notify_sync" => Some(Self::NotifySync),
            _ => None,
        }
    }

    /// Wire name of the operation
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Notify => "notify",
            Self::AskUser => "ask_user",
            Self::NotifyCommit => "notify_commit",
            Self::NotifyMerge => "notify_merge",
            Self::NotifySync => "notify_sync",
        }
    }
}

/// Request-independent defaults fed into composition (from config)
#[derive(Debug, Clone, Copy)]
pub struct ComposeDefaults {
    /// Whether sound is on when the request doesn't say
    pub play_sound: bool,
    /// Display duration in seconds
    pub display_seconds: u32,
}

impl Default for ComposeDefaults {
    fn default() -> Self {
        Self {
            play_sound: true,
            display_seconds: 10,
        }
    }
}

/// Build a `Notification` for an operation from its untyped arguments.
///
/// Missing required fields degrade to documented defaults; unrecognized enum
/// values are normalized, never rejected.
pub fn compose(operation: Operation, args: &Value, defaults: &ComposeDefaults) -> Notification {
    // Only `notify` exposes a per-request sound flag; the other operations
    // take the configured default.
    let notification = match operation {
        Operation::Notify => compose_notify(args, defaults),
        Operation::AskUser => compose_ask_user(args).with_sound(defaults.play_sound),
        Operation::NotifyCommit => compose_commit(args).with_sound(defaults.play_sound),
        Operation::NotifyMerge => compose_merge(args).with_sound(defaults.play_sound),
        Operation::NotifySync => compose_sync(args).with_sound(defaults.play_sound),
    };
    notification.with_display_seconds(defaults.display_seconds)
}

fn compose_notify(args: &Value, defaults: &ComposeDefaults) -> Notification {
    let title = str_arg(args, "title").unwrap_or("Notification");
    let message = str_arg(args, "message").unwrap_or("");
    let severity = Severity::parse_or_default(str_arg(args, "type").unwrap_or("info"));
    let sound = args["sound"].as_bool().unwrap_or(defaults.play_sound);

    Notification::new(title, message)
        .with_severity(severity)
        .with_sound(sound)
}

fn compose_ask_user(args: &Value) -> Notification {
    let title = str_arg(args, "title").unwrap_or("Question");
    let question = str_arg(args, "question").unwrap_or("");

    // low urgency is informational, high means the agent is blocked
    let severity = match str_arg(args, "urgency") {
        Some("low") => Severity::Info,
        Some("normal") => Severity::Warning,
        Some("high") => Severity::Error,
        _ => Severity::Warning,
    };

    let options = list_arg(args, "options");
    let body = if options.is_empty() {
        question.to_string()
    } else {
        format!("{}\n[{}]", question, options.join(" | "))
    };

    let mut notification = Notification::new(title, body).with_severity(severity);

    if let Some(subtitle) = repo_branch_subtitle(
        str_arg(args, "repo"),
        str_arg(args, "branch"),
    ) {
        notification = notification.with_subtitle(subtitle);
    }
    if let Some(agent) = str_arg(args, "agent") {
        notification = notification.with_agent(agent);
    }
    if let Some(task) = str_arg(args, "task") {
        notification = notification.with_task(task);
    }

    notification
}

fn compose_commit(args: &Value) -> Notification {
    let message = str_arg(args, "message").unwrap_or("");
    let files = list_arg(args, "files");

    let body = if files.is_empty() {
        message.to_string()
    } else {
        format!("{}\nFiles: {}", message, summarize_list(&files))
    };

    let mut notification = Notification::new("Commit", body).with_severity(Severity::Info);

    if let Some(branch) = str_arg(args, "branch") {
        notification = notification.with_subtitle(branch);
    }
    if let Some(agent) = str_arg(args, "agent") {
        notification = notification.with_agent(agent);
    }

    notification
}

fn compose_merge(args: &Value) -> Notification {
    let source = str_arg(args, "source_branch").unwrap_or("");
    let commits = args["commits_count"].as_u64().unwrap_or(0);
    let files = args["files_count"].as_u64().unwrap_or(0);

    let mut lines = vec![format!("{} → main", source)];

    let mut stats: Vec<String> = Vec::new();
    if commits > 0 {
        stats.push(count_noun(commits, "commit"));
    }
    if files > 0 {
        stats.push(count_noun(files, "file"));
    }
    if !stats.is_empty() {
        lines.push(stats.join(", "));
    }

    if let Some(version) = str_arg(args, "version") {
        lines.push(format!("Version: {}", version));
    }

    let mut notification =
        Notification::new("Merged to main", lines.join("\n")).with_severity(Severity::Warning);

    if let Some(repo) = str_arg(args, "repo") {
        notification = notification.with_subtitle(repo);
    }
    if let Some(agent) = str_arg(args, "agent") {
        notification = notification.with_agent(agent);
    }

    notification
}

fn compose_sync(args: &Value) -> Notification {
    let worktrees = list_arg(args, "worktrees");
    let conflicts = list_arg(args, "conflicts");
    let source = str_arg(args, "source").unwrap_or("main");

    let severity = if conflicts.is_empty() {
        Severity::Info
    } else {
        Severity::Warning
    };

    let mut lines = vec![format!(
        "{} worktree(s) updated from {}",
        worktrees.len(),
        source
    )];
    if !worktrees.is_empty() {
        lines.push(summarize_list(&worktrees));
    }
    if !conflicts.is_empty() {
        lines.push(format!("Conflicts: {}", conflicts.join(", ")));
    }

    let mut notification =
        Notification::new("Worktrees synced", lines.join("\n")).with_severity(severity);

    if let Some(repo) = str_arg(args, "repo") {
        notification = notification.with_subtitle(repo);
    }

    notification
}

/// `repo @ branch` when both are present, repo alone when only repo is
fn repo_branch_subtitle(repo: Option<&str>, branch: Option<&str>) -> Option<String> {
    match (repo, branch) {
        (Some(repo), Some(branch)) => Some(format!("{} @ {}", repo, branch)),
        (Some(repo), None) => Some(repo.to_string()),
        _ => None,
    }
}

/// First `MAX_LISTED_ITEMS` names comma-joined, with a `(+N more)` suffix
/// when the list is longer
fn summarize_list(items: &[String]) -> String {
    let shown = items
        .iter()
        .take(MAX_LISTED_ITEMS)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if items.len() > MAX_LISTED_ITEMS {
        format!("{} (+{} more)", shown, items.len() - MAX_LISTED_ITEMS)
    } else {
        shown
    }
}

/// `"1 commit"` / `"3 commits"`
fn count_noun(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Non-empty string argument, `None` when absent or empty
fn str_arg<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args[key].as_str().filter(|s| !s.is_empty())
}

/// String-list argument; non-string entries are skipped
fn list_arg(args: &Value, key: &str) -> Vec<String> {
    args[key]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or_default()
}
