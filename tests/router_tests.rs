//! End-to-end routing tests with a fake delivery backend

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use agent_notify::application::ports::{NotificationError, Notifier};
use agent_notify::application::{ComposeDefaults, NotifyRouter, DELIVERY_FAILED_ACK};
use agent_notify::domain::notification::{Notification, Severity};

/// Fake backend that records every delivered notification
#[derive(Clone)]
struct FakeBackend {
    delivered: Arc<Mutex<Vec<Notification>>>,
}

impl FakeBackend {
    fn new() -> Self {
        Self {
            delivered: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn last(&self) -> Notification {
        self.delivered.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl Notifier for FakeBackend {
    fn name(&self) -> &str {
        "fake"
    }

    async fn deliver(&self, notification: &Notification) -> Result<(), NotificationError> {
        self.delivered.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

fn router_with_backend() -> (NotifyRouter, FakeBackend) {
    let backend = FakeBackend::new();
    let router = NotifyRouter::new(Some(Box::new(backend.clone())), ComposeDefaults::default());
    (router, backend)
}

#[tokio::test]
async fn only_enumerated_severities_reach_the_backend() {
    let (router, backend) = router_with_backend();

    for kind in ["info", "success", "warning", "error", "meltdown", ""] {
        let args = json!({"title": "T", "message": "m", "type": kind});
        router.handle("notify", &args).await;
        let severity = backend.last().severity;
        assert!(matches!(
            severity,
            Severity::Info | Severity::Success | Severity::Warning | Severity::Error
        ));
    }
}

#[tokio::test]
async fn ack_echoes_title_verbatim_on_success() {
    let (router, _backend) = router_with_backend();

    let title = "Deploy finished (stage 2)";
    let args = json!({"title": title, "message": "all good", "type": "success"});
    let ack = router.handle("notify", &args).await;
    assert!(ack.contains(title), "ack {:?} lost the title", ack);
    assert!(ack.starts_with("✅"));
}

#[tokio::test]
async fn commit_notification_reaches_backend_fully_composed() {
    let (router, backend) = router_with_backend();

    let args = json!({
        "branch": "feature/parser",
        "message": "Add tokenizer",
        "files": ["a.rs", "b.rs", "c.rs", "d.rs", "e.rs", "f.rs"],
        "agent": "coder"
    });
    let ack = router.handle("notify_commit", &args).await;
    assert_eq!(ack, "ℹ️ Notification sent: Commit");

    let delivered = backend.last();
    assert_eq!(delivered.title, "Commit");
    assert_eq!(delivered.body, "Add tokenizer\nFiles: a.rs, b.rs, c.rs, d.rs, e.rs (+1 more)");
    assert_eq!(delivered.subtitle.as_deref(), Some("feature/parser"));
    assert_eq!(delivered.agent.as_deref(), Some("coder"));
}

#[tokio::test]
async fn merge_notification_stats_and_version() {
    let (router, backend) = router_with_backend();

    let args = json!({
        "source_branch": "dev",
        "commits_count": 1,
        "files_count": 3,
        "version": "2.1.0",
        "repo": "proj"
    });
    router.handle("notify_merge", &args).await;

    let delivered = backend.last();
    assert_eq!(delivered.severity, Severity::Warning);
    assert_eq!(delivered.body, "dev → main\n1 commit, 3 files\nVersion: 2.1.0");
    assert_eq!(delivered.subtitle.as_deref(), Some("proj"));
}

#[tokio::test]
async fn sync_with_conflicts_is_a_warning() {
    let (router, backend) = router_with_backend();

    let args = json!({
        "worktrees": ["wt-a", "wt-b"],
        "conflicts": ["f1.txt"],
        "repo": "proj"
    });
    router.handle("notify_sync", &args).await;
    assert_eq!(backend.last().severity, Severity::Warning);

    let args = json!({"worktrees": ["wt-a"]});
    router.handle("notify_sync", &args).await;
    assert_eq!(backend.last().severity, Severity::Info);
}

#[tokio::test]
async fn ask_user_delivers_options_and_context() {
    let (router, backend) = router_with_backend();

    let args = json!({
        "title": "Pick a strategy",
        "question": "Rebase or merge?",
        "options": ["rebase", "merge"],
        "repo": "proj",
        "branch": "main",
        "agent": "planner",
        "task": "task-9",
        "urgency": "low"
    });
    let ack = router.handle("ask_user", &args).await;
    assert_eq!(ack, "ℹ️ Question sent: [planner] Pick a strategy");

    let delivered = backend.last();
    assert_eq!(delivered.body, "Rebase or merge?\n[rebase | merge]");
    assert_eq!(delivered.subtitle.as_deref(), Some("proj @ main"));
    assert_eq!(delivered.task.as_deref(), Some("task-9"));
}

#[tokio::test]
async fn no_backend_means_nothing_is_delivered() {
    let router = NotifyRouter::new(None, ComposeDefaults::default());
    let ack = router
        .handle("notify", &json!({"title": "T", "message": "m"}))
        .await;
    assert_eq!(ack, DELIVERY_FAILED_ACK);
}

#[tokio::test]
async fn config_defaults_flow_to_the_backend() {
    let backend = FakeBackend::new();
    let defaults = ComposeDefaults {
        play_sound: false,
        display_seconds: 3,
    };
    let router = NotifyRouter::new(Some(Box::new(backend.clone())), defaults);

    router
        .handle("notify", &json!({"title": "T", "message": "m"}))
        .await;

    let delivered = backend.last();
    assert!(!delivered.play_sound);
    assert_eq!(delivered.display_seconds, 3);
}
