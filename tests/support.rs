//! Common test support utilities and fixtures

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use link_updater::{LinkChange, PullRequestApi};
use link_updater_github::{PullRequest, PullRequestParams};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Mutex;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Owned copy of the parameters of one creation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub owner: String,
    pub repo: String,
    pub title: String,
    pub head: String,
    pub base: String,
    pub body: String,
    pub draft: bool,
}

/// Stand-in for the GitHub API that records every creation request
pub struct RecordingApi {
    pub requests: Mutex<Vec<RecordedRequest>>,
    failure: Option<String>,
}

impl RecordingApi {
    /// Accepts every request, numbering PRs from 1 in request order
    pub fn accepting() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// Rejects every request with `message`
    pub fn rejecting(message: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            failure: Some(message.to_string()),
        }
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

#[async_trait]
impl PullRequestApi for RecordingApi {
    async fn create_pull_request(&self, params: PullRequestParams<'_>) -> Result<PullRequest> {
        let number = {
            let mut requests = self.requests.lock().expect("requests lock poisoned");
            requests.push(RecordedRequest {
                owner: params.owner.to_string(),
                repo: params.repo.to_string(),
                title: params.title.to_string(),
                head: params.head.to_string(),
                base: params.base.to_string(),
                body: params.body.to_string(),
                draft: params.draft,
            });
            requests.len() as u64
        };

        if let Some(message) = &self.failure {
            anyhow::bail!("{}", message);
        }

        Ok(PullRequest {
            html_url: format!(
                "https://github.com/{}/{}/pull/{}",
                params.owner, params.repo, number
            ),
            number,
        })
    }
}

/// The three-record scenario: two files, `a.md` seen first
pub fn scenario_changes() -> Vec<LinkChange> {
    vec![
        LinkChange::new("a.md", "http://x", "https://x"),
        LinkChange::new("b.md", "http://y", "https://y"),
        LinkChange::new("a.md", "http://z", "https://z"),
    ]
}

/// Write `changes` as a JSON change list inside `dir`
pub fn write_changes(dir: &TempDir, changes: &[LinkChange]) -> PathBuf {
    let path = dir.path().join("link-changes.json");
    let json = serde_json::to_string_pretty(changes).expect("Failed to serialize changes");
    std::fs::write(&path, json).expect("Failed to write change list");
    path
}

/// Result of running the CLI binary
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the link-updater binary with a clean GitHub environment
pub fn run_cli(args: &[&str], cwd: Option<&Path>) -> CliOutput {
    run_cli_with_env(args, cwd, &[])
}

/// Like [`run_cli`], with extra environment variables set for the run
pub fn run_cli_with_env(args: &[&str], cwd: Option<&Path>, envs: &[(&str, &str)]) -> CliOutput {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_link-updater"));
    cmd.args(args)
        .env_remove("GITHUB_TOKEN")
        .env_remove("GITHUB_REPOSITORY")
        .env_remove("GITHUB_API_URL")
        .env_remove("RUST_LOG")
        .envs(envs.iter().copied());

    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd.output().expect("Failed to execute link-updater");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Answer a single HTTP request with `status` and a JSON `body`; returns the base URL
pub async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        let mut data = Vec::new();
        let mut chunk = [0u8; 4096];
        while let Ok(n) = socket.read(&mut chunk).await {
            if n == 0 {
                break;
            }
            data.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&data);
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if data.len() >= end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}")
}

/// Base URL of a local port nothing listens on
pub fn closed_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Listener has no address");
    drop(listener);
    format!("http://{addr}")
}
