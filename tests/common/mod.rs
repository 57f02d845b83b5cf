//! Common test utilities for integration tests
//!
//! Provides a mock GitHub server seeded with a repository that completed
//! the security scan exercise, plus config and logging helpers.

#![allow(dead_code)]

use mockito::{Mock, ServerGuard};
use serde_json::{json, Value};

use scanverify::Config;

pub const ORG: &str = "acme";
pub const REPO: &str = "chatbot";
pub const MAIN_ISSUE: u64 = 1;

/// Config pointing at the mock server.
pub fn config_for(server: &ServerGuard) -> Config {
    let mut config = Config::default();
    config.github.organization = ORG.to_string();
    config.github.repository = REPO.to_string();
    config.github.api_base = server.url();
    config.github.timeout_secs = 5;
    config
}

/// Full request path (with query) for a repository endpoint.
pub fn repo_path(endpoint: &str) -> String {
    format!("/repos/{ORG}/{REPO}/{endpoint}")
}

fn issue(number: u64, title: &str, body: &str, labels: &[&str]) -> Value {
    json!({
        "number": number,
        "title": title,
        "body": body,
        "state": "open",
        "labels": labels.iter().map(|name| json!({ "name": name })).collect::<Vec<_>>(),
    })
}

/// Main issue plus three checkpoint issues.
pub fn open_issues() -> Value {
    json!([
        issue(MAIN_ISSUE, "安全漏洞扫描", "对话系统风险检测", &["安全", "漏洞", "AI对话"]),
        issue(2, "检查点：用户输入处理", "检查输入过滤", &[]),
        issue(3, "检查点二", "对话响应中的敏感信息", &[]),
        issue(4, "检查点三", "权限验证流程", &["review"]),
    ])
}

pub fn branches(names: &[&str]) -> Value {
    Value::Array(names.iter().map(|name| json!({ "name": name })).collect())
}

pub fn main_issue_comments() -> Value {
    json!([
        { "body": "开始安全扫描" },
        { "body": "已审查 src/utils/security.py 的输入校验" },
    ])
}

pub fn security_update_pulls() -> Value {
    json!([
        {
            "number": 7,
            "title": "安全更新：基础漏洞修复",
            "state": "open",
            "head": { "ref": "security-scan" },
        }
    ])
}

/// Serve `body` as JSON on `GET path`.
pub async fn mock_json(server: &mut ServerGuard, path: &str, body: &Value) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
