//! End-to-end runs of the validator against a mock GitHub API.

mod common;

use scanverify::{CheckId, CheckOutcome, ChecklistValidator, GitHubClient};

use common::{
    branches, config_for, main_issue_comments, mock_json, open_issues, repo_path,
    security_update_pulls, setup_test_logging, MAIN_ISSUE,
};

#[tokio::test]
async fn test_completed_checklist_passes() {
    setup_test_logging();
    let mut server = mockito::Server::new_async().await;

    let issues = server
        .mock("GET", repo_path("issues?state=open&per_page=50").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(open_issues().to_string())
        .expect(2)
        .create_async()
        .await;
    let branch_list = mock_json(
        &mut server,
        &repo_path("branches?per_page=50"),
        &branches(&["main", "security-scan", "privacy-check"]),
    )
    .await;
    let comments = mock_json(
        &mut server,
        &repo_path(&format!("issues/{MAIN_ISSUE}/comments")),
        &main_issue_comments(),
    )
    .await;
    let pulls = mock_json(
        &mut server,
        &repo_path("pulls?state=open&per_page=30"),
        &security_update_pulls(),
    )
    .await;

    let config = config_for(&server);
    let client = GitHubClient::new(&config.github, None).unwrap();
    let report = ChecklistValidator::new(client, config).run().await;

    issues.assert_async().await;
    branch_list.assert_async().await;
    comments.assert_async().await;
    pulls.assert_async().await;

    assert!(report.all_passed(), "{report:#?}");
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.main_issue, Some(MAIN_ISSUE));
    assert_eq!(report.repository, "acme/chatbot");
    assert!(!report.authenticated);

    assert_eq!(
        report.outcome(CheckId::Branches),
        Some(&CheckOutcome::passed(
            "found 2 security check branches: security-scan, privacy-check"
        ))
    );
    assert_eq!(
        report.outcome(CheckId::Checkpoints),
        Some(&CheckOutcome::passed(
            "found 3 security checkpoints: 用户输入处理, 对话响应, 权限验证"
        ))
    );
    assert_eq!(
        report.outcome(CheckId::Comments),
        Some(&CheckOutcome::passed("comments mention: src/utils/security.py"))
    );
}

#[tokio::test]
async fn test_missing_branches_fail_run() {
    let mut server = mockito::Server::new_async().await;

    let _issues = server
        .mock("GET", repo_path("issues?state=open&per_page=50").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(open_issues().to_string())
        .expect(2)
        .create_async()
        .await;
    let _branches = mock_json(&mut server, &repo_path("branches?per_page=50"), &branches(&[])).await;
    let _comments = mock_json(
        &mut server,
        &repo_path(&format!("issues/{MAIN_ISSUE}/comments")),
        &main_issue_comments(),
    )
    .await;
    let _pulls = mock_json(
        &mut server,
        &repo_path("pulls?state=open&per_page=30"),
        &security_update_pulls(),
    )
    .await;

    let config = config_for(&server);
    let client = GitHubClient::new(&config.github, None).unwrap();
    let report = ChecklistValidator::new(client, config).run().await;

    assert!(!report.all_passed());
    assert_eq!(report.exit_code(), 1);
    assert_eq!(
        report.outcome(CheckId::Branches),
        Some(&CheckOutcome::failed(
            "not enough security check branches: need 2, found 0"
        ))
    );
    assert!(report.outcome(CheckId::MainIssue).unwrap().is_passed());
    assert!(report.outcome(CheckId::SecurityUpdate).unwrap().is_passed());
}

#[tokio::test]
async fn test_restricted_api_fails_checks_without_aborting() {
    let mut server = mockito::Server::new_async().await;

    let _issues = server
        .mock("GET", repo_path("issues?state=open&per_page=50").as_str())
        .with_status(403)
        .with_body(r#"{"message":"API rate limit exceeded"}"#)
        .create_async()
        .await;
    let _branches = mock_json(
        &mut server,
        &repo_path("branches?per_page=50"),
        &branches(&["security-scan", "api-audit"]),
    )
    .await;
    let _pulls = mock_json(
        &mut server,
        &repo_path("pulls?state=open&per_page=30"),
        &security_update_pulls(),
    )
    .await;

    let config = config_for(&server);
    let client = GitHubClient::new(&config.github, None).unwrap();
    let report = ChecklistValidator::new(client, config).run().await;

    match report.outcome(CheckId::MainIssue) {
        Some(CheckOutcome::Failed { reason }) => assert!(reason.contains("403"), "{reason}"),
        other => panic!("expected failed main issue check, got {other:?}"),
    }
    assert!(matches!(
        report.outcome(CheckId::Checkpoints),
        Some(CheckOutcome::Skipped { .. })
    ));
    assert!(matches!(
        report.outcome(CheckId::Comments),
        Some(CheckOutcome::Skipped { .. })
    ));
    assert!(report.outcome(CheckId::Branches).unwrap().is_passed());
    assert!(report.outcome(CheckId::SecurityUpdate).unwrap().is_passed());
    assert_eq!(report.exit_code(), 1);
}

#[tokio::test]
async fn test_token_is_sent_and_reported() {
    let mut server = mockito::Server::new_async().await;

    let issues = server
        .mock("GET", repo_path("issues?state=open&per_page=50").as_str())
        .match_header("authorization", "token e2e-secret-value")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(open_issues().to_string())
        .expect(2)
        .create_async()
        .await;
    let _branches = mock_json(
        &mut server,
        &repo_path("branches?per_page=50"),
        &branches(&["security-scan", "privacy-check"]),
    )
    .await;
    let _comments = mock_json(
        &mut server,
        &repo_path(&format!("issues/{MAIN_ISSUE}/comments")),
        &main_issue_comments(),
    )
    .await;
    let _pulls = mock_json(
        &mut server,
        &repo_path("pulls?state=open&per_page=30"),
        &security_update_pulls(),
    )
    .await;

    let mut config = config_for(&server);
    config.github.token_env_var = "SCANVERIFY_E2E_TOKEN".to_string();
    let client = temp_env::with_var("SCANVERIFY_E2E_TOKEN", Some("e2e-secret-value"), || {
        GitHubClient::from_env(&config.github).unwrap()
    });
    let report = ChecklistValidator::new(client, config).run().await;

    issues.assert_async().await;
    assert!(report.authenticated);
    assert!(report.all_passed(), "{report:#?}");
}
