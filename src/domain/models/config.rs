//! Configuration model with serde defaults for every field.

use serde::{Deserialize, Serialize};

/// Main configuration structure for scanverify
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Target repository and API access
    #[serde(default)]
    pub github: GitHubConfig,

    /// Main issue discovery rules
    #[serde(default)]
    pub main_issue: MainIssueConfig,

    /// Branch coverage rules
    #[serde(default)]
    pub branches: BranchesConfig,

    /// Checkpoint keyword rules
    #[serde(default)]
    pub checkpoints: CheckpointsConfig,

    /// Main issue comment rules
    #[serde(default)]
    pub comments: CommentsConfig,

    /// Follow-up pull request rules
    #[serde(default)]
    pub security_update: SecurityUpdateConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Repository coordinates and HTTP settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GitHubConfig {
    /// Organization (or user) owning the repository
    #[serde(default = "default_organization")]
    pub organization: String,

    /// Repository name
    #[serde(default = "default_repository")]
    pub repository: String,

    /// Name of the environment variable holding the API token
    #[serde(default = "default_token_env_var")]
    pub token_env_var: String,

    /// API root, without a trailing slash
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_organization() -> String {
    "your-organization".to_string()
}

fn default_repository() -> String {
    "ai-chatbot-security-scanner".to_string()
}

fn default_token_env_var() -> String {
    "GITHUB_TOKEN".to_string()
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            organization: default_organization(),
            repository: default_repository(),
            token_env_var: default_token_env_var(),
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// How the main security issue is recognized
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MainIssueConfig {
    /// Expected title, compared verbatim in exact mode
    #[serde(default = "default_main_issue_title")]
    pub title: String,

    /// Require the title to equal `title` instead of containing a marker
    #[serde(default)]
    pub exact_title_match: bool,

    /// Substrings that mark a candidate title in loose mode
    #[serde(default = "default_main_issue_markers")]
    pub title_markers: Vec<String>,

    /// Labels the main issue is expected to carry
    #[serde(default = "default_required_labels")]
    pub required_labels: Vec<String>,

    /// Require every label in `required_labels`
    #[serde(default)]
    pub require_all_labels: bool,

    /// Labels that must overlap in loose mode
    #[serde(default = "default_min_matching_labels")]
    pub min_matching_labels: usize,

    /// Page size for the open-issue listing
    #[serde(default = "default_issue_page_size")]
    pub per_page: u32,
}

fn default_main_issue_title() -> String {
    "安全漏洞扫描：对话系统风险检测".to_string()
}

fn default_main_issue_markers() -> Vec<String> {
    vec!["安全".to_string(), "漏洞".to_string(), "扫描".to_string()]
}

fn default_required_labels() -> Vec<String> {
    vec![
        "安全".to_string(),
        "漏洞".to_string(),
        "AI对话".to_string(),
        "风险检测".to_string(),
    ]
}

const fn default_min_matching_labels() -> usize {
    2
}

const fn default_issue_page_size() -> u32 {
    50
}

impl Default for MainIssueConfig {
    fn default() -> Self {
        Self {
            title: default_main_issue_title(),
            exact_title_match: false,
            title_markers: default_main_issue_markers(),
            required_labels: default_required_labels(),
            require_all_labels: false,
            min_matching_labels: default_min_matching_labels(),
            per_page: default_issue_page_size(),
        }
    }
}

/// Branch coverage rules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BranchesConfig {
    /// Branch names expected to exist
    #[serde(default = "default_required_branches")]
    pub required: Vec<String>,

    /// How many of `required` must exist
    #[serde(default = "default_min_branches")]
    pub min_branches: usize,

    /// Page size for the branch listing
    #[serde(default = "default_branch_page_size")]
    pub per_page: u32,
}

fn default_required_branches() -> Vec<String> {
    vec![
        "security-scan".to_string(),
        "privacy-check".to_string(),
        "api-audit".to_string(),
    ]
}

const fn default_min_branches() -> usize {
    2
}

const fn default_branch_page_size() -> u32 {
    50
}

impl Default for BranchesConfig {
    fn default() -> Self {
        Self {
            required: default_required_branches(),
            min_branches: default_min_branches(),
            per_page: default_branch_page_size(),
        }
    }
}

/// Checkpoint keywords expected across the secondary issues
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CheckpointsConfig {
    /// Keywords looked for in the other open issues
    #[serde(default = "default_checkpoint_keywords")]
    pub keywords: Vec<String>,

    /// Distinct keywords that must be found
    #[serde(default = "default_min_checkpoints")]
    pub min_checkpoints: usize,
}

fn default_checkpoint_keywords() -> Vec<String> {
    vec![
        "用户输入处理".to_string(),
        "对话响应".to_string(),
        "权限验证".to_string(),
        "API接口".to_string(),
    ]
}

const fn default_min_checkpoints() -> usize {
    3
}

impl Default for CheckpointsConfig {
    fn default() -> Self {
        Self {
            keywords: default_checkpoint_keywords(),
            min_checkpoints: default_min_checkpoints(),
        }
    }
}

/// Rules for the discussion on the main issue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CommentsConfig {
    /// Fewest comments the main issue may have
    #[serde(default = "default_min_comments")]
    pub min_comments: usize,

    /// At least one of these must appear in the comments
    #[serde(default = "default_comment_keywords")]
    pub required_keywords: Vec<String>,
}

const fn default_min_comments() -> usize {
    2
}

fn default_comment_keywords() -> Vec<String> {
    vec![
        "src/utils/security.py".to_string(),
        "src/api/auth.py".to_string(),
        "config/settings.py".to_string(),
    ]
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            min_comments: default_min_comments(),
            required_keywords: default_comment_keywords(),
        }
    }
}

/// Rules for the follow-up security update pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SecurityUpdateConfig {
    /// When false the pull request check is not evaluated
    #[serde(default = "default_true")]
    pub required: bool,

    /// Expected title in exact mode
    #[serde(default = "default_update_title")]
    pub title: String,

    /// Require the title to equal `title`
    #[serde(default)]
    pub exact_title_match: bool,

    /// Substrings that mark the title in loose mode
    #[serde(default = "default_update_markers")]
    pub title_markers: Vec<String>,

    /// Head branch the pull request must come from
    #[serde(default = "default_source_branch")]
    pub source_branch: String,

    /// Page size for the open pull request listing
    #[serde(default = "default_pull_page_size")]
    pub per_page: u32,
}

const fn default_true() -> bool {
    true
}

fn default_update_title() -> String {
    "安全更新：基础漏洞修复".to_string()
}

fn default_update_markers() -> Vec<String> {
    vec!["安全".to_string(), "更新".to_string(), "修复".to_string()]
}

fn default_source_branch() -> String {
    "security-scan".to_string()
}

const fn default_pull_page_size() -> u32 {
    30
}

impl Default for SecurityUpdateConfig {
    fn default() -> Self {
        Self {
            required: true,
            title: default_update_title(),
            exact_title_match: false,
            title_markers: default_update_markers(),
            source_branch: default_source_branch(),
            per_page: default_pull_page_size(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for an additional JSON log file
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}
