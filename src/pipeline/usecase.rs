//! Use-Case Specification Pipeline
//!
//! Single-file analysis: extract the operation/model summary, generate the
//! specification markdown, persist it with its accounting footer. This is
//! the one pipeline that retries transient provider faults, since the whole
//! run rides on a single generation.

use std::path::Path;

use backon::{ExponentialBuilder, Retryable};
use tracing::{info, warn};

use super::RunSummary;
use crate::ai::{create_provider, CostReport, SharedProvider, TokenCounter};
use crate::analyzer;
use crate::config::Config;
use crate::parse::require_artifact_text;
use crate::prompt::templates;
use crate::types::{CodeloreError, Result, TokenUsage};
use crate::writer;

pub async fn run(config: &Config, file: &Path) -> Result<RunSummary> {
    let provider = create_provider(&config.llm)?;
    run_with_provider(config, file, provider).await
}

pub async fn run_with_provider(
    config: &Config,
    file: &Path,
    provider: SharedProvider,
) -> Result<RunSummary> {
    if !file.is_file() {
        return Err(CodeloreError::NoInput(file.to_path_buf()));
    }
    let content = std::fs::read_to_string(file)?;
    let file_name = file.to_string_lossy();

    let analysis = analyzer::analyze_file(&file_name, &content);
    info!("Analyzed {}", file_name);

    let request = templates::use_case().render(&[("analysis", analysis.as_str())])?;

    let raw = (|| async { provider.generate(&request).await })
        .retry(ExponentialBuilder::default().with_max_times(config.llm.max_retries))
        .when(CodeloreError::is_retryable)
        .notify(|err: &CodeloreError, dur: std::time::Duration| {
            warn!("Generation failed ({}), retrying in {:?}", err, dur);
        })
        .await?;

    let counter = TokenCounter::default();
    let usage = TokenUsage {
        input_tokens: counter.count(&request.system) + counter.count(&request.human),
        output_tokens: counter.count(&raw),
    };

    let use_case = require_artifact_text(&file_name, &raw)?;

    writer::ensure_output_dir(&config.output.dir)?;
    let artifact = writer::write_use_case_report(
        &config.output.dir,
        file,
        use_case,
        usage,
        &config.pricing,
    )?;

    Ok(RunSummary {
        artifacts: vec![artifact],
        files: vec![file_name.into_owned()],
        usage,
        cost: CostReport::calculate(usage, &config.pricing),
        preview: Some(use_case.to_string()),
        analysis: Some(analysis),
        units_total: 1,
        units_succeeded: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::types::GenerationRequest;

    struct FlakyProvider {
        failures_before_success: usize,
        calls: AtomicUsize,
        error: String,
    }

    #[async_trait]
    impl crate::ai::LlmProvider for FlakyProvider {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures_before_success {
                Err(CodeloreError::LlmApi(self.error.clone()))
            } else {
                Ok("# Use Case Specifications\n\n## Create User\n| Section | Description |".to_string())
            }
        }

        fn name(&self) -> &str {
            "flaky"
        }

        fn model(&self) -> &str {
            "flaky-model"
        }
    }

    fn controller_file(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("UserController.ts");
        std::fs::write(
            &path,
            "export class UserController {\n    async createUser(req, res) {\n        return null;\n    }\n}\n",
        )
        .unwrap();
        path
    }

    fn config_for(output: &Path) -> Config {
        let mut config = Config::default();
        config.output.dir = output.to_path_buf();
        config
    }

    #[tokio::test]
    async fn test_transient_fault_retried_to_success() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = controller_file(tmp.path());
        let out = tempfile::TempDir::new().unwrap();
        let config = config_for(out.path());

        let provider = Arc::new(FlakyProvider {
            failures_before_success: 2,
            calls: AtomicUsize::new(0),
            error: "overloaded (529)".to_string(),
        });
        let summary = run_with_provider(&config, &file, provider.clone())
            .await
            .unwrap();

        assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
        assert!(summary.artifacts[0].exists());
        assert!(summary.analysis.as_deref().unwrap().contains("CRUD Operation: createUser"));
    }

    #[tokio::test]
    async fn test_auth_fault_not_retried() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = controller_file(tmp.path());
        let out = tempfile::TempDir::new().unwrap();
        let config = config_for(out.path());

        let provider = Arc::new(FlakyProvider {
            failures_before_success: 1,
            calls: AtomicUsize::new(0),
            error: "invalid api key (401)".to_string(),
        });
        let err = run_with_provider(&config, &file, provider.clone())
            .await
            .unwrap_err();

        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert!(matches!(err, CodeloreError::LlmApi(_)));
    }

    #[tokio::test]
    async fn test_retries_bounded_by_configuration() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = controller_file(tmp.path());
        let out = tempfile::TempDir::new().unwrap();
        let mut config = config_for(out.path());
        config.llm.max_retries = 1;

        let provider = Arc::new(FlakyProvider {
            failures_before_success: 10,
            calls: AtomicUsize::new(0),
            error: "overloaded".to_string(),
        });
        let err = run_with_provider(&config, &file, provider.clone())
            .await
            .unwrap_err();

        // Initial attempt plus one retry
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
        assert!(!err.is_fatal());
    }

    #[tokio::test]
    async fn test_missing_file_is_no_input() {
        let out = tempfile::TempDir::new().unwrap();
        let config = config_for(out.path());

        let provider = Arc::new(FlakyProvider {
            failures_before_success: 0,
            calls: AtomicUsize::new(0),
            error: String::new(),
        });
        let err = run_with_provider(&config, Path::new("/no/such/file.ts"), provider)
            .await
            .unwrap_err();
        assert!(matches!(err, CodeloreError::NoInput(_)));
    }

    #[tokio::test]
    async fn test_report_carries_footer() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = controller_file(tmp.path());
        let out = tempfile::TempDir::new().unwrap();
        let config = config_for(out.path());

        let provider = Arc::new(FlakyProvider {
            failures_before_success: 0,
            calls: AtomicUsize::new(0),
            error: String::new(),
        });
        let summary = run_with_provider(&config, &file, provider).await.unwrap();

        assert_eq!(
            summary.artifacts[0].file_name().unwrap(),
            "use_case_UserController.md"
        );
        let written = std::fs::read_to_string(&summary.artifacts[0]).unwrap();
        assert!(written.contains("Token usage:"));
        assert!(written.contains("Estimated cost: $"));
    }
}
