mod types;

use std::path::{Path, PathBuf};

use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use self::types::{Model, Review};
use crate::config::EXEC_NAME;
use crate::state::http::Payload;
use crate::state::State;

pub const MAX_FILE_SIZE: u64 = 8 * 1024 * 1024;

pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "txt", "md", "py", "java", "c", "cpp", "csv", "json", "html", "js", "ts", "css", "pdf", "jpg",
    "jpeg", "png", "gif", "bmp", "webp",
];

#[derive(Debug, Parser)]
#[clap(about = "Ask GPT to review an assignment (Pro)")]
pub struct Options {
    #[clap(name = "question", help = "What to ask about the assignment")]
    pub question: String,
    #[clap(short = 'f', long = "file", help = "Assignment file to attach, up to 8 MiB")]
    pub file: Option<PathBuf>,
    #[clap(
        short = 'm',
        long = "model",
        help = "Model to use: gpt-3.5-turbo, gpt-4o or o1-pro",
        default_value = "gpt-3.5-turbo"
    )]
    pub model: Model,
}

pub fn render() -> Result<()> {
    log::info!("Ask about an assignment with `{EXEC_NAME} review \"<question>\" --file <path>`");
    log::info!(
        "Supported files: {} (up to 8 MiB)",
        SUPPORTED_EXTENSIONS.join(", ")
    );

    Ok(())
}

/// Rejects files the server would refuse, before uploading them.
pub fn validate_file(path: &Path, size: u64) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    ensure!(
        SUPPORTED_EXTENSIONS.contains(&extension.as_str()),
        "Unsupported file type `{}`, use one of: {}",
        path.display(),
        SUPPORTED_EXTENSIONS.join(", ")
    );

    ensure!(
        size <= MAX_FILE_SIZE,
        "`{}` is larger than 8 MiB",
        path.display()
    );

    Ok(())
}

async fn file_part(path: &Path) -> Result<Part> {
    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("Could not read `{}`", path.display()))?;

    validate_file(path, metadata.len())?;

    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Could not read `{}`", path.display()))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "assignment".to_string());

    Ok(Part::bytes(data).file_name(file_name))
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    ensure!(!options.question.trim().is_empty(), "Ask a question");

    let mut form = Form::new()
        .text("question", options.question.clone())
        .text("model", options.model.to_string());

    if let Some(path) = &options.file {
        form = form.part("file", file_part(path).await?);
    }

    log::info!("Asking {}, this can take a while", options.model);

    let review = state
        .http
        .fetch::<Review>("POST", "/api/chat/gpt", Some(Payload::Multipart(form)))
        .await?
        .success("The review failed")?
        .data;

    if let Some(model) = &review.model {
        log::info!("Answered by {model}");
    }

    match review.answer {
        Some(Value::String(answer)) => println!("{answer}"),
        Some(answer) => println!("{}", serde_json::to_string_pretty(&answer)?),
        None => bail!("The server sent no answer"),
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validate_file() {
        assert!(validate_file(Path::new("hw1.py"), 1024).is_ok());
        assert!(validate_file(Path::new("report.PDF"), MAX_FILE_SIZE).is_ok());

        assert!(validate_file(Path::new("hw1.exe"), 1024).is_err());
        assert!(validate_file(Path::new("Makefile"), 10).is_err());
        assert!(validate_file(Path::new("scan.png"), MAX_FILE_SIZE + 1).is_err());
    }

    #[test]
    fn test_model_parsing() {
        assert_eq!("gpt-4o".parse::<Model>().unwrap(), Model::Gpt4o);
        assert_eq!("GPT-3.5-TURBO".parse::<Model>().unwrap(), Model::Gpt35Turbo);
        assert!("gpt-5".parse::<Model>().is_err());
        assert_eq!(Model::O1Pro.to_string(), "o1-pro");
    }

    #[tokio::test]
    async fn test_missing_file_fails_before_upload() {
        let error = file_part(Path::new("/definitely/not/here.py"))
            .await
            .unwrap_err();

        assert!(error.to_string().contains("Could not read"));
    }
}
