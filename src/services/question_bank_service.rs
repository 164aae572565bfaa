use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error::{Error, Result};
use crate::models::question::Question;
use crate::services::submission_service::SubmissionService;

/// File-backed question bank shared by every request.
///
/// Appends run under one lock covering push, persist and commit, so two
/// concurrent submissions cannot overwrite each other.
#[derive(Clone)]
pub struct QuestionBankService {
    path: PathBuf,
    bank: Arc<Mutex<Vec<Question>>>,
}

impl QuestionBankService {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let questions = Self::load(&path).await?;
        tracing::info!(
            path = %path.display(),
            count = questions.len(),
            "Question bank loaded"
        );
        Ok(Self {
            path,
            bank: Arc::new(Mutex::new(questions)),
        })
    }

    /// Reads the bank file, creating it as an empty array when absent.
    pub async fn load(path: &Path) -> Result<Vec<Question>> {
        let raw = match tokio::fs::read(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "Initializing empty question bank");
                write_atomically(path, &[] as &[Question]).await?;
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(Error::StorageCorrupt(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let questions: Vec<Question> = serde_json::from_slice(&raw)
            .map_err(|e| Error::StorageCorrupt(format!("{}: {}", path.display(), e)))?;

        // Records that could never be answered correctly are not a usable bank.
        for (idx, q) in questions.iter().enumerate() {
            SubmissionService::validate(&q.question, &q.options, &q.answer).map_err(|_| {
                Error::StorageCorrupt(format!(
                    "{}: record {} is not a well-formed question",
                    path.display(),
                    idx
                ))
            })?;
        }

        Ok(questions)
    }

    pub async fn append(&self, question: Question) -> Result<()> {
        let mut bank = self.bank.lock().await;
        bank.push(question);
        if let Err(e) = write_atomically(&self.path, bank.as_slice()).await {
            bank.pop();
            tracing::error!(error = %e, path = %self.path.display(), "Append rolled back");
            return Err(e);
        }
        tracing::info!(count = bank.len(), "Question appended to bank");
        Ok(())
    }

    pub async fn questions(&self) -> Vec<Question> {
        self.bank.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.bank.lock().await.len()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Writes `value` to a staging file and renames it over the target.
async fn write_atomically<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let write_err = |e: std::io::Error| Error::StorageWrite(format!("{}: {}", path.display(), e));

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(|e| Error::StorageWrite(format!("{}: {}", path.display(), e)))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
    }

    let staging = staging_path(path);
    let written = async {
        let mut file = tokio::fs::File::create(&staging).await?;
        file.write_all(&buf).await?;
        file.sync_all().await?;
        drop(file);
        tokio::fs::rename(&staging, path).await
    }
    .await;

    if let Err(e) = written {
        if let Err(cleanup) = tokio::fs::remove_file(&staging).await {
            if cleanup.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(error = %cleanup, path = %staging.display(), "Staging file left behind");
            }
        }
        return Err(write_err(e));
    }
    Ok(())
}
