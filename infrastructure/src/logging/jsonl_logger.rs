//! Generation transcript file.
//!
//! Every model call made by the title and post use cases ends up here as a
//! single JSON line: the template that was rendered, the model, the full
//! prompt, and either the completion or the error, plus attempt count and
//! latency. The file is opened in append mode so one transcript can span
//! many server runs.

use blogsmith_application::{GenerationEvent, GenerationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;

/// Appends generation outcomes to a JSONL transcript.
///
/// Each line is an object with `timestamp` (RFC 3339, UTC, millisecond
/// precision) and `type` (`generation_completed` / `generation_failed`)
/// followed by the event's own fields. A payload that is not an object is
/// kept under `data`.
pub struct JsonlGenerationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
    write_failed: AtomicBool,
}

impl JsonlGenerationLogger {
    /// Open the transcript at `path`, creating it and its directory if needed.
    ///
    /// Returns `None` (after a warning) when the transcript cannot be opened;
    /// the server then runs without one.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        match open_transcript(path) {
            Ok(file) => Some(Self {
                writer: Mutex::new(BufWriter::new(file)),
                path: path.to_path_buf(),
                write_failed: AtomicBool::new(false),
            }),
            Err(e) => {
                warn!(
                    "Generation transcript disabled, cannot open {}: {}",
                    path.display(),
                    e
                );
                None
            }
        }
    }

    /// Location of the transcript file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("transcript writer poisoned"))?;
        writeln!(writer, "{}", line)?;
        writer.flush()
    }
}

fn open_transcript(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Flatten an event into one transcript record.
fn transcript_record(event: GenerationEvent) -> Value {
    let mut record = Map::new();
    record.insert(
        "timestamp".to_string(),
        Value::String(chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
    );
    record.insert("type".to_string(), Value::String(event.event_type.to_string()));

    match event.payload {
        Value::Object(fields) => {
            for (key, value) in fields {
                record.entry(key).or_insert(value);
            }
        }
        other => {
            record.insert("data".to_string(), other);
        }
    }

    Value::Object(record)
}

impl GenerationLogger for JsonlGenerationLogger {
    fn log(&self, event: GenerationEvent) {
        let record = transcript_record(event);
        let result = serde_json::to_string(&record)
            .map_err(io::Error::from)
            .and_then(|line| self.append(&line));

        // Only the first lost record is reported.
        if let Err(e) = result
            && !self.write_failed.swap(true, Ordering::Relaxed)
        {
            warn!(
                "Could not append to generation transcript {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

impl Drop for JsonlGenerationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read_records(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_records_completed_and_failed_calls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("generation.jsonl");
        let logger = JsonlGenerationLogger::new(&path).unwrap();

        logger.log(GenerationEvent::new(
            "generation_completed",
            json!({
                "template": "title_suggestion",
                "model": "meta-llama/Meta-Llama-3-8B-Instruct",
                "prompt": "Create titles",
                "completion": "1. A",
                "attempts": 1,
            }),
        ));
        logger.log(GenerationEvent::new(
            "generation_failed",
            json!({"template": "blog_content", "error": "Timeout", "attempts": 2}),
        ));
        drop(logger);

        let records = read_records(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "generation_completed");
        assert_eq!(records[0]["completion"], "1. A");
        assert_eq!(records[0]["model"], "meta-llama/Meta-Llama-3-8B-Instruct");
        assert!(records[0]["timestamp"].as_str().unwrap().ends_with('Z'));
        assert_eq!(records[1]["type"], "generation_failed");
        assert_eq!(records[1]["error"], "Timeout");
        assert_eq!(records[1]["attempts"], 2);
    }

    #[test]
    fn test_transcript_spans_restarts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generation.jsonl");

        for run in 0..2 {
            let logger = JsonlGenerationLogger::new(&path).unwrap();
            logger.log(GenerationEvent::new("generation_completed", json!({"run": run})));
        }

        let records = read_records(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["run"], 0);
        assert_eq!(records[1]["run"], 1);
    }

    #[test]
    fn test_payload_cannot_override_type() {
        let record = transcript_record(GenerationEvent::new(
            "generation_failed",
            json!({"type": "spoofed", "error": "boom"}),
        ));
        assert_eq!(record["type"], "generation_failed");
        assert_eq!(record["error"], "boom");
    }

    #[test]
    fn test_non_object_payload_kept_under_data() {
        let record = transcript_record(GenerationEvent::new("generation_failed", json!("boom")));
        assert_eq!(record["data"], "boom");
    }

    #[test]
    fn test_unopenable_path_disables_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();

        assert!(JsonlGenerationLogger::new(blocker.join("generation.jsonl")).is_none());
    }
}
