use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use resume_core::{AnalysisResult, StagedFile};
use resume_engine::{AnalyzeError, Analyzer, EngineEvent, EngineHandle, FailureKind};

/// Answers from a fixed script and records which files it was asked about.
struct ScriptedAnalyzer {
    seen: Arc<Mutex<Vec<String>>>,
}

#[async_trait::async_trait]
impl Analyzer for ScriptedAnalyzer {
    async fn analyze(&self, file: &StagedFile) -> Result<AnalysisResult, AnalyzeError> {
        self.seen.lock().unwrap().push(file.name.clone());
        if file.name.starts_with("bad") {
            Err(AnalyzeError {
                kind: FailureKind::HttpStatus(500),
                message: "corrupt file".to_string(),
            })
        } else {
            Ok(AnalysisResult {
                detected_skills: vec!["Rust".to_string()],
                ..AnalysisResult::default()
            })
        }
    }
}

fn wait_for_event(engine: &EngineHandle) -> EngineEvent {
    engine
        .recv_timeout(Duration::from_secs(5))
        .expect("engine answered in time")
}

#[test]
fn engine_reports_each_request_by_id() {
    engine_logging::initialize_for_tests();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let engine = EngineHandle::with_analyzer(Arc::new(ScriptedAnalyzer { seen: seen.clone() }));

    engine.analyze(1, StagedFile::from_path("good.pdf").unwrap());
    let EngineEvent::AnalysisCompleted { request_id, result } = wait_for_event(&engine);
    assert_eq!(request_id, 1);
    assert_eq!(result.unwrap().detected_skills, vec!["Rust".to_string()]);

    engine.analyze(2, StagedFile::from_path("bad.txt").unwrap());
    let EngineEvent::AnalysisCompleted { request_id, result } = wait_for_event(&engine);
    assert_eq!(request_id, 2);
    assert_eq!(result.unwrap_err().message, "corrupt file");

    assert_eq!(
        *seen.lock().unwrap(),
        vec!["good.pdf".to_string(), "bad.txt".to_string()]
    );
    assert!(engine.try_recv().is_none());
}
