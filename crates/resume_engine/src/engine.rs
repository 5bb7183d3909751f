use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_error, engine_info};
use resume_core::{RequestId, StagedFile};

use crate::client::{AnalyzeSettings, Analyzer, ReqwestAnalyzer};
use crate::{AnalyzeError, EngineEvent, FailureKind};

enum EngineCommand {
    Analyze {
        request_id: RequestId,
        file: StagedFile,
    },
}

/// Runs analysis requests on a background tokio runtime and reports back over a channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: AnalyzeSettings) -> Self {
        Self::with_analyzer(Arc::new(ReqwestAnalyzer::new(settings)))
    }

    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    engine_error!("Failed to start engine runtime: {}", err);
                    reject_all(cmd_rx, event_tx, &err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let analyzer = analyzer.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(analyzer.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn analyze(&self, request_id: RequestId, file: StagedFile) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::Analyze { request_id, file });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    analyzer: &dyn Analyzer,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Analyze { request_id, file } => {
            let result = analyzer.analyze(&file).await;
            match &result {
                Ok(_) => engine_info!("Request {} completed", request_id),
                Err(err) => engine_info!("Request {} failed: {}", request_id, err),
            }
            let _ = event_tx.send(EngineEvent::AnalysisCompleted { request_id, result });
        }
    }
}

fn reject_all(
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    reason: &str,
) {
    while let Ok(EngineCommand::Analyze { request_id, .. }) = cmd_rx.recv() {
        let _ = event_tx.send(EngineEvent::AnalysisCompleted {
            request_id,
            result: Err(AnalyzeError::new(
                FailureKind::EngineUnavailable,
                reason.to_string(),
            )),
        });
    }
}
