use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use engine_logging::{engine_debug, engine_info, engine_warn};
use resume_core::{AnimationId, AppViewModel, Effect, Msg};
use resume_engine::{AnalyzeSettings, EngineEvent, EngineHandle};

use super::app::Input;
use super::ui::layout::page_layout;
use super::viewport::VirtualViewport;

/// Executes effects from the update function. Follow-up messages that the
/// browser would deliver synchronously are returned; timed and network
/// results arrive later on the input channel.
pub struct EffectRunner {
    engine: EngineHandle,
    frames: mpsc::Sender<AnimationId>,
    viewport: VirtualViewport,
    last_alert: Option<String>,
}

impl EffectRunner {
    pub fn new(
        settings: AnalyzeSettings,
        frame_interval: Duration,
        input_tx: mpsc::Sender<Input>,
    ) -> Self {
        Self {
            engine: EngineHandle::new(settings),
            frames: spawn_frame_clock(input_tx, frame_interval),
            viewport: VirtualViewport::new(),
            last_alert: None,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>, view: &AppViewModel) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::OpenFilePicker => {
                    println!("Choose a resume with `select <path>` or `drop <path>`.");
                }
                Effect::ResetFileInput => {
                    engine_debug!("File input cleared");
                }
                Effect::Alert { message } => {
                    eprintln!("[!] {message}");
                    self.last_alert = Some(message);
                }
                Effect::SubmitAnalysis { request_id, file } => {
                    engine_info!(
                        "Submitting request {} for {}",
                        request_id,
                        file.path.display()
                    );
                    self.engine.analyze(request_id, file);
                }
                Effect::ScheduleFrame { animation_id } => {
                    if self.frames.send(animation_id).is_err() {
                        engine_warn!("Frame clock stopped; animation {} stalls", animation_id);
                    }
                }
                Effect::ScrollTo { target } => {
                    engine_debug!("Scrolling to #{}", target);
                    follow_ups.extend(self.viewport.scroll_to(&target, &page_layout(view)));
                }
                Effect::ObserveSections {
                    generation,
                    sections,
                } => {
                    engine_debug!(
                        "Observing {} sections (generation {})",
                        sections.len(),
                        generation
                    );
                    follow_ups.extend(self.viewport.observe(
                        generation,
                        sections,
                        &page_layout(view),
                    ));
                }
                Effect::OpenExternal { url } => {
                    engine_info!("Opening {}", url);
                    println!("Open in your browser: {url}");
                }
            }
        }
        follow_ups
    }

    pub fn scroll_by(&mut self, delta: f64, view: &AppViewModel) -> Option<Msg> {
        self.viewport.scroll_by(delta, &page_layout(view))
    }

    pub fn scroll_top(&self) -> f64 {
        self.viewport.scroll_top()
    }

    /// Completed analyses, mapped to update messages.
    pub fn poll_engine(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::AnalysisCompleted { request_id, result } => msgs.push(match result {
                    Ok(result) => Msg::AnalysisSucceeded { request_id, result },
                    Err(err) => {
                        engine_warn!("Request {} failed ({})", request_id, err.kind);
                        Msg::AnalysisFailed {
                            request_id,
                            message: err.message,
                        }
                    }
                }),
            }
        }
        msgs
    }

    pub fn take_last_alert(&mut self) -> Option<String> {
        self.last_alert.take()
    }
}

/// One frame per request, `interval` after it was asked for, stamped with
/// milliseconds since start.
fn spawn_frame_clock(
    input_tx: mpsc::Sender<Input>,
    interval: Duration,
) -> mpsc::Sender<AnimationId> {
    let (tx, rx) = mpsc::channel::<AnimationId>();
    let started = Instant::now();
    thread::spawn(move || {
        while let Ok(animation_id) = rx.recv() {
            thread::sleep(interval);
            let now_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            let frame = Msg::AnimationFrame {
                animation_id,
                now_ms,
            };
            if input_tx.send(Input::Msg(frame)).is_err() {
                break;
            }
        }
    });
    tx
}
