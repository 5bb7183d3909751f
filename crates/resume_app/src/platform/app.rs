use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::bail;
use engine_logging::{engine_debug, engine_info, engine_trace, engine_warn};
use resume_core::{
    render_page, update, AppState, ClickTarget, Element, ModalKind, Msg, Node, SelectionSource,
};

use super::commands::{parse_command, Command};
use super::effects::EffectRunner;
use super::persistence::export_dashboard;
use super::ui;
use crate::config::AppConfig;

/// Everything the main loop reacts to.
pub enum Input {
    Command(Command),
    Msg(Msg),
}

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs the dashboard. With a file and no `interactive`, analyzes it, waits
/// for the score reveal, exports the dashboard and exits.
pub fn run_app(config: AppConfig, file: Option<PathBuf>, interactive: bool) -> anyhow::Result<()> {
    let (input_tx, input_rx) = mpsc::channel::<Input>();
    let runner = EffectRunner::new(
        config.analyze_settings(),
        config.frame_interval(),
        input_tx.clone(),
    );
    let one_shot = file.is_some() && !interactive;
    let mut app = App {
        state: AppState::new(),
        runner,
        output_dir: config.output_dir.clone(),
        echo: !one_shot,
    };

    if let Some(path) = file {
        app.dispatch(Msg::FileChosen {
            path,
            source: SelectionSource::Input,
        });
        app.dispatch(Msg::AnalyzeClicked);
    }

    if one_shot {
        return app.run_to_completion(&input_rx);
    }

    spawn_stdin_reader(input_tx);
    app.print_view();
    println!("Type `help` for commands.");
    app.prompt();
    app.run_interactive(&input_rx)
}

struct App {
    state: AppState,
    runner: EffectRunner,
    output_dir: PathBuf,
    echo: bool,
}

impl App {
    /// Applies `msg` and any follow-ups the effects produce synchronously.
    fn dispatch(&mut self, msg: Msg) {
        let is_frame = matches!(msg, Msg::AnimationFrame { .. });
        let mut pending = VecDeque::from([msg]);
        let mut dirty = false;
        while let Some(msg) = pending.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            let view = self.state.view();
            pending.extend(self.runner.run(effects, &view));
            dirty |= self.state.consume_dirty();
        }

        if is_frame {
            engine_trace!("Frame at {} ms", engine_logging::frame_time_ms());
        }
        // Mid-animation frames are not echoed; the final value is.
        let animating = is_frame && self.state.view().score.animating;
        if dirty && self.echo && !animating {
            self.print_view();
        }
    }

    fn pump_engine(&mut self) {
        for msg in self.runner.poll_engine() {
            self.dispatch(msg);
        }
    }

    fn run_to_completion(mut self, input_rx: &mpsc::Receiver<Input>) -> anyhow::Result<()> {
        if self.state.staged_file().is_none() {
            bail!(self
                .runner
                .take_last_alert()
                .unwrap_or_else(|| "no resume staged".to_string()));
        }
        loop {
            self.pump_engine();
            if !self.state.is_loading() {
                if !self.state.results_visible() {
                    bail!(self
                        .runner
                        .take_last_alert()
                        .unwrap_or_else(|| "analysis did not complete".to_string()));
                }
                if !self.state.view().score.animating {
                    break;
                }
            }
            match input_rx.recv_timeout(POLL_INTERVAL) {
                Ok(Input::Msg(msg)) => self.dispatch(msg),
                Ok(Input::Command(_)) | Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => bail!("input channel closed"),
            }
        }

        self.print_view();
        let path = export_dashboard(&self.state, &self.output_dir)?;
        println!("Saved dashboard to {}", path.display());
        Ok(())
    }

    fn run_interactive(mut self, input_rx: &mpsc::Receiver<Input>) -> anyhow::Result<()> {
        loop {
            self.pump_engine();
            match input_rx.recv_timeout(POLL_INTERVAL) {
                Ok(Input::Msg(msg)) => self.dispatch(msg),
                Ok(Input::Command(command)) => {
                    if !self.handle_command(command) {
                        break;
                    }
                    self.prompt();
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        engine_info!("Leaving interactive session");
        Ok(())
    }

    /// Returns false when the session should end.
    fn handle_command(&mut self, command: Command) -> bool {
        engine_debug!("Command: {:?}", command);
        match command {
            Command::Dispatch(msg) => self.dispatch(msg),
            Command::Role(n) => {
                let click = self.nth_click(n, |el| el.has_class("match-card"), |el| {
                    el.has_class("score")
                });
                self.click(click, "role card", n);
            }
            Command::Learn(n) => {
                let click = self.nth_click(n, |el| el.has_class("missing"), |_| true);
                self.click(click, "missing skill", n);
            }
            Command::Backdrop => {
                let view = self.state.view();
                let target = if view.learning_modal.is_some() {
                    ClickTarget::Backdrop(ModalKind::Learning)
                } else if view.visualizer_modal.is_some() {
                    ClickTarget::Backdrop(ModalKind::Visualizer)
                } else {
                    ClickTarget::Elsewhere
                };
                self.dispatch(Msg::WindowClicked(target));
            }
            Command::NavIndex(n) => match self.state.view().nav_links.get(n - 1) {
                Some(link) => self.dispatch(Msg::NavLinkClicked {
                    href: link.href.clone(),
                }),
                None => eprintln!("No navigation entry {n}"),
            },
            Command::ScrollBy(delta) => self.scroll_by(delta),
            Command::ScrollTop => self.scroll_by(-self.runner.scroll_top()),
            Command::Export => match export_dashboard(&self.state, &self.output_dir) {
                Ok(path) => println!("Saved dashboard to {}", path.display()),
                Err(err) => {
                    engine_warn!("Export failed: {:#}", err);
                    eprintln!("Export failed: {err:#}");
                }
            },
            Command::Show => self.print_view(),
            Command::Help => println!("{}", ui::constants::HELP),
            Command::Quit => return false,
        }
        true
    }

    /// Click handler of the n-th (1-based) element matching `container`, taken
    /// from its first descendant matching `target` that has one.
    fn nth_click(
        &self,
        n: usize,
        container: impl Fn(&Element) -> bool,
        target: impl Fn(&Element) -> bool,
    ) -> Option<Msg> {
        let page = render_page(&self.state.view());
        let containers = page.find_all(&container);
        let chosen = Node::from((*containers.get(n.checked_sub(1)?)?).clone());
        let handlers = chosen.find_all(&|el| target(el) && el.on_click.is_some());
        handlers.first().and_then(|el| el.on_click.clone())
    }

    fn click(&mut self, msg: Option<Msg>, what: &str, n: usize) {
        match msg {
            Some(msg) => self.dispatch(msg),
            None => eprintln!("No {what} {n} on the page"),
        }
    }

    fn scroll_by(&mut self, delta: f64) {
        let view = self.state.view();
        if let Some(msg) = self.runner.scroll_by(delta, &view) {
            self.dispatch(msg);
        }
        engine_debug!("Scrolled to {}", self.runner.scroll_top());
    }

    fn print_view(&self) {
        println!("\n{}", ui::render::render(&self.state.view()));
    }

    fn prompt(&self) {
        print!("{}", ui::constants::PROMPT);
        let _ = io::stdout().flush();
    }
}

fn spawn_stdin_reader(input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            match parse_command(&line) {
                Ok(command) => {
                    if input_tx.send(Input::Command(command)).is_err() {
                        return;
                    }
                }
                Err(message) => {
                    eprintln!("{message}");
                    print!("{}", ui::constants::PROMPT);
                    let _ = io::stdout().flush();
                }
            }
        }
        let _ = input_tx.send(Input::Command(Command::Quit));
    });
}
