use {
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, ScrollArea, TopBottomPanel, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{
        mem,
        path::{Path, PathBuf},
        time::Duration,
    },
};

use crate::{
    Cli,
    app::{ActivityLog, AppState, IdleState, LogLevel, PhaseView, Session, WorkingState},
    config::{DF, default_report_path},
    engine::{AnalysisEngine, JobEvent, JobKind, JobOutcome, JobRequest},
    ui::{
        FormAction, FormView, UI_CONFIG, UI_TEXT, pick_input_workbook, pick_report_path,
        render_form, render_log, render_results,
    },
    utils::format_hours,
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) input_path: String, // persists across sessions.
    pub(crate) output_path: String,
    #[serde(skip)]
    pub(crate) engine: Option<AnalysisEngine>,
    #[serde(skip)]
    pub(crate) session: Session,
    #[serde(skip)]
    pub(crate) activity: ActivityLog,
    #[serde(skip)]
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            input_path: String::new(),
            output_path: String::new(),
            engine: None,
            session: Session::default(),
            activity: ActivityLog::default(),
            state: AppState::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        if let Some(input) = args.input {
            app.output_path.clear();
            app.set_input_path(&input);
        }

        app.engine = Some(AnalysisEngine::new());
        app.state = AppState::Idle(IdleState);
        app.activity.push(LogLevel::Info, UI_TEXT.status_ready.clone());
        app
    }

    pub(crate) fn tick_idle_state(&mut self, ctx: &Context) -> AppState {
        match self.render(ctx, None) {
            FormAction::None => AppState::Idle(IdleState),
            FormAction::BrowseInput => {
                if let Some(path) = pick_input_workbook(&self.input_path) {
                    self.set_input_path(&path);
                }
                AppState::Idle(IdleState)
            }
            FormAction::BrowseOutput => {
                if let Some(path) = pick_report_path(&self.output_path) {
                    self.set_output_path(&path);
                }
                AppState::Idle(IdleState)
            }
            action => self.dispatch(action),
        }
    }

    /// New input workbook. An empty output field gets the default report path next to it.
    pub(crate) fn set_input_path(&mut self, path: &Path) {
        if self.output_path.trim().is_empty() {
            self.output_path = default_report_path(path).display().to_string();
        }
        self.input_path = path.display().to_string();
        if DF.log_worker {
            log::info!("App: input workbook set to {}", self.input_path);
        }
    }

    pub(crate) fn set_output_path(&mut self, path: &Path) {
        self.output_path = path.display().to_string();
        if DF.log_worker {
            log::info!("App: report path set to {}", self.output_path);
        }
    }

    pub(crate) fn tick_working_state(&mut self, ctx: &Context, state: &mut WorkingState) -> AppState {
        let finished = self.engine.as_mut().map(|e| e.poll()).unwrap_or_default();
        let mut next = AppState::Working(state.clone());
        for event in finished {
            self.handle_finished(event);
            next = AppState::Idle(IdleState);
        }

        // Form stays visible but disabled while the worker runs.
        let _ = self.render(ctx, Some(state.job));
        if matches!(next, AppState::Working(_)) {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
        next
    }

    /// Turns a button press into a worker job.
    fn dispatch(&mut self, action: FormAction) -> AppState {
        let Some(req) = self.build_request(action) else {
            return AppState::Idle(IdleState);
        };
        let kind = req.kind();

        let accepted = self.engine.as_mut().is_some_and(|e| e.submit(req));
        if !accepted {
            return AppState::Idle(IdleState);
        }
        if DF.log_worker {
            log::info!("App: dispatched {} job", kind);
        }
        AppState::Working(WorkingState { job: kind })
    }

    fn build_request(&mut self, action: FormAction) -> Option<JobRequest> {
        match action {
            FormAction::None | FormAction::BrowseInput | FormAction::BrowseOutput => None,
            FormAction::Load => {
                let input = self.input_path.trim();
                if input.is_empty() {
                    self.activity
                        .push(LogLevel::Error, UI_TEXT.msg_empty_input.clone());
                    return None;
                }
                let path = PathBuf::from(input);
                self.set_input_path(&path);
                self.activity
                    .push(LogLevel::Info, format!("Carregando {}...", path.display()));
                Some(JobRequest::Load { path })
            }
            FormAction::Analyze => {
                let tables = self.session.tables()?.clone();
                self.activity.push(
                    LogLevel::Info,
                    format!("Analisando {} movimentações...", tables.events.len()),
                );
                Some(JobRequest::Analyze { tables })
            }
            FormAction::Export => {
                let analysis = self.session.analysis()?.clone();
                let output = self.output_path.trim();
                if output.is_empty() {
                    self.activity
                        .push(LogLevel::Error, UI_TEXT.msg_empty_output.clone());
                    return None;
                }
                let path = PathBuf::from(output);
                self.activity
                    .push(LogLevel::Info, format!("Exportando para {}...", path.display()));
                Some(JobRequest::Export { analysis, path })
            }
        }
    }

    fn handle_finished(&mut self, event: JobEvent) {
        let JobEvent::Finished {
            kind,
            duration_ms,
            outcome,
        } = event
        else {
            return;
        };

        match &outcome {
            JobOutcome::Loaded(tables) => self.activity.push(
                LogLevel::Success,
                format!(
                    "{}: {} empresas, {} movimentações, {} tipos ({} ms)",
                    UI_TEXT.msg_loaded,
                    tables.companies.len(),
                    tables.events.len(),
                    tables.movement_types.len(),
                    duration_ms
                ),
            ),
            JobOutcome::Analyzed(analysis) => {
                let headline = analysis.top_company().map_or(String::new(), |top| {
                    format!(
                        " | {} {} ({}), economia estimada {}",
                        UI_TEXT.headline_prefix,
                        top.company,
                        top.frequency,
                        format_hours(top.estimated_time_saving)
                    )
                });
                self.activity.push(
                    LogLevel::Success,
                    format!(
                        "{}: {} empresas, R² = {:.4}{}",
                        UI_TEXT.msg_analyzed,
                        analysis.companies.len(),
                        analysis.regression.r_squared,
                        headline
                    ),
                );
            }
            JobOutcome::Exported(path) => self.activity.push(
                LogLevel::Success,
                format!("{} {}", UI_TEXT.msg_exported, path.display()),
            ),
            JobOutcome::Failed(err) => {
                self.activity.push(LogLevel::Error, err.to_string());
                self.activity.push(LogLevel::Info, err.user_hint());
            }
        }

        if DF.log_worker {
            log::info!("App: {} job finished in {} ms", kind, duration_ms);
        }
        self.session = self.session.after(&outcome);
    }

    fn render(&mut self, ctx: &Context, working: Option<JobKind>) -> FormAction {
        let (busy, progress, status) = match &self.engine {
            Some(e) if e.is_busy() => {
                let status = match working {
                    Some(job) => format!("{} {}: {}", UI_TEXT.status_working, job, e.status()),
                    None => e.status().to_string(),
                };
                (true, e.progress(), status)
            }
            Some(e) => (false, e.progress(), self.idle_status(e.status())),
            None => (false, 0.0, self.idle_status("")),
        };

        let mut action = FormAction::None;
        TopBottomPanel::top("form_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                action = render_form(
                    ui,
                    FormView {
                        input_path: &mut self.input_path,
                        output_path: &mut self.output_path,
                        can_analyze: self.session.can_analyze(),
                        can_export: self.session.can_export(),
                        busy,
                        progress,
                        status: &status,
                    },
                );
            });

        TopBottomPanel::bottom("log_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .resizable(true)
            .show(ctx, |ui| render_log(ui, self.activity.lines()));

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| match self.session.analysis() {
                Some(analysis) => {
                    ScrollArea::horizontal().show(ui, |ui| render_results(ui, analysis));
                }
                None => {
                    let text = if self.session.can_analyze() {
                        &UI_TEXT.status_loaded
                    } else {
                        &UI_TEXT.status_no_data
                    };
                    ui.centered_and_justified(|ui| {
                        ui.label(text.as_str());
                    });
                }
            });

        action
    }

    fn idle_status(&self, last: &str) -> String {
        if last.is_empty() {
            UI_TEXT.status_ready.clone()
        } else {
            last.to_string()
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Idle(mut s) => s.tick(self, ctx),
            AppState::Working(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if DF.log_worker {
            log::info!(
                "SAVE [App]: input = {:?}, output = {:?}",
                self.input_path,
                self.output_path
            );
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picked_input_fills_empty_report_path() {
        let mut app = App::default();
        app.set_input_path(Path::new("dados/movimentos.xlsx"));
        assert_eq!(app.input_path, Path::new("dados/movimentos.xlsx").display().to_string());
        assert_eq!(
            app.output_path,
            Path::new("dados/movimentos_analise.xlsx").display().to_string()
        );
    }

    #[test]
    fn picked_input_keeps_chosen_report_path() {
        let mut app = App::default();
        app.set_output_path(Path::new("saida/relatorio.xlsx"));
        app.set_input_path(Path::new("dados/movimentos.xlsx"));
        assert_eq!(app.output_path, Path::new("saida/relatorio.xlsx").display().to_string());
    }

    #[test]
    fn browse_actions_never_become_jobs() {
        let mut app = App::default();
        app.input_path = "dados/movimentos.xlsx".to_string();
        assert!(app.build_request(FormAction::BrowseInput).is_none());
        assert!(app.build_request(FormAction::BrowseOutput).is_none());
        assert!(app.activity.lines().is_empty());
    }
}
