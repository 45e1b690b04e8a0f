use {
    crate::{
        app::{LogLevel, LogLine},
        models::RecommendationComputed,
        ui::{UI_CONFIG, UI_TEXT},
        utils::format_hours,
    },
    eframe::egui::{Button, ProgressBar, RichText, ScrollArea, TextEdit, Ui},
    egui_extras::{Column, TableBuilder},
};

/// Button pressed on the form this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormAction {
    None,
    BrowseInput,
    BrowseOutput,
    Load,
    Analyze,
    Export,
}

/// Everything the form needs from the app for one frame.
pub(crate) struct FormView<'a> {
    pub(crate) input_path: &'a mut String,
    pub(crate) output_path: &'a mut String,
    pub(crate) can_analyze: bool,
    pub(crate) can_export: bool,
    pub(crate) busy: bool,
    pub(crate) progress: f32,
    pub(crate) status: &'a str,
}

pub(crate) fn render_form(ui: &mut Ui, view: FormView<'_>) -> FormAction {
    let mut action = FormAction::None;
    let label_width = UI_CONFIG.form_label_width;

    ui.heading(
        RichText::new(&UI_TEXT.app_title)
            .strong()
            .color(UI_CONFIG.colors.heading),
    );
    ui.label(
        RichText::new(&UI_TEXT.subtitle)
            .italics()
            .color(UI_CONFIG.colors.subdued),
    );
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.add_sized([label_width, 20.0], eframe::egui::Label::new(&UI_TEXT.label_input));
        if ui
            .add_enabled(!view.busy, Button::new(&UI_TEXT.btn_browse))
            .clicked()
        {
            action = FormAction::BrowseInput;
        }
        ui.add_enabled(
            !view.busy,
            TextEdit::singleline(view.input_path)
                .hint_text(&UI_TEXT.hint_input)
                .desired_width(f32::INFINITY),
        );
    });
    ui.horizontal(|ui| {
        ui.add_sized([label_width, 20.0], eframe::egui::Label::new(&UI_TEXT.label_output));
        if ui
            .add_enabled(!view.busy, Button::new(&UI_TEXT.btn_save_as))
            .clicked()
        {
            action = FormAction::BrowseOutput;
        }
        ui.add_enabled(
            !view.busy,
            TextEdit::singleline(view.output_path)
                .hint_text(&UI_TEXT.hint_output)
                .desired_width(f32::INFINITY),
        );
    });
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        if ui
            .add_enabled(!view.busy, Button::new(&UI_TEXT.btn_load))
            .clicked()
        {
            action = FormAction::Load;
        }
        if ui
            .add_enabled(!view.busy && view.can_analyze, Button::new(&UI_TEXT.btn_analyze))
            .clicked()
        {
            action = FormAction::Analyze;
        }
        if ui
            .add_enabled(!view.busy && view.can_export, Button::new(&UI_TEXT.btn_export))
            .clicked()
        {
            action = FormAction::Export;
        }
        if view.busy {
            ui.spinner();
        }
    });
    ui.add_space(6.0);

    ui.add(
        ProgressBar::new(view.progress)
            .show_percentage()
            .animate(view.busy)
            .text(view.status),
    );

    action
}

pub(crate) fn render_log(ui: &mut Ui, lines: &[LogLine]) {
    ui.label(
        RichText::new(&UI_TEXT.log_heading)
            .strong()
            .color(UI_CONFIG.colors.heading),
    );
    ScrollArea::vertical()
        .id_salt("activity_log")
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .max_height(UI_CONFIG.log_height)
        .show(ui, |ui| {
            for line in lines {
                let color = match line.level {
                    LogLevel::Info => UI_CONFIG.colors.label,
                    LogLevel::Success => UI_CONFIG.colors.success,
                    LogLevel::Error => UI_CONFIG.colors.error,
                };
                ui.label(RichText::new(&line.text).monospace().color(color));
            }
        });
}

pub(crate) fn render_results(ui: &mut Ui, analysis: &RecommendationComputed) {
    if let Some(top) = analysis.top_company() {
        ui.label(
            RichText::new(format!(
                "{} {} ({} movimentações, {:.1}%) → estante {}, prateleira {}, economia {}",
                UI_TEXT.headline_prefix,
                top.company,
                top.frequency,
                top.probability * 100.0,
                top.recommended_rack,
                top.recommended_shelf,
                format_hours(top.estimated_time_saving),
            ))
            .strong()
            .color(UI_CONFIG.colors.success),
        );
    }
    let model = &analysis.regression;
    ui.label(
        RichText::new(format!(
            "{} R² = {:.4}, coef. frequência = {:.4}, coef. dificuldade = {:.4}, intercepto = {:.4}",
            UI_TEXT.regression_prefix,
            model.r_squared,
            model.coef_frequency(),
            model.coef_difficulty(),
            model.intercept
        ))
        .color(UI_CONFIG.colors.subdued),
    );
    ui.add_space(6.0);
    ui.label(
        RichText::new(&UI_TEXT.results_heading)
            .strong()
            .color(UI_CONFIG.colors.heading),
    );

    let headers = [
        &UI_TEXT.col_company,
        &UI_TEXT.col_frequency,
        &UI_TEXT.col_probability,
        &UI_TEXT.col_avg_hours,
        &UI_TEXT.col_recommended,
        &UI_TEXT.col_predicted,
        &UI_TEXT.col_saving,
    ];

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(160.0))
        .columns(Column::auto().at_least(80.0), headers.len() - 2)
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in headers {
                header.col(|ui| {
                    ui.strong(title.as_str());
                });
            }
        })
        .body(|mut body| {
            for c in &analysis.companies {
                body.row(18.0, |mut row| {
                    let cells = [
                        c.company.clone(),
                        c.frequency.to_string(),
                        format!("{:.1}%", c.probability * 100.0),
                        format_hours(c.avg_service_hours),
                        c.recommended_slot().short_label(),
                        format_hours(c.predicted_service_hours),
                        format_hours(c.estimated_time_saving),
                    ];
                    for text in cells {
                        row.col(|ui| {
                            ui.label(text);
                        });
                    }
                });
            }
        });
}
