mod file_dialogs;
mod ui_config;
mod ui_panels;
mod ui_text;

pub(crate) use file_dialogs::{pick_input_workbook, pick_report_path};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_panels::{FormAction, FormView, render_form, render_log, render_results};
