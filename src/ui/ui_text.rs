use std::sync::LazyLock;

// Glyphs covered by egui's bundled emoji fonts.
pub const ICON_FOLDER: &str = "📂";
pub const ICON_CHART: &str = "📊";
pub const ICON_SAVE: &str = "💾";
pub const ICON_WARNING: &str = "⚠";
pub const ICON_COG: &str = "⚙"; // "working"

pub struct UiText {
    pub app_title: String,
    pub subtitle: String,

    // --- Form ---
    pub label_input: String,
    pub label_output: String,
    pub hint_input: String,
    pub hint_output: String,
    pub btn_load: String,
    pub btn_analyze: String,
    pub btn_export: String,
    pub btn_browse: String,
    pub btn_save_as: String,
    pub dialog_open_title: String,
    pub dialog_save_title: String,
    pub dialog_filter: String,

    // --- Status ---
    pub status_ready: String,
    pub status_no_data: String,
    pub status_loaded: String,
    pub status_working: String,

    // --- Results ---
    pub results_heading: String,
    pub log_heading: String,
    pub headline_prefix: String,
    pub col_company: String,
    pub col_frequency: String,
    pub col_probability: String,
    pub col_avg_hours: String,
    pub col_recommended: String,
    pub col_predicted: String,
    pub col_saving: String,
    pub regression_prefix: String,

    // --- Log messages ---
    pub msg_loaded: String,
    pub msg_analyzed: String,
    pub msg_exported: String,
    pub msg_empty_input: String,
    pub msg_empty_output: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Análise de Movimentação do Arquivo".to_string(),
    subtitle: "Frequência por empresa, recomendação de posições e previsão de tempo de atendimento"
        .to_string(),

    label_input: format!("{} Planilha de entrada", ICON_FOLDER),
    label_output: format!("{} Relatório de saída", ICON_SAVE),
    hint_input: "caminho/para/movimentos.xlsx".to_string(),
    hint_output: "caminho/para/movimentos_analise.xlsx".to_string(),
    btn_load: "Carregar dados".to_string(),
    btn_analyze: format!("{} Analisar", ICON_CHART),
    btn_export: "Exportar relatório".to_string(),
    btn_browse: format!("{} Procurar...", ICON_FOLDER),
    btn_save_as: format!("{} Salvar como...", ICON_SAVE),
    dialog_open_title: "Selecionar planilha de movimentação".to_string(),
    dialog_save_title: "Salvar relatório de análise".to_string(),
    dialog_filter: "Planilhas Excel".to_string(),

    status_ready: "Pronto".to_string(),
    status_no_data: "Nenhuma planilha carregada".to_string(),
    status_loaded: "Dados carregados".to_string(),
    status_working: format!("{} Processando...", ICON_COG),

    results_heading: "Resultados por empresa".to_string(),
    log_heading: "Registro".to_string(),
    headline_prefix: "Empresa mais frequente:".to_string(),
    col_company: "Empresa".to_string(),
    col_frequency: "Frequência".to_string(),
    col_probability: "Probabilidade".to_string(),
    col_avg_hours: "Tempo médio".to_string(),
    col_recommended: "Posição recomendada".to_string(),
    col_predicted: "Tempo previsto".to_string(),
    col_saving: "Economia".to_string(),
    regression_prefix: "Regressão:".to_string(),

    msg_loaded: "Planilha carregada".to_string(),
    msg_analyzed: "Análise concluída".to_string(),
    msg_exported: "Relatório exportado para".to_string(),
    msg_empty_input: format!("{} Informe o caminho da planilha de entrada", ICON_WARNING),
    msg_empty_output: format!("{} Informe o caminho do relatório de saída", ICON_WARNING),
});
