//! Output workbook labels

pub struct SheetNames {
    pub companies: &'static str,
    pub movement_types: &'static str,
    pub regression: &'static str,
    pub summary: &'static str,
}

pub struct CompanyColumns {
    pub company: &'static str,
    pub frequency: &'static str,
    pub avg_rack: &'static str,
    pub avg_shelf: &'static str,
    pub avg_service_hours: &'static str,
    pub avg_difficulty: &'static str,
    pub external_id: &'static str,
    pub probability: &'static str,
    pub normality_p_value: &'static str,
    pub recommended_rack: &'static str,
    pub recommended_shelf: &'static str,
    pub predicted_service_hours: &'static str,
    pub estimated_time_saving: &'static str,
}

pub struct MovementTypeColumns {
    pub movement_type: &'static str,
    pub frequency: &'static str,
    pub avg_service_hours: &'static str,
    pub cataloged: &'static str,
}

pub struct RegressionLabels {
    pub metric: &'static str,
    pub value: &'static str,
    pub r_squared: &'static str,
    pub coef_frequency: &'static str,
    pub coef_difficulty: &'static str,
    pub intercept: &'static str,
}

pub struct SummaryColumns {
    pub company_count: &'static str,
    pub top_company: &'static str,
    pub top_frequency: &'static str,
    pub total_saving: &'static str,
    pub top_movement_type: &'static str,
}

pub struct ReportConfig {
    pub sheets: SheetNames,
    pub companies: CompanyColumns,
    pub movement_types: MovementTypeColumns,
    pub regression: RegressionLabels,
    pub summary: SummaryColumns,
    pub not_available: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    /// Appended to the input file stem when no output path is given.
    pub default_output_suffix: &'static str,
}

pub const REPORT: ReportConfig = ReportConfig {
    sheets: SheetNames {
        companies: "Análise Empresas",
        movement_types: "Análise Tipos Movimentação",
        regression: "Regressão Linear",
        summary: "Resumo Executivo",
    },
    companies: CompanyColumns {
        company: "Empresa",
        frequency: "Frequência",
        avg_rack: "Estante média",
        avg_shelf: "Prateleira média",
        avg_service_hours: "Tempo médio atendimento (h)",
        avg_difficulty: "Dificuldade Posição Atual",
        external_id: "Identificador",
        probability: "Probabilidade",
        normality_p_value: "Distribuição Normal (p-value)",
        recommended_rack: "Estante recomendada",
        recommended_shelf: "Prateleira recomendada",
        predicted_service_hours: "Tempo previsto com recomendação (h)",
        estimated_time_saving: "Economia de tempo estimada (h)",
    },
    movement_types: MovementTypeColumns {
        movement_type: "Tipo de movimentação",
        frequency: "Frequência",
        avg_service_hours: "Tempo médio (h)",
        cataloged: "Catalogado",
    },
    regression: RegressionLabels {
        metric: "Métrica",
        value: "Valor",
        r_squared: "R²",
        coef_frequency: "Coeficiente Frequência",
        coef_difficulty: "Coeficiente Dificuldade",
        intercept: "Intercepto",
    },
    summary: SummaryColumns {
        company_count: "Total de Empresas Analisadas",
        top_company: "Empresa Mais Frequente",
        top_frequency: "Frequência da Empresa Mais Ativa",
        total_saving: "Economia Total de Tempo Estimada (h)",
        top_movement_type: "Tipos de Movimentação Mais Comuns",
    },
    not_available: "N/A",
    yes: "Sim",
    no: "Não",
    default_output_suffix: "_analise.xlsx",
};
