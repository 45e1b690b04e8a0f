//! Input workbook schema. Sheet and column names are matched exactly.

pub struct CompanySheet {
    pub name: &'static str,
    pub company_name: &'static str,
    pub external_id: &'static str,
}

pub struct MovementSheet {
    pub name: &'static str,
    pub company: &'static str,
    pub requested_at: &'static str,
    pub completed_at: &'static str,
    pub rack: &'static str,
    pub shelf: &'static str,
    pub movement_type: &'static str,
}

pub struct MovementTypeSheet {
    pub name: &'static str,
    pub type_name: &'static str,
}

pub struct WorkbookSchema {
    pub companies: CompanySheet,
    pub movements: MovementSheet,
    pub movement_types: MovementTypeSheet,
    /// Text timestamp layouts tried in order (after RFC 3339 / ISO 8601).
    pub datetime_formats: &'static [&'static str],
    /// Date-only layouts, read as midnight.
    pub date_formats: &'static [&'static str],
}

pub const WORKBOOK: WorkbookSchema = WorkbookSchema {
    companies: CompanySheet {
        name: "Empresas parceiras",
        company_name: "Nome da empresa",
        external_id: "Identificador",
    },
    movements: MovementSheet {
        name: "Movimentação",
        company: "Empresa",
        requested_at: "Data do requerimento",
        completed_at: "Data da conclusão do requerimento",
        rack: "Estante alterada",
        shelf: "Prateleira alterada",
        movement_type: "Tipo de movimentação",
    },
    movement_types: MovementTypeSheet {
        name: "Tipos de movimentações",
        type_name: "Tipos de movimentações",
    },
    datetime_formats: &[
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
        "%d/%m/%Y %H:%M:%S",
        "%d/%m/%Y %H:%M",
    ],
    date_formats: &["%Y-%m-%d", "%d/%m/%Y"],
};
