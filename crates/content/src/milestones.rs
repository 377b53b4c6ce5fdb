use crate::Milestone;

/// Chronological; the last entry is the current stage.
pub const MILESTONES: &[Milestone] = &[
    Milestone {
        date: "2018",
        title: "Assinatura do Acordo AfCFTA (Kigali)",
        detail: "Angola entre os signatários.",
    },
    Milestone {
        date: "2020",
        title: "Ratificação AfCFTA por Angola",
        detail: "Depósito dos instrumentos e status de Estado Parte.",
    },
    Milestone {
        date: "2021–2024",
        title: "Arranque operacional AfCFTA",
        detail: "Faseada implementação, regras de origem e GTI.",
    },
    Milestone {
        date: "2024–2025",
        title: "Angola finaliza adesão à SADC FTA",
        detail: "Conclusão técnica no âmbito da SADC, rumo à formalização.",
    },
];
