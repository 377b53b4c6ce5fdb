use crate::{Card, Note};

pub const PILLARS: &[Card] = &[
    Card {
        title: "Harmonização Legal",
        description: "Adequação de pautas, protocolos e procedimentos.",
    },
    Card {
        title: "Digitalização",
        description: "Plataformas para certificados, licenças e reporte de barreiras.",
    },
    Card {
        title: "Competitividade",
        description: "Apoio a PME, exportadores e cadeia de valor regional.",
    },
    Card {
        title: "Transparência",
        description: "Calendário de liberalização e monitorização pública.",
    },
];

pub const STATUS_NOTES: &[Note] = &[
    Note {
        label: "AfCFTA",
        text: "Angola é Estado Parte (depósito de ratificação em 2020).",
    },
    Note {
        label: "SADC FTA",
        text: "Angola em fase final de adesão, tornando-se o 14.º membro participante.",
    },
    Note {
        label: "Âmbito",
        text: "Redução gradativa de tarifas (até 90%) e remoção de barreiras não-tarifárias.",
    },
];

pub const CHANNELS: &[&str] = &[
    "Secretariado SADC • Portal TIFI",
    "União Africana • AfCFTA Secretariat",
    "MinFin, MEP, MIREX, MINDCOM (Angola)",
];
