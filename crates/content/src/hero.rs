use crate::Stat;

pub const HERO_TAGS: &[&str] = &["SADC • AfCFTA • Angola", "Comércio & Integração"];

pub const HERO_STATS: &[Stat] = &[
    Stat {
        label: "Estados SADC na ZCL",
        value: "13→14",
    },
    Stat {
        label: "AfCFTA: Estado de Parte",
        value: "Desde 2020",
    },
    Stat {
        label: "Redução Tarifária",
        value: "até 90%",
    },
    Stat {
        label: "População Mercado",
        value: "1.3B+",
    },
];
