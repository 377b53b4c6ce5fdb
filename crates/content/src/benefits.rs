use crate::Card;

pub const BENEFITS: &[Card] = &[
    Card {
        title: "Acesso ampliado a mercados",
        description: "Preferências tarifárias na SADC e, de forma faseada, no continente sob a AfCFTA.",
    },
    Card {
        title: "Integração de cadeias de valor",
        description: "Mais competitividade para agroindústria, mineração transformadora e manufaturas.",
    },
    Card {
        title: "Facilitação do comércio",
        description: "Procedimentos aduaneiros modernizados, regras de origem claras e reporte de BNTs.",
    },
    Card {
        title: "Investimento & emprego",
        description: "Ambiente mais previsível para IDE e inovação, com impacto no emprego.",
    },
    Card {
        title: "Diversificação",
        description: "Menos dependência de petróleo, mais exportações de bens e serviços.",
    },
    Card {
        title: "PME no centro",
        description: "Capacitação, feiras, missões empresariais e financiamento comercial.",
    },
];
