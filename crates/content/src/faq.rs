use crate::Faq;

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Quando Angola passa a beneficiar totalmente da ZCL da SADC?",
        answer: "Após a formalização da adesão e entrada em vigor do cronograma tarifário acordado; a implementação é faseada por sectores/produtos.",
    },
    Faq {
        question: "O que muda com a AfCFTA para as empresas?",
        answer: "Amplia mercados, reduz tarifas em até 90% ao longo do tempo e harmoniza regras de origem, com mecanismos para reportar barreiras não-tarifárias.",
    },
    Faq {
        question: "Há apoio para PME exportadoras?",
        answer: "Sim. O Programa prevê capacitação, informação sobre requisitos e facilitação de acesso a feiras e financiamento comercial.",
    },
];
