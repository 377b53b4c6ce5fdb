use crate::{Document, Statement};

pub const STATEMENTS: &[Statement] = &[
    Statement {
        speaker: "Secretariado da SADC",
        title: "Angola finaliza os preparativos para aderir à Zona de Comércio Livre da SADC",
        href: "https://www.sadc.int/latest-news/angola-finalises-preparations-join-sadc-free-trade-area-strengthening-regional-economic",
    },
    Statement {
        speaker: "Comissão Económica das Nações Unidas para África",
        title: "AfCFTA espera vaga de ratificações após o depósito de Angola",
        href: "https://www.uneca.org/storys/afcfta-expects-wave-ratifications-following-angola",
    },
];

pub const DOCUMENTS: &[Document] = &[Document {
    title: "Proposta do Programa de Adesão",
    description: "Enquadramento, eixos de intervenção e calendário indicativo do Programa.",
    href: "/static/docs/proposta-adesao.pdf",
    format: "PDF",
}];
