use crate::Resource;

pub const RESOURCES: &[Resource] = &[
    Resource {
        name: "SADC • Free Trade Area (TIFI)",
        href: "https://tis.sadc.int/french/regional-integration/tifi/sadc-free-trade-area/fta-brochure/",
        description: "Informações institucionais e brochuras sobre a ZCL da SADC.",
    },
    Resource {
        name: "SADC • Comunicado sobre Angola",
        href: "https://www.sadc.int/latest-news/angola-finalises-preparations-join-sadc-free-trade-area-strengthening-regional-economic",
        description: "Angola finaliza preparação para adesão como 14.º participante da ZCL.",
    },
    Resource {
        name: "União Africana • AfCFTA",
        href: "https://au.int/",
        description: "Acordo, protocolos e implementação continental (UA/Secretariado AfCFTA).",
    },
    Resource {
        name: "UNECA • Nota sobre ratificação de Angola",
        href: "https://www.uneca.org/storys/afcfta-expects-wave-ratifications-following-angola",
        description: "Angola como 30.º Estado Parte ao depositar os instrumentos (2020).",
    },
    Resource {
        name: "TRALAC • Estado das ratificações",
        href: "https://www.tralac.org/resources/infographic/13795-status-of-afcfta-ratification.html",
        description: "Panorama actualizado de assinaturas e ratificações do AfCFTA.",
    },
    Resource {
        name: "Portal do Governo de Angola",
        href: "https://governo.gov.ao/",
        description: "Notícias e documentos governamentais relevantes.",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn resources_are_unique_external_links() {
        let hrefs = RESOURCES.iter().map(|r| r.href).collect::<HashSet<_>>();

        assert_eq!(hrefs.len(), RESOURCES.len());
        assert!(hrefs.iter().all(|href| href.starts_with("https://")));
    }
}
