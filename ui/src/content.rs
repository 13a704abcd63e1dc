//! Static catalogue shown on the landing page (pt-BR copy).

use crate::metrics::Metric;

pub const METRICS: &[Metric] = &[
    Metric::new("Implantações", 40, ""),
    Metric::new("NPS médio", 92, "%"),
    Metric::new("Integrações/API", 18, ""),
    Metric::new("SLA cumprido", 99, "%"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Wrench,
    Shield,
    Cpu,
    Headset,
}

impl ServiceIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Wrench => "🔧",
            Self::Shield => "🛡️",
            Self::Cpu => "⚙️",
            Self::Headset => "🎧",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub icon: ServiceIcon,
    pub title: &'static str,
    pub bullets: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: ServiceIcon::Wrench,
        title: "Suporte & Implementação",
        bullets: &[
            "Onboarding de sistemas SaaS",
            "Telefonia SIP/VoIP",
            "Treinamentos e documentação",
        ],
    },
    Service {
        icon: ServiceIcon::Shield,
        title: "Infra & Segurança",
        bullets: &["Hardening básico", "Backups e acessos", "Monitoramento e incidentes"],
    },
    Service {
        icon: ServiceIcon::Cpu,
        title: "Automação & APIs",
        bullets: &["REST (GET/POST)", "WhatsApp API (Meta)", "Scripts e rotinas"],
    },
    Service {
        icon: ServiceIcon::Headset,
        title: "Customer Success",
        bullets: &["Jornadas & NPS", "Playbooks de adoção", "Redução de churn"],
    },
];

pub const SKILLS: &[&str] = &[
    "SIP/VoIP",
    "APIs REST",
    "Linux (shell)",
    "Windows Server",
    "Redes (básico)",
    "MySQL/SQL",
    "HTML/CSS/JS",
    "Git/GitHub",
];

pub const HERO_HIGHLIGHTS: &[&str] = &[
    "Implantações ponta a ponta",
    "Playbooks e métricas de CS",
    "Automação com APIs (Meta/WhatsApp)",
    "Monitoramento e documentação",
];

/// Options of the service selector feeding WhatsApp and scheduling prefill.
pub const SERVICE_OPTIONS: &[&str] = &[
    "Onboarding SaaS",
    "Telefonia SIP/VoIP",
    "Automação/API WhatsApp",
    "Suporte & Treinamento",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub featured: bool,
    pub items: &'static [&'static str],
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "R$ 490",
        featured: false,
        items: &["Setup básico", "2h suporte", "WhatsApp assíncrono"],
    },
    Plan {
        name: "Pro (recomendado)",
        price: "R$ 990",
        featured: true,
        items: &["Onboarding completo", "SIP/VoIP + APIs", "6h suporte + SLA"],
    },
    Plan {
        name: "Enterprise",
        price: "Sob consulta",
        featured: false,
        items: &["Implantação avançada", "Treinamento equipe", "SLA dedicado"],
    },
];

pub const ABOUT_HIGHLIGHTS: &[&str] = &[
    "ADS (La Salle, 2024)",
    "Implementações ponta a ponta",
    "Documentação clara",
    "Comunicação e proatividade",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Quanto tempo leva um onboarding padrão?",
        answer: "Geralmente 1–2 semanas, com sessões assíncronas e checkpoint ao final.",
    },
    FaqEntry {
        question: "Atende remoto e presencial?",
        answer: "Remoto em todo o Brasil; presencial mediante agenda e custo de deslocamento.",
    },
    FaqEntry {
        question: "Emite nota fiscal?",
        answer: "Sim. O orçamento já segue com detalhes e condições.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn metric_labels_are_unique() {
        let labels: HashSet<_> = METRICS.iter().map(|m| m.label).collect();
        assert_eq!(labels.len(), METRICS.len());
    }

    #[test]
    fn exactly_one_featured_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.featured).count(), 1);
    }

    #[test]
    fn default_service_is_selectable() {
        assert!(SERVICE_OPTIONS.contains(&crate::contact::DEFAULT_SERVICE));
    }
}
