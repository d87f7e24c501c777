use crate::data::{Competency, RubricEntry};

#[derive(Debug, Clone, Copy)]
struct CompetencyDef {
    theme: &'static str,
    name: &'static str,
    description: &'static str,
}

#[derive(Debug, Clone, Copy)]
struct RubricDef {
    score: u8,
    label: &'static str,
    desc: &'static str,
}

const DEFAULT_COMPETENCIES: &[CompetencyDef] = &[
    CompetencyDef {
        theme: "Project Delivery",
        name: "End-to-End Ownership",
        description: "Delivers projects from brief to completion with quality and clarity.",
    },
    CompetencyDef {
        theme: "Project Delivery",
        name: "Time & Budget Management",
        description: "Scopes and tracks budgets, timelines, and hours accurately.",
    },
    CompetencyDef {
        theme: "Client Communication",
        name: "Confidence & Clarity",
        description: "Provides reliable, professional updates; builds trust.",
    },
    CompetencyDef {
        theme: "Team Collaboration",
        name: "Connector & Co-ordinator",
        description: "Coordinates internal teams and freelancers for smooth delivery.",
    },
    CompetencyDef {
        theme: "Quality Control",
        name: "Attention to Detail",
        description: "Oversees QA so outputs meet standards.",
    },
    CompetencyDef {
        theme: "Tool Usage",
        name: "Structured Delivery",
        description: "Uses PM tools and documentation to maintain rigour.",
    },
];

const DEFAULT_RUBRIC: &[RubricDef] = &[
    RubricDef {
        score: 1,
        label: "Needs development",
        desc: "Significant support required; outcomes often below expectations.",
    },
    RubricDef {
        score: 2,
        label: "Developing",
        desc: "Inconsistent performance; meets expectations with guidance.",
    },
    RubricDef {
        score: 3,
        label: "Solid",
        desc: "Consistently meets expectations for the role.",
    },
    RubricDef {
        score: 4,
        label: "Strong",
        desc: "Often exceeds expectations; shows initiative and impact.",
    },
    RubricDef {
        score: 5,
        label: "Outstanding",
        desc: "Regularly exceeds expectations with significant, sustained impact.",
    },
];

pub fn default_competencies() -> Vec<Competency> {
    DEFAULT_COMPETENCIES
        .iter()
        .map(|def| Competency {
            theme: def.theme.to_string(),
            name: def.name.to_string(),
            description: Some(def.description.to_string()),
        })
        .collect()
}

pub fn default_rubric() -> Vec<RubricEntry> {
    DEFAULT_RUBRIC
        .iter()
        .map(|def| RubricEntry {
            score: def.score,
            label: def.label.to_string(),
            desc: def.desc.to_string(),
        })
        .collect()
}
