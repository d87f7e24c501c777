use crate::data::{Competency, RubricEntry};

pub fn render_competency_table(role_name: &str, competencies: &[Competency]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Competency framework: {}\n", role_name));
    out.push_str(&"=".repeat(22 + role_name.len()));
    out.push_str("\n\n");

    let theme_width = competencies
        .iter()
        .map(|c| c.theme.len())
        .chain(["Theme".len()])
        .max()
        .unwrap_or(0);
    let name_width = competencies
        .iter()
        .map(|c| c.name.len())
        .chain(["Competency".len()])
        .max()
        .unwrap_or(0);

    out.push_str(&format!(
        "{:theme_width$}  {:name_width$}  Description\n",
        "Theme", "Competency"
    ));
    for competency in competencies {
        out.push_str(&format!(
            "{:theme_width$}  {:name_width$}  {}\n",
            competency.theme,
            competency.name,
            competency.description.as_deref().unwrap_or("-"),
        ));
    }

    out
}

pub fn render_rubric(rubric: &[RubricEntry]) -> String {
    let mut out = String::new();

    out.push_str("Scoring rubric\n");
    out.push_str("==============\n\n");
    for entry in rubric {
        out.push_str(&format!("{}  {}\n", entry.score, entry.label));
        out.push_str(&format!("   {}\n", entry.desc));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::defaults::{default_competencies, default_rubric};

    #[test]
    fn test_competency_table_lists_every_entry() {
        let text = render_competency_table("Project Manager", &default_competencies());
        assert!(text.contains("Competency framework: Project Manager"));
        for competency in default_competencies() {
            assert!(text.contains(&competency.name));
        }
    }

    #[test]
    fn test_rubric_lists_scores_with_labels() {
        let text = render_rubric(&default_rubric());
        assert!(text.contains("1  Needs development"));
        assert!(text.contains("5  Outstanding"));
    }

    #[test]
    fn test_missing_description_renders_dash() {
        let competencies = vec![Competency {
            theme: "T".to_string(),
            name: "C".to_string(),
            description: None,
        }];
        let text = render_competency_table("X", &competencies);
        assert!(text.contains("  -"));
    }
}
