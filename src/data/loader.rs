use std::path::Path;

use tracing::{debug, warn};

use crate::data::defaults::{default_competencies, default_rubric};
use crate::data::{Competency, DataError, Role, RoleData, RubricEntry};

pub const RUBRIC_RESOURCE: &str = "scoring.json";

/// Resolves a role to its competency set and the shared rubric. Resource
/// problems never propagate: any failure substitutes the built-in defaults.
/// There is no cache; every call re-reads the data directory.
pub fn load_role_data(data_dir: &Path, role: Role) -> RoleData {
    let competencies = match read_competencies(data_dir, role) {
        Ok(list) if !list.is_empty() => {
            debug!(role = %role, count = list.len(), "loaded competency set");
            list
        }
        Ok(_) => {
            warn!(role = %role, "competency resource is empty, using built-in defaults");
            default_competencies()
        }
        Err(err) => {
            warn!(role = %role, error = %err, "competency resource unavailable, using built-in defaults");
            default_competencies()
        }
    };

    let rubric = match read_rubric(data_dir) {
        Ok(list) if !list.is_empty() => list,
        Ok(_) => {
            warn!("rubric resource is empty, using built-in defaults");
            default_rubric()
        }
        Err(err) => {
            warn!(error = %err, "rubric resource unavailable, using built-in defaults");
            default_rubric()
        }
    };

    RoleData {
        role,
        competencies,
        rubric,
    }
}

fn read_competencies(data_dir: &Path, role: Role) -> Result<Vec<Competency>, DataError> {
    let path = data_dir.join(role.competencies_resource());
    let body = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&body)?)
}

fn read_rubric(data_dir: &Path) -> Result<Vec<RubricEntry>, DataError> {
    let path = data_dir.join(RUBRIC_RESOURCE);
    let body = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_missing_resources_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let data = load_role_data(dir.path(), Role::Consultant);
        assert_eq!(data.competencies, default_competencies());
        assert_eq!(data.competencies.len(), 6);
        assert_eq!(data.rubric, default_rubric());
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let first = load_role_data(dir.path(), Role::ProjectManager);
        let second = load_role_data(dir.path(), Role::ProjectManager);
        assert_eq!(first.competencies, second.competencies);
        assert_eq!(first.rubric, second.rubric);
    }

    #[test]
    fn test_loads_role_scoped_competencies() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "competencies-consultant.json",
            r#"[{"theme":"Insight","competency":"Strategic Thinking"}]"#,
        );
        let data = load_role_data(dir.path(), Role::Consultant);
        assert_eq!(data.competencies.len(), 1);
        assert_eq!(data.competencies[0].name, "Strategic Thinking");
        // The other role still falls back.
        let other = load_role_data(dir.path(), Role::Director);
        assert_eq!(other.competencies.len(), 6);
    }

    #[test]
    fn test_malformed_competencies_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "competencies-project-manager.json", "{not json");
        let data = load_role_data(dir.path(), Role::ProjectManager);
        assert_eq!(data.competencies, default_competencies());
    }

    #[test]
    fn test_empty_competency_list_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "competencies-project-manager.json", "[]");
        let data = load_role_data(dir.path(), Role::ProjectManager);
        assert_eq!(data.competencies.len(), 6);
    }

    #[test]
    fn test_loads_shared_rubric() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            RUBRIC_RESOURCE,
            r#"[{"score":1,"label":"Low","desc":"Below bar."}]"#,
        );
        let data = load_role_data(dir.path(), Role::ProjectManager);
        assert_eq!(data.rubric.len(), 1);
        assert_eq!(data.rubric[0].label, "Low");
    }
}
