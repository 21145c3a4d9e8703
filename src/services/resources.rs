use crate::domain::models::ResourceReport;
use crate::skill::ResourceInventory;

pub fn analyze_resources(inventory: &ResourceInventory) -> ResourceReport {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    if !inventory.other.is_empty() {
        issues.push(format!(
            "Files outside standard directories: {}",
            inventory.other.join(", ")
        ));
        suggestions.push("Move files to scripts/, references/, or assets/".to_string());
    }

    ResourceReport {
        scripts_count: inventory.scripts.len(),
        references_count: inventory.references.len(),
        assets_count: inventory.assets.len(),
        other_count: inventory.other.len(),
        total: inventory.scripts.len()
            + inventory.references.len()
            + inventory.assets.len()
            + inventory.other.len(),
        scripts: inventory.scripts.clone(),
        references: inventory.references.clone(),
        assets: inventory.assets.clone(),
        issues,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_inventory_has_no_issues() {
        let inventory = ResourceInventory {
            scripts: vec!["run.py".to_string()],
            references: vec!["guide.md".to_string()],
            assets: vec![],
            other: vec![],
        };
        let report = analyze_resources(&inventory);
        assert!(report.issues.is_empty());
        assert_eq!(report.total, 2);
        assert_eq!(report.scripts_count, 1);
    }

    #[test]
    fn stray_files_produce_one_issue_naming_them() {
        let inventory = ResourceInventory {
            scripts: vec![],
            references: vec![],
            assets: vec![],
            other: vec!["notes.txt".to_string(), "tmp".to_string()],
        };
        let report = analyze_resources(&inventory);
        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].contains("notes.txt"));
        assert!(report.issues[0].contains("tmp"));
        assert_eq!(report.other_count, 2);
    }
}
