use crate::docs::DocumentSet;
use crate::linear::Issue;

/// Build the performance-review prompt from the held issues and documents.
///
/// Empty sections get a literal "None" marker so the model always sees
/// both headings.
pub fn build_recap_prompt(issues: &[Issue], docs: &DocumentSet) -> String {
    let issues_summary = issues
        .iter()
        .map(|issue| {
            let project = issue
                .project_name()
                .map(|name| format!(" ({})", name))
                .unwrap_or_default();
            format!("- [{}] {}{}", issue.identifier, issue.title, project)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let docs_summary = docs
        .iter()
        .map(|doc| format!("### {}\n{}", doc.name, doc.content))
        .collect::<Vec<_>>()
        .join("\n\n");

    let mut prompt = String::new();
    prompt.push_str(
        "You are a performance review expert. Please create a clean performance \
         summary based on the following information.\n\n",
    );

    prompt.push_str("## Completed Linear Issues:\n");
    if issues_summary.is_empty() {
        prompt.push_str("None\n");
    } else {
        prompt.push_str(&issues_summary);
        prompt.push('\n');
    }

    prompt.push_str("\n## Performance Documents:\n");
    if docs_summary.is_empty() {
        prompt.push_str("None\n");
    } else {
        prompt.push_str(&docs_summary);
        prompt.push('\n');
    }

    prompt.push_str("\n## Requirements:\n");
    prompt.push_str("1. Group by category (Feature Development, Bug Fixes, Documentation, Others)\n");
    prompt.push_str("2. Highlight high-impact items\n");
    prompt.push_str("3. Output in clean markdown format\n");
    prompt.push_str("4. Write in English\n");
    prompt.push_str("5. Write in a professional performance review style\n");

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::{LabelConnection, ProjectRef};

    fn make_issue(identifier: &str, title: &str, project: Option<&str>) -> Issue {
        Issue {
            id: format!("id-{}", identifier),
            identifier: identifier.to_string(),
            title: title.to_string(),
            description: None,
            completed_at: None,
            url: format!("https://linear.app/acme/issue/{}", identifier),
            state: None,
            project: project.map(|name| ProjectRef {
                name: name.to_string(),
            }),
            team: None,
            labels: LabelConnection::default(),
        }
    }

    #[test]
    fn test_issue_bullets() {
        let issues = vec![
            make_issue("ENG-1", "Ship search", Some("Discovery")),
            make_issue("ENG-2", "Fix flaky test", None),
        ];
        let prompt = build_recap_prompt(&issues, &DocumentSet::new());

        assert!(prompt.contains("- [ENG-1] Ship search (Discovery)"));
        assert!(prompt.contains("- [ENG-2] Fix flaky test\n"));
        // Order preserved
        let first = prompt.find("ENG-1").unwrap();
        let second = prompt.find("ENG-2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_none_markers_when_empty() {
        let prompt = build_recap_prompt(&[], &DocumentSet::new());
        assert!(prompt.contains("## Completed Linear Issues:\nNone\n"));
        assert!(prompt.contains("## Performance Documents:\nNone\n"));
    }

    #[test]
    fn test_requirements_block_present() {
        let prompt = build_recap_prompt(&[], &DocumentSet::new());
        assert!(prompt.contains("## Requirements:"));
        assert!(prompt.contains("Group by category"));
        assert!(prompt.contains("Highlight high-impact items"));
        assert!(prompt.contains("professional performance review style"));
    }

    #[test]
    fn test_document_sections() {
        let mut docs = DocumentSet::new();
        let temp = tempfile::TempDir::new().unwrap();
        for (name, content) in [("q3.md", "shipped search"), ("q4.md", "fixed auth")] {
            std::fs::write(temp.path().join(name), content).unwrap();
            docs.add_paths(&[temp.path().join(name)]).unwrap();
        }

        let prompt = build_recap_prompt(&[], &docs);
        assert!(prompt.contains("### q3.md\nshipped search"));
        assert!(prompt.contains("### q4.md\nfixed auth"));
        // Documents separated by a blank line
        assert!(prompt.contains("shipped search\n\n### q4.md"));
    }
}
