//! Output formatting utilities

use crate::application::Snapshot;

/// Format tags one per line
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(tag);
        output.push('\n');
    }

    output
}

/// Format a session snapshot for display
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    let mut output = format!("value: {}\n", snapshot.value);
    output.push_str(&format!("tags: {}\n", snapshot.tags.len()));
    for (idx, tag) in snapshot.tags.iter().enumerate() {
        output.push_str(&format!("  {}: {}\n", idx, tag));
    }

    if !snapshot.pending.is_empty() {
        output.push_str(&format!("pending: {}\n", snapshot.pending));
    }

    if !snapshot.marked.is_empty() {
        output.push_str(&format!("marked: {}\n", snapshot.marked.join(" | ")));
    }

    if let Some(warning) = snapshot.warning {
        output.push_str(&format!("warning: {}\n", warning));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tags::EditorWarning;

    #[test]
    fn test_format_empty_tag_list() {
        assert_eq!(format_tag_list(&[]), "No tags found");
    }

    #[test]
    fn test_format_tag_list() {
        let tags = vec!["a".to_string(), "".to_string(), "\"b, c\"".to_string()];
        assert_eq!(format_tag_list(&tags), "a\n\n\"b, c\"\n");
    }

    #[test]
    fn test_format_snapshot_minimal() {
        let snapshot = Snapshot {
            value: "a,b".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
            pending: String::new(),
            marked: vec![],
            warning: None,
        };

        assert_eq!(
            format_snapshot(&snapshot),
            "value: a,b\ntags: 2\n  0: a\n  1: b\n"
        );
    }

    #[test]
    fn test_format_snapshot_full() {
        let snapshot = Snapshot {
            value: "a".to_string(),
            tags: vec!["a".to_string()],
            pending: "\"open".to_string(),
            marked: vec!["a".to_string()],
            warning: Some(EditorWarning::UnclosedQuote),
        };

        let output = format_snapshot(&snapshot);
        assert!(output.contains("pending: \"open\n"));
        assert!(output.contains("marked: a\n"));
        assert!(output.contains("warning: close the quotes on both sides\n"));
    }
}
