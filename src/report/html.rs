//! HTML rendering for the form output: four tables joined by `<br>`

use super::{PresenceRow, Report, ENTITY_HEADERS, OCCURRENCE_HEADERS, PRESENCE_HEADERS};

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut html = String::from("<table border=\"1\" class=\"dataframe\">\n<thead>\n<tr>");
    for header in headers {
        html.push_str(&format!("<th>{}</th>", escape(header)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>");
    html
}

/// Form variant of the presence columns: the tag itself when found, else "No"
fn presence_cells(row: &PresenceRow) -> Vec<String> {
    let shown = |found: bool| {
        if found {
            row.tag.clone()
        } else {
            "No".to_string()
        }
    };
    vec![
        row.tag.clone(),
        shown(row.found_in_entities),
        shown(row.found_in_text),
    ]
}

/// Entity, existing-tag, per-field and comparison tables
pub fn render_report(report: &Report) -> String {
    let entities: Vec<Vec<String>> = report.entity_rows().map(|r| r.cells()).collect();
    let presence: Vec<Vec<String>> = report.existing_tags.iter().map(presence_cells).collect();
    let occurrences: Vec<Vec<String>> = report.occurrences.iter().map(|r| r.cells()).collect();
    let comparison_headers: Vec<&str> = report
        .comparison
        .headers
        .iter()
        .map(String::as_str)
        .collect();
    let comparison: Vec<Vec<String>> = report.comparison.rows.iter().map(|r| r.to_vec()).collect();

    [
        render_table(&ENTITY_HEADERS, &entities),
        render_table(&PRESENCE_HEADERS, &presence),
        render_table(&OCCURRENCE_HEADERS, &occurrences),
        render_table(&comparison_headers, &comparison),
    ]
    .join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::tests::fixed_set;
    use crate::extract::Category;
    use crate::pipeline::{Analyzer, Settings, Submission};
    use crate::tags::{KeywordDictionary, TagVocabulary};

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_render_table() {
        let html = render_table(&["Tag"], &[vec!["a<b".to_string()]]);
        assert!(html.starts_with("<table"));
        assert!(html.contains("<th>Tag</th>"));
        assert!(html.contains("<td>a&lt;b</td>"));
        assert!(html.ends_with("</table>"));
    }

    #[test]
    fn test_presence_cells() {
        let row = PresenceRow {
            tag: "bollywood".to_string(),
            found_in_entities: false,
            found_in_text: true,
            evidence: "bollywood".to_string(),
        };
        assert_eq!(presence_cells(&row), vec!["bollywood", "No", "bollywood"]);
    }

    #[test]
    fn test_render_report_has_four_tables() {
        let analyzer = Analyzer::new(
            fixed_set(vec![("Kerala", Category::Location)], vec!["rain"], vec![], vec![]),
            TagVocabulary::from_lines(["kerala"]),
            KeywordDictionary::default(),
            Settings::default(),
        );
        let analysis = analyzer.analyze(&Submission {
            title: "Monsoon".to_string(),
            summary: "Rain".to_string(),
            content: "Rain in Kerala".to_string(),
            existing_tags: vec!["kerala".to_string()],
        });
        let html = render_report(&Report::build(&analysis, 20));

        assert_eq!(html.matches("<table").count(), 4);
        assert_eq!(html.matches("<br>").count(), 3);
        assert!(html.contains("<tr><td>kerala</td><td>kerala</td><td></td></tr>"));
        assert!(html.contains("<td>Content: kerala</td>"));
        assert!(html.contains("<th>Found in Fields</th>"));
    }
}
