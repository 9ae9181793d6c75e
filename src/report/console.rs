//! Console rendering
//!
//! Square-boxed tables sized by display width, so CJK and other wide
//! characters line up.

use colored::*;
use unicode_width::UnicodeWidthStr;

use super::{Report, ENTITY_HEADERS, EVIDENCE_HEADERS, OCCURRENCE_HEADERS, PRESENCE_HEADERS};

pub const DIVIDER_WIDTH: usize = 100;

/// Draw a boxed table
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| -> String {
        let parts: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, parts.join(mid), right)
    };
    let line = |cells: Vec<&str>| -> String {
        let parts: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let cell = cells.get(i).copied().unwrap_or("");
                format!(" {}{} ", cell, " ".repeat(w - cell.width()))
            })
            .collect();
        format!("│{}│", parts.join("│"))
    };

    let mut out = vec![rule("┌", "┬", "┐"), line(headers.to_vec()), rule("├", "┼", "┤")];
    for row in rows {
        out.push(line(row.iter().map(String::as_str).collect()));
    }
    out.push(rule("└", "┴", "┘"));
    out.join("\n")
}

pub fn divider() -> String {
    "-".repeat(DIVIDER_WIDTH)
}

/// Print every section of a report
pub fn print_report(report: &Report) {
    println!();
    println!("{}", "NER Matched and Unmatched Tags:".bold());
    println!("{}", "Unmatched Tags can be used as suggestable tags.".dimmed());
    for table in &report.entity_tables {
        println!();
        println!("{}", table.category.label().cyan().bold());
        let rows: Vec<Vec<String>> = table.rows.iter().map(|r| r.cells()).collect();
        println!("{}", render_table(&ENTITY_HEADERS, &rows));
    }

    let suggestions = report.suggestions_by_category();
    if !suggestions.is_empty() {
        println!();
        println!("{}", "Suggested Tags:".bold());
        for (category, texts) in &suggestions {
            println!("  {}: {}", category.label().cyan(), texts.join(", ").yellow());
        }
    }

    let known = report.matched_phrases();
    if !known.is_empty() {
        println!();
        let known: Vec<&str> = known.into_iter().collect();
        println!("{} {}", "Known Tags among Phrases and Keywords:".bold(), known.join(", ").green());
    }

    println!();
    println!("{}", "Highlighted Title:".bold());
    println!("{}", report.highlighted_title.render(|s| s.bright_green().to_string()));
    println!();
    println!("{}", "Highlighted Content:".bold());
    println!("{}", report.highlighted_content.render(|s| s.bright_green().to_string()));

    if !report.existing_tags.is_empty() {
        println!();
        println!("{}", "Existing Tags and Their Presence:".bold());
        let rows: Vec<Vec<String>> = report.existing_tags.iter().map(|r| r.cells()).collect();
        println!("{}", render_table(&PRESENCE_HEADERS, &rows));

        println!();
        println!("{}", "Extracted Tags and Their Matched Text Tags:".bold());
        let rows: Vec<Vec<String>> = report
            .existing_tags
            .iter()
            .map(|r| r.evidence_cells())
            .collect();
        println!("{}", render_table(&EVIDENCE_HEADERS, &rows));
    }

    if !report.occurrences.is_empty() {
        println!();
        println!("{}", "Tags by Field:".bold());
        let rows: Vec<Vec<String>> = report.occurrences.iter().map(|r| r.cells()).collect();
        println!("{}", render_table(&OCCURRENCE_HEADERS, &rows));
    }

    println!();
    if report.fuzzy_matches.is_empty() {
        println!("{}", "No fuzzy matches found (with tags file).".dimmed());
    } else {
        println!("{}", "Fuzzy Matched Tags (with tags file):".bold());
        for m in &report.fuzzy_matches {
            println!("  {} -> {} {}", m.query, m.choice.green(), format!("({})", m.score).dimmed());
        }
    }

    println!();
    println!("{}", "Comparison of Noun Phrases and Keywords:".bold());
    let headers: Vec<&str> = report.comparison.headers.iter().map(String::as_str).collect();
    let rows: Vec<Vec<String>> = report.comparison.rows.iter().map(|r| r.to_vec()).collect();
    println!("{}", render_table(&headers, &rows));

    println!();
    if report.similar_phrases.is_empty() {
        println!("{}", "No similar tags found.".dimmed());
    } else {
        println!("{}", "Similar Phrases found in Title & Content:".bold());
        for (tag, phrase) in &report.similar_phrases {
            println!("  Tag: {} -> Similar Phrases found: {}", tag, phrase.green());
        }
    }

    println!();
    if report.dictionary_hits.is_empty() {
        println!("{}", "No dictionary keywords found.".dimmed());
    } else {
        println!("{}", "Dictionary Keywords Found:".bold());
        for hit in &report.dictionary_hits {
            println!("  {}: {}", hit.label().yellow(), hit.phrases.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table() {
        let rows = vec![vec!["bollywood".to_string(), "Yes".to_string()]];
        let table = render_table(&["Tag", "Found"], &rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "┌───────────┬───────┐");
        assert_eq!(lines[1], "│ Tag       │ Found │");
        assert_eq!(lines[3], "│ bollywood │ Yes   │");
        assert_eq!(lines[4], "└───────────┴───────┘");
    }

    #[test]
    fn test_wide_characters_align() {
        let rows = vec![vec!["東京".to_string()], vec!["abc".to_string()]];
        let table = render_table(&["City"], &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[3], "│ 東京 │");
        assert_eq!(lines[4], "│ abc  │");
    }

    #[test]
    fn test_empty_table_has_header() {
        let table = render_table(&["A"], &[]);
        assert_eq!(table.lines().count(), 4);
    }
}
