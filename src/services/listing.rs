//! Plain-text project listing printed by `serve`.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::fmt::Write as _;

use site::{ProjectCatalog, Section};

/// One numbered entry per record, grouped by section.
#[must_use]
pub fn format_listing(catalog: &ProjectCatalog) -> String {
    let mut out = format!("Loaded {} projects:\n", catalog.len());
    for section in Section::ALL {
        let records = catalog.section(section);
        if records.is_empty() {
            continue;
        }
        let _ = write!(out, "\n[{section}]\n");
        for (i, project) in records.iter().enumerate() {
            let _ = writeln!(out, "\n{}. {}", i + 1, project.title);
            let _ = writeln!(out, "   Date: {}", project.date);
            let _ = writeln!(out, "   Description: {}", project.description.trim());
            let _ = writeln!(out, "   Technologies: {}", project.technologies.join(", "));
            let _ = writeln!(out, "   Demo: {}", project.demo_link);
            let _ = writeln!(out, "   GitHub: {}", project.github_link);
        }
    }
    out
}
