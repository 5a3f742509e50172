//! Plain-text rendering of a ranking report.

use super::{LabeledMatrix, RankingReport};

/// Placeholder shown when a report carries no data at all.
pub const NO_DATA_PLACEHOLDER: &str = "No ranking data available.";

/// Renders a [`RankingReport`] into one structured text document.
///
/// Section order is fixed: inconsistency indices, then one block per
/// ranking method, then labeled aggregated matrices. Sections without
/// data are omitted entirely; every numeric value is printed with two
/// decimals.
pub struct ReportRenderer;

impl ReportRenderer {
    /// Renders the report.
    pub fn render(report: &RankingReport) -> String {
        if report.is_empty() {
            return format!("{}\n", NO_DATA_PLACEHOLDER);
        }

        let mut sections = Vec::new();

        if !report.inconsistency_indices().is_empty() {
            sections.push(Self::render_indices(report));
        }

        for section in report.method_sections() {
            let mut block = format!("Final Ranking ({})\n", section.method);
            for entry in &section.entries {
                block.push_str(&format!("  {}: {:.2}\n", entry.alternative, entry.score));
            }
            sections.push(block);
        }

        if !report.criterion_matrices().is_empty() {
            sections.push(Self::render_matrices(report));
        }

        sections.join("\n")
    }

    fn render_indices(report: &RankingReport) -> String {
        let mut block = String::from("Inconsistency Indices\n");
        for (expert, criteria) in report.inconsistency_indices() {
            block.push_str(&format!("  Expert: {}\n", expert));
            for (criterion, index) in criteria {
                block.push_str(&format!(
                    "    Criterion: {}, Index: {:.2}\n",
                    criterion, index
                ));
            }
        }
        block
    }

    fn render_matrices(report: &RankingReport) -> String {
        let mut block = String::from("Expert Matrices\n");
        for group in report.criterion_matrices() {
            block.push_str(&format!("  Criterion: {}\n", group.criterion));
            for matrix in &group.matrices {
                block.push_str(&Self::render_matrix(matrix));
            }
        }
        block
    }

    fn render_matrix(matrix: &LabeledMatrix) -> String {
        let mut text = String::new();

        let header = matrix
            .labels
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" | ");
        text.push_str(&format!("    | {}\n", header));

        for (label, row) in matrix.labels.iter().zip(&matrix.rows) {
            let cells = row
                .iter()
                .map(|value| format!("{:.2}", value))
                .collect::<Vec<_>>()
                .join(" | ");
            text.push_str(&format!("    {} | {}\n", label, cells));
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ranking::{
        CriterionMatrices, InconsistencyIndices, MethodSection, RankedAlternative,
    };

    fn report_with_rankings() -> RankingReport {
        let mut report = RankingReport::new();
        report.push_method_section(MethodSection::new(
            "TOPSIS",
            vec![
                RankedAlternative::new("Car", 0.666),
                RankedAlternative::new("Bike", 0.334),
            ],
        ));
        report.push_method_section(MethodSection::new(
            "BASIC",
            vec![RankedAlternative::new("Car", 0.5)],
        ));
        report
    }

    #[test]
    fn empty_report_renders_placeholder() {
        let report = RankingReport::new();
        assert_eq!(ReportRenderer::render(&report), "No ranking data available.\n");
    }

    #[test]
    fn scores_use_two_decimal_precision() {
        let document = ReportRenderer::render(&report_with_rankings());
        assert!(document.contains("  Car: 0.67\n"));
        assert!(document.contains("  Bike: 0.33\n"));
        assert!(document.contains("  Car: 0.50\n"));
    }

    #[test]
    fn method_sections_render_in_arrival_order() {
        let document = ReportRenderer::render(&report_with_rankings());
        let topsis = document.find("Final Ranking (TOPSIS)").unwrap();
        let basic = document.find("Final Ranking (BASIC)").unwrap();
        assert!(topsis < basic);
    }

    #[test]
    fn indices_render_before_rankings_grouped_by_expert() {
        let mut report = report_with_rankings();
        let mut indices = InconsistencyIndices::new();
        indices
            .entry("Alice".to_string())
            .or_default()
            .insert("Price".to_string(), 0.125);
        indices
            .entry("Alice".to_string())
            .or_default()
            .insert("Comfort".to_string(), 0.04);
        report.set_inconsistency_indices(indices);

        let document = ReportRenderer::render(&report);
        assert!(document.contains("Inconsistency Indices\n  Expert: Alice\n"));
        assert!(document.contains("    Criterion: Price, Index: 0.13\n"));
        assert!(document.contains("    Criterion: Comfort, Index: 0.04\n"));

        let indices_at = document.find("Inconsistency Indices").unwrap();
        let rankings_at = document.find("Final Ranking").unwrap();
        assert!(indices_at < rankings_at);
    }

    #[test]
    fn matrices_render_header_row_then_one_row_per_alternative() {
        let mut report = RankingReport::new();
        report.set_criterion_matrices(vec![CriterionMatrices::new(
            "Price",
            vec![LabeledMatrix::new(
                vec!["Car".to_string(), "Bike".to_string()],
                vec![vec![1.0, 3.0], vec![1.0 / 3.0, 1.0]],
            )],
        )]);

        let document = ReportRenderer::render(&report);
        assert!(document.contains("Expert Matrices\n  Criterion: Price\n"));
        assert!(document.contains("    | Car | Bike\n"));
        assert!(document.contains("    Car | 1.00 | 3.00\n"));
        assert!(document.contains("    Bike | 0.33 | 1.00\n"));
    }

    #[test]
    fn absent_sections_are_omitted() {
        let document = ReportRenderer::render(&report_with_rankings());
        assert!(!document.contains("Inconsistency Indices"));
        assert!(!document.contains("Expert Matrices"));
        assert!(!document.contains(NO_DATA_PLACEHOLDER));
    }
}
