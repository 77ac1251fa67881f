//! Result Report - Export-ready rows for tables and summaries.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::AnalysisResult;
use crate::domain::foundation::format_fraction;

/// Status text for a consistency verdict.
pub fn consistency_label(is_consistent: bool) -> &'static str {
    if is_consistent {
        "Consistent"
    } else {
        "Inconsistent"
    }
}

/// One row of the criteria weights table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionRow {
    /// 1-based position in model order.
    pub number: usize,
    pub name: String,
    /// Weight to four decimals.
    pub weight: String,
    pub percentage: String,
}

/// One row of the final ranking table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingRow {
    pub rank: usize,
    pub name: String,
    /// Score to four decimals.
    pub score: String,
    pub percentage: String,
}

/// Formatted view of an [`AnalysisResult`].
///
/// Holds text only; rendering to a spreadsheet or document is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultReport {
    pub title: String,
    pub criteria: Vec<CriterionRow>,
    pub ranking: Vec<RankingRow>,
    /// Criteria matrix CR to four decimals.
    pub consistency_ratio: String,
    pub status: String,
    /// When the underlying result was computed, RFC 3339.
    pub computed_at: String,
}

impl ResultReport {
    /// Builds the report rows.
    pub fn from_result(result: &AnalysisResult) -> Self {
        let criteria = result
            .criteria_weights
            .iter()
            .enumerate()
            .map(|(i, c)| CriterionRow {
                number: i + 1,
                name: c.name.clone(),
                weight: format!("{:.4}", c.weight),
                percentage: format_fraction(c.weight),
            })
            .collect();

        let ranking = result
            .alternatives
            .iter()
            .map(|a| RankingRow {
                rank: a.rank,
                name: a.name.clone(),
                score: format!("{:.4}", a.score),
                percentage: format_fraction(a.score),
            })
            .collect();

        Self {
            title: result.model_name.clone(),
            criteria,
            ranking,
            consistency_ratio: format!("{:.4}", result.consistency.criteria.cr),
            status: consistency_label(result.consistency.is_consistent).to_string(),
            computed_at: result.computed_at.to_rfc3339(),
        }
    }
}

impl fmt::Display for ResultReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "Consistency Ratio: {}", self.consistency_ratio)?;
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Computed: {}", self.computed_at)?;
        writeln!(f)?;
        writeln!(f, "{:<4} {:<24} {:>8} {:>8}", "No", "Criterion", "Weight", "Percent")?;
        for row in &self.criteria {
            writeln!(
                f,
                "{:<4} {:<24} {:>8} {:>8}",
                row.number, row.name, row.weight, row.percentage
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{:<4} {:<24} {:>8} {:>8}", "Rank", "Alternative", "Score", "Percent")?;
        for row in &self.ranking {
            writeln!(
                f,
                "{:<4} {:<24} {:>8} {:>8}",
                row.rank, row.name, row.score, row.percentage
            )?;
        }
        Ok(())
    }
}
