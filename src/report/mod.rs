//! Text rendering for breakdowns, ledger reports and snapshot history
//!
//! All number formatting goes through [`FormatConfig`]; labels come from
//! [`I18n`]. Nothing here computes business figures beyond reading them
//! from the breakdown or ledger.

use crate::core::{Breakdown, CostCategory, FormatConfig, Snapshot};
use crate::i18n::I18n;
use crate::ledger::CostLedger;

/// Renders cost figures as fixed-width text
pub struct ReportRenderer {
    format: FormatConfig,
    i18n: I18n,
}

impl ReportRenderer {
    /// Create a new renderer with the given formatting and labels
    pub fn new(format: &FormatConfig, i18n: I18n) -> Self {
        Self {
            format: format.clone(),
            i18n,
        }
    }

    /// Update the formatting configuration
    pub fn update_format(&mut self, format: &FormatConfig) {
        self.format = format.clone();
    }

    /// Format a number with digit grouping and the configured decimals
    pub fn format_amount(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let fixed = format!("{:.*}", self.format.decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::new();
        // No sign on values that round to zero
        if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
            out.push('-');
        }

        let len = int_part.len();
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push_str(&self.format.thousands_separator);
            }
            out.push(ch);
        }

        if let Some(frac_part) = frac_part {
            out.push_str(&self.format.decimal_separator);
            out.push_str(frac_part);
        }

        out
    }

    /// Amount prefixed with the currency symbol
    pub fn format_money(&self, value: f64) -> String {
        format!("{} {}", self.format.currency_symbol, self.format_amount(value))
    }

    pub fn format_percentage(&self, value: f64) -> String {
        format!("{:.2}%", value)
    }

    fn rule(&self, ch: char) -> String {
        ch.to_string().repeat(self.format.rule_width)
    }

    fn line(&self, label: &str, value: &str) -> String {
        format!("{:<width$}: {}", label, value, width = self.format.label_width)
    }

    /// Render the one-shot calculator result as a table
    pub fn render_breakdown(&self, breakdown: &Breakdown) -> String {
        let width = self.format.breakdown_label_width;
        let amount_width = self.format.amount_width;
        let mut lines = vec![
            format!("{} {}", self.i18n.get("breakdown.title"), breakdown.product_name),
            self.rule('-'),
        ];

        for share in &breakdown.components {
            lines.push(format!(
                "{:<width$}: {} {:>amount_width$} ({})",
                self.i18n.get(share.component.label_key()),
                self.format.currency_symbol,
                self.format_amount(share.nominal),
                self.format_percentage(share.percentage),
            ));
        }

        lines.push(self.rule('-'));
        lines.push(format!(
            "{:<width$}: {} {:>amount_width$}",
            self.i18n.get("report.total_cost"),
            self.format.currency_symbol,
            self.format_amount(breakdown.total_cost),
        ));

        lines.join("\n")
    }

    /// Render the full ledger report: each category, the total, and the
    /// profit analysis when a selling price is set
    pub fn render_report(&self, ledger: &CostLedger) -> String {
        let mut lines = vec![
            format!("{} - {}", self.i18n.get("report.title"), ledger.product_name()),
            self.rule('='),
        ];

        for category in CostCategory::ALL {
            let (heading, total_label) = match category {
                CostCategory::Material => ("report.materials", "report.total_materials"),
                CostCategory::Labor => ("report.labor", "report.total_labor"),
                CostCategory::Overhead => ("report.overhead", "report.total_overhead"),
            };

            lines.push(String::new());
            lines.push(format!("{}:", self.i18n.get(heading)));
            for entry in ledger.entries(category).iter() {
                lines.push(self.line(&entry.name, &self.format_money(entry.amount)));
            }
            lines.push(self.line(
                &self.i18n.get(total_label),
                &self.format_money(ledger.category_total(category)),
            ));
        }

        lines.push(String::new());
        lines.push(format!("{}:", self.i18n.get("report.manufacturing")));
        lines.push(self.rule('-'));
        lines.push(self.line(
            &self.i18n.get("report.total_cost"),
            &self.format_money(ledger.total_cost()),
        ));

        if let Ok(analysis) = ledger.profit_analysis() {
            lines.push(String::new());
            lines.push(format!("{}:", self.i18n.get("profit.title")));
            lines.push(self.rule('-'));
            lines.push(self.line(
                &self.i18n.get("profit.selling_price"),
                &self.format_money(analysis.selling_price),
            ));
            lines.push(self.line(
                &self.i18n.get("report.total_cost"),
                &self.format_money(analysis.total_cost),
            ));
            lines.push(self.line(
                &self.i18n.get("profit.profit"),
                &self.format_money(analysis.profit),
            ));
            lines.push(self.line(
                &self.i18n.get("profit.margin"),
                &self.format_percentage(analysis.margin_percentage),
            ));
        }

        lines.join("\n")
    }

    /// One line per snapshot: timestamp, units, total, unit cost and margin
    pub fn render_history(&self, history: &[Snapshot]) -> String {
        let mut lines = vec![format!("{}:", self.i18n.get("history.title")), self.rule('-')];

        for (i, snapshot) in history.iter().enumerate() {
            let mut line = format!(
                "#{} {} | {} {} | {} {} | {} {}",
                i + 1,
                snapshot.timestamp.format("%Y-%m-%d %H:%M:%S"),
                snapshot.units,
                self.i18n.get("history.units"),
                self.i18n.get("report.total_cost"),
                self.format_money(snapshot.total_cost),
                self.i18n.get("history.unit_cost"),
                self.format_money(snapshot.unit_cost),
            );
            if let Some(profit) = &snapshot.profit {
                line.push_str(&format!(
                    " | {} {}",
                    self.i18n.get("profit.margin"),
                    self.format_percentage(profit.margin_percentage)
                ));
            }
            lines.push(line);
        }

        lines.join("\n")
    }
}
