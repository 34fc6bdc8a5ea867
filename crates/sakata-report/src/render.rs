//! HTML report rendering.

use std::fmt::Write as _;

use chrono::NaiveDate;
use sakata_traits::Valuation;

/// Colors for the signed upside column: red for undervalued (positive),
/// blue for overvalued.
const UNDERVALUED_COLOR: &str = "#d32f2f";
const OVERVALUED_COLOR: &str = "#1976d2";

/// Report-level context rendered around the ranked rows.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    /// Name of the universe, e.g. the index the run screens.
    pub universe_label: String,
    /// The run date, rendered in the heading.
    pub run_date: NaiveDate,
    /// One line describing the valuation method in effect.
    pub method_note: String,
    /// Total issues evaluated (successes plus rejections).
    pub evaluated: u64,
    /// Total rejections across all kinds.
    pub rejected: u64,
}

/// Render the ranked valuations into an HTML fragment.
///
/// One table row per success: bolded code, display name, yen-formatted
/// price and fair value, and a color-coded signed upside percentage.
/// A summary line states how many issues were evaluated and how many were
/// rejected. All interpolated text is escaped.
#[must_use]
pub fn render_report(ranked: &[Valuation], meta: &ReportMeta) -> String {
    let mut html = String::new();

    writeln!(
        html,
        "<h3>Analysis Report: {} ({})</h3>",
        escape_html(&meta.universe_label),
        meta.run_date.format("%Y/%m/%d")
    )
    .expect("write heading");
    writeln!(html, "<p>{}</p>", escape_html(&meta.method_note)).expect("write method note");
    writeln!(
        html,
        "<p>Evaluated {} issues: {} ranked, {} rejected.</p>",
        meta.evaluated,
        ranked.len(),
        meta.rejected
    )
    .expect("write summary");
    html.push_str("<br>\n");

    html.push_str(
        "<table style=\"font-size: 12px; border-collapse: collapse; width: 100%; text-align: left;\">\n",
    );
    html.push_str(concat!(
        "<thead style=\"background-color: #f4f4f4;\">\n<tr>\n",
        "<th style=\"padding: 8px;\">コード</th>\n",
        "<th style=\"padding: 8px;\">銘柄名</th>\n",
        "<th style=\"padding: 8px;\">株価</th>\n",
        "<th style=\"padding: 8px;\">適正株価</th>\n",
        "<th style=\"padding: 8px;\">割安度</th>\n",
        "</tr>\n</thead>\n<tbody>\n",
    ));

    for valuation in ranked {
        let color = if valuation.upside_pct > 0.0 {
            UNDERVALUED_COLOR
        } else {
            OVERVALUED_COLOR
        };
        writeln!(
            html,
            concat!(
                "<tr style=\"border-bottom: 1px solid #eee;\">",
                "<td style=\"padding: 8px;\"><strong>{code}</strong></td>",
                "<td style=\"padding: 8px;\">{name}</td>",
                "<td style=\"padding: 8px;\">¥{price}</td>",
                "<td style=\"padding: 8px;\">¥{fair}</td>",
                "<td style=\"padding: 8px;\"><span style=\"color: {color}; font-weight: bold;\">{upside:+.1}%</span></td>",
                "</tr>"
            ),
            code = escape_html(&valuation.symbol),
            name = escape_html(&valuation.display_name),
            price = format_yen(valuation.price),
            fair = format_yen(valuation.fair_value),
            color = color,
            upside = valuation.upside_pct,
        )
        .expect("write row");
    }

    html.push_str("</tbody></table>\n");
    html.push_str("<br><small>Generated by automated analysis logic.</small>\n");
    html
}

/// Format a yen amount: rounded to whole yen with comma separators.
fn format_yen(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use sakata_traits::ModelInputs;

    fn meta() -> ReportMeta {
        ReportMeta {
            universe_label: "JPX400".to_string(),
            run_date: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
            method_note: "Based on projected EPS, growth rate (capped at 25%), and dividend yield."
                .to_string(),
            evaluated: 400,
            rejected: 398,
        }
    }

    fn valuation(symbol: &str, name: &str, price: f64, fair_value: f64) -> Valuation {
        Valuation {
            symbol: symbol.to_string(),
            display_name: name.to_string(),
            price,
            fair_value,
            upside_pct: (fair_value - price) / price * 100.0,
            inputs: ModelInputs::GrowthYield {
                eps: 100.0,
                growth_pct: 20.0,
                yield_pct: 2.0,
                multiplier: 22.0,
            },
        }
    }

    #[test]
    fn test_heading_and_summary() {
        let html = render_report(&[], &meta());
        assert!(html.contains("<h3>Analysis Report: JPX400 (2026/08/07)</h3>"));
        assert!(html.contains("Evaluated 400 issues: 0 ranked, 398 rejected."));
    }

    #[test]
    fn test_row_content_and_colors() {
        let rows = [
            valuation("7203", "トヨタ自動車", 2500.0, 3000.0),
            valuation("9984", "ソフトバンクグループ", 8000.0, 6000.0),
        ];
        let html = render_report(&rows, &meta());

        assert!(html.contains("<strong>7203</strong>"));
        assert!(html.contains("トヨタ自動車"));
        assert!(html.contains("¥2,500"));
        assert!(html.contains("¥3,000"));
        assert!(html.contains("+20.0%"));
        assert!(html.contains(UNDERVALUED_COLOR));

        assert!(html.contains("-25.0%"));
        assert!(html.contains(OVERVALUED_COLOR));
    }

    #[test]
    fn test_names_are_escaped() {
        let rows = [valuation("0001", "A&B <Holdings>", 100.0, 120.0)];
        let html = render_report(&rows, &meta());
        assert!(html.contains("A&amp;B &lt;Holdings&gt;"));
        assert!(!html.contains("<Holdings>"));
    }

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(0.0), "0");
        assert_eq!(format_yen(999.4), "999");
        assert_eq!(format_yen(1000.0), "1,000");
        assert_eq!(format_yen(2530.5), "2,531");
        assert_eq!(format_yen(1_234_567.0), "1,234,567");
        assert_eq!(format_yen(-1500.0), "-1,500");
    }
}
