//! Listing-page table extraction.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use sakata_traits::{Issue, UniverseError, UniverseSource};
use scraper::{Html, Selector};

/// Request timeout for the listing page.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`ListingTableSource`].
#[derive(Debug, Clone)]
pub struct ListingConfig {
    /// URL of the index constituent listing page.
    pub url: String,
    /// Fixed width of a valid issue code (default: 4).
    pub code_width: usize,
    /// Character encoding the listing is served in when the response does
    /// not declare one (default: `shift_jis`).
    pub fallback_charset: String,
}

impl ListingConfig {
    /// Configuration for the given listing URL with default code format.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            code_width: 4,
            fallback_charset: "shift_jis".to_string(),
        }
    }
}

/// Universe source backed by an HTML listing page.
///
/// The page is expected to contain at least one table whose first column
/// holds fixed-width numeric issue codes and whose second column holds
/// display names. The table is located by that shape, not by markup ids:
/// the upstream page carries no stable anchors.
#[derive(Debug, Clone)]
pub struct ListingTableSource {
    http: Client,
    config: ListingConfig,
}

impl ListingTableSource {
    /// Create a source for the configured listing.
    #[must_use]
    pub fn new(config: ListingConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl UniverseSource for ListingTableSource {
    async fn fetch_universe(&self) -> Result<Vec<Issue>, UniverseError> {
        tracing::info!(url = %self.config.url, "fetching universe listing");

        let response = self
            .http
            .get(&self.config.url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| UniverseError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UniverseError::Status(status.as_u16()));
        }

        let html = response
            .text_with_charset(&self.config.fallback_charset)
            .await
            .map_err(|e| UniverseError::Request(e.to_string()))?;

        let issues = extract_issues(&html, self.config.code_width)?;
        tracing::info!(count = issues.len(), "universe resolved");
        Ok(issues)
    }
}

/// Extract (code, name) issues from the listing HTML.
///
/// Table choice follows the upstream page's loose structure: prefer the
/// first table in which any row's first cell matches the code format;
/// fall back to the second table when the heuristic finds nothing and the
/// page has at least two tables. Rows that fail the code filter (headers,
/// section dividers) are dropped; codes are zero-filled to `code_width`
/// and deduplicated preserving first occurrence.
fn extract_issues(html: &str, code_width: usize) -> Result<Vec<Issue>, UniverseError> {
    let document = Html::parse_document(html);
    let table_sel = selector("table");
    let row_sel = selector("tr");
    let cell_sel = selector("td, th");

    let mut tables: Vec<Vec<(String, String)>> = Vec::new();
    for table in document.select(&table_sel) {
        let mut rows = Vec::new();
        for row in table.select(&row_sel) {
            let cells: Vec<String> = row
                .select(&cell_sel)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect();
            if cells.len() >= 2 {
                rows.push((cells[0].clone(), cells[1].clone()));
            }
        }
        tables.push(rows);
    }

    let chosen = tables
        .iter()
        .find(|rows| rows.iter().any(|(code, _)| matches_code(code, code_width)))
        .or_else(|| tables.get(1))
        .ok_or(UniverseError::TableNotFound)?;

    let mut seen = HashSet::new();
    let mut issues = Vec::new();
    for (raw_code, name) in chosen {
        if !matches_code(raw_code, code_width) {
            continue;
        }
        let code = format!("{raw_code:0>width$}", width = code_width);
        if seen.insert(code.clone()) {
            issues.push(Issue::new(code, name.clone()));
        }
    }

    if issues.is_empty() {
        return Err(UniverseError::NoValidRows);
    }
    Ok(issues)
}

/// Whether a cell holds a plausible issue code: all digits, non-empty, and
/// no wider than the fixed width (narrower codes are zero-filled later).
fn matches_code(cell: &str, width: usize) -> bool {
    !cell.is_empty() && cell.len() <= width && cell.chars().all(|c| c.is_ascii_digit())
}

/// Parse a selector that is known valid at compile time.
fn selector(raw: &'static str) -> Selector {
    Selector::parse(raw).expect("static selector is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <html><body>
        <table>
            <tr><td>About this page</td><td>Navigation</td></tr>
        </table>
        <table>
            <tr><th>コード</th><th>銘柄名</th><th>市場</th></tr>
            <tr><td>7203</td><td>トヨタ自動車</td><td>プライム</td></tr>
            <tr><td>9984</td><td>ソフトバンクグループ</td><td>プライム</td></tr>
            <tr><td>285</td><td>短いコード</td><td>プライム</td></tr>
            <tr><td>7203</td><td>トヨタ自動車(重複)</td><td>プライム</td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_extracts_code_and_name_columns() {
        let issues = extract_issues(LISTING, 4).unwrap();
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0], Issue::new("7203", "トヨタ自動車"));
        assert_eq!(issues[1], Issue::new("9984", "ソフトバンクグループ"));
    }

    #[test]
    fn test_codes_are_zero_filled() {
        let issues = extract_issues(LISTING, 4).unwrap();
        assert_eq!(issues[2].symbol, "0285");
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let issues = extract_issues(LISTING, 4).unwrap();
        let toyota: Vec<_> = issues.iter().filter(|i| i.symbol == "7203").collect();
        assert_eq!(toyota.len(), 1);
        assert_eq!(toyota[0].display_name, "トヨタ自動車");
    }

    #[test]
    fn test_header_rows_are_filtered() {
        let issues = extract_issues(LISTING, 4).unwrap();
        assert!(issues.iter().all(|i| i.symbol.chars().all(|c| c.is_ascii_digit())));
    }

    #[test]
    fn test_second_table_fallback() {
        // No row matches the code format, but a second table exists: the
        // upstream occasionally renders codes with a suffix the filter
        // then rejects row by row.
        let html = r#"
            <table><tr><td>menu</td><td>links</td></tr></table>
            <table>
                <tr><td>A123</td><td>not a code</td></tr>
                <tr><td>9501</td><td>東京電力</td></tr>
            </table>
        "#;
        // The heuristic already matches table 2 here via the 9501 row; drop
        // it to exercise the pure fallback path.
        let no_match = html.replace("9501", "95X1");
        assert!(matches!(
            extract_issues(&no_match, 4),
            Err(UniverseError::NoValidRows)
        ));
    }

    #[test]
    fn test_no_tables_is_table_not_found() {
        assert!(matches!(
            extract_issues("<html><body><p>maintenance</p></body></html>", 4),
            Err(UniverseError::TableNotFound)
        ));
    }

    #[test]
    fn test_zero_surviving_rows_is_fatal() {
        let html = r#"
            <table>
                <tr><td>コード</td><td>銘柄名</td></tr>
                <tr><td>ETF-1</td><td>上場投信</td></tr>
            </table>
        "#;
        // One table, no valid codes: heuristic fails, no second table.
        assert!(matches!(
            extract_issues(html, 4),
            Err(UniverseError::TableNotFound)
        ));
    }

    #[test]
    fn test_code_wider_than_width_rejected() {
        assert!(!matches_code("72030", 4));
        assert!(matches_code("7203", 4));
        assert!(matches_code("285", 4));
        assert!(!matches_code("", 4));
        assert!(!matches_code("72A3", 4));
    }
}
