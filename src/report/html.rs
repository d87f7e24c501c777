use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::report::{SummaryData, format_peer_score};

/// Renders the self-contained printable summary: chart image inline as a
/// data URI, one table row per competency, and an onload print hook.
pub fn render_summary_html(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("<!doctype html><html><head>\n");
    out.push_str("<meta charset=\"utf-8\"><title>Evaluation Summary</title>\n");
    out.push_str("<style>\n");
    out.push_str("  body{ font-family: Arial, sans-serif; padding:20px; }\n");
    out.push_str("  h1{ margin:0 0 10px; }\n");
    out.push_str("  table{ border-collapse: collapse; width:100%; margin-top:10px; }\n");
    out.push_str("  th,td{ border:1px solid #ddd; padding:8px; }\n");
    out.push_str("  th{ background:#f3f3f3; text-align:left; }\n");
    out.push_str("  img{ max-width: 640px; height:auto; display:block; margin:12px 0; }\n");
    out.push_str("  @media print{ .no-print{ display:none } }\n");
    out.push_str("</style>\n");
    out.push_str("</head><body>\n");

    out.push_str(&format!(
        "<h1>Evaluation Summary - {}</h1>\n",
        escape(&data.role_name)
    ));
    out.push_str(&format!(
        "<img src=\"data:image/png;base64,{}\" alt=\"Radar chart\">\n",
        STANDARD.encode(&data.chart_png)
    ));

    out.push_str("<table>\n");
    out.push_str("<thead><tr><th>Theme</th><th>Competency</th><th>Self</th><th>Peer</th></tr></thead>\n");
    out.push_str("<tbody>\n");
    for row in &data.rows {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&row.theme),
            escape(&row.competency),
            row.self_score,
            format_peer_score(row.peer_score),
        ));
    }
    out.push_str("</tbody>\n</table>\n");

    out.push_str(
        "<p class=\"no-print\"><em>Tip: Save this as PDF and upload to your team's PEP channel in Microsoft Teams.</em></p>\n",
    );
    out.push_str("<script>window.onload = () => window.print();</script>\n");
    out.push_str("</body></html>\n");

    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::SummaryRow;

    fn sample() -> SummaryData {
        SummaryData {
            role_name: "Project Manager".to_string(),
            rows: vec![
                SummaryRow {
                    theme: "Project Delivery".to_string(),
                    competency: "Time & Budget Management".to_string(),
                    self_score: 4,
                    peer_score: Some(3.0),
                },
                SummaryRow {
                    theme: "Quality Control".to_string(),
                    competency: "Attention to Detail".to_string(),
                    self_score: 2,
                    peer_score: None,
                },
            ],
            chart_png: vec![0x89, 0x50, 0x4E, 0x47],
        }
    }

    #[test]
    fn test_summary_embeds_chart_as_data_uri() {
        let html = render_summary_html(&sample());
        assert!(html.contains("data:image/png;base64,iVBORw=="));
    }

    #[test]
    fn test_summary_rows_and_blank_peer_cell() {
        let html = render_summary_html(&sample());
        assert!(html.contains("<td>Time &amp; Budget Management</td><td>4</td><td>3</td>"));
        assert!(html.contains("<td>Attention to Detail</td><td>2</td><td></td>"));
    }

    #[test]
    fn test_summary_has_print_hook() {
        let html = render_summary_html(&sample());
        assert!(html.contains("window.onload = () => window.print();"));
        assert!(html.contains("class=\"no-print\""));
    }
}
