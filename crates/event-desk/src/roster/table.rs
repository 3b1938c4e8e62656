use super::domain::Candidate;

/// Placeholder row shown when the visible set is empty. Distinct from the
/// fetch-failure notice: an empty roster is a valid outcome.
pub const NO_CANDIDATES: &str = "No candidates found";

const COLUMNS: [&str; 6] = ["Name", "Phone", "Role", "Gender", "City", "Address"];

/// Render the visible rows as the table region handed to print export.
pub fn render_html(rows: &[&Candidate]) -> String {
    let mut out = String::from("<table>\n<thead>\n<tr>");
    for column in COLUMNS {
        out.push_str("<th>");
        out.push_str(column);
        out.push_str("</th>");
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    if rows.is_empty() {
        out.push_str("<tr><td colspan=\"6\">");
        out.push_str(NO_CANDIDATES);
        out.push_str("</td></tr>\n");
    } else {
        for candidate in rows {
            out.push_str("<tr>");
            for cell in [
                &candidate.full_name,
                &candidate.phone_number,
                &candidate.role,
                &candidate.gender,
                &candidate.city,
                &candidate.address,
            ] {
                out.push_str("<td>");
                out.push_str(&escape(cell));
                out.push_str("</td>");
            }
            out.push_str("</tr>\n");
        }
    }

    out.push_str("</tbody>\n</table>\n");
    out
}

/// One line per visible candidate for console rendering; the placeholder
/// line when nothing is visible.
pub fn text_lines(rows: &[&Candidate]) -> Vec<String> {
    if rows.is_empty() {
        return vec![NO_CANDIDATES.to_string()];
    }

    rows.iter()
        .map(|candidate| {
            format!(
                "{} | {} | {} | {} | {} | {}",
                candidate.full_name,
                candidate.phone_number,
                candidate.role,
                candidate.gender,
                candidate.city,
                candidate.address
            )
        })
        .collect()
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
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
    use crate::roster::domain::CandidateId;

    fn candidate(name: &str, address: &str) -> Candidate {
        Candidate {
            id: CandidateId("1".to_string()),
            full_name: name.to_string(),
            phone_number: "9876500000".to_string(),
            role: "Volunteer".to_string(),
            gender: "Female".to_string(),
            city: "Lucknow".to_string(),
            address: address.to_string(),
        }
    }

    #[test]
    fn empty_view_renders_the_placeholder_row() {
        let html = render_html(&[]);
        assert!(html.contains(NO_CANDIDATES));
        assert!(html.contains("colspan=\"6\""));

        assert_eq!(text_lines(&[]), vec![NO_CANDIDATES.to_string()]);
    }

    #[test]
    fn rows_render_in_order_with_all_columns() {
        let first = candidate("Asha Rao", "MG Road");
        let second = candidate("Meera Nair", "Park Street");
        let html = render_html(&[&first, &second]);

        let asha = html.find("Asha Rao").expect("first row present");
        let meera = html.find("Meera Nair").expect("second row present");
        assert!(asha < meera);
        for column in COLUMNS {
            assert!(html.contains(&format!("<th>{column}</th>")));
        }
    }

    #[test]
    fn cell_content_is_escaped() {
        let tricky = candidate("A <b>bold</b> & Co", "\"Quoted\" Lane");
        let html = render_html(&[&tricky]);
        assert!(html.contains("A &lt;b&gt;bold&lt;/b&gt; &amp; Co"));
        assert!(html.contains("&quot;Quoted&quot; Lane"));
        assert!(!html.contains("<b>bold</b>"));
    }
}
