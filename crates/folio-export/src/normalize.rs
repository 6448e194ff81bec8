//! Pure display-string helpers used by the composer.

use folio_core::language::Labels;
use folio_core::models::profile::Profile;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format `"YYYY-MM"` / `"YYYY-MM-DD"` as `"Mar 2024"`.
///
/// `None` or a blank string means an open-ended range and yields the
/// localized present label. Anything that does not look like a month/year
/// degrades to an empty string. The month and year come straight from the
/// text; no timezone-aware date type is involved, so the calendar month can
/// never shift.
pub fn format_month_year(date: Option<&str>, labels: &Labels) -> String {
    let raw = match date {
        Some(s) if !s.is_empty() => s,
        _ => return labels.present.to_string(),
    };

    let mut parts = raw.splitn(3, '-');
    let year = parts.next().unwrap_or("");
    let month = parts.next().unwrap_or("");

    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        return String::new();
    }
    match month.parse::<usize>() {
        Ok(m) if (1..=12).contains(&m) => format!("{} {}", MONTHS[m - 1], year),
        _ => String::new(),
    }
}

/// Drop a leading `https://` or `http://` for compact display.
pub fn strip_protocol(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Join the non-empty contact identifiers (email, github, linkedin) with a
/// middle-dot separator, URLs protocol-stripped.
pub fn contact_line(profile: &Profile) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if !profile.email.is_empty() {
        parts.push(&profile.email);
    }
    if !profile.github.is_empty() {
        parts.push(strip_protocol(&profile.github));
    }
    if !profile.linkedin.is_empty() {
        parts.push(strip_protocol(&profile.linkedin));
    }
    parts.join(" · ")
}

/// Best-effort bullet fragments: split where `.` or `;` is followed by
/// whitespace (or ends the text) and keep fragments longer than three
/// characters. Not a sentence-boundary detector: abbreviations split too,
/// and text without terminal punctuation comes back whole.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if (c == '.' || c == ';') && chars.peek().map_or(true, |n| n.is_whitespace()) {
            push_fragment(&mut fragments, &current);
            current.clear();
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
        } else {
            current.push(c);
        }
    }
    push_fragment(&mut fragments, &current);
    fragments
}

fn push_fragment(out: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if trimmed.chars().count() > 3 {
        out.push(trimmed.to_string());
    }
}

/// Bullet lines for an entry description: the sentence fragments when the
/// split yields more than one usable piece, otherwise the whole description
/// as a single bullet.
pub fn bullets_from_description(desc: &str) -> Vec<String> {
    let fragments = split_sentences(desc);
    if fragments.len() > 1 {
        fragments
    } else {
        vec![desc.trim().to_string()]
    }
}
