use super::*;

pub(crate) fn escape(text: &str) -> Cow<'_, str> {
  html_escape::encode_text(text)
}

pub(crate) fn format_count(count: impl Into<i128>, noun: &str) -> String {
  let count: i128 = count.into();

  match count.unsigned_abs() {
    1 => format!("{count} {noun}"),
    _ => format!("{count} {noun}s"),
  }
}

pub(crate) fn format_percentage(ratio: f64) -> String {
  format!("{:.0}%", (ratio * 100.0).round())
}
