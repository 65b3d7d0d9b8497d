// src/front_matter.rs
//
// Front-matter-only markdown: a `---` fenced block of `key: value` lines
// and nothing after the closing fence. Values are written raw; the
// downstream site generator reads them as YAML scalars.

use std::fmt::Write as _;

use crate::config::consts::FRONT_MATTER_FENCE;

/// Anything that can sit on the right of `key:`.
/// `None` renders as an empty value so the key is never dropped.
pub trait FieldValue {
    fn write_to(&self, out: &mut String);
}

impl FieldValue for str {
    fn write_to(&self, out: &mut String) { out.push_str(self); }
}

impl FieldValue for String {
    fn write_to(&self, out: &mut String) { out.push_str(self); }
}

impl FieldValue for i64 {
    fn write_to(&self, out: &mut String) { let _ = write!(out, "{self}"); }
}

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn write_to(&self, out: &mut String) { (**self).write_to(out); }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn write_to(&self, out: &mut String) {
        if let Some(v) = self { v.write_to(out); }
    }
}

/// Ordered key/value pairs. Order is preserved as pushed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: Vec<(&'static str, String)>,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl FieldValue) {
        let mut rendered = s!();
        value.write_to(&mut rendered);
        self.fields.push((key, rendered));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(k, _)| *k)
    }

    pub fn render(&self) -> String {
        let mut out = join!(FRONT_MATTER_FENCE, "\n");
        for (key, value) in &self.fields {
            out.push_str(key);
            out.push(':');
            if !value.is_empty() {
                out.push(' ');
                out.push_str(value);
            }
            out.push('\n');
        }
        out.push_str(FRONT_MATTER_FENCE);
        out
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn renders_fenced_block_without_trailing_newline() {
        let fm = front_matter! {
            "layout" => "season",
            "title" => s!("2023 Eagles 4th Downs"),
            "season" => 2023i64,
        };
        assert_eq!(fm.render(), "---\nlayout: season\ntitle: 2023 Eagles 4th Downs\nseason: 2023\n---");
    }

    #[test]
    fn none_keeps_key_with_empty_value() {
        let missing: Option<i64> = None;
        let fm = front_matter! {
            "final_home" => missing,
            "final_away" => Some(20i64),
            "date" => None::<String>,
        };
        assert_eq!(fm.render(), "---\nfinal_home:\nfinal_away: 20\ndate:\n---");
        assert_eq!(fm.get("final_home"), Some(""));
        assert_eq!(fm.keys().collect::<Vec<_>>(), vec!["final_home", "final_away", "date"]);
    }
}
