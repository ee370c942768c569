//! Styled terminal output

use serde::Serialize;

/// Semantic style of an output line
///
/// The host maps these onto its own palette; the session only records intent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Plain,
    Info,
    Success,
    Warning,
    Error,
    /// A shell prompt, with the submitted command (if any) as its text
    Prompt,
}

impl LineStyle {
    /// Parse a one-letter style sigil (`i`, `s`, `w`, `e`, `p`)
    fn from_sigil(sigil: &str) -> Option<Self> {
        match sigil {
            "i" => Some(LineStyle::Info),
            "s" => Some(LineStyle::Success),
            "w" => Some(LineStyle::Warning),
            "e" => Some(LineStyle::Error),
            "p" => Some(LineStyle::Plain),
            _ => None,
        }
    }
}

/// One rendered line of terminal output
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutputLine {
    pub style: LineStyle,
    pub text: String,
}

impl OutputLine {
    #[inline]
    pub fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self { style, text: text.into() }
    }

    #[inline]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(LineStyle::Plain, text)
    }

    #[inline]
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(LineStyle::Info, text)
    }

    #[inline]
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(LineStyle::Success, text)
    }

    #[inline]
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(LineStyle::Warning, text)
    }

    #[inline]
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineStyle::Error, text)
    }

    /// A prompt line echoing `command` (empty for a fresh prompt)
    #[inline]
    pub fn prompt(command: impl Into<String>) -> Self {
        Self::new(LineStyle::Prompt, command)
    }

    /// Check if this is a prompt line
    #[inline]
    pub fn is_prompt(&self) -> bool {
        self.style == LineStyle::Prompt
    }
}

/// An ordered block of output lines produced by one command
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Fragment {
    lines: Vec<OutputLine>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse compact markup: one line per text line, with an optional
    /// `x|` style prefix where `x` is one of `i s w e p`.
    ///
    /// ```
    /// use hackos_terminal::{Fragment, LineStyle};
    ///
    /// let f = Fragment::parse("i|Starting\nplain line");
    /// assert_eq!(f.lines()[0].style, LineStyle::Info);
    /// assert_eq!(f.lines()[1].text, "plain line");
    /// ```
    pub fn parse(markup: &str) -> Self {
        let lines = markup
            .lines()
            .map(|raw| match raw.split_once('|') {
                Some((sigil, rest)) => match LineStyle::from_sigil(sigil) {
                    Some(style) => OutputLine::new(style, rest),
                    None => OutputLine::plain(raw),
                },
                None => OutputLine::plain(raw),
            })
            .collect();
        Self { lines }
    }

    pub fn push(mut self, line: OutputLine) -> Self {
        self.lines.push(line);
        self
    }

    pub fn plain(self, text: impl Into<String>) -> Self {
        self.push(OutputLine::plain(text))
    }

    pub fn info(self, text: impl Into<String>) -> Self {
        self.push(OutputLine::info(text))
    }

    pub fn success(self, text: impl Into<String>) -> Self {
        self.push(OutputLine::success(text))
    }

    pub fn warning(self, text: impl Into<String>) -> Self {
        self.push(OutputLine::warning(text))
    }

    pub fn error(self, text: impl Into<String>) -> Self {
        self.push(OutputLine::error(text))
    }

    #[inline]
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl IntoIterator for Fragment {
    type Item = OutputLine;
    type IntoIter = std::vec::IntoIter<OutputLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl FromIterator<OutputLine> for Fragment {
    fn from_iter<T: IntoIterator<Item = OutputLine>>(iter: T) -> Self {
        Self { lines: iter.into_iter().collect() }
    }
}

/// Scrollback of a terminal session
///
/// Append-only, except for [`OutputLog::clear`].
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct OutputLog {
    lines: Vec<OutputLine>,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, line: OutputLine) {
        self.lines.push(line);
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        self.lines.extend(lines);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[inline]
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&OutputLine> {
        self.lines.last()
    }

    /// Lines whose text contains `needle`
    pub fn matching<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = &'a OutputLine> + 'a {
        self.lines.iter().filter(move |line| line.text.contains(needle))
    }
}

/// Format an integer with `,` thousands separators
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_markup_styles() {
        let f = Fragment::parse("i|info\ns|ok\nw|careful\ne|boom\nno sigil\nx|unknown");
        let styles: Vec<LineStyle> = f.lines().iter().map(|l| l.style).collect();
        assert_eq!(
            styles,
            vec![
                LineStyle::Info,
                LineStyle::Success,
                LineStyle::Warning,
                LineStyle::Error,
                LineStyle::Plain,
                LineStyle::Plain,
            ]
        );
        assert_eq!(f.lines()[5].text, "x|unknown");
    }

    #[test]
    fn test_parse_keeps_pipes_in_text() {
        let f = Fragment::parse("i|Speed: 1 | Hash: MD5");
        assert_eq!(f.lines()[0].text, "Speed: 1 | Hash: MD5");
    }

    #[test]
    fn test_log_clear() {
        let mut log = OutputLog::new();
        log.push(OutputLine::plain("a"));
        log.extend(Fragment::new().info("b").error("c"));
        assert_eq!(log.len(), 3);

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_line_serializes_lowercase_style() {
        let json = serde_json::to_string(&OutputLine::warning("x")).unwrap();
        assert_eq!(json, r#"{"style":"warning","text":"x"}"#);
    }
}
