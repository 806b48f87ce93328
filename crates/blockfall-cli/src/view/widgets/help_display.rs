use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// One-line legend of `(keys, action)` pairs.
#[derive(Debug)]
pub struct HelpDisplay<'a> {
    bindings: &'a [(&'a [&'a str], &'a str)],
}

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);
const ACTION_STYLE: Style = Style::new().fg(Color::Gray);

impl<'a> HelpDisplay<'a> {
    pub fn new(bindings: &'a [(&'a [&'a str], &'a str)]) -> Self {
        Self { bindings }
    }

    fn line(&self) -> Line<'a> {
        let mut spans = vec![];
        for (i, (keys, action)) in self.bindings.iter().copied().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", SEPARATOR_STYLE));
            }
            let keys = keys.join("/");
            spans.push(Span::styled(keys, KEY_STYLE));
            spans.push(Span::styled(format!(" {action}"), ACTION_STYLE));
        }
        Line::from(spans).centered()
    }
}

impl Widget for HelpDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.line().render(area, buf);
    }
}
