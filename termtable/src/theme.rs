use owo_colors::Style;

/// Controls how the even/odd styles of a [Theme] alternate across data cells.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Striping {
    /// Alternates by column index within each row, so every row looks the same.
    #[default]
    Columns,
    /// Alternates by row index, so each row has a single style.
    Rows,
}

/// Presentation of a [crate::ReportTable]. Has no effect on the table's data.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub header: Style,
    pub even: Style,
    pub odd: Style,
    pub striping: Striping,
    /// When false, no escape sequences are emitted at all.
    pub colored: bool,
}

impl Theme {
    /// Creates a colored theme. The header style is always rendered bold.
    pub fn new(header: Style, even: Style, odd: Style) -> Self {
        Self {
            header: header.bold(),
            even,
            odd,
            striping: Striping::default(),
            colored: true,
        }
    }

    /// Theme that renders only the aligned text.
    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            even: Style::new(),
            odd: Style::new(),
            striping: Striping::default(),
            colored: false,
        }
    }

    pub fn with_striping(mut self, striping: Striping) -> Self {
        self.striping = striping;
        self
    }

    /// Style for the data cell at the given row and column indices.
    pub(crate) fn cell_style(&self, row_index: usize, column_index: usize) -> &Style {
        let index = match self.striping {
            Striping::Columns => column_index,
            Striping::Rows => row_index,
        };
        if index % 2 == 0 { &self.even } else { &self.odd }
    }

    pub(crate) fn paint(&self, style: &Style, text: &str) -> String {
        if self.colored {
            style.style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(
            Style::new().white().on_blue(),
            Style::new().white().on_bright_black(),
            Style::new().black().on_white(),
        )
    }
}
