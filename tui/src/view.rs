use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Cell;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Row;
use ratatui::widgets::StatefulWidget;
use ratatui::widgets::Table;
use ratatui::widgets::TableState;
use ratatui::widgets::Widget;
use ratatui::widgets::Wrap;
use stockroom_core::catalog::EditorSnapshot;
use stockroom_core::catalog::RowAction;
use stockroom_core::catalog::ScreenSnapshot;

/// Renders one frame of the catalog screen: the product table plus, when a
/// session is open, the record editor modal on top of it.
pub struct CatalogView<'a> {
    snapshot: &'a ScreenSnapshot,
}

impl<'a> CatalogView<'a> {
    pub fn new(snapshot: &'a ScreenSnapshot) -> Self {
        Self { snapshot }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::from("Product").bold()];
        spans.push(Span::raw("  "));
        spans.push(Span::from(format!("role: {}", self.snapshot.role)).cyan());
        if self.snapshot.capabilities.can_create {
            spans.push(Span::raw("  "));
            spans.push(Span::from("[a] Add Product").green());
        }
        let block = styled_block("Stockroom", false);
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(Line::from(spans)).render(inner, buf);
    }

    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        let block = styled_block("Catalog", self.snapshot.editor.is_none());
        let inner = block.inner(area);
        block.render(area, buf);

        if !self.snapshot.loaded {
            Paragraph::new(Line::from("Loading products...".dim())).render(inner, buf);
            return;
        }
        if self.snapshot.rows.is_empty() {
            Paragraph::new(Line::from("No products in the catalog".dim())).render(inner, buf);
            return;
        }

        let header = Row::new(
            ["Id", "Name", "Category", "Price", "Quantity", "Actions"]
                .into_iter()
                .map(|title| Cell::from(title.bold())),
        );
        let rows = self.snapshot.rows.iter().map(|row| {
            Row::new(vec![
                Cell::from(row.id.to_string()),
                Cell::from(row.name.clone()),
                Cell::from(row.category.clone()),
                Cell::from(row.price.clone()),
                Cell::from(row.quantity.clone()),
                Cell::from(actions_cell(&row.actions)),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Min(12),
                Constraint::Length(14),
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Length(20),
            ],
        )
        .header(header)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = TableState::default();
        state.select(self.snapshot.selected_row);
        StatefulWidget::render(table, inner, buf, &mut state);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();
        if self.snapshot.status_messages.is_empty() {
            lines.push(Line::from(hint_line(self.snapshot).dim()));
        } else {
            for status in &self.snapshot.status_messages {
                lines.push(Line::from(status.clone().yellow()));
            }
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_modal(&self, editor: &EditorSnapshot, area: Rect, buf: &mut Buffer) {
        let modal = centered_rect(area, 52, 21);
        Clear.render(modal, buf);
        let block = styled_block(editor.title.as_str(), true);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let mut constraints = Vec::new();
        for _ in &editor.fields {
            constraints.push(Constraint::Length(3));
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Min(0));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (idx, field) in editor.fields.iter().enumerate() {
            let border_style = if field.focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if field.read_only {
                Style::default().add_modifier(Modifier::DIM)
            } else {
                Style::default()
            };
            let field_block = Block::default()
                .title(Span::styled(format!(" {} ", field.label), border_style))
                .borders(Borders::ALL)
                .border_style(border_style);
            let field_inner = field_block.inner(chunks[idx * 2]);
            field_block.render(chunks[idx * 2], buf);

            let value: Line = if field.value.is_empty() && !field.read_only {
                Line::from(field.placeholder.italic().dim())
            } else {
                Line::from(field.value.clone())
            };
            Paragraph::new(value).render(field_inner, buf);

            if let Some(issue) = &field.issue {
                Paragraph::new(Line::from(issue.clone().red())).render(chunks[idx * 2 + 1], buf);
            }
        }

        if editor.show_footer {
            let footer = Line::from(vec![
                Span::from("[Esc] Cancel").dim(),
                Span::raw("   "),
                Span::from(format!("[Enter] {}", editor.submit_label)).green().bold(),
            ]);
            let last = chunks[chunks.len() - 1];
            Paragraph::new(footer).render(last, buf);
        }
    }
}

impl<'a> Widget for CatalogView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height <= 6 || area.width <= 30 {
            return;
        }
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(2),
            ])
            .split(area);

        self.render_header(layout[0], buf);
        self.render_table(layout[1], buf);
        self.render_footer(layout[2], buf);

        if let Some(editor) = &self.snapshot.editor {
            self.render_modal(editor, area, buf);
        }
    }
}

fn actions_cell(actions: &[RowAction]) -> String {
    actions
        .iter()
        .map(|action| action.label())
        .collect::<Vec<_>>()
        .join(" / ")
}

fn hint_line(snapshot: &ScreenSnapshot) -> String {
    let mut hints = vec!["j/k select", "v view"];
    if snapshot.capabilities.can_edit {
        hints.push("e edit");
        hints.push("a add");
    }
    if snapshot.capabilities.can_delete {
        hints.push("d delete");
    }
    hints.push("r reload");
    hints.push("q quit");
    hints.join("  |  ")
}

fn styled_block<'a>(title: &'a str, focused: bool) -> Block<'a> {
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Block::default()
        .title(Span::styled(format!(" {title} "), style))
        .borders(Borders::ALL)
        .border_style(style)
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}
