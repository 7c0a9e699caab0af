//! Model list widget

use crate::catalog::ModelDescriptor;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Widget for displaying the model catalog as a selectable list.
///
/// Rows appear in catalog order; the row index is the positional key the
/// detail route is built from, so no sorting or filtering happens here.
#[derive(Debug)]
pub struct Widget<'a> {
    models: &'a [ModelDescriptor],
    selected: usize,
    title: String,
}

impl<'a> Widget<'a> {
    /// Create a new model list widget
    #[must_use]
    pub fn new(models: &'a [ModelDescriptor], selected: usize) -> Self {
        Self {
            models,
            selected,
            title: format!(" Models ({}) ", models.len()),
        }
    }

    /// Set a custom title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Convert to a List widget
    #[must_use]
    pub fn to_list(&self) -> List<'a> {
        let items: Vec<ListItem<'_>> = self
            .models
            .iter()
            .enumerate()
            .map(|(i, model)| self.render_item(i, model))
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(self.title.clone())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    }

    fn render_item(&self, index: usize, model: &ModelDescriptor) -> ListItem<'a> {
        let style = if index == self.selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let content = Line::from(vec![
            Span::styled(model.name.clone(), style),
            Span::styled(
                format!("  ({})", model.source),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        ListItem::new(content).style(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ModelId;

    fn test_models() -> Vec<ModelDescriptor> {
        vec![
            ModelDescriptor {
                id: ModelId::Number(1),
                name: "Sandpile".to_string(),
                source: "sandpile.py".to_string(),
                doc: "desc1".to_string(),
            },
            ModelDescriptor {
                id: ModelId::Number(2),
                name: "Conway".to_string(),
                source: "life.py".to_string(),
                doc: "desc2".to_string(),
            },
        ]
    }

    #[test]
    fn test_model_list_widget_new() {
        let models = test_models();
        let widget = Widget::new(&models, 0);
        assert!(widget.title.contains('2'));
    }

    #[test]
    fn test_model_list_widget_title() {
        let models = test_models();
        let widget = Widget::new(&models, 0).title("Custom Title");
        assert_eq!(widget.title, "Custom Title");
    }

    #[test]
    fn test_to_list() {
        let models = test_models();
        let widget = Widget::new(&models, 1);
        let _list = widget.to_list();
    }
}
