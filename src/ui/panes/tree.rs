//! Syntax tree pane rendering
//!
//! One row per node in pre-order. Reduced nodes show their value, the node
//! reduced in the current step is highlighted, and the node that failed to
//! reduce (if any) is drawn in the error colour.

use crate::parser::ast::{NodeId, TreeLine};
use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Scroll state for the tree pane
pub struct TreeScrollState {
    pub offset: usize,
    /// Node the view was last centred on; re-centre when it changes
    pub followed_node: Option<NodeId>,
}

impl TreeScrollState {
    pub fn new() -> Self {
        TreeScrollState {
            offset: 0,
            followed_node: None,
        }
    }
}

impl Default for TreeScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Data needed to render the tree pane
pub struct TreeRenderData<'a> {
    pub lines: &'a [TreeLine],
    pub snapshot: Option<&'a Snapshot>,
    pub error_node: Option<NodeId>,
}

/// Render the tree pane
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    data: TreeRenderData,
    is_focused: bool,
    scroll_state: &mut TreeScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Syntax Tree ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let current = data.snapshot.and_then(|s| s.node);
    let total_items = data.lines.len();
    // Account for borders, min 1
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Bring the current node into view when the step changes
    if current != scroll_state.followed_node {
        if let Some(id) = current {
            if id < scroll_state.offset || id >= scroll_state.offset + visible_height {
                scroll_state.offset = id.saturating_sub(visible_height / 2);
            }
        }
        scroll_state.followed_node = current;
    }

    if total_items > visible_height {
        scroll_state.offset = scroll_state.offset.min(total_items - visible_height);
    } else {
        scroll_state.offset = 0;
    }

    let items: Vec<ListItem> = data
        .lines
        .iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|line| {
            let is_current = Some(line.id) == current;
            let is_error = Some(line.id) == data.error_node;

            let label_style = if is_error {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            let mut spans = vec![
                Span::styled(
                    if is_current { "▶ " } else { "  " },
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
                Span::raw("  ".repeat(line.depth)),
                Span::styled(line.label.clone(), label_style),
            ];

            if let Some(value) = data.snapshot.and_then(|s| s.value_of(line.id)) {
                spans.push(Span::styled(
                    format!("  = {}", value),
                    Style::default().fg(DEFAULT_THEME.success),
                ));
            }

            let item = ListItem::new(Line::from(spans));
            if is_current {
                item.style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
