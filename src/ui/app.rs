//! Terminal UI for the plan builder
//!
//! One table row per configurable axis, a collapsible benefits panel for the
//! selected base plan and a footer with the running total.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::format::format_amount;
use crate::session::{Action, Session};

const EXTRA_DATA_PAGE: u32 = 10;

/// What a table row edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Base,
    ExtraData,
    /// Index into the catalog's categories
    Category(usize),
    SpendCap,
    Confirm,
}

/// Application state for the builder screen
pub struct BuilderApp {
    pub session: Session,
    pub currency: String,
    pub cursor: usize,
    pub error_message: Option<String>,
}

impl BuilderApp {
    pub fn new(session: Session, currency: impl Into<String>) -> Self {
        Self {
            session,
            currency: currency.into(),
            cursor: 0,
            error_message: None,
        }
    }

    pub fn rows(&self) -> Vec<RowKind> {
        let mut rows = vec![RowKind::Base, RowKind::ExtraData];
        rows.extend((0..self.session.catalog().categories.len()).map(RowKind::Category));
        rows.push(RowKind::SpendCap);
        rows.push(RowKind::Confirm);
        rows
    }

    pub fn current_row(&self) -> RowKind {
        let rows = self.rows();
        rows[self.cursor.min(rows.len() - 1)]
    }

    /// Handle keyboard input; returns true when the user quits
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let row_count = self.rows().len();

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.checked_sub(1).unwrap_or(row_count - 1);
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.cursor = (self.cursor + 1) % row_count;
            }
            KeyCode::Left | KeyCode::Char('h') => self.adjust(false, 1),
            KeyCode::Right | KeyCode::Char('l') => self.adjust(true, 1),
            KeyCode::PageDown => self.adjust(false, EXTRA_DATA_PAGE),
            KeyCode::PageUp => self.adjust(true, EXTRA_DATA_PAGE),
            KeyCode::Char(' ') => self.toggle(),
            KeyCode::Char('d') | KeyCode::Char('D') => self.dispatch(Action::ToggleBaseDetails),
            KeyCode::Enter => self.dispatch(Action::Confirm),
            _ => {}
        }
        false
    }

    fn adjust(&mut self, forward: bool, amount: u32) {
        let action = match self.current_row() {
            RowKind::Base => {
                let plans = &self.session.catalog().base_plans;
                let current = plans
                    .iter()
                    .position(|p| p.id == self.session.config().base)
                    .unwrap_or(0);
                let next = cycle(plans.len(), current, forward);
                Action::SelectBase(plans[next].id.clone())
            }
            RowKind::ExtraData => {
                let gb = self.session.config().extra_data_gb;
                Action::SetExtraData(if forward {
                    gb.saturating_add(amount)
                } else {
                    gb.saturating_sub(amount)
                })
            }
            RowKind::Category(idx) => {
                let category = &self.session.catalog().categories[idx];
                // The option picker is locked while its category is off
                let Some(axis) = self
                    .session
                    .config()
                    .axis(&category.key)
                    .filter(|a| a.enabled)
                else {
                    return;
                };
                let selected = axis.selected.as_str();
                let current = category
                    .options
                    .iter()
                    .position(|o| o.id == selected)
                    .unwrap_or(0);
                let next = cycle(category.options.len(), current, forward);
                Action::SelectOption {
                    category: category.key.clone(),
                    option: category.options[next].id.clone(),
                }
            }
            RowKind::SpendCap => {
                let cap = self.session.config().spend_cap;
                let step = self.session.catalog().spend_cap.step;
                Action::SetSpendCap(if forward {
                    cap.saturating_add(step)
                } else {
                    cap.saturating_sub(step)
                })
            }
            RowKind::Confirm => return,
        };

        self.dispatch(action);
    }

    fn toggle(&mut self) {
        let action = match self.current_row() {
            RowKind::Base => Action::ToggleBaseDetails,
            RowKind::Category(idx) => {
                let key = self.session.catalog().categories[idx].key.clone();
                let enabled = self
                    .session
                    .config()
                    .axis(&key)
                    .map(|a| a.enabled)
                    .unwrap_or(false);
                Action::SetEnabled {
                    category: key,
                    enabled: !enabled,
                }
            }
            RowKind::Confirm => Action::Confirm,
            RowKind::ExtraData | RowKind::SpendCap => return,
        };

        self.dispatch(action);
    }

    fn dispatch(&mut self, action: Action) {
        match self.session.apply(action) {
            Ok(_) => self.error_message = None,
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    fn money(&self, n: u64) -> String {
        format_amount(&self.currency, n)
    }

    /// Render the UI
    pub fn render(&self, f: &mut Frame) {
        let details_height = if self.session.view().show_base_details {
            let benefits = self
                .session
                .catalog()
                .base_plan(&self.session.config().base)
                .map(|p| p.benefits.len())
                .unwrap_or(0);
            benefits as u16 + 2
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),              // Header
                Constraint::Length(details_height), // Base plan details
                Constraint::Min(10),                // Table
                Constraint::Length(4),              // Footer
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        if details_height > 0 {
            self.render_details(f, chunks[1]);
        }
        self.render_table(f, chunks[2]);
        self.render_footer(f, chunks[3]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let title = vec![
            Line::from(vec![
                Span::styled(
                    "Build Your ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "Flexi-Postpaid Plan",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "↑/↓ move | ←/→ change | space toggle | d details | enter confirm | q quit",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_details(&self, f: &mut Frame, area: Rect) {
        let Some(plan) = self
            .session
            .catalog()
            .base_plan(&self.session.config().base)
        else {
            return;
        };

        let lines: Vec<Line> = plan
            .benefits
            .iter()
            .map(|b| {
                Line::from(vec![
                    Span::styled("✓ ", Style::default().fg(Color::Green)),
                    Span::raw(b.clone()),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} · Included in this plan", plan.name)),
        );
        f.render_widget(paragraph, area);
    }

    fn render_table(&self, f: &mut Frame, area: Rect) {
        let header_cells = ["Item", "Selection", "Price", "Status"].iter().map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let catalog = self.session.catalog();
        let config = self.session.config();
        let quote = self.session.quote();

        let rows: Vec<Row> = self
            .rows()
            .into_iter()
            .enumerate()
            .map(|(idx, kind)| {
                let cells = match kind {
                    RowKind::Base => vec![
                        Cell::from("Base Rental"),
                        Cell::from(quote.base_name.clone()),
                        Cell::from(self.money(u64::from(quote.base_price))),
                        Cell::from(if self.session.view().show_base_details {
                            "details shown"
                        } else {
                            ""
                        }),
                    ],
                    RowKind::ExtraData => vec![
                        Cell::from(format!(
                            "Extra Data ({}/GB)",
                            self.money(u64::from(catalog.extra_data.rate_per_gb))
                        )),
                        Cell::from(format!("{} GB", config.extra_data_gb)),
                        Cell::from(format!("+{}", self.money(quote.extra_data_price))),
                        Cell::from(""),
                    ],
                    RowKind::Category(i) => {
                        let key = &catalog.categories[i].key;
                        match quote.items.iter().find(|item| &item.category == key) {
                            Some(item) => vec![
                                Cell::from(item.label.clone()),
                                if item.enabled {
                                    Cell::from(item.option_label.clone())
                                } else {
                                    Cell::from(item.option_label.clone())
                                        .style(Style::default().fg(Color::DarkGray))
                                },
                                Cell::from(self.money(u64::from(item.price))),
                                if item.enabled {
                                    Cell::from("ON").style(Style::default().fg(Color::Green))
                                } else {
                                    Cell::from("off").style(Style::default().fg(Color::DarkGray))
                                },
                            ],
                            None => vec![Cell::from(catalog.categories[i].label.clone())],
                        }
                    }
                    RowKind::SpendCap => vec![
                        Cell::from("Monthly Spend Cap"),
                        Cell::from(self.money(u64::from(config.spend_cap))),
                        Cell::from(""),
                        Cell::from("display only").style(Style::default().fg(Color::DarkGray)),
                    ],
                    RowKind::Confirm => vec![
                        Cell::from("Confirm Plan & Activate").style(
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        ),
                        Cell::from(""),
                        Cell::from(format!("{}/mo", self.money(quote.total))),
                        Cell::from(match &self.session.view().confirmation {
                            Some(c) => format!("confirmed {}", c.at.format("%H:%M:%S")),
                            None => String::new(),
                        }),
                    ],
                };

                let style = if idx == self.cursor {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Row::new(cells).height(1).style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(28),
                Constraint::Percentage(40),
                Constraint::Percentage(14),
                Constraint::Percentage(18),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Choose Bundles"))
        .column_spacing(1);

        f.render_widget(table, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let total_line = Line::from(vec![
            Span::styled("Total: ", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{}/mo", self.money(self.session.total())),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);

        let status_line = match (&self.error_message, &self.session.view().confirmation) {
            (Some(error), _) => Line::from(Span::styled(
                format!("Error: {}", error),
                Style::default().fg(Color::Red),
            )),
            (None, Some(c)) => Line::from(Span::styled(
                format!("Plan confirmed at {}/mo", self.money(c.total)),
                Style::default().fg(Color::Green),
            )),
            (None, None) => Line::from(Span::styled(
                format!(
                    "{} add-ons active",
                    self.session.quote().active_items().count()
                ),
                Style::default().fg(Color::DarkGray),
            )),
        };

        let paragraph =
            Paragraph::new(vec![total_line, status_line]).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

/// Step an index through `0..len`, wrapping at both ends
fn cycle(len: usize, current: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}
