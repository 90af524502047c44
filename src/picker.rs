// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive snippet list drawn on stderr.
//!
//! Every edit to the query is handed to a [`LiveSearch`]; the draw loop polls
//! it and only ever shows the batch that belongs to the text in the prompt.

use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use std::io::{self, Write};
use std::time::Duration;

use linippet::fuzzy::{split_terms, Hit, LiveResults, LiveSearch};
use linippet::output::highlight_ranges;
use linippet::snippet::Snippet;

const TICK: Duration = Duration::from_millis(30);
const CURRENT_LABEL: &str = "> ";
const NO_CURRENT_LABEL: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Redraw,
    QueryChanged,
    Accept,
    Abort,
}

/// Query text, visible hits and selection, independent of the terminal.
#[derive(Debug)]
pub struct PickerState {
    query: String,
    /// Query the current `hits` were computed for
    shown_query: String,
    hits: Vec<Hit>,
    selected: usize,
    offset: usize,
    total: usize,
}

impl PickerState {
    pub fn new(total: usize, query: &str) -> Self {
        let mut state = Self {
            query: query.to_string(),
            shown_query: String::new(),
            hits: Vec::new(),
            selected: 0,
            offset: 0,
            total,
        };
        state.show_all();
        state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the list on screen was computed for the current prompt text
    pub fn is_current(&self) -> bool {
        self.shown_query == self.query
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => Action::Abort,
            KeyCode::Char('c') | KeyCode::Char('g') if ctrl => Action::Abort,
            KeyCode::Enter => Action::Accept,
            KeyCode::Up | KeyCode::BackTab => self.move_by(-1),
            KeyCode::Down | KeyCode::Tab => self.move_by(1),
            KeyCode::Char('p') | KeyCode::Char('k') if ctrl => self.move_by(-1),
            KeyCode::Char('n') | KeyCode::Char('j') if ctrl => self.move_by(1),
            KeyCode::Char('u') if ctrl => {
                if self.query.is_empty() {
                    return Action::None;
                }
                self.query.clear();
                Action::QueryChanged
            }
            KeyCode::Char('w') if ctrl => {
                let trimmed = self.query.trim_end().len();
                let cut = self.query[..trimmed]
                    .char_indices()
                    .rev()
                    .find(|(_, c)| c.is_whitespace())
                    .map(|(i, c)| i + c.len_utf8())
                    .unwrap_or(0);
                if cut == self.query.len() {
                    return Action::None;
                }
                self.query.truncate(cut);
                Action::QueryChanged
            }
            KeyCode::Backspace => {
                if self.query.pop().is_some() {
                    Action::QueryChanged
                } else {
                    Action::None
                }
            }
            KeyCode::Char(c) if !ctrl => {
                self.query.push(c);
                Action::QueryChanged
            }
            _ => Action::None,
        }
    }

    /// Apply a finished batch. Batches for any other query are ignored.
    pub fn apply(&mut self, results: LiveResults) -> bool {
        if results.query != self.query {
            return false;
        }
        if split_terms(&results.query).is_empty() {
            self.show_all();
        } else {
            self.hits = results.hits;
            self.shown_query = results.query;
        }
        self.selected = 0;
        self.offset = 0;
        true
    }

    /// Index into the snippet list of the highlighted row
    pub fn selected_index(&self) -> Option<usize> {
        self.hits.get(self.selected).map(|hit| hit.index)
    }

    /// Keep the selection inside a window of `rows` lines and return its start.
    pub fn scroll(&mut self, rows: usize) -> usize {
        let rows = rows.max(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + rows {
            self.offset = self.selected + 1 - rows;
        }
        self.offset
    }

    fn show_all(&mut self) {
        self.hits = (0..self.total)
            .map(|index| Hit {
                index,
                positions: Vec::new(),
                score: 0,
            })
            .collect();
        self.shown_query = self.query.clone();
        if !split_terms(&self.query).is_empty() {
            // Real results for a non-blank query are still pending.
            self.shown_query.clear();
        }
    }

    /// Move the selection, wrapping past either end of the list.
    fn move_by(&mut self, delta: isize) -> Action {
        let len = self.hits.len() as isize;
        if len == 0 {
            return Action::None;
        }
        let next = (self.selected as isize + delta).rem_euclid(len) as usize;
        if next == self.selected {
            return Action::None;
        }
        self.selected = next;
        Action::Redraw
    }
}

/// Restores the terminal however the picker exits
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stderr(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stderr(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Run the picker. Returns `None` when the user aborts.
pub fn run(snippets: Vec<Snippet>, initial_query: &str, prompt: &str) -> Result<Option<Snippet>> {
    let mut live = LiveSearch::new(snippets);
    let mut state = PickerState::new(live.snippets().len(), initial_query);
    live.submit(state.query());

    let _guard = TerminalGuard::enter()?;
    let mut stderr = io::stderr();
    let mut dirty = true;

    loop {
        if let Some(results) = live.poll() {
            dirty |= state.apply(results);
        }
        if dirty {
            draw(&mut stderr, &mut state, live.snippets(), prompt)?;
            dirty = false;
        }

        if !event::poll(TICK)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match state.handle_key(key) {
                Action::None => {}
                Action::Redraw => dirty = true,
                Action::QueryChanged => {
                    live.submit(state.query());
                    dirty = true;
                }
                Action::Accept => {
                    if !state.is_current() {
                        if let Some(results) = live.wait() {
                            state.apply(results);
                        }
                    }
                    let chosen = state.selected_index().map(|i| live.snippets()[i].clone());
                    tracing::debug!(
                        query = state.query(),
                        chosen = chosen.is_some(),
                        "picker accepted"
                    );
                    return Ok(chosen);
                }
                Action::Abort => return Ok(None),
            },
            Event::Resize(..) => dirty = true,
            _ => {}
        }
    }
}

fn draw(
    out: &mut impl Write,
    state: &mut PickerState,
    snippets: &[Snippet],
    prompt: &str,
) -> Result<()> {
    let (width, height) = terminal::size()?;
    let width = width as usize;
    let rows = (height as usize).saturating_sub(2);

    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    queue!(out, Print(truncate(&format!("{}{}", prompt, state.query()), width)))?;

    let counter = format!("  {}/{}", state.hits().len(), snippets.len());
    queue!(out, MoveTo(0, 1), Print(counter.dark_grey()))?;

    let offset = state.scroll(rows);
    let selected = state.selected();
    for (row, hit) in state.hits().iter().enumerate().skip(offset).take(rows) {
        let Some(snippet) = snippets.get(hit.index) else {
            continue;
        };
        let y = (row - offset + 2) as u16;
        let label = if row == selected { CURRENT_LABEL } else { NO_CURRENT_LABEL };
        queue!(out, MoveTo(0, y), Print(label))?;

        let text = truncate(&snippet.snippet, width.saturating_sub(label.len()));
        let mut cursor = 0;
        for (start, end) in highlight_ranges(text, &hit.positions) {
            queue!(out, Print(&text[cursor..start]), Print(text[start..end].green().bold()))?;
            cursor = end;
        }
        queue!(out, Print(&text[cursor..]))?;
    }

    out.flush()?;
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
