use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use newsdesk_core::{AppViewModel, Msg, Screen};

use super::records::keyword_entries;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    Keywords,
    Articles,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Keywords,
            Focus::Keywords => Focus::Articles,
            Focus::Articles => Focus::Search,
        }
    }
}

/// Widget state of one results session. Replaced whenever the provider key changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultsScope {
    pub provider_key: u64,
    pub keyword_cursor: usize,
    pub article_cursor: usize,
}

/// Frontend-only state: the search box text, focus, and cursors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    pub input: String,
    pub focus: Focus,
    pub scope: ResultsScope,
}

impl UiState {
    /// Reconciles widget state with a fresh view model.
    pub fn sync(&mut self, view: &AppViewModel) {
        if view.provider_key != self.scope.provider_key {
            self.scope = ResultsScope {
                provider_key: view.provider_key,
                ..ResultsScope::default()
            };
            self.input.clear();
        }
        if view.screen == Screen::Landing {
            self.focus = Focus::Search;
        }

        let keyword_count = keyword_entries(view).len();
        self.scope.keyword_cursor = clamp_cursor(self.scope.keyword_cursor, keyword_count);
        self.scope.article_cursor = clamp_cursor(self.scope.article_cursor, view.results.len());
    }

    /// Maps a key press to a message for the core, updating local widget state on the way.
    pub fn handle_key(&mut self, key: KeyEvent, view: &AppViewModel) -> Option<Msg> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Some(Msg::QuitRequested),
            KeyCode::Esc => return Some(Msg::QuitRequested),
            KeyCode::Char('r') if ctrl && view.screen == Screen::Results => {
                return Some(Msg::LogoClicked);
            }
            KeyCode::Tab if view.screen == Screen::Results => {
                self.focus = self.focus.next();
                return None;
            }
            KeyCode::BackTab if view.screen == Screen::Results => {
                self.focus = self.focus.next().next();
                return None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key, ctrl),
            Focus::Keywords => self.handle_keyword_key(key, view),
            Focus::Articles => {
                self.scope.article_cursor =
                    move_cursor(self.scope.article_cursor, key.code, view.results.len());
                None
            }
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, ctrl: bool) -> Option<Msg> {
        match key.code {
            KeyCode::Enter => {
                let text = std::mem::take(&mut self.input);
                if text.trim().is_empty() {
                    None
                } else {
                    Some(Msg::SearchSubmitted(text))
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char('u') if ctrl => {
                self.input.clear();
                None
            }
            KeyCode::Char(c) if !ctrl => {
                self.input.push(c);
                None
            }
            _ => None,
        }
    }

    fn handle_keyword_key(&mut self, key: KeyEvent, view: &AppViewModel) -> Option<Msg> {
        let entries = keyword_entries(view);
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => entries
                .get(self.scope.keyword_cursor)
                .map(|entry| Msg::KeywordToggled(entry.keyword.clone())),
            code => {
                self.scope.keyword_cursor =
                    move_cursor(self.scope.keyword_cursor, code, entries.len());
                None
            }
        }
    }
}

fn move_cursor(cursor: usize, code: KeyCode, len: usize) -> usize {
    let next = match code {
        KeyCode::Up => cursor.saturating_sub(1),
        KeyCode::Down => cursor + 1,
        KeyCode::PageUp => cursor.saturating_sub(10),
        KeyCode::PageDown => cursor + 10,
        KeyCode::Home => 0,
        KeyCode::End => len.saturating_sub(1),
        _ => cursor,
    };
    clamp_cursor(next, len)
}

fn clamp_cursor(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}
