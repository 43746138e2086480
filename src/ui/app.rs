use crate::core::{Effect, Outcome, ViewerState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Evolutions,
    Search,
}

/// Terminal-side state around the viewer: cursors, focus and quit flag.
pub struct App {
    pub viewer: ViewerState,
    pub list_state: ListState,
    pub evolution_cursor: usize,
    pub focus: Focus,
    pub should_quit: bool,
    pub artwork_base_url: String,
}

impl App {
    pub fn new(list_limit: usize, artwork_base_url: impl Into<String>) -> Self {
        Self {
            viewer: ViewerState::new(list_limit),
            list_state: ListState::default(),
            evolution_cursor: 0,
            focus: Focus::List,
            should_quit: false,
            artwork_base_url: artwork_base_url.into(),
        }
    }

    pub fn mount(&self) -> Effect {
        self.viewer.mount()
    }

    pub fn apply(&mut self, outcome: Outcome) -> Option<Effect> {
        let effect = self.viewer.apply(outcome);

        if self.list_state.selected().is_none() && !self.viewer.pokemons().is_empty() {
            self.list_state.select(Some(0));
        }
        self.clamp_evolution_cursor();

        effect
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return None;
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::List => self.handle_list_key(key),
            Focus::Evolutions => self.handle_evolution_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Effect> {
        let mut input = self.viewer.search_input().to_string();
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
                self.focus = Focus::List;
                None
            }
            KeyCode::Backspace => {
                input.pop();
                self.viewer.update_search(&input)
            }
            KeyCode::Char(c) => {
                input.push(c);
                self.viewer.update_search(&input)
            }
            _ => None,
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Option<Effect> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Tab => {
                if !self.viewer.evolutions().is_empty() {
                    self.focus = Focus::Evolutions;
                    self.evolution_cursor = 0;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Home => {
                if !self.viewer.pokemons().is_empty() {
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::End => {
                let len = self.viewer.pokemons().len();
                if len > 0 {
                    self.list_state.select(Some(len - 1));
                }
            }
            KeyCode::Enter => {
                let index = self.list_state.selected()?;
                return self.viewer.select_index(index);
            }
            _ => {}
        }
        None
    }

    fn handle_evolution_key(&mut self, key: KeyEvent) -> Option<Effect> {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Tab => self.focus = Focus::List,
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Right | KeyCode::Char('l') => {
                if self.evolution_cursor + 1 < self.viewer.evolutions().len() {
                    self.evolution_cursor += 1;
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.evolution_cursor = self.evolution_cursor.saturating_sub(1);
            }
            KeyCode::Enter => {
                let pokedex_id = self.viewer.evolutions().get(self.evolution_cursor)?.pokedex_id;
                return self.viewer.select_evolution(pokedex_id);
            }
            _ => {}
        }
        None
    }

    fn next(&mut self) {
        let len = self.viewer.pokemons().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous(&mut self) {
        let len = self.viewer.pokemons().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn clamp_evolution_cursor(&mut self) {
        let len = self.viewer.evolutions().len();
        if len == 0 {
            self.evolution_cursor = 0;
            if self.focus == Focus::Evolutions {
                self.focus = Focus::List;
            }
        } else if self.evolution_cursor >= len {
            self.evolution_cursor = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EvolutionStub, Pokemon};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn pokemon(id: u32, name: &str) -> Pokemon {
        Pokemon {
            pokedex_id: id,
            name: name.to_string(),
            image: format!("https://example.com/{}.png", id),
            types: vec![],
            evolutions: None,
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new(100, "https://art.example.com");
        app.apply(Outcome::ListLoaded(vec![
            pokemon(1, "Bulbizarre"),
            pokemon(2, "Herbizarre"),
            pokemon(3, "Florizarre"),
        ]));
        app
    }

    #[test]
    fn test_list_load_places_cursor() {
        let app = loaded_app();

        assert_eq!(app.list_state.selected(), Some(0));
        assert_eq!(app.viewer.current().name, "Bulbizarre");
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = loaded_app();

        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.list_state.selected(), Some(2));
        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.list_state.selected(), Some(0));
        app.handle_key(key(KeyCode::End));
        assert_eq!(app.list_state.selected(), Some(2));
    }

    #[test]
    fn test_enter_selects_highlighted_entry() {
        let mut app = loaded_app();

        app.handle_key(key(KeyCode::Down));
        let effect = app.handle_key(key(KeyCode::Enter));

        assert_eq!(effect, Some(Effect::FetchEvolutions { pokedex_id: 2 }));
        assert_eq!(app.viewer.current().name, "Herbizarre");
    }

    #[test]
    fn test_search_fires_per_keystroke() {
        let mut app = loaded_app();

        assert_eq!(app.handle_key(key(KeyCode::Char('/'))), None);
        assert_eq!(app.focus, Focus::Search);

        assert_eq!(app.handle_key(key(KeyCode::Char(' '))), None);
        assert_eq!(
            app.handle_key(key(KeyCode::Char('m'))),
            Some(Effect::Search {
                term: "M".to_string()
            })
        );
        assert_eq!(
            app.handle_key(key(KeyCode::Char('E'))),
            Some(Effect::Search {
                term: "Me".to_string()
            })
        );
        assert_eq!(
            app.handle_key(key(KeyCode::Backspace)),
            Some(Effect::Search {
                term: "M".to_string()
            })
        );
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.viewer.search_input(), " ");

        // 'q' is text while searching
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn test_evolution_focus_and_selection() {
        let mut app = loaded_app();

        // no chain yet
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::List);

        app.apply(Outcome::EvolutionsLoaded {
            pokedex_id: 1,
            evolutions: vec![
                EvolutionStub {
                    pokedex_id: 2,
                    name: "Herbizarre".to_string(),
                    image: None,
                },
                EvolutionStub {
                    pokedex_id: 3,
                    name: "Florizarre".to_string(),
                    image: None,
                },
            ],
        });

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Evolutions);
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.evolution_cursor, 1);

        let effect = app.handle_key(key(KeyCode::Enter));
        assert_eq!(effect, Some(Effect::FetchEvolutions { pokedex_id: 3 }));
        assert_eq!(app.viewer.current().name, "Florizarre");
    }

    #[test]
    fn test_focus_returns_to_list_when_chain_empties() {
        let mut app = loaded_app();
        app.apply(Outcome::EvolutionsLoaded {
            pokedex_id: 1,
            evolutions: vec![EvolutionStub {
                pokedex_id: 2,
                name: "Herbizarre".to_string(),
                image: None,
            }],
        });
        app.handle_key(key(KeyCode::Tab));

        app.apply(Outcome::EvolutionsFailed { pokedex_id: 1 });

        assert_eq!(app.focus, Focus::List);
        assert_eq!(app.evolution_cursor, 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = loaded_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
