use crate::app::report::card_label;
use crate::domain::model::{artwork_url, PLACEHOLDER_NAME};
use crate::ui::app::{App, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub const SEARCH_PLACEHOLDER: &str = "Search a Pokémon by name or ID...";

pub fn render(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.size());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[0]);

    render_list(f, columns[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(columns[1]);

    render_search_bar(f, right[0], app);

    // The evolution section only takes space when there is a chain to show.
    if app.viewer.evolutions().is_empty() {
        render_detail(f, right[1], app);
    } else {
        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(6)])
            .split(right[1]);
        render_detail(f, body[0], app);
        render_evolutions(f, body[1], app);
    }

    render_status_bar(f, rows[1], app);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_list(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(app.focus == Focus::List))
        .title(format!(" Pokémon ({}) ", app.viewer.pokemons().len()));

    if app.viewer.pokemons().is_empty() {
        f.render_widget(Paragraph::new(PLACEHOLDER_NAME).block(block), area);
        return;
    }

    let current_id = app.viewer.current().pokedex_id;
    let items: Vec<ListItem> = app
        .viewer
        .pokemons()
        .iter()
        .map(|pokemon| {
            let marker = if pokemon.pokedex_id == current_id {
                Span::styled("● ", Style::default().fg(Color::Green))
            } else {
                Span::raw("  ")
            };
            ListItem::new(Line::from(vec![
                marker,
                Span::raw(card_label(pokemon.pokedex_id, &pokemon.name)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_search_bar(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Search;
    let input = app.viewer.search_input();

    let text = if input.is_empty() {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(input)
    };

    let search = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused))
            .title(" Search "),
    );
    f.render_widget(search, area);

    if focused {
        let offset = u16::try_from(input.chars().count()).unwrap_or(u16::MAX);
        let max_x = area.x + area.width.saturating_sub(2);
        f.set_cursor((area.x + 1).saturating_add(offset).min(max_x), area.y + 1);
    }
}

fn render_detail(f: &mut Frame, area: Rect, app: &App) {
    let pokemon = app.viewer.current();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(false))
        .title(" Detail ");

    if pokemon.is_placeholder() {
        f.render_widget(Paragraph::new(PLACEHOLDER_NAME).block(block), area);
        return;
    }

    let mut lines = vec![
        Line::from(Span::styled(
            format!("n°{}", pokemon.pokedex_id),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            pokemon.name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Image: {}", pokemon.image)),
        Line::from(""),
        Line::from(Span::styled(
            "Types",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let mut tags = Vec::new();
    for pokemon_type in &pokemon.types {
        tags.push(Span::styled(
            format!(" {} ", pokemon_type.name),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        tags.push(Span::raw(" "));
    }
    lines.push(Line::from(tags));
    for pokemon_type in &pokemon.types {
        lines.push(Line::from(Span::styled(
            format!("{}: {}", pokemon_type.name, pokemon_type.image),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let detail = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(detail, area);
}

fn render_evolutions(f: &mut Frame, area: Rect, app: &App) {
    let evolutions = app.viewer.evolutions();
    let focused = app.focus == Focus::Evolutions;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(" Evolution ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let count = evolutions.len() as u32;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (index, (evolution, card_area)) in evolutions.iter().zip(cards.iter()).enumerate() {
        let highlighted = focused && index == app.evolution_cursor;
        let title_style = if highlighted {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                card_label(evolution.pokedex_id, &evolution.name),
                title_style,
            )),
            Line::from(Span::styled(
                artwork_url(&app.artwork_base_url, evolution.pokedex_id),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(highlighted)),
        );
        f.render_widget(card, *card_area);
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.focus {
        Focus::List => "↑/↓ move  Enter select  / search  Tab switch pane  q quit",
        Focus::Evolutions => "←/→ move  Enter select  Tab back  / search  q quit",
        Focus::Search => "type to search  Esc done  Ctrl-C quit",
    };
    f.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray))),
        area,
    );
}
