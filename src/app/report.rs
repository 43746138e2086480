use crate::domain::model::{artwork_url, EvolutionStub, Pokemon, PLACEHOLDER_NAME};

/// Card label shared by the list and evolution views.
pub fn card_label(pokedex_id: u32, name: &str) -> String {
    format!("#{:03} {}", pokedex_id, name)
}

pub fn format_list(pokemons: &[Pokemon]) -> String {
    pokemons
        .iter()
        .map(|p| card_label(p.pokedex_id, &p.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_detail(pokemon: &Pokemon) -> String {
    if pokemon.is_placeholder() {
        return PLACEHOLDER_NAME.to_string();
    }

    let mut lines = vec![
        format!("n°{}", pokemon.pokedex_id),
        pokemon.name.clone(),
        format!("Image: {}", pokemon.image),
        "Types".to_string(),
    ];
    for pokemon_type in &pokemon.types {
        lines.push(format!("  - {} ({})", pokemon_type.name, pokemon_type.image));
    }
    lines.join("\n")
}

/// `None` when there is nothing to show; no empty section is rendered.
pub fn format_evolutions(evolutions: &[EvolutionStub], artwork_base_url: &str) -> Option<String> {
    if evolutions.is_empty() {
        return None;
    }

    let mut lines = vec!["Evolution".to_string()];
    for evolution in evolutions {
        lines.push(format!(
            "  {}  {}",
            card_label(evolution.pokedex_id, &evolution.name),
            artwork_url(artwork_base_url, evolution.pokedex_id)
        ));
    }
    Some(lines.join("\n"))
}
