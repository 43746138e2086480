use anyhow::Result;
use httpmock::prelude::*;
use pokedex::core::execute;
use pokedex::{Effect, Outcome, PokebuildClient, ViewerConfig, ViewerState};

fn client_for(server: &MockServer) -> Result<PokebuildClient> {
    let mut config = ViewerConfig::default();
    config.api.base_url = server.url("/api/v1");
    Ok(PokebuildClient::new(&config)?)
}

fn list_body() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1, "pokedexId": 1, "name": "Bulbizarre",
            "image": "https://img.example.com/1.png",
            "apiTypes": [
                {"name": "Plante", "image": "https://img.example.com/plante.png"},
                {"name": "Poison", "image": "https://img.example.com/poison.png"}
            ],
            "apiEvolutions": [{"name": "Herbizarre", "pokedexId": 2}]
        },
        {
            "id": 4, "pokedexId": 4, "name": "Salamèche",
            "image": "https://img.example.com/4.png",
            "apiTypes": [{"name": "Feu", "image": "https://img.example.com/feu.png"}],
            "apiEvolutions": [{"name": "Reptincel", "pokedexId": 5}]
        }
    ])
}

fn detail_body(id: u32, name: &str, evolutions: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "id": id, "pokedexId": id, "name": name,
        "image": format!("https://img.example.com/{}.png", id),
        "apiTypes": [{"name": "Normal", "image": "https://img.example.com/normal.png"}],
        "apiEvolutions": evolutions
    })
}

/// Runs effects until the state stops asking for more, like the UI loop does.
async fn settle(client: &PokebuildClient, state: &mut ViewerState, effect: Effect) {
    let mut next = Some(effect);
    while let Some(effect) = next {
        let outcome = execute(client, effect).await;
        next = state.apply(outcome);
    }
}

#[tokio::test]
async fn test_mount_loads_list_and_first_entry_chain() -> Result<()> {
    let server = MockServer::start_async().await;
    let list_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/pokemon/limit/100");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(list_body());
        })
        .await;
    let detail_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/pokemon/1");
            then.status(200).json_body(detail_body(
                1,
                "Bulbizarre",
                serde_json::json!([{"name": "Herbizarre", "pokedexId": 2}]),
            ));
        })
        .await;

    let client = client_for(&server)?;
    let mut state = ViewerState::new(100);
    let mount = state.mount();
    settle(&client, &mut state, mount).await;

    list_mock.assert_async().await;
    detail_mock.assert_async().await;
    assert_eq!(state.pokemons().len(), 2);
    assert_eq!(state.current().name, "Bulbizarre");
    assert_eq!(state.evolutions().len(), 1);
    assert_eq!(state.evolutions()[0].name, "Herbizarre");
    Ok(())
}

#[tokio::test]
async fn test_selecting_entry_updates_detail_and_chain() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/pokemon/4");
            then.status(200).json_body(detail_body(
                4,
                "Salamèche",
                serde_json::json!([{"name": "Reptincel", "pokedexId": 5}]),
            ));
        })
        .await;

    let client = client_for(&server)?;
    let mut state = ViewerState::new(100);
    let pokemons = serde_json::from_value(list_body())?;
    let _ = state.apply(Outcome::ListLoaded(pokemons));

    let effect = state.select_index(1).expect("new selection refetches the chain");
    settle(&client, &mut state, effect).await;

    assert_eq!(state.current().pokedex_id, 4);
    assert_eq!(state.current().name, "Salamèche");
    assert_eq!(state.current().image, "https://img.example.com/4.png");
    assert_eq!(state.current().types[0].name, "Feu");
    assert_eq!(state.evolutions()[0].name, "Reptincel");
    Ok(())
}

#[tokio::test]
async fn test_successful_search_replaces_detail() -> Result<()> {
    let server = MockServer::start_async().await;
    let search_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/pokemon/Pikachu");
            then.status(200).json_body(detail_body(
                25,
                "Pikachu",
                serde_json::json!([{"name": "Raichu", "pokedexId": 26}]),
            ));
        })
        .await;
    let chain_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/pokemon/25");
            then.status(200).json_body(detail_body(
                25,
                "Pikachu",
                serde_json::json!([{"name": "Raichu", "pokedexId": 26}]),
            ));
        })
        .await;

    let client = client_for(&server)?;
    let mut state = ViewerState::new(100);

    let effect = state.update_search("pikachu").expect("non-blank search");
    settle(&client, &mut state, effect).await;

    search_mock.assert_async().await;
    chain_mock.assert_async().await;
    assert_eq!(state.current().name, "Pikachu");
    assert_eq!(state.evolutions()[0].pokedex_id, 26);
    Ok(())
}

#[tokio::test]
async fn test_blank_search_sends_no_request() -> Result<()> {
    let server = MockServer::start_async().await;
    let any_request = server
        .mock_async(|when, then| {
            when.any_request();
            then.status(200).json_body(serde_json::json!({}));
        })
        .await;

    let mut state = ViewerState::new(100);

    assert_eq!(state.update_search(""), None);
    assert_eq!(state.update_search("   "), None);

    any_request.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn test_entry_without_evolutions_has_empty_chain() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/pokemon/Tauros");
            then.status(200).json_body(serde_json::json!({
                "pokedexId": 128, "name": "Tauros",
                "image": "https://img.example.com/128.png",
                "apiTypes": [{"name": "Normal", "image": "https://img.example.com/normal.png"}]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/pokemon/128");
            then.status(200).json_body(serde_json::json!({
                "pokedexId": 128, "name": "Tauros",
                "image": "https://img.example.com/128.png",
                "apiTypes": [],
                "apiEvolutions": []
            }));
        })
        .await;

    let client = client_for(&server)?;
    let mut state = ViewerState::new(100);

    let effect = state.update_search("tauros").expect("non-blank search");
    settle(&client, &mut state, effect).await;

    assert_eq!(state.current().name, "Tauros");
    assert!(state.evolutions().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_failed_fetches_leave_prior_state() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/pokemon/limit/100");
            then.status(500);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/pokemon/Missingno");
            then.status(404);
        })
        .await;

    let client = client_for(&server)?;
    let mut state = ViewerState::new(100);
    let pokemons = serde_json::from_value(list_body())?;
    let _ = state.apply(Outcome::ListLoaded(pokemons));
    let before = state.current().clone();

    let outcome = execute(&client, state.mount()).await;
    assert_eq!(outcome, Outcome::ListFailed);
    assert_eq!(state.apply(outcome), None);

    let search = state.update_search("missingno").expect("non-blank search");
    let outcome = execute(&client, search).await;
    assert!(matches!(outcome, Outcome::SearchFailed { .. }));
    assert_eq!(state.apply(outcome), None);

    assert_eq!(state.pokemons().len(), 2);
    assert_eq!(state.current(), &before);
    Ok(())
}
