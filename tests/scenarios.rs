//! End-to-end browsing scenarios through the public API.

use marquee::query::{filter, sort};
use marquee::rotation::{resolve_hero, HeroRotation};
use marquee::{
    handle_event, initialize, Catalog, CatalogSource, Config, Event, GenreFilter, ItemId,
    JsonCatalogFile, MediaItem, Page, Runtime, SortKey,
};
use std::io::Write;
use std::time::Duration;

fn movie(id: u32, title: &str, rating: f32, year: i32, genre: &str, featured: bool) -> MediaItem {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": title,
        "description": format!("{title} description"),
        "poster": "",
        "backdrop": "",
        "rating": rating,
        "year": year,
        "duration": "2h",
        "genre": [genre],
        "cast": [],
        "director": "",
        "featured": featured,
    }))
    .unwrap()
}

fn dune_and_her() -> Vec<MediaItem> {
    vec![
        movie(1, "Dune", 8.0, 2021, "scifi", true),
        movie(2, "Her", 8.5, 2013, "drama", true),
    ]
}

fn ids(items: &[&MediaItem]) -> Vec<u32> {
    items.iter().map(|m| m.id.0).collect()
}

#[test]
fn query_selects_dune() {
    let catalog = dune_and_her();
    assert_eq!(ids(&filter(&catalog, "dune", &GenreFilter::All)), vec![1]);
}

#[test]
fn drama_selects_her() {
    let catalog = dune_and_her();
    assert_eq!(ids(&filter(&catalog, "", &GenreFilter::from("drama"))), vec![2]);
}

#[test]
fn rating_orders_her_first() {
    let catalog = dune_and_her();
    let all = filter(&catalog, "", &GenreFilter::All);
    assert_eq!(ids(&sort(&all, SortKey::Rating)), vec![2, 1]);
}

#[test]
fn selectors_survive_home_movies_home() {
    let catalog = Catalog::new(vec![], dune_and_her(), vec![]).unwrap();
    let mut state = marquee::AppState::new(catalog, marquee::Theme::default());

    handle_event(&mut state, &Event::SearchChanged("e".into())).unwrap();
    handle_event(&mut state, &Event::GenreSelected("drama".into())).unwrap();

    handle_event(&mut state, &Event::PageChanged(Page::MoviesListing)).unwrap();
    assert_eq!(state.search_query, "e");
    assert_eq!(state.genre_filter, GenreFilter::from("drama"));

    handle_event(&mut state, &Event::PageChanged(Page::Home)).unwrap();
    assert_eq!(state.search_query, "e");
    assert_eq!(state.genre_filter, GenreFilter::from("drama"));
    assert_eq!(state.current_page, Page::Home);
}

#[test]
fn rotation_wraps_after_n_ticks() {
    let catalog = dune_and_her();
    let featured: Vec<&MediaItem> = catalog.iter().filter(|m| m.featured).collect();

    let mut rotation = HeroRotation::new(0);
    for _ in 0..featured.len() {
        rotation.advance(featured.len());
    }
    assert_eq!(rotation.index(), 0);
    assert_eq!(resolve_hero(&featured, &catalog, rotation.index()).map(|m| m.id.0), Some(1));
}

#[test]
fn hero_without_featured_is_first_movie() {
    let catalog = vec![movie(9, "Heat", 8.3, 1995, "crime", false)];
    assert_eq!(resolve_hero(&[], &catalog, 5).map(|m| m.id.0), Some(9));
    assert!(resolve_hero(&[], &[], 0).is_none());
}

#[test]
fn catalog_file_drives_runtime() {
    let json = serde_json::json!({
        "genres": [{ "id": "all", "name": "All" }, { "id": "drama", "name": "Drama" }],
        "movies": dune_and_her(),
        "shows": [movie(50, "Dark", 8.7, 2017, "scifi", false)],
    });
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.to_string().as_bytes()).unwrap();

    let loaded = JsonCatalogFile::new(file.path()).load().unwrap();
    assert_eq!(loaded.shows.len(), 1);

    let config = Config {
        catalog_file: Some(file.path().to_string_lossy().into_owned()),
        rotation_interval_ms: 10,
        ..Config::default()
    };
    let state = initialize(&config).unwrap();
    let mut runtime = Runtime::new(state, config.rotation_interval()).unwrap();

    let tick = runtime.next_event(Duration::from_secs(2)).unwrap();
    assert!(runtime.dispatch(&tick).unwrap());
    assert_eq!(runtime.state().hero_item().map(|m| m.id.0), Some(2));

    runtime.dispatch(&Event::PageChanged(Page::TvListing)).unwrap();
    assert_eq!(runtime.timer_generation(), None);
    assert!(runtime.state().hero_item().is_none());
    assert_eq!(ids(&runtime.state().visible_items()), vec![50]);

    runtime.dispatch(&Event::ItemSelected(ItemId(50))).unwrap();
    assert!(!runtime.state().is_overlay_open());

    runtime.dispatch(&Event::PageChanged(Page::Home)).unwrap();
    assert_eq!(runtime.timer_generation(), Some(1));
    assert_eq!(runtime.state().hero_item().map(|m| m.id.0), Some(1));

    runtime.dispatch(&Event::Quit).unwrap();
    assert!(!runtime.is_running());
}
