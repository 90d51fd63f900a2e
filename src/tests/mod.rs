use crate::api::models::{CharacterDetail, CharacterPage};
use crate::api::ApiError;
use crate::browser::{Command, Options, Session};

const SAMPLE_PAGE: &str = r#"{
    "info": {
        "count": 826,
        "pages": 42,
        "next": "https://rickandmortyapi.com/api/character/?page=2",
        "prev": null
    },
    "results": [
        {
            "id": 1,
            "name": "Rick Sanchez",
            "status": "Alive",
            "species": "Human",
            "gender": "Male",
            "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
            "url": "https://rickandmortyapi.com/api/character/1"
        },
        {
            "id": 2,
            "name": "Morty Smith",
            "status": "Alive",
            "species": "Human",
            "gender": "Male",
            "image": "https://rickandmortyapi.com/api/character/avatar/2.jpeg",
            "url": "https://rickandmortyapi.com/api/character/2"
        }
    ]
}"#;

const LAST_PAGE: &str = r#"{
    "info": {"count": 1, "pages": 1, "next": null, "prev": null},
    "results": [
        {
            "id": 8,
            "name": "Adjudicator Rick",
            "status": "Dead",
            "species": "Human",
            "gender": "Male",
            "image": "https://rickandmortyapi.com/api/character/avatar/8.jpeg",
            "url": "https://rickandmortyapi.com/api/character/8"
        }
    ]
}"#;

const SAMPLE_DETAIL: &str = r#"{
    "id": 1,
    "name": "Rick Sanchez",
    "status": "Alive",
    "species": "Human",
    "gender": "Male",
    "origin": {"name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1"},
    "location": {"name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3"},
    "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
    "episode": [
        "https://rickandmortyapi.com/api/episode/1",
        "https://rickandmortyapi.com/api/episode/2"
    ],
    "url": "https://rickandmortyapi.com/api/character/1"
}"#;

fn page(json: &str) -> CharacterPage {
    serde_json::from_str(json).unwrap()
}

fn session() -> Session {
    Session::new(Options::default()).unwrap()
}

#[test]
fn search_url_always_carries_the_name_parameter() {
    let url = crate::utils::build_search_url("https://rickandmortyapi.com/api", "rick", "", "");
    assert_eq!(
        url,
        "https://rickandmortyapi.com/api/character/?name=rick"
    );
}

#[test]
fn search_url_appends_status_and_species_when_set() {
    let url =
        crate::utils::build_search_url("https://rickandmortyapi.com/api", "rick", "alive", "human");
    assert_eq!(
        url,
        "https://rickandmortyapi.com/api/character/?name=rick&status=alive&species=human"
    );
}

#[test]
fn search_url_tolerates_trailing_slash_on_base() {
    let url = crate::utils::build_search_url("https://example.com/api/", "", "", "");
    assert_eq!(url, "https://example.com/api/character/?name=");
}

#[test]
fn episode_id_takes_the_segment_after_the_marker() {
    assert_eq!(
        crate::utils::episode_id("https://rickandmortyapi.com/api/episode/12"),
        "12"
    );
}

#[test]
fn episode_id_passes_through_urls_without_the_marker() {
    assert_eq!(crate::utils::episode_id("12"), "12");
}

#[test]
fn episode_ids_join_with_comma_and_space() {
    let urls = vec![
        "https://rickandmortyapi.com/api/episode/1".to_string(),
        "https://rickandmortyapi.com/api/episode/2".to_string(),
    ];
    assert_eq!(crate::utils::join_episode_ids(&urls), "1, 2");
}

#[test]
fn page_with_next_url_enables_load_more() {
    let mut s = session();
    s.apply_page(page(SAMPLE_PAGE), true);
    assert!(s.can_load_more());
    assert_eq!(
        s.next_page(),
        Some("https://rickandmortyapi.com/api/character/?page=2")
    );
}

#[test]
fn page_with_null_next_keeps_load_more_hidden() {
    let mut s = session();
    s.apply_page(page(LAST_PAGE), true);
    assert!(!s.can_load_more());
}

#[test]
fn loading_more_appends_without_clearing() {
    let mut s = session();
    s.apply_page(page(SAMPLE_PAGE), true);
    assert_eq!(s.items().len(), 2);
    let first = s.apply_page(page(LAST_PAGE), false);
    assert_eq!(first, 2);
    assert_eq!(s.items().len(), 3);
    assert_eq!(s.items()[2].name, "Adjudicator Rick");
}

#[test]
fn fresh_search_clears_existing_items() {
    let mut s = session();
    s.apply_page(page(SAMPLE_PAGE), true);
    s.apply_page(page(LAST_PAGE), true);
    assert_eq!(s.items().len(), 1);
}

#[test]
fn failure_clears_the_cursor_and_halts_pagination() {
    let mut s = session();
    s.apply_page(page(SAMPLE_PAGE), true);
    assert!(s.can_load_more());
    s.apply_failure();
    assert!(!s.can_load_more());
    // items already rendered stay
    assert_eq!(s.items().len(), 2);
}

#[test]
fn not_found_and_server_error_share_the_empty_state_path() {
    assert_eq!(
        crate::output::empty_state(&ApiError::NotFound),
        "No results for this search"
    );
    assert_eq!(
        crate::output::empty_state(&ApiError::Http { status: 500 }),
        "Error HTTP: 500"
    );
}

#[test]
fn detail_card_renders_all_seven_fields_and_episode_ids() {
    colored::control::set_override(false);
    let detail: CharacterDetail = serde_json::from_str(SAMPLE_DETAIL).unwrap();
    let card = crate::output::format_detail(&detail);
    assert!(card.contains("Rick Sanchez"));
    assert!(card.contains("Male"));
    assert!(card.contains("Human"));
    assert!(card.contains("Alive"));
    assert!(card.contains("Citadel of Ricks"));
    assert!(card.contains("Earth (C-137)"));
    assert!(card.contains("1, 2"));
    colored::control::unset_override();
}

#[test]
fn list_entry_shows_the_four_summary_fields() {
    colored::control::set_override(false);
    let p = page(SAMPLE_PAGE);
    let entry = crate::output::format_list_entry(1, &p.results[0]);
    assert!(entry.contains("[1]"));
    assert!(entry.contains("Rick Sanchez"));
    assert!(entry.contains("Male"));
    assert!(entry.contains("Human"));
    assert!(entry.contains("Alive"));
    colored::control::unset_override();
}

#[test]
fn commands_parse_from_input_lines() {
    assert_eq!(Command::parse("more"), Some(Command::More));
    assert_eq!(Command::parse("open 3"), Some(Command::Open(3)));
    assert_eq!(
        Command::parse("status alive"),
        Some(Command::Status("alive".to_string()))
    );
    assert_eq!(
        Command::parse("species human"),
        Some(Command::Species("human".to_string()))
    );
    assert_eq!(Command::parse("quit"), Some(Command::Quit));
    assert_eq!(Command::parse("list"), Some(Command::List));
}

#[test]
fn bare_text_is_a_name_search() {
    assert_eq!(
        Command::parse("rick"),
        Some(Command::Search("rick".to_string()))
    );
    assert_eq!(
        Command::parse("search "),
        Some(Command::Search(String::new()))
    );
}

#[test]
fn blank_and_malformed_input_parse_to_nothing() {
    assert_eq!(Command::parse("   "), None);
    assert_eq!(Command::parse("open x"), None);
}

#[test]
fn status_filter_validation_accepts_known_values_only() {
    assert!(crate::cli::validation::validate_status_filter("alive").is_ok());
    assert!(crate::cli::validation::validate_status_filter("Dead").is_ok());
    assert!(crate::cli::validation::validate_status_filter("unknown").is_ok());
    assert!(crate::cli::validation::validate_status_filter("zombie").is_err());
}

#[test]
fn config_file_parses_from_yaml() {
    let cfg: crate::config::ConfigFile = serde_yaml::from_str(
        "api_url: https://example.com/api\nstatus: alive\ntimeout: 5\nno_color: true\n",
    )
    .unwrap();
    assert_eq!(cfg.api_url.as_deref(), Some("https://example.com/api"));
    assert_eq!(cfg.status.as_deref(), Some("alive"));
    assert_eq!(cfg.timeout, Some(5));
    assert_eq!(cfg.no_color, Some(true));
}

#[tokio::test]
async fn load_more_without_a_cursor_is_a_no_op() {
    let mut s = session();
    s.apply_page(page(LAST_PAGE), true);
    s.load_more().await;
    assert_eq!(s.items().len(), 1);
    assert!(!s.can_load_more());
}

#[tokio::test]
async fn opening_an_out_of_range_entry_fetches_nothing() {
    let mut s = session();
    s.apply_page(page(LAST_PAGE), true);
    assert!(s.open(0).await.is_ok());
    assert!(s.open(5).await.is_ok());
}
