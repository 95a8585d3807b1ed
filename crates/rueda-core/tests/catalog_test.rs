//! End-to-end tests over a realistic move document: ingestion followed by
//! selection and video resolution.

use rueda_core::{
    parse_moves, resolve_video, CategoryCatalog, CategoryFilter, CategoryId, Difficulty,
    DifficultyFilter, Selection, SelectionSummary, SortDirection, SortField,
};

const MOVES: &str = r#"[
    {
        "spanishName": " Sombrero ",
        "englishName": "Hat",
        "description": "Lead turns follower under both arms",
        "youtubeLink": "https://www.youtube.com/watch?v=ABC123&t=90",
        "difficulty": "2",
        "categoryId": "turn-complex"
    },
    {
        "spanishName": "Dame",
        "englishName": "Give me",
        "description": "Partner exchange",
        "youtubeLink": "",
        "difficulty": 1,
        "categoryId": "partner-exchange"
    },
    {
        "spanishName": "",
        "englishName": "   ",
        "description": "Orphan record",
        "difficulty": 3,
        "categoryId": "basic"
    },
    {
        "spanishName": "Ñongo",
        "englishName": "",
        "youtubeLink": "https://www.youtube.com/shorts/SHORT1?t=5",
        "difficulty": "three",
        "categoryId": "styling "
    },
    {
        "spanishName": "Abanico",
        "englishName": "Fan",
        "difficulty": 2,
        "categoryId": "mystery"
    }
]"#;

const CATEGORIES: &str = r#"[
    {"id": "basic", "name": "Basic Moves", "description": "Foundations"},
    {"id": "turn-complex", "name": "Complex Turns", "description": ""},
    {"id": "partner-exchange", "name": "Partner Exchanges", "description": ""}
]"#;

#[test]
fn test_ingest_then_select_by_name() {
    let ingested = parse_moves(MOVES).unwrap();
    assert_eq!(ingested.moves.len(), 4);
    assert_eq!(ingested.dropped, 1);

    let selected = Selection::default().apply(&ingested.moves);
    let names: Vec<_> = selected.iter().map(|m| m.spanish_name.as_str()).collect();
    assert_eq!(names, vec!["Abanico", "Dame", "Ñongo", "Sombrero"]);

    let summary = SelectionSummary::new(selected.len(), ingested.moves.len());
    assert_eq!(summary.to_string(), "Showing 4 of 4 moves");
}

#[test]
fn test_defaulted_fields_are_filterable() {
    let ingested = parse_moves(MOVES).unwrap();

    let basic = Selection {
        category: CategoryFilter::Only(CategoryId::Basic),
        ..Selection::default()
    }
    .apply(&ingested.moves);
    assert_eq!(basic.len(), 1);
    assert_eq!(basic[0].spanish_name, "Abanico");

    let beginners = Selection {
        difficulty: DifficultyFilter::Only(Difficulty::Beginner),
        field: SortField::SpanishName,
        direction: SortDirection::Desc,
        ..Selection::default()
    }
    .apply(&ingested.moves);
    let names: Vec<_> = beginners.iter().map(|m| m.spanish_name.as_str()).collect();
    assert_eq!(names, vec!["Ñongo", "Dame"]);
}

#[test]
fn test_category_names_degrade_to_ids() {
    let ingested = parse_moves(MOVES).unwrap();
    let catalog = CategoryCatalog::from_json(CATEGORIES).unwrap();

    let displayed: Vec<_> = ingested
        .moves
        .iter()
        .map(|m| catalog.display_name(m.category_id))
        .collect();
    assert_eq!(
        displayed,
        vec!["Complex Turns", "Partner Exchanges", "styling", "Basic Moves"]
    );
}

#[test]
fn test_videos_resolve_from_ingested_links() {
    let ingested = parse_moves(MOVES).unwrap();

    let sombrero = resolve_video(&ingested.moves[0].youtube_link).unwrap();
    assert!(sombrero.embed_url().contains("start=90"));

    let nongo = resolve_video(&ingested.moves[2].youtube_link).unwrap();
    assert!(nongo.shorts);
    assert!(!nongo.embed_url().contains("start="));

    assert!(!ingested.moves[1].has_video());
    assert!(resolve_video(&ingested.moves[1].youtube_link).is_err());
}
