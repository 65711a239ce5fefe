use std::fs;
use std::path::Path;

use serde_json::json;
use slidefill::assembler::{build_from_plan_text, rebuild_from_saved_plan};
use slidefill::deck::OutputDeck;
use slidefill::errors::HostError;
use slidefill::models::elements::PageElementKind;
use slidefill::models::page::Page;
use slidefill::{BuilderConfig, FillError, HostSession, JsonFileStore, Presentation};

/// Twelve library slides, each with a title and a body shape. Slide 12 also
/// carries the `Table 7` table template 12 writes into.
fn library() -> serde_json::Value {
    let text = |content: &str| {
        json!({"textElements": [
            {"endIndex": content.len() + 1, "paragraphMarker": {}},
            {"endIndex": content.len() + 1, "textRun": {"content": format!("{content}\n")}}
        ]})
    };
    let mut slides = Vec::new();
    for i in 1..=12 {
        let title = if i == 1 { "Title 1" } else { "Titre 1" };
        let mut elements = vec![
            json!({"objectId": format!("s{i}_title"), "title": title, "shape": {"text": text(&format!("Template {i}"))}}),
            json!({"objectId": format!("s{i}_body"), "title": "ZoneTexte 8", "shape": {"text": text("Placeholder")}}),
        ];
        if i == 12 {
            let cells: Vec<_> = (0..3)
                .map(|_| json!({"tableCells": [{}, {}, {}, {}]}))
                .collect();
            elements.push(json!({
                "objectId": "s12_table",
                "title": "Table 7",
                "table": {"rows": 3, "columns": 4, "tableRows": cells}
            }));
        }
        slides.push(json!({"objectId": format!("s{i}"), "pageElements": elements}));
    }
    json!({
        "presentationId": "library",
        "title": "Slide library",
        "layouts": [{"objectId": "layout1"}],
        "slides": slides
    })
}

fn config(root: &Path) -> BuilderConfig {
    let config = BuilderConfig {
        library_path: root.join("context").join("slides_library.json"),
        output_path: root.join("output").join("output.json"),
        plan_path: root.join("output").join("response.txt"),
        catalog_path: root.join("context").join("slide_context.json"),
    };
    fs::create_dir_all(root.join("context")).unwrap();
    fs::write(&config.library_path, serde_json::to_vec_pretty(&library()).unwrap()).unwrap();
    config
}

fn load(path: &Path) -> Presentation {
    serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
}

fn texts(page: &Page) -> Vec<Option<String>> {
    page.elements().iter().map(|e| e.shape_text()).collect()
}

#[test]
fn q1_review_builds_a_title_and_one_content_slide() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());

    let raw = r#"{"presentation_title": "Q1 Review", "slides": [
        {"slide_index": 7, "slide_title": "Overview", "slots": {}},
    ]}"#;
    let report = build_from_plan_text(&config, raw).unwrap();
    assert_eq!(report.slide_count, 2);
    assert_eq!(report.output_path, config.output_path);

    let deck = load(&config.output_path);
    assert_eq!(deck.slide_count(), 2);
    assert!(deck.extra.contains_key("layouts"));
    assert_eq!(
        texts(deck.slide(0).unwrap()),
        vec![Some("Q1 Review".into()), Some("Placeholder".into())]
    );
    assert_eq!(
        texts(deck.slide(1).unwrap()),
        vec![Some("Overview".into()), Some("Placeholder".into())]
    );

    // The raw plan is kept verbatim, trailing comma and all.
    assert_eq!(fs::read_to_string(&config.plan_path).unwrap(), raw);
}

#[test]
fn slides_follow_plan_order_and_fill_tables() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());

    let raw = r#"{"presentation_title": "Ops", "slides": [
        {"slide_index": 12, "slide_title": "Matrix", "slots": {"criteria_1": "Cost", "criteria_4": "Risk"}},
        {"slide_index": 4, "slide_title": "Source", "slots": {"source": "Annual survey"}},
        {"slide_index": 7, "slide_title": "Close", "slots": {"unused": "ignored"}}
    ]}"#;
    let report = build_from_plan_text(&config, raw).unwrap();
    assert_eq!(report.slide_count, 4);
    assert_eq!(
        report.slides.iter().map(|r| r.template).collect::<Vec<_>>(),
        vec![Some(12), Some(4), Some(7)]
    );

    let deck = load(&config.output_path);
    let titles: Vec<_> = (0..4)
        .map(|i| texts(deck.slide(i).unwrap())[0].clone().unwrap())
        .collect();
    assert_eq!(titles, vec!["Ops", "Matrix", "Source", "Close"]);
    assert_eq!(texts(deck.slide(2).unwrap())[1].as_deref(), Some("Annual survey"));
    assert_eq!(texts(deck.slide(3).unwrap())[1].as_deref(), Some("Placeholder"));

    let PageElementKind::Table(table) = &deck.slide(1).unwrap().elements()[2].element_kind else {
        panic!("table slide lost its table");
    };
    assert_eq!(table.cell_text(1, 1).as_deref(), Some("Cost"));
    assert_eq!(table.cell_text(1, 2).as_deref(), Some(""));
    // Row 4 does not exist on this table, so criteria_4 is dropped.
    assert_eq!(table.rows, 3);
    assert_eq!(report.slides[0].skipped, 1);
}

#[test]
fn rebuild_reuses_the_saved_plan() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());

    build_from_plan_text(
        &config,
        r#"{"presentation_title": "First", "slides": [{"slide_index": 7, "slide_title": "A"}]}"#,
    )
    .unwrap();
    let first = fs::read(&config.output_path).unwrap();

    fs::remove_file(&config.output_path).unwrap();
    let report = rebuild_from_saved_plan(&config).unwrap();
    assert_eq!(report.slide_count, 2);
    assert_eq!(fs::read(&config.output_path).unwrap(), first);
}

#[test]
fn unknown_template_fails_before_touching_the_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    let good = r#"{"presentation_title": "Good", "slides": [{"slide_index": 7, "slide_title": "A"}]}"#;
    build_from_plan_text(&config, good).unwrap();
    let built = fs::read(&config.output_path).unwrap();

    let err = build_from_plan_text(
        &config,
        r#"{"presentation_title": "X", "slides": [
            {"slide_index": 7, "slide_title": "A"},
            {"slide_index": 9999, "slide_title": "B"}
        ]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, FillError::UnknownTemplate(9999)));
    assert!(err.to_string().contains("9999"));
    assert_eq!(fs::read(&config.output_path).unwrap(), built);

    // The last good plan is still there to rebuild from.
    assert_eq!(fs::read_to_string(&config.plan_path).unwrap(), good);
}

#[test]
fn library_reached_through_an_alias_is_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    let context = config.library_path.parent().unwrap();
    let alias = context.join("sub").join("..").join("slides_library.json");

    let mut session = HostSession::new(JsonFileStore::new());
    let err = OutputDeck::create(&mut session, &config.library_path, &alias).unwrap_err();
    assert!(matches!(
        err,
        FillError::Host {
            operation: "save",
            source: HostError::ReadOnly,
            ..
        }
    ));
    assert_eq!(load(&config.library_path).slide_count(), 12);
}

#[test]
fn malformed_plans_never_reach_the_host() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());

    let err =
        build_from_plan_text(&config, r#"{"presentation_title": "X", "slides": [}"#).unwrap_err();
    assert!(matches!(err, FillError::PlanJson(_)));
    assert!(!config.output_path.exists());
    assert!(!config.plan_path.exists());
}

#[test]
fn missing_library_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(dir.path());
    config.library_path = dir.path().join("nowhere.json");

    let err =
        build_from_plan_text(&config, r#"{"presentation_title": "X", "slides": []}"#).unwrap_err();
    assert!(matches!(err, FillError::Host { operation: "open", .. }));
    assert!(err.to_string().contains("nowhere.json"));
}
