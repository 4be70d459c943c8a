//! Integration tests for the BoardBuilder API

use tactiboard::{
    BoardBuilder, TactiboardError,
    config::{AppConfig, RenderConfig},
    export::{
        document::SheetExporter,
        image::{ImageExporter, SvgDataUrl},
    },
    generate::{GenerateError, GenerationParams, Sport, parse_generated},
    lesson::{DrillSlot, LessonPlan},
    scene::TacticalSchema,
};

const LESSON: &str = r##"{
    "title": "Contre-attaque",
    "level": "2 A.C (8ème)",
    "sport": "Handball",
    "objective": "Progresser vers la cible",
    "duration": 55,
    "material": "4 ballons",
    "warmup": {"title": "Passes en mouvement", "duration": "10 min", "schema": {}},
    "fundamental": [
        {
            "title": "3 contre 2",
            "duration": "15 min",
            "instructions": ["Jouer vite", "Fixer un défenseur"],
            "schema": {
                "description": "Montée de balle",
                "players": [
                    {"id": "a1", "label": "DC", "x": 50, "y": 70, "role": "attacker", "team": "team1", "hasBall": true},
                    {"id": "d1", "label": "GB", "x": 50, "y": 5, "role": "defender", "team": "team2"}
                ],
                "arrows": [{"fromX": 50, "fromY": 70, "toX": 20, "toY": 40, "type": "dribble"}],
                "zones": [{"x": 0, "y": 0, "width": 100, "height": 20, "color": "#ef4444"}]
            }
        }
    ],
    "final": {"title": "Bilan", "instructions": ["Qu'avez-vous appris ?"]}
}"##;

#[test]
fn test_builder_api_exists() {
    let _builder = BoardBuilder::default();
}

#[test]
fn test_parse_lesson() {
    let builder = BoardBuilder::default();
    let lesson = builder.parse_lesson(LESSON).expect("Failed to parse lesson");

    assert_eq!(lesson.sport, "Handball");
    assert_eq!(lesson.duration, 55);
    assert_eq!(lesson.fundamental.len(), 1);
    let schema = &lesson.fundamental[0].schema;
    assert_eq!(schema.players().len(), 2);
    assert_eq!(schema.arrows().len(), 1);
    assert_eq!(schema.zones().len(), 1);
    assert!(schema.items().is_empty());
}

#[test]
fn test_parse_error_keeps_source() {
    let builder = BoardBuilder::default();
    let source = "{\"title\": \"Séance\",\n \"duration\": \"long\"}";
    match builder.parse_lesson(source) {
        Err(TactiboardError::Json { err, src }) => {
            assert_eq!(src, source);
            assert_eq!(err.line(), 2);
        }
        other => panic!("Expected JSON error, got {other:?}"),
    }
}

#[test]
fn test_render_lesson_in_document_order() {
    let builder = BoardBuilder::default();
    let lesson = builder.parse_lesson(LESSON).unwrap();
    let boards = builder.render_lesson(&lesson);

    let slots: Vec<DrillSlot> = boards.iter().map(|(slot, _)| *slot).collect();
    assert_eq!(
        slots,
        vec![DrillSlot::Warmup, DrillSlot::Fundamental(0), DrillSlot::Final]
    );
    assert_eq!(boards[0].1.scene_element_count(), 0);
    assert_eq!(boards[1].1.scene_element_count(), 4);
    assert!(builder.render_drill(&lesson, DrillSlot::Fundamental(3)).is_none());
}

#[test]
fn test_builder_with_config() {
    let config = AppConfig::default().with_size(Some(800), None);
    let builder = BoardBuilder::new(config);
    let svg = builder.render_svg(&TacticalSchema::default(), "Football");
    assert!(svg.contains("width=\"800\""));
    assert!(svg.contains("height=\"400\""));
}

#[test]
fn test_json_round_trip() {
    let builder = BoardBuilder::default();
    let lesson = builder.parse_lesson(LESSON).unwrap();
    let json = builder.to_json(&lesson).unwrap();
    let reparsed = builder.parse_lesson(&json).unwrap();
    assert_eq!(reparsed, lesson);
}

#[test]
fn test_exports() {
    let builder = BoardBuilder::new(AppConfig::new(
        RenderConfig::new(300, 200),
        Default::default(),
    ));
    let lesson = builder.parse_lesson(LESSON).unwrap();

    let sheet = builder.export_document(&SheetExporter, &lesson).unwrap();
    let sheet = String::from_utf8(sheet).unwrap();
    assert!(sheet.contains("FICHE SÉANCE EPS - HANDBALL"));
    assert!(sheet.contains("Situation 1: 3 contre 2 (15 min)"));
    assert!(sheet.contains("Bilan: Qu'avez-vous appris ?"));

    let board = builder.render_drill(&lesson, DrillSlot::Fundamental(0)).unwrap();
    let exporter: &dyn ImageExporter = &SvgDataUrl;
    let url = builder.export_image(exporter, &board).unwrap();
    assert!(url.starts_with("data:image/svg+xml;base64,"));
}

#[test]
fn test_generation_through_builder() {
    let builder = BoardBuilder::default();
    let params = GenerationParams {
        sport: Sport::Handball,
        ..GenerationParams::default()
    };

    let generator = |_: &GenerationParams| parse_generated(LESSON);
    let lesson = builder.generate(&generator, &params).unwrap();
    assert_eq!(lesson.title, "Contre-attaque");

    let failing = |_: &GenerationParams| -> Result<LessonPlan, GenerateError> { Err(GenerateError::EmptyResponse) };
    let err = builder.generate(&failing, &params).unwrap_err();
    assert!(matches!(err, TactiboardError::Generate(GenerateError::EmptyResponse)));
    assert_eq!(err.to_string(), "Réponse vide de l'IA");
}

#[test]
fn test_editor_persists_into_lesson() {
    let builder = BoardBuilder::default();
    let mut lesson = LessonPlan::blank();
    let mut latest = None;
    {
        let schema = lesson.fundamental[0].schema.clone();
        let mut editor = builder.editor(&schema, |scene: TacticalSchema| latest = Some(scene));
        editor.begin_placement("cone").unwrap();
        editor
            .complete_placement(
                tactiboard::geometry::Point::new(60.0, 40.0),
                tactiboard::geometry::CanvasBounds::new(0.0, 0.0, 600.0, 400.0),
            )
            .unwrap();
    }
    assert!(lesson.set_schema(DrillSlot::Fundamental(0), latest.unwrap()));
    assert_eq!(lesson.fundamental[0].schema.items().len(), 1);
    assert_eq!(lesson.fundamental[0].schema.description(), "Custom Diagram");
}
