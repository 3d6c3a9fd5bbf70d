use j16t::content::loader::load_questions_csv;
use j16t::content::{ContentStore, Descriptions, MISSING_DESCRIPTION};
use j16t::error::J16tError;
use j16t::types::{Axis, Letter, TypeCode};
use std::io::Cursor;
use std::path::Path;

fn descriptions_path() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data/descriptions.json"))
}

#[test]
fn test_reference_content() {
    let store = ContentStore::reference();
    assert_eq!(store.len(), 80);
    assert_eq!(store.axis_counts(), [11, 23, 23, 23]);

    let q = store.question(1).unwrap();
    assert_eq!(q.axis, Axis::EI);
    assert_eq!(q.letter_for(0), Some(Letter::E));
    assert_eq!(q.letter_for(1), Some(Letter::I));
    assert_eq!(q.letter_for(2), None);

    assert_eq!(store.letter_info(Letter::J).word, "Considered");
    assert_eq!(store.letter_info(Letter::E).color, "#eae400");

    let code: TypeCode = "INFP".parse().unwrap();
    assert!(store.profile(&code).is_some());
}

#[test]
fn test_csv_question_bank() {
    let data = "axis,text,option_a,option_b\n\
                EI, At a party I , talk to many , talk to few\n\
                S/N,I trust,facts,hunches\n";
    let questions = load_questions_csv(Cursor::new(data)).unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].axis, Axis::EI);
    assert_eq!(questions[0].text, "At a party I");
    assert_eq!(questions[0].options[1], "talk to few");
    assert_eq!(questions[1].axis, Axis::SN);
}

#[test]
fn test_csv_unknown_axis_is_fatal() {
    let data = "axis,text,option_a,option_b\nXY,Q,a,b\n";
    let err = load_questions_csv(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, J16tError::Validation(ref m) if m.contains("row 1")));
}

#[test]
fn test_csv_file_replaces_questions_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bank.csv");
    std::fs::write(&path, "axis,text,option_a,option_b\nJP,Plans?,yes,no\n").unwrap();

    let store = ContentStore::load_from_file(&path).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.axis_counts(), [0, 0, 0, 1]);
    assert_eq!(store.profiles.len(), 16);
}

#[test]
fn test_json_store_round_trip() {
    let store = ContentStore::reference();
    let json = serde_json::to_string(&store).unwrap();
    assert!(json.contains(r#""type":"E/I""#));

    let back = ContentStore::load_from_reader(json.as_bytes()).unwrap();
    assert_eq!(back.questions, store.questions);
    assert_eq!(back.profiles, store.profiles);
}

#[test]
fn test_json_store_rejects_empty_bank() {
    let store = ContentStore {
        questions: Vec::new(),
        ..ContentStore::reference()
    };
    let json = serde_json::to_string(&store).unwrap();
    assert!(matches!(
        ContentStore::load_from_reader(json.as_bytes()),
        Err(J16tError::Validation(_))
    ));
}

#[test]
fn test_descriptions_merge_by_display_key() {
    let descriptions = Descriptions::load_from_file(descriptions_path()).unwrap();
    assert_eq!(descriptions.letters.len(), 8);
    assert_eq!(descriptions.types.len(), 16);

    let store = ContentStore::reference().with_descriptions(descriptions).unwrap();
    for code in TypeCode::all() {
        assert_ne!(store.type_description(&code), MISSING_DESCRIPTION, "{}", code);
    }
    for letter in Letter::ALL {
        assert_ne!(store.letter_description(letter), MISSING_DESCRIPTION);
    }
}

#[test]
fn test_descriptions_accept_raw_keys() {
    let mut d = Descriptions::default();
    d.types.insert("estj".into(), "Organiser.".into());
    let store = ContentStore::reference().with_descriptions(d).unwrap();
    assert!(store.type_descriptions.contains_key("ESTC(J)"));
    let code: TypeCode = "ESTJ".parse().unwrap();
    assert_eq!(store.type_description(&code), "Organiser.");
}

#[test]
fn test_missing_descriptions_file_keeps_fallbacks() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContentStore::reference()
        .with_descriptions_file(dir.path().join("nope.json"))
        .unwrap();
    let code: TypeCode = "ISFP".parse().unwrap();
    assert_eq!(store.type_description(&code), MISSING_DESCRIPTION);
}
