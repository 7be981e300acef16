use campus_records::{
    FieldDef, FieldType, FieldValue, OrderKey, Record, RecordDecoder, RecordEncoder, RecordSchema,
    SchemaRegistry,
};
use proptest::prelude::*;

static NOTE: RecordSchema = RecordSchema {
    tag: 200,
    name: "Note",
    fields: &[
        FieldDef::new("id", "id", FieldType::I64),
        FieldDef::new("rank", "rank", FieldType::I32),
        FieldDef::new("done", "done", FieldType::Bool),
        FieldDef::new("body", "body", FieldType::Str),
        FieldDef::new("due_at", "due_at", FieldType::DateTime),
    ],
    order_key: OrderKey::None,
};

static BOARD: RecordSchema = RecordSchema {
    tag: 201,
    name: "Board",
    fields: &[
        FieldDef::new("name", "name", FieldType::Str),
        FieldDef::new("cover", "cover", FieldType::Record(200)),
        FieldDef::new("notes", "notes", FieldType::List(200)),
    ],
    order_key: OrderKey::None,
};

fn registry() -> SchemaRegistry {
    SchemaRegistry::build(&[&NOTE, &BOARD]).unwrap()
}

fn note(id: i64, rank: i32, done: bool, body: &str, due_at: &str) -> Record {
    let mut rec = Record::empty(&NOTE);
    rec.set("id", FieldValue::I64(id)).unwrap();
    rec.set("rank", FieldValue::I32(rank)).unwrap();
    rec.set("done", FieldValue::Bool(done)).unwrap();
    rec.set("body", FieldValue::Str(body.into())).unwrap();
    rec.set("due_at", FieldValue::DateTime(due_at.into())).unwrap();
    rec
}

#[test]
fn roundtrip_board() {
    let registry = registry();
    let mut board = Record::empty(&BOARD);
    board.set("name", FieldValue::Str("week".into())).unwrap();
    board
        .set(
            "cover",
            FieldValue::Record(Some(Box::new(note(1, 0, false, "", "")))),
        )
        .unwrap();
    board
        .set(
            "notes",
            FieldValue::List(vec![
                note(2, 1, true, "читать", "2024-09-01T08:00:00Z"),
                note(3, -4, false, "grade quiz", ""),
            ]),
        )
        .unwrap();

    let bytes = RecordEncoder::new().encode(&board);
    let back = RecordDecoder::new(&registry).decode(&BOARD, &bytes).unwrap();
    assert_eq!(back, board);
}

#[test]
fn roundtrip_all_defaults() {
    let registry = registry();
    let board = Record::empty(&BOARD);
    let bytes = RecordEncoder::new().encode(&board);
    let back = RecordDecoder::new(&registry).decode(&BOARD, &bytes).unwrap();
    assert_eq!(back, board);
}

#[test]
fn decoding_against_the_wrong_schema_fails() {
    let registry = registry();
    // NOTE bytes misparse under the BOARD field sequence: the notes count
    // lands inside the integer fields and the element tags don't match.
    let bytes = RecordEncoder::new().encode(&note(7, 1, true, "hello", ""));
    let result = RecordDecoder::new(&registry).decode(&BOARD, &bytes);
    assert!(result.is_err());
}

proptest! {
    #[test]
    fn roundtrip_any_note(
        id in any::<i64>(),
        rank in any::<i32>(),
        done in any::<bool>(),
        body in ".{0,40}",
        due_at in ".{0,30}",
    ) {
        let registry = registry();
        let rec = note(id, rank, done, &body, &due_at);
        let bytes = RecordEncoder::new().encode(&rec);
        let back = RecordDecoder::new(&registry).decode(&NOTE, &bytes).unwrap();
        prop_assert_eq!(back, rec);
    }
}
