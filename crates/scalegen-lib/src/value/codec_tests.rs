use scalegen_core::{PrimitiveKind, TypeDef, TypeId, TypeTable};

use super::{Value, ValueCodec};
use crate::scale::Error;
use crate::test_utils::{TableBuilder, boxed, case, composite, named, unnamed, variant};
use crate::typegen::TypeGenerator;

fn resolved(table: &TypeTable, id: TypeId) -> TypeGenerator<'_> {
    let mut generator = TypeGenerator::new(table);
    generator.resolve(id).unwrap();
    generator
}

/// `Choice { Ok, Err(String) }`.
fn result_table() -> (TypeTable, TypeId) {
    let mut t = TableBuilder::new();
    let str_id = t.primitive(PrimitiveKind::Str);
    let id = t.add_named(
        &["Choice"],
        variant(vec![
            case("Ok", 0, vec![]),
            case("Err", 1, vec![unnamed(str_id)]),
        ]),
    );
    (t.build(), id)
}

fn choice(ok: bool, err: bool, payload: &str) -> Value {
    Value::record([
        ("is_ok", Value::Bool(ok)),
        ("is_err", Value::Bool(err)),
        ("as_err", Value::str(payload)),
    ])
}

#[test]
fn result_like_variant_round_trips() {
    let (table, id) = result_table();
    let generator = resolved(&table, id);
    let codec = ValueCodec::new(&generator);
    let desc = generator.descriptor(id).unwrap();

    assert_eq!(codec.blank(&desc).unwrap(), choice(false, false, ""));

    assert_eq!(codec.encode(&desc, &choice(true, false, "")).unwrap(), [0x00]);

    let err = choice(false, true, "x");
    let bytes = codec.encode(&desc, &err).unwrap();
    assert_eq!(bytes, [0x01, 0x04, b'x']);
    assert_eq!(codec.decode(&desc, &bytes).unwrap(), err);
}

#[test]
fn encode_without_selected_case_fails() {
    let (table, id) = result_table();
    let generator = resolved(&table, id);
    let codec = ValueCodec::new(&generator);
    let desc = generator.descriptor(id).unwrap();

    let err = codec.encode(&desc, &choice(false, false, "")).unwrap_err();
    assert_eq!(err, Error::NoVariantSelected("Choice".to_string()));
}

#[test]
fn variant_index_follows_the_first_set_flag() {
    let (table, id) = result_table();
    let generator = resolved(&table, id);
    let codec = ValueCodec::new(&generator);
    let desc = generator.descriptor(id).unwrap();

    assert_eq!(codec.variant_index(&desc, &choice(false, true, "")).unwrap(), 1);
    assert_eq!(codec.variant_index(&desc, &choice(true, true, "")).unwrap(), 0);
    assert_eq!(
        codec.variant_index(&desc, &choice(false, false, "")).unwrap_err(),
        Error::NoVariantSelected("Choice".to_string())
    );
    assert!(codec.variant_index(&desc, &Value::Unit).is_err());
}

#[test]
fn several_selected_cases_do_not_round_trip() {
    let (table, id) = result_table();
    let generator = resolved(&table, id);
    let codec = ValueCodec::new(&generator);
    let desc = generator.descriptor(id).unwrap();

    let both = choice(true, true, "x");
    let bytes = codec.encode(&desc, &both).unwrap();
    assert_eq!(bytes, [0x00]);

    let decoded = codec.decode(&desc, &bytes).unwrap();
    assert_ne!(decoded, both);
    assert_eq!(decoded, choice(true, false, ""));
}

#[test]
fn unknown_discriminant_is_rejected() {
    let (table, id) = result_table();
    let generator = resolved(&table, id);
    let codec = ValueCodec::new(&generator);
    let desc = generator.descriptor(id).unwrap();

    let err = codec.decode(&desc, &[0x09]).unwrap_err();
    assert_eq!(
        err,
        Error::UnrecognizedVariant {
            type_name: "Choice".to_string(),
            index: 9,
        }
    );
    insta::assert_snapshot!(err, @"unrecognized variant index 9 for Choice");
}

#[test]
fn wire_index_differs_from_position() {
    let mut t = TableBuilder::new();
    let u8_id = t.primitive(PrimitiveKind::U8);
    let id = t.add_named(
        &["Signal"],
        variant(vec![
            case("First", 5, vec![]),
            case("Second", 2, vec![unnamed(u8_id)]),
        ]),
    );
    let table = t.build();
    let generator = resolved(&table, id);
    let codec = ValueCodec::new(&generator);
    let desc = generator.descriptor(id).unwrap();

    let second = Value::record([
        ("is_first", Value::Bool(false)),
        ("is_second", Value::Bool(true)),
        ("as_second", Value::UInt(7)),
    ]);
    assert_eq!(codec.encode(&desc, &second).unwrap(), [0x02, 0x07]);

    let first = codec.decode(&desc, &[0x05]).unwrap();
    assert_eq!(first.field("is_first"), Some(&Value::Bool(true)));
    assert_eq!(first.field("is_second"), Some(&Value::Bool(false)));
}

#[test]
fn composite_fields_encode_in_order() {
    let mut t = TableBuilder::new();
    let u32_id = t.primitive(PrimitiveKind::U32);
    let u8_id = t.primitive(PrimitiveKind::U8);
    let u64_id = t.primitive(PrimitiveKind::U64);
    let bytes_id = t.add(TypeDef::Sequence { elem: u8_id });
    let compact_id = t.add(TypeDef::Compact { inner: u64_id });
    let id = t.add_named(
        &["pkg", "Record"],
        composite(vec![
            named("a", u32_id),
            named("b", bytes_id),
            named("c", compact_id),
        ]),
    );
    let table = t.build();
    let generator = resolved(&table, id);
    let codec = ValueCodec::new(&generator);
    let desc = generator.descriptor(id).unwrap();

    let value = Value::record([
        ("a", Value::UInt(1)),
        ("b", Value::Seq(vec![Value::UInt(1), Value::UInt(2)])),
        ("c", Value::UInt(69)),
    ]);
    let bytes = codec.encode(&desc, &value).unwrap();
    assert_eq!(bytes, [1, 0, 0, 0, 0x08, 1, 2, 0x15, 0x01]);
    assert_eq!(codec.decode(&desc, &bytes).unwrap(), value);
}

#[test]
fn out_of_range_integer_is_a_mismatch() {
    let mut t = TableBuilder::new();
    let u8_id = t.primitive(PrimitiveKind::U8);
    let i16_id = t.primitive(PrimitiveKind::I16);
    let table = t.build();
    let mut generator = TypeGenerator::new(&table);
    let u8_desc = generator.resolve(u8_id).unwrap();
    let i16_desc = generator.resolve(i16_id).unwrap();
    let codec = ValueCodec::new(&generator);

    let err = codec.encode(&u8_desc, &Value::UInt(300)).unwrap_err();
    insta::assert_snapshot!(err, @"expected U8, found unsigned integer");

    assert_eq!(codec.encode(&i16_desc, &Value::Int(-2)).unwrap(), [0xfe, 0xff]);
    assert!(codec.encode(&i16_desc, &Value::Int(40_000)).is_err());
}

#[test]
fn array_length_is_checked() {
    let mut t = TableBuilder::new();
    let u8_id = t.primitive(PrimitiveKind::U8);
    let id = t.add(TypeDef::Array { len: 2, elem: u8_id });
    let table = t.build();
    let generator = resolved(&table, id);
    let codec = ValueCodec::new(&generator);
    let desc = generator.descriptor(id).unwrap();

    assert_eq!(
        codec.blank(&desc).unwrap(),
        Value::Seq(vec![Value::UInt(0), Value::UInt(0)])
    );
    let err = codec
        .encode(&desc, &Value::Seq(vec![Value::UInt(1)]))
        .unwrap_err();
    assert_eq!(err, Error::LengthMismatch { expected: 2, found: 1 });
}

#[test]
fn trailing_bytes_are_rejected() {
    let mut t = TableBuilder::new();
    let id = t.primitive(PrimitiveKind::U32);
    let table = t.build();
    let generator = resolved(&table, id);
    let codec = ValueCodec::new(&generator);
    let desc = generator.descriptor(id).unwrap();

    let err = codec.decode(&desc, &[1, 0, 0, 0, 9]).unwrap_err();
    assert_eq!(err, Error::TrailingInput(1));
}

/// `Expr { Lit(u8), Neg { inner: Box<Expr> } }`.
fn expr_table() -> (TypeTable, TypeId) {
    let mut t = TableBuilder::new();
    let u8_id = t.primitive(PrimitiveKind::U8);
    let expr = t.next_id();
    t.add_named(
        &["Expr"],
        variant(vec![
            case("Lit", 0, vec![unnamed(u8_id)]),
            case("Neg", 1, vec![boxed("inner", expr)]),
        ]),
    );
    (t.build(), expr)
}

fn lit(n: u128) -> Value {
    Value::record([
        ("is_lit", Value::Bool(true)),
        ("as_lit", Value::UInt(n)),
        ("is_neg", Value::Bool(false)),
        ("as_neg_inner", Value::Indirect(None)),
    ])
}

fn neg(inner: Option<Value>) -> Value {
    Value::record([
        ("is_lit", Value::Bool(false)),
        ("as_lit", Value::UInt(0)),
        ("is_neg", Value::Bool(true)),
        ("as_neg_inner", Value::Indirect(inner.map(Box::new))),
    ])
}

#[test]
fn indirect_fields_recurse() {
    let (table, id) = expr_table();
    let generator = resolved(&table, id);
    let codec = ValueCodec::new(&generator);
    let desc = generator.descriptor(id).unwrap();

    let value = neg(Some(lit(3)));
    let bytes = codec.encode(&desc, &value).unwrap();
    assert_eq!(bytes, [0x01, 0x00, 0x03]);
    assert_eq!(codec.decode(&desc, &bytes).unwrap(), value);
}

#[test]
fn empty_indirect_cannot_be_encoded() {
    let (table, id) = expr_table();
    let generator = resolved(&table, id);
    let codec = ValueCodec::new(&generator);
    let desc = generator.descriptor(id).unwrap();

    let err = codec.encode(&desc, &neg(None)).unwrap_err();
    insta::assert_snapshot!(err, @"Expr.as_neg_inner holds no value");
}

#[test]
fn descriptors_must_be_resolved_first() {
    let mut t = TableBuilder::new();
    let u8_id = t.primitive(PrimitiveKind::U8);
    let id = t.add(TypeDef::Sequence { elem: u8_id });
    let table = t.build();
    let generator = resolved(&table, id);
    let codec = ValueCodec::new(&generator);
    let desc = generator.descriptor(id).unwrap();

    // The element was resolved as a dependency, so this works.
    assert_eq!(
        codec.decode(&desc, &[0x04, 0x2a]).unwrap(),
        Value::Seq(vec![Value::UInt(42)])
    );

    let empty = TypeGenerator::new(&table);
    let codec = ValueCodec::new(&empty);
    let err = codec
        .encode(&desc, &Value::Seq(vec![Value::UInt(1)]))
        .unwrap_err();
    assert_eq!(err, Error::UnresolvedType(0));
}
