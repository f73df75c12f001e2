use scalegen_core::{PrimitiveKind, TypeDef};

use super::{Argument, TypeGenerator};
use crate::test_utils::TableBuilder;

fn parameters(args: &[Argument]) -> Vec<String> {
    args.iter().map(Argument::parameter).collect()
}

#[test]
fn single_value_is_one_argument() {
    let mut t = TableBuilder::new();
    let u32_id = t.primitive(PrimitiveKind::U32);
    let table = t.build();

    let mut generator = TypeGenerator::new(&table);
    let desc = generator.resolve(u32_id).unwrap();
    let mut index = 0;
    let args = generator.flatten_args(&desc, &mut index, &[]).unwrap();

    assert_eq!(parameters(&args), ["arg_0: u32"]);
    assert_eq!(index, 1);
}

#[test]
fn nested_tuples_are_flattened() {
    let mut t = TableBuilder::new();
    let u32_id = t.primitive(PrimitiveKind::U32);
    let str_id = t.primitive(PrimitiveKind::Str);
    let u8_id = t.primitive(PrimitiveKind::U8);
    let hash = t.add(TypeDef::Array {
        len: 32,
        elem: u8_id,
    });
    let inner = t.add(TypeDef::Tuple(vec![str_id, hash]));
    let outer = t.add(TypeDef::Tuple(vec![u32_id, inner]));
    let table = t.build();

    let mut generator = TypeGenerator::new(&table);
    let desc = generator.resolve(outer).unwrap();
    let declared = generator.declarations().count();

    let mut index = 0;
    let args = generator.flatten_args(&desc, &mut index, &["key"]).unwrap();
    assert_eq!(
        parameters(&args),
        ["key_0: u32", "key_1: &String", "key_2: [u8; 32]"]
    );
    assert_eq!(index, 3);
    assert_eq!(generator.declarations().count(), declared);
}

#[test]
fn index_runs_across_calls() {
    let mut t = TableBuilder::new();
    let u64_id = t.primitive(PrimitiveKind::U64);
    let unit = t.add(TypeDef::Tuple(vec![]));
    let table = t.build();

    let mut generator = TypeGenerator::new(&table);
    let u64_desc = generator.resolve(u64_id).unwrap();
    let unit_desc = generator.resolve(unit).unwrap();

    let mut index = 0;
    let mut args = generator
        .flatten_args(&u64_desc, &mut index, &["AccountId"])
        .unwrap();
    args.extend(generator.flatten_args(&unit_desc, &mut index, &[]).unwrap());
    args.extend(generator.flatten_args(&u64_desc, &mut index, &[]).unwrap());

    assert_eq!(parameters(&args), ["account_id_0: u64", "arg_1: u64"]);
}
