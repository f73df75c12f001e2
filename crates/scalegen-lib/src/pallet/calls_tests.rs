use indoc::indoc;
use scalegen_core::{Metadata, TypeId};

use super::PalletGenerator;
use crate::emit::Config;
use crate::typegen::TypeGenerator;
use crate::Error;

const METADATA: &str = indoc! {r#"
    {
      "lookup": {
        "types": [
          { "id": 0, "type": { "def": { "Primitive": "U8" } } },
          { "id": 1, "type": { "def": { "Array": { "len": 32, "type": 0 } } } },
          {
            "id": 2,
            "type": {
              "path": ["sp_core", "crypto", "AccountId32"],
              "def": { "Composite": { "fields": [{ "type": 1 }] } }
            }
          },
          { "id": 3, "type": { "def": { "Primitive": "U128" } } },
          { "id": 4, "type": { "def": { "Compact": { "type": 3 } } } },
          { "id": 5, "type": { "def": { "Primitive": "Str" } } },
          {
            "id": 6,
            "type": {
              "path": ["pallet_balances", "pallet", "Call"],
              "def": {
                "Variant": {
                  "variants": [
                    {
                      "name": "transfer",
                      "index": 0,
                      "fields": [
                        { "name": "dest", "type": 2 },
                        { "name": "value", "type": 4 }
                      ],
                      "docs": [" Transfer some balance."]
                    },
                    { "name": "burn_all", "index": 7 },
                    { "name": "set_pair", "index": 3, "fields": [{ "type": 7 }] },
                    { "name": "remark", "index": 2, "fields": [{ "name": "remark", "type": 8 }] }
                  ]
                }
              }
            }
          },
          { "id": 7, "type": { "def": { "Tuple": [0, 5] } } },
          { "id": 8, "type": { "def": { "Sequence": { "type": 0 } } } }
        ]
      },
      "pallets": [
        { "name": "Balances", "index": 5, "calls": { "type": 6 } },
        { "name": "Broken", "index": 6, "calls": { "type": 5 } },
        { "name": "Timestamp", "index": 3 }
      ]
    }
"#};

#[test]
fn calls_module() {
    let metadata = Metadata::from_json(METADATA).unwrap();
    let config = Config::new();
    let mut generator = TypeGenerator::new(&metadata.types);
    let balances = PalletGenerator::new(metadata.pallet("Balances").unwrap(), &config);

    let out = balances.generate_calls(&mut generator).unwrap().unwrap();
    insta::assert_snapshot!(out, @r"
    // Generated by scalegen. Do not edit.

    use super::super::types::*;
    use scalegen_lib::scale as rt;

    /// Call `Balances.transfer` (index 0).
    ///
    /// Transfer some balance.
    pub fn make_transfer_call(dest_0: [u8; 32], value_1: &rt::UCompact) -> Result<rt::Call, rt::Error> {
        let mut call = rt::Call::new(5, 0);
        call.push_arg(&dest_0)?;
        call.push_arg(value_1)?;
        Ok(call)
    }

    /// Call `Balances.burn_all` (index 7).
    pub fn make_burn_all_call() -> Result<rt::Call, rt::Error> {
        Ok(rt::Call::new(5, 7))
    }

    /// Call `Balances.set_pair` (index 3).
    pub fn make_set_pair_call(arg_0: u8, arg_1: &String) -> Result<rt::Call, rt::Error> {
        let mut call = rt::Call::new(5, 3);
        call.push_arg(&arg_0)?;
        call.push_arg(arg_1)?;
        Ok(call)
    }

    /// Call `Balances.remark` (index 2).
    pub fn make_remark_call(remark_0: Vec<u8>) -> Result<rt::Call, rt::Error> {
        let mut call = rt::Call::new(5, 2);
        call.push_arg(&remark_0)?;
        Ok(call)
    }
    ");

    let declared: Vec<_> = generator.declarations().map(|d| d.name.as_str()).collect();
    assert_eq!(declared, ["PalletBalancesPalletCall", "TupleOfU8String"]);
}

#[test]
fn calls_type_must_be_a_variant() {
    let metadata = Metadata::from_json(METADATA).unwrap();
    let config = Config::new();
    let mut generator = TypeGenerator::new(&metadata.types);
    let broken = PalletGenerator::new(metadata.pallet("Broken").unwrap(), &config);

    let err = broken.generate_calls(&mut generator).unwrap_err();
    assert_eq!(
        err,
        Error::CallsNotVariant {
            pallet: "Broken".to_string(),
            id: TypeId(5),
        }
    );
}

#[test]
fn pallet_without_calls() {
    let metadata = Metadata::from_json(METADATA).unwrap();
    let config = Config::new();
    let mut generator = TypeGenerator::new(&metadata.types);
    let timestamp = PalletGenerator::new(metadata.pallet("Timestamp").unwrap(), &config);

    assert_eq!(timestamp.generate_calls(&mut generator).unwrap(), None);
    assert_eq!(generator.declarations().count(), 0);
}
