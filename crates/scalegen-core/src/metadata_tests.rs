use indoc::indoc;

use crate::{LoadError, Metadata, StorageEntryType, StorageHasher, StorageModifier, TypeId};

const METADATA: &str = indoc! {r#"
    {
      "version": 14,
      "lookup": {
        "types": [
          { "id": 0, "type": { "def": { "Primitive": "U32" } } },
          { "id": 1, "type": { "def": { "Primitive": "U64" } } }
        ]
      },
      "pallets": [
        {
          "name": "Timestamp",
          "index": "3",
          "storage": {
            "prefix": "Timestamp",
            "items": [
              {
                "name": "Now",
                "modifier": "Default",
                "type": { "Plain": "1" },
                "fallback": "0x0000000000000000",
                "docs": ["Current time for the current block."]
              },
              {
                "name": "Slots",
                "modifier": "Optional",
                "type": { "Map": { "hashers": ["Twox64Concat"], "key": 0, "value": 1 } },
                "fallback": "0x00",
                "docs": []
              }
            ]
          },
          "calls": { "type": 1 },
          "event": { "type": 0 },
          "constants": []
        },
        { "name": "Empty", "index": 9 }
      ]
    }
"#};

#[test]
fn parses_pallets() {
    let metadata = Metadata::from_json(METADATA).unwrap();
    assert_eq!(metadata.types.len(), 2);
    assert_eq!(metadata.pallets.len(), 2);

    let timestamp = metadata.pallet("Timestamp").unwrap();
    assert_eq!(timestamp.index, 3);
    assert_eq!(timestamp.calls.map(|c| c.ty), Some(TypeId(1)));

    let storage = timestamp.storage.as_ref().unwrap();
    assert_eq!(storage.prefix, "Timestamp");
    assert_eq!(storage.items[0].modifier, StorageModifier::Default);
    assert_eq!(storage.items[0].ty, StorageEntryType::Plain(TypeId(1)));
    assert_eq!(
        storage.items[1].ty,
        StorageEntryType::Map {
            hashers: vec![StorageHasher::Twox64Concat],
            key: TypeId(0),
            value: TypeId(1),
        }
    );
    assert_eq!(storage.items[1].ty.value(), TypeId(1));

    let empty = metadata.pallet("Empty").unwrap();
    assert!(empty.storage.is_none());
    assert!(empty.calls.is_none());
    assert!(metadata.pallet("Staking").is_none());
}

#[test]
fn missing_version_reads_as_v14() {
    let json = r#"{ "lookup": { "types": [] } }"#;
    let metadata = Metadata::from_json(json).unwrap();
    assert!(metadata.types.is_empty());
    assert!(metadata.pallets.is_empty());
}

#[test]
fn rejects_other_versions() {
    let json = r#"{ "version": 15, "lookup": { "types": [] } }"#;
    let err = Metadata::from_json(json).unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedMetadataVersion(15)));
}

#[test]
fn reports_invalid_json() {
    let err = Metadata::from_json("{").unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));
}
