use super::{Call, Decode, Encode, Error, Hasher, StorageKey};

#[test]
fn call_splits_section_and_method() {
    let call = Call::from_encoded(&[0x05, 0x03, 0xaa, 0xbb]).unwrap();
    assert_eq!(call.section_index, 5);
    assert_eq!(call.method_index, 3);
    assert_eq!(call.args, [0xaa, 0xbb]);
    assert_eq!(call.encode().unwrap(), [0x05, 0x03, 0xaa, 0xbb]);
}

#[test]
fn call_needs_two_bytes() {
    assert_eq!(Call::from_encoded(&[0x05]), Err(Error::TruncatedCall(1)));
    assert_eq!(Call::from_encoded(&[]), Err(Error::TruncatedCall(0)));
}

#[test]
fn call_arguments_are_concatenated() {
    let mut call = Call::new(4, 0);
    call.push_arg(&7u32).unwrap();
    call.push_arg("hi").unwrap();
    assert_eq!(call.args, [7, 0, 0, 0, 0x08, b'h', b'i']);
    assert_eq!(Call::decode(&call.encode().unwrap()).unwrap(), call);
}

#[test]
fn storage_key_keeps_each_argument() {
    let mut key = StorageKey::new("System", "Account", &[Hasher::Blake2_128Concat]);
    key.push_arg(&[1u8; 4]).unwrap();
    assert_eq!(key.prefix, "System");
    assert_eq!(key.item, "Account");
    assert_eq!(key.args, [vec![1u8, 1, 1, 1]]);
}

#[test]
fn concat_hashers() {
    assert!(Hasher::Twox64Concat.is_concat());
    assert!(Hasher::Identity.is_concat());
    assert!(!Hasher::Twox128.is_concat());
    assert_eq!(Hasher::Blake2_128Concat.to_string(), "Blake2_128Concat");
}

fn state_key(hex_key: &str) -> Vec<u8> {
    hex::decode(hex_key).unwrap()
}

#[test]
fn plain_storage_key_hashes_prefix_and_item() {
    let key = StorageKey::new("System", "Number", &[]);
    assert_eq!(
        key.to_bytes().unwrap(),
        state_key("26aa394eea5630e07c48ae0c9558cef702a5c1b19ab7a04f536c519aca4983ac")
    );
}

#[test]
fn blake2_concat_key_appends_the_account() {
    let alice = state_key("d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d");
    let mut account: [u8; 32] = [0; 32];
    account.copy_from_slice(&alice);

    let mut key = StorageKey::new("System", "Account", &[Hasher::Blake2_128Concat]);
    key.push_arg(&account).unwrap();
    assert_eq!(
        key.to_bytes().unwrap(),
        state_key(concat!(
            "26aa394eea5630e07c48ae0c9558cef7",
            "b99d880ec681799c0cf30e8886371da9",
            "de1e86a9a8c739864cf3cc5ec2bea59f",
            "d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d",
        ))
    );
}

#[test]
fn twox64_concat_key_appends_the_number() {
    let mut key = StorageKey::new("System", "BlockHash", &[Hasher::Twox64Concat]);
    key.push_arg(&0u32).unwrap();
    assert_eq!(
        key.to_bytes().unwrap(),
        state_key(concat!(
            "26aa394eea5630e07c48ae0c9558cef7",
            "a44704b568d21667356a5a050c118746",
            "b4def25cfda6ef3a",
            "00000000",
        ))
    );
}

#[test]
fn hash_widths() {
    assert_eq!(Hasher::Blake2_128.hash(b"x").len(), 16);
    assert_eq!(Hasher::Blake2_256.hash(b"x").len(), 32);
    assert_eq!(Hasher::Twox128.hash(b"x").len(), 16);
    assert_eq!(Hasher::Twox256.hash(b"x").len(), 32);
    assert_eq!(Hasher::Twox64Concat.hash(b"x").len(), 9);
    assert_eq!(Hasher::Identity.hash(b"xy"), b"xy");
}

#[test]
fn one_hasher_covers_all_arguments() {
    let mut split = StorageKey::new("P", "I", &[Hasher::Twox64Concat]);
    split.push_arg(&1u8).unwrap();
    split.push_arg(&2u8).unwrap();

    let mut joined = StorageKey::new("P", "I", &[Hasher::Twox64Concat]);
    joined.push_arg(&[1u8, 2]).unwrap();
    assert_eq!(split.to_bytes().unwrap(), joined.to_bytes().unwrap());
}

#[test]
fn hasher_count_must_match_arguments() {
    let mut key = StorageKey::new("P", "I", &[Hasher::Identity, Hasher::Identity]);
    for arg in [1u8, 2, 3] {
        key.push_arg(&arg).unwrap();
    }
    let err = key.to_bytes().unwrap_err();
    insta::assert_snapshot!(err, @"storage key P.I has 2 hashers for 3 arguments");
}
