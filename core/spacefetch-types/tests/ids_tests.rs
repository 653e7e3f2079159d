use spacefetch_types::{Error, SpaceId};
use std::collections::HashSet;
use std::str::FromStr;

#[test]
fn space_id_parse_and_display() {
    let id = SpaceId::parse("cfexampleapi").unwrap();
    assert_eq!(id.as_str(), "cfexampleapi");
    assert_eq!(id.to_string(), "cfexampleapi");
}

#[test]
fn space_id_trims_surrounding_whitespace() {
    let id = SpaceId::parse("  abc123 \n").unwrap();
    assert_eq!(id.as_str(), "abc123");
}

#[test]
fn space_id_rejects_empty() {
    assert!(matches!(SpaceId::parse(""), Err(Error::InvalidSpaceId(_))));
    assert!(matches!(SpaceId::parse("   "), Err(Error::InvalidSpaceId(_))));
}

#[test]
fn space_id_rejects_path_separators_and_inner_whitespace() {
    assert!(SpaceId::parse("abc/def").is_err());
    assert!(SpaceId::parse("abc def").is_err());
}

#[test]
fn space_id_from_str() {
    let id = SpaceId::from_str("space1").unwrap();
    assert_eq!(id, SpaceId::parse("space1").unwrap());
}

#[test]
fn space_id_hash_and_eq() {
    let mut set = HashSet::new();
    set.insert(SpaceId::parse("a").unwrap());
    set.insert(SpaceId::parse("a").unwrap());
    assert_eq!(set.len(), 1);
}

#[test]
fn space_id_serializes_as_plain_string() {
    let id = SpaceId::parse("space1").unwrap();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"space1\"");
}

#[test]
fn space_id_deserialize_validates() {
    let ok: SpaceId = serde_json::from_str("\"space1\"").unwrap();
    assert_eq!(ok.as_str(), "space1");

    let bad: Result<SpaceId, _> = serde_json::from_str("\"a/b\"");
    assert!(bad.is_err());
}

#[test]
fn invalid_space_id_error_display() {
    let err = SpaceId::parse("a/b").unwrap_err();
    assert!(format!("{err}").contains("invalid space id"));
    assert!(format!("{err}").contains("a/b"));
}
