//! Name derivation tests against Nuxt auto-import conventions

use std::collections::BTreeSet;
use std::path::Path;
use unused_components::{derive_names, is_used, pascalize};

fn names(path: &str) -> BTreeSet<String> {
    derive_names(Path::new(path), Path::new("components"), ".vue").expect("derive names")
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_pascalize_examples() {
    assert_eq!(pascalize(""), "");
    assert_eq!(pascalize("foo_bar"), "FooBar");
    assert_eq!(pascalize("fooBar"), "FooBar");
    assert_eq!(pascalize("room-type_list"), "RoomTypeList");
}

#[test]
fn test_kebab_file_in_folder() {
    assert_eq!(
        names("components/hotel/basic-info.vue"),
        set(&["BasicInfo", "HotelBasicInfo"])
    );
}

#[test]
fn test_already_prefixed_file() {
    assert_eq!(
        names("components/hotel/HotelBasicInfo.vue"),
        set(&["HotelBasicInfo"])
    );
}

#[test]
fn test_deep_nesting_with_partial_prefix() {
    // `Room` prefix already present, `Hotel` still added
    assert_eq!(
        names("components/hotel/room/RoomCard.vue"),
        set(&["RoomCard", "HotelRoomCard"])
    );
}

#[test]
fn test_kebab_folder() {
    assert_eq!(
        names("components/date-picker/range.vue"),
        set(&["Range", "DatePickerRange"])
    );
}

#[test]
fn test_nested_index() {
    assert_eq!(
        names("components/navbar/index.vue"),
        set(&["Index", "NavbarIndex", "Navbar"])
    );
}

#[test]
fn test_index_with_other_extension_is_plain() {
    let result = derive_names(
        Path::new("components/navbar/index.ts"),
        Path::new("components"),
        ".vue",
    )
    .unwrap();
    assert_eq!(result, set(&["Index", "NavbarIndex"]));
}

#[test]
fn test_derived_names_find_usages() {
    let candidates: Vec<String> = names("components/hotel/basic-info.vue").into_iter().collect();
    assert!(is_used(&candidates, &["<HotelBasicInfo />"]).unwrap());
    assert!(is_used(&candidates, &["import BasicInfo from './basic-info.vue'"]).unwrap());
    assert!(!is_used(&candidates, &["<HotelBasicInfoCard />"]).unwrap());
}
