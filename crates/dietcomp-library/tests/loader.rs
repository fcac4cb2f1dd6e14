use std::fs;

use dietcomp_library::{LibraryError, load_reference_library};
use dietcomp_model::ReferenceMatch;

#[test]
fn loads_library_and_resolves_values() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nasem.csv");
    fs::write(
        &path,
        "Feed Name,Feed NDF,Feed DNDF48_NDF,Feed RUP_base,Feed FA\n\
         \"Corn silage, typical\",40.0,61.2,4.4,2.8\n\
         \"Corn grain, dry\",9.8,,5.9,3.1\n",
    )
    .expect("write csv");

    let library = load_reference_library(&path).expect("load");
    assert_eq!(library.len(), 2);
    assert!(library.has_column("Feed NDF"));
    assert!(!library.has_column("Feed Name"));

    let silage = ReferenceMatch::parse("Corn silage, typical");
    assert_eq!(library.resolve(&silage, "Feed NDF"), Some(40.0));
    assert_eq!(library.resolve(&silage, "Feed FA"), Some(2.8));

    let grain = ReferenceMatch::parse("Corn grain, dry");
    assert_eq!(library.resolve(&grain, "Feed DNDF48_NDF"), None);
}

#[test]
fn missing_name_column_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.csv");
    fs::write(&path, "Name,Feed NDF\nCorn,40.0\n").expect("write csv");

    let error = load_reference_library(&path).expect_err("name column required");
    assert!(matches!(
        error,
        LibraryError::MissingColumn { column } if column == "Feed Name"
    ));
}

#[test]
fn duplicate_names_resolve_to_first_entry() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("dupes.csv");
    fs::write(
        &path,
        "Feed Name,Feed NDF\nCorn silage,40.0\nCorn silage,44.0\n",
    )
    .expect("write csv");

    let library = load_reference_library(&path).expect("load");
    let matched = ReferenceMatch::parse("Corn silage");
    assert_eq!(library.resolve(&matched, "Feed NDF"), Some(40.0));
}
