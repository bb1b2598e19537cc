use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

use super::*;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
	let path = dir.path().join(name);
	fs::write(&path, contents).unwrap();
	path
}

#[test]
fn parses_records_in_order() {
	let catalog = Catalog::from_json_str(
		r#"{
			"version": 7,
			"count": 3,
			"items": [
				{ "id": 10, "name": "Sword" },
				{ "id": -2, "name": "" },
				{ "id": 3, "name": "  Shield  " }
			]
		}"#,
	)
	.unwrap();

	assert_eq!(catalog.version, 7);
	assert_eq!(catalog.count, 3);
	assert_eq!(
		catalog.records(),
		&[
			CatalogRecord::new(10, "Sword"),
			CatalogRecord::new(-2, ""),
			CatalogRecord::new(3, "  Shield  "),
		]
	);
	assert!(!catalog.count_mismatch());
}

#[test]
fn metadata_defaults_to_zero() {
	let catalog = Catalog::from_json_str(r#"{ "items": [] }"#).unwrap();
	assert_eq!(catalog.version, 0);
	assert_eq!(catalog.count, 0);
	assert!(catalog.is_empty());
}

#[test]
fn raw_name_alias_is_accepted() {
	let catalog = Catalog::from_json_str(r#"{ "items": [{ "id": 1, "rawName": "Bow" }] }"#).unwrap();
	assert_eq!(catalog.records(), &[CatalogRecord::new(1, "Bow")]);
}

#[test]
fn declared_count_is_not_enforced() {
	let catalog = Catalog::from_json_str(r#"{ "count": 99, "items": [{ "id": 1, "name": "Bow" }] }"#).unwrap();
	assert_eq!(catalog.len(), 1);
	assert!(catalog.count_mismatch());
}

#[test]
fn wide_ids_survive_parsing() {
	let catalog = Catalog::from_json_str(r#"{ "items": [{ "id": 18446744073709551616, "name": "Big" }] }"#).unwrap();
	assert_eq!(catalog.records()[0].id, 18_446_744_073_709_551_616);
}

#[rstest]
#[case::not_json("not json at all")]
#[case::missing_items(r#"{ "version": 1 }"#)]
#[case::float_id(r#"{ "items": [{ "id": 1.5, "name": "x" }] }"#)]
#[case::string_id(r#"{ "items": [{ "id": "1", "name": "x" }] }"#)]
#[case::missing_name(r#"{ "items": [{ "id": 1 }] }"#)]
fn malformed_json_is_rejected(#[case] json: &str) {
	let err = Catalog::from_json_str(json).unwrap_err();
	assert!(matches!(err, LoadError::Json(_)), "unexpected error: {err}");
}

#[test]
fn new_sets_count_from_records() {
	let catalog = Catalog::new(2, vec![CatalogRecord::new(1, "a"), CatalogRecord::new(2, "b")]);
	assert_eq!(catalog.version, 2);
	assert_eq!(catalog.count, 2);
	assert!(!catalog.count_mismatch());
}

#[test]
fn load_reads_json_file() {
	let dir = TempDir::new().unwrap();
	let path = write_file(&dir, "items.json", r#"{ "version": 1, "count": 1, "items": [{ "id": 5, "name": "Arrow" }] }"#);

	let catalog = Catalog::load(&path).unwrap();
	assert_eq!(catalog.records(), &[CatalogRecord::new(5, "Arrow")]);
}

#[test]
fn load_accepts_uppercase_extension() {
	let dir = TempDir::new().unwrap();
	let path = write_file(&dir, "ITEMS.JSON", r#"{ "items": [] }"#);
	assert!(Catalog::load(&path).is_ok());
}

#[rstest]
#[case("items.txt")]
#[case("items.json.bak")]
#[case("items")]
fn load_rejects_other_extensions(#[case] name: &str) {
	let dir = TempDir::new().unwrap();
	let path = write_file(&dir, name, r#"{ "items": [] }"#);

	let err = Catalog::load(&path).unwrap_err();
	assert!(matches!(err, LoadError::UnsupportedFileType { .. }), "unexpected error: {err}");
}

#[test]
fn load_reports_missing_file() {
	let err = Catalog::load(Path::new("/definitely/not/here/items.json")).unwrap_err();
	match err {
		LoadError::Io { path, .. } => assert_eq!(path, Path::new("/definitely/not/here/items.json")),
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn load_reports_parse_errors_with_path() {
	let dir = TempDir::new().unwrap();
	let path = write_file(&dir, "items.json", "{ \"items\": [ }");

	let err = Catalog::load(&path).unwrap_err();
	assert!(err.to_string().contains("items.json"), "message should name the file: {err}");
	assert!(matches!(err, LoadError::Parse { .. }));
}
