use std::fs;

use csv2yaml::writer::{output_filename, write_to_file};
use tempfile::TempDir;

#[test]
fn test_output_filename() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    assert_eq!(output_filename("a", dir, "yaml"), dir.join("a.yaml"));

    fs::write(dir.join("a.yaml"), "").unwrap();
    fs::write(dir.join("a_2.yaml"), "").unwrap();
    assert_eq!(output_filename("a", dir, "yaml"), dir.join("a_1.yaml"));

    fs::write(dir.join("a_1.yaml"), "").unwrap();
    assert_eq!(output_filename("a", dir, "yaml"), dir.join("a_3.yaml"));

    assert_eq!(output_filename("a", dir, "json"), dir.join("a.json"));
}

#[test]
fn test_write_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let first = write_to_file("pre_", "name", dir, "yaml", "one").unwrap();
    let second = write_to_file("pre_", "name", dir, "yaml", "two").unwrap();

    assert_eq!(first, dir.join("pre_name.yaml"));
    assert_eq!(second, dir.join("pre_name_1.yaml"));
    assert_eq!(fs::read_to_string(first).unwrap(), "one");
    assert_eq!(fs::read_to_string(second).unwrap(), "two");
}

#[test]
fn test_write_to_file_skips_directories_with_the_same_name() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::create_dir(dir.join("name.yaml")).unwrap();

    let path = write_to_file("", "name", dir, "yaml", "data").unwrap();

    assert_eq!(path, dir.join("name_1.yaml"));
    assert!(dir.join("name.yaml").is_dir());
    assert_eq!(fs::read_to_string(path).unwrap(), "data");
}
