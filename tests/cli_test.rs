use clap::Parser;
use csv2yaml::cli::Args;
use csv2yaml::config::Config;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("csv2yaml")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["data.csv"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.csv, PathBuf::from("data.csv"));
    assert!(parsed.template.is_none());
    assert_eq!(parsed.ext, "yaml");
    assert_eq!(parsed.output, PathBuf::from("output"));
    assert_eq!(parsed.prefix, "");
    assert_eq!(parsed.separator, ",");
    assert!(!parsed.single_file);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_options() {
    let args = make_args(&[
        "data.csv",
        "host.template",
        "--ext",
        "json",
        "--output",
        "out",
        "--prefix",
        "host_",
        "--separator",
        ";",
        "--single",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.template, Some(PathBuf::from("host.template")));
    assert_eq!(parsed.ext, "json");
    assert_eq!(parsed.output, PathBuf::from("out"));
    assert_eq!(parsed.prefix, "host_");
    assert_eq!(parsed.separator, ";");
    assert!(parsed.single_file);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-s", "-v", "-e", "txt", "-o", "out", "-p", "x", "data.csv"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.single_file);
    assert!(parsed.verbose);
    assert_eq!(parsed.ext, "txt");
    assert_eq!(parsed.output, PathBuf::from("out"));
    assert_eq!(parsed.prefix, "x");
}

#[test]
fn test_sep_alias() {
    let args = make_args(&["data.csv", "--sep", " "]);
    let parsed = Args::try_parse_from(args).unwrap();
    assert_eq!(parsed.separator, " ");
}

#[test]
fn test_missing_args() {
    let args = make_args(&[]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["data.csv", "host.template", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_config_from_args() {
    let args = make_args(&["data.csv", "host.template", "-s", "-p", "x"]);
    let config = Config::from(Args::try_parse_from(args).unwrap());

    let mut expected = Config::new("data.csv");
    expected.template = Some(PathBuf::from("host.template"));
    expected.single_file = true;
    expected.prefix = "x".to_string();
    assert_eq!(config, expected);
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_csv2yaml"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_missing_csv_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_csv2yaml"))
        .arg("does/not/exist.csv")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CSV file does not exist or is not a file"));
}
