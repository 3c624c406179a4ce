//! Integration tests for loading and binding through the public API.
//!
//! These tests drive `EnvTable` end to end: text or file in, typed records
//! out, covering the behaviors users rely on in real `.env` files.

use std::fs;
use tempfile::TempDir;

use dotbind_config::{BindError, Bindable, EnvError, EnvTable, bindable};

#[derive(Debug, Default)]
struct TestConfig {
    host: String,
    port: i32,
    test: String,
    boolean: bool,
    names: Vec<String>,
    inner: Option<Box<InnerConfig>>,
}

#[derive(Debug, Default)]
struct InnerConfig {
    default: String,
    telegram: String,
}

bindable! {
    TestConfig {
        host => "Host",
        port => "Port",
        test => "TEST",
        boolean => "BOOLEAN",
        names => "NAMES",
        inner => "INNER" as pointer,
    }
}

bindable! {
    InnerConfig {
        default => "DEFAULT",
        telegram => "TELEGRAM",
    }
}

const SAMPLE: &str = r#"
    TESTCONFIG.Host = "localhost"
    TESTCONFIG.Port = 8080
    TESTCONFIG.TEST = "test"
    TESTCONFIG.BOOLEAN = true
    TESTCONFIG.NAMES = "John", "Doe"
    TESTCONFIG.INNER.DEFAULT = "nested"
    INNERCONFIG.DEFAULT = "default"
    INNERCONFIG.TELEGRAM = "telegram"
"#;

#[test]
fn test_bind_multiple_records() {
    let table = EnvTable::parse(SAMPLE);
    let mut config = TestConfig::default();
    let mut inner = InnerConfig::default();

    table
        .bind(&mut [&mut config as &mut dyn Bindable, &mut inner])
        .expect("binding should succeed");

    assert_eq!(config.host, "localhost");
    assert_eq!(config.port, 8080);
    assert_eq!(config.test, "test");
    assert!(config.boolean);
    assert_eq!(config.names, ["John", "Doe"]);
    assert!(config.inner.is_none(), "pointer fields are never bound");
    assert_eq!(inner.default, "default");
    assert_eq!(inner.telegram, "telegram");
}

#[test]
fn test_nested_record_field_is_skipped() {
    #[derive(Debug, Default)]
    struct Outer {
        name: String,
        nested: InnerConfig,
    }

    bindable! {
        Outer {
            name => "NAME",
            nested => "NESTED" as record,
        }
    }

    let table = EnvTable::parse("OUTER.NAME = top\nOUTER.NESTED = x\nOUTER.NESTED.DEFAULT = y");
    let outer: Outer = table.bind_new().unwrap();
    assert_eq!(outer.name, "top");
    assert_eq!(outer.nested.default, "");
    assert_eq!(outer.nested.telegram, "");
}

#[test]
fn test_unmatched_type_names_are_ignored() {
    let table = EnvTable::parse("OTHER.Host = elsewhere\nTESTCONFIG.Host = here\nTESTCONFIG = bare");
    let config: TestConfig = table.bind_new().unwrap();
    assert_eq!(config.host, "here");
}

#[test]
fn test_binding_is_case_insensitive() {
    let table = EnvTable::parse("testconfig.host = lower\nTestConfig.PORT = 1");
    let config: TestConfig = table.bind_new().unwrap();
    assert_eq!(config.host, "lower");
    assert_eq!(config.port, 1);
}

#[test]
fn test_coercion_failure_names_the_field() {
    let table = EnvTable::parse("TESTCONFIG.Port = eighty");
    let err = table.bind_new::<TestConfig>().unwrap_err();
    match err {
        BindError::Coercion {
            record,
            field,
            key,
            target,
            value,
            ..
        } => {
            assert_eq!(record, "TestConfig");
            assert_eq!(field, "port");
            assert_eq!(key, "TESTCONFIG.Port");
            assert_eq!(target, "i32");
            assert_eq!(value, "eighty");
        }
        other => panic!("expected Coercion, got {other:?}"),
    }
}

#[test]
fn test_unsupported_field_kind() {
    use dotbind_config::{FieldSlot, FieldTarget};

    #[derive(Default)]
    struct Ratio {
        value: f64,
    }

    impl Bindable for Ratio {
        fn type_name(&self) -> &'static str {
            "Ratio"
        }

        fn fields(&mut self) -> Vec<FieldSlot<'_>> {
            vec![FieldSlot::new(
                "value",
                Some("VALUE"),
                FieldTarget::Unsupported("f64"),
            )]
        }
    }

    let table = EnvTable::parse("RATIO.VALUE = 0.5");
    let mut ratio = Ratio::default();
    let err = table.bind_one(&mut ratio).unwrap_err();
    assert!(matches!(err, BindError::UnsupportedField { kind: "f64", .. }));
    assert_eq!(ratio.value, 0.0);
}

#[test]
fn test_bind_before_load_fails() {
    let table = EnvTable::new();
    let mut config = TestConfig::default();
    assert!(matches!(
        table.bind_one(&mut config),
        Err(BindError::NotLoaded)
    ));
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".env");
    fs::write(
        &path,
        "# service settings\r\nHOST = 'db.internal' ; primary\r\nPORTS = 5432, 5433\r\n",
    )
    .unwrap();

    let table = EnvTable::from_path(&path).expect("file should load");
    assert_eq!(table.get("HOST").unwrap(), "db.internal");
    assert_eq!(table.get_all("PORTS").unwrap(), ["5432", "5433"]);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_load_tolerates_invalid_utf8() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".env");
    fs::write(&path, b"HOST = db\n# caf\xe9\nPORT = 1\n").unwrap();

    let table = EnvTable::from_path(&path).expect("invalid bytes should not reject the file");
    assert_eq!(table.get("HOST").unwrap(), "db");
    assert_eq!(table.get("PORT").unwrap(), "1");
    assert_eq!(table.len(), 2);
}

#[test]
fn test_load_missing_file_is_recoverable() {
    let temp_dir = TempDir::new().unwrap();
    let mut table = EnvTable::new();

    let result = table.load(temp_dir.path().join("absent.env"));

    match result {
        Err(EnvError::Read { path, source }) => {
            assert!(path.ends_with("absent.env"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Read error, got {other:?}"),
    }
    assert!(table.is_loaded());
    assert!(table.is_empty());
}

#[test]
fn test_documented_behaviors() {
    let table = EnvTable::parse(
        "QUOTED = \"a # b\"\nPLAIN = \"foo\"\nMULTI = a, b, c\nGONE = null\nA = 1\nB = $A",
    );
    assert_eq!(table.get("QUOTED").unwrap(), "a # b");
    assert_eq!(table.get("PLAIN").unwrap(), "foo");
    assert_eq!(table.get_all("MULTI").unwrap(), ["a", "b", "c"]);
    assert!(!table.contains("GONE"));
    assert_eq!(table.get("B").unwrap(), "1");

    let forward = EnvTable::parse("B = $A\nA = 1");
    assert!(matches!(forward.get("B"), Err(EnvError::KeyAbsent { .. })));
    assert_eq!(forward.get_or("B", "").unwrap(), "");
}

#[test]
fn test_reload_replaces_everything() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".env");
    fs::write(&path, "FROM_FILE = yes").unwrap();

    let mut table = EnvTable::parse("FROM_TEXT = yes");
    table.load(&path).unwrap();
    assert!(!table.contains("FROM_TEXT"));
    assert!(table.contains("FROM_FILE"));

    table.load_str("");
    assert!(table.is_empty());
    assert!(table.is_loaded());
}
