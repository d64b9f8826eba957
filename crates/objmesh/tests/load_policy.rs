//! Loading through `ModelInfo` with the different failure policies.

use std::path::PathBuf;

use objmesh::{
    DecodeError, Error, FailureAction, LoadOutcome, LoadPolicy, ModelInfo, ModelTable,
    StructureVariant,
};

const CUBE_FACE: &str = "\
# one quad as two triangles
v -1 -1 0
v 1 -1 0
v 1 1 0
v -1 1 0
vt 0 0
vt 1 0
vt 1 1
vt 0 1
vn 0 0 1
f 1/1/1 2/2/1 3/3/1
f 1/1/1 3/3/1 4/4/1
";

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Write `contents` to a fresh file under the system temp directory.
fn temp_model(file_name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("objmesh-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(file_name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_from_file() {
    init_tracing();
    let path = temp_model("cube_face.obj", CUBE_FACE);
    let mut table = ModelTable::new();
    let outcome = table
        .load_info(&ModelInfo::from_path("quad", &path), &LoadPolicy::strict())
        .unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded);

    let model = table.get("quad").unwrap();
    assert_eq!(model.variant(), StructureVariant::PositionTexCoordNormal);
    assert_eq!(model.vertex_count(), 6);
    assert_eq!(model.buffer().len(), 48);
}

#[test]
fn missing_file_propagates_by_default() {
    init_tracing();
    let mut table = ModelTable::new();
    let info = ModelInfo::from_path("ghost", "no/such/model.obj");
    let err = table.load_info(&info, &LoadPolicy::default()).unwrap_err();
    assert!(matches!(err, Error::FileUnavailable { .. }));
    assert!(err.to_string().contains("no/such/model.obj"));
    assert!(table.is_empty());
}

#[test]
fn lenient_policy_still_fails_on_missing_file() {
    let mut table = ModelTable::new();
    let info = ModelInfo::from_path("ghost", "no/such/model.obj");
    assert!(table.load_info(&info, &LoadPolicy::lenient()).is_err());
}

#[test]
fn missing_file_can_be_skipped() {
    init_tracing();
    let mut table = ModelTable::new();
    let policy = LoadPolicy {
        missing_file: FailureAction::Skip,
        ..LoadPolicy::default()
    };
    let info = ModelInfo::from_path("ghost", "no/such/model.obj");
    assert_eq!(table.load_info(&info, &policy).unwrap(), LoadOutcome::Skipped);
    assert!(table.is_empty());
}

#[test]
fn malformed_source_propagates_with_line() {
    let mut table = ModelTable::new();
    let info = ModelInfo::from_text("bad", CUBE_FACE.replace("v 1 1 0", "v 1 1e0 0"));
    let err = table.load_info(&info, &LoadPolicy::strict()).unwrap_err();
    match err {
        Error::Parse { name, source } => {
            assert_eq!(name, "bad");
            assert_eq!(source.line, 4);
            assert!(matches!(source.kind, DecodeError::InvalidNumericToken { character: 'e', .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(table.is_empty());
}

#[test]
fn lenient_policy_skips_malformed_and_continues() {
    init_tracing();
    let infos = [
        ModelInfo::from_text("broken", "v 0 0 0\nf 1 2 3\n"),
        ModelInfo::from_text("quad", CUBE_FACE),
    ];
    let mut table = ModelTable::new();
    let loaded = table.load_all(&infos, &LoadPolicy::lenient()).unwrap();
    assert_eq!(loaded, 1);
    assert_eq!(table.names(), vec!["quad"]);
}

#[test]
fn duplicate_is_never_skipped() {
    let mut table = ModelTable::new();
    let info = ModelInfo::from_text("quad", CUBE_FACE);
    table.load_info(&info, &LoadPolicy::lenient()).unwrap();
    let err = table.load_info(&info, &LoadPolicy::lenient()).unwrap_err();
    assert!(matches!(err, Error::DuplicateName(_)));
}

#[test]
fn reload_after_delete() {
    let mut table = ModelTable::new();
    let info = ModelInfo::from_text("quad", CUBE_FACE);
    table.load_info(&info, &LoadPolicy::strict()).unwrap();
    assert!(table.delete("quad").is_some());
    table.load_info(&info, &LoadPolicy::strict()).unwrap();
    assert_eq!(table.len(), 1);
}
