use std::fs;
use std::path::PathBuf;

use casemint_archive::{ARCHIVE_EXTENSION, ArchiveError, ArchiveOptions, compress};

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("casemint_archive_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn seed_source_tree(label: &str) -> PathBuf {
    let source = temp_dir(label);
    fs::write(source.join("post_charge_data.csv"), "Month,Year\nMay 2024,2024\n")
        .expect("write csv");
    fs::write(source.join("pre_charge_data.csv"), "Month,Year\nJune 2023,2023\n")
        .expect("write csv");
    let nested = source.join("nested");
    fs::create_dir_all(&nested).expect("create nested dir");
    fs::write(nested.join("notes.txt"), "nested file").expect("write nested file");
    source
}

#[test]
fn compress_writes_a_timestamped_archive() {
    let source = seed_source_tree("ts_src");
    let output = temp_dir("ts_out");

    let path = compress(&ArchiveOptions {
        source_dir: source,
        output_dir: output.clone(),
        password: None,
        prefix: Some("clean".to_string()),
    })
    .expect("compress");

    assert_eq!(path.parent(), Some(output.as_path()));
    assert_eq!(
        path.extension().and_then(|ext| ext.to_str()),
        Some(ARCHIVE_EXTENSION)
    );
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .expect("file name");
    assert!(name.starts_with("clean_dummy_data_"), "got {name}");
    assert!(fs::metadata(&path).expect("archive metadata").len() > 0);
}

#[test]
fn compress_round_trips_the_directory_tree() {
    let source = seed_source_tree("rt_src");
    let output = temp_dir("rt_out");

    let path = compress(&ArchiveOptions {
        source_dir: source.clone(),
        output_dir: output,
        password: None,
        prefix: None,
    })
    .expect("compress");

    let extracted = temp_dir("rt_extract");
    sevenz_rust::decompress_file(&path, &extracted).expect("decompress");

    let original = fs::read_to_string(source.join("post_charge_data.csv")).expect("read original");
    let restored = fs::read_to_string(extracted.join("dummy").join("post_charge_data.csv"))
        .expect("read restored");
    assert_eq!(original, restored);

    let nested = fs::read_to_string(extracted.join("dummy").join("nested").join("notes.txt"))
        .expect("read nested");
    assert_eq!(nested, "nested file");
}

#[test]
fn password_protected_archive_round_trips() {
    let source = seed_source_tree("pw_src");
    let output = temp_dir("pw_out");

    let path = compress(&ArchiveOptions {
        source_dir: source.clone(),
        output_dir: output,
        password: Some("junk123".to_string()),
        prefix: Some("wrong_password".to_string()),
    })
    .expect("compress");

    let extracted = temp_dir("pw_extract");
    sevenz_rust::decompress_file_with_password(
        &path,
        &extracted,
        sevenz_rust::Password::from("junk123"),
    )
    .expect("decompress with password");

    let restored = fs::read_to_string(extracted.join("dummy").join("pre_charge_data.csv"))
        .expect("read restored");
    assert!(restored.contains("June 2023"));
}

#[test]
fn missing_source_directory_propagates_the_failure() {
    let output = temp_dir("missing_out");

    let result = compress(&ArchiveOptions {
        source_dir: PathBuf::from("/nonexistent/casemint/source"),
        output_dir: output,
        password: None,
        prefix: None,
    });

    assert!(matches!(result, Err(ArchiveError::Io(_))));
}
