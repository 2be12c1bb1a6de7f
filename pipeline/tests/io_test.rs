use std::path::PathBuf;

use matrix_engine::Matrix;
use matrix_pipeline::io;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("matmul-{}-{}", std::process::id(), name))
}

#[tokio::test]
async fn store_then_load_round_trips() {
    let path = temp_path("round-trip.txt");
    let m = Matrix::from_rows(vec![vec![1.0, 2.5], vec![-3.0, 4.0]]).unwrap();

    io::store(&path, &m).await.unwrap();
    let loaded = io::load(&path).await.unwrap();

    assert_eq!(loaded, m);
    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let err = io::load(temp_path("does-not-exist.txt")).await.unwrap_err();
    assert!(matches!(err, matrix_pipeline::Error::NotFound(_)));
}

#[tokio::test]
async fn non_numeric_contents_fail_to_parse() {
    let path = temp_path("garbage.txt");
    tokio::fs::write(&path, "1 2\n3 x\n").await.unwrap();

    let err = io::load(&path).await.unwrap_err();
    assert!(matches!(
        err,
        matrix_pipeline::Error::Engine(matrix_engine::Error::Parse(_))
    ));

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn ragged_contents_are_rejected() {
    let path = temp_path("ragged.txt");
    tokio::fs::write(&path, "1 2 3\n4 5\n").await.unwrap();

    let err = io::load(&path).await.unwrap_err();
    assert!(matches!(
        err,
        matrix_pipeline::Error::Engine(matrix_engine::Error::MalformedMatrix { .. })
    ));

    let _ = tokio::fs::remove_file(&path).await;
}
