use matrix_engine::{Matrix, Multiplier};
use matrix_pipeline::{SessionConfig, StreamItem};

fn matrix(rows: Vec<Vec<f64>>) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

async fn collect_generated(size: usize, count: usize) -> Vec<Matrix> {
    let (tx, mut rx) = matrix_pipeline::channel(count + 1);
    let generator = tokio::spawn(matrix_pipeline::generate(size, count, tx));

    let mut out = Vec::new();
    loop {
        match rx.take().await {
            StreamItem::Matrix(m) => out.push(m),
            StreamItem::EndOfStream => break,
        }
    }
    generator.await.unwrap().unwrap();
    out
}

#[tokio::test]
async fn end_of_stream_take_is_idempotent() {
    let (tx, mut rx) = matrix_pipeline::channel(2);
    tx.publish(matrix(vec![vec![1.0]])).await.unwrap();
    tx.finish().await.unwrap();

    assert!(matches!(rx.take().await, StreamItem::Matrix(_)));
    assert!(matches!(rx.take().await, StreamItem::EndOfStream));
    assert!(matches!(rx.take().await, StreamItem::EndOfStream));
    assert!(matches!(rx.take().await, StreamItem::EndOfStream));
}

#[tokio::test]
async fn publish_to_dropped_receiver_fails() {
    let (tx, rx) = matrix_pipeline::channel(1);
    drop(rx);

    let err = tx.publish(matrix(vec![vec![1.0]])).await.unwrap_err();
    assert!(matches!(err, matrix_pipeline::Error::StreamClosed));
}

#[tokio::test]
async fn generator_produces_exact_count_and_shape() {
    let produced = collect_generated(3, 4).await;

    assert_eq!(produced.len(), 4);
    for m in &produced {
        assert_eq!((m.rows(), m.cols()), (3, 3));
    }
}

#[tokio::test]
async fn generated_runs_share_shape_but_not_values() {
    let first = collect_generated(3, 4).await;
    let second = collect_generated(3, 4).await;

    assert_eq!(first.len(), second.len());
    // 36 independent uniform draws per run; identical runs would mean
    // the generator is not actually drawing fresh randomness.
    assert_ne!(first, second);
}

#[tokio::test]
async fn pairs_positionally_and_publishes_products() {
    let (tx_a, rx_a) = matrix_pipeline::channel(4);
    let (tx_b, rx_b) = matrix_pipeline::channel(4);
    let (tx_out, mut rx_out) = matrix_pipeline::channel(4);

    let consumer = tokio::spawn(matrix_pipeline::pair_and_multiply(
        rx_a,
        rx_b,
        tx_out,
        Multiplier::new(2).unwrap(),
    ));

    tx_a.publish(matrix(vec![vec![2.0]])).await.unwrap();
    tx_a.publish(matrix(vec![vec![4.0]])).await.unwrap();
    tx_b.publish(matrix(vec![vec![3.0]])).await.unwrap();
    tx_b.publish(matrix(vec![vec![5.0]])).await.unwrap();
    tx_a.finish().await.unwrap();
    tx_b.finish().await.unwrap();

    match rx_out.take().await {
        StreamItem::Matrix(m) => assert_eq!(m.row(0), &[6.0]),
        StreamItem::EndOfStream => panic!("stream ended before first product"),
    }
    match rx_out.take().await {
        StreamItem::Matrix(m) => assert_eq!(m.row(0), &[20.0]),
        StreamItem::EndOfStream => panic!("stream ended before second product"),
    }
    assert!(matches!(rx_out.take().await, StreamItem::EndOfStream));

    consumer.await.unwrap().unwrap();
}

#[tokio::test]
async fn asymmetric_generators_truncate_to_shorter_stream() {
    let mut config = SessionConfig::new(4, 5, 3);
    config.pool_size = Some(2);

    let completed = matrix_pipeline::run(config).await.unwrap();

    assert_eq!(completed, 3);
}

#[tokio::test]
async fn mismatched_generator_sizes_terminate_the_session() {
    let (tx_a, rx_a) = matrix_pipeline::channel(4);
    let (tx_b, rx_b) = matrix_pipeline::channel(4);
    let (tx_out, mut rx_out) = matrix_pipeline::channel(4);

    tokio::spawn(matrix_pipeline::generate(2, 3, tx_a));
    tokio::spawn(matrix_pipeline::generate(3, 3, tx_b));
    let consumer = tokio::spawn(matrix_pipeline::pair_and_multiply(
        rx_a,
        rx_b,
        tx_out,
        Multiplier::new(2).unwrap(),
    ));

    // No product can be formed from a 2x2 and a 3x3 operand; the
    // consumer must terminate the output stream and surface the error.
    assert!(matches!(rx_out.take().await, StreamItem::EndOfStream));

    let err = consumer.await.unwrap().unwrap_err();
    assert!(matches!(
        err,
        matrix_pipeline::Error::Engine(matrix_engine::Error::DimensionMismatch(..))
    ));
}
