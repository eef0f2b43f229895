use simdoc_matrix::{Document, EngineConfig, MatrixGenerator, Metric};

fn main() {
    let documents = vec![
        Document::new("u1", "Welcome to Jimbocho, the town of books and curry!"),
        Document::new("u2", "Welcome to Jimbocho, the city of books and curry!"),
        Document::new("u3", "We welcome you to Jimbocho, the town of books and curry."),
        Document::new("u4", "Welcome to the town of books and curry, Jimbocho!"),
    ];

    // Scores word sets and winnowing fingerprints of 2-grams in windows of 2.
    let config = EngineConfig {
        metrics: vec![Metric::Jaccard, Metric::Hamming, Metric::Winnowing],
        k: 2,
        w: 2,
        ..EngineConfig::default()
    };
    let matrices = MatrixGenerator::new(config)
        .unwrap()
        .generate_in_parallel(&documents)
        .unwrap();

    // The only difference of u1 and u2 is "town" and "city".
    let jaccard = matrices.get(Metric::Jaccard).unwrap();
    assert_eq!(jaccard.get(0, 1), 0.8);

    // Hamming is not applicable to texts of different lengths.
    let hamming = matrices.get(Metric::Hamming).unwrap();
    assert_eq!(hamming.get(0, 1), 1. - 4. / 49.);
    assert!(hamming.get(0, 2).is_nan());

    for matrix in matrices.iter() {
        println!("{}", matrix.metric().label());
        for (id, row) in matrices.ids().iter().zip(matrix.rows()) {
            println!("{id}\t{row:.3?}");
        }
    }
}
