use std::sync::Arc;

use simdoc_matrix::tfidf::Idf;
use simdoc_matrix::tokenizer::{TokenizeStrategy, Tokenizer};
use simdoc_matrix::{Document, EngineConfig, MatrixGenerator, Metric};

fn main() {
    let documents = vec![
        Document::new("a", "During weekends, I like to read books."),
        Document::new("b", "I love to read books on Saturday and Sunday."),
        Document::new("c", "The research is about similarity calculation."),
    ];

    let config = EngineConfig::from_names("word", "tfidf", &["euclidean"]).unwrap();

    // Counts document frequencies over the whole collection
    // instead of over each compared pair.
    let tokenizer = Tokenizer::new(TokenizeStrategy::Word);
    let mut idf = Idf::new().smooth(true);
    for doc in &documents {
        idf.add(&tokenizer.tokenize(&doc.text));
    }

    let matrices = MatrixGenerator::new(config)
        .unwrap()
        .statistics(Arc::new(idf))
        .generate(&documents)
        .unwrap();

    let euclidean = matrices.get(Metric::Euclidean).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            if i != j {
                assert!(0. < euclidean.get(i, j) && euclidean.get(i, j) <= 1.);
            }
        }
    }
    println!("{:?}", euclidean.rows().collect::<Vec<_>>());
}
