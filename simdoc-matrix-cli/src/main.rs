use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::iter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use simdoc_matrix::config::parse_metrics;
use simdoc_matrix::{Document, EngineConfig, MatrixGenerator, SimilarityMatrix};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(
    name = "simdoc-matrix",
    about = "A program to compute pairwise similarity matrices of documents."
)]
struct Args {
    /// File path to a document file, one document per line.
    /// A line "id<TAB>text" gives the document id; otherwise the line number is used.
    /// Lines are read as tab-separated values, so fields may be double-quoted.
    /// Empty lines are skipped.
    #[clap(short = 'i', long)]
    document_path: PathBuf,

    /// Comma-separated metrics: cosine, euclidean, jaccard, jaccard_ngram,
    /// levenshtein, hamming, overlap, and winnowing.
    #[clap(
        short = 'm',
        long,
        default_value = "cosine,euclidean,jaccard,jaccard_ngram,levenshtein,hamming,overlap,winnowing"
    )]
    metrics: String,

    /// Tokenizer for the Euclidean similarity: word, character, bigram, or trigram.
    #[clap(short = 't', long, default_value = "word")]
    tokenizer: String,

    /// Vectorizer for the Euclidean similarity: bow, one_hot, or tfidf.
    #[clap(short = 'v', long, default_value = "bow")]
    vectorizer: String,

    /// Number of words in a k-gram of winnowing (must be more than 0).
    #[clap(short = 'k', long, default_value = "3")]
    kgram_size: usize,

    /// Number of k-grams in a window of winnowing (must be more than 0).
    #[clap(short = 'w', long, default_value = "4")]
    window_size: usize,

    /// Number of words in an n-gram of jaccard_ngram (must be more than 0).
    #[clap(short = 'n', long, default_value = "2")]
    ngram: usize,

    /// Keeps stopwords before vectorization.
    #[clap(long)]
    keep_stopwords: bool,

    /// Disables stemming in the word tokenizer.
    #[clap(long)]
    no_stemming: bool,

    /// JSON file of the engine configuration, used instead of the options above.
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// Directory to write a CSV file per metric.
    /// If not given, all matrices are printed in JSON.
    #[clap(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// Disables parallel construction.
    #[clap(short = 'p', long)]
    disable_parallel: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = engine_config(&args)?;
    let generator = MatrixGenerator::new(config)?.shows_progress(true);

    let documents = load_documents(
        File::open(&args.document_path)
            .with_context(|| format!("Failed to open {}", args.document_path.display()))?,
    )?;
    info!("Loaded {} documents", documents.len());

    let start = Instant::now();
    let matrices = if args.disable_parallel {
        generator.generate(&documents)?
    } else {
        generator.generate_in_parallel(&documents)?
    };
    info!("Done in {} sec", start.elapsed().as_secs_f64());

    if let Some(dir) = args.output_dir {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        for matrix in matrices.iter() {
            let path = dir.join(format!("{}.csv", matrix.metric().label()));
            let wtr = BufWriter::new(File::create(&path)?);
            write_csv(wtr, matrices.ids(), matrix)?;
            info!("Wrote {}", path.display());
        }
    } else {
        let stdout = io::stdout();
        let mut wtr = BufWriter::new(stdout.lock());
        serde_json::to_writer(&mut wtr, &matrices)?;
        writeln!(wtr)?;
    }

    Ok(())
}

fn engine_config(args: &Args) -> Result<EngineConfig> {
    if let Some(path) = &args.config {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: EngineConfig = serde_json::from_str(&json)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        config.validate()?;
        return Ok(config);
    }
    let metrics: Vec<_> = args.metrics.split(',').collect();
    let config = EngineConfig {
        tokenizer: args.tokenizer.parse()?,
        vectorizer: args.vectorizer.parse()?,
        metrics: parse_metrics(&metrics)?,
        remove_stopwords: !args.keep_stopwords,
        stemming: !args.no_stemming,
        ngram: args.ngram,
        k: args.kgram_size,
        w: args.window_size,
        ..EngineConfig::default()
    };
    config.validate()?;
    Ok(config)
}

fn load_documents<R>(rdr: R) -> Result<Vec<Document>>
where
    R: Read,
{
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr);
    let mut documents = vec![];
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map_or(i, |p| (p.line() as usize).saturating_sub(1));
        let document = match record.len() {
            0 => continue,
            1 => Document::new(line.to_string(), &record[0]),
            _ => {
                let text: Vec<_> = record.iter().skip(1).collect();
                Document::new(&record[0], text.join("\t"))
            }
        };
        if document.text.trim().is_empty() {
            continue;
        }
        documents.push(document);
    }
    Ok(documents)
}

fn write_csv<W>(wtr: W, ids: &[String], matrix: &SimilarityMatrix) -> Result<()>
where
    W: Write,
{
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(wtr);
    wtr.write_record(iter::once("id").chain(ids.iter().map(String::as_str)))?;
    for (id, row) in ids.iter().zip(matrix.rows()) {
        let scores = row.iter().map(|score| score.to_string());
        wtr.write_record(iter::once(id.clone()).chain(scores))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use simdoc_matrix::Metric;

    #[test]
    fn test_load_documents() {
        let input = "u1\tI like to read.\n\nI love to read.\n";
        let documents = load_documents(input.as_bytes()).unwrap();
        assert_eq!(
            documents,
            vec![
                Document::new("u1", "I like to read."),
                Document::new("2", "I love to read."),
            ]
        );
    }

    #[test]
    fn test_write_csv() {
        let documents = vec![Document::new("a", "x y"), Document::new("b,c", "x z")];
        let config = EngineConfig::from_names("word", "bow", &["overlap"]).unwrap();
        let matrices = MatrixGenerator::new(config)
            .unwrap()
            .generate(&documents)
            .unwrap();
        let mut buf = vec![];
        write_csv(
            &mut buf,
            matrices.ids(),
            matrices.get(Metric::Overlap).unwrap(),
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "id,a,\"b,c\"\na,NaN,0.5\n\"b,c\",0.5,NaN\n"
        );
    }

    #[test]
    fn test_write_csv_carriage_return() {
        let documents = vec![Document::new("a\rb", "x y"), Document::new("c", "x z")];
        let config = EngineConfig::from_names("word", "bow", &["overlap"]).unwrap();
        let matrices = MatrixGenerator::new(config)
            .unwrap()
            .generate(&documents)
            .unwrap();
        let mut buf = vec![];
        write_csv(
            &mut buf,
            matrices.ids(),
            matrices.get(Metric::Overlap).unwrap(),
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "id,\"a\rb\",c\n\"a\rb\",NaN,0.5\nc,0.5,NaN\n"
        );
    }

    #[test]
    fn test_load_documents_with_tabs() {
        let input = "u1\tleft\tright\n";
        let documents = load_documents(input.as_bytes()).unwrap();
        assert_eq!(documents, vec![Document::new("u1", "left\tright")]);
    }

    #[test]
    fn test_engine_config() {
        let args = Args::parse_from([
            "simdoc-matrix",
            "-i",
            "docs.txt",
            "-m",
            "winnowing,hamming",
            "-k",
            "2",
            "--keep-stopwords",
        ]);
        let config = engine_config(&args).unwrap();
        assert_eq!(config.metrics, vec![Metric::Winnowing, Metric::Hamming]);
        assert_eq!(config.k, 2);
        assert!(!config.remove_stopwords);
        assert!(config.stemming);

        let args = Args::parse_from(["simdoc-matrix", "-i", "docs.txt", "-m", "dice"]);
        assert!(engine_config(&args).is_err());
    }
}
