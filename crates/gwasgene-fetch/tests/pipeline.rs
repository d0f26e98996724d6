//! Pipeline tests against a mocked catalog.

use std::io::Read;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use flate2::read::MultiGzDecoder;
use mockall::mock;
use mockall::predicate::eq;
use tokio_test::assert_err;

use gwasgene_core::catalog::{Accession, StudyLink};
use gwasgene_core::ports::{CatalogClientPort, CatalogPortError, CatalogPortResult};
use gwasgene_core::{Manifest, SumstatError, SumstatSource};
use gwasgene_fetch::{
    FetchConfig, FetchDeps, FetchError, FetchEvent, FetchEventSink, TestDataBuilder,
    TestDataSources,
};

mock! {
    Catalog {}

    #[async_trait]
    impl CatalogClientPort for Catalog {
        async fn gene_based_studies(&self, pubmed_id: u64) -> CatalogPortResult<Vec<StudyLink>>;
        fn sumstat_directory(&self, accession: &Accession) -> String;
        async fn sumstat_file_url(&self, directory_url: &str) -> CatalogPortResult<String>;
        async fn download_to(&self, url: &str, dest: &Path) -> CatalogPortResult<u64>;
    }
}

const SUMSTAT: &str = "gene_name\tchromosome\tbase_pair_location\tp_value\n\
                       A1BG\t19\t58345178\t0.5\n\
                       A2M\t12\t9067664\t0.01\n\
                       NAT1\t8\t18170477\t0.2\n\
                       NAT2\t8\t18391245\t1e-8\n\
                       SERPINA3\t14\t94612391\t0.9\n";

#[derive(Default)]
struct RecordingSink(Mutex<Vec<FetchEvent>>);

impl FetchEventSink for RecordingSink {
    fn emit(&self, event: FetchEvent) {
        self.0.lock().unwrap().push(event);
    }
}

/// A catalog whose FTP directories all list `<accession>.tsv.gz`.
fn listing_catalog() -> MockCatalog {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_sumstat_directory()
        .returning(|accession| format!("http://ftp/{accession}"));
    catalog.expect_sumstat_file_url().returning(|dir: &str| {
        let accession = dir.rsplit('/').next().unwrap_or_default();
        Ok(format!("{dir}/{accession}.tsv.gz"))
    });
    catalog
}

fn serving(catalog: &mut MockCatalog, body: &'static str) {
    catalog
        .expect_download_to()
        .returning(move |_url: &str, dest: &Path| {
            std::fs::write(dest, body).unwrap();
            Ok(body.len() as u64)
        });
}

fn builder(catalog: MockCatalog, data_dir: &Path) -> TestDataBuilder {
    builder_with_config(catalog, FetchConfig::new(data_dir))
}

fn builder_with_config(catalog: MockCatalog, config: FetchConfig) -> TestDataBuilder {
    TestDataBuilder::new(FetchDeps::new(Arc::new(catalog)), config)
}

fn read_gz_lines(path: &Path) -> Vec<String> {
    let mut text = String::new();
    MultiGzDecoder::new(std::fs::File::open(path).unwrap())
        .read_to_string(&mut text)
        .unwrap();
    text.lines().map(str::to_string).collect()
}

// ============================================================================
// Query phase
// ============================================================================

#[tokio::test]
async fn query_catalog_orders_gcsts_before_publications() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = listing_catalog();
    catalog
        .expect_gene_based_studies()
        .with(eq(34_662_886))
        .times(1)
        .returning(|_| {
            Ok(vec![
                StudyLink::new("https://api/studies/GCST90082670"),
                StudyLink::new("https://api/studies/GCST90082671"),
            ])
        });

    let gcsts = vec!["GCST90082112".to_string(), "GCST90000001".to_string()];
    let manifest = builder(catalog, dir.path())
        .query_catalog(&gcsts, &[34_662_886])
        .await
        .unwrap();

    assert_eq!(manifest.sources.len(), 3);
    assert!(manifest.sources[..2].iter().all(|s| s.id == "gcsts" && s.urls.len() == 1));
    let mut gcst_urls: Vec<_> = manifest.sources[..2]
        .iter()
        .map(|s| s.urls[0].clone())
        .collect();
    gcst_urls.sort();
    assert_eq!(
        gcst_urls,
        [
            "http://ftp/GCST90000001/GCST90000001.tsv.gz",
            "http://ftp/GCST90082112/GCST90082112.tsv.gz"
        ]
    );

    assert_eq!(
        manifest.sources[2],
        SumstatSource::new(
            "34662886",
            vec![
                "http://ftp/GCST90082670/GCST90082670.tsv.gz".to_string(),
                "http://ftp/GCST90082671/GCST90082671.tsv.gz".to_string(),
            ]
        )
    );
    assert!(dir.path().join("34662886").is_dir());
}

#[tokio::test]
async fn query_catalog_publication_without_studies_still_gets_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = listing_catalog();
    catalog.expect_gene_based_studies().returning(|_| Ok(Vec::new()));

    let manifest = builder(catalog, dir.path())
        .query_catalog(&[], &[40_021_682])
        .await
        .unwrap();

    assert_eq!(manifest.sources, vec![SumstatSource::new("40021682", vec![])]);
    assert!(dir.path().join("40021682").is_dir());
}

#[tokio::test]
async fn query_catalog_fails_on_missing_tsv() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = MockCatalog::new();
    catalog
        .expect_sumstat_directory()
        .returning(|accession| format!("http://ftp/{accession}"));
    catalog.expect_sumstat_file_url().returning(|dir: &str| {
        Err(CatalogPortError::NoSumstatFile {
            url: dir.to_string(),
        })
    });

    let result = builder(catalog, dir.path())
        .query_catalog(&["GCST1".to_string()], &[])
        .await;
    let err = assert_err!(result);

    assert!(matches!(
        err,
        FetchError::Catalog(CatalogPortError::NoSumstatFile { .. })
    ));
}

#[tokio::test]
async fn query_catalog_rejects_non_accession_lines() {
    let dir = tempfile::tempdir().unwrap();
    let result = builder(MockCatalog::new(), dir.path())
        .query_catalog(&["# not an accession".to_string()], &[])
        .await;
    let err = assert_err!(result);

    assert!(matches!(
        err,
        FetchError::Catalog(CatalogPortError::InvalidAccession { .. })
    ));
}

// ============================================================================
// Download phase
// ============================================================================

#[tokio::test]
async fn download_sumstats_samples_every_url() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = MockCatalog::new();
    serving(&mut catalog, SUMSTAT);

    let manifest = Manifest {
        sources: vec![
            SumstatSource::new("gcsts", vec!["http://ftp/GCST1/GCST1.tsv.gz".to_string()]),
            SumstatSource::new(
                "36088354",
                vec!["http://ftp/GCST2/GCST2_buildGRCh38.tsv".to_string()],
            ),
        ],
    };

    let sink = Arc::new(RecordingSink::default());
    let deps = FetchDeps::new(Arc::new(catalog)).with_events(sink.clone());
    let config = FetchConfig::new(dir.path()).with_sample_size(3);
    let summary = TestDataBuilder::new(deps, config)
        .download_sumstats(&manifest)
        .await
        .unwrap();

    assert_eq!(summary.completed.len(), 2);
    assert_eq!(summary.written(), 2);
    assert_eq!(summary.skipped(), 0);

    let first = read_gz_lines(&dir.path().join("gcsts/GCST1.tsv.gz"));
    assert_eq!(first.len(), 4);
    assert!(first[0].starts_with("gene_name\t"));
    let second = dir.path().join("36088354/GCST2_buildGRCh38.tsv.gz");
    assert_eq!(read_gz_lines(&second).len(), 4);

    let events = sink.0.lock().unwrap();
    assert_eq!(events[0], FetchEvent::JobsQueued { total: 2 });
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, FetchEvent::JobFinished { .. }))
            .count(),
        2
    );

    // Temp downloads are cleaned up
    let leftovers: Vec<_> = std::fs::read_dir(dir.path().join("gcsts"))
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().starts_with('.'))
        .collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn download_sumstats_keeps_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = MockCatalog::new();
    catalog.expect_download_to().never();

    // Seed an existing sample
    let seed_input = dir.path().join("seed.tsv");
    std::fs::write(&seed_input, SUMSTAT).unwrap();
    std::fs::create_dir_all(dir.path().join("gcsts")).unwrap();
    let existing = dir.path().join("gcsts/GCST1.tsv.gz");
    gwasgene_core::sample_sumstat(&seed_input, &existing, &gwasgene_core::SampleOptions::default())
        .unwrap();

    let manifest = Manifest {
        sources: vec![SumstatSource::new(
            "gcsts",
            vec!["http://ftp/GCST1/GCST1.tsv.gz".to_string()],
        )],
    };
    let summary = builder(catalog, dir.path())
        .download_sumstats(&manifest)
        .await
        .unwrap();

    assert_eq!(summary.skipped(), 1);
    assert_eq!(read_gz_lines(&existing).len(), 6);
}

#[tokio::test]
async fn download_sumstats_rejects_header_only_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = MockCatalog::new();
    serving(&mut catalog, "gene_name\tchromosome\tbase_pair_location\tp_value\n");

    let manifest = Manifest {
        sources: vec![SumstatSource::new(
            "gcsts",
            vec!["http://ftp/GCST9/GCST9.tsv".to_string()],
        )],
    };
    let result = builder(catalog, dir.path())
        .download_sumstats(&manifest)
        .await;
    let err = assert_err!(result);

    match err {
        FetchError::Sample { url, source } => {
            assert_eq!(url, "http://ftp/GCST9/GCST9.tsv");
            assert!(matches!(source, SumstatError::EmptyOutput { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!dir.path().join("gcsts/GCST9.tsv.gz").exists());
}

#[tokio::test]
async fn download_failure_does_not_stop_other_jobs() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = MockCatalog::new();
    catalog
        .expect_download_to()
        .returning(|url: &str, dest: &Path| {
            if url.contains("GCST404") {
                return Err(CatalogPortError::NotFound {
                    url: url.to_string(),
                });
            }
            std::fs::write(dest, SUMSTAT).unwrap();
            Ok(SUMSTAT.len() as u64)
        });

    let manifest = Manifest {
        sources: vec![SumstatSource::new(
            "gcsts",
            vec![
                "http://ftp/GCST404/GCST404.tsv".to_string(),
                "http://ftp/GCST5/GCST5.tsv".to_string(),
            ],
        )],
    };
    let config = FetchConfig::new(dir.path()).with_download_workers(1);
    let result = builder_with_config(catalog, config)
        .download_sumstats(&manifest)
        .await;
    let err = assert_err!(result);

    assert!(matches!(
        err,
        FetchError::Catalog(CatalogPortError::NotFound { .. })
    ));
    assert!(dir.path().join("gcsts/GCST5.tsv.gz").exists());
}

// ============================================================================
// Full run
// ============================================================================

#[tokio::test]
async fn create_test_data_uses_cached_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let manifest_path = dir.path().join("urls.json");
    Manifest {
        sources: vec![SumstatSource::new(
            "37592023",
            vec!["http://ftp/GCST7/GCST7.tsv.gz".to_string()],
        )],
    }
    .save(&manifest_path)
    .unwrap();

    let mut catalog = MockCatalog::new();
    catalog.expect_gene_based_studies().never();
    serving(&mut catalog, SUMSTAT);

    let data_dir = dir.path().join("data");
    let sources = TestDataSources::new(dir.path().join("missing-gcsts.txt"), &manifest_path);
    let summary = builder(catalog, &data_dir)
        .create_test_data(&sources)
        .await
        .unwrap();

    assert_eq!(summary.written(), 1);
    assert!(data_dir.join("37592023/GCST7.tsv.gz").exists());
}

#[tokio::test]
async fn create_test_data_queries_and_saves_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let gcst_list = dir.path().join("gcsts.txt");
    std::fs::write(&gcst_list, "# curated gene-based accessions\nGCST90082112\n\n").unwrap();
    let manifest_path = dir.path().join("scripts/urls.json");

    let mut catalog = listing_catalog();
    serving(&mut catalog, SUMSTAT);

    let data_dir = dir.path().join("data");
    let sources = TestDataSources::new(&gcst_list, &manifest_path).with_pubmed_ids(vec![]);
    let summary = builder(catalog, &data_dir)
        .create_test_data(&sources)
        .await
        .unwrap();

    assert_eq!(summary.written(), 1);
    let saved = Manifest::load(&manifest_path).unwrap();
    assert_eq!(
        saved.sources,
        vec![SumstatSource::new(
            "gcsts",
            vec!["http://ftp/GCST90082112/GCST90082112.tsv.gz".to_string()]
        )]
    );
    assert!(data_dir.join("gcsts/GCST90082112.tsv.gz").exists());
}
