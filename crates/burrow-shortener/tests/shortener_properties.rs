use burrow_generator::RandomGenerator;
use burrow_shortener::{Extension, ShortenParams, Shortener, ShortenerError, ShortenerService};
use burrow_storage::InMemoryRepository;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Barrier;

fn service() -> ShortenerService<InMemoryRepository, RandomGenerator> {
    ShortenerService::new(InMemoryRepository::new(), RandomGenerator::new())
}

#[tokio::test]
async fn created_extension_resolves_to_long_url() {
    let service = service();

    for url in ["https://example.com", "https://github.com/", "ftp://x", ""] {
        let ext = service.create(ShortenParams::new(url)).await.unwrap();

        let record = service.stats(&ext).await.unwrap();
        assert_eq!(record.long_url, url);
        assert_eq!(record.access_count, 0);

        assert_eq!(service.resolve(&ext).await.unwrap(), url);
    }
}

#[tokio::test]
async fn resolving_n_times_counts_n() {
    let service = service();
    let ext = service
        .create(ShortenParams::new("https://example.com"))
        .await
        .unwrap();

    for n in 1..=10u64 {
        assert_eq!(service.resolve(&ext).await.unwrap(), "https://example.com");
        assert_eq!(service.stats(&ext).await.unwrap().access_count, n);
    }
}

#[tokio::test]
async fn random_extension_scenario() {
    let service = service();

    let ext = service
        .create(ShortenParams::new("https://example.com"))
        .await
        .unwrap();
    assert_eq!(ext.len(), 8);
    assert!(ext.as_str().chars().all(|c| c.is_ascii_alphanumeric()));

    let record = service.stats(&ext).await.unwrap();
    assert_eq!((record.long_url.as_str(), record.access_count), ("https://example.com", 0));

    for _ in 0..4 {
        service.resolve(&ext).await.unwrap();
    }

    let record = service.stats(&ext).await.unwrap();
    assert_eq!((record.long_url.as_str(), record.access_count), ("https://example.com", 4));
}

#[tokio::test]
async fn custom_extension_scenario() {
    let service = service();

    let ext = service
        .create(ShortenParams::new("https://a.com").with_extension("abc123"))
        .await
        .unwrap();
    assert_eq!(ext.as_str(), "abc123");

    let err = service
        .create(ShortenParams::new("https://b.com").with_extension("abc123"))
        .await
        .unwrap_err();
    assert_eq!(err, ShortenerError::DuplicateKey("abc123".to_string()));

    // The failed create left the original mapping intact.
    assert_eq!(service.resolve(&ext).await.unwrap(), "https://a.com");
}

#[tokio::test]
async fn same_long_url_gets_distinct_extensions() {
    let service = service();

    let first = service
        .create(ShortenParams::new("https://example.com"))
        .await
        .unwrap();
    let second = service
        .create(ShortenParams::new("https://example.com"))
        .await
        .unwrap();

    assert_ne!(first, second);
}

#[tokio::test]
async fn deleted_extension_is_gone_and_reusable() {
    let service = service();
    let ext = service
        .create(ShortenParams::new("https://example.com"))
        .await
        .unwrap();
    service.resolve(&ext).await.unwrap();

    service.delete(&ext).await.unwrap();

    assert!(matches!(
        service.resolve(&ext).await,
        Err(ShortenerError::NotFound(_))
    ));
    assert!(matches!(
        service.stats(&ext).await,
        Err(ShortenerError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(&ext).await,
        Err(ShortenerError::NotFound(_))
    ));

    let reused = service
        .create(ShortenParams::new("https://other.com").with_extension(ext.as_str()))
        .await
        .unwrap();
    assert_eq!(reused, ext);

    let record = service.stats(&reused).await.unwrap();
    assert_eq!(record.long_url, "https://other.com");
    assert_eq!(record.access_count, 0);
}

#[tokio::test]
async fn unknown_extension_is_not_found() {
    let service = service();
    let ext = Extension::new("nonexistent");

    assert_eq!(
        service.delete(&ext).await.unwrap_err(),
        ShortenerError::NotFound("nonexistent".to_string())
    );
    assert_eq!(
        service.resolve(&ext).await.unwrap_err(),
        ShortenerError::NotFound("nonexistent".to_string())
    );
    assert_eq!(
        service.stats(&ext).await.unwrap_err(),
        ShortenerError::NotFound("nonexistent".to_string())
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_resolves_are_all_counted() {
    let service = Arc::new(service());
    let ext = service
        .create(ShortenParams::new("https://example.com"))
        .await
        .unwrap();

    let barrier = Arc::new(Barrier::new(8));
    let mut handles = vec![];
    for _ in 0..8 {
        let service = Arc::clone(&service);
        let barrier = Arc::clone(&barrier);
        let ext = ext.clone();
        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            for _ in 0..250 {
                service.resolve(&ext).await.unwrap();
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(service.stats(&ext).await.unwrap().access_count, 2000);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_custom_creates_admit_exactly_one() {
    let service = Arc::new(service());

    let barrier = Arc::new(Barrier::new(16));
    let mut handles = vec![];
    for i in 0..16 {
        let service = Arc::clone(&service);
        let barrier = Arc::clone(&barrier);
        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            service
                .create(
                    ShortenParams::new(format!("https://example{}.com", i))
                        .with_extension("contested"),
                )
                .await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(ext) => {
                assert_eq!(ext.as_str(), "contested");
                successes += 1;
            }
            Err(e) => assert_eq!(e, ShortenerError::DuplicateKey("contested".to_string())),
        }
    }

    assert_eq!(successes, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_generated_creates_are_unique() {
    let service = Arc::new(service());

    let barrier = Arc::new(Barrier::new(8));
    let mut handles = vec![];
    for _ in 0..8 {
        let service = Arc::clone(&service);
        let barrier = Arc::clone(&barrier);
        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            let mut created = vec![];
            for _ in 0..100 {
                created.push(
                    service
                        .create(ShortenParams::new("https://example.com"))
                        .await
                        .unwrap(),
                );
            }
            created
        }));
    }

    let mut all = HashSet::new();
    for handle in handles {
        all.extend(handle.await.unwrap());
    }

    assert_eq!(all.len(), 800);
    assert_eq!(service.repository().len(), 800);
}
