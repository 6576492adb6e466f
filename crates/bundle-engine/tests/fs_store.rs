//! Filesystem store tests against a real temporary directory.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use tempfile::tempdir;

use bundle_engine::error::AssetError;
use bundle_engine::fetch::AssetFetcher;
use bundle_engine::path_map::PathMapper;
use bundle_engine::store::{FsStore, StoreProvider};
use bundle_engine::{
    BundleDownloader, CacheManager, Manifest, ManifestError, ManifestSource, NoopObserver,
};

#[inline]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn write_creates_nested_directories_and_round_trips() {
    init_tracing();
    let dir = tempdir().unwrap();
    let store = FsStore::new(dir.path());
    let path = dir.path().join("pkg/deep/a.png");
    let payload = Bytes::from_static(&[1, 2, 3]);

    store.write(&path, payload.clone()).await.unwrap();

    assert!(store.exists(&path).await);
    assert_eq!(store.read(&path).await.unwrap(), payload);
}

#[tokio::test]
async fn write_overwrites_in_place() {
    let dir = tempdir().unwrap();
    let store = FsStore::new(dir.path());
    let path = dir.path().join("pkg/a.png");

    store.write(&path, Bytes::from_static(b"old")).await.unwrap();
    store.write(&path, Bytes::from_static(b"newer")).await.unwrap();

    assert_eq!(store.read(&path).await.unwrap(), Bytes::from_static(b"newer"));
}

#[tokio::test]
async fn exists_is_false_for_directories_and_missing_paths() {
    let dir = tempdir().unwrap();
    let store = FsStore::new(dir.path());
    let nested = dir.path().join("pkg/a.png");
    store.write(&nested, Bytes::from_static(b"x")).await.unwrap();

    // `pkg` is a directory, not a cached entry.
    assert!(!store.exists(&dir.path().join("pkg")).await);
    assert!(!store.exists(&dir.path().join("pkg/missing.png")).await);
}

#[tokio::test]
async fn clear_all_removes_files_and_subtrees() {
    let dir = tempdir().unwrap();
    let store = FsStore::new(dir.path());
    let top = dir.path().join("top.bin");
    let nested = dir.path().join("pkg/a.png");
    store.write(&top, Bytes::from_static(b"top")).await.unwrap();
    store.write(&nested, Bytes::from_static(b"nested")).await.unwrap();

    store.clear_all().await.unwrap();

    assert!(!store.exists(&top).await);
    assert!(!store.exists(&nested).await);
    assert_eq!(store.total_size().await.unwrap(), 0);
}

#[tokio::test]
async fn clear_all_on_missing_root_is_a_no_op() {
    let dir = tempdir().unwrap();
    let store = FsStore::new(dir.path().join("never-created"));
    store.clear_all().await.unwrap();
}

#[tokio::test]
async fn total_size_counts_only_immediate_children() {
    let dir = tempdir().unwrap();
    let store = FsStore::new(dir.path());
    store
        .write(&dir.path().join("top.bin"), Bytes::from_static(&[0; 10]))
        .await
        .unwrap();
    store
        .write(&dir.path().join("pkg/nested.bin"), Bytes::from_static(&[0; 100]))
        .await
        .unwrap();

    assert_eq!(store.total_size().await.unwrap(), 10);
}

// End-to-end: manifest -> downloader -> filesystem cache.

struct FixedSource(Manifest);

#[async_trait]
impl ManifestSource for FixedSource {
    async fn fetch(&self, _identifier: &str) -> Result<Manifest, ManifestError> {
        Ok(self.0.clone())
    }
}

struct CountingFetcher {
    data: Bytes,
    calls: AtomicUsize,
}

#[async_trait]
impl AssetFetcher for CountingFetcher {
    async fn fetch(&self, location: &str) -> Result<Bytes, AssetError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if location.ends_with("missing.png") {
            return Err(AssetError::DownloadFailed(StatusCode::NOT_FOUND));
        }
        Ok(self.data.clone())
    }
}

#[tokio::test]
async fn repeated_runs_reuse_the_cache_on_disk() {
    init_tracing();
    let dir = tempdir().unwrap();
    let fetcher = Arc::new(CountingFetcher {
        data: Bytes::from_static(&[1, 2, 3]),
        calls: AtomicUsize::new(0),
    });
    let store = Arc::new(FsStore::new(dir.path()));
    let cache = CacheManager::new(PathMapper::new(dir.path()), store.clone(), fetcher.clone());
    let manifest = Manifest {
        id: "m1".to_string(),
        kind: "sticker-pack".to_string(),
        version: 1,
        assets: vec![
            "https://cdn.example.com/pkg/a.png".to_string(),
            "https://cdn.example.com/pkg/missing.png".to_string(),
        ],
    };
    let downloader = BundleDownloader::new(Arc::new(FixedSource(manifest)), cache);

    let first = downloader.run("m1", &NoopObserver).await.unwrap();
    assert_eq!((first.attempted, first.cached, first.failed), (2, 1, 1));
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
    assert_eq!(
        store.read(&dir.path().join("pkg/a.png")).await.unwrap(),
        Bytes::from_static(&[1, 2, 3])
    );

    // Second run: the cached asset is served locally, only the failing one
    // is fetched again.
    let second = downloader.run("m1", &NoopObserver).await.unwrap();
    assert_eq!((second.attempted, second.cached, second.failed), (2, 1, 1));
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn clearing_the_cache_forces_a_refetch() {
    let dir = tempdir().unwrap();
    let fetcher = Arc::new(CountingFetcher {
        data: Bytes::from_static(b"abc"),
        calls: AtomicUsize::new(0),
    });
    let cache = CacheManager::new(
        PathMapper::new(dir.path()),
        Arc::new(FsStore::new(dir.path())),
        fetcher.clone(),
    );
    let location = "https://cdn.example.com/pkg/a.png";

    cache.get_asset(location).await.unwrap();
    cache.get_asset(location).await.unwrap();
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);

    cache.clear().await.unwrap();
    assert!(!cache.is_cached(location).await.unwrap());

    cache.get_asset(location).await.unwrap();
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
}
