/// Full-resolution downloads for the current page
///
/// Downloads run synchronously when triggered and block the interface
/// for the duration; an accepted simplification for a page of three
/// images. Per-record failures are logged and skipped so one bad record
/// never aborts the rest of the window.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::WallpaperRecord;
use crate::error::Error;

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(20);

/// Download every record in `window` that has both an id and a URL,
/// writing each as `{dir}/{id}.jpg`. Returns the number of successful
/// writes. The byte transfer is injected as `fetch` so the skip/count
/// semantics can be exercised without a network.
pub fn download_window<F>(window: &[WallpaperRecord], dir: &Path, mut fetch: F) -> usize
where
    F: FnMut(&str) -> Result<Vec<u8>, Error>,
{
    let mut downloaded = 0;

    for record in window {
        if record.id.is_empty() || record.url.is_empty() {
            continue;
        }

        let result = fetch(&record.url).and_then(|bytes| write_image(dir, &record.id, &bytes));

        match result {
            Ok(path) => {
                downloaded += 1;
                println!("⬇️  Saved {}", path.display());
            }
            Err(err) => {
                // Skipped, not fatal; remaining records still download.
                eprintln!("⚠️  Download of {} failed: {}", record.id, err);
            }
        }
    }

    downloaded
}

/// Blocking fetch of the full image bytes for one record.
pub fn fetch_image_bytes(url: &str) -> Result<Vec<u8>, Error> {
    let client = reqwest::blocking::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .build()?;

    let bytes = client.get(url).send()?.error_for_status()?.bytes()?;

    Ok(bytes.to_vec())
}

/// Write image bytes as `{dir}/{id}.jpg`, overwriting any existing file.
/// The `.jpg` name is kept regardless of the actual encoding, matching
/// the upstream API's own naming.
fn write_image(dir: &Path, id: &str, bytes: &[u8]) -> Result<PathBuf, Error> {
    let path = dir.join(format!("{}.jpg", id));
    fs::write(&path, bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, url: &str) -> WallpaperRecord {
        WallpaperRecord {
            id: String::from(id),
            author: String::from("author"),
            desc: String::from("desc"),
            url: String::from(url),
        }
    }

    /// Fresh per-test directory under the system temp dir.
    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wallpaper-downloader-test-{}", name));
        if dir.exists() {
            fs::remove_dir_all(&dir).unwrap();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Stub transfer: the body is the URL itself, so each file's content
    /// is predictable.
    fn url_as_bytes(url: &str) -> Result<Vec<u8>, Error> {
        Ok(url.as_bytes().to_vec())
    }

    #[test]
    fn test_full_window_downloads_three_files() {
        let dir = temp_dir("full-window");
        let window = [
            record("a", "http://x/a.jpg"),
            record("b", "http://x/b.jpg"),
            record("c", "http://x/c.jpg"),
        ];

        let count = download_window(&window, &dir, url_as_bytes);

        assert_eq!(count, 3);
        for id in ["a", "b", "c"] {
            assert!(dir.join(format!("{}.jpg", id)).is_file());
        }
    }

    #[test]
    fn test_written_bytes_match_fetched_body() {
        let dir = temp_dir("round-trip");
        let window = [record("42", "http://x/42.jpg")];

        let count = download_window(&window, &dir, url_as_bytes);

        assert_eq!(count, 1);
        let written = fs::read(dir.join("42.jpg")).unwrap();
        assert_eq!(written, b"http://x/42.jpg");
    }

    #[test]
    fn test_record_without_url_is_skipped_without_error() {
        let dir = temp_dir("missing-url");
        let window = [
            record("a", "http://x/a.jpg"),
            record("b", ""),
            record("c", "http://x/c.jpg"),
        ];

        let count = download_window(&window, &dir, url_as_bytes);

        assert_eq!(count, 2);
        assert!(!dir.join("b.jpg").exists());
    }

    #[test]
    fn test_record_without_id_is_skipped() {
        let dir = temp_dir("missing-id");
        let window = [record("", "http://x/anon.jpg"), record("a", "http://x/a.jpg")];

        let count = download_window(&window, &dir, url_as_bytes);

        assert_eq!(count, 1);
    }

    #[test]
    fn test_failed_fetch_does_not_abort_remaining_downloads() {
        let dir = temp_dir("partial-failure");
        let window = [
            record("a", "http://x/a.jpg"),
            record("b", "http://x/broken.jpg"),
            record("c", "http://x/c.jpg"),
        ];

        let count = download_window(&window, &dir, |url| {
            if url.contains("broken") {
                Err(Error::Network(String::from("connection reset")))
            } else {
                url_as_bytes(url)
            }
        });

        assert_eq!(count, 2);
        assert!(dir.join("a.jpg").is_file());
        assert!(!dir.join("b.jpg").exists());
        assert!(dir.join("c.jpg").is_file());
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = temp_dir("overwrite");
        fs::write(dir.join("a.jpg"), b"old bytes").unwrap();
        let window = [record("a", "http://x/a.jpg")];

        let count = download_window(&window, &dir, url_as_bytes);

        assert_eq!(count, 1);
        assert_eq!(fs::read(dir.join("a.jpg")).unwrap(), b"http://x/a.jpg");
    }

    #[test]
    fn test_empty_window_downloads_nothing() {
        let dir = temp_dir("empty-window");
        let count = download_window(&[], &dir, url_as_bytes);
        assert_eq!(count, 0);
    }
}
