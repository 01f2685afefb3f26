/// Per-run session state
///
/// One value of this struct is owned by the UI loop and mutated only by
/// user actions and fetch completions. Background fetch tasks never touch
/// it directly; they report back via messages, and each message carries
/// the generation it was spawned for so stale completions can be dropped.

use std::path::{Path, PathBuf};

use super::paging::{PageError, Pager};
use crate::api::{Source, WallpaperRecord};

/// How many wallpapers are shown (and downloaded) per page.
pub const WINDOW_SIZE: usize = 3;

#[derive(Debug, Clone)]
pub struct Session {
    source: Source,
    pager: Pager,
    listing: Vec<WallpaperRecord>,
    download_dir: PathBuf,
    /// Bumped on every source or page change; thumbnail completions
    /// tagged with an older value are discarded instead of being written
    /// into whatever slot happens to share their index.
    generation: u64,
    /// Bumped only on source change. Listing completions are matched
    /// against this one, so paging while a listing fetch is in flight
    /// does not invalidate it.
    source_generation: u64,
}

impl Session {
    pub fn new(download_dir: PathBuf) -> Self {
        Session {
            source: Source::default(),
            pager: Pager::new(WINDOW_SIZE),
            listing: Vec::new(),
            download_dir,
            generation: 0,
            source_generation: 0,
        }
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn page(&self) -> usize {
        self.pager.page()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn source_generation(&self) -> u64 {
        self.source_generation
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    pub fn set_download_dir(&mut self, dir: PathBuf) {
        self.download_dir = dir;
    }

    pub fn listing_len(&self) -> usize {
        self.listing.len()
    }

    /// Switch to a new source: the page resets to 0 and the old listing
    /// is dropped before the fresh fetch is issued. Both generations
    /// bump, so in-flight listing and thumbnail fetches go stale.
    pub fn select_source(&mut self, source: Source) {
        self.source = source;
        self.pager.reset();
        self.listing.clear();
        self.generation += 1;
        self.source_generation += 1;
    }

    /// Install a freshly fetched listing for the current source.
    pub fn set_listing(&mut self, listing: Vec<WallpaperRecord>) {
        self.listing = listing;
    }

    /// Drop the listing after a failed fetch.
    pub fn clear_listing(&mut self) {
        self.listing.clear();
    }

    /// Change page; on success the thumbnail generation is bumped so
    /// in-flight fetches for the old page go stale. The listing fetch,
    /// if any is in flight, stays current.
    pub fn goto_page(&mut self, page: i64) -> Result<(), PageError> {
        self.pager.try_goto(page, self.listing.len())?;
        self.generation += 1;
        Ok(())
    }

    /// The up-to-`WINDOW_SIZE` records currently on display.
    pub fn current_window(&self) -> &[WallpaperRecord] {
        let (start, end) = self.pager.window_bounds(self.listing.len());
        &self.listing[start..end]
    }

    /// Whether a thumbnail completion tagged with `generation` still
    /// matches the page it was requested for.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Whether a listing completion tagged with `generation` still
    /// matches the source it was requested for.
    pub fn is_current_source(&self, generation: u64) -> bool {
        generation == self.source_generation
    }
}
