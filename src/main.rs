use iced::widget::image::Handle;
use iced::widget::{button, column, container, pick_list, row, text};
use iced::{Alignment, Element, Length, Size, Task, Theme};
use rfd::{FileDialog, MessageDialog, MessageLevel};
use std::path::PathBuf;

mod api;
mod download;
mod error;
mod fetch;
mod state;
mod ui;

use api::{listing, Source, WallpaperRecord};
use error::Error;
use fetch::Bitmap;
use state::session::{Session, WINDOW_SIZE};
use ui::SlotState;

/// Main application state
struct WallpaperDownloader {
    /// Source, page, listing and download directory for this run
    session: Session,
    /// One display slot per window position
    slots: Vec<SlotState>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User picked a source in the dropdown
    SourceSelected(Source),
    /// Background listing fetch finished
    ListingFetched {
        generation: u64,
        result: Result<Vec<WallpaperRecord>, Error>,
    },
    /// Page navigation buttons
    FirstPage,
    PreviousPage,
    NextPage,
    /// Background thumbnail fetch finished for one slot
    ThumbnailFetched {
        generation: u64,
        slot: usize,
        result: Result<Bitmap, Error>,
    },
    /// User clicked the folder picker button
    ChooseDownloadDir,
    /// User clicked the download button
    DownloadPage,
}

impl WallpaperDownloader {
    /// Create a new instance of the application and kick off the first
    /// listing fetch.
    fn new() -> (Self, Task<Message>) {
        let download_dir = default_download_dir();
        if let Err(err) = std::fs::create_dir_all(&download_dir) {
            eprintln!("⚠️  Could not create {}: {}", download_dir.display(), err);
        }
        println!("📁 Downloads go to: {}", download_dir.display());

        let mut app = WallpaperDownloader {
            session: Session::new(download_dir),
            slots: vec![SlotState::Empty; WINDOW_SIZE],
            status: String::new(),
        };
        let task = app.spawn_listing_fetch();

        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SourceSelected(source) => {
                self.session.select_source(source);
                self.spawn_listing_fetch()
            }
            Message::ListingFetched { generation, result } => {
                // Only a source switch while the fetch was in flight
                // makes this listing stale; paging does not.
                if !self.session.is_current_source(generation) {
                    return Task::none();
                }

                match result {
                    Ok(records) => {
                        self.session.set_listing(records);
                        self.status =
                            format!("{} wallpapers loaded.", self.session.listing_len());
                        self.spawn_thumbnail_fetches()
                    }
                    Err(err) => {
                        self.session.clear_listing();
                        self.slots = vec![SlotState::Empty; WINDOW_SIZE];
                        self.status = String::from("Listing fetch failed.");
                        show_error_dialog("Failed to fetch wallpaper listing", &err);
                        Task::none()
                    }
                }
            }
            Message::FirstPage => self.change_page(0),
            Message::PreviousPage => self.change_page(self.session.page() as i64 - 1),
            Message::NextPage => self.change_page(self.session.page() as i64 + 1),
            Message::ThumbnailFetched {
                generation,
                slot,
                result,
            } => {
                // Late completions for a page we have already left are
                // dropped here instead of overwriting the current slot.
                if !self.session.is_current(generation) {
                    return Task::none();
                }

                if let Some(state) = self.slots.get_mut(slot) {
                    *state = match result {
                        Ok(bitmap) => SlotState::Loaded(Handle::from_rgba(
                            bitmap.width,
                            bitmap.height,
                            bitmap.pixels,
                        )),
                        Err(err) => SlotState::Failed(err.to_string()),
                    };
                }

                Task::none()
            }
            Message::ChooseDownloadDir => {
                // Native folder picker; cancel is a no-op
                let picked = FileDialog::new()
                    .set_title("Choose download folder")
                    .set_directory(self.session.download_dir())
                    .pick_folder();

                if let Some(dir) = picked {
                    self.session.set_download_dir(dir);
                }

                Task::none()
            }
            Message::DownloadPage => {
                self.download_current_page();
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let controls = row![
            pick_list(
                &Source::ALL[..],
                Some(self.session.source()),
                Message::SourceSelected,
            ),
            text(format!("Page {}", self.session.page() + 1)),
            button("First").on_press(Message::FirstPage),
            button("Previous").on_press(Message::PreviousPage),
            button("Next").on_press(Message::NextPage),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let left = column![
            controls,
            ui::gallery::view(&self.slots),
            text(&self.status).size(14),
        ]
        .spacing(20);

        let sidebar = ui::sidebar::view(
            self.session.source(),
            self.session.current_window().first(),
            self.session.download_dir(),
            Message::ChooseDownloadDir,
            Message::DownloadPage,
        );

        let content = row![left, sidebar].spacing(30).padding(20);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Launch the listing fetch for the currently selected source,
    /// tagged with the current source generation.
    fn spawn_listing_fetch(&mut self) -> Task<Message> {
        let generation = self.session.source_generation();
        let source = self.session.source();

        self.slots = vec![SlotState::Loading; WINDOW_SIZE];
        self.status = format!("Fetching {} wallpapers...", source);

        Task::perform(listing::fetch_listing(source), move |result| {
            Message::ListingFetched { generation, result }
        })
    }

    /// Navigate to `page`; rejected moves leave the state untouched and
    /// only produce a warning in the status line.
    fn change_page(&mut self, page: i64) -> Task<Message> {
        match self.session.goto_page(page) {
            Ok(()) => self.spawn_thumbnail_fetches(),
            Err(err) => {
                self.status = err.to_string();
                Task::none()
            }
        }
    }

    /// One independent background fetch per occupied slot. Completions
    /// carry the slot index and the generation they were spawned for.
    fn spawn_thumbnail_fetches(&mut self) -> Task<Message> {
        let generation = self.session.generation();
        let window = self.session.current_window();

        self.slots = vec![SlotState::Empty; WINDOW_SIZE];

        let mut tasks = Vec::new();
        for (slot, record) in window.iter().enumerate() {
            self.slots[slot] = SlotState::Loading;
            let url = record.url.clone();
            tasks.push(Task::perform(fetch::fetch_thumbnail(url), move |result| {
                Message::ThumbnailFetched {
                    generation,
                    slot,
                    result,
                }
            }));
        }

        Task::batch(tasks)
    }

    /// Download the visible window. Runs blocking on the UI thread and
    /// freezes the interface for the duration; kept deliberately simple
    /// for a window of three images.
    fn download_current_page(&mut self) {
        let window = self.session.current_window().to_vec();
        if window.is_empty() {
            self.status = String::from("Nothing to download on this page.");
            return;
        }

        let dir = self.session.download_dir().to_path_buf();
        if let Err(err) = std::fs::create_dir_all(&dir) {
            show_error_dialog("Download failed", &Error::from(err));
            return;
        }

        let count = download::download_window(&window, &dir, download::fetch_image_bytes);

        if count > 0 {
            self.status = format!("Downloaded {} wallpapers.", count);
            MessageDialog::new()
                .set_level(MessageLevel::Info)
                .set_title("Download complete")
                .set_description(format!(
                    "Saved {} wallpapers to:\n{}",
                    count,
                    dir.display()
                ))
                .show();
        } else {
            self.status = String::from("No wallpapers were downloaded.");
            MessageDialog::new()
                .set_level(MessageLevel::Warning)
                .set_title("Download failed")
                .set_description(
                    "No wallpapers were downloaded. \
                     Check the network connection and the download folder.",
                )
                .show();
        }
    }
}

fn main() -> iced::Result {
    iced::application(
        "Wallpaper Downloader",
        WallpaperDownloader::update,
        WallpaperDownloader::view,
    )
    .theme(WallpaperDownloader::theme)
    .window_size(Size::new(1300.0, 800.0))
    .centered()
    .run_with(WallpaperDownloader::new)
}

/// Blocking error dialog for listing and download failures.
fn show_error_dialog(title: &str, err: &Error) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(err.to_string())
        .show();
}

/// Default download directory: a subfolder of the user's home,
/// created at startup.
fn default_download_dir() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("SmartisanOS_Wallpapers");
    path
}
