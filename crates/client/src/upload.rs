//! Two-phase upload workflow: image blob, video blob, then the record.
//!
//! [`UploadWorkflow`] models the upload page as an explicit state machine:
//!
//! ```text
//! Idle -> Validating -> UploadingImage -> UploadingVideo
//!      -> CreatingRecord -> Done
//! ```
//!
//! `Failed` is reachable from `Validating` (missing local input, no network
//! calls made) and from every network state (the triggering error's message
//! is surfaced, the form is preserved for retry). Both blob URLs are
//! resolved before the record is created, so no half-populated record is
//! ever persisted.

use aniop_core::model::{Season, VideoEntry, VideoFields};
use aniop_core::store::{BlobStore, FilePayload, RecordStore, StoreError};

/// Message shown when a submission completes.
const SUCCESS_MESSAGE: &str = "entry created";

/// Message shown when required local inputs are missing.
const MISSING_INPUT_MESSAGE: &str = "a name, a cover image and a video file are required";

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

/// Editable form state backing the upload page.
///
/// Text inputs are held as strings exactly as typed; `year` is parsed only
/// at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadForm {
    pub name: String,
    pub song: String,
    /// Entry kind, e.g. "OP" or "ED".
    pub kind: String,
    /// Year as typed; blank or unparseable submits as no year.
    pub year: String,
    pub season: Option<Season>,
    pub date: String,
    pub site: String,
    pub watch: String,
    pub youtube: String,
    /// Selected cover image.
    pub img_file: Option<FilePayload>,
    /// Selected video file.
    pub video_file: Option<FilePayload>,
}

impl UploadForm {
    /// The record fields for this form, with the two resolved blob URLs.
    fn to_fields(&self, img_url: String, video_url: String) -> VideoFields {
        VideoFields {
            name: self.name.clone(),
            song: blank_to_none(&self.song),
            kind: blank_to_none(&self.kind),
            year: self.year.trim().parse().ok(),
            season: self.season,
            date: blank_to_none(&self.date),
            site: blank_to_none(&self.site),
            watch: blank_to_none(&self.watch),
            youtube: blank_to_none(&self.youtube),
            img: Some(img_url),
            url: Some(video_url),
        }
    }
}

fn blank_to_none(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

/// Workflow phases. `Failed` is terminal for one submission; the next
/// submit starts over from validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    Validating,
    UploadingImage,
    UploadingVideo,
    CreatingRecord,
    Done,
    Failed,
}

/// The upload page's state machine.
pub struct UploadWorkflow {
    /// Form fields, freely editable between submissions.
    pub form: UploadForm,
    state: UploadState,
    uploading: bool,
    message: Option<String>,
}

impl Default for UploadWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadWorkflow {
    pub fn new() -> Self {
        Self {
            form: UploadForm::default(),
            state: UploadState::Idle,
            uploading: false,
            message: None,
        }
    }

    /// Current workflow phase.
    pub fn state(&self) -> UploadState {
        self.state
    }

    /// True for the whole span from successful validation through
    /// `Done`/`Failed`. This flag is the sole gate against re-entrant
    /// submission.
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// The success or failure message from the last submission, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Run one submission: validate, upload the image, upload the video,
    /// create the record.
    ///
    /// Uploads are strictly sequential -- the video upload does not start
    /// until the image's view URL is resolved. On success the form resets
    /// to its initial empty values; on failure it is preserved (file
    /// selections included) so the user can retry without re-entering data.
    pub async fn submit(&mut self, blobs: &dyn BlobStore, records: &dyn RecordStore) {
        if self.uploading {
            return;
        }

        self.state = UploadState::Validating;
        self.message = None;

        let (img_file, video_file) = match self.validated_files() {
            Ok(files) => files,
            Err(message) => {
                // Local precondition, not a backend error: no network calls.
                self.state = UploadState::Failed;
                self.message = Some(message);
                return;
            }
        };

        self.uploading = true;

        self.state = UploadState::UploadingImage;
        let img_url = match blobs.upload(img_file).await {
            Ok(url) => url,
            Err(err) => return self.fail(err),
        };

        self.state = UploadState::UploadingVideo;
        let video_url = match blobs.upload(video_file).await {
            Ok(url) => url,
            Err(err) => return self.fail(err),
        };

        self.state = UploadState::CreatingRecord;
        let fields = self.form.to_fields(img_url, video_url);
        match records.create_entry(fields).await {
            Ok(entry) => self.finish(entry),
            Err(err) => return self.fail(err),
        }

        self.uploading = false;
    }

    fn validated_files(&self) -> Result<(FilePayload, FilePayload), String> {
        match (&self.form.img_file, &self.form.video_file) {
            (Some(img), Some(video)) if !self.form.name.is_empty() => {
                Ok((img.clone(), video.clone()))
            }
            _ => Err(MISSING_INPUT_MESSAGE.to_string()),
        }
    }

    fn finish(&mut self, entry: VideoEntry) {
        tracing::info!(id = %entry.id, "Catalog entry created");
        self.state = UploadState::Done;
        self.message = Some(SUCCESS_MESSAGE.to_string());
        self.form = UploadForm::default();
    }

    fn fail(&mut self, err: StoreError) {
        tracing::error!(error = %err, "Upload failed");
        self.state = UploadState::Failed;
        self.message = Some(err.to_string());
        self.uploading = false;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
