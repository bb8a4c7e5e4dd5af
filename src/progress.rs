// src/progress.rs

//! Defines a trait for reporting bundling progress.
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// A trait for reporting progress, abstracting over specific implementations like `indicatif`.
///
/// The bundler sets the length to the number of collected files, updates the
/// message with the file being written, and advances the position after each one.
///
/// # Examples
///
/// ```
/// use srcbundle::progress::ProgressReporter;
/// use std::sync::Mutex;
///
/// struct Recorder {
///     position: Mutex<u64>,
/// }
/// impl ProgressReporter for Recorder {
///     fn set_length(&self, _len: u64) {}
///     fn set_position(&self, pos: u64) {
///         *self.position.lock().unwrap() = pos;
///     }
///     fn set_message(&self, _msg: String) {}
///     fn finish(&self) {}
///     fn finish_with_message(&self, _msg: String) {}
/// }
///
/// let recorder = Recorder { position: Mutex::new(0) };
/// recorder.set_position(3);
/// assert_eq!(*recorder.position.lock().unwrap(), 3);
/// ```
pub trait ProgressReporter {
    /// Sets the total number of files to bundle.
    fn set_length(&self, len: u64);
    /// Sets the number of files handled so far.
    fn set_position(&self, pos: u64);
    /// Sets a descriptive message, usually the file being written.
    fn set_message(&self, msg: String);
    /// Finishes the progress reporting, hiding the progress bar.
    fn finish(&self);
    /// Finishes the progress reporting with a final message.
    fn finish_with_message(&self, msg: String);
}

/// A `ProgressReporter` that does nothing. Used when stderr is not a terminal.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn set_length(&self, _len: u64) {}
    fn set_position(&self, _pos: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self) {}
    fn finish_with_message(&self, _msg: String) {}
}

/// An implementation of `ProgressReporter` using the `indicatif` crate.
#[cfg(feature = "progress")]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    /// Creates a new progress bar drawn on stderr.
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        Self { bar }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn set_length(&self, len: u64) {
        self.bar.set_length(len);
    }

    fn set_position(&self, pos: u64) {
        self.bar.set_position(pos);
    }

    fn set_message(&self, msg: String) {
        self.bar.set_message(msg);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn finish_with_message(&self, msg: String) {
        self.bar.finish_with_message(msg);
    }
}

/// Picks the reporter for the CLI: a progress bar when stderr is a terminal
/// and the `progress` feature is enabled, otherwise `NoOpProgress`.
pub fn reporter_for_stderr() -> Box<dyn ProgressReporter> {
    #[cfg(feature = "progress")]
    {
        if atty::is(atty::Stream::Stderr) {
            return Box::new(IndicatifProgress::new());
        }
    }
    Box::new(NoOpProgress)
}
