use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;

use tracing::debug;

use super::codes::ErrorCode;
use super::metadata::Metadata;
use super::record::ExceptionRecord;

/// Shared behaviour of every exception variant.
///
/// Variants embed a [`BaseException`] and expose it through `base`; the
/// default `serialize` snapshots the base fields and variants extend it with
/// their own.
pub trait Exception: StdError {
    fn base(&self) -> &BaseException;

    fn base_mut(&mut self) -> &mut BaseException;

    /// Variant type tag
    fn name(&self) -> &str {
        self.base().name()
    }

    fn message(&self) -> &str {
        self.base().message()
    }

    /// Full snapshot of the exception, always including message and stack
    fn serialize(&self) -> ExceptionRecord {
        self.base().snapshot()
    }
}

/// An error annotated with a label, a plain-language message and a code.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseException {
    name: &'static str,
    message: String,
    label: Option<String>,
    simple: Option<String>,
    code: Option<ErrorCode>,
    stack: String,
}

impl BaseException {
    pub const NAME: &'static str = "BaseException";

    #[track_caller]
    pub fn new(message: impl Into<String>, metadata: Metadata) -> Self {
        Self::named(Self::NAME, message, metadata)
    }

    /// Construct under a caller-chosen type tag, for user-defined variants
    #[track_caller]
    pub fn named(name: &'static str, message: impl Into<String>, metadata: Metadata) -> Self {
        let message = message.into();
        let stack = capture_stack(name, &message, Location::caller());

        debug!(
            exception = name,
            code = ?metadata.code,
            "Exception constructed"
        );

        Self {
            name,
            message,
            label: metadata.label,
            simple: metadata.simple,
            code: metadata.code,
            stack,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn simple(&self) -> Option<&str> {
        self.simple.as_deref()
    }

    pub fn code(&self) -> Option<&ErrorCode> {
        self.code.as_ref()
    }

    pub fn stack(&self) -> &str {
        &self.stack
    }

    pub fn set_stack(&mut self, stack: impl Into<String>) {
        self.stack = stack.into();
    }

    pub(crate) fn snapshot(&self) -> ExceptionRecord {
        ExceptionRecord {
            name: self.name.to_string(),
            message: self.message.clone(),
            label: self.label.clone(),
            simple: self.simple.clone(),
            code: self.code.clone(),
            stack: Some(self.stack.clone()),
            error: None,
            status: None,
        }
    }
}

impl fmt::Display for BaseException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for BaseException {}

impl Exception for BaseException {
    fn base(&self) -> &BaseException {
        self
    }

    fn base_mut(&mut self) -> &mut BaseException {
        self
    }
}

/// Render a stack trace headed by `name: message`.
///
/// Uses the native backtrace when `RUST_BACKTRACE`/`RUST_LIB_BACKTRACE` enable
/// it, starting at the constructor's caller. Otherwise the trace is the
/// caller's source location alone.
fn capture_stack(name: &str, message: &str, caller: &Location<'_>) -> String {
    let backtrace = Backtrace::capture();
    match backtrace.status() {
        BacktraceStatus::Captured => format!(
            "{}: {}\n{}",
            name,
            message,
            trim_library_frames(&backtrace.to_string(), caller)
        ),
        _ => format!(
            "{}: {}\n    at {}:{}:{}",
            name,
            message,
            caller.file(),
            caller.line(),
            caller.column()
        ),
    }
}

/// Drop the frames that precede the constructor's caller, renumbering the rest.
///
/// The caller frame is found by its `file:line`. Without debug info no
/// locations are printed, so leading frames from this module are dropped by
/// symbol instead.
fn trim_library_frames(rendered: &str, caller: &Location<'_>) -> String {
    let frames = split_frames(rendered);
    let site = format!("{}:{}:", caller.file(), caller.line());

    let start = frames
        .iter()
        .position(|frame| frame.iter().skip(1).any(|line| line.contains(&site)))
        .or_else(|| frames.iter().position(|frame| !is_library_frame(frame[0])))
        .unwrap_or(0);

    let mut out = Vec::new();
    for (index, frame) in frames[start..].iter().enumerate() {
        out.push(format!("{:>4}: {}", index, frame_symbol(frame[0])));
        out.extend(frame[1..].iter().map(|line| line.to_string()));
    }
    out.join("\n")
}

/// Group rendered backtrace lines by frame; each frame opens with `N: symbol`
fn split_frames(rendered: &str) -> Vec<Vec<&str>> {
    let mut frames: Vec<Vec<&str>> = Vec::new();
    for line in rendered.lines() {
        if is_frame_header(line) || frames.is_empty() {
            frames.push(vec![line]);
        } else if let Some(frame) = frames.last_mut() {
            frame.push(line);
        }
    }
    frames
}

fn is_frame_header(line: &str) -> bool {
    line.trim_start()
        .split_once(": ")
        .is_some_and(|(index, _)| !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()))
}

fn frame_symbol(header: &str) -> &str {
    header
        .trim_start()
        .split_once(": ")
        .map_or(header, |(_, symbol)| symbol)
}

fn is_library_frame(header: &str) -> bool {
    let symbol = frame_symbol(header);
    symbol.contains("exception_kit::errors::") && !symbol.contains("::tests::")
}
