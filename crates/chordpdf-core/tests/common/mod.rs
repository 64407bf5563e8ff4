//! Instrumented renderer and fixture helpers shared by orchestrator tests.

#![allow(dead_code)]

use chordpdf_core::render::{RenderError, Renderer};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Start/end of one render, tagged with the key directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start { key: String, dest: PathBuf },
    End { key: String, dest: PathBuf },
}

/// Records every call, tracks peak concurrency, and writes a fake PDF.
/// Links containing "fail" return an exit error instead; links containing
/// "panic" panic before any bookkeeping.
pub struct RecordingRenderer {
    delay: Duration,
    active: AtomicUsize,
    peak: AtomicUsize,
    events: Mutex<Vec<Event>>,
    calls: Mutex<Vec<(String, PathBuf)>>,
}

impl RecordingRenderer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            active: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            events: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

fn key_of(dest: &Path) -> String {
    dest.parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl Renderer for RecordingRenderer {
    fn render(&self, link: &str, destination: &Path) -> Result<(), RenderError> {
        if link.contains("panic") {
            panic!("render panicked for {}", link);
        }
        let key = key_of(destination);
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        self.calls
            .lock()
            .unwrap()
            .push((link.to_string(), destination.to_path_buf()));
        self.events.lock().unwrap().push(Event::Start {
            key: key.clone(),
            dest: destination.to_path_buf(),
        });

        std::thread::sleep(self.delay);
        let result = if link.contains("fail") {
            Err(RenderError::Exit {
                code: Some(1),
                stderr: "simulated failure".to_string(),
            })
        } else {
            fs::write(destination, b"%PDF-1.4\n").map_err(|source| RenderError::Spawn {
                program: "recording".to_string(),
                source,
            })
        };

        self.events.lock().unwrap().push(Event::End {
            key,
            dest: destination.to_path_buf(),
        });
        self.active.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

/// Writes `<dir>/<key>.json` holding `count` chords named `<key>n` (every
/// third one a slash chord) linking to `http://chords.test/<key>/<n>`.
pub fn write_key_file(dir: &Path, key: &str, count: usize) {
    let chords: Vec<String> = (0..count)
        .map(|n| {
            let name = if n % 3 == 0 {
                format!("{key}{n}/E")
            } else {
                format!("{key}{n}")
            };
            format!(r#"{{"link":"http://chords.test/{key}/{n}","name":"{name}"}}"#)
        })
        .collect();
    fs::write(dir.join(format!("{key}.json")), format!("[{}]", chords.join(","))).unwrap();
}
