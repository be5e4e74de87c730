//! Batch integration tests
//!
//! Drives listing, pairing and the runner against real directories with a
//! muxer that records calls instead of spawning ffmpeg.

use clubber::batch::{BatchEvent, BatchRunner, PairStatus};
use clubber::config::{MediaConfig, PathsConfig};
use clubber::console::Console;
use clubber_av::{Error, Muxer, Result};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::{tempdir, TempDir};

#[derive(Default)]
struct RecordingMuxer {
    calls: RefCell<Vec<(String, String, PathBuf)>>,
    /// Video names whose mux attempt fails
    failing_videos: Vec<&'static str>,
}

impl RecordingMuxer {
    fn failing(videos: &[&'static str]) -> Self {
        Self {
            failing_videos: videos.to_vec(),
            ..Default::default()
        }
    }

    fn pairs(&self) -> Vec<(String, String)> {
        self.calls
            .borrow()
            .iter()
            .map(|(v, a, _)| (v.clone(), a.clone()))
            .collect()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().to_string()
}

impl Muxer for RecordingMuxer {
    fn mux(&self, video: &Path, audio: &Path, output: &Path) -> Result<()> {
        let video_name = file_name(video);
        self.calls
            .borrow_mut()
            .push((video_name.clone(), file_name(audio), output.to_path_buf()));
        if self.failing_videos.contains(&video_name.as_str()) {
            return Err(Error::tool_failed("ffmpeg", "exit status: 1"));
        }
        Ok(())
    }
}

struct Layout {
    _root: TempDir,
    paths: PathsConfig,
}

fn layout(videos: &[&str], audios: &[&str]) -> Layout {
    let root = tempdir().unwrap();
    let paths = PathsConfig {
        audio_dir: root.path().join("inputaudio"),
        video_dir: root.path().join("inputvideo"),
        output_dir: root.path().join("output"),
    };
    fs::create_dir(&paths.audio_dir).unwrap();
    fs::create_dir(&paths.video_dir).unwrap();
    for name in videos {
        fs::write(paths.video_dir.join(name), name.as_bytes()).unwrap();
    }
    for name in audios {
        fs::write(paths.audio_dir.join(name), name.as_bytes()).unwrap();
    }
    Layout { _root: root, paths }
}

fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
    list.iter()
        .map(|(v, a)| (v.to_string(), a.to_string()))
        .collect()
}

#[test]
fn test_two_by_two_scenario() {
    let l = layout(&["b.mp4", "a.mp4"], &["y.wav", "x.mp3"]);
    let muxer = RecordingMuxer::default();

    let report = BatchRunner::new(&muxer, l.paths.clone())
        .run(&MediaConfig::default())
        .unwrap();

    assert_eq!(report.attempted(), 2);
    assert_eq!(
        muxer.pairs(),
        pairs(&[("a.mp4", "x.mp3"), ("b.mp4", "y.wav")])
    );
    let outputs: Vec<PathBuf> = muxer.calls.borrow().iter().map(|c| c.2.clone()).collect();
    assert_eq!(
        outputs,
        vec![
            l.paths.output_dir.join("a.mp4"),
            l.paths.output_dir.join("b.mp4")
        ]
    );
}

#[test]
fn test_three_videos_one_audio() {
    let l = layout(&["a.mp4", "b.mp4", "c.mp4"], &["x.mp3"]);
    let muxer = RecordingMuxer::default();

    let report = BatchRunner::new(&muxer, l.paths.clone())
        .run(&MediaConfig::default())
        .unwrap();

    assert_eq!(muxer.calls.borrow().len(), 1);
    assert_eq!(report.attempted(), 1);
    assert_eq!(report.unpaired_videos, vec!["b.mp4", "c.mp4"]);
}

#[test]
fn test_attempts_equal_min_of_counts() {
    for (v, a) in [(0usize, 3usize), (3, 0), (2, 5), (5, 2), (4, 4)] {
        let videos: Vec<String> = (0..v).map(|i| format!("v{i}.mp4")).collect();
        let audios: Vec<String> = (0..a).map(|i| format!("a{i}.wav")).collect();
        let videos: Vec<&str> = videos.iter().map(String::as_str).collect();
        let audios: Vec<&str> = audios.iter().map(String::as_str).collect();
        let l = layout(&videos, &audios);
        let muxer = RecordingMuxer::default();

        let report = BatchRunner::new(&muxer, l.paths.clone())
            .run(&MediaConfig::default())
            .unwrap();

        assert_eq!(report.attempted(), v.min(a), "videos={v} audios={a}");
    }
}

#[test]
fn test_non_matching_extensions_never_pair() {
    let l = layout(
        &["a.mkv", "b.mp4", "c.txt", "D.MP4"],
        &["a.flac", "b.mp3", "c.txt", "d.WAV"],
    );
    let muxer = RecordingMuxer::default();

    BatchRunner::new(&muxer, l.paths.clone())
        .run(&MediaConfig::default())
        .unwrap();

    // "D.MP4" sorts before "b.mp4"
    assert_eq!(
        muxer.pairs(),
        pairs(&[("D.MP4", "b.mp3"), ("b.mp4", "d.WAV")])
    );
}

#[test]
fn test_file_contents_do_not_affect_pairing() {
    let l = layout(&["a.mp4", "b.mp4"], &["x.mp3", "y.mp3"]);
    fs::write(l.paths.video_dir.join("a.mp4"), vec![0u8; 4096]).unwrap();
    fs::write(l.paths.audio_dir.join("y.mp3"), b"different").unwrap();
    let muxer = RecordingMuxer::default();

    BatchRunner::new(&muxer, l.paths.clone())
        .run(&MediaConfig::default())
        .unwrap();

    assert_eq!(
        muxer.pairs(),
        pairs(&[("a.mp4", "x.mp3"), ("b.mp4", "y.mp3")])
    );
}

#[test]
fn test_first_failure_reported_and_second_attempted() {
    let l = layout(&["a.mp4", "b.mp4"], &["x.mp3", "y.wav"]);
    let muxer = RecordingMuxer::failing(&["a.mp4"]);
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&lines);
    let console = Console::default();

    let report = BatchRunner::new(&muxer, l.paths.clone())
        .with_event_callback(Box::new(move |event: &BatchEvent<'_>| {
            sink.lock().unwrap().push(console.line(event));
        }))
        .run(&MediaConfig::default())
        .unwrap();

    assert_eq!(muxer.calls.borrow().len(), 2);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.outcomes[1].status, PairStatus::Succeeded);

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with(" JST] Processing (1): 'a.mp4' with audio 'x.mp3'"));
    assert!(lines[1].contains("] Error processing a.mp4 with x.mp3: tool execution failed"));
    assert!(lines[2].ends_with("] Processing (2): 'b.mp4' with audio 'y.wav'"));
    assert!(lines[3].ends_with("] Processing completed."));
}

#[test]
fn test_custom_extensions() {
    let l = layout(&["a.mov", "b.mp4"], &["x.flac", "y.mp3"]);
    let media = MediaConfig {
        video_extensions: vec!["mov".to_string()],
        audio_extensions: vec![".FLAC".to_string()],
    };
    let muxer = RecordingMuxer::default();

    BatchRunner::new(&muxer, l.paths.clone()).run(&media).unwrap();

    assert_eq!(muxer.pairs(), pairs(&[("a.mov", "x.flac")]));
}

#[test]
fn test_missing_video_dir_aborts_before_any_invocation() {
    let l = layout(&[], &["x.mp3"]);
    fs::remove_dir(&l.paths.video_dir).unwrap();
    let muxer = RecordingMuxer::default();

    let result = BatchRunner::new(&muxer, l.paths.clone()).run(&MediaConfig::default());

    assert!(result.is_err());
    assert!(muxer.calls.borrow().is_empty());
}

#[test]
fn test_existing_output_dir_is_reused() {
    let l = layout(&["a.mp4"], &["x.mp3"]);
    fs::create_dir(&l.paths.output_dir).unwrap();
    fs::write(l.paths.output_dir.join("a.mp4"), b"old").unwrap();
    let muxer = RecordingMuxer::default();

    let report = BatchRunner::new(&muxer, l.paths.clone())
        .run(&MediaConfig::default())
        .unwrap();

    assert_eq!(report.succeeded(), 1);
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_video_keeps_later_pairs_aligned() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let l = layout(&["a.mp4", "c.mp4"], &["x.mp3", "y.mp3", "z.mp3"]);
    let raw = OsStr::from_bytes(b"b\xff.mp4");
    fs::write(l.paths.video_dir.join(raw), b"video").unwrap();
    let muxer = RecordingMuxer::default();

    let report = BatchRunner::new(&muxer, l.paths.clone())
        .run(&MediaConfig::default())
        .unwrap();

    assert_eq!(report.attempted(), 3);
    assert_eq!(
        muxer.pairs(),
        pairs(&[
            ("a.mp4", "x.mp3"),
            ("b\u{FFFD}.mp4", "y.mp3"),
            ("c.mp4", "z.mp3")
        ])
    );
    assert_eq!(muxer.calls.borrow()[1].2, l.paths.output_dir.join(raw));
}
