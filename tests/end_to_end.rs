use std::fs;
use std::process::Command;
use tempfile::TempDir;
use tracemusic::convert::convert_source;
use tracemusic::trace::FileTraceSource;
use tracemusic::{load_document, load_trace, save_document, Instrument, Key, Note, TraceError};

const TWO_STEP_TRACE: &str = r#"{
  "metadata": { "total_instructions": 2, "timestamp": 1700000000.25, "tracer_version": "1.0" },
  "instructions": [
    {
      "step": 0,
      "pc": "0x555555555149",
      "instruction": "mov %rax,%rbx",
      "registers": { "rax": "0x10", "rbx": "0x20" },
      "memory": { "read": null, "write": null, "address": null },
      "timestamp": 1700000000.1
    },
    {
      "step": 1,
      "pc": "0x55555555514c",
      "instruction": "call 0x400000",
      "registers": { "rax": "0x5" }
    }
  ]
}"#;

#[test]
fn test_load_convert_save_reload() {
    let dir = TempDir::new().unwrap();
    let trace_path = dir.path().join("cpu_trace.json");
    let out_path = dir.path().join("musical_data.json");
    fs::write(&trace_path, TWO_STEP_TRACE).unwrap();

    let trace = load_trace(&trace_path).unwrap();
    assert_eq!(trace.metadata.as_ref().and_then(|m| m.total_instructions), Some(2));

    let conversion = convert_source(&FileTraceSource::new(&trace_path)).unwrap();
    assert!(conversion.warnings.is_empty());
    save_document(&out_path, &conversion.document).unwrap();

    let doc = load_document(&out_path).unwrap();
    assert_eq!(doc, conversion.document);
    assert_eq!(doc.notes, vec![Note::C4, Note::C5]);
    assert_eq!(doc.rhythms, vec![0.25, 0.5]);
    assert_eq!(doc.instruments, vec![Instrument::Guitar, Instrument::Piano]);
    assert_eq!(doc.tempo, 90);
    assert_eq!(doc.key, Key::D);
    assert_eq!(doc.metadata.source_trace, trace_path.display().to_string());
}

#[test]
fn test_saved_output_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let trace_path = dir.path().join("cpu_trace.json");
    fs::write(&trace_path, TWO_STEP_TRACE).unwrap();

    let source = FileTraceSource::new(&trace_path);
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    save_document(&a, &convert_source(&source).unwrap().document).unwrap();
    save_document(&b, &convert_source(&source).unwrap().document).unwrap();

    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}

#[test]
fn test_load_errors() {
    let dir = TempDir::new().unwrap();
    let missing = FileTraceSource::new(dir.path().join("missing.json"));
    assert!(matches!(convert_source(&missing), Err(TraceError::NotFound(_))));

    let broken_path = dir.path().join("broken.json");
    fs::write(&broken_path, r#"{"instructions": [{"step": 0}]}"#).unwrap();
    let broken = FileTraceSource::new(&broken_path);
    assert!(matches!(convert_source(&broken), Err(TraceError::Format { .. })));
}

#[test]
fn test_cli_convert_and_summary() {
    let dir = TempDir::new().unwrap();
    let trace_path = dir.path().join("cpu_trace.json");
    let out_path = dir.path().join("out.json");
    fs::write(&trace_path, TWO_STEP_TRACE).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_trace2music"))
        .arg("convert")
        .arg(&trace_path)
        .arg("--output")
        .arg(&out_path)
        .arg("--quiet")
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(load_document(&out_path).unwrap().key, Key::D);

    let output = Command::new(env!("CARGO_BIN_EXE_trace2music"))
        .arg("summary")
        .arg(&out_path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Tempo: 90 BPM"));
    assert!(stdout.contains("C4 (quarter) - guitar"));
}

#[test]
fn test_cli_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_trace2music"))
        .arg("convert")
        .arg(dir.path().join("nope.json"))
        .arg("--output")
        .arg(dir.path().join("out.json"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("trace not found"));
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn test_cli_malformed_trace_fails() {
    let dir = TempDir::new().unwrap();
    let trace_path = dir.path().join("broken.json");
    let out_path = dir.path().join("out.json");
    // step record without "registers"
    fs::write(
        &trace_path,
        r#"{"instructions": [{"step": 0, "pc": "0x0", "instruction": "nop"}]}"#,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_trace2music"))
        .arg("convert")
        .arg(&trace_path)
        .arg("--output")
        .arg(&out_path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("malformed trace"));
    assert!(!out_path.exists());
}

#[test]
fn test_cli_synth_then_convert() {
    let dir = TempDir::new().unwrap();
    let trace_path = dir.path().join("synthetic.json");
    let out_path = dir.path().join("music.json");

    let status = Command::new(env!("CARGO_BIN_EXE_trace2music"))
        .args(["synth", "Hello"])
        .arg("-o")
        .arg(&trace_path)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(load_trace(&trace_path).unwrap().len(), 5);

    let status = Command::new(env!("CARGO_BIN_EXE_trace2music"))
        .arg("convert")
        .arg(&trace_path)
        .arg("-o")
        .arg(&out_path)
        .arg("-q")
        .status()
        .unwrap();
    assert!(status.success());

    let doc = load_document(&out_path).unwrap();
    assert_eq!(doc.notes, vec![Note::C4, Note::D4, Note::C4, Note::D4, Note::C4]);
    assert_eq!(doc.rhythms, vec![0.25, 0.375, 0.25, 0.375, 0.25]);
    assert!(doc.instruments.iter().all(|&i| i == Instrument::Violin));
}
