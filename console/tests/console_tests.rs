use std::fs;
use std::process::Command;
use tempfile::tempdir;

const CORPUS: &str = "a in and the\n3\nwhite cat and fancy collar\nfluffy cat fluffy tail\ngroomed dog expressive eyes\nfluffy groomed cat\n";

fn run(args: &[&str], corpus: &str) -> String {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corpus.txt");
    fs::write(&path, corpus).unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_search-console"))
        .arg("--input")
        .arg(&path)
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn prints_ranked_documents() {
    let stdout = run(&[], CORPUS);
    assert_eq!(
        stdout,
        "{ document_id = 1, relevance = 0.650672 }\n\
         { document_id = 2, relevance = 0.274653 }\n\
         { document_id = 0, relevance = 0.101366 }\n"
    );
}

#[test]
fn max_results_limits_output() {
    let stdout = run(&["--max-results", "1"], CORPUS);
    assert_eq!(stdout, "{ document_id = 1, relevance = 0.650672 }\n");
}

#[test]
fn json_format_emits_an_array_per_query() {
    let stdout = run(&["--format", "json"], "\n2\ncat dog\ncat\ncat -dog\ndog\n");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first, serde_json::json!([{ "id": 1, "relevance": 0.0 }]));
    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second[0]["id"], 0);
}

#[test]
fn empty_documents_are_skipped_not_fatal() {
    let stdout = run(&[], "the\n2\nthe the\ncat\ncat\n");
    assert_eq!(stdout, "{ document_id = 1, relevance = 0 }\n");
}
