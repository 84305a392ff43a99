use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run_cmd(stop_list: &Path, args: &[&str]) -> String {
    let output = Command::cargo_bin("dialclean")
        .expect("binary")
        .args(["--stop-list", stop_list.to_str().expect("stop list path")])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(stop_list: &Path, args: &[&str]) -> Value {
    let output = Command::cargo_bin("dialclean")
        .expect("binary")
        .args(["--stop-list", stop_list.to_str().expect("stop list path"), "--json"])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn cli_columns_lists_header_names() {
    let temp = TempDir::new().expect("temp dir");
    let stop_list = temp.path().join("stoplist.csv");
    let input = temp.path().join("export.csv");
    fs::write(&input, "name,phone\nAda,5551234567\n").expect("write input");

    let listed = run_cmd_json(&stop_list, &["columns", input.to_str().unwrap()]);
    assert_eq!(listed, serde_json::json!(["name", "phone"]));
}

#[test]
fn cli_normalize_writes_phonumber_csv() {
    let temp = TempDir::new().expect("temp dir");
    let stop_list = temp.path().join("stoplist.csv");
    let input = temp.path().join("export.csv");
    fs::write(
        &input,
        "name,phone\nAda,+1 (555) 123-4567\nGrace,12345\nBarbara,2065550100\n",
    )
    .expect("write input");

    let report = run_cmd_json(
        &stop_list,
        &["normalize", input.to_str().unwrap(), "--column", "phone"],
    );
    assert_eq!(report["total"], 3);
    assert_eq!(report["normalized"], 2);
    assert_eq!(report["unparseable"], 1);

    let out = temp.path().join("export_normalized.csv");
    let contents = fs::read_to_string(&out).expect("read output");
    assert_eq!(contents, "phonumber\n+15551234567\n\"\"\n+12065550100\n");
}

#[test]
fn cli_normalize_no_plus() {
    let temp = TempDir::new().expect("temp dir");
    let stop_list = temp.path().join("stoplist.csv");
    let input = temp.path().join("export.csv");
    fs::write(&input, "phone\n5551234567\n").expect("write input");
    let out = temp.path().join("out.csv");

    run_cmd(
        &stop_list,
        &[
            "normalize",
            input.to_str().unwrap(),
            "--column",
            "phone",
            "--no-plus",
            "--out",
            out.to_str().unwrap(),
        ],
    );

    let contents = fs::read_to_string(&out).expect("read output");
    assert_eq!(contents, "phonumber\n15551234567\n");
}

#[test]
fn cli_normalize_unknown_column_exits_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let stop_list = temp.path().join("stoplist.csv");
    let input = temp.path().join("export.csv");
    fs::write(&input, "phone\n5551234567\n").expect("write input");

    let output = Command::cargo_bin("dialclean")
        .expect("binary")
        .args(["--stop-list", stop_list.to_str().unwrap()])
        .args(["normalize", input.to_str().unwrap(), "--column", "mobile"])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_stoplist_upload_show_scrub_flow() {
    let temp = TempDir::new().expect("temp dir");
    let stop_list = temp.path().join("stoplist.csv");

    // Upload cleans the first column: blanks and duplicates go away.
    let upload = temp.path().join("stop_upload.csv");
    fs::write(
        &upload,
        "numbers\n+15550000001\n\n+15550000001\n+15550000002\n",
    )
    .expect("write upload");
    let report = run_cmd_json(&stop_list, &["stoplist", "upload", upload.to_str().unwrap()]);
    assert_eq!(report["entries"], 2);

    let shown = run_cmd_json(&stop_list, &["stoplist", "show"]);
    assert_eq!(shown["count"], 2);
    assert_eq!(
        shown["entries"],
        serde_json::json!(["+15550000001", "+15550000002"])
    );

    // Scrub removes every candidate present in the stop list.
    let input = temp.path().join("export.csv");
    fs::write(
        &input,
        "phone\n15550000001\n5550000003\n15550000001\n5550000004\n",
    )
    .expect("write input");
    let report = run_cmd_json(
        &stop_list,
        &["scrub", input.to_str().unwrap(), "--column", "phone"],
    );
    assert_eq!(report["total"], 4);
    assert_eq!(report["removed"], 2);
    assert_eq!(report["kept"], 2);
    assert_eq!(report["stop_list_empty"], false);

    let out = temp.path().join("export_scrubbed.csv");
    let contents = fs::read_to_string(&out).expect("read output");
    assert_eq!(contents, "phonumber\n+15550000003\n+15550000004\n");
}

#[test]
fn cli_scrub_with_empty_stop_list_keeps_everything_and_warns() {
    let temp = TempDir::new().expect("temp dir");
    let stop_list = temp.path().join("stoplist.csv");
    let input = temp.path().join("export.csv");
    fs::write(&input, "phone\n5551234567\n").expect("write input");

    let output = Command::cargo_bin("dialclean")
        .expect("binary")
        .args(["--stop-list", stop_list.to_str().unwrap(), "--json"])
        .args(["scrub", input.to_str().unwrap(), "--column", "phone"])
        .output()
        .expect("run command");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("parse json");
    assert_eq!(report["removed"], 0);
    assert_eq!(report["kept"], 1);
    assert_eq!(report["stop_list_empty"], true);

    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("stop list"), "missing warning: {stderr}");
}

#[test]
fn cli_stoplist_upload_rejects_empty_file_and_keeps_prior_list() {
    let temp = TempDir::new().expect("temp dir");
    let stop_list = temp.path().join("stoplist.csv");

    let upload = temp.path().join("good.csv");
    fs::write(&upload, "phonumber\n+15550000001\n").expect("write upload");
    run_cmd(&stop_list, &["stoplist", "upload", upload.to_str().unwrap()]);

    let empty = temp.path().join("empty.csv");
    fs::write(&empty, "").expect("write empty");
    let output = Command::cargo_bin("dialclean")
        .expect("binary")
        .args(["--stop-list", stop_list.to_str().unwrap()])
        .args(["stoplist", "upload", empty.to_str().unwrap()])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));

    let shown = run_cmd_json(&stop_list, &["stoplist", "show"]);
    assert_eq!(shown["count"], 1);
}

#[test]
fn cli_completions_emit_a_script_for_the_binary() {
    let output = Command::cargo_bin("dialclean")
        .expect("binary")
        .args(["completions", "bash"])
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);

    let script = String::from_utf8(output.stdout).expect("utf8");
    assert!(script.contains("dialclean"), "unexpected script: {script}");
}

#[test]
fn cli_stoplist_path_prints_resolved_location() {
    let temp = TempDir::new().expect("temp dir");
    let stop_list = temp.path().join("stoplist.csv");

    let printed = run_cmd(&stop_list, &["stoplist", "path"]);
    assert_eq!(printed.trim(), stop_list.to_str().unwrap());
}
