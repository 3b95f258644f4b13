use assert_cmd::Command;

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/files/sample.txt");

fn lexcheck() -> Command {
    let mut command = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    command.arg("--no-color");
    command
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_stdin_declaration() {
    let output = lexcheck().write_stdin("int x = 10;\n").output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "('int', 'KEYWORD')",
            "('x', 'IDENTIFIER')",
            "('=', 'OPERATOR')",
            "('10', 'NUMBER')",
            "(';', 'SEPARATOR')",
        ]
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_dash_reads_stdin() {
    let output = lexcheck().arg("-").write_stdin("y = 3;").output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 1"), "{stderr}");
    assert!(stderr.contains("`y` not declared"), "{stderr}");
}

#[test]
fn test_sample_file() {
    let output = lexcheck().arg(SAMPLE).output().unwrap();
    println!(
        "STDOUT: {:?}, STDERR: {:?}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.status.success());

    let stdout = stdout_lines(&output);
    assert!(stdout.contains(&"('\"giraffe\"', 'STRING')".to_string()));
    assert!(stdout.contains(&"('return', 'KEYWORD')".to_string()));

    let stderr = String::from_utf8_lossy(&output.stderr);
    let errors = stderr.lines().collect::<Vec<_>>();
    assert_eq!(errors.len(), 3, "{stderr}");
    assert!(errors[0].starts_with("Error line 7 :: type mismatch"));
    assert!(errors[1].starts_with("Error line 8 :: variable `z`"));
    assert!(errors[2].starts_with("Error line 9 :: type mismatch"));
}

#[test]
fn test_symbols_dump() {
    let output = lexcheck()
        .arg("--symbols")
        .write_stdin("int b = 1;\nfloat a = b + 0.5;\nint c = x;\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = stdout_lines(&output);
    assert_eq!(stdout[stdout.len() - 2..], ["b: int", "a: float"]);
}

#[test]
fn test_reject_redeclaration() {
    let output = lexcheck()
        .args(["--redeclare", "reject", "--symbols"])
        .write_stdin("int x = 1;\nstring x = \"s\";\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output).last().map(String::as_str), Some("x: int"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("already declared"));
}

#[test]
fn test_missing_file_fails() {
    lexcheck()
        .arg(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/files/missing.txt"))
        .assert()
        .failure()
        .code(1);
}
