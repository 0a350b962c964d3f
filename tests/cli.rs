use std::process::{Command, Output};

fn rcramer(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rcramer"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run rcramer")
}

#[test]
fn prints_the_derivation() {
    let out = rcramer(&["--style", "summary", "x+y+z=6", "2x-y+z=3", "x+2y-z=2"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("D = 7\nDx = 7\n"));
    assert!(stdout.contains("z = Dz / D = 3"));
}

#[test]
fn leading_minus_is_an_equation() {
    let out = rcramer(&["-s", "summary", "--exact", "-x=1", "y=2", "z=3"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("x = Dx / D = -1\n"));
}

#[test]
fn failure_prints_the_message_and_exits_non_zero() {
    let out = rcramer(&["x+2y+3z=1", "2x+4y+6z=2", "x+y+z=3"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert_eq!(
        String::from_utf8(out.stderr).unwrap().trim_end(),
        "system has no unique solution (det(A) = 0)"
    );
}

#[test]
fn missing_settings_file_names_the_path() {
    let out = rcramer(&["-c", "/nonexistent/rcramer.toml", "x=1", "y=2", "z=3"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr
        .starts_with("loading settings from /nonexistent/rcramer.toml: could not read settings"));
}
