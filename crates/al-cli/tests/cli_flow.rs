use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_al"))
}

/// An isolated HOME, global directory and project checkout.
struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let root = tempfile::tempdir().expect("create sandbox");
        std::fs::create_dir_all(root.path().join("home")).expect("create home");
        std::fs::create_dir_all(root.path().join("work").join("acme")).expect("create project");
        Self { root }
    }

    fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    fn global_dir(&self) -> PathBuf {
        self.home().join(".al_global")
    }

    fn project(&self) -> PathBuf {
        self.root.path().join("work").join("acme")
    }

    fn clipboard_file(&self) -> PathBuf {
        self.root.path().join("clipboard.txt")
    }

    fn command(&self, cwd: &Path, args: &[&str]) -> Command {
        let mut cmd = Command::new(bin());
        cmd.args(args)
            .current_dir(cwd)
            .env("HOME", self.home())
            .env("AL_GLOBAL_DIR", self.global_dir())
            .env(
                "AL_CLIPBOARD_CMD",
                format!("tee {}", self.clipboard_file().display()),
            )
            .env("NO_COLOR", "1")
            .env("EDITOR", "false")
            .env_remove("AL_PASSWORD")
            .env_remove("AL_LOG");
        cmd
    }

    fn run(&self, cwd: &Path, args: &[&str]) -> Output {
        self.command(cwd, args).output().expect("run al")
    }

    fn run_ok(&self, cwd: &Path, args: &[&str]) -> String {
        let output = self.run(cwd, args);
        assert!(
            output.status.success(),
            "al {:?} failed: stdout={}, stderr={}",
            args,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    fn run_with_password(&self, password: &str, args: &[&str]) -> Output {
        self.command(&self.project(), args)
            .env("AL_PASSWORD", password)
            .output()
            .expect("run al")
    }

    fn init(&self) {
        self.run_ok(&self.project(), &["init", "api|backend"]);
    }
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_cli_init_registers_project() {
    let sandbox = Sandbox::new();
    let stdout = sandbox.run_ok(&sandbox.project(), &["init", "api", "|", "backend"]);
    assert!(stdout.contains("status=ok"));
    assert!(stdout.contains("shortcuts=acme, api, backend"));

    assert!(sandbox.project().join(".al_local").join("notes").is_dir());
    assert!(sandbox.project().join(".al_local").join("links").is_dir());
    assert!(sandbox.global_dir().join("config").is_file());

    let projects: serde_json::Value = serde_json::from_slice(
        &std::fs::read(sandbox.global_dir().join("projects")).expect("read projects"),
    )
    .expect("parse projects");
    assert_eq!(
        projects["acme"]["shortcuts"],
        serde_json::json!(["acme", "api", "backend"])
    );
}

#[test]
fn test_cli_init_twice_fails() {
    let sandbox = Sandbox::new();
    sandbox.init();

    let again = sandbox.run(&sandbox.project(), &["init"]);
    assert_eq!(again.status.code(), Some(1));
    assert!(stderr(&again).contains("already initialized"));
}

#[test]
fn test_cli_go_prints_and_copies_path() {
    let sandbox = Sandbox::new();
    sandbox.init();
    let expected = std::fs::canonicalize(sandbox.project()).expect("canonical project path");

    let printed = sandbox.run_ok(sandbox.root.path(), &["go", "API", "--print"]);
    assert_eq!(printed.trim_end(), expected.display().to_string());

    let stdout = sandbox.run_ok(sandbox.root.path(), &["go", "backend"]);
    assert!(stdout.contains("project=acme"));
    let copied = std::fs::read_to_string(sandbox.clipboard_file()).expect("read clipboard");
    assert_eq!(copied, expected.display().to_string());
}

#[test]
fn test_cli_go_unknown_shortcut_suggests() {
    let sandbox = Sandbox::new();
    sandbox.init();

    let output = sandbox.run(sandbox.root.path(), &["go", "acm"]);
    assert_eq!(output.status.code(), Some(3));
    let err = stderr(&output);
    assert!(err.contains("error=Project 'acm' not found"));
    assert!(err.contains("Did you mean"));
    assert!(err.contains("acme"));
}

#[test]
fn test_cli_note_outside_project_fails() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(sandbox.root.path(), &["note", "list"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("al init"));
}

#[test]
fn test_cli_note_add_list_get_remove() {
    let sandbox = Sandbox::new();
    sandbox.init();
    let project = sandbox.project();

    sandbox.run_ok(&project, &["note", "add", "#todo", "--body", "ship it\nthen rest"]);

    let list = sandbox.run_ok(&project, &["note", "list"]);
    assert!(list.starts_with("todo\t"));
    assert!(list.contains("ship it then rest"));

    let body = sandbox.run_ok(&project, &["note", "get", "todo"]);
    assert_eq!(body, "ship it\nthen rest\n");

    let duplicate = sandbox.run(&project, &["note", "add", "todo", "-b", "again"]);
    assert!(!duplicate.status.success());
    assert!(stderr(&duplicate).contains("already exists"));

    let missing = sandbox.run(&project, &["note", "get", "tdo"]);
    assert_eq!(missing.status.code(), Some(3));
    assert!(stderr(&missing).contains("Did you mean todo?"));

    let unforced = sandbox.run(&project, &["note", "remove", "todo"]);
    assert_eq!(unforced.status.code(), Some(4));

    sandbox.run_ok(&project, &["note", "remove", "todo", "--force"]);
    assert!(!project.join(".al_local").join("notes").join("todo.json").exists());

    let empty = sandbox.run_ok(&project, &["note", "list"]);
    assert!(empty.contains("No notes found."));
}

#[test]
fn test_cli_note_body_from_stdin_is_stored_verbatim() {
    let sandbox = Sandbox::new();
    sandbox.init();
    let project = sandbox.project();

    let mut child = sandbox
        .command(&project, &["note", "add", "steps"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn al");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"build\n  deploy  \n\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait al");
    assert!(output.status.success(), "stderr={}", stderr(&output));

    let raw = std::fs::read_to_string(project.join(".al_local").join("notes").join("steps.json"))
        .expect("read note file");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("parse note");
    assert_eq!(value["content"], "build\n  deploy  \n\n");

    sandbox.run_ok(&project, &["note", "add", "blank", "--body", ""]);
    let body = sandbox.run_ok(&project, &["note", "get", "blank"]);
    assert_eq!(body, "\n");
}

#[test]
fn test_cli_quiet_keeps_results_and_drops_receipts() {
    let sandbox = Sandbox::new();
    sandbox.init();
    let project = sandbox.project();

    let empty = sandbox.run_ok(&project, &["--quiet", "link", "list"]);
    assert_eq!(empty, "");

    let added = sandbox.run_ok(&project, &["-q", "note", "add", "todo", "-b", "ship"]);
    assert_eq!(added, "");
    let linked = sandbox.run_ok(&project, &["link", "add", "wiki", "-u", "https://w", "-q"]);
    assert_eq!(linked, "");

    let list = sandbox.run_ok(&project, &["-q", "note", "list"]);
    assert!(list.starts_with("todo\t"));
    let body = sandbox.run_ok(&project, &["-q", "note", "get", "todo"]);
    assert_eq!(body, "ship\n");
    let copied = sandbox.run_ok(&project, &["-q", "go", "api"]);
    assert_eq!(copied, "");
}

#[test]
fn test_cli_note_list_json() {
    let sandbox = Sandbox::new();
    sandbox.init();
    let project = sandbox.project();

    sandbox.run_ok(&project, &["note", "add", "deploy", "-b", "make release"]);
    let stdout = sandbox.run_ok(&project, &["note", "list", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("parse list json");
    assert_eq!(value[0]["name"], "deploy");
    assert_eq!(value[0]["encrypted"], false);
    assert_eq!(value[0]["preview"], "make release");
}

#[test]
fn test_cli_encrypted_note_flow() {
    let sandbox = Sandbox::new();
    sandbox.init();
    let note_file = sandbox
        .project()
        .join(".al_local")
        .join("notes")
        .join("vault.json");

    let add = sandbox.run_with_password("hunter2", &["note", "add", "vault", "-c", "-b", "db pass: s3cret"]);
    assert!(add.status.success(), "stderr={}", stderr(&add));

    let raw = std::fs::read_to_string(&note_file).expect("read note file");
    assert!(!raw.contains("s3cret"));
    let stored: serde_json::Value = serde_json::from_str(&raw).expect("parse note file");
    assert_eq!(stored["encrypted"], true);

    let list = sandbox.run_ok(&sandbox.project(), &["note", "list"]);
    assert!(list.contains("(encrypted)"));

    let get = sandbox.run_with_password("hunter2", &["note", "get", "vault"]);
    assert!(get.status.success());
    assert_eq!(String::from_utf8_lossy(&get.stdout), "db pass: s3cret\n");

    let wrong = sandbox.run_with_password("nope", &["note", "get", "vault"]);
    assert_eq!(wrong.status.code(), Some(5));

    let edit = sandbox.run_with_password("hunter2", &["note", "edit", "vault", "-b", "rotated"]);
    assert!(edit.status.success(), "stderr={}", stderr(&edit));
    let raw = std::fs::read_to_string(&note_file).expect("read note file");
    assert!(!raw.contains("rotated"));

    let get = sandbox.run_with_password("hunter2", &["note", "get", "vault", "--cp"]);
    assert!(get.status.success());
    let copied = std::fs::read_to_string(sandbox.clipboard_file()).expect("read clipboard");
    assert_eq!(copied, "rotated");
}

#[test]
fn test_cli_encrypted_note_without_password_or_tty_fails() {
    let sandbox = Sandbox::new();
    sandbox.init();

    let output = sandbox.run(&sandbox.project(), &["note", "add", "vault", "-c", "-b", "x"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("AL_PASSWORD"));
}

#[test]
fn test_cli_link_flow() {
    let sandbox = Sandbox::new();
    sandbox.init();
    let project = sandbox.project();

    sandbox.run_ok(
        &project,
        &["link", "add", "ci", "-u", "https://ci.example.com", "-k", "build|deploy"],
    );

    let by_keyword = sandbox.run_ok(&project, &["link", "get", "#deploy"]);
    assert_eq!(by_keyword.trim_end(), "URL: https://ci.example.com | (build, deploy)");

    sandbox.run_ok(&project, &["link", "edit", "ci", "-a", "nightly|build"]);
    let edited = sandbox.run_ok(&project, &["link", "get", "ci"]);
    assert!(edited.contains("(build, deploy, nightly)"));

    sandbox.run_ok(
        &project,
        &["link", "edit", "ci", "-u", "https://ci2.example.com", "-r"],
    );
    let cleared = sandbox.run_ok(&project, &["link", "get", "ci", "--copy"]);
    assert!(cleared.starts_with("URL: https://ci2.example.com | ()"));
    let copied = std::fs::read_to_string(sandbox.clipboard_file()).expect("read clipboard");
    assert_eq!(copied, "https://ci2.example.com");

    let list = sandbox.run_ok(&project, &["link", "list"]);
    assert_eq!(list.trim_end_matches('\n'), "ci\thttps://ci2.example.com\t");

    let missing = sandbox.run(&project, &["link", "get", "cj"]);
    assert_eq!(missing.status.code(), Some(3));
    assert!(stderr(&missing).contains("Did you mean ci?"));

    sandbox.run_ok(&project, &["link", "remove", "ci", "-f"]);
    let empty = sandbox.run_ok(&project, &["link", "list"]);
    assert!(empty.contains("No links found."));
}

#[test]
fn test_cli_target_flag_uses_registered_project() {
    let sandbox = Sandbox::new();
    sandbox.init();

    sandbox.run_ok(
        sandbox.root.path(),
        &["link", "-t", "backend", "add", "wiki", "-u", "https://wiki.example.com"],
    );
    assert!(sandbox
        .project()
        .join(".al_local")
        .join("links")
        .join("wiki.json")
        .is_file());

    let missing = sandbox.run(sandbox.root.path(), &["note", "list", "-t", "backnd"]);
    assert_eq!(missing.status.code(), Some(3));
    assert!(stderr(&missing).contains("backend"));
}

#[cfg(unix)]
#[test]
fn test_cli_alias_binary_expands() {
    let sandbox = Sandbox::new();
    sandbox.init();

    let alias_dir = sandbox.root.path().join("bin");
    std::fs::create_dir_all(&alias_dir).expect("create bin dir");
    let algo = alias_dir.join("algo");
    std::fs::copy(bin(), &algo).expect("copy binary as algo");

    let output = Command::new(&algo)
        .args(["api", "--print"])
        .env("HOME", sandbox.home())
        .env("AL_GLOBAL_DIR", sandbox.global_dir())
        .output()
        .expect("run algo");
    assert!(output.status.success(), "stderr={}", stderr(&output));
    let expected = std::fs::canonicalize(sandbox.project()).expect("canonical project path");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        expected.display().to_string()
    );
}

#[test]
fn test_cli_install_to_custom_dir() {
    let sandbox = Sandbox::new();
    let bin_dir = sandbox.root.path().join("bin");
    std::fs::create_dir_all(&bin_dir).expect("create bin dir");

    let stdout = sandbox.run_ok(
        sandbox.root.path(),
        &["install", "--bin-dir", bin_dir.to_str().expect("utf8 path")],
    );
    assert!(stdout.contains("status=ok"));
    for name in ["al", "alinit", "alnote", "allink", "algo"] {
        let file = bin_dir.join(format!("{}{}", name, std::env::consts::EXE_SUFFIX));
        assert!(file.exists(), "{} missing", name);
    }
    assert!(sandbox.global_dir().join("projects").is_file());
}

#[test]
fn test_cli_completions() {
    let sandbox = Sandbox::new();
    let stdout = sandbox.run_ok(sandbox.root.path(), &["completions", "bash"]);
    assert!(stdout.contains("al"));
}
