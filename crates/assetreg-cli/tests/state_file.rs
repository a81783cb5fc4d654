//! End-to-end runs of ledger subcommands against a state file on disk.
//! Each call reopens the file, as separate process invocations would.

use std::path::Path;

use assetreg_cli::ledger::LedgerCommand;
use assetreg_cli::run_on_state_file;

fn run(command: LedgerCommand, state_file: &Path) -> (u8, String) {
    let mut out = Vec::new();
    let code = run_on_state_file(&command, state_file, &mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

fn read(asset_id: &str) -> LedgerCommand {
    LedgerCommand::Read {
        asset_id: asset_id.to_owned(),
    }
}

fn exists(asset_id: &str) -> LedgerCommand {
    LedgerCommand::Exists {
        asset_id: asset_id.to_owned(),
    }
}

fn delete(asset_id: &str) -> LedgerCommand {
    LedgerCommand::Delete {
        asset_id: asset_id.to_owned(),
    }
}

fn list_all() -> LedgerCommand {
    LedgerCommand::List {
        start: String::new(),
        end: String::new(),
    }
}

#[test]
fn state_survives_between_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("ledger-state.json");

    assert_eq!(run(LedgerCommand::Init, &state).0, 0);
    assert!(state.exists());

    let (code, out) = run(
        LedgerCommand::Transfer {
            asset_id: "asset1".into(),
            new_owner: "Brad".into(),
        },
        &state,
    );
    assert_eq!(code, 0);
    assert_eq!(out, "Tomoko\n");

    let (_, out) = run(read("asset1"), &state);
    assert_eq!(
        out,
        "{\"assetID\":\"asset1\",\"base64File\":\"\",\"owner\":\"Brad\",\"typeFile\":\"csv\"}\n"
    );
}

#[test]
fn missing_state_file_is_an_empty_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("nested").join("state.json");

    let (code, out) = run(list_all(), &state);
    assert_eq!(code, 0);
    assert_eq!(out, "[]\n");
    assert!(!state.exists());
}

#[test]
fn delete_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");

    run(
        LedgerCommand::Create {
            asset_id: "a1".into(),
            owner: "Jin Soo".into(),
            type_file: "pdf".into(),
            base64_file: "aGk=".into(),
        },
        &state,
    );
    assert_eq!(run(delete("a1"), &state).0, 0);

    let (code, out) = run(exists("a1"), &state);
    assert_eq!(code, 0);
    assert_eq!(out, "false\n");

    let (code, out) = run(delete("a1"), &state);
    assert_eq!(code, 1);
    assert_eq!(out, "ERROR ASSET_NOT_FOUND: asset a1 does not exist\n");
}

#[test]
fn unreadable_state_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");
    std::fs::write(&state, "not json").unwrap();

    let mut out = Vec::new();
    let err = run_on_state_file(&LedgerCommand::Init, &state, &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("failed to open state file"));
}
