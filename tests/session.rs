use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

fn contacts_cmd() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME"))?;
    cmd.arg("--storage").arg("mem").arg("--quiet");
    Ok(cmd)
}

#[test]
fn ada_lovelace_session() -> Result<(), Box<dyn std::error::Error>> {
    contacts_cmd()?
        .write_stdin(
            "1\nAda Lovelace\nada@x.com\n111\n\
            2\nAda Lovelace\n\
            3\nAda Lovelace\nada@y.com\n222\n\
            2\nada@y.com\n\
            4\nAda Lovelace\n\
            7\n\
            0\n",
        )
        .assert()
        .success()
        .stdout(contains("Contact added successfully!"))
        .stdout(contains("Ada Lovelace - ada@x.com - 111"))
        .stdout(contains("Contact updated successfully!"))
        .stdout(contains("Ada Lovelace - ada@y.com - 222"))
        .stdout(contains("Contact deleted successfully!"))
        .stdout(contains("No contacts found."))
        .stdout(contains("Bye!"));

    Ok(())
}

#[test]
fn invalid_phone_returns_to_menu() -> Result<(), Box<dyn std::error::Error>> {
    contacts_cmd()?
        .write_stdin("1\nAda Lovelace\nada@x.com\n202-912-3345\n7\n0\n")
        .assert()
        .success()
        .stdout(contains("Invalid number format"))
        .stdout(contains("Contact added successfully!").not())
        .stdout(contains("No contacts found."));

    Ok(())
}

#[test]
fn invalid_option_is_not_fatal() -> Result<(), Box<dyn std::error::Error>> {
    contacts_cmd()?
        .write_stdin("42\n0\n")
        .assert()
        .success()
        .stdout(contains("Invalid option '42'"))
        .stdout(contains("Bye!"));

    Ok(())
}

#[test]
fn closed_stdin_exits_cleanly() -> Result<(), Box<dyn std::error::Error>> {
    contacts_cmd()?
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(contains("Bye!"));

    Ok(())
}

#[test]
fn unknown_storage_medium_fails_at_startup() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--storage")
        .arg("mongo")
        .write_stdin("0\n")
        .assert()
        .failure()
        .stderr(contains("not a recognized storage medium"));

    Ok(())
}

#[test]
fn json_storage_persists_between_sessions() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let db_path = dir.path().join("db/contacts.json");
    let db_path = db_path.to_string_lossy().to_string();

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .args(["--storage", "json", "--db-path", &db_path, "--quiet"])
        .write_stdin("1\nGrace Hopper\ngrace@navy.mil\n5550100\n0\n")
        .assert()
        .success()
        .stdout(contains("Contact added successfully!"));

    assert!(fs::metadata(&db_path)?.is_file());

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .args(["--storage", "json", "--db-path", &db_path, "--quiet"])
        .write_stdin("7\n0\n")
        .assert()
        .success()
        .stdout(contains("All contacts:"))
        .stdout(contains("Grace Hopper - grace@navy.mil - 5550100"));

    Ok(())
}

#[test]
fn export_and_import_through_menu() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    // no extension typed: export lands on `people`, import finds it as typed
    let csv_path = dir.path().join("people");
    let csv_path = csv_path.to_string_lossy().to_string();

    contacts_cmd()?
        .write_stdin(format!(
            "1\nAda Lovelace\nada@x.com\n111\n6\n{csv_path}\n4\nAda Lovelace\n5\n{csv_path}\n7\n0\n"
        ))
        .assert()
        .success()
        .stdout(contains("Exported 1 contacts"))
        .stdout(contains("Imported 1 contacts"))
        .stdout(contains("Ada Lovelace - ada@x.com - 111"));

    let exported = fs::read_to_string(&csv_path)?;
    assert!(exported.starts_with("name,email,phone\n"));

    Ok(())
}

#[test]
fn import_uses_csv_suffix_when_bare_path_is_missing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("people.csv"),
        "name,email,phone\nLinus,linus@kernel.org,1\n",
    )?;
    let bare = dir.path().join("people");
    let bare = bare.to_string_lossy().to_string();

    contacts_cmd()?
        .write_stdin(format!("5\n{bare}\n2\nLinus\n0\n"))
        .assert()
        .success()
        .stdout(contains("people.csv"))
        .stdout(contains("Linus - linus@kernel.org - 1"));

    Ok(())
}
