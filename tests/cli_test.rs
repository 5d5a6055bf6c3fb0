use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*;
use std::process::Command; // Run programs

type STDRESULT = Result<(), Box<dyn std::error::Error>>;

#[test]
fn small_run_succeeds_and_reports_fitness() -> STDRESULT {
    let mut cmd = Command::cargo_bin("ltfos-gomea")?;
    cmd.arg("run")
        .arg("--size").arg("16")
        .arg("--length").arg("16")
        .arg("--generations").arg("3")
        .arg("--random").arg("42")
        .assert()
        .success()
        .stdout(predicate::str::contains("best fitness"));
    Ok(())
}

#[test]
fn hiff_problem_selector_succeeds() -> STDRESULT {
    let mut cmd = Command::cargo_bin("ltfos-gomea")?;
    cmd.arg("run")
        .arg("--size").arg("16")
        .arg("--length").arg("8")
        .arg("--generations").arg("2")
        .arg("--random").arg("7")
        .arg("--index").arg("1")
        .assert()
        .success();
    Ok(())
}

#[test]
fn verbose_run_emits_generation_trace() -> STDRESULT {
    let mut cmd = Command::cargo_bin("ltfos-gomea")?;
    cmd.arg("run")
        .arg("--size").arg("16")
        .arg("--length").arg("16")
        .arg("--generations").arg("2")
        .arg("--random").arg("9")
        .arg("--verbosity").arg("1")
        .assert()
        .success()
        .stderr(predicate::str::contains("generation"));
    Ok(())
}

#[test]
fn zero_size_is_rejected() -> STDRESULT {
    let mut cmd = Command::cargo_bin("ltfos-gomea")?;
    cmd.arg("run").arg("--size").arg("0").assert().failure().code(2);
    Ok(())
}

#[test]
fn zero_length_is_rejected() -> STDRESULT {
    let mut cmd = Command::cargo_bin("ltfos-gomea")?;
    cmd.arg("run").arg("--length").arg("0").assert().failure().code(2);
    Ok(())
}

#[test]
fn zero_generations_is_rejected() -> STDRESULT {
    let mut cmd = Command::cargo_bin("ltfos-gomea")?;
    cmd.arg("run").arg("--generations").arg("0").assert().failure().code(2);
    Ok(())
}

#[test]
fn unknown_problem_index_is_rejected() -> STDRESULT {
    let mut cmd = Command::cargo_bin("ltfos-gomea")?;
    cmd.arg("run").arg("--index").arg("2").assert().failure().code(2);
    Ok(())
}

#[test]
fn deterministic_replay_for_fixed_seed() -> STDRESULT {
    let mut first = Command::cargo_bin("ltfos-gomea")?;
    let out1 = first
        .arg("run")
        .arg("--size").arg("16")
        .arg("--length").arg("16")
        .arg("--generations").arg("4")
        .arg("--random").arg("123")
        .output()?;

    let mut second = Command::cargo_bin("ltfos-gomea")?;
    let out2 = second
        .arg("run")
        .arg("--size").arg("16")
        .arg("--length").arg("16")
        .arg("--generations").arg("4")
        .arg("--random").arg("123")
        .output()?;

    assert_eq!(out1.stdout, out2.stdout);
    Ok(())
}
