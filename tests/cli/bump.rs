use std::process::Command;

use anyhow::{Result, bail};

use crate::{CHRISTMAS, CliTest, stderr, stdout};

const CONFIG: &str = r#"{
  "monitoredPaths": ["emails/"],
  "buildTypesCommand": "mkdir -p dist && sed -n '/^export interface/,/^}/p' emails/general/christmas.tsx > dist/christmas.d.ts && cp emails/index.ts dist/index.d.ts"
}
"#;

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

fn git(test: &CliTest, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args([
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(test.root())
        .output()?;
    if !output.status.success() {
        bail!("git {} failed: {}", args.join(" "), stderr(&output));
    }
    Ok(stdout(&output).trim().to_string())
}

fn commit_all(test: &CliTest, message: &str) -> Result<()> {
    git(test, &["add", "-A"])?;
    git(test, &["commit", "-q", "-m", message])?;
    Ok(())
}

/// A repository on `main` with one committed template.
fn repository() -> Result<CliTest> {
    repository_with_config(CONFIG)
}

fn repository_with_config(config: &str) -> Result<CliTest> {
    let test = CliTest::with_file("emails/general/christmas.tsx", CHRISTMAS)?;
    test.write_file(".mailgenrc.json", config)?;
    test.write_file(".gitignore", "dist/\nemails/index.ts\n")?;

    git(&test, &["init", "-q"])?;
    git(&test, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    commit_all(&test, "base")?;

    Ok(test)
}

fn run_bump(test: &CliTest, base_ref: Option<&str>) -> Result<String> {
    let mut cmd = test.bump_command();
    if let Some(base_ref) = base_ref {
        cmd.env("GITHUB_BASE_REF", base_ref);
    }
    let output = cmd.output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    Ok(stdout(&output))
}

fn assert_on_main(test: &CliTest) -> Result<()> {
    assert_eq!(git(test, &["rev-parse", "--abbrev-ref", "HEAD"])?, "main");
    Ok(())
}

#[test]
fn test_body_change_is_patch() -> Result<()> {
    if !git_available() {
        return Ok(());
    }
    let test = repository()?;
    test.write_file(
        "emails/general/christmas.tsx",
        &CHRISTMAS.replace("Merry Christmas!", "Happy holidays!"),
    )?;
    commit_all(&test, "reword")?;

    assert_eq!(run_bump(&test, None)?, "patch\n");
    assert_on_main(&test)?;

    Ok(())
}

#[test]
fn test_new_prop_is_minor() -> Result<()> {
    if !git_available() {
        return Ok(());
    }
    let test = repository()?;
    test.write_file(
        "emails/general/christmas.tsx",
        &CHRISTMAS.replace("  email: string\n}", "  email: string\n  name?: string\n}"),
    )?;
    commit_all(&test, "add name")?;

    assert_eq!(run_bump(&test, None)?, "minor\n");
    assert_on_main(&test)?;

    Ok(())
}

#[test]
fn test_unrelated_commit_is_none() -> Result<()> {
    if !git_available() {
        return Ok(());
    }
    let test = repository()?;
    test.write_file("README.md", "docs only\n")?;
    commit_all(&test, "docs")?;

    assert_eq!(run_bump(&test, None)?, "none\n");
    assert_on_main(&test)?;

    Ok(())
}

#[test]
fn test_missing_base_ref_is_minor() -> Result<()> {
    if !git_available() {
        return Ok(());
    }
    let test = repository()?;
    git(&test, &["commit", "-q", "--allow-empty", "-m", "empty"])?;

    assert_eq!(run_bump(&test, Some("nonexistent"))?, "minor\n");
    assert_on_main(&test)?;

    Ok(())
}

#[test]
fn test_outside_repository_is_patch() -> Result<()> {
    if !git_available() {
        return Ok(());
    }
    let test = CliTest::with_file("emails/general/christmas.tsx", CHRISTMAS)?;
    test.write_file(".mailgenrc.json", CONFIG)?;

    let parent = test.root().parent().map(|p| p.to_path_buf()).unwrap_or_default();
    let output = test
        .bump_command()
        .env("GIT_CEILING_DIRECTORIES", parent)
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "patch\n");

    Ok(())
}

#[test]
fn test_base_build_failure_restores_branch() -> Result<()> {
    if !git_available() {
        return Ok(());
    }
    // The build script only exists on the current revision, so building the
    // base declarations fails after a successful checkout.
    let test = repository_with_config(r#"{
  "monitoredPaths": ["emails/"],
  "buildTypesCommand": "sh scripts/build-types.sh"
}
"#)?;
    test.write_file(
        "scripts/build-types.sh",
        "mkdir -p dist && cp emails/index.ts dist/index.d.ts\n",
    )?;
    commit_all(&test, "add build script")?;

    assert_eq!(run_bump(&test, None)?, "minor\n");
    assert_on_main(&test)?;
    assert!(test.root().join("scripts/build-types.sh").exists());

    Ok(())
}

#[test]
fn test_detached_head_is_restored() -> Result<()> {
    if !git_available() {
        return Ok(());
    }
    let test = repository()?;
    test.write_file(
        "emails/general/christmas.tsx",
        &CHRISTMAS.replace("Merry Christmas!", "Happy holidays!"),
    )?;
    commit_all(&test, "reword")?;
    git(&test, &["update-ref", "refs/remotes/origin/main", "HEAD^"])?;
    git(&test, &["checkout", "-q", "--detach"])?;
    let commit = git(&test, &["rev-parse", "HEAD"])?;

    assert_eq!(run_bump(&test, None)?, "patch\n");
    assert_eq!(git(&test, &["rev-parse", "--abbrev-ref", "HEAD"])?, "HEAD");
    assert_eq!(git(&test, &["rev-parse", "HEAD"])?, commit);

    Ok(())
}
