//! Test helpers shared by the integration tests

#![allow(dead_code)]

use anyhow::{anyhow, Result};
use project_tools::command::CommandRunner;
use project_tools::error::SetupError;
use serde_json::{json, Map, Value};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stands in for npm/npx by applying their effect on `package.json`
///
/// Understands `npm init -y`, `npm install --save-dev ...`,
/// `npm pkg set scripts.<name>="<value>"`, `npm run prepare` and
/// `npx commitizen init ...`. Anything else is recorded and succeeds.
#[derive(Default)]
pub struct FakeNpm {
    commands: RefCell<Vec<String>>,
    fail_on: Option<String>,
}

impl FakeNpm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(fragment: &str) -> Self {
        Self {
            commands: RefCell::new(Vec::new()),
            fail_on: Some(fragment.to_string()),
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }

    fn apply(&self, command: &str, dir: &Path) -> Result<()> {
        let manifest = dir.join("package.json");

        if command == "npm init -y" {
            let name = dir
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "project".to_string());
            let doc = json!({ "name": name, "version": "1.0.0", "scripts": {} });
            fs::write(&manifest, serde_json::to_string_pretty(&doc)?)?;
            return Ok(());
        }

        if let Some(packages) = command.strip_prefix("npm install --save-dev ") {
            return patch(&manifest, |doc| {
                let deps = section(doc, "devDependencies");
                for package in packages.split_whitespace() {
                    deps.insert(package.to_string(), json!("^1.0.0"));
                }
            });
        }

        if let Some(assignment) = command.strip_prefix("npm pkg set ") {
            let (key, value) = assignment
                .split_once('=')
                .ok_or_else(|| anyhow!("malformed pkg set: {command}"))?;
            let (group, name) = key
                .split_once('.')
                .ok_or_else(|| anyhow!("malformed pkg key: {key}"))?;
            let value = value.trim_matches('"').to_string();
            return patch(&manifest, |doc| {
                section(doc, group).insert(name.to_string(), json!(value));
            });
        }

        if command == "npm run prepare" {
            fs::create_dir_all(dir.join(".husky").join("_"))?;
            return Ok(());
        }

        if command.starts_with("npx commitizen init") {
            return patch(&manifest, |doc| {
                let config = section(doc, "config");
                config.insert(
                    "commitizen".to_string(),
                    json!({ "path": "./node_modules/cz-conventional-changelog" }),
                );
            });
        }

        Ok(())
    }
}

impl CommandRunner for FakeNpm {
    fn run(&self, command: &str, dir: &Path) -> Result<()> {
        self.commands.borrow_mut().push(command.to_string());

        if let Some(fragment) = &self.fail_on {
            if command.contains(fragment.as_str()) {
                return Err(SetupError::Command {
                    command: command.to_string(),
                    reason: "exit status: 1".to_string(),
                }
                .into());
            }
        }

        self.apply(command, dir)
    }
}

fn patch(manifest: &Path, edit: impl FnOnce(&mut Map<String, Value>)) -> Result<()> {
    let mut doc: Value = serde_json::from_str(&fs::read_to_string(manifest)?)?;
    let object = doc
        .as_object_mut()
        .ok_or_else(|| anyhow!("package.json is not an object"))?;
    edit(object);
    fs::write(manifest, serde_json::to_string_pretty(&doc)?)?;
    Ok(())
}

fn section<'a>(doc: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    doc.entry(key.to_string())
        .or_insert_with(|| json!({}))
        .as_object_mut()
        .expect("manifest section is an object")
}

/// An empty project directory with a `src/` folder, like a fresh checkout
pub fn new_project(temp_dir: &TempDir) -> Result<PathBuf> {
    let path = temp_dir.path().join("test-project");
    fs::create_dir_all(path.join("src"))?;
    git2::Repository::init(&path)?;
    Ok(path)
}

pub fn read_manifest(project: &Path) -> Result<Value> {
    Ok(serde_json::from_str(&fs::read_to_string(
        project.join("package.json"),
    )?)?)
}
