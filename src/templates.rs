//! Static configuration payloads
//!
//! The formatter config, the commitlint config and the four husky hook
//! scripts are fixed data. The orchestrator writes them byte-for-byte and
//! never inspects their content.

use serde::Serialize;

/// Prettier options written to `.prettierrc`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrettierConfig {
    pub semi: bool,
    pub single_quote: bool,
    pub tab_width: u8,
    pub trailing_comma: &'static str,
    pub print_width: u16,
}

impl Default for PrettierConfig {
    fn default() -> Self {
        Self {
            semi: true,
            single_quote: true,
            tab_width: 2,
            trailing_comma: "es5",
            print_width: 80,
        }
    }
}

impl PrettierConfig {
    /// Renders the config as JSON with 2-space indentation
    pub fn render(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Content of `commitlint.config.js`
pub const COMMITLINT_CONFIG: &str =
    "module.exports = { extends: ['@commitlint/config-conventional'] };\n";

/// A git hook script written under the husky directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookScript {
    /// File name, which is also the git hook name
    pub name: &'static str,
    pub content: &'static str,
}

// Differs from the upstream husky template: runs `npm run format` (no
// `prettier` script is ever registered) and uses POSIX `[ ]` / `2>&1` for `sh`.
const PRE_COMMIT: &str = r#"#!/usr/bin/env sh

# Check if it's a merge
git merge HEAD > /dev/null 2>&1

IS_MERGE_PROCESS=$?

if [ $IS_MERGE_PROCESS -ne 0 ];
  then
    exit $?
  fi

# Get staged files
STAGED_FILES=$(git diff --cached --name-only)

# Abort if staging area is empty
if [ -z "$STAGED_FILES" ];
  then
    exit 0
  fi

echo "🔍 Running pre-commit checks..."

# Format code with Prettier
echo "💅 Formatting code..."
npm run format

git add $STAGED_FILES

echo "✅ Pre-commit checks completed!""#;

const PREPARE_COMMIT_MSG: &str = "exec < /dev/tty && node_modules/.bin/cz --hook || true";

const COMMIT_MSG: &str = r#"#!/usr/bin/env sh
npx --no -- commitlint --edit $1"#;

const PRE_PUSH: &str = r#"#!/usr/bin/env sh
echo "🔍 Running pre-push checks..."

# Check formatting with Prettier
echo "💅 Checking formatting..."
npm run format:check

echo "✅ Pre-push checks completed!""#;

/// The hook scripts, in the order they are written
pub const HOOK_SCRIPTS: &[HookScript] = &[
    HookScript {
        name: "pre-commit",
        content: PRE_COMMIT,
    },
    HookScript {
        name: "prepare-commit-msg",
        content: PREPARE_COMMIT_MSG,
    },
    HookScript {
        name: "commit-msg",
        content: COMMIT_MSG,
    },
    HookScript {
        name: "pre-push",
        content: PRE_PUSH,
    },
];
