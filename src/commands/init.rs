// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shell integration scripts

use anyhow::Result;

use crate::cli::InitShell;

const BASH_SCRIPT: &str = include_str!("../shell/linippet.bash");
const ZSH_SCRIPT: &str = include_str!("../shell/linippet.zsh");

pub fn script(shell: InitShell) -> &'static str {
    match shell {
        InitShell::Bash => BASH_SCRIPT,
        InitShell::Zsh => ZSH_SCRIPT,
    }
}

/// Run the init command
pub fn run(shell: InitShell) -> Result<()> {
    print!("{}", script(shell));
    Ok(())
}
