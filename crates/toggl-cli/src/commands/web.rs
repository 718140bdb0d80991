//! Web command: open the Toggl website in the configured browser.

use std::process::Command;

use anyhow::{Context, Result, bail};

use crate::Config;

const WWW_ADDRESS: &str = "https://www.toggl.com/";

/// Runs the web command.
pub fn run(config: &Config) -> Result<()> {
    let Some(browser_cmd) = &config.web_browser_cmd else {
        bail!("no web_browser_cmd configured; set it in the config file");
    };

    let mut parts = browser_cmd.split_whitespace();
    let Some(program) = parts.next() else {
        bail!("web_browser_cmd is empty");
    };

    let status = Command::new(program)
        .args(parts)
        .arg(WWW_ADDRESS)
        .status()
        .with_context(|| format!("failed to launch '{program}'"))?;

    if !status.success() {
        bail!("'{browser_cmd}' exited with {status}");
    }

    Ok(())
}
