use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context as _;

/// Binary page operations delegated to an external tool. Pages are
/// 1-indexed as authored in the configuration and passed through unchanged.
pub trait PageTool {
    fn extract(&self, input: &Path, pages: &[u32], output: &Path) -> anyhow::Result<()>;
    fn merge(&self, inputs: &[PathBuf], output: &Path) -> anyhow::Result<()>;
}

/// Drives the `pdftk` command line: `<input> cat <pages..> output <out>` for
/// extraction, `<inputs..> cat output <out>` for merging.
#[derive(Debug, Clone)]
pub struct Pdftk {
    bin: String,
}

impl Pdftk {
    pub fn from_env() -> Self {
        let bin = std::env::var("PDFPICK_PDFTK_BIN").unwrap_or_else(|_| "pdftk".to_owned());
        Self { bin }
    }

    fn run(&self, cmd: &mut Command) -> anyhow::Result<()> {
        let status = cmd
            .status()
            .with_context(|| format!("spawn pdftk: {}", self.bin))?;
        if !status.success() {
            anyhow::bail!("pdftk failed ({status})");
        }
        Ok(())
    }
}

impl PageTool for Pdftk {
    fn extract(&self, input: &Path, pages: &[u32], output: &Path) -> anyhow::Result<()> {
        let mut cmd = Command::new(&self.bin);
        cmd.arg(input).arg("cat");
        for page in pages {
            cmd.arg(page.to_string());
        }
        cmd.arg("output").arg(output);

        tracing::info!(input = %input.display(), ?pages, "extract pages");
        self.run(&mut cmd)
    }

    fn merge(&self, inputs: &[PathBuf], output: &Path) -> anyhow::Result<()> {
        let mut cmd = Command::new(&self.bin);
        for input in inputs {
            cmd.arg(input);
        }
        cmd.arg("cat").arg("output").arg(output);

        tracing::info!(count = inputs.len(), output = %output.display(), "merge artifacts");
        self.run(&mut cmd)
    }
}
