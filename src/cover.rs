use std::path::Path;
use std::process::Command;

use anyhow::Context as _;

use crate::markdown;

/// Produces PDF bytes for a Markdown cover source.
pub trait CoverRenderer {
    fn render(&self, markdown_path: &Path) -> anyhow::Result<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub bin: String,
    pub script: Option<String>,
}

impl RenderConfig {
    pub fn from_env() -> Self {
        let bin = std::env::var("PDFPICK_RENDER_BIN").unwrap_or_else(|_| "node".to_owned());
        let script = std::env::var("PDFPICK_RENDER_SCRIPT")
            .unwrap_or_else(|_| "../puppeteer_render.js".to_owned());
        // An empty script means the binary takes the html/pdf paths directly.
        let script = (!script.is_empty()).then_some(script);
        Self { bin, script }
    }
}

/// Renders a cover by templating the Markdown into styled HTML and handing
/// it to the external HTML-to-PDF tool.
pub struct HtmlPdfRenderer {
    config: RenderConfig,
}

impl HtmlPdfRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }
}

impl CoverRenderer for HtmlPdfRenderer {
    fn render(&self, markdown_path: &Path) -> anyhow::Result<Vec<u8>> {
        let contents = std::fs::read_to_string(markdown_path)
            .with_context(|| format!("read cover markdown: {}", markdown_path.display()))?;
        let html = markdown::to_styled_html(&contents);

        let html_file = tempfile::Builder::new()
            .suffix(".html")
            .tempfile()
            .context("create cover html temp file")?;
        std::fs::write(html_file.path(), html).context("write cover html")?;

        let pdf_file = tempfile::Builder::new()
            .suffix(".pdf")
            .tempfile()
            .context("create cover pdf temp file")?;

        let mut cmd = Command::new(&self.config.bin);
        if let Some(script) = self.config.script.as_deref() {
            cmd.arg(script);
        }
        cmd.arg(html_file.path()).arg(pdf_file.path());

        tracing::info!(
            bin = %self.config.bin,
            cover = %markdown_path.display(),
            "render cover"
        );

        let status = cmd
            .status()
            .with_context(|| format!("spawn renderer: {}", self.config.bin))?;
        if !status.success() {
            anyhow::bail!("renderer failed ({status})");
        }

        std::fs::read(pdf_file.path()).context("read rendered cover pdf")
    }
}
