use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::cli::Cli;
use crate::config;
use crate::cover::{CoverRenderer, HtmlPdfRenderer, RenderConfig};
use crate::pages;
use crate::paths;
use crate::pdftk::{PageTool, Pdftk};

/// Distinguishes config-defaulted outputs from siblings writing to the same
/// base name. Explicit `--output` paths are never suffixed.
const OUTPUT_SUFFIX: &str = "_rust";

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = PathBuf::from(&cli.yaml);
    let config = config::load(&config_path)?;

    let input = paths::resolve_input(cli.input.as_deref(), config.file.as_deref(), &config_path)
        .unwrap_or_default();
    let output = paths::resolve_output(
        cli.output.as_deref(),
        config.output.as_deref(),
        &config_path,
        OUTPUT_SUFFIX,
    );
    let cover = paths::resolve_cover(
        cli.markdown.as_deref(),
        config.append_first_page.as_deref(),
        &config_path,
    );
    let selected = pages::select_pages(&config.pages);

    if !input.exists() {
        // A missing input is a user message, not an operational failure.
        println!("Error: '{}' not found.", input.display());
        return Ok(());
    }

    let Some(output) = output else {
        tracing::debug!("no output path configured, nothing to assemble");
        return Ok(());
    };

    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        cover = ?cover,
        ?selected,
        "resolved assembly"
    );

    let renderer = HtmlPdfRenderer::new(RenderConfig::from_env());
    let tool = Pdftk::from_env();
    assemble(&input, &output, &selected, cover.as_deref(), &renderer, &tool)?;

    println!("Saved to: {}", output.display());
    Ok(())
}

/// Produces the output document from at most two intermediate artifacts,
/// rendered cover first, extracted pages second. Zero artifacts is a no-op;
/// a single artifact is byte-copied; two are merged in recorded order.
pub fn assemble(
    input: &Path,
    output: &Path,
    selected: &[u32],
    cover: Option<&Path>,
    renderer: &dyn CoverRenderer,
    tool: &dyn PageTool,
) -> anyhow::Result<()> {
    // TempDir removal on drop covers every return path, error paths included.
    let workspace = tempfile::tempdir().context("create workspace")?;
    let mut artifacts: Vec<PathBuf> = Vec::new();

    if let Some(cover) = cover {
        let bytes = renderer.render(cover).context("render cover")?;
        let cover_pdf = workspace.path().join("cover.pdf");
        std::fs::write(&cover_pdf, bytes)
            .with_context(|| format!("write cover artifact: {}", cover_pdf.display()))?;
        artifacts.push(cover_pdf);
    }

    if !selected.is_empty() {
        let extracted_pdf = workspace.path().join("extracted.pdf");
        tool.extract(input, selected, &extracted_pdf)
            .context("extract pages")?;
        artifacts.push(extracted_pdf);
    }

    match artifacts.as_slice() {
        [] => {}
        [single] => {
            std::fs::copy(single, output)
                .with_context(|| format!("copy artifact to output: {}", output.display()))?;
        }
        _ => {
            tool.merge(&artifacts, output).context("merge artifacts")?;
        }
    }

    Ok(())
}
