use anyhow::{Context, Result};
use clap::Parser;

use proposal_docs::cli::Args;
use proposal_docs::config::Settings;
use proposal_docs::{generate, DocumentKind};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .init();

    let settings = Settings::from_args(&args);

    println!("Generating PDFs...");
    println!("Output directory: {}\n", settings.output_dir.display());

    for kind in DocumentKind::ALL {
        let (_, size) = generate(kind, &settings.output_dir).with_context(|| {
            format!(
                "Failed to generate {} ({})",
                kind,
                settings.output_dir.join(kind.file_name()).display()
            )
        })?;
        println!("  [OK] {} ({} bytes)", kind.file_name(), size);
    }

    println!(
        "\nAll {} PDFs generated successfully.",
        DocumentKind::ALL.len()
    );

    Ok(())
}
