use clap::Parser;
use stamp_check::core::{Catalog, Resolution};
use stamp_check::utils::{logger, validation, validation::Validate};
use stamp_check::{
    CliConfig, HttpOcrSource, PlainTextSource, ShelfLifeCatalog, StampError, Verifier,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting stamp-check");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(3);
    }

    let catalog = match ShelfLifeCatalog::from_file(&config.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load catalog {}: {}", config.catalog, e);
            eprintln!("❌ {}", e);
            std::process::exit(3);
        }
    };
    tracing::debug!("Catalog loaded: {} products", catalog.len());

    let months = match catalog.shelf_life_months(&config.product) {
        Some(months) => months,
        None => {
            let e = StampError::UnknownProductError {
                name: config.product.clone(),
            };
            tracing::error!("{}", e);
            eprintln!("❌ {}", e);
            let suggestions = catalog.matching(&config.product);
            if !suggestions.is_empty() {
                eprintln!("   Did you mean: {}", suggestions.join(", "));
            }
            std::process::exit(3);
        }
    };

    let made_on = config.manufacture_date()?;
    tracing::info!(
        "Product: {} (shelf life {} months, made on {})",
        config.product,
        months,
        config.made_on
    );

    let image = match &config.image {
        Some(path) => tokio::fs::read(path).await?,
        None => Vec::new(),
    };

    let outcome = if let Some(text_path) = &config.ocr_text {
        Verifier::new(PlainTextSource::new(text_path))
            .run(made_on, months, &image)
            .await
    } else {
        let endpoint = validation::validate_required_field("ocr_endpoint", &config.ocr_endpoint)?;
        Verifier::new(HttpOcrSource::new(endpoint.clone()))
            .run(made_on, months, &image)
            .await
    };

    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Verification failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(3);
        }
    };

    if let Some(fragment) = &outcome.fragment {
        if let Some(b) = fragment.bounds {
            tracing::info!(
                "Stamp located at x {}..{}, y {}..{}",
                b.min_x,
                b.max_x,
                b.min_y,
                b.max_y
            );
        }
    }

    // "Not recognized" and "mismatch" are distinct outcomes; only a resolved
    // stamp that reads differently counts as a mismatch.
    let exit_code = match &outcome.resolution {
        Resolution::Resolved(_) if outcome.report.matched => {
            println!("✅ MATCH: stamp {}", outcome.report.target_text);
            0
        }
        Resolution::Resolved(_) => {
            println!(
                "❌ MISMATCH: stamp reads {}, target is {}",
                outcome.report.resolved_text.as_deref().unwrap_or(""),
                outcome.report.target_text
            );
            1
        }
        Resolution::NotFound => {
            eprintln!("❌ Stamp not recognized. Retake the photo or use a clearer crop.");
            2
        }
        Resolution::Ambiguous { count } => {
            eprintln!(
                "❌ {} dates detected, result unreliable. Retake with only the stamp visible.",
                count
            );
            2
        }
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
