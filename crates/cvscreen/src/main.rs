//! # cvscreen CLI
//!
//! Command-line interface for cvscreen, a resume screening pipeline.
//!
//! Resumes (PDFs) are classified into suitability categories with a
//! TF-IDF + one-vs-rest logistic regression pipeline; a fixed probability
//! threshold then automates the accept / reject / manual-review decision.
//!
//! ## Usage
//!
//! ```bash
//! # Train from the labeled dataset and persist the pipeline artifact
//! cvscreen --train
//!
//! # Classify one resume against the trained pipeline
//! cvscreen --predict candidato.pdf
//! ```
//!
//! With no flags the help text is printed. `--train` takes precedence when
//! both flags are given.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use cvscreen_extract::PdfExtractor;
use cvscreen_triage::{Predictor, Trainer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "cvscreen")]
#[command(about = "Entrena o predice CVs con umbrales de decisión")]
#[command(version)]
struct Cli {
    /// Train the pipeline from the labeled dataset
    #[arg(long)]
    train: bool,

    /// Path to a resume PDF to classify
    #[arg(long, value_name = "PDF")]
    predict: Option<PathBuf>,

    /// Path to config file (default: ~/.config/cvscreen/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = Config::load_from(cli.config).context("Failed to load config")?;
    let extractor = Arc::new(PdfExtractor::new());

    if cli.train {
        let trainer = Trainer::new(&config.dataset_path, &config.model_path, extractor);
        let artifact = trainer.train().context("Training failed")?;
        println!("Modelo entrenado y guardado en: {}", artifact.display());
    } else if let Some(pdf_path) = cli.predict {
        let predictor = Predictor::new(&config.model_path, extractor, config.thresholds());

        match predictor.predict(&pdf_path).context("Prediction failed")? {
            Some(report) => {
                println!("Probabilidades:");
                for cp in &report.prediction.probabilities {
                    println!(" - {}: {:.1}%", cp.label, cp.probability * 100.0);
                }

                if let Some(top) = &report.top {
                    println!();
                    println!("Predicción base: {}", top.label);
                }

                println!("Decisión automática: {}", report.decision);
            }
            None => {
                println!("Error: modelo no encontrado. Ejecuta primero con --train.");
            }
        }
    } else {
        Cli::command().print_help()?;
    }

    Ok(())
}
