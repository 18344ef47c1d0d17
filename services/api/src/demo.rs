use crate::infra::{DisabledTranscriber, InMemorySchemeCatalog};
use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use govconnect::error::AppError;
use govconnect::workflows::intake::TranscriptChannel;
use govconnect::workflows::schemes::{
    seed_catalog, ApplicantProfile, CatalogImporter, ScreeningReport, SchemeScreeningService,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChannelArg {
    /// OCR text from a scanned document
    Document,
    /// Speech-to-text output from a spoken interaction
    Speech,
}

impl From<ChannelArg> for TranscriptChannel {
    fn from(value: ChannelArg) -> Self {
        match value {
            ChannelArg::Document => TranscriptChannel::Document,
            ChannelArg::Speech => TranscriptChannel::Speech,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// Path to a transcript text file
    #[arg(long)]
    pub(crate) transcript: PathBuf,
    /// Origin of the transcript
    #[arg(long, value_enum, default_value_t = ChannelArg::Speech)]
    pub(crate) channel: ChannelArg,
    /// Optional catalog CSV export; defaults to the built-in seed catalog
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
    /// Evaluation date for age checks (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional catalog CSV export; defaults to the built-in seed catalog
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
    /// Evaluation date for age checks (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

pub(crate) fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let ScreenArgs {
        transcript,
        channel,
        catalog_csv,
        as_of,
    } = args;

    let text = std::fs::read_to_string(&transcript)?;
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let (catalog, imported) = load_catalog_from_path(catalog_csv)?;
    let service = screening_service(catalog, as_of);

    let report = match service.screen_text(&text, channel.into()) {
        Ok(report) => report,
        Err(err) => {
            println!("Screening unavailable: {err}");
            return Ok(());
        }
    };

    println!(
        "Screening {} ({} transcript, evaluated {as_of})",
        transcript.display(),
        report.channel.label()
    );
    render_catalog_source(imported);
    render_screening_report(&report);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { catalog_csv, as_of } = args;

    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let (catalog, imported) = load_catalog_from_path(catalog_csv)?;
    let service = screening_service(catalog, as_of);

    println!("Scheme screening demo (evaluated {as_of})");
    render_catalog_source(imported);

    let document_text = "Name: Asha Rao\n\
                         DOB: 12/05/1962\n\
                         Gender: Female\n\
                         Occupation: Weaver\n\
                         Address: Kollam District\n\
                         State: Kerala\n\
                         Phone: +91 944 712 3456";
    println!("\nScanned enrollment form (document transcript)");
    let report = match service.screen_text(document_text, TranscriptChannel::Document) {
        Ok(report) => report,
        Err(err) => {
            println!("  Screening unavailable: {err}");
            return Ok(());
        }
    };
    render_screening_report(&report);

    let speech_text = "hello, my name is lakshmi and i am 67 years old. \
                       i live in thrissur district. i work as a weaver.";
    println!("\nHelpline recording (speech transcript)");
    let report = match service.screen_text(speech_text, TranscriptChannel::Speech) {
        Ok(report) => report,
        Err(err) => {
            println!("  Screening unavailable: {err}");
            return Ok(());
        }
    };
    render_screening_report(&report);

    Ok(())
}

fn screening_service(
    catalog: InMemorySchemeCatalog,
    as_of: NaiveDate,
) -> SchemeScreeningService<InMemorySchemeCatalog, DisabledTranscriber> {
    SchemeScreeningService::with_reference_date(
        Arc::new(catalog),
        Arc::new(DisabledTranscriber),
        as_of,
    )
}

pub(crate) fn load_catalog_from_path(
    catalog_csv: Option<PathBuf>,
) -> Result<(InMemorySchemeCatalog, bool), AppError> {
    match catalog_csv {
        Some(path) => CatalogImporter::from_path(path)
            .map(|schemes| (InMemorySchemeCatalog::from_schemes(schemes), true))
            .map_err(AppError::from),
        None => Ok((InMemorySchemeCatalog::from_schemes(seed_catalog()), false)),
    }
}

fn render_catalog_source(imported: bool) {
    if imported {
        println!("Catalog source: CSV import");
    } else {
        println!("Catalog source: built-in seed catalog");
    }
}

fn render_screening_report(report: &ScreeningReport) {
    println!("Extracted profile:");
    render_profile(&report.profile);

    if report.schemes.is_empty() {
        println!("Matched schemes: none");
    } else {
        println!("Matched schemes:");
        for scheme in &report.schemes {
            println!("  - {} | {}", scheme.title, scheme.benefits);
        }
    }
    println!("Total matches: {}", report.total_matches);
}

fn render_profile(profile: &ApplicantProfile) {
    let fields = [
        ("Name", &profile.name),
        ("Date of birth", &profile.date_of_birth),
        ("Gender", &profile.gender),
        ("Phone", &profile.phone),
        ("Address", &profile.address),
        ("Occupation", &profile.occupation),
        ("Caste", &profile.caste),
        ("State", &profile.state),
    ];
    for (label, value) in fields {
        match value {
            Some(value) => println!("  - {label}: {value}"),
            None => println!("  - {label}: (not recorded)"),
        }
    }
    if let Some(income) = profile.income {
        println!("  - Declared income: {income}");
    }
}
