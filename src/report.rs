//! Console rendering of extracted listings

use std::fmt;
use std::io::Write;

use crate::error::Result;
use crate::listing::{write_pairs, ListingRecord};
use crate::runner::{ListingOutcome, OutcomeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Human readable block for one listing
pub struct TextReport<'a>(pub &'a ListingRecord);

struct Features<'a>(&'a ListingRecord);

impl fmt::Display for Features<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pairs(f, &self.0.other_features)
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        writeln!(f, "Name: {}", record.name)?;
        writeln!(f, "Address: {}", record.address)?;
        writeln!(f, "Contact: {}", record.telephone)?;
        writeln!(f, "Website: {}", record.website)?;
        writeln!(f, "Pricing: {}", record.price_range)?;
        writeln!(f, "Menu: {}", record.menu_link)?;
        writeln!(f, "Hours: {}", record.hours)?;
        writeln!(f, "Other Details: {}", Features(record))
    }
}

pub fn write_report<W: Write>(out: &mut W, outcomes: &[ListingOutcome], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, outcomes)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for outcome in outcomes {
                writeln!(out)?;
                match &outcome.result {
                    OutcomeResult::Listing(record) => write!(out, "{}", TextReport(record))?,
                    OutcomeResult::Error(reason) => {
                        writeln!(out, "Skipped {}: {reason}", outcome.url)?
                    }
                }
            }
        }
    }
    Ok(())
}
