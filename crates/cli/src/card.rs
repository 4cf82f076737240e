use clap::{Parser, Subcommand};
use tillpoint_types::{CardBrand, CardNumberError, card_brand, is_luhn_valid};

#[derive(Subcommand, PartialEq, Clone, Debug)]
pub enum CardCommand {
    /// Check a card number offline: brand and Luhn checksum
    Check(CheckCommand),
}

#[derive(Parser, PartialEq, Clone, Debug)]
pub struct CheckCommand {
    /// Card number, digits only
    pub number: String,

    /// Print the result as JSON
    #[arg(long = "json")]
    pub json: bool,
}

/// Offline verdict on a card number
#[derive(Debug, PartialEq, serde::Serialize)]
pub struct CardReport {
    pub brand: CardBrand,
    pub luhn_valid: bool,
}

impl CardReport {
    pub fn for_number(number: &str) -> Result<Self, CardNumberError> {
        Ok(Self {
            luhn_valid: is_luhn_valid(number)?,
            brand: card_brand(number),
        })
    }
}

impl CheckCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let report = CardReport::for_number(&self.number)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("brand: {}", report.brand);
            println!(
                "luhn:  {}",
                if report.luhn_valid { "valid" } else { "invalid" }
            );
        }
        Ok(())
    }
}
