use crate::{
    libs::{messages::Message, normalizer::normalize},
    msg_debug, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Raw text as typed into a time field, e.g. "545" or "17:3"
    #[arg(allow_hyphen_values = true)]
    raw: String,
}

pub fn cmd(args: NormalizeArgs) -> Result<()> {
    let normalized = normalize(&args.raw);
    msg_debug!(Message::NormalizedTime(args.raw.clone(), normalized.clone()));
    msg_print!(normalized);
    Ok(())
}
