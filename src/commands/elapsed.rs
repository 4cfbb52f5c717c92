//! Duration between a single in/out pair.

use crate::{
    libs::{formatter::format_duration, interval::elapsed, normalizer::normalize},
    msg_print,
};
use anyhow::Result;
use clap::Args;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ElapsedArgs {
    /// In time, e.g. "0900" or "09:00"
    #[arg(value_name = "IN")]
    in_time: String,

    /// Out time, e.g. "1730", "0600" for an overnight shift, or "2400"
    #[arg(value_name = "OUT")]
    out_time: String,
}

/// Prints the formatted interval. Times that are not real give "0h 0m".
pub fn cmd(args: ElapsedArgs) -> Result<()> {
    let in_text = normalize(&args.in_time);
    let out_text = normalize(&args.out_time);
    debug!(%in_text, %out_text, "computing interval");

    msg_print!(format_duration(&elapsed(&in_text, &out_text)));
    Ok(())
}
