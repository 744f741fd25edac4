use crate::config::Opts;

use anyhow::Result;
use dialoguer::Confirm;

/// Generate the gutter in front of a message line
pub fn gen_prefix(prefix: &str) -> String {
    format!("{:>10} ", prefix)
}

pub fn ask_confirm(opts: &Opts, msg: &str) -> Result<bool> {
    if opts.yes {
        return Ok(true);
    }

    let prefix = gen_prefix("");
    let msg = format!("{prefix}{msg}");
    let res = Confirm::new().with_prompt(msg).interact()?;
    Ok(res)
}

#[macro_export]
macro_rules! msg {
    ($($arg:tt)+) => {
        print!("{}", $crate::cli::gen_prefix(""));
        println!($($arg)+);
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        print!("{}", $crate::cli::gen_prefix(&console::style("INFO").blue().bold().to_string()));
        println!($($arg)+);
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        print!("{}", $crate::cli::gen_prefix(&console::style("WARN").yellow().bold().to_string()));
        println!($($arg)+);
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        print!("{}", $crate::cli::gen_prefix(&console::style("ERROR").red().bold().to_string()));
        println!($($arg)+);
    };
}

#[macro_export]
macro_rules! due_to {
    ($($arg:tt)+) => {
        print!("{}", $crate::cli::gen_prefix(&console::style("DUE TO").yellow().bold().to_string()));
        println!($($arg)+);
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        print!("{}", $crate::cli::gen_prefix(&console::style("SUCCESS").green().bold().to_string()));
        println!($($arg)+);
    };
}
