use anyhow::Result;

use lilc_drv::{Config, Session};

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(2);
        }
    }
}

fn run() -> Result<i32> {
    let config = Config::from_args(std::env::args().skip(1))?;
    let mut session = Session::new(config);
    let outcome = session.run()?;
    Ok(if outcome.success() { 0 } else { 1 })
}
