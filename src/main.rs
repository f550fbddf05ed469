use anyhow::Result;
use hello_cli::greeter;
use std::env;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    greeter::run(&args);
    Ok(())
}
