#![doc = include_str!("../README.md")]

use clap::Parser;
use rule_miner::Conf;

fn main() {
    let conf = Conf::parse();
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    if let Err(e) = rule_miner::run(&conf, &mut lock) {
        eprintln!("rule_miner: {e}");
        std::process::exit(1);
    }
}
