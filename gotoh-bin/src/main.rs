use clap::error::ErrorKind;
use clap::Parser;

use gotoh::{FullMatrix, LinearSpace};

mod cli;
use cli::Cli;

fn main() {
    env_logger::init();

    // Anything but two sequences (plus known flags) prints the usage line
    // on stdout and exits with status 1. Help keeps clap's behavior.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => e.exit(),
        Err(_) => {
            let prog = std::env::args().next().unwrap_or_else(|| "gotoh".into());
            println!("error: {prog} sequence1 sequence2");
            std::process::exit(1);
        }
    };

    let a = cli.seq_a.as_bytes();
    let b = cli.seq_b.as_bytes();
    let model = cli.params.model();

    let result = if cli.params.linear {
        LinearSpace::new(model).cost(a, b)
    } else {
        FullMatrix::new(model).align(a, b).map(|(cost, matrices)| {
            print!(
                "Array C\n{}\nArray D\n{}\nArray I\n{}",
                matrices.c, matrices.d, matrices.i
            );
            cost
        })
    };

    let cost = match result {
        Ok(cost) => cost,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    print!("Cost is {cost:.2}");

    if let Some(output) = &cli.output {
        let report = serde_json::json!({ "cost": cost, "params": cli.params });
        std::fs::write(output, report.to_string()).unwrap();
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn cli_test() {
        <super::Cli as clap::CommandFactory>::command().debug_assert();
    }
}
