use bench_compare::cli::{execute_compare, parse_args};
use bench_compare::core::CompareError;
use std::process;

fn main() {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(error) => exit_with(&error),
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(error) = execute_compare(&cli, &mut stdout) {
        match error.downcast_ref::<CompareError>() {
            Some(compare_error) => exit_with(compare_error),
            None => {
                eprintln!("error: {error:#}");
                process::exit(1);
            }
        }
    }
}

fn exit_with(error: &CompareError) -> ! {
    match error {
        // clap が整形済みのメッセージをそのまま出す
        CompareError::UsageError { message } => eprint!("{message}"),
        other => {
            eprintln!("error: {other}");
            if let Some(suggestion) = other.suggestion() {
                eprintln!("hint: {suggestion}");
            }
        }
    }
    process::exit(error.exit_code());
}
