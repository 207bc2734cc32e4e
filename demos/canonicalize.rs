use purl_canon::PackageUrl;
use std::{env, io, process::ExitCode};

fn canonicalize(s: &str) -> bool {
    match PackageUrl::parse(s) {
        Ok(purl) => {
            println!("{purl}");
            true
        }
        Err(e) => {
            eprintln!("Error: {e}");
            false
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let ok = if args.is_empty() {
        let mut ok = true;
        for line in io::stdin().lines() {
            match line {
                Ok(line) => ok &= canonicalize(line.trim_end()),
                Err(e) => {
                    eprintln!("Error: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        ok
    } else {
        args.iter().fold(true, |ok, arg| canonicalize(arg) && ok)
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
