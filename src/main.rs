use calculator::evaluate_expression;
use log::debug;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "calc> ";

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.is_empty() {
            break;
        }

        match evaluate_expression(&line) {
            Ok(result) => println!("{}", result),
            Err(err) => {
                debug!("Failed to evaluate {:?}: {:?}", line, err);
                println!("Error: {}", err);
            }
        }
    }

    Ok(())
}
